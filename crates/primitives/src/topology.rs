//! The shape of the hierarchy: how many regions there are and how many zones each region holds.

use std::iter;

use serde::{Deserialize, Serialize};

use crate::{errors::LocationError, location::Location};

/// Default number of regions under prime.
pub const DEFAULT_NUM_REGIONS: u8 = 3;

/// Default number of zones in each region.
pub const DEFAULT_NUM_ZONES: u8 = 3;

/// The cardinalities of the second and third tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    /// Number of second-tier partitions.
    #[serde(default = "default_regions")]
    pub regions: u8,

    /// Number of third-tier partitions inside each region.
    #[serde(default = "default_zones")]
    pub zones: u8,
}

const fn default_regions() -> u8 {
    DEFAULT_NUM_REGIONS
}

const fn default_zones() -> u8 {
    DEFAULT_NUM_ZONES
}

impl Default for Topology {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_REGIONS, DEFAULT_NUM_ZONES)
    }
}

impl Topology {
    /// Creates a topology with `regions` regions of `zones` zones each.
    pub const fn new(regions: u8, zones: u8) -> Self {
        Self { regions, zones }
    }

    /// Total number of locations: `1 + R + R * Z`.
    pub const fn num_locations(&self) -> usize {
        let regions = self.regions as usize;
        1 + regions + regions * self.zones as usize
    }

    /// Whether every index of `location` is within this topology.
    pub const fn contains(&self, location: &Location) -> bool {
        match *location {
            Location::Prime => true,
            Location::Region(r) => r < self.regions,
            Location::Zone(r, z) => r < self.regions && z < self.zones,
        }
    }

    /// Builds a location from its indices, checking them against this topology.
    pub fn location(&self, indices: &[u8]) -> Result<Location, LocationError> {
        let location = Location::from_indices(indices)?;

        if let Some(index) = location.region_index() {
            if index >= self.regions {
                return Err(LocationError::RegionOutOfRange {
                    index,
                    regions: self.regions,
                });
            }
        }

        if let Some(index) = location.zone_index() {
            if index >= self.zones {
                return Err(LocationError::ZoneOutOfRange {
                    index,
                    zones: self.zones,
                });
            }
        }

        Ok(location)
    }

    /// Every location of the topology in walking order: prime, then the regions in ascending
    /// order, then the zones ordered by `(region, zone)`.
    pub fn locations(&self) -> impl Iterator<Item = Location> {
        let Self { regions, zones } = *self;

        let regions_iter = (0..regions).map(Location::Region);
        let zones_iter =
            (0..regions).flat_map(move |r| (0..zones).map(move |z| Location::Zone(r, z)));

        iter::once(Location::Prime)
            .chain(regions_iter)
            .chain(zones_iter)
    }
}

//! Positions in the three-tier node hierarchy.

use std::{fmt, str::FromStr};

use crate::errors::LocationError;

/// One of the three levels of the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// The single top-level location.
    Prime,

    /// A second-tier partition.
    Region,

    /// A third-tier partition inside a region.
    Zone,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Prime => write!(f, "prime"),
            Tier::Region => write!(f, "region"),
            Tier::Zone => write!(f, "zone"),
        }
    }
}

/// A position in the hierarchy, identified by zero, one or two indices.
///
/// The canonical name (see [`Location::name`]) is both the label printed next to a node and the
/// input of the key tweak, so it must stay stable: `prime`, `region-<r>` and `zone-<r>-<z>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Location {
    /// The top tier.
    Prime,

    /// The region with the given index.
    Region(u8),

    /// The zone with the given index inside the given region.
    Zone(u8, u8),
}

impl Location {
    /// The top-tier location.
    pub const fn prime() -> Self {
        Self::Prime
    }

    /// The second-tier location with index `region`.
    pub const fn region(region: u8) -> Self {
        Self::Region(region)
    }

    /// The third-tier location `zone` inside `region`.
    pub const fn zone(region: u8, zone: u8) -> Self {
        Self::Zone(region, zone)
    }

    /// Builds a location from its index sequence.
    ///
    /// Only the length is checked here, use [`Topology::location`](crate::Topology::location) to
    /// also check the indices against a topology.
    pub fn from_indices(indices: &[u8]) -> Result<Self, LocationError> {
        match *indices {
            [] => Ok(Self::Prime),
            [region] => Ok(Self::Region(region)),
            [region, zone] => Ok(Self::Zone(region, zone)),
            _ => Err(LocationError::TooDeep(indices.len())),
        }
    }

    /// The tier this location belongs to.
    pub const fn tier(&self) -> Tier {
        match self {
            Self::Prime => Tier::Prime,
            Self::Region(_) => Tier::Region,
            Self::Zone(..) => Tier::Zone,
        }
    }

    /// The region index, if this is not the prime location.
    pub const fn region_index(&self) -> Option<u8> {
        match self {
            Self::Prime => None,
            Self::Region(r) | Self::Zone(r, _) => Some(*r),
        }
    }

    /// The zone index, if this is a zone.
    pub const fn zone_index(&self) -> Option<u8> {
        match self {
            Self::Zone(_, z) => Some(*z),
            _ => None,
        }
    }

    /// The index sequence of this location; its length is the depth in the hierarchy.
    pub fn indices(&self) -> Vec<u8> {
        match self {
            Self::Prime => vec![],
            Self::Region(r) => vec![*r],
            Self::Zone(r, z) => vec![*r, *z],
        }
    }

    /// The canonical name of this location.
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prime => write!(f, "prime"),
            Self::Region(r) => write!(f, "region-{r}"),
            Self::Zone(r, z) => write!(f, "zone-{r}-{z}"),
        }
    }
}

impl FromStr for Location {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LocationError::InvalidName(s.to_string());

        // only the canonical decimal rendering is accepted so that names round-trip exactly
        let index = |part: &str| -> Result<u8, LocationError> {
            let idx: u8 = part.parse().map_err(|_| invalid())?;
            match idx.to_string() == part {
                true => Ok(idx),
                false => Err(invalid()),
            }
        };

        if s == "prime" {
            return Ok(Self::Prime);
        }

        if let Some(rest) = s.strip_prefix("region-") {
            return Ok(Self::Region(index(rest)?));
        }

        if let Some(rest) = s.strip_prefix("zone-") {
            let (region, zone) = rest.split_once('-').ok_or_else(invalid)?;
            return Ok(Self::Zone(index(region)?, index(zone)?));
        }

        Err(invalid())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn canonical_names() {
        assert_eq!(Location::prime().name(), "prime");
        assert_eq!(Location::region(0).name(), "region-0");
        assert_eq!(Location::region(2).name(), "region-2");
        assert_eq!(Location::zone(1, 0).name(), "zone-1-0");
        assert_eq!(Location::zone(12, 7).name(), "zone-12-7");
    }

    #[test]
    fn tiers_and_indices() {
        assert_eq!(Location::prime().tier(), Tier::Prime);
        assert_eq!(Location::region(4).tier(), Tier::Region);
        assert_eq!(Location::zone(4, 1).tier(), Tier::Zone);

        assert_eq!(Location::prime().indices(), Vec::<u8>::new());
        assert_eq!(Location::region(4).indices(), vec![4]);
        assert_eq!(Location::zone(4, 1).indices(), vec![4, 1]);

        assert_eq!(Location::zone(4, 1).region_index(), Some(4));
        assert_eq!(Location::zone(4, 1).zone_index(), Some(1));
        assert_eq!(Location::region(4).zone_index(), None);
        assert_eq!(Location::prime().region_index(), None);
    }

    #[test]
    fn from_indices_rejects_deep_paths() {
        assert_eq!(Location::from_indices(&[]), Ok(Location::prime()));
        assert_eq!(Location::from_indices(&[2]), Ok(Location::region(2)));
        assert_eq!(Location::from_indices(&[2, 1]), Ok(Location::zone(2, 1)));
        assert_eq!(
            Location::from_indices(&[2, 1, 0]),
            Err(LocationError::TooDeep(3))
        );
    }

    #[test]
    fn parse_rejects_non_canonical_names() {
        let names = [
            "",
            "Prime",
            "region-",
            "region-01",
            "region-+1",
            "zone-1",
            "zone-1-",
            "zone-256-0",
            "cyprus1",
        ];
        for name in names {
            assert!(name.parse::<Location>().is_err(), "{name:?} should not parse");
        }
    }

    proptest! {
        #[test]
        fn names_round_trip(r in any::<u8>(), z in any::<u8>()) {
            for loc in [Location::prime(), Location::region(r), Location::zone(r, z)] {
                prop_assert_eq!(loc.name().parse::<Location>(), Ok(loc));
            }
        }
    }
}

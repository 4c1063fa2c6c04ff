//! Errors for the node hierarchy types.

use thiserror::Error;

/// Error while building or parsing a [`Location`](crate::Location).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// More than two indices were supplied.
    #[error("a location has at most 2 indices, got {0}")]
    TooDeep(usize),

    /// The region index is not below the number of regions.
    #[error("region index {index} out of range, topology has {regions} regions")]
    RegionOutOfRange {
        /// The offending region index.
        index: u8,
        /// Number of regions in the topology.
        regions: u8,
    },

    /// The zone index is not below the number of zones per region.
    #[error("zone index {index} out of range, topology has {zones} zones per region")]
    ZoneOutOfRange {
        /// The offending zone index.
        index: u8,
        /// Number of zones per region in the topology.
        zones: u8,
    },

    /// The string is not the canonical name of any location.
    #[error("invalid location name: {0:?}")]
    InvalidName(String),
}

//! Loads the topology the tool walks.

use std::{fs, io, path::Path};

use nodekey_primitives::Topology;
use thiserror::Error;

use crate::cli::Cli;

/// Error while loading the params file.
#[derive(Debug, Error)]
pub(crate) enum ParamsError {
    #[error("could not read params file {path}: {source}")]
    Io { path: String, source: io::Error },

    #[error("invalid params file {path}: {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// Reads a [`Topology`] from a TOML file.
pub(crate) fn load_topology(path: &Path) -> Result<Topology, ParamsError> {
    let text = fs::read_to_string(path).map_err(|source| ParamsError::Io {
        path: path.display().to_string(),
        source,
    })?;

    toml::from_str(&text).map_err(|source| ParamsError::Toml {
        path: path.display().to_string(),
        source,
    })
}

/// The topology selected on the command line: the params file (or the default one) with the
/// `--regions`/`--zones` overrides applied.
pub(crate) fn topology_from_cli(cli: &Cli) -> Result<Topology, ParamsError> {
    let mut topology = match &cli.params {
        Some(path) => load_topology(path)?,
        None => Topology::default(),
    };

    if let Some(regions) = cli.regions {
        topology.regions = regions;
    }
    if let Some(zones) = cli.zones {
        topology.zones = zones;
    }

    Ok(topology)
}

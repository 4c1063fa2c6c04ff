//! Derives a family of per-location node keys from each base key file given on the command line
//! and prints the enode locator of every derived key.

mod cli;
mod output;
mod params;
mod walker;

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use nodekey_common::logging::{self, LoggerConfig};
use tracing::info;

use crate::cli::Cli;

fn main() -> Result<()> {
    logging::init(LoggerConfig::with_base_name("nodekey-tool"));

    let cli = Cli::parse();
    if cli.files.is_empty() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let topology = params::topology_from_cli(&cli)?;
    info!(
        mode = %cli.mode,
        regions = topology.regions,
        zones = topology.zones,
        files = cli.files.len(),
        "deriving node keys"
    );

    let mut stdout = io::stdout().lock();
    walker::run(&cli.files, &topology, cli.mode, &mut stdout)?;

    Ok(())
}

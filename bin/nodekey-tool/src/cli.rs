//! Parses command-line arguments for the nodekey tool.

use std::{fmt::Display, path::PathBuf};

use clap::{crate_version, Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "nodekey-tool",
    about = "Derives per-location node keys from base key files and prints their enode locators",
    version = crate_version!()
)]
pub(crate) struct Cli {
    #[arg(
        value_name = "FILE",
        help = "Base key files; the name of each file's parent directory is used as the node's IP"
    )]
    pub(crate) files: Vec<PathBuf>,

    #[arg(
        long,
        short = 'm',
        value_enum,
        env = "NODEKEY_MODE",
        help = "How to print the enodes: one line per location (`flat`) or JSON grouped by location (`grouped`, alias: json)",
        default_value_t = OutputMode::Flat
    )]
    pub(crate) mode: OutputMode,

    #[arg(
        long,
        short = 'p',
        env = "NODEKEY_PARAMS",
        help = "TOML file with the topology (`regions`, `zones`)"
    )]
    pub(crate) params: Option<PathBuf>,

    #[arg(long, help = "Number of regions, overrides the params file")]
    pub(crate) regions: Option<u8>,

    #[arg(long, help = "Number of zones per region, overrides the params file")]
    pub(crate) zones: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputMode {
    /// Print `<location>:\t\tenode://...` lines as each file is processed.
    Flat,

    /// Print one JSON object mapping each location to the enodes of all files.
    #[value(alias = "json")]
    Grouped,
}

impl Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputMode::Flat => write!(f, "flat"),
            OutputMode::Grouped => write!(f, "grouped"),
        }
    }
}

//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::lookup::CacheStrategy;

/// ipglance: local and external IP display
///
/// Shows the best local IPv4 address and the external address
/// (with geolocation), refreshing the external lookup adaptively.
#[derive(Debug, Parser)]
#[command(name = "ipglance")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Hide the local address part
    #[arg(long = "hide-local")]
    pub hide_local: bool,

    /// Hide the external address part
    #[arg(long = "hide-external")]
    pub hide_external: bool,

    /// Preferred adapter, by friendly name or stable id
    #[arg(long, value_name = "NAME")]
    pub adapter: Option<String>,

    /// Separator between the local and external parts
    #[arg(long)]
    pub separator: Option<String>,

    /// Placeholder for unresolvable addresses
    #[arg(long)]
    pub fallback: Option<String>,

    /// Cache refresh strategy
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Standard refresh interval in seconds
    #[arg(long = "refresh", value_name = "SECS")]
    pub refresh_secs: Option<u64>,

    /// Fast refresh interval after a network change, in seconds
    #[arg(long = "fast-refresh", value_name = "SECS")]
    pub fast_refresh_secs: Option<u64>,

    /// Maximum refresh interval on a stable network, in seconds
    #[arg(long = "max-refresh", value_name = "SECS")]
    pub max_refresh_secs: Option<u64>,

    /// Number of fast-mode cycles after a network change
    #[arg(long = "adaptive-cycles", value_name = "N")]
    pub adaptive_cycles: Option<u32>,

    /// Lookup service host
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Display tick interval in seconds
    #[arg(long = "poll-interval", value_name = "SECS")]
    pub poll_interval: Option<u64>,

    /// Print the display line once and exit
    #[arg(long)]
    pub once: bool,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Parses arguments from the process environment.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Subcommands for ipglance
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "ipglance.toml")]
        output: PathBuf,
    },
}

/// Cache strategy as a CLI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Fixed refresh interval
    Fixed,
    /// Adaptive interval, shortened after network changes
    Adaptive,
    /// Refresh driven by network changes, with a periodic safety net
    NetworkEvent,
    /// Adaptive plus event-driven refresh (recommended)
    Hybrid,
}

impl From<StrategyArg> for CacheStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Fixed => Self::Fixed,
            StrategyArg::Adaptive => Self::Adaptive,
            StrategyArg::NetworkEvent => Self::NetworkEvent,
            StrategyArg::Hybrid => Self::Hybrid,
        }
    }
}

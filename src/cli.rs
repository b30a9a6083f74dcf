//! CLI surface for goals.
//!
//! There is exactly one mode, running the TUI, so the surface is flags
//! only: where the config comes from and how chatty the log file is.

use std::path::PathBuf;

use clap::Parser;

/// Goals — capture short goals, clear them as you go.
#[derive(Debug, Parser)]
#[command(name = "goals", version)]
pub struct Cli {
    /// Read this config file instead of `~/.goals/config.toml`.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log at debug level instead of info.
    #[arg(long)]
    pub verbose: bool,
}

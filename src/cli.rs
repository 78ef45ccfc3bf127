//! Command-line argument parsing for myq.
//!
//! The tool is interactive: connection parameters live in the connect
//! form, not on the command line. The only flag points at an alternate
//! config file for form prefill values.

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// A terminal MySQL query console.
#[derive(Parser, Debug)]
#[command(name = "myq")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to load.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }
}

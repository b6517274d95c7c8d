//! Command-line argument definitions for the Skillpath CLI.
//!
//! This module defines the [`Args`] structure parsed from the command
//! line using [`clap`]. Arguments control the evaluated pattern, output
//! destination, configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Skillpath build-order tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The build-order pattern to evaluate
    #[arg(help = "Build-order pattern, e.g. \"(0)1[23]\"")]
    pub pattern: String,

    /// Path to the output JSON file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

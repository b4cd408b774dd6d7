//! Command-line argument definitions for the Ordinal CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, the output base path and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Ordinal tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input TOML document
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file, one path per line (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Prefix for every output path, overriding `output.base_path`
    #[arg(long)]
    pub base_path: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

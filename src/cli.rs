// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for sybilscan.
//!
//! Uses clap's derive API. The tool performs exactly one operation, so there
//! are no subcommands, only global flags.

use std::path::PathBuf;

use clap::Parser;

/// Check your wallet addresses for sybil exposure.
///
/// Loads your wallet list, checks it against the initial flagged list, then
/// scans every issue of the LayerZero-Labs/sybil-report repository and
/// writes a per-issue summary.csv in the working directory.
#[derive(Parser)]
#[command(name = "sybilscan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress informational log output
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Enable debug-level log output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Path to the configuration file (default: sybilscan.toml in the working directory)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

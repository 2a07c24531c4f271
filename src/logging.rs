// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the sybilscan CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging on
//! stderr. Progress and result messages go to stdout via `println!` and are
//! not affected by the log level.
//!
//! # Examples
//!
//! ```bash
//! # Default: info level for sybilscan, warn for dependencies
//! cargo run
//!
//! # Debug output for troubleshooting
//! RUST_LOG=sybilscan=debug cargo run
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging subsystem.
///
/// Defaults to `sybilscan=info` with warn-level output from the GitHub
/// client. `--quiet` lowers sybilscan to warn, `--verbose` raises it to
/// debug. The `RUST_LOG` environment variable overrides everything.
pub fn init_logging(quiet: bool, verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let default_filter = if verbose {
        "sybilscan=debug,octocrab=warn"
    } else if quiet {
        "sybilscan=warn,octocrab=warn"
    } else {
        "sybilscan=info,octocrab=warn"
    };
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

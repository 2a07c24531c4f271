// SPDX-License-Identifier: Apache-2.0

//! Error types for the sybilscan CLI.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.
//! Every variant is fatal; the process is the unit of failure and `main` is
//! the single place that turns an error into a non-zero exit.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during a scan run.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Configuration could not be loaded or a required setting is missing.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// An input CSV (wallet list or initial flagged list) could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    InputFile {
        /// Path of the file that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The wallet CSV yielded zero addresses.
    #[error("no valid wallet address found in {}", path.display())]
    EmptyWalletSet {
        /// Path of the wallet CSV.
        path: PathBuf,
    },

    /// The summary CSV could not be created or written.
    #[error("Failed to write summary file {}: {source}", path.display())]
    Summary {
        /// Path of the summary file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// GitHub API error from octocrab.
    #[error("GitHub API error: {message}")]
    GitHub {
        /// Error message.
        message: String,
    },

    /// No GitHub token was found in the configuration or environment.
    #[error(
        "No GitHub token found - set github.token in sybilscan.toml or the GITHUB_TOKEN environment variable"
    )]
    NotAuthenticated,
}

impl From<octocrab::Error> for ScanError {
    fn from(err: octocrab::Error) -> Self {
        ScanError::GitHub {
            message: err.to_string(),
        }
    }
}

impl From<config::ConfigError> for ScanError {
    fn from(err: config::ConfigError) -> Self {
        ScanError::Config {
            message: err.to_string(),
        }
    }
}

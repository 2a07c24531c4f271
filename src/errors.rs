// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Provides a formatting layer that downcasts `anyhow::Error` to
//! [`ScanError`] and adds a hint for each error type, keeping structured
//! error data separate from user-facing presentation.

use anyhow::Error;

use crate::config::DEFAULT_CONFIG_FILE;
use crate::error::ScanError;

/// Formats an error for CLI display with helpful hints.
///
/// Downcasts `anyhow::Error` to [`ScanError`] and appends a variant-specific
/// hint. If the error is not a `ScanError`, returns the original message.
pub fn format_error(error: &Error) -> String {
    if let Some(scan_err) = error.downcast_ref::<ScanError>() {
        match scan_err {
            ScanError::Config { message: _ } => {
                format!(
                    "{scan_err}\n\nTip: settings come from {DEFAULT_CONFIG_FILE} in the working directory or SYBILSCAN_* environment variables."
                )
            }
            ScanError::InputFile { .. } => {
                format!("{scan_err}\n\nTip: check the paths configured under [inputs].")
            }
            ScanError::EmptyWalletSet { .. } => {
                format!(
                    "{scan_err}\n\nTip: the wallet file must contain one address per row in the first column."
                )
            }
            ScanError::Summary { .. } => {
                format!("{scan_err}\n\nTip: check that the working directory is writable.")
            }
            ScanError::GitHub { message: _ } => {
                format!("{scan_err}\n\nTip: check your GitHub token and network connection.")
            }
            ScanError::NotAuthenticated => scan_err.to_string(),
        }
    } else {
        // Not a ScanError, return the original error chain
        error.to_string()
    }
}

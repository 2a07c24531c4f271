// SPDX-License-Identifier: Apache-2.0

//! Configuration management for the sybilscan CLI.
//!
//! Provides layered configuration from a TOML file and environment
//! variables.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `SYBILSCAN`, nested keys separated by
//!    `__`, e.g. `SYBILSCAN_INPUTS__WALLETS_FILE`)
//! 2. Config file: `sybilscan.toml` in the working directory (or the path
//!    given with `--config`)
//!
//! Path settings are not checked for existence here; a bad path surfaces
//! later when the file is opened.

use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::ScanError;

/// Default configuration file, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "sybilscan.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// GitHub API settings.
    pub github: GitHubConfig,
    /// Input file locations.
    pub inputs: InputsConfig,
}

/// GitHub API settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Personal access token. Falls back to `GH_TOKEN` / `GITHUB_TOKEN`
    /// environment variables when unset.
    pub token: Option<String>,
}

/// Input file locations.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct InputsConfig {
    /// CSV with the user's wallet addresses, one per row in column 0.
    pub wallets_file: String,
    /// CSV with the previously flagged addresses, one per row in column 0.
    pub initial_list_file: String,
}

impl AppConfig {
    /// Validates that both input paths were configured.
    ///
    /// # Errors
    ///
    /// Returns `ScanError::Config` naming the first missing setting.
    pub fn require_inputs(&self) -> Result<(), ScanError> {
        if self.inputs.wallets_file.is_empty() {
            return Err(ScanError::Config {
                message: "missing required setting inputs.wallets_file \
                          (SYBILSCAN_INPUTS__WALLETS_FILE)"
                    .to_string(),
            });
        }
        if self.inputs.initial_list_file.is_empty() {
            return Err(ScanError::Config {
                message: "missing required setting inputs.initial_list_file \
                          (SYBILSCAN_INPUTS__INITIAL_LIST_FILE)"
                    .to_string(),
            });
        }
        Ok(())
    }
}

/// Load application configuration.
///
/// With an explicit `path` the file must exist; the default location is
/// optional so a pure environment-variable setup also works.
///
/// # Errors
///
/// Returns `ScanError::Config` if an explicitly given file is missing or any
/// source fails to parse.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ScanError> {
    let builder = match path {
        Some(p) => Config::builder().add_source(File::from(p)),
        None => Config::builder().add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
    };

    let config = builder.add_source(env_source()).build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}

/// Environment-variable source: `SYBILSCAN_` prefix with a single
/// underscore, `__` between nested keys.
fn env_source() -> Environment {
    Environment::with_prefix("SYBILSCAN")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

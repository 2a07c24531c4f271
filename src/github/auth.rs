// SPDX-License-Identifier: Apache-2.0

//! GitHub token resolution and client construction.
//!
//! Token resolution priority chain:
//! 1. `github.token` from the configuration
//! 2. `GH_TOKEN` environment variable
//! 3. `GITHUB_TOKEN` environment variable

use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::config::AppConfig;
use crate::error::ScanError;

/// Source of the GitHub authentication token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// Token from the configuration file.
    Config,
    /// Token from `GH_TOKEN` or `GITHUB_TOKEN` environment variable.
    Environment,
}

impl std::fmt::Display for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenSource::Config => write!(f, "configuration file"),
            TokenSource::Environment => write!(f, "environment variable"),
        }
    }
}

/// Resolves a GitHub token using the priority chain.
///
/// Returns the token and its source, or `None` if no token is found.
pub fn resolve_token(config: &AppConfig) -> Option<(SecretString, TokenSource)> {
    if let Some(token) = &config.github.token
        && !token.is_empty()
    {
        debug!("Using token from configuration");
        return Some((SecretString::from(token.clone()), TokenSource::Config));
    }

    for var in ["GH_TOKEN", "GITHUB_TOKEN"] {
        if let Ok(token) = std::env::var(var)
            && !token.is_empty()
        {
            debug!("Using token from {var} environment variable");
            return Some((SecretString::from(token), TokenSource::Environment));
        }
    }

    debug!("No token found in any source");
    None
}

/// Creates an authenticated Octocrab client from a resolved token.
///
/// # Errors
///
/// Returns `ScanError::GitHub` if the client cannot be built.
pub fn create_client(token: &SecretString) -> Result<Octocrab, ScanError> {
    let client = Octocrab::builder()
        .personal_token(token.expose_secret().to_string())
        .build()?;

    debug!("Created authenticated GitHub client");
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GitHubConfig;

    #[test]
    fn test_token_source_display() {
        assert_eq!(TokenSource::Config.to_string(), "configuration file");
        assert_eq!(
            TokenSource::Environment.to_string(),
            "environment variable"
        );
    }

    #[test]
    fn test_config_token_takes_priority() {
        let config = AppConfig {
            github: GitHubConfig {
                token: Some("ghp_from_config".to_string()),
            },
            ..AppConfig::default()
        };
        let (token, source) = resolve_token(&config).expect("token resolved");
        assert_eq!(source, TokenSource::Config);
        assert_eq!(token.expose_secret(), "ghp_from_config");
    }

    #[test]
    fn test_empty_config_token_is_skipped() {
        let config = AppConfig {
            github: GitHubConfig {
                token: Some(String::new()),
            },
            ..AppConfig::default()
        };
        // Result depends on the test environment's GH_TOKEN/GITHUB_TOKEN;
        // only assert the empty config value itself never wins.
        if let Some((_, source)) = resolve_token(&config) {
            assert_eq!(source, TokenSource::Environment);
        }
    }

    // Client construction spawns background tasks, so it needs a runtime.
    #[tokio::test]
    async fn test_create_client_with_token() {
        let token = SecretString::from("ghp_dummy".to_string());
        assert!(create_client(&token).is_ok());
    }
}

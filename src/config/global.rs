//! Global configuration management for caskwatch.
//!
//! This module handles the user-wide configuration file that holds settings
//! shared by every manifest: chiefly the API token used for livecheck
//! requests, which must never live in a manifest.
//!
//! # Configuration File Location
//!
//! - **Unix/macOS**: `~/.caskwatch/config.toml`
//! - **Windows**: `%LOCALAPPDATA%\caskwatch\config.toml`
//!
//! The location can be overridden with the `CASKWATCH_CONFIG_PATH`
//! environment variable or the `--config` flag.
//!
//! # File Format
//!
//! ```toml
//! # Sent as a bearer token to the livecheck endpoint
//! github_token = "ghp_xxxxxxxxxxxxxxxxxxxx"
//!
//! # Request timeout in seconds
//! timeout_secs = 30
//!
//! # User-Agent header
//! user_agent = "caskwatch-ci/1.0"
//! ```
//!
//! Every key is optional. A missing file is the same as an empty one.
//!
//! # Precedence
//!
//! Command-line flags override environment variables, which override this
//! file, which overrides the built-in defaults. [`GlobalConfig::apply_to`]
//! layers the file over the defaults; the CLI applies its own overrides
//! afterwards.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tracing::debug;

use crate::constants::CONFIG_PATH_ENV_VAR;
use crate::core::CaskwatchError;
use crate::fetch::ReleaseFetcher;

/// User-wide settings loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlobalConfig {
    /// Bearer token for the livecheck endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_token: Option<String>,

    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// User-Agent header override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl GlobalConfig {
    /// Load from `path`, or from [`GlobalConfig::default_path`] when `None`.
    ///
    /// A file that does not exist yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CaskwatchError::ConfigError`] if the file exists but cannot
    /// be read or parsed.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => Self::default_path()?,
        };

        if path.exists() {
            Self::load_from(&path).await
        } else {
            debug!("No global config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load from a specific file.
    ///
    /// # Errors
    ///
    /// Returns [`CaskwatchError::ConfigError`] if the file cannot be read,
    /// is not valid TOML, has unknown keys, or sets `timeout_secs = 0`.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let config_error = |message: String| CaskwatchError::ConfigError {
            message,
        };

        let content = fs::read_to_string(path).await.map_err(|e| {
            config_error(format!("Failed to read global config from {}: {e}", path.display()))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            config_error(format!(
                "Failed to parse global config from {}: {}",
                path.display(),
                e.message()
            ))
        })?;

        if config.timeout_secs == Some(0) {
            return Err(config_error(format!(
                "timeout_secs in {} must be greater than zero",
                path.display()
            ))
            .into());
        }

        debug!("Loaded global config from {}", path.display());
        Ok(config)
    }

    /// Location of the global config file.
    ///
    /// `CASKWATCH_CONFIG_PATH` wins if set and non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`CaskwatchError::ConfigError`] if the home directory cannot
    /// be determined.
    pub fn default_path() -> Result<PathBuf> {
        Self::resolve_path(std::env::var_os(CONFIG_PATH_ENV_VAR))
    }

    fn resolve_path(env_override: Option<OsString>) -> Result<PathBuf> {
        if let Some(path) = env_override.filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .ok_or_else(|| CaskwatchError::ConfigError {
                    message: "Unable to determine local data directory".to_string(),
                })?
                .join("caskwatch")
        } else {
            dirs::home_dir()
                .ok_or_else(|| CaskwatchError::ConfigError {
                    message: "Unable to determine home directory".to_string(),
                })?
                .join(".caskwatch")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Layer this file's settings over `fetcher`.
    #[must_use]
    pub fn apply_to(&self, mut fetcher: ReleaseFetcher) -> ReleaseFetcher {
        if let Some(secs) = self.timeout_secs {
            fetcher = fetcher.with_timeout(Duration::from_secs(secs));
        }
        if let Some(user_agent) = &self.user_agent {
            fetcher = fetcher.with_user_agent(user_agent.clone());
        }
        if self.github_token.is_some() {
            fetcher = fetcher.with_token(self.github_token.clone());
        }
        fetcher
    }
}

//! Client configuration.
//!
//! A small TOML-backed config section for the client's static settings:
//! base URL and credentials. Credential acquisition itself (token
//! creation, rotation) happens outside this crate.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Confluence client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Confluence server base URL.
    pub base_url: String,
    /// Username for HTTP basic auth. Requires `api_token`.
    #[serde(default)]
    pub username: Option<String>,
    /// API token: the basic-auth password when `username` is set, a
    /// bearer token otherwise.
    #[serde(default)]
    pub api_token: Option<String>,
}

impl ClientConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate that all required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if a field is empty or has an
    /// invalid format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.base_url, "base_url")?;
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::Validation(
                "base_url must start with http:// or https://".to_owned(),
            ));
        }
        if self.username.is_some() && self.api_token.is_none() {
            return Err(ConfigError::Validation(
                "username requires api_token".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

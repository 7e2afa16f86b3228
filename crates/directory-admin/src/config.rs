//! Directory API configuration.
//!
//! Configuration is loaded from environment variables with defaults suitable
//! for local development.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required environment variable.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Invalid configuration value.
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue {
        /// Configuration key.
        key: String,
        /// Error message.
        message: String,
    },
}

/// Configuration for the directory REST API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Base URL of the API (e.g., "https://api.example-directory.com").
    pub base_url: String,

    /// Bearer token sent with every request.
    pub api_key: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            api_key: None,
            timeout_secs: 30,
        }
    }
}

impl DirectoryConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DIRECTORY_API_URL`: API base URL (default: http://localhost:5000)
    /// - `DIRECTORY_API_KEY`: Bearer token
    /// - `DIRECTORY_TIMEOUT_SECS`: Request timeout in seconds (default: 30)
    ///
    /// Unparseable values fall back to the default; use [`Self::try_from_env`]
    /// to reject them instead.
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            base_url: std::env::var("DIRECTORY_API_URL").unwrap_or(default.base_url),
            api_key: std::env::var("DIRECTORY_API_KEY").ok(),
            timeout_secs: std::env::var("DIRECTORY_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default.timeout_secs),
        }
    }

    /// Load configuration from environment variables, rejecting bad values.
    pub fn try_from_env() -> Result<Self, ConfigError> {
        let mut config = Self::from_env();

        if let Ok(raw) = std::env::var("DIRECTORY_TIMEOUT_SECS") {
            config.timeout_secs = raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "DIRECTORY_TIMEOUT_SECS".to_string(),
                message: format!("expected a number of seconds, got {:?}", raw),
            })?;
        }

        Ok(config)
    }

    /// Get the request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build a full URL by appending a path to the base URL.
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Check if bearer authentication is configured.
    pub fn has_auth(&self) -> bool {
        self.api_key.is_some()
    }

    /// Validate that all required configuration is present for production.
    pub fn validate_for_production(&self) -> Result<(), ConfigError> {
        if self.api_key.is_none() {
            return Err(ConfigError::MissingEnvVar("DIRECTORY_API_KEY".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DIRECTORY_TIMEOUT_SECS".to_string(),
                message: "timeout must be positive".to_string(),
            });
        }
        Ok(())
    }
}

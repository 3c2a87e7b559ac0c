use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable holding the basic-auth password.
pub const PASSWORD_ENV_VAR: &str = "PROFILE_VIEWER_PASSWORD";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/profile-viewer/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("profile-viewer").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Fill the password from `PROFILE_VIEWER_PASSWORD` when it is set.
    pub fn apply_env(&mut self) {
        if let Ok(password) = std::env::var(PASSWORD_ENV_VAR) {
            if !password.is_empty() {
                self.auth.password = Some(password);
            }
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `server.base_url` is an absolute http(s) URL
    /// - `profile.user_id` is not empty
    /// - `ui.tick_rate_ms` is positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.server.base_url).map_err(|e| {
            ConfigError::ValidationError {
                message: format!("Invalid base_url '{}': {}", self.server.base_url, e),
            }
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "base_url must use http or https, got '{}'",
                    url.scheme()
                ),
            });
        }

        if self.profile.user_id.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "profile.user_id must not be empty".to_string(),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

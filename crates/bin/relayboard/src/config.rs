//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `relayboard.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use relayboard_adapter_console::PanelConfig;
use relayboard_adapter_http_reqwest::{HttpConfig, HttpError};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the device answers `/status` and `/update`.
    pub device: HttpConfig,
    /// Relay controls shown on the console.
    pub panel: PanelConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "relayboard=info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `relayboard.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("relayboard.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("RELAYBOARD_URL") {
            self.device.base_url = val;
        }
        if let Some(val) = var("RELAYBOARD_RELAYS") {
            self.panel.relays = val
                .split(',')
                .map(|name| name.trim().to_string())
                .collect();
        }
        if let Some(val) = var("RELAYBOARD_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.device.endpoints()?;
        self.panel
            .relay_ids()
            .map_err(|err| ConfigError::Validation(err.to_string()))?;
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// The device base URL is unusable.
    #[error("invalid device configuration")]
    Device(#[from] HttpError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

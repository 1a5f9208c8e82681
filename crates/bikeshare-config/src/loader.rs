//! Configuration loading utilities

use crate::Config;
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};
use validator::Validate;

/// Environment variable pointing at an explicit configuration file
pub const CONFIG_PATH_ENV: &str = "BIKESHARE_CONFIG_PATH";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Variable name
        var: String,
        /// Parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for bikeshare_common::BikeshareError {
    fn from(err: ConfigError) -> Self {
        Self::config_with_source("Failed to load configuration", err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        info!("Loading configuration from {}", path.display());

        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse_yaml(&content)?;

        Self::apply_env_overrides(&mut config)?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from the first location that exists:
    /// `$BIKESHARE_CONFIG_PATH`, `config.yaml`, `config.yml`, then defaults
    pub fn load() -> Result<Config, ConfigError> {
        if let Ok(config_path) = env::var(CONFIG_PATH_ENV) {
            return Self::load_config(config_path);
        }

        for candidate in ["config.yaml", "config.yml"] {
            if Path::new(candidate).exists() {
                return Self::load_config(candidate);
            }
        }

        debug!("No configuration file found, using defaults");
        let mut config = Config::default();
        Self::apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse YAML content without applying overrides or validation
    pub fn parse_yaml(content: &str) -> Result<Config, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Apply process environment overrides to configuration
    pub fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides(config, |name| env::var(name).ok())
    }

    /// Apply overrides resolved through `lookup`
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(source) = lookup("BIKESHARE_HOURLY_SOURCE") {
            config.data.hourly_source = source;
        }

        if let Some(source) = lookup("BIKESHARE_DAILY_SOURCE") {
            config.data.daily_source = source;
        }

        if let Some(timeout) = lookup("BIKESHARE_TIMEOUT") {
            config.data.request_timeout_seconds =
                timeout.trim().parse().map_err(|e| ConfigError::EnvParseError {
                    var: "BIKESHARE_TIMEOUT".to_string(),
                    source: Box::new(e),
                })?;
        }

        if let Some(directory) = lookup("BIKESHARE_OUTPUT_DIR") {
            config.output.directory = directory;
        }

        if let Some(level) = lookup("BIKESHARE_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(file) = lookup("BIKESHARE_LOG_FILE") {
            config.logging.file = Some(file).filter(|f| !f.is_empty());
        }

        Ok(())
    }
}

//! Configuration loading and validation

use crate::collector::{KeepalivedCollector, Mode};
use crate::source::Collector;
use common::LogFormat;
use common::logging::{self, TryInitError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use validator::{Validate, ValidationError};

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(#[from] validator::ValidationErrors),
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub collector: CollectorSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), validator::ValidationErrors> {
        self.collector.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Snapshot collection settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CollectorSettings {
    #[serde(default)]
    pub mode: Mode,

    /// Script run as `<check_script> <vip>` to probe virtual addresses
    #[serde(default)]
    #[validate(custom = "validate_script_path")]
    pub check_script: Option<String>,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    #[validate(custom = "validate_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn validate_script_path(path: &str) -> Result<(), ValidationError> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("check_script_empty"));
    }

    if !trimmed.starts_with('/') && !trimmed.starts_with("./") {
        return Err(ValidationError::new("check_script_invalid_format"));
    }

    Ok(())
}

fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    logging::validate_filter(level).map_err(|_| ValidationError::new("log_level_invalid"))
}

impl Config {
    /// Load configuration from default search paths
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_file() {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path.display());
                Self::load_from_file(&path)
            }
            None => {
                tracing::info!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn find_config_file() -> Option<PathBuf> {
        let mut paths = vec![PathBuf::from("/etc/keepalived-state/config.yaml")];

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config/keepalived-state/config.yaml"));
        }

        paths.push(PathBuf::from("./keepalived-state.yaml"));

        paths.into_iter().find(|p| p.is_file())
    }

    /// Install the global log subscriber described by `logging`
    pub fn init_logging(&self) -> Result<(), TryInitError> {
        logging::try_init(&self.logging.level, self.logging.format)
    }

    /// Build a collector over `source` with the configured mode and script
    pub fn build(&self, source: Box<dyn Collector>) -> KeepalivedCollector {
        KeepalivedCollector::new(
            self.collector.mode,
            self.collector.check_script.clone(),
            source,
        )
    }
}

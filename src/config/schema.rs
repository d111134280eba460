//! Configuration schema types
//!
//! This module defines the configuration structure for datamask.

use crate::domain::{MaskError, Result};
use crate::masking::{FieldMaskingMap, MaskingConfig};
use serde::{Deserialize, Serialize};

/// Main datamask configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// Every section is optional and falls back to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatamaskConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Masking registry settings
    #[serde(default)]
    pub masking: MaskingConfig,

    /// Default field masking map used by `mask-json`
    #[serde(default)]
    pub fields: FieldMaskingMap,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DatamaskConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<()> {
        self.application.validate()?;
        self.masking.validate()?;
        self.logging.validate()?;

        // Every mapped field must point at a strategy the registry will bind
        if let Some((field, strategy)) = self
            .fields
            .iter()
            .find(|(_, strategy)| !self.masking.strategies.contains(strategy))
        {
            return Err(MaskError::Configuration(format!(
                "fields.{field} uses strategy '{strategy}' which is not enabled in masking.strategies"
            )));
        }

        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(MaskError::Configuration(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            )));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<()> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(MaskError::Configuration(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            )));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err(MaskError::Configuration(
                "logging.local_path must be set when local logging is enabled".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

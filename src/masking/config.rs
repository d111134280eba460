//! Masking configuration

use crate::domain::{MaskError, Result};
use crate::masking::strategy::MaskingStrategy;
use serde::{Deserialize, Serialize};

/// Glyph substituted for hidden characters unless configured otherwise
pub const DEFAULT_MASK_CHAR: char = '○';

/// Address units that mark a preceding numeral as maskable
pub const DEFAULT_ADDRESS_UNITS: [&str; 9] = ["鄉", "鎮", "區", "路", "段", "巷", "弄", "號", "樓"];

/// Registry configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskingConfig {
    /// Replacement glyph; must be exactly one character
    #[serde(default = "default_mask_char")]
    pub mask_char: String,

    /// Unit tokens recognized after a numeral by `mask_digits`
    #[serde(default = "default_address_units")]
    pub address_units: Vec<String>,

    /// Strategies the registry binds
    #[serde(default = "default_strategies")]
    pub strategies: Vec<MaskingStrategy>,
}

fn default_mask_char() -> String {
    DEFAULT_MASK_CHAR.to_string()
}

fn default_address_units() -> Vec<String> {
    DEFAULT_ADDRESS_UNITS.iter().map(|u| u.to_string()).collect()
}

fn default_strategies() -> Vec<MaskingStrategy> {
    MaskingStrategy::ALL.to_vec()
}

impl Default for MaskingConfig {
    fn default() -> Self {
        Self {
            mask_char: default_mask_char(),
            address_units: default_address_units(),
            strategies: default_strategies(),
        }
    }
}

impl MaskingConfig {
    /// Configuration with a custom mask glyph and everything else defaulted
    pub fn with_mask_char(mask_char: char) -> Self {
        Self {
            mask_char: mask_char.to_string(),
            ..Self::default()
        }
    }

    /// Parse the configured mask glyph
    pub fn mask_char(&self) -> Result<char> {
        let mut chars = self.mask_char.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(MaskError::Configuration(format!(
                "masking.mask_char must be exactly one character, got '{}'",
                self.mask_char
            ))),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.mask_char()?;

        if self.address_units.is_empty() {
            return Err(MaskError::Configuration(
                "masking.address_units must not be empty".to_string(),
            ));
        }

        if let Some(unit) = self.address_units.iter().find(|u| u.trim().is_empty()) {
            return Err(MaskError::Configuration(format!(
                "masking.address_units contains a blank unit: '{unit}'"
            )));
        }

        if let Some(unbound) = self.strategies.iter().find(|s| !s.is_standard()) {
            return Err(MaskError::Configuration(format!(
                "No masking function bound for strategy {unbound:?}"
            )));
        }

        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("DATAMASK_MASKING_MASK_CHAR") {
            self.mask_char = val;
        }

        if let Ok(val) = std::env::var("DATAMASK_MASKING_ADDRESS_UNITS") {
            self.address_units = val
                .split(',')
                .map(|u| u.trim().to_string())
                .filter(|u| !u.is_empty())
                .collect();
        }

        if let Ok(val) = std::env::var("DATAMASK_MASKING_STRATEGIES") {
            self.strategies = val
                .split(',')
                .map(|s| s.parse())
                .collect::<Result<Vec<_>>>()?;
        }

        Ok(())
    }
}

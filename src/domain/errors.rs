//! Domain error types
//!
//! This module defines the error hierarchy for datamask.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main datamask error type
///
/// Configuration errors are fatal and surface when a registry or service is
/// constructed. Record errors are per-field and never abort a whole record;
/// the dispatcher downgrades them to a skipped field.
#[derive(Debug, Error)]
pub enum MaskError {
    /// Configuration-related errors (invalid mask char, unbound strategy, bad regex)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors (unknown strategy names, malformed field map entries)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A record refused to read or write one of its fields
    #[error("Record field '{field}' error: {reason}")]
    Record { field: String, reason: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl MaskError {
    /// Creates a record error for the given field
    pub fn record(field: impl Into<String>, reason: impl Into<String>) -> Self {
        MaskError::Record {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if this error came from a configuration problem
    pub fn is_configuration(&self) -> bool {
        matches!(self, MaskError::Configuration(_))
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for MaskError {
    fn from(err: std::io::Error) -> Self {
        MaskError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for MaskError {
    fn from(err: serde_json::Error) -> Self {
        MaskError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for MaskError {
    fn from(err: toml::de::Error) -> Self {
        MaskError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from regex compile errors
impl From<regex::Error> for MaskError {
    fn from(err: regex::Error) -> Self {
        MaskError::Configuration(format!("Invalid pattern: {err}"))
    }
}

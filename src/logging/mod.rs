//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output with configurable log levels
//! - JSON-formatted local file logging with rotation
//!
//! Masked values are never logged; only field names, strategy names and counts.
//!
//! # Example
//!
//! ```no_run
//! use datamask::logging::init_logging;
//! use datamask::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log that a single field was masked
///
/// # Example
///
/// ```no_run
/// use datamask::log_field_masked;
/// use datamask::masking::MaskingStrategy;
///
/// log_field_masked!("Name", MaskingStrategy::MaskAll);
/// ```
#[macro_export]
macro_rules! log_field_masked {
    ($field:expr, $strategy:expr) => {
        tracing::debug!(
            field = %$field,
            strategy = %$strategy,
            "Field masked"
        );
    };
}

/// Log the completion of a batch
///
/// # Example
///
/// ```no_run
/// use datamask::log_batch_masked;
/// use datamask::masking::MaskingSummary;
///
/// let summary = MaskingSummary::default();
/// log_batch_masked!(0usize, summary);
/// ```
#[macro_export]
macro_rules! log_batch_masked {
    ($count:expr, $summary:expr) => {
        tracing::info!(
            records = $count,
            masked = $summary.masked,
            skipped = $summary.total_fields() - $summary.masked,
            failed = $summary.failed,
            "Batch masked"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use datamask::log_error_with_context;
/// use datamask::domain::MaskError;
///
/// let error = MaskError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

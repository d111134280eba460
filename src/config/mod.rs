//! Configuration management for datamask.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! datamask uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every setting
//! - Validation on load
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`MaskingConfig`] - Mask glyph, address units, enabled strategies
//! - `[fields]` - Default [`FieldMaskingMap`](crate::masking::FieldMaskingMap)
//! - [`LoggingConfig`] - Logging configuration
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [masking]
//! mask_char = "○"
//! address_units = ["鄉", "鎮", "區", "路", "段", "巷", "弄", "號", "樓"]
//!
//! [fields]
//! Name = "mask_except_first_one"
//! Birthday = "mask_taiwan_date"
//! Address = "mask_digits"
//! Email = "email_domain_only"
//!
//! [logging]
//! local_enabled = false
//! ```
//!
//! # Environment Variables
//!
//! Any `DATAMASK_<SECTION>_<KEY>` variable overrides the file, for example
//! `DATAMASK_MASKING_MASK_CHAR="*"`.

pub mod loader;
pub mod schema;

pub use crate::masking::MaskingConfig;
pub use loader::{load_config, load_or_default};
pub use schema::{ApplicationConfig, DatamaskConfig, LoggingConfig};

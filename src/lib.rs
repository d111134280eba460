// datamask - field-level masking for structured records
// Copyright (c) 2025 datamask Contributors
// Licensed under the MIT License

//! # datamask
//!
//! datamask masks sensitive substrings inside structured records. Each field
//! named in a field masking map is rewritten with a strategy picked from a
//! closed set; every other field is left byte-identical.
//!
//! ## Architecture
//!
//! - [`masking`] - Strategies, registry, record adapters and the dispatcher
//! - [`domain`] - Error types and result alias
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//! - [`cli`] - Command-line interface and argument parsing
//!
//! ## Quick Start
//!
//! ```rust
//! use datamask::masking::{FieldMaskingMap, MaskingConfig, MaskingService, MaskingStrategy};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = MaskingService::new(&MaskingConfig::default())?;
//!
//! let map = FieldMaskingMap::new()
//!     .with("Name", MaskingStrategy::MaskExceptFirstN(1))
//!     .with("Address", MaskingStrategy::MaskDigits);
//!
//! let masked = service.apply_masking(
//!     json!({"Name": "王小明", "Address": "新北市新莊區中平路一號南棟4樓"}),
//!     &map,
//! );
//! assert_eq!(masked["Name"], "王○○");
//! assert_eq!(masked["Address"], "新北市新莊區中平路○號南棟○樓");
//! # Ok(())
//! # }
//! ```
//!
//! ## Records
//!
//! Records are accessed through [`masking::MaskableRecord`]. JSON objects
//! and string maps implement it out of the box; structs opt in with
//! [`maskable_record!`].
//!
//! ## Error Handling
//!
//! Registry construction fails fast with [`domain::MaskError::Configuration`].
//! Masking itself never fails: fields that cannot be read or written are
//! skipped and logged.
//!
//! ## Logging
//!
//! datamask uses structured logging with the `tracing` crate. Field names,
//! strategy names and counts are logged; values never are.

pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod masking;

//! Masking module for datamask
//!
//! This module masks sensitive substrings inside structured records. Each
//! field is masked with a strategy chosen from a closed set.
//!
//! # Architecture
//!
//! The masking pipeline consists of:
//! - **Strategies**: the closed set of masking rules ([`MaskingStrategy`])
//! - **Registry**: binds each strategy to its transformation ([`MaskingRegistry`])
//! - **Records**: named text fields exposed through [`MaskableRecord`]
//! - **Dispatcher**: applies a [`FieldMaskingMap`] to records ([`MaskingService`])
//!
//! # Usage
//!
//! ```rust
//! use datamask::masking::{FieldMaskingMap, MaskingConfig, MaskingService, MaskingStrategy};
//! use serde_json::json;
//!
//! let service = MaskingService::new(&MaskingConfig::with_mask_char('#'))?;
//! let map = FieldMaskingMap::new()
//!     .with("Birthday", MaskingStrategy::MaskTaiwanDate)
//!     .with("Email", MaskingStrategy::EmailDomainOnly);
//!
//! let masked = service.apply_masking_batch(
//!     vec![json!({"Birthday": "114/06/12", "Email": "test@example.com"})],
//!     &map,
//! );
//! assert_eq!(masked[0], json!({"Birthday": "11#/##/##", "Email": "@example.com"}));
//! # Ok::<(), datamask::domain::MaskError>(())
//! ```

pub mod config;
pub mod engine;
pub mod field_map;
pub mod record;
pub mod registry;
pub mod strategy;
pub mod summary;

// Re-export main types
pub use config::{MaskingConfig, DEFAULT_ADDRESS_UNITS, DEFAULT_MASK_CHAR};
pub use engine::MaskingService;
pub use field_map::FieldMaskingMap;
pub use record::{FieldSlot, MaskableRecord};
pub use registry::MaskingRegistry;
pub use strategy::MaskingStrategy;
pub use summary::{FieldOutcome, MaskingSummary};

//! Masking dispatcher
//!
//! This module provides the [`MaskingService`] that applies a
//! [`FieldMaskingMap`] to records through the [`MaskableRecord`] adapter.
//!
//! # Behavior
//!
//! For each field the record declares:
//! 1. An absent value is skipped
//! 2. An empty value is skipped
//! 3. A field with no map entry is skipped
//! 4. A strategy the registry does not bind is skipped
//! 5. Otherwise the masked text is written back
//!
//! A field that cannot be read or written is skipped with a warning; the rest
//! of the record is still processed.
//!
//! # Examples
//!
//! ```
//! use datamask::masking::{FieldMaskingMap, MaskingService, MaskingStrategy};
//! use serde_json::json;
//!
//! let service = MaskingService::default();
//! let map = FieldMaskingMap::new().with("Name", MaskingStrategy::MaskExceptFirstN(1));
//!
//! let masked = service.apply_masking(
//!     json!({"Name": "王小明", "Id": "", "Email": null}),
//!     &map,
//! );
//! assert_eq!(masked, json!({"Name": "王○○", "Id": "", "Email": null}));
//! ```

use crate::domain::Result;
use crate::masking::{
    config::MaskingConfig,
    field_map::FieldMaskingMap,
    record::MaskableRecord,
    registry::MaskingRegistry,
    summary::{FieldOutcome, MaskingSummary},
};
use crate::{log_batch_masked, log_field_masked};
use std::sync::Arc;

/// Applies field masking maps to records
///
/// # Thread Safety
///
/// The service holds only an immutable registry behind an `Arc`; it can be
/// cloned cheaply and shared across threads.
#[derive(Debug, Clone)]
pub struct MaskingService {
    registry: Arc<MaskingRegistry>,
}

impl MaskingService {
    /// Create a service from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the registry cannot be built.
    pub fn new(config: &MaskingConfig) -> Result<Self> {
        Ok(Self::with_registry(Arc::new(MaskingRegistry::new(config)?)))
    }

    /// Create a service around an existing registry
    pub fn with_registry(registry: Arc<MaskingRegistry>) -> Self {
        Self { registry }
    }

    /// The registry this service dispatches to
    pub fn registry(&self) -> &MaskingRegistry {
        &self.registry
    }

    /// Mask a record and return it
    pub fn apply_masking<R: MaskableRecord>(&self, mut record: R, map: &FieldMaskingMap) -> R {
        self.apply_masking_in_place(&mut record, map);
        record
    }

    /// Mask a batch of records, preserving order
    ///
    /// The same map is applied to every element.
    pub fn apply_masking_batch<R: MaskableRecord>(
        &self,
        records: Vec<R>,
        map: &FieldMaskingMap,
    ) -> Vec<R> {
        self.apply_masking_batch_with_summary(records, map).0
    }

    /// Mask a batch of records and return the combined summary
    pub fn apply_masking_batch_with_summary<R: MaskableRecord>(
        &self,
        mut records: Vec<R>,
        map: &FieldMaskingMap,
    ) -> (Vec<R>, MaskingSummary) {
        let mut summary = MaskingSummary::new();
        for record in records.iter_mut() {
            summary.merge(&self.apply_masking_in_place(record, map));
        }

        log_batch_masked!(records.len(), summary);
        (records, summary)
    }

    /// Mask a record in place and report what happened to each field
    pub fn apply_masking_in_place<R: MaskableRecord>(
        &self,
        record: &mut R,
        map: &FieldMaskingMap,
    ) -> MaskingSummary {
        let mut summary = MaskingSummary::new();
        summary.records = 1;

        for field in record.field_names() {
            let outcome = self.mask_field(record, &field, map);
            summary.record(outcome);
        }

        summary
    }

    fn mask_field<R: MaskableRecord>(
        &self,
        record: &mut R,
        field: &str,
        map: &FieldMaskingMap,
    ) -> FieldOutcome {
        let value = match record.field_value(field) {
            Ok(Some(value)) => value,
            Ok(None) => return FieldOutcome::Absent,
            Err(e) => {
                if map.get(field).is_some() {
                    tracing::warn!(field = %field, error = %e, "Skipping unreadable field");
                }
                return FieldOutcome::Unreadable;
            }
        };

        if value.is_empty() {
            return FieldOutcome::Empty;
        }

        let Some(strategy) = map.get(field) else {
            return FieldOutcome::Unmapped;
        };

        let Some(masked) = self.registry.mask(strategy, &value) else {
            tracing::debug!(field = %field, strategy = %strategy, "Strategy not registered");
            return FieldOutcome::Unregistered;
        };

        match record.set_field(field, masked) {
            Ok(()) => {
                log_field_masked!(field, strategy);
                FieldOutcome::Masked
            }
            Err(e) => {
                tracing::warn!(field = %field, error = %e, "Skipping field that rejected masked value");
                FieldOutcome::WriteFailed
            }
        }
    }
}

impl Default for MaskingService {
    fn default() -> Self {
        Self::with_registry(Arc::new(MaskingRegistry::default()))
    }
}

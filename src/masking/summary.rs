//! Per-field outcomes and masking summaries

use serde::{Deserialize, Serialize};

/// What the dispatcher did with one field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldOutcome {
    /// Value was masked and written back
    Masked,
    /// Value was absent
    Absent,
    /// Value was the empty string
    Empty,
    /// Field has no entry in the masking map
    Unmapped,
    /// Mapped strategy is not bound in the registry
    Unregistered,
    /// Value had no textual form
    Unreadable,
    /// Record rejected the masked text
    WriteFailed,
}

impl FieldOutcome {
    /// Whether the field was left unchanged
    pub fn is_skip(&self) -> bool {
        !matches!(self, FieldOutcome::Masked)
    }
}

/// Counts of field outcomes over one or more records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskingSummary {
    /// Records processed
    pub records: usize,
    /// Fields masked
    pub masked: usize,
    /// Fields skipped because the value was absent or empty
    pub empty: usize,
    /// Fields with no map entry
    pub unmapped: usize,
    /// Fields whose strategy is not registered
    pub unregistered: usize,
    /// Fields that could not be read or written
    pub failed: usize,
}

impl MaskingSummary {
    /// Create an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one field outcome
    pub fn record(&mut self, outcome: FieldOutcome) {
        match outcome {
            FieldOutcome::Masked => self.masked += 1,
            FieldOutcome::Absent | FieldOutcome::Empty => self.empty += 1,
            FieldOutcome::Unmapped => self.unmapped += 1,
            FieldOutcome::Unregistered => self.unregistered += 1,
            FieldOutcome::Unreadable | FieldOutcome::WriteFailed => self.failed += 1,
        }
    }

    /// Add another summary's counts to this one
    pub fn merge(&mut self, other: &MaskingSummary) {
        self.records += other.records;
        self.masked += other.masked;
        self.empty += other.empty;
        self.unmapped += other.unmapped;
        self.unregistered += other.unregistered;
        self.failed += other.failed;
    }

    /// Total fields inspected
    pub fn total_fields(&self) -> usize {
        self.masked + self.empty + self.unmapped + self.unregistered + self.failed
    }
}

//! Field masking map

use crate::domain::{MaskError, Result};
use crate::masking::strategy::MaskingStrategy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Association of record field names to the strategy applied to them
///
/// Fields absent from the map are left untouched. Keys naming fields a record
/// does not have are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMaskingMap {
    fields: BTreeMap<String, MaskingStrategy>,
}

impl FieldMaskingMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, field: impl Into<String>, strategy: MaskingStrategy) -> Self {
        self.insert(field, strategy);
        self
    }

    /// Insert or replace the strategy for a field
    pub fn insert(
        &mut self,
        field: impl Into<String>,
        strategy: MaskingStrategy,
    ) -> Option<MaskingStrategy> {
        self.fields.insert(field.into(), strategy)
    }

    /// Strategy mapped to a field
    pub fn get(&self, field: &str) -> Option<MaskingStrategy> {
        self.fields.get(field).copied()
    }

    /// Overlay another map; its entries win
    pub fn merge(&mut self, other: &FieldMaskingMap) {
        for (field, strategy) in other.iter() {
            self.fields.insert(field.to_string(), strategy);
        }
    }

    /// Iterate over `(field, strategy)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, MaskingStrategy)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of mapped fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parse a `FIELD=STRATEGY` assignment, as passed on the command line
    ///
    /// The strategy may be a name or a menu number.
    pub fn parse_assignment(assignment: &str) -> Result<(String, MaskingStrategy)> {
        let (field, strategy) = assignment.split_once('=').ok_or_else(|| {
            MaskError::Validation(format!(
                "Invalid field assignment '{assignment}'. Expected FIELD=STRATEGY"
            ))
        })?;

        let field = field.trim();
        if field.is_empty() {
            return Err(MaskError::Validation(format!(
                "Invalid field assignment '{assignment}'. Field name is empty"
            )));
        }

        Ok((field.to_string(), strategy.parse()?))
    }
}

impl<K: Into<String>> FromIterator<(K, MaskingStrategy)> for FieldMaskingMap {
    fn from_iter<I: IntoIterator<Item = (K, MaskingStrategy)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

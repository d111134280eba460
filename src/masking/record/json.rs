//! [`MaskableRecord`] for JSON objects
//!
//! `null` is an absent value. Strings, numbers and booleans use their JSON
//! text. Arrays and nested objects have no textual form and are skipped.
//! Masked fields are always written back as JSON strings.

use super::MaskableRecord;
use crate::domain::{MaskError, Result};
use serde_json::{Map, Value};

impl MaskableRecord for Map<String, Value> {
    fn field_names(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }

    fn field_value(&self, name: &str) -> Result<Option<String>> {
        match self.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(Value::Bool(b)) => Ok(Some(b.to_string())),
            Some(Value::Array(_)) | Some(Value::Object(_)) => Err(MaskError::record(
                name,
                "nested values have no textual form",
            )),
        }
    }

    fn set_field(&mut self, name: &str, value: String) -> Result<()> {
        match self.get_mut(name) {
            Some(slot) => {
                *slot = Value::String(value);
                Ok(())
            }
            None => Err(MaskError::record(name, "no such field")),
        }
    }
}

impl MaskableRecord for Value {
    fn field_names(&self) -> Vec<String> {
        self.as_object()
            .map(|map| map.field_names())
            .unwrap_or_default()
    }

    fn field_value(&self, name: &str) -> Result<Option<String>> {
        match self.as_object() {
            Some(map) => map.field_value(name),
            None => Ok(None),
        }
    }

    fn set_field(&mut self, name: &str, value: String) -> Result<()> {
        match self.as_object_mut() {
            Some(map) => map.set_field(name, value),
            None => Err(MaskError::record(name, "record is not a JSON object")),
        }
    }
}

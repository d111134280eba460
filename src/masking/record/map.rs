//! [`MaskableRecord`] for string maps

use super::MaskableRecord;
use crate::domain::{MaskError, Result};
use std::collections::{BTreeMap, HashMap};

impl MaskableRecord for BTreeMap<String, String> {
    fn field_names(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }

    fn field_value(&self, name: &str) -> Result<Option<String>> {
        Ok(self.get(name).cloned())
    }

    fn set_field(&mut self, name: &str, value: String) -> Result<()> {
        match self.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(MaskError::record(name, "no such field")),
        }
    }
}

impl MaskableRecord for BTreeMap<String, Option<String>> {
    fn field_names(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }

    fn field_value(&self, name: &str) -> Result<Option<String>> {
        Ok(self.get(name).cloned().flatten())
    }

    fn set_field(&mut self, name: &str, value: String) -> Result<()> {
        match self.get_mut(name) {
            Some(slot) => {
                *slot = Some(value);
                Ok(())
            }
            None => Err(MaskError::record(name, "no such field")),
        }
    }
}

impl MaskableRecord for HashMap<String, String> {
    // Sorted so that field order does not depend on hashing
    fn field_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.keys().cloned().collect();
        names.sort();
        names
    }

    fn field_value(&self, name: &str) -> Result<Option<String>> {
        Ok(self.get(name).cloned())
    }

    fn set_field(&mut self, name: &str, value: String) -> Result<()> {
        match self.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(MaskError::record(name, "no such field")),
        }
    }
}

//! Record adapters
//!
//! The dispatcher never inspects a record's type. It talks to records through
//! [`MaskableRecord`], which exposes named fields as text. Implementations are
//! provided for JSON objects and string maps; user structs opt in with the
//! [`maskable_record!`](crate::maskable_record) macro.

mod json;
mod map;

use crate::domain::Result;

/// A record whose fields can be read and written by name as text
pub trait MaskableRecord {
    /// Names of the fields declared on this record, in a stable order
    fn field_names(&self) -> Vec<String>;

    /// Textual form of a field
    ///
    /// Returns `Ok(None)` for an absent value and an error when the value
    /// cannot be represented as text.
    fn field_value(&self, name: &str) -> Result<Option<String>>;

    /// Replace a field with masked text
    fn set_field(&mut self, name: &str, value: String) -> Result<()>;
}

/// A single struct field as seen by [`maskable_record!`](crate::maskable_record)
pub trait FieldSlot {
    /// Textual form, `None` when absent
    fn read_text(&self) -> Option<String>;

    /// Store masked text; `Err` carries the reason the slot refused it
    fn write_text(&mut self, value: String) -> std::result::Result<(), String>;
}

impl FieldSlot for String {
    fn read_text(&self) -> Option<String> {
        Some(self.clone())
    }

    fn write_text(&mut self, value: String) -> std::result::Result<(), String> {
        *self = value;
        Ok(())
    }
}

impl FieldSlot for Option<String> {
    fn read_text(&self) -> Option<String> {
        self.clone()
    }

    fn write_text(&mut self, value: String) -> std::result::Result<(), String> {
        *self = Some(value);
        Ok(())
    }
}

/// Readable but not writable slots; masking them is skipped
macro_rules! non_textual_slot {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FieldSlot for $ty {
                fn read_text(&self) -> Option<String> {
                    Some(self.to_string())
                }

                fn write_text(&mut self, _value: String) -> std::result::Result<(), String> {
                    Err(format!("field of type {} cannot hold masked text", stringify!($ty)))
                }
            }

            impl FieldSlot for Option<$ty> {
                fn read_text(&self) -> Option<String> {
                    self.as_ref().map(|v| v.to_string())
                }

                fn write_text(&mut self, _value: String) -> std::result::Result<(), String> {
                    Err(format!("field of type Option<{}> cannot hold masked text", stringify!($ty)))
                }
            }
        )+
    };
}

non_textual_slot!(i32, i64, u32, u64, f64, bool);

/// Implement [`MaskableRecord`] for a struct by listing its fields
///
/// Each entry maps a struct field to the external name used in field masking
/// maps. Fields must implement [`FieldSlot`].
///
/// # Example
///
/// ```
/// use datamask::maskable_record;
/// use datamask::masking::{FieldMaskingMap, MaskingService, MaskingStrategy};
///
/// struct Customer {
///     name: String,
///     email: Option<String>,
/// }
///
/// maskable_record!(Customer {
///     name => "Name",
///     email => "Email",
/// });
///
/// let service = MaskingService::default();
/// let map = FieldMaskingMap::new().with("Name", MaskingStrategy::MaskExceptFirstN(1));
/// let masked = service.apply_masking(
///     Customer { name: "王小明".to_string(), email: None },
///     &map,
/// );
/// assert_eq!(masked.name, "王○○");
/// assert_eq!(masked.email, None);
/// ```
#[macro_export]
macro_rules! maskable_record {
    ($ty:ty { $($field:ident => $name:literal),+ $(,)? }) => {
        impl $crate::masking::MaskableRecord for $ty {
            fn field_names(&self) -> Vec<String> {
                vec![$($name.to_string()),+]
            }

            fn field_value(&self, name: &str) -> $crate::domain::Result<Option<String>> {
                match name {
                    $($name => Ok($crate::masking::FieldSlot::read_text(&self.$field)),)+
                    _ => Ok(None),
                }
            }

            fn set_field(&mut self, name: &str, value: String) -> $crate::domain::Result<()> {
                match name {
                    $($name => $crate::masking::FieldSlot::write_text(&mut self.$field, value)
                        .map_err(|reason| $crate::domain::MaskError::record(name, reason)),)+
                    _ => Err($crate::domain::MaskError::record(name, "no such field")),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Applicant {
        name: String,
        id_number: Option<String>,
        age: Option<u32>,
    }

    crate::maskable_record!(Applicant {
        name => "Name",
        id_number => "IdNumber",
        age => "Age",
    });

    fn applicant() -> Applicant {
        Applicant {
            name: "王小明".to_string(),
            id_number: None,
            age: Some(42),
        }
    }

    #[test]
    fn test_macro_field_names() {
        assert_eq!(applicant().field_names(), vec!["Name", "IdNumber", "Age"]);
    }

    #[test]
    fn test_macro_field_values() {
        let record = applicant();
        assert_eq!(record.field_value("Name").unwrap(), Some("王小明".to_string()));
        assert_eq!(record.field_value("IdNumber").unwrap(), None);
        assert_eq!(record.field_value("Age").unwrap(), Some("42".to_string()));
        assert_eq!(record.field_value("Missing").unwrap(), None);
    }

    #[test]
    fn test_macro_set_field() {
        let mut record = applicant();
        record.set_field("IdNumber", "A12345####".to_string()).unwrap();
        assert_eq!(record.id_number.as_deref(), Some("A12345####"));

        let err = record.set_field("Age", "##".to_string()).unwrap_err();
        assert!(err.to_string().contains("Age"));
        assert_eq!(record.age, Some(42));

        assert!(record.set_field("Missing", "x".to_string()).is_err());
    }
}

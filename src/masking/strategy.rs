//! Masking strategy enumeration
//!
//! The set of strategies is closed: [`MaskingStrategy::ALL`] lists every
//! variant the registry binds. Parameterized variants carry their width, but
//! only the widths listed in `ALL` are part of the set.

use crate::domain::{MaskError, Result};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A masking rule applied to a single string value
///
/// Serializes as its configuration name. Widths outside the closed set have
/// no name and fail to serialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum MaskingStrategy {
    /// Replace every character. Example: `abc` → `○○○`
    MaskAll,
    /// Replace the last `n` characters. Example: `114` → `11○`
    MaskLastN(usize),
    /// Keep the first `n` characters, replace the rest. Example: `王小明` → `王○○`
    MaskExceptFirstN(usize),
    /// Keep the last `n` characters, replace the rest.
    /// Example: `1234567812345678` → `○○○○○○○○○○○○5678`
    MaskExceptLastN(usize),
    /// Mask the last year digit, the month and the day of an ROC date.
    /// Example: `114/06/12` → `11○/○○/○○`
    MaskTaiwanDate,
    /// Mask numerals that precede an address unit.
    /// Example: `新北市新莊區中平路一號南棟4樓` → `新北市新莊區中平路○號南棟○樓`
    MaskDigits,
    /// Keep only `@` and the domain of an email.
    /// Example: `test@mail.example.com.tw` → `@mail.example.com.tw`
    EmailDomainOnly,
}

impl MaskingStrategy {
    /// Every strategy the registry binds, in menu order
    pub const ALL: [MaskingStrategy; 9] = [
        MaskingStrategy::MaskAll,
        MaskingStrategy::MaskLastN(1),
        MaskingStrategy::MaskLastN(2),
        MaskingStrategy::MaskLastN(4),
        MaskingStrategy::MaskExceptFirstN(1),
        MaskingStrategy::MaskExceptLastN(4),
        MaskingStrategy::MaskTaiwanDate,
        MaskingStrategy::MaskDigits,
        MaskingStrategy::EmailDomainOnly,
    ];

    /// Stable configuration name, or `None` for widths outside the closed set
    pub fn name(&self) -> Option<&'static str> {
        match self {
            MaskingStrategy::MaskAll => Some("mask_all"),
            MaskingStrategy::MaskLastN(1) => Some("mask_last_one"),
            MaskingStrategy::MaskLastN(2) => Some("mask_last_two"),
            MaskingStrategy::MaskLastN(4) => Some("mask_last_four"),
            MaskingStrategy::MaskExceptFirstN(1) => Some("mask_except_first_one"),
            MaskingStrategy::MaskExceptLastN(4) => Some("mask_except_last_four"),
            MaskingStrategy::MaskTaiwanDate => Some("mask_taiwan_date"),
            MaskingStrategy::MaskDigits => Some("mask_digits"),
            MaskingStrategy::EmailDomainOnly => Some("email_domain_only"),
            MaskingStrategy::MaskLastN(_)
            | MaskingStrategy::MaskExceptFirstN(_)
            | MaskingStrategy::MaskExceptLastN(_) => None,
        }
    }

    /// Look up a strategy by its configuration name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.name() == Some(name))
    }

    /// 1-based position in the interactive menu
    pub fn menu_number(&self) -> Option<usize> {
        Self::ALL
            .iter()
            .position(|strategy| strategy == self)
            .map(|idx| idx + 1)
    }

    /// Look up a strategy by its 1-based menu number
    pub fn from_menu_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx))
            .copied()
    }

    /// Whether this strategy is one of the closed set
    pub fn is_standard(&self) -> bool {
        Self::ALL.contains(self)
    }

    /// Human-readable description, used by the CLI menu
    pub fn description(&self) -> String {
        match self {
            MaskingStrategy::MaskAll => "Mask every character".to_string(),
            MaskingStrategy::MaskLastN(n) => format!("Mask the last {n} character(s)"),
            MaskingStrategy::MaskExceptFirstN(n) => {
                format!("Mask everything except the first {n} character(s)")
            }
            MaskingStrategy::MaskExceptLastN(n) => {
                format!("Mask everything except the last {n} character(s)")
            }
            MaskingStrategy::MaskTaiwanDate => {
                "Mask the last year digit, month and day of an ROC date".to_string()
            }
            MaskingStrategy::MaskDigits => "Mask numerals followed by an address unit".to_string(),
            MaskingStrategy::EmailDomainOnly => "Keep only the email domain".to_string(),
        }
    }

    /// Sample input that shows what the strategy does
    pub fn example_input(&self) -> &'static str {
        match self {
            MaskingStrategy::MaskAll => "abc",
            MaskingStrategy::MaskLastN(1) => "114",
            MaskingStrategy::MaskLastN(2) => "2025",
            MaskingStrategy::MaskLastN(_) => "F123456789",
            MaskingStrategy::MaskExceptFirstN(_) => "王小明",
            MaskingStrategy::MaskExceptLastN(_) => "1234567812345678",
            MaskingStrategy::MaskTaiwanDate => "114/06/12",
            MaskingStrategy::MaskDigits => "新北市新莊區中平路一號南棟4樓",
            MaskingStrategy::EmailDomainOnly => "test@mail.example.com.tw",
        }
    }
}

impl fmt::Display for MaskingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.pad(name),
            None => write!(f, "{self:?}"),
        }
    }
}

impl FromStr for MaskingStrategy {
    type Err = MaskError;

    /// Accepts a configuration name or a menu number
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<usize>() {
            return Self::from_menu_number(number).ok_or_else(|| {
                MaskError::Validation(format!(
                    "Unknown strategy number {number}. Must be between 1 and {}",
                    Self::ALL.len()
                ))
            });
        }

        Self::from_name(&trimmed.to_lowercase()).ok_or_else(|| {
            MaskError::Validation(format!(
                "Unknown masking strategy '{trimmed}'. Must be one of: {}",
                Self::ALL
                    .iter()
                    .filter_map(|s| s.name())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })
    }
}

impl TryFrom<String> for MaskingStrategy {
    type Error = MaskError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl Serialize for MaskingStrategy {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.name() {
            Some(name) => serializer.serialize_str(name),
            None => Err(serde::ser::Error::custom(format!(
                "masking strategy {self:?} has no configuration name"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_strategies_have_names() {
        for strategy in MaskingStrategy::ALL {
            let name = strategy.name().unwrap();
            assert_eq!(MaskingStrategy::from_name(name), Some(strategy));
        }
    }

    #[test]
    fn test_non_standard_width_has_no_name() {
        assert_eq!(MaskingStrategy::MaskLastN(3).name(), None);
        assert!(!MaskingStrategy::MaskLastN(3).is_standard());
        assert!(MaskingStrategy::MaskLastN(4).is_standard());
    }

    #[test]
    fn test_menu_numbers() {
        assert_eq!(MaskingStrategy::from_menu_number(1), Some(MaskingStrategy::MaskAll));
        assert_eq!(
            MaskingStrategy::from_menu_number(5),
            Some(MaskingStrategy::MaskExceptFirstN(1))
        );
        assert_eq!(
            MaskingStrategy::from_menu_number(9),
            Some(MaskingStrategy::EmailDomainOnly)
        );
        assert_eq!(MaskingStrategy::from_menu_number(0), None);
        assert_eq!(MaskingStrategy::from_menu_number(10), None);
        assert_eq!(MaskingStrategy::MaskDigits.menu_number(), Some(8));
    }

    #[test]
    fn test_parse_name_and_number() {
        assert_eq!(
            "mask_last_two".parse::<MaskingStrategy>().unwrap(),
            MaskingStrategy::MaskLastN(2)
        );
        assert_eq!(
            " MASK_TAIWAN_DATE ".parse::<MaskingStrategy>().unwrap(),
            MaskingStrategy::MaskTaiwanDate
        );
        assert_eq!(
            "2".parse::<MaskingStrategy>().unwrap(),
            MaskingStrategy::MaskLastN(1)
        );
        assert!("mask_some".parse::<MaskingStrategy>().is_err());
        assert!("42".parse::<MaskingStrategy>().is_err());
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&MaskingStrategy::MaskExceptLastN(4)).unwrap();
        assert_eq!(json, "\"mask_except_last_four\"");

        let parsed: MaskingStrategy = serde_json::from_str("\"email_domain_only\"").unwrap();
        assert_eq!(parsed, MaskingStrategy::EmailDomainOnly);

        assert!(serde_json::from_str::<MaskingStrategy>("\"nope\"").is_err());
    }

    #[test]
    fn test_serde_rejects_non_standard_width() {
        let err = serde_json::to_string(&MaskingStrategy::MaskLastN(3)).unwrap_err();
        assert!(err.to_string().contains("MaskLastN(3)"));

        for strategy in MaskingStrategy::ALL {
            let json = serde_json::to_string(&strategy).unwrap();
            assert_eq!(serde_json::from_str::<MaskingStrategy>(&json).unwrap(), strategy);
        }
    }
}

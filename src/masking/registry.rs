//! Masking strategy registry
//!
//! The registry binds every enabled [`MaskingStrategy`] to its transformation
//! and owns the compiled patterns the regex-driven strategies need. It is
//! built once and is read-only afterwards, so it can be shared across threads
//! behind an `Arc` without locking.
//!
//! # Examples
//!
//! ```
//! use datamask::masking::{MaskingConfig, MaskingRegistry, MaskingStrategy};
//!
//! let registry = MaskingRegistry::new(&MaskingConfig::with_mask_char('#'))?;
//! assert_eq!(
//!     registry.mask(MaskingStrategy::MaskTaiwanDate, "114/06/12"),
//!     Some("11#/##/##".to_string())
//! );
//! # Ok::<(), datamask::domain::MaskError>(())
//! ```

use crate::domain::{MaskError, Result};
use crate::masking::config::MaskingConfig;
use crate::masking::strategy::MaskingStrategy;
use regex::{Captures, Regex};
use std::collections::HashSet;

// `$` is end of text here, so a trailing newline leaves the date unmatched
const TAIWAN_DATE_PATTERN: &str = r"^(\d{2})(\d)/(\d{2})/(\d{2})$";
const NUMERALS: &str = r"一二三四五六七八九十\d";
const SUB_NUMBER_SUFFIX: &str = r"之\d+";
const EMAIL_PLACEHOLDER_WIDTH: usize = 4;

/// Registry of bound masking strategies
#[derive(Debug, Clone)]
pub struct MaskingRegistry {
    mask_char: char,
    taiwan_date: Regex,
    address_digits: Regex,
    strategies: HashSet<MaskingStrategy>,
}

impl MaskingRegistry {
    /// Create a registry from configuration
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::Configuration`] if:
    /// - the mask char is not exactly one character
    /// - the address unit list is empty
    /// - an enabled strategy has no bound transformation
    /// - the strategy name table is incomplete
    pub fn new(config: &MaskingConfig) -> Result<Self> {
        config.validate()?;
        Self::check_name_table()?;

        let units = config
            .address_units
            .iter()
            .map(|unit| regex::escape(unit.trim()))
            .chain(std::iter::once(SUB_NUMBER_SUFFIX.to_string()))
            .collect::<Vec<_>>()
            .join("|");
        let address_digits = Regex::new(&format!("([{NUMERALS}]+)({units})?"))?;
        let taiwan_date = Regex::new(TAIWAN_DATE_PATTERN)?;

        let strategies: HashSet<MaskingStrategy> = config.strategies.iter().copied().collect();

        tracing::debug!(
            strategies = strategies.len(),
            address_units = config.address_units.len(),
            "Masking registry initialized"
        );

        Ok(Self {
            mask_char: config.mask_char()?,
            taiwan_date,
            address_digits,
            strategies,
        })
    }

    /// Every variant of the closed set must round-trip through its name and
    /// menu number, otherwise configured field maps could not reach it
    fn check_name_table() -> Result<()> {
        let mut missing = Vec::new();
        for strategy in MaskingStrategy::ALL {
            let by_name = strategy.name().and_then(MaskingStrategy::from_name);
            let by_number = strategy
                .menu_number()
                .and_then(MaskingStrategy::from_menu_number);
            if by_name != Some(strategy) || by_number != Some(strategy) {
                missing.push(format!("{strategy:?}"));
            }
        }

        if !missing.is_empty() {
            return Err(MaskError::Configuration(format!(
                "Missing masking functions for: {}",
                missing.join(", ")
            )));
        }
        Ok(())
    }

    /// The glyph used for hidden characters
    pub fn mask_char(&self) -> char {
        self.mask_char
    }

    /// Whether a strategy is bound in this registry
    pub fn is_registered(&self, strategy: MaskingStrategy) -> bool {
        self.strategies.contains(&strategy)
    }

    /// Bound strategies in menu order
    pub fn strategies(&self) -> Vec<MaskingStrategy> {
        MaskingStrategy::ALL
            .iter()
            .copied()
            .filter(|s| self.is_registered(*s))
            .collect()
    }

    /// Apply a strategy to a value
    ///
    /// Returns `None` only when the strategy is not registered. Every bound
    /// transformation is total over strings.
    pub fn mask(&self, strategy: MaskingStrategy, data: &str) -> Option<String> {
        if !self.is_registered(strategy) {
            return None;
        }

        let masked = match strategy {
            MaskingStrategy::MaskAll => self.mask_all(data),
            MaskingStrategy::MaskLastN(n) => self.mask_last(data, n),
            MaskingStrategy::MaskExceptFirstN(n) => self.mask_except_first(data, n),
            MaskingStrategy::MaskExceptLastN(n) => self.mask_except_last(data, n),
            MaskingStrategy::MaskTaiwanDate => self.mask_taiwan_date(data),
            MaskingStrategy::MaskDigits => self.mask_digits(data),
            MaskingStrategy::EmailDomainOnly => self.email_domain_only(data),
        };
        Some(masked)
    }

    fn mask_run(&self, count: usize) -> String {
        std::iter::repeat(self.mask_char).take(count).collect()
    }

    fn mask_all(&self, data: &str) -> String {
        self.mask_run(data.chars().count())
    }

    fn mask_last(&self, data: &str, n: usize) -> String {
        let len = data.chars().count();
        if len < n {
            return self.mask_run(n);
        }

        let mut masked: String = data.chars().take(len - n).collect();
        masked.push_str(&self.mask_run(n));
        masked
    }

    fn mask_except_first(&self, data: &str, n: usize) -> String {
        let len = data.chars().count();
        if len < n {
            return data.to_string();
        }

        let mut masked: String = data.chars().take(n).collect();
        masked.push_str(&self.mask_run(len - n));
        masked
    }

    fn mask_except_last(&self, data: &str, n: usize) -> String {
        let len = data.chars().count();
        if len < n {
            return data.to_string();
        }

        let mut masked = self.mask_run(len - n);
        masked.extend(data.chars().skip(len - n));
        masked
    }

    fn mask_taiwan_date(&self, data: &str) -> String {
        let mask = self.mask_char;
        self.taiwan_date
            .replace(data, |caps: &Captures<'_>| {
                format!("{}{mask}/{mask}{mask}/{mask}{mask}", &caps[1])
            })
            .into_owned()
    }

    fn mask_digits(&self, data: &str) -> String {
        let mask = self.mask_char;
        self.address_digits
            .replace_all(data, |caps: &Captures<'_>| match caps.get(2) {
                Some(unit) if !unit.as_str().is_empty() => format!("{mask}{}", unit.as_str()),
                _ => caps[0].to_string(),
            })
            .into_owned()
    }

    fn email_domain_only(&self, data: &str) -> String {
        match data.split_once('@') {
            Some((_, domain)) => format!("@{domain}"),
            None => self.mask_run(EMAIL_PLACEHOLDER_WIDTH),
        }
    }
}

impl Default for MaskingRegistry {
    fn default() -> Self {
        Self::new(&MaskingConfig::default()).expect("Failed to create default MaskingRegistry")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> MaskingRegistry {
        MaskingRegistry::new(&MaskingConfig::with_mask_char('#')).unwrap()
    }

    #[test]
    fn test_mask_all() {
        let r = registry();
        assert_eq!(r.mask(MaskingStrategy::MaskAll, "abc").unwrap(), "###");
        assert_eq!(r.mask(MaskingStrategy::MaskAll, "王小明").unwrap(), "###");
        assert_eq!(r.mask(MaskingStrategy::MaskAll, "").unwrap(), "");
    }

    #[test]
    fn test_mask_last() {
        let r = registry();
        assert_eq!(r.mask(MaskingStrategy::MaskLastN(1), "114").unwrap(), "11#");
        assert_eq!(r.mask(MaskingStrategy::MaskLastN(2), "2025").unwrap(), "20##");
        assert_eq!(
            r.mask(MaskingStrategy::MaskLastN(4), "F123456789").unwrap(),
            "F12345####"
        );
        assert_eq!(r.mask(MaskingStrategy::MaskLastN(4), "ab").unwrap(), "####");
        assert_eq!(r.mask(MaskingStrategy::MaskLastN(4), "").unwrap(), "####");
    }

    #[test]
    fn test_mask_except_first() {
        let r = registry();
        assert_eq!(
            r.mask(MaskingStrategy::MaskExceptFirstN(1), "王小明").unwrap(),
            "王##"
        );
        assert_eq!(r.mask(MaskingStrategy::MaskExceptFirstN(1), "王").unwrap(), "王");
        assert_eq!(r.mask(MaskingStrategy::MaskExceptFirstN(1), "").unwrap(), "");
    }

    #[test]
    fn test_mask_except_last() {
        let r = registry();
        assert_eq!(
            r.mask(MaskingStrategy::MaskExceptLastN(4), "1234567812345678")
                .unwrap(),
            "############5678"
        );
        assert_eq!(r.mask(MaskingStrategy::MaskExceptLastN(4), "123").unwrap(), "123");
    }

    #[test]
    fn test_mask_taiwan_date() {
        let r = registry();
        assert_eq!(
            r.mask(MaskingStrategy::MaskTaiwanDate, "114/06/12").unwrap(),
            "11#/##/##"
        );
        assert_eq!(
            r.mask(MaskingStrategy::MaskTaiwanDate, "2025-06-12").unwrap(),
            "2025-06-12"
        );
        assert_eq!(
            r.mask(MaskingStrategy::MaskTaiwanDate, "1114/06/12").unwrap(),
            "1114/06/12"
        );
        assert_eq!(
            r.mask(MaskingStrategy::MaskTaiwanDate, "date 114/06/12").unwrap(),
            "date 114/06/12"
        );
    }

    #[test]
    fn test_mask_digits() {
        let r = registry();
        assert_eq!(
            r.mask(MaskingStrategy::MaskDigits, "新北市新莊區中平路一號南棟4樓")
                .unwrap(),
            "新北市新莊區中平路#號南棟#樓"
        );
        assert_eq!(
            r.mask(MaskingStrategy::MaskDigits, "台北市信義路五段7號").unwrap(),
            "台北市信義路#段#號"
        );
        assert_eq!(r.mask(MaskingStrategy::MaskDigits, "電話12345").unwrap(), "電話12345");
    }

    #[test]
    fn test_mask_digits_sub_number() {
        let r = registry();
        assert_eq!(
            r.mask(MaskingStrategy::MaskDigits, "中山路100之3號").unwrap(),
            "中山路#之3號"
        );
    }

    #[test]
    fn test_email_domain_only() {
        let r = registry();
        assert_eq!(
            r.mask(MaskingStrategy::EmailDomainOnly, "a@b.com").unwrap(),
            "@b.com"
        );
        assert_eq!(r.mask(MaskingStrategy::EmailDomainOnly, "noat").unwrap(), "####");
        assert_eq!(r.mask(MaskingStrategy::EmailDomainOnly, "").unwrap(), "####");
        assert_eq!(
            r.mask(MaskingStrategy::EmailDomainOnly, "a@b@c").unwrap(),
            "@b@c"
        );
    }

    #[test]
    fn test_unregistered_strategy() {
        let config = MaskingConfig {
            strategies: vec![MaskingStrategy::MaskAll],
            ..MaskingConfig::with_mask_char('#')
        };
        let r = MaskingRegistry::new(&config).unwrap();
        assert!(r.is_registered(MaskingStrategy::MaskAll));
        assert_eq!(r.mask(MaskingStrategy::MaskDigits, "1號"), None);
        assert_eq!(r.strategies(), vec![MaskingStrategy::MaskAll]);
    }

    #[test]
    fn test_unbound_width_is_configuration_error() {
        let config = MaskingConfig {
            strategies: vec![MaskingStrategy::MaskLastN(3)],
            ..MaskingConfig::default()
        };
        let err = MaskingRegistry::new(&config).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_default_registry() {
        let r = MaskingRegistry::default();
        assert_eq!(r.mask_char(), '○');
        assert_eq!(r.strategies().len(), 9);
    }
}

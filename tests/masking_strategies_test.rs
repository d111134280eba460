//! Integration tests for the masking strategy registry

use datamask::masking::{MaskingConfig, MaskingRegistry, MaskingStrategy};
use test_case::test_case;

fn registry() -> MaskingRegistry {
    MaskingRegistry::new(&MaskingConfig::with_mask_char('#')).expect("Failed to create registry")
}

fn mask(strategy: MaskingStrategy, data: &str) -> String {
    registry()
        .mask(strategy, data)
        .expect("Strategy should be registered")
}

#[test_case(MaskingStrategy::MaskAll, "abc", "###" ; "mask all ascii")]
#[test_case(MaskingStrategy::MaskLastN(1), "114", "11#" ; "mask last one")]
#[test_case(MaskingStrategy::MaskLastN(2), "2025", "20##" ; "mask last two")]
#[test_case(MaskingStrategy::MaskLastN(4), "F123456789", "F12345####" ; "mask last four")]
#[test_case(MaskingStrategy::MaskExceptFirstN(1), "王小明", "王##" ; "keep first char")]
#[test_case(
    MaskingStrategy::MaskExceptLastN(4),
    "1234567812345678",
    "############5678"
    ; "keep last four of card"
)]
#[test_case(MaskingStrategy::MaskTaiwanDate, "114/06/12", "11#/##/##" ; "roc date")]
#[test_case(
    MaskingStrategy::MaskDigits,
    "新北市新莊區中平路一號南棟4樓",
    "新北市新莊區中平路#號南棟#樓"
    ; "address numerals"
)]
#[test_case(
    MaskingStrategy::EmailDomainOnly,
    "test@mail.example.com.tw",
    "@mail.example.com.tw"
    ; "email domain"
)]
fn test_documented_examples(strategy: MaskingStrategy, input: &str, expected: &str) {
    assert_eq!(mask(strategy, input), expected);
}

#[test_case(MaskingStrategy::MaskLastN(4), "ab", "####" ; "mask last pads to width")]
#[test_case(MaskingStrategy::MaskLastN(2), "", "##" ; "mask last on empty")]
#[test_case(MaskingStrategy::MaskExceptFirstN(1), "", "" ; "keep first on empty")]
#[test_case(MaskingStrategy::MaskExceptLastN(4), "abc", "abc" ; "keep last short input")]
#[test_case(MaskingStrategy::MaskExceptLastN(4), "abcd", "abcd" ; "keep last exact width")]
fn test_short_inputs(strategy: MaskingStrategy, input: &str, expected: &str) {
    assert_eq!(mask(strategy, input), expected);
}

#[test_case("abc")]
#[test_case("王小明")]
#[test_case("F123456789")]
#[test_case("x")]
fn test_length_preserving_strategies(input: &str) {
    let len = input.chars().count();
    for strategy in [
        MaskingStrategy::MaskAll,
        MaskingStrategy::MaskExceptFirstN(1),
        MaskingStrategy::MaskExceptLastN(4),
    ] {
        assert_eq!(mask(strategy, input).chars().count(), len, "{strategy}");
    }
}

#[test]
fn test_mask_last_length_is_max_of_input_and_width() {
    for input in ["", "a", "ab", "abcd", "abcdefgh"] {
        let len = input.chars().count();
        for n in [1, 2, 4] {
            let masked = mask(MaskingStrategy::MaskLastN(n), input);
            assert_eq!(masked.chars().count(), len.max(n));
            assert!(masked.ends_with(&"#".repeat(n)));
        }
    }
}

#[test]
fn test_mask_all_is_idempotent() {
    let once = mask(MaskingStrategy::MaskAll, "secret value");
    assert_eq!(mask(MaskingStrategy::MaskAll, &once), once);
}

#[test_case("noat", "####" ; "no at sign")]
#[test_case("", "####" ; "empty")]
#[test_case("a@b@c", "@b@c" ; "keeps everything after first at")]
#[test_case("@only", "@only" ; "leading at")]
#[test_case("user@", "@" ; "trailing at")]
fn test_email_domain_only(input: &str, expected: &str) {
    assert_eq!(mask(MaskingStrategy::EmailDomainOnly, input), expected);
}

#[test_case("114/6/12" ; "single digit month")]
#[test_case("2025/06/12" ; "western year")]
#[test_case("114-06-12" ; "dashes")]
#[test_case(" 114/06/12" ; "leading space")]
#[test_case("114/06/12\n" ; "trailing newline")]
#[test_case("" ; "empty")]
fn test_taiwan_date_non_matching_unchanged(input: &str) {
    assert_eq!(mask(MaskingStrategy::MaskTaiwanDate, input), input);
}

#[test_case("台北市信義路五段7號", "台北市信義路#段#號" ; "section and number")]
#[test_case("十二巷3弄", "#巷#弄" ; "lane and alley")]
#[test_case("5巷100之3號", "#巷#之3號" ; "sub number suffix")]
#[test_case("電話0912345678", "電話0912345678" ; "digits without unit")]
#[test_case("", "" ; "empty")]
fn test_mask_digits(input: &str, expected: &str) {
    assert_eq!(mask(MaskingStrategy::MaskDigits, input), expected);
}

#[test]
fn test_default_mask_char() {
    let registry = MaskingRegistry::default();
    assert_eq!(registry.mask_char(), '○');
    assert_eq!(
        registry.mask(MaskingStrategy::MaskExceptFirstN(1), "王小明"),
        Some("王○○".to_string())
    );
}

#[test]
fn test_custom_address_units() {
    let config = MaskingConfig {
        address_units: vec!["F".to_string()],
        ..MaskingConfig::with_mask_char('*')
    };
    let registry = MaskingRegistry::new(&config).expect("Failed to create registry");

    assert_eq!(
        registry.mask(MaskingStrategy::MaskDigits, "12F 5號"),
        Some("*F 5號".to_string())
    );
}

#[test]
fn test_every_standard_strategy_is_registered_by_default() {
    let registry = registry();
    assert_eq!(registry.strategies(), MaskingStrategy::ALL.to_vec());
    for strategy in MaskingStrategy::ALL {
        assert!(registry.mask(strategy, "sample").is_some(), "{strategy}");
    }
}

#[test]
fn test_disabled_strategy_is_not_applied() {
    let config = MaskingConfig {
        strategies: vec![MaskingStrategy::MaskAll],
        ..MaskingConfig::with_mask_char('#')
    };
    let registry = MaskingRegistry::new(&config).expect("Failed to create registry");

    assert_eq!(registry.mask(MaskingStrategy::MaskDigits, "一號"), None);
    assert_eq!(registry.strategies(), vec![MaskingStrategy::MaskAll]);
}

#[test]
fn test_invalid_mask_char_rejected() {
    let mut config = MaskingConfig::default();
    config.mask_char = "##".to_string();
    let err = MaskingRegistry::new(&config).unwrap_err();
    assert!(err.is_configuration());
}

//! Interactive command implementation
//!
//! Prompts for a value and a numbered strategy, masks a single-field record
//! and prints the result.

use crate::config::DatamaskConfig;
use crate::maskable_record;
use crate::masking::{FieldMaskingMap, MaskingService, MaskingStrategy};
use anyhow::Context;
use clap::Args;
use std::io::{self, BufRead, Write};

const VALUE_FIELD: &str = "Value";

/// Arguments for the interactive command
#[derive(Args, Debug)]
pub struct InteractiveArgs {}

/// Single-field record built from the prompted value
#[derive(Debug)]
struct PromptRecord {
    value: String,
}

maskable_record!(PromptRecord {
    value => "Value",
});

impl InteractiveArgs {
    /// Execute the interactive command against stdin/stdout
    pub fn execute(&self, config: &DatamaskConfig) -> anyhow::Result<i32> {
        let service =
            MaskingService::new(&config.masking).context("Failed to build masking registry")?;
        if service.registry().strategies().is_empty() {
            eprintln!("❌ No strategies are enabled in masking.strategies");
            return Ok(2);
        }

        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run(&service, &mut stdin.lock(), &mut stdout.lock())?;
        Ok(0)
    }

    /// Run the prompt loop once; returns the masked value
    pub fn run<R: BufRead, W: Write>(
        &self,
        service: &MaskingService,
        input: &mut R,
        output: &mut W,
    ) -> anyhow::Result<String> {
        writeln!(output, "Enter the data to mask:")?;
        output.flush()?;
        let value = read_line(input)?;

        let registered = service.registry().strategies();
        writeln!(output, "Choose a masking strategy:")?;
        for strategy in &registered {
            if let Some(number) = strategy.menu_number() {
                writeln!(output, "  {number}. {}", strategy.description())?;
            }
        }
        output.flush()?;
        let Some(strategy) = select_strategy(&read_line(input)?, &registered) else {
            anyhow::bail!("No strategies are enabled in masking.strategies");
        };

        let map = FieldMaskingMap::new().with(VALUE_FIELD, strategy);
        let masked = service.apply_masking(PromptRecord { value }, &map);

        writeln!(output, "Masked result: {}", masked.value)?;
        Ok(masked.value)
    }
}

fn read_line<R: BufRead>(input: &mut R) -> anyhow::Result<String> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read from input")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Resolve a menu selection among the registered strategies
///
/// Unknown, unparsable or disabled selections fall back to `MaskAll`, or to
/// the first registered strategy when `MaskAll` is disabled.
fn select_strategy(selection: &str, registered: &[MaskingStrategy]) -> Option<MaskingStrategy> {
    selection
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(MaskingStrategy::from_menu_number)
        .filter(|strategy| registered.contains(strategy))
        .or_else(|| {
            registered
                .iter()
                .copied()
                .find(|s| *s == MaskingStrategy::MaskAll)
        })
        .or_else(|| registered.first().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::masking::MaskingConfig;
    use std::io::Cursor;

    fn service() -> MaskingService {
        MaskingService::new(&MaskingConfig::with_mask_char('#')).unwrap()
    }

    #[test]
    fn test_select_strategy() {
        let all = MaskingStrategy::ALL;
        assert_eq!(select_strategy("2", &all), Some(MaskingStrategy::MaskLastN(1)));
        assert_eq!(select_strategy(" 3 ", &all), Some(MaskingStrategy::MaskLastN(2)));
        assert_eq!(select_strategy("0", &all), Some(MaskingStrategy::MaskAll));
        assert_eq!(select_strategy("99", &all), Some(MaskingStrategy::MaskAll));
        assert_eq!(select_strategy("abc", &all), Some(MaskingStrategy::MaskAll));
    }

    #[test]
    fn test_select_strategy_within_enabled_set() {
        let enabled = [MaskingStrategy::MaskDigits, MaskingStrategy::EmailDomainOnly];
        assert_eq!(select_strategy("9", &enabled), Some(MaskingStrategy::EmailDomainOnly));
        assert_eq!(select_strategy("1", &enabled), Some(MaskingStrategy::MaskDigits));
        assert_eq!(select_strategy("x", &enabled), Some(MaskingStrategy::MaskDigits));
        assert_eq!(select_strategy("1", &[]), None);
    }

    #[test]
    fn test_run_disabled_selection_never_prints_plaintext() {
        let config = MaskingConfig {
            strategies: vec![MaskingStrategy::EmailDomainOnly],
            ..MaskingConfig::with_mask_char('#')
        };
        let service = MaskingService::new(&config).unwrap();
        let mut input = Cursor::new("A123456789\n1\n");
        let mut output = Vec::new();

        let masked = InteractiveArgs {}
            .run(&service, &mut input, &mut output)
            .unwrap();

        assert_eq!(masked, "####");
        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("Masked result: ####"));
        assert!(!printed.contains("1. Mask every character"));
    }

    #[test]
    fn test_execute_without_enabled_strategies_exit_code() {
        let mut config = DatamaskConfig::default();
        config.masking.strategies.clear();
        assert_eq!(InteractiveArgs {}.execute(&config).unwrap(), 2);
    }

    #[test]
    fn test_run_masks_value() {
        let mut input = Cursor::new("王小明\n5\n");
        let mut output = Vec::new();

        let masked = InteractiveArgs {}
            .run(&service(), &mut input, &mut output)
            .unwrap();

        assert_eq!(masked, "王##");
        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("Masked result: 王##"));
        assert!(printed.contains("9. Keep only the email domain"));
    }

    #[test]
    fn test_run_empty_value_left_unchanged() {
        let mut input = Cursor::new("\n1\n");
        let mut output = Vec::new();

        let masked = InteractiveArgs {}
            .run(&service(), &mut input, &mut output)
            .unwrap();
        assert_eq!(masked, "");
    }
}

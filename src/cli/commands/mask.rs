//! Mask command implementation
//!
//! Masks a single value given on the command line.

use crate::config::DatamaskConfig;
use crate::masking::{MaskingService, MaskingStrategy};
use anyhow::Context;
use clap::Args;

/// Arguments for the mask command
#[derive(Args, Debug)]
pub struct MaskArgs {
    /// Value to mask
    #[arg(short, long)]
    pub value: String,

    /// Strategy name or menu number (see `datamask strategies`)
    #[arg(short, long)]
    pub strategy: MaskingStrategy,
}

impl MaskArgs {
    /// Execute the mask command
    pub fn execute(&self, config: &DatamaskConfig) -> anyhow::Result<i32> {
        let service =
            MaskingService::new(&config.masking).context("Failed to build masking registry")?;

        match service.registry().mask(self.strategy, &self.value) {
            Some(masked) => {
                tracing::debug!(strategy = %self.strategy, "Value masked");
                println!("{masked}");
                Ok(0)
            }
            None => {
                eprintln!(
                    "❌ Strategy '{}' is not enabled in masking.strategies",
                    self.strategy
                );
                Ok(2)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_disabled_strategy_exit_code() {
        let mut config = DatamaskConfig::default();
        config.masking.strategies = vec![MaskingStrategy::MaskAll];
        let args = MaskArgs {
            value: "a@b.com".to_string(),
            strategy: MaskingStrategy::EmailDomainOnly,
        };
        assert_eq!(args.execute(&config).unwrap(), 2);
    }

    #[test]
    fn test_mask_exit_code() {
        let args = MaskArgs {
            value: "abc".to_string(),
            strategy: MaskingStrategy::MaskAll,
        };
        assert_eq!(args.execute(&DatamaskConfig::default()).unwrap(), 0);
    }
}

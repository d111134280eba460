//! Strategies command implementation
//!
//! Lists the strategies bound in the registry with an example of each.

use crate::config::DatamaskConfig;
use crate::masking::{MaskingRegistry, MaskingService};
use anyhow::Context;
use clap::Args;

/// Arguments for the strategies command
#[derive(Args, Debug)]
pub struct StrategiesArgs {}

impl StrategiesArgs {
    /// Execute the strategies command
    pub fn execute(&self, config: &DatamaskConfig) -> anyhow::Result<i32> {
        let service =
            MaskingService::new(&config.masking).context("Failed to build masking registry")?;

        for line in strategy_lines(service.registry()) {
            println!("{line}");
        }
        Ok(0)
    }
}

/// One line per bound strategy: number, name, description, example
pub fn strategy_lines(registry: &MaskingRegistry) -> Vec<String> {
    registry
        .strategies()
        .into_iter()
        .filter_map(|strategy| {
            let number = strategy.menu_number()?;
            let example = strategy.example_input();
            let masked = registry.mask(strategy, example)?;
            Some(format!(
                "{number}. {strategy:<24} {}  ({example} → {masked})",
                strategy.description()
            ))
        })
        .collect()
}

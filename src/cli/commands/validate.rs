//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the datamask configuration file.

use crate::config::load_config;
use crate::masking::MaskingRegistry;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        match MaskingRegistry::new(&config.masking) {
            Ok(registry) => {
                println!("✅ Masking registry builds");
                println!();
                println!("Configuration Summary:");
                println!("  Log Level: {}", config.application.log_level);
                println!("  Mask Char: {}", registry.mask_char());
                println!("  Address Units: {}", config.masking.address_units.join(" "));
                println!("  Strategies: {}", registry.strategies().len());
                println!("  Mapped Fields: {}", config.fields.len());
                for (field, strategy) in config.fields.iter() {
                    println!("    {field} → {strategy}");
                }
                println!("  File Logging: {}", config.logging.local_enabled);
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Masking registry failed to build");
                println!("   Error: {e}");
                println!();
                Ok(2)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_missing_file_exit_code() {
        let args = ValidateArgs {};
        assert_eq!(args.execute("does-not-exist.toml").unwrap(), 2);
    }
}

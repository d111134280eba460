//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "datamask.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit the [fields] table in {}", self.output);
                println!("  2. Validate configuration: datamask validate-config");
                println!("  3. Mask a file: datamask mask-json --input records.json");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Sample configuration with every section and its defaults
    pub fn sample_config() -> &'static str {
        r#"# datamask configuration file

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

[masking]
# Glyph substituted for hidden characters (exactly one character)
mask_char = "○"

# Units that mark a preceding numeral as maskable by mask_digits
address_units = ["鄉", "鎮", "區", "路", "段", "巷", "弄", "號", "樓"]

# Strategies available to field maps
strategies = [
    "mask_all",
    "mask_last_one",
    "mask_last_two",
    "mask_last_four",
    "mask_except_first_one",
    "mask_except_last_four",
    "mask_taiwan_date",
    "mask_digits",
    "email_domain_only",
]

# Field name -> strategy used by `datamask mask-json`
[fields]
Name = "mask_except_first_one"
IdNumber = "mask_last_four"
Birthday = "mask_taiwan_date"
Address = "mask_digits"
Email = "email_domain_only"
CardNumber = "mask_except_last_four"

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::parse_config;
    use tempfile::TempDir;

    #[test]
    fn test_sample_config_is_valid() {
        let config = parse_config(InitArgs::sample_config()).unwrap();
        assert_eq!(config.fields.len(), 6);
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("datamask.toml");
        fs::write(&path, "").unwrap();

        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().unwrap(), 2);

        let args = InitArgs { force: true, ..args };
        assert_eq!(args.execute().unwrap(), 0);
        assert!(fs::read_to_string(&path).unwrap().contains("[fields]"));
    }
}

//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for datamask using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// datamask - mask sensitive fields in structured records
#[derive(Parser, Debug)]
#[command(name = "datamask")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults apply when it does not exist)
    #[arg(short, long, default_value = "datamask.toml", env = "DATAMASK_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "DATAMASK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Mask a single value with one strategy
    Mask(commands::mask::MaskArgs),

    /// Prompt for a value and a strategy, then print the masked result
    Interactive(commands::interactive::InteractiveArgs),

    /// Mask fields of a JSON object or array of objects
    MaskJson(commands::mask_json::MaskJsonArgs),

    /// List the available masking strategies
    Strategies(commands::strategies::StrategiesArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

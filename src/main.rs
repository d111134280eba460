// datamask - field-level masking for structured records
// Copyright (c) 2025 datamask Contributors
// Licensed under the MIT License

use clap::Parser;
use datamask::cli::{Cli, Commands};
use datamask::config::{load_or_default, DatamaskConfig};
use datamask::log_error_with_context;
use datamask::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // init and validate-config report config problems themselves
    let config = match &cli.command {
        Commands::Init(_) | Commands::ValidateConfig(_) => None,
        _ => match load_or_default(&cli.config) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(2);
            }
        },
    };

    let logging_config = config
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_default();
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| config.as_ref().map(|c| c.application.log_level.clone()))
        .unwrap_or_else(|| "info".to_string());

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "datamask starting");

    let exit_code = match execute_command(&cli, config.unwrap_or_default()) {
        Ok(code) => code,
        Err(e) => {
            log_error_with_context!(&e, "Command execution failed");
            eprintln!("Error: {e:#}");
            5
        }
    };

    // Flush file logs before exiting
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli, config: DatamaskConfig) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Mask(args) => args.execute(&config),
        Commands::Interactive(args) => args.execute(&config),
        Commands::MaskJson(args) => args.execute(&config),
        Commands::Strategies(args) => args.execute(&config),
        Commands::ValidateConfig(args) => args.execute(&cli.config),
        Commands::Init(args) => args.execute(),
    }
}

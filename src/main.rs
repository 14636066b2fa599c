// Tillsyn - Evidence Pack Compliance & PII Detection
// Copyright (c) 2026 Tillsyn Contributors
// Licensed under the MIT License

use clap::Parser;
use std::process;
use tillsyn::cli::{Cli, Commands};
use tillsyn::config::LoggingConfig;
use tillsyn::logging::init_logging;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging with console-only config (no file logging for CLI)
    let log_level = cli.log_level.as_deref().unwrap_or("info");
    let logging_config = LoggingConfig::default();
    let _guard = match init_logging(log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        "Tillsyn - Evidence Pack Compliance & PII Detection"
    );

    // Execute command and get exit code
    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Validate(args) => args.execute(&cli.config).await,
        Commands::Scan(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}

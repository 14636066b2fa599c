//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Tillsyn using clap.
//!
//! Exit codes: `0` compliant/clean, `1` warnings or PII found, `2`
//! configuration error, `3` non-compliant, `5` fatal error.

pub mod commands;

use clap::{Parser, Subcommand};

/// Tillsyn - Evidence Pack Compliance & PII Detection
#[derive(Parser, Debug)]
#[command(name = "tillsyn")]
#[command(version, about, long_about = None)]
#[command(author = "Tillsyn Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "tillsyn.toml", env = "TILLSYN_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "TILLSYN_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate an evidence pack against the compliance rule set
    Validate(commands::validate::ValidateArgs),

    /// Scan tabular files for PII without running compliance checks
    Scan(commands::scan::ScanArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

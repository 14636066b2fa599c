//! Logging and observability
//!
//! Structured logging with configurable log levels, console output, and
//! optional rotating JSON file output.
//!
//! # Example
//!
//! ```no_run
//! use tillsyn::config::LoggingConfig;
//! use tillsyn::logging::init_logging;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

//! Configuration management for Tillsyn.
//!
//! TOML-based configuration with environment variable substitution
//! (`${VAR_NAME}`), default values for every section and validation on
//! load.
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//! strict_mode = false
//!
//! [compliance]
//! eu_regions = ["eu-north-1", "eu-west-1", "eu-central-1"]
//! approved_algorithms = ["AES-256-GCM", "ChaCha20-Poly1305"]
//! data_retention_minimum_years = 5
//! audit_retention_years = 7
//!
//! [pii]
//! identifier_confidence = 0.95
//! email_confidence = 0.90
//! max_samples_per_type = 3
//!
//! [audit]
//! enabled = true
//! log_path = "./audit/tillsyn_audit.jsonl"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{
    ApplicationConfig, AuditConfig, ComplianceConfig, LoggingConfig, PiiConfig, TillsynConfig,
};

//! Configuration schema types
//!
//! Domain constants (the EU region allow-list, the approved cipher set,
//! retention minima and PII scan constants) live here as configuration,
//! so regulation changes never require touching validation code.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main Tillsyn configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// Every section has workable defaults; an absent file yields a fully
/// functional configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TillsynConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Compliance rule constants
    #[serde(default)]
    pub compliance: ComplianceConfig,

    /// PII scanning constants
    #[serde(default)]
    pub pii: PiiConfig,

    /// Audit sink settings
    #[serde(default)]
    pub audit: AuditConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TillsynConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.compliance.validate()?;
        self.pii.validate()?;
        self.audit.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Treat any failed check as non-compliant (strict mode default)
    #[serde(default)]
    pub strict_mode: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            strict_mode: false,
        }
    }
}

/// Compliance rule constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceConfig {
    /// Allowed EU storage regions
    #[serde(default = "default_eu_regions")]
    pub eu_regions: Vec<String>,

    /// Approved encryption algorithms (256-bit symmetric minimum)
    #[serde(default = "default_approved_algorithms")]
    pub approved_algorithms: Vec<String>,

    /// Statutory minimum retention for waste-management records, in years
    #[serde(default = "default_data_retention_minimum_years")]
    pub data_retention_minimum_years: u32,

    /// Retention requirement for audit entries, in years (enforced by
    /// the audit sink, recorded here for operators)
    #[serde(default = "default_audit_retention_years")]
    pub audit_retention_years: u32,
}

impl ComplianceConfig {
    /// Whether `region` is on the EU allow-list.
    pub fn is_eu_region(&self, region: &str) -> bool {
        self.eu_regions.iter().any(|r| r.eq_ignore_ascii_case(region))
    }

    /// Whether `algorithm` is on the approved cipher set.
    pub fn is_approved_algorithm(&self, algorithm: &str) -> bool {
        self.approved_algorithms
            .iter()
            .any(|a| a.eq_ignore_ascii_case(algorithm))
    }

    fn validate(&self) -> Result<(), String> {
        if self.eu_regions.is_empty() {
            return Err("compliance.eu_regions cannot be empty".to_string());
        }
        if self.approved_algorithms.is_empty() {
            return Err("compliance.approved_algorithms cannot be empty".to_string());
        }
        if self.data_retention_minimum_years == 0 {
            return Err("compliance.data_retention_minimum_years must be > 0".to_string());
        }
        if self.audit_retention_years == 0 {
            return Err("compliance.audit_retention_years must be > 0".to_string());
        }
        Ok(())
    }
}

impl Default for ComplianceConfig {
    fn default() -> Self {
        Self {
            eu_regions: default_eu_regions(),
            approved_algorithms: default_approved_algorithms(),
            data_retention_minimum_years: default_data_retention_minimum_years(),
            audit_retention_years: default_audit_retention_years(),
        }
    }
}

/// PII scanning constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PiiConfig {
    /// Confidence for checksum-confirmed national identifiers
    #[serde(default = "default_identifier_confidence")]
    pub identifier_confidence: f64,

    /// Confidence for email matches (pattern only, no checksum exists)
    #[serde(default = "default_email_confidence")]
    pub email_confidence: f64,

    /// Maximum masked samples retained per PII type
    #[serde(default = "default_max_samples_per_type")]
    pub max_samples_per_type: usize,
}

impl PiiConfig {
    fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("pii.identifier_confidence", self.identifier_confidence),
            ("pii.email_confidence", self.email_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{name} must be between 0.0 and 1.0, got {value}"));
            }
        }
        if self.max_samples_per_type == 0 {
            return Err("pii.max_samples_per_type must be > 0".to_string());
        }
        Ok(())
    }
}

impl Default for PiiConfig {
    fn default() -> Self {
        Self {
            identifier_confidence: default_identifier_confidence(),
            email_confidence: default_email_confidence(),
            max_samples_per_type: default_max_samples_per_type(),
        }
    }
}

/// Audit sink configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable the JSON-lines audit sink
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,
}

impl AuditConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.log_path.as_os_str().is_empty() {
            return Err("audit.log_path cannot be empty when audit is enabled".to_string());
        }
        Ok(())
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_path: default_audit_log_path(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log file path
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_eu_regions() -> Vec<String> {
    // AWS EU regions inside the union; notably excludes eu-west-2
    // (London) post-Brexit.
    ["eu-north-1", "eu-west-1", "eu-west-3", "eu-central-1", "eu-south-1"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_approved_algorithms() -> Vec<String> {
    ["AES-256-GCM", "AES-256-CBC", "ChaCha20-Poly1305"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_data_retention_minimum_years() -> u32 {
    5
}

fn default_audit_retention_years() -> u32 {
    7
}

fn default_identifier_confidence() -> f64 {
    0.95
}

fn default_email_confidence() -> f64 {
    0.90
}

fn default_max_samples_per_type() -> usize {
    3
}

fn default_true() -> bool {
    true
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/tillsyn_audit.jsonl")
}

fn default_local_path() -> String {
    "/var/log/tillsyn".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TillsynConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.compliance.data_retention_minimum_years, 5);
        assert_eq!(config.compliance.audit_retention_years, 7);
        assert_eq!(config.pii.identifier_confidence, 0.95);
        assert_eq!(config.pii.email_confidence, 0.90);
        assert_eq!(config.pii.max_samples_per_type, 3);
    }

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig::default();
        assert!(config.validate().is_ok());

        config.log_level = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_eu_region_membership() {
        let config = ComplianceConfig::default();
        assert!(config.is_eu_region("eu-north-1"));
        assert!(config.is_eu_region("EU-NORTH-1"));
        assert!(!config.is_eu_region("us-east-1"));
        // London is not in the EU.
        assert!(!config.is_eu_region("eu-west-2"));
    }

    #[test]
    fn test_approved_algorithm_membership() {
        let config = ComplianceConfig::default();
        assert!(config.is_approved_algorithm("AES-256-GCM"));
        assert!(config.is_approved_algorithm("aes-256-gcm"));
        assert!(!config.is_approved_algorithm("AES-128-GCM"));
        assert!(!config.is_approved_algorithm("DES"));
    }

    #[test]
    fn test_compliance_config_rejects_empty_lists() {
        let mut config = ComplianceConfig::default();
        config.eu_regions.clear();
        assert!(config.validate().is_err());

        let mut config = ComplianceConfig::default();
        config.approved_algorithms.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_pii_config_rejects_bad_confidence() {
        let mut config = PiiConfig::default();
        config.identifier_confidence = 1.5;
        assert!(config.validate().is_err());

        let mut config = PiiConfig::default();
        config.email_confidence = -0.1;
        assert!(config.validate().is_err());

        let mut config = PiiConfig::default();
        config.max_samples_per_type = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_logging_config_rotation_validation() {
        let mut config = LoggingConfig::default();
        assert!(config.validate().is_ok());

        config.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_audit_config_requires_path_when_enabled() {
        let mut config = AuditConfig::default();
        assert!(config.validate().is_ok());

        config.log_path = PathBuf::new();
        assert!(config.validate().is_err());

        config.enabled = false;
        assert!(config.validate().is_ok());
    }
}

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
    #[arg(short, long, default_value = "tillsyn.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Tillsyn configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Review the rule constants in {}", self.output);
                println!("  2. Validate a pack: tillsyn validate --manifest <pack>/manifest.json");
                println!("  3. Scan loose files: tillsyn scan <file.csv>");
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

    /// Generate the configuration template
    fn generate_config() -> String {
        r#"# Tillsyn Configuration File
# Evidence Pack Compliance & PII Detection

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# Treat any failed check as non-compliant
strict_mode = false

[compliance]
# Allowed EU storage regions (data residency and cross-border rules)
eu_regions = ["eu-north-1", "eu-west-1", "eu-west-3", "eu-central-1", "eu-south-1"]

# Approved encryption algorithms (256-bit symmetric minimum)
approved_algorithms = ["AES-256-GCM", "AES-256-CBC", "ChaCha20-Poly1305"]

# Statutory minimum retention for waste-management records, in years
data_retention_minimum_years = 5

# Retention requirement for audit entries, in years
audit_retention_years = 7

[pii]
# Confidence for checksum-confirmed national identifiers
identifier_confidence = 0.95

# Confidence for email matches
email_confidence = 0.90

# Maximum masked samples retained per PII type
max_samples_per_type = 3

[audit]
# Enable the JSON-lines audit sink
enabled = true

# Audit log file path
log_path = "./audit/tillsyn_audit.jsonl"

[logging]
# Enable local file logging (console logging is always on)
local_enabled = false
local_path = "/var/log/tillsyn"
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_args_defaults() {
        let args = InitArgs {
            output: "tillsyn.toml".to_string(),
            force: false,
        };
        assert_eq!(args.output, "tillsyn.toml");
        assert!(!args.force);
    }

    #[test]
    fn test_generate_config_parses_and_validates() {
        let content = InitArgs::generate_config();
        assert!(content.contains("[compliance]"));
        assert!(content.contains("[pii]"));

        let config: crate::config::TillsynConfig = toml::from_str(&content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.compliance.data_retention_minimum_years, 5);
    }
}

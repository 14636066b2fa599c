//! Scan command implementation
//!
//! This module implements the `scan` command: run the PII scanner over
//! one or more tabular files without the compliance rule set.

use clap::Args;

use crate::config::load_config_or_default;
use crate::pii::{risk, PiiScanner};

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Files to scan
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Emit the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl ScanArgs {
    /// Execute the scan command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Configuration error: {e}");
                return Ok(2);
            }
        };

        let scanner = PiiScanner::new(&config.pii)?;

        let mut groups = Vec::new();
        for file in &self.files {
            tracing::info!(file = %file, "Scanning for PII");
            let content = match tokio::fs::read_to_string(file).await {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("❌ Failed to read {file}: {e}");
                    return Ok(5);
                }
            };
            groups.push(scanner.scan(&content, file));
        }

        let findings = PiiScanner::merge(groups, config.pii.max_samples_per_type);
        let result = risk::assess(findings);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else if result.detected {
            println!(
                "⚠️  PII detected (risk: {:?}, {} match(es))",
                result.risk_level,
                result.total_count()
            );
            for finding in &result.types {
                println!("  {:24} {:>5} match(es)", finding.pii_type.label(), finding.count);
                for location in finding.locations.iter().take(5) {
                    println!(
                        "    {}:{}:{}",
                        location.file, location.line, location.column
                    );
                }
            }
            for recommendation in &result.recommendations {
                println!("  → {recommendation}");
            }
        } else {
            println!("✅ No PII detected in {} file(s)", self.files.len());
        }

        Ok(if result.detected { 1 } else { 0 })
    }
}

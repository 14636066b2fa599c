//! Validate command implementation
//!
//! This module implements the `validate` command: run the full
//! compliance validation of an evidence pack and render the outcome.

use clap::Args;
use std::path::Path;
use std::sync::Arc;

use crate::artifact::FsArtifactReader;
use crate::audit::{AuditSink, JsonlAuditSink, NullAuditSink};
use crate::compliance::check::OverallStatus;
use crate::compliance::engine::{ComplianceEngine, ValidationOptions};
use crate::compliance::report;
use crate::config::load_config_or_default;
use crate::domain::manifest::EvidencePackManifest;

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the evidence pack manifest (JSON)
    #[arg(short, long)]
    pub manifest: String,

    /// Pack root directory for resolving artifact paths
    /// (defaults to the manifest's directory)
    #[arg(long)]
    pub pack_root: Option<String>,

    /// User recorded in the audit trail
    #[arg(long, default_value = "cli")]
    pub user_id: String,

    /// Treat any failed check as non-compliant
    #[arg(long)]
    pub strict: bool,

    /// Omit remediation recommendations from the output
    #[arg(long)]
    pub no_recommendations: bool,

    /// Emit the outcome as JSON instead of the console report
    #[arg(long)]
    pub json: bool,
}

impl ValidateArgs {
    /// Execute the validate command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(manifest = %self.manifest, "Validating evidence pack");

        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Configuration error: {e}");
                return Ok(2);
            }
        };

        let manifest_path = Path::new(&self.manifest);
        let manifest_content = match std::fs::read_to_string(manifest_path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("❌ Failed to read manifest {}: {e}", self.manifest);
                return Ok(5);
            }
        };
        let manifest = match EvidencePackManifest::from_json(&manifest_content) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(5);
            }
        };

        // Artifact paths resolve against the pack root.
        let pack_root = match &self.pack_root {
            Some(root) => Path::new(root).to_path_buf(),
            None => manifest_path
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .to_path_buf(),
        };
        let reader = Arc::new(FsArtifactReader::new(pack_root));

        let audit: Arc<dyn AuditSink> = if config.audit.enabled {
            Arc::new(JsonlAuditSink::new(&config.audit.log_path)?)
        } else {
            Arc::new(NullAuditSink)
        };

        let engine = ComplianceEngine::new(&config, reader, audit)?;

        let mut options = ValidationOptions::new(&self.user_id);
        options.strict_mode = self.strict || config.application.strict_mode;
        options.include_recommendations = !self.no_recommendations;

        let outcome = engine.validate(&manifest, &options).await?;

        if self.json {
            println!("{}", report::format_json(&outcome)?);
        } else {
            println!("{}", report::format_console(&manifest.id, &outcome));
        }

        Ok(match outcome.overall_status {
            OverallStatus::Compliant => 0,
            OverallStatus::Warning => 1,
            OverallStatus::NonCompliant => 3,
        })
    }
}

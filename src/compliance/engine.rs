//! Compliance validation engine
//!
//! The engine orchestrates a full validation run: it scans the pack's
//! tabular artifacts for PII, evaluates every compliance rule, aggregates
//! the verdict and emits exactly one audit record through the injected
//! sink, on the failure path too.
//!
//! # Architecture
//!
//! Collaborators are injected as capability traits:
//! - [`ArtifactReader`]: reads `csv`-typed artifact content
//! - [`AuditSink`]: receives the per-run audit record
//!
//! Check runners are pure functions of the manifest, so the only I/O in
//! a run is artifact reading (concurrent per artifact) and the final
//! audit write.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use tillsyn::artifact::FsArtifactReader;
//! use tillsyn::audit::NullAuditSink;
//! use tillsyn::compliance::engine::{ComplianceEngine, ValidationOptions};
//! use tillsyn::config::TillsynConfig;
//! use tillsyn::domain::EvidencePackManifest;
//!
//! # async fn example(manifest: EvidencePackManifest) -> anyhow::Result<()> {
//! let config = TillsynConfig::default();
//! let engine = ComplianceEngine::new(
//!     &config,
//!     Arc::new(FsArtifactReader::new(".")),
//!     Arc::new(NullAuditSink),
//! )?;
//!
//! let outcome = engine
//!     .validate(&manifest, &ValidationOptions::new("inspector-17"))
//!     .await?;
//! println!("{:?}", outcome.overall_status);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::artifact::ArtifactReader;
use crate::audit::{AuditEntry, AuditSink, AuditStatus};
use crate::compliance::check::{ComplianceCheck, ComplianceSummary, OverallStatus};
use crate::compliance::ees::{self, EesCompliance};
use crate::compliance::gdpr::{self, GdprAssessment};
use crate::compliance::runners;
use crate::config::schema::{ComplianceConfig, PiiConfig, TillsynConfig};
use crate::domain::errors::TillsynError;
use crate::domain::manifest::EvidencePackManifest;
use crate::domain::result::Result;
use crate::pii::models::PiiDetectionResult;
use crate::pii::{risk, PiiScanner};

const VALIDATION_ACTION: &str = "compliance_validation";

/// Options for a validation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOptions {
    /// User on whose behalf the validation runs (recorded in the audit trail).
    pub user_id: String,
    /// Treat any failed check as non-compliant.
    pub strict_mode: bool,
    /// Include remediation recommendations in the outcome.
    pub include_recommendations: bool,
}

impl ValidationOptions {
    /// Default options for the given user: lenient mode, recommendations on.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            strict_mode: false,
            include_recommendations: true,
        }
    }

    pub fn strict(mut self) -> Self {
        self.strict_mode = true;
        self
    }

    pub fn without_recommendations(mut self) -> Self {
        self.include_recommendations = false;
        self
    }
}

/// The complete result of a validation run. Serializes to camelCase JSON
/// for downstream reporting consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    pub overall_status: OverallStatus,
    pub checks: Vec<ComplianceCheck>,
    pub gdpr_assessment: GdprAssessment,
    pub pii_detection: PiiDetectionResult,
    pub ees_compliance: EesCompliance,
    pub summary: ComplianceSummary,
}

/// Validates evidence packs against the configured rule set.
pub struct ComplianceEngine {
    compliance: ComplianceConfig,
    pii: PiiConfig,
    scanner: PiiScanner,
    reader: Arc<dyn ArtifactReader>,
    audit: Arc<dyn AuditSink>,
}

impl ComplianceEngine {
    /// Create an engine from configuration and injected collaborators.
    ///
    /// # Errors
    ///
    /// Returns an error if the scanner patterns fail to compile.
    pub fn new(
        config: &TillsynConfig,
        reader: Arc<dyn ArtifactReader>,
        audit: Arc<dyn AuditSink>,
    ) -> Result<Self> {
        Ok(Self {
            compliance: config.compliance.clone(),
            pii: config.pii.clone(),
            scanner: PiiScanner::new(&config.pii)?,
            reader,
            audit,
        })
    }

    /// Run a full compliance validation of the pack.
    ///
    /// # Behavior
    ///
    /// 1. Scans every `csv` artifact for PII (concurrently; fail-closed
    ///    on unreadable artifacts)
    /// 2. Evaluates all six check categories
    /// 3. Aggregates the summary and overall verdict
    /// 4. Emits exactly one audit record, on the success and failure
    ///    paths alike; a failing sink is logged and never masks the
    ///    validation outcome
    ///
    /// # Errors
    ///
    /// Returns [`TillsynError::PiiDetection`] when an artifact cannot be
    /// read: an unscannable artifact cannot be certified PII-free.
    pub async fn validate(
        &self,
        manifest: &EvidencePackManifest,
        options: &ValidationOptions,
    ) -> Result<ValidationOutcome> {
        tracing::info!(
            pack_id = %manifest.id,
            user_id = %options.user_id,
            strict_mode = options.strict_mode,
            "Starting compliance validation"
        );

        let result = self.run(manifest, options).await;
        self.emit_audit(manifest, options, &result);
        result
    }

    async fn run(
        &self,
        manifest: &EvidencePackManifest,
        options: &ValidationOptions,
    ) -> Result<ValidationOutcome> {
        let mut pii = self.scan_artifacts(manifest).await?;

        let mut checks = vec![
            runners::data_residency(manifest, &self.compliance),
            runners::encryption(manifest, &self.compliance),
        ];

        let gdpr_outcome = gdpr::evaluate(manifest, &pii, &self.compliance);
        checks.extend(gdpr_outcome.checks);

        checks.push(runners::retention(manifest, &self.compliance));
        checks.push(runners::audit_trail(manifest));
        checks.push(runners::cross_border(manifest, &self.compliance));

        let summary = ComplianceSummary::from_checks(&checks);
        let overall_status = OverallStatus::from_checks(&checks, options.strict_mode);
        let ees_compliance = ees::assess(manifest, &self.compliance);

        if !options.include_recommendations {
            for check in &mut checks {
                check.recommendation = None;
            }
            pii.recommendations.clear();
        }

        tracing::info!(
            pack_id = %manifest.id,
            status = ?overall_status,
            passed = summary.passed,
            failed = summary.failed,
            "Compliance validation finished"
        );

        Ok(ValidationOutcome {
            overall_status,
            checks,
            gdpr_assessment: gdpr_outcome.assessment,
            pii_detection: pii,
            ees_compliance,
            summary,
        })
    }

    /// Scan every `csv` artifact and merge the findings per PII type.
    ///
    /// Artifacts are independent, so reads and scans run concurrently;
    /// the type-keyed merge keeps the result order-independent.
    async fn scan_artifacts(&self, manifest: &EvidencePackManifest) -> Result<PiiDetectionResult> {
        let scans = manifest.artifacts_of_type("csv").map(|artifact| async move {
            let content = self
                .reader
                .read_to_string(&artifact.path)
                .await
                .map_err(|e| {
                    TillsynError::PiiDetection(format!("artifact {}: {e}", artifact.path))
                })?;
            Ok::<_, TillsynError>(self.scanner.scan(&content, &artifact.filename))
        });

        let groups = futures::future::try_join_all(scans).await?;
        let findings = PiiScanner::merge(groups, self.pii.max_samples_per_type);
        Ok(risk::assess(findings))
    }

    /// Emit the single audit record for this run. Best effort: sink
    /// failures are logged, never propagated.
    fn emit_audit(
        &self,
        manifest: &EvidencePackManifest,
        options: &ValidationOptions,
        result: &Result<ValidationOutcome>,
    ) {
        let entry = match result {
            Ok(outcome) => AuditEntry {
                id: Uuid::new_v4(),
                pack_id: manifest.id.clone(),
                timestamp: chrono::Utc::now(),
                user_id: options.user_id.clone(),
                action: VALIDATION_ACTION.to_string(),
                status: AuditStatus::Success,
                details: format!(
                    "{} checks: {} passed, {} failed, {} warnings",
                    outcome.checks.len(),
                    outcome.summary.passed,
                    outcome.summary.failed,
                    outcome.summary.warnings
                ),
                metadata: serde_json::json!({
                    "overallStatus": outcome.overall_status,
                    "piiRiskLevel": outcome.pii_detection.risk_level,
                    "strictMode": options.strict_mode,
                }),
            },
            Err(error) => AuditEntry {
                id: Uuid::new_v4(),
                pack_id: manifest.id.clone(),
                timestamp: chrono::Utc::now(),
                user_id: options.user_id.clone(),
                action: VALIDATION_ACTION.to_string(),
                status: AuditStatus::Failure,
                details: error.to_string(),
                metadata: serde_json::json!({
                    "strictMode": options.strict_mode,
                }),
            },
        };

        if let Err(audit_error) = self.audit.log(&entry) {
            tracing::warn!(
                pack_id = %manifest.id,
                error = %audit_error,
                "Audit sink rejected the validation record"
            );
        }
    }
}

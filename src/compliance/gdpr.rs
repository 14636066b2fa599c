//! GDPR rule evaluation and data-subject rights assessment
//!
//! The GDPR runner produces its compliance checks plus a structured
//! [`GdprAssessment`] snapshot. The assessment is derived from manifest
//! metadata and the PII scan on every run; it is never stored.

use serde::{Deserialize, Serialize};

use crate::compliance::check::{CheckType, ComplianceCheck, Severity};
use crate::config::schema::ComplianceConfig;
use crate::domain::manifest::EvidencePackManifest;
use crate::pii::models::{PiiDetectionResult, RiskLevel};

pub(crate) const GDPR_RETENTION_REF: &str = "GDPR Art. 5(1)(e)";
pub(crate) const GDPR_PII_REF: &str = "GDPR Art. 9; Art. 87";

/// Retention policies that structurally prevent erasure while active.
const IMMUTABLE_POLICIES: [&str; 3] = ["immutable", "legal_hold", "worm"];

/// Snapshot of which data-subject rights and GDPR principles the pack
/// currently satisfies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GdprAssessment {
    pub right_of_access: bool,
    pub right_of_erasure: bool,
    pub right_to_rectification: bool,
    pub right_to_portability: bool,
    pub lawful_basis: Vec<String>,
    pub data_minimization: bool,
    pub purpose_limitation: bool,
    pub retention_compliance: bool,
    pub privacy_by_design: bool,
}

/// Result of the GDPR runner: its checks plus the derived assessment.
#[derive(Debug, Clone)]
pub struct GdprOutcome {
    pub checks: Vec<ComplianceCheck>,
    pub assessment: GdprAssessment,
}

/// Evaluate GDPR rules against the manifest and the PII scan result.
pub fn evaluate(
    manifest: &EvidencePackManifest,
    pii: &PiiDetectionResult,
    config: &ComplianceConfig,
) -> GdprOutcome {
    let mut checks = Vec::new();

    let minimum = config.data_retention_minimum_years;
    let retention_compliant = manifest
        .compliance
        .retention
        .years
        .is_some_and(|years| years >= minimum);

    // Storage-limitation variant of the retention rule. The statutory
    // retention runner cites the waste ordinance; this one cites GDPR.
    if retention_compliant {
        checks.push(ComplianceCheck::passed(
            CheckType::Gdpr,
            "Storage limitation",
            format!("Retention schedule satisfies the {minimum}-year processing baseline"),
            GDPR_RETENTION_REF,
        ));
    } else {
        checks.push(ComplianceCheck::failed(
            CheckType::Gdpr,
            Severity::High,
            "Storage limitation",
            "Retention schedule does not satisfy the processing baseline",
            format!("Align the retention schedule with the {minimum}-year baseline"),
            GDPR_RETENTION_REF,
        ));
    }

    // Critical-risk PII in the artifacts is a GDPR incident of its own.
    if pii.risk_level == RiskLevel::Critical {
        checks.push(ComplianceCheck::failed(
            CheckType::Gdpr,
            Severity::Critical,
            "Personal data in exported artifacts",
            format!(
                "PII scan classified the pack as critical risk ({} matches across {} categories)",
                pii.total_count(),
                pii.types.len()
            ),
            "Remove or pseudonymize the detected personal data before distribution",
            GDPR_PII_REF,
        ));
    }

    let assessment = derive_assessment(manifest, pii, retention_compliant);

    GdprOutcome { checks, assessment }
}

fn derive_assessment(
    manifest: &EvidencePackManifest,
    pii: &PiiDetectionResult,
    retention_compliant: bool,
) -> GdprAssessment {
    GdprAssessment {
        // The export pipeline produces structured, retrievable artifacts,
        // so access, rectification and portability hold for every pack.
        right_of_access: true,
        right_of_erasure: erasure_possible(manifest.compliance.retention.policy.as_deref()),
        right_to_rectification: true,
        right_to_portability: true,
        lawful_basis: vec![
            "legal_obligation (GDPR Art. 6(1)(c))".to_string(),
            "public_interest (GDPR Art. 6(1)(e))".to_string(),
        ],
        data_minimization: !pii.detected,
        purpose_limitation: true,
        retention_compliance: retention_compliant,
        privacy_by_design: pii.risk_level != RiskLevel::Critical,
    }
}

/// Erasure is structurally possible unless the pack sits under an
/// immutability regime; a hold must lapse before Art. 17 can be honored.
fn erasure_possible(policy: Option<&str>) -> bool {
    match policy {
        Some(policy) => !IMMUTABLE_POLICIES
            .iter()
            .any(|p| policy.eq_ignore_ascii_case(p)),
        None => true,
    }
}

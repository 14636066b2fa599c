//! Compliance check result types and verdict aggregation

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Rule categories evaluated against an evidence pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckType {
    DataResidency,
    Encryption,
    Gdpr,
    Retention,
    Audit,
    CrossBorder,
}

impl std::fmt::Display for CheckType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckType::DataResidency => write!(f, "data_residency"),
            CheckType::Encryption => write!(f, "encryption"),
            CheckType::Gdpr => write!(f, "gdpr"),
            CheckType::Retention => write!(f, "retention"),
            CheckType::Audit => write!(f, "audit"),
            CheckType::CrossBorder => write!(f, "cross_border"),
        }
    }
}

/// Outcome of a single rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Passed,
    Failed,
    Warning,
}

/// Severity of a compliance finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// A single rule evaluation result. Immutable once produced; ids are
/// generated per evaluation and never reused.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceCheck {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub check_type: CheckType,
    pub status: CheckStatus,
    pub description: String,
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    pub severity: Severity,
    /// Fixed citation for the rule, never computed.
    pub regulatory_reference: String,
}

impl ComplianceCheck {
    /// A passing check (low severity, no recommendation).
    pub fn passed(
        check_type: CheckType,
        description: impl Into<String>,
        details: impl Into<String>,
        regulatory_reference: &'static str,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            check_type,
            status: CheckStatus::Passed,
            description: description.into(),
            details: details.into(),
            recommendation: None,
            severity: Severity::Low,
            regulatory_reference: regulatory_reference.to_string(),
        }
    }

    /// A failing check with the given severity and remediation.
    pub fn failed(
        check_type: CheckType,
        severity: Severity,
        description: impl Into<String>,
        details: impl Into<String>,
        recommendation: impl Into<String>,
        regulatory_reference: &'static str,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            check_type,
            status: CheckStatus::Failed,
            description: description.into(),
            details: details.into(),
            recommendation: Some(recommendation.into()),
            severity,
            regulatory_reference: regulatory_reference.to_string(),
        }
    }

    /// A critical finding that did not pass forces a non-compliant verdict.
    pub fn is_blocking(&self) -> bool {
        self.severity == Severity::Critical && self.status != CheckStatus::Passed
    }
}

/// Counts over a check list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceSummary {
    pub passed: usize,
    pub failed: usize,
    pub warnings: usize,
    /// Checks with critical severity that did not pass.
    pub critical: usize,
}

impl ComplianceSummary {
    pub fn from_checks(checks: &[ComplianceCheck]) -> Self {
        Self {
            passed: checks
                .iter()
                .filter(|c| c.status == CheckStatus::Passed)
                .count(),
            failed: checks
                .iter()
                .filter(|c| c.status == CheckStatus::Failed)
                .count(),
            warnings: checks
                .iter()
                .filter(|c| c.status == CheckStatus::Warning)
                .count(),
            critical: checks.iter().filter(|c| c.is_blocking()).count(),
        }
    }
}

/// Overall verdict for a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    Compliant,
    Warning,
    NonCompliant,
}

impl OverallStatus {
    /// Compute the verdict over a check list.
    ///
    /// 1. Any critical-severity check that did not pass → non-compliant.
    /// 2. Otherwise any failed check → non-compliant in strict mode,
    ///    warning otherwise.
    /// 3. Otherwise any warning check → warning.
    /// 4. Otherwise → compliant.
    pub fn from_checks(checks: &[ComplianceCheck], strict_mode: bool) -> Self {
        if checks.iter().any(ComplianceCheck::is_blocking) {
            return OverallStatus::NonCompliant;
        }
        if checks.iter().any(|c| c.status == CheckStatus::Failed) {
            return if strict_mode {
                OverallStatus::NonCompliant
            } else {
                OverallStatus::Warning
            };
        }
        if checks.iter().any(|c| c.status == CheckStatus::Warning) {
            return OverallStatus::Warning;
        }
        OverallStatus::Compliant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_REF: &str = "GDPR Art. 32(1)(a)";

    fn check(status: CheckStatus, severity: Severity) -> ComplianceCheck {
        ComplianceCheck {
            id: Uuid::new_v4(),
            check_type: CheckType::Encryption,
            status,
            description: "test".to_string(),
            details: String::new(),
            recommendation: None,
            severity,
            regulatory_reference: TEST_REF.to_string(),
        }
    }

    #[test]
    fn test_all_passed_is_compliant() {
        let checks = vec![
            check(CheckStatus::Passed, Severity::Low),
            check(CheckStatus::Passed, Severity::Critical),
        ];
        assert_eq!(
            OverallStatus::from_checks(&checks, false),
            OverallStatus::Compliant
        );
        assert_eq!(
            OverallStatus::from_checks(&checks, true),
            OverallStatus::Compliant
        );
    }

    #[test]
    fn test_critical_failure_overrides_everything() {
        let checks = vec![
            check(CheckStatus::Passed, Severity::Low),
            check(CheckStatus::Failed, Severity::Critical),
        ];
        // Critical + not passed is non-compliant even without strict mode.
        assert_eq!(
            OverallStatus::from_checks(&checks, false),
            OverallStatus::NonCompliant
        );
    }

    #[test]
    fn test_critical_warning_is_also_blocking() {
        let checks = vec![check(CheckStatus::Warning, Severity::Critical)];
        assert_eq!(
            OverallStatus::from_checks(&checks, false),
            OverallStatus::NonCompliant
        );
    }

    #[test]
    fn test_non_critical_failure_depends_on_strict_mode() {
        let checks = vec![
            check(CheckStatus::Passed, Severity::Low),
            check(CheckStatus::Failed, Severity::High),
        ];
        assert_eq!(
            OverallStatus::from_checks(&checks, false),
            OverallStatus::Warning
        );
        assert_eq!(
            OverallStatus::from_checks(&checks, true),
            OverallStatus::NonCompliant
        );
    }

    #[test]
    fn test_warning_only_yields_warning() {
        let checks = vec![
            check(CheckStatus::Passed, Severity::Low),
            check(CheckStatus::Warning, Severity::Medium),
        ];
        assert_eq!(
            OverallStatus::from_checks(&checks, true),
            OverallStatus::Warning
        );
    }

    #[test]
    fn test_adding_blocking_check_always_forces_non_compliant() {
        // Verdict monotonicity: whatever the existing set looked like,
        // one more critical failure settles it.
        let base_sets = vec![
            vec![],
            vec![check(CheckStatus::Passed, Severity::Low)],
            vec![check(CheckStatus::Warning, Severity::Medium)],
            vec![check(CheckStatus::Failed, Severity::High)],
            vec![
                check(CheckStatus::Passed, Severity::Critical),
                check(CheckStatus::Warning, Severity::Low),
            ],
        ];
        for mut set in base_sets {
            set.push(check(CheckStatus::Failed, Severity::Critical));
            for strict in [false, true] {
                assert_eq!(
                    OverallStatus::from_checks(&set, strict),
                    OverallStatus::NonCompliant
                );
            }
        }
    }

    #[test]
    fn test_summary_counts() {
        let checks = vec![
            check(CheckStatus::Passed, Severity::Low),
            check(CheckStatus::Passed, Severity::Critical),
            check(CheckStatus::Failed, Severity::Critical),
            check(CheckStatus::Failed, Severity::High),
            check(CheckStatus::Warning, Severity::Medium),
        ];
        let summary = ComplianceSummary::from_checks(&checks);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.warnings, 1);
        // Only the failed critical counts; the passed critical rule is fine.
        assert_eq!(summary.critical, 1);
    }

    #[test]
    fn test_check_serialization_wire_names() {
        let c = ComplianceCheck::failed(
            CheckType::CrossBorder,
            Severity::Critical,
            "Cross-border transfer",
            "region us-east-1 is outside the EU",
            "Move the pack to an EU region",
            "GDPR Ch. V Art. 44-49",
        );
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["type"], "cross_border");
        assert_eq!(json["status"], "failed");
        assert_eq!(json["severity"], "critical");
        assert_eq!(json["regulatoryReference"], "GDPR Ch. V Art. 44-49");
    }

    #[test]
    fn test_overall_status_serialization() {
        assert_eq!(
            serde_json::to_value(OverallStatus::NonCompliant).unwrap(),
            "non_compliant"
        );
        assert_eq!(
            serde_json::to_value(OverallStatus::Compliant).unwrap(),
            "compliant"
        );
    }
}

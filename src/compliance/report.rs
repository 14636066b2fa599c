//! Console and JSON rendering of validation outcomes
//!
//! The outcome itself is a plain data structure; this module formats it
//! for the terminal and for downstream JSON consumers.

use crate::compliance::check::{CheckStatus, OverallStatus};
use crate::compliance::engine::ValidationOutcome;

/// Format an outcome for console output.
pub fn format_console(pack_id: &str, outcome: &ValidationOutcome) -> String {
    let mut output = String::new();

    output.push_str("\n═══════════════════════════════════════════════════════════════\n");
    output.push_str("              EVIDENCE PACK COMPLIANCE REPORT                  \n");
    output.push_str("═══════════════════════════════════════════════════════════════\n\n");

    output.push_str(&format!("  Pack:           {pack_id}\n"));
    output.push_str(&format!(
        "  Overall Status: {}\n",
        status_label(outcome.overall_status)
    ));
    output.push_str(&format!(
        "  Checks:         {} passed, {} failed, {} warnings ({} critical)\n",
        outcome.summary.passed,
        outcome.summary.failed,
        outcome.summary.warnings,
        outcome.summary.critical
    ));
    output.push('\n');

    output.push_str("  CHECKS\n");
    output.push_str("  ─────────────────────────────────────────────────────────────\n");
    for check in &outcome.checks {
        let marker = match check.status {
            CheckStatus::Passed => "✅",
            CheckStatus::Failed => "❌",
            CheckStatus::Warning => "⚠️ ",
        };
        output.push_str(&format!(
            "  {marker} [{}] {}\n       {}\n",
            check.check_type, check.description, check.details
        ));
        if let Some(ref recommendation) = check.recommendation {
            output.push_str(&format!("       → {recommendation}\n"));
        }
    }
    output.push('\n');

    output.push_str("  PII SCAN\n");
    output.push_str("  ─────────────────────────────────────────────────────────────\n");
    if outcome.pii_detection.detected {
        output.push_str(&format!(
            "  Detected: yes (risk: {:?})\n",
            outcome.pii_detection.risk_level
        ));
        for finding in &outcome.pii_detection.types {
            output.push_str(&format!(
                "    {:24} {:>5} match(es)\n",
                finding.pii_type.label(),
                finding.count
            ));
            for sample in &finding.samples {
                output.push_str(&format!("      sample: {sample}\n"));
            }
        }
        for recommendation in &outcome.pii_detection.recommendations {
            output.push_str(&format!("    → {recommendation}\n"));
        }
    } else {
        output.push_str("  Detected: no\n");
    }
    output.push('\n');

    output.push_str("  GDPR ASSESSMENT\n");
    output.push_str("  ─────────────────────────────────────────────────────────────\n");
    let assessment = &outcome.gdpr_assessment;
    output.push_str(&format!(
        "    Erasure possible:     {}\n",
        yes_no(assessment.right_of_erasure)
    ));
    output.push_str(&format!(
        "    Retention compliant:  {}\n",
        yes_no(assessment.retention_compliance)
    ));
    output.push_str(&format!(
        "    Data minimization:    {}\n",
        yes_no(assessment.data_minimization)
    ));
    output.push_str(&format!(
        "    Privacy by design:    {}\n",
        yes_no(assessment.privacy_by_design)
    ));

    output.push_str("\n═══════════════════════════════════════════════════════════════\n");

    output
}

/// Format an outcome as pretty-printed JSON.
pub fn format_json(outcome: &ValidationOutcome) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(outcome)
}

fn status_label(status: OverallStatus) -> &'static str {
    match status {
        OverallStatus::Compliant => "COMPLIANT",
        OverallStatus::Warning => "WARNING",
        OverallStatus::NonCompliant => "NON-COMPLIANT",
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

//! Risk classification and remediation recommendations for PII findings
//!
//! National identifiers are special-category data under GDPR Art. 87, so
//! their presence forces a critical classification regardless of count.
//! All other thresholds are volume-based.

use crate::pii::models::{PiiDetectionResult, PiiFinding, PiiType, RiskLevel};

/// Classify a set of findings into an overall risk level.
pub fn classify(types: &[PiiFinding]) -> RiskLevel {
    let total: usize = types.iter().map(|f| f.count).sum();
    let has_identifier = types
        .iter()
        .any(|f| f.pii_type == PiiType::NationalIdentifier && f.count > 0);

    if has_identifier || total > 100 {
        RiskLevel::Critical
    } else if total > 20 {
        RiskLevel::High
    } else if total > 5 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Generate remediation recommendations for the categories present.
///
/// Recommendations are additive per category and deterministic for a
/// given type set.
pub fn recommend(types: &[PiiFinding]) -> Vec<String> {
    let mut recommendations = Vec::new();

    if types
        .iter()
        .any(|f| f.pii_type == PiiType::NationalIdentifier)
    {
        recommendations.push(
            "Mask or pseudonymize national identifiers before the pack leaves the controlled environment"
                .to_string(),
        );
        recommendations.push(
            "Verify that explicit consent or another lawful basis covers processing of national identifiers"
                .to_string(),
        );
    }

    if types.iter().any(|f| f.pii_type == PiiType::Email) {
        recommendations.push(
            "Minimize contact data in exported artifacts to what the processing purpose requires"
                .to_string(),
        );
    }

    if !types.is_empty() {
        recommendations.push(
            "Conduct a Data Protection Impact Assessment (DPIA) before distributing this pack"
                .to_string(),
        );
    }

    recommendations
}

/// Assemble the complete detection result from merged findings.
pub fn assess(types: Vec<PiiFinding>) -> PiiDetectionResult {
    let risk_level = classify(&types);
    let recommendations = recommend(&types);
    PiiDetectionResult {
        detected: !types.is_empty(),
        risk_level,
        recommendations,
        types,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn finding(pii_type: PiiType, count: usize) -> PiiFinding {
        PiiFinding {
            pii_type,
            count,
            confidence: 0.9,
            samples: Vec::new(),
            locations: Vec::new(),
        }
    }

    #[test_case(1, RiskLevel::Low; "single email is low")]
    #[test_case(5, RiskLevel::Low; "five is still low")]
    #[test_case(6, RiskLevel::Medium; "six crosses medium")]
    #[test_case(20, RiskLevel::Medium; "twenty is still medium")]
    #[test_case(21, RiskLevel::High; "twenty one crosses high")]
    #[test_case(100, RiskLevel::High; "hundred is still high")]
    #[test_case(101, RiskLevel::Critical; "above hundred is critical")]
    fn test_volume_thresholds(count: usize, expected: RiskLevel) {
        let types = vec![finding(PiiType::Email, count)];
        assert_eq!(classify(&types), expected);
    }

    #[test]
    fn test_identifier_forces_critical_even_at_count_one() {
        let types = vec![finding(PiiType::NationalIdentifier, 1)];
        assert_eq!(classify(&types), RiskLevel::Critical);
    }

    #[test]
    fn test_risk_is_monotonic_in_count() {
        // Holding type composition fixed, more matches never lowers risk.
        let mut previous = RiskLevel::Low;
        for count in 1..=150 {
            let level = classify(&[finding(PiiType::Email, count)]);
            assert!(level >= previous, "risk dropped at count {count}");
            previous = level;
        }
    }

    #[test]
    fn test_no_findings_is_low() {
        assert_eq!(classify(&[]), RiskLevel::Low);
    }

    #[test]
    fn test_recommendations_for_identifiers_include_masking_and_consent() {
        let recs = recommend(&[finding(PiiType::NationalIdentifier, 1)]);
        assert!(recs.iter().any(|r| r.contains("pseudonymize")));
        assert!(recs.iter().any(|r| r.contains("lawful basis")));
        assert!(recs.iter().any(|r| r.contains("DPIA")));
    }

    #[test]
    fn test_recommendations_deterministic() {
        let types = vec![
            finding(PiiType::NationalIdentifier, 2),
            finding(PiiType::Email, 3),
        ];
        assert_eq!(recommend(&types), recommend(&types));
    }

    #[test]
    fn test_no_recommendations_without_findings() {
        assert!(recommend(&[]).is_empty());
    }

    #[test]
    fn test_assess_assembles_result() {
        let result = assess(vec![finding(PiiType::Email, 2)]);
        assert!(result.detected);
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert!(!result.recommendations.is_empty());

        let clean = assess(Vec::new());
        assert!(!clean.detected);
        assert_eq!(clean.risk_level, RiskLevel::Low);
        assert!(clean.recommendations.is_empty());
    }
}

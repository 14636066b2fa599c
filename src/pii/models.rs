//! PII detection data models

use serde::{Deserialize, Serialize};

/// Categories of PII the scanner detects in tabular artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiType {
    /// Swedish national personal identifier (personnummer).
    NationalIdentifier,
    /// Email address.
    Email,
}

impl PiiType {
    /// Get human-readable label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Self::NationalIdentifier => "NATIONAL_IDENTIFIER",
            Self::Email => "EMAIL",
        }
    }
}

/// Position of a PII match inside an artifact, for audit traceability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiiLocation {
    /// Artifact the match was found in.
    pub file: String,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column of the match start.
    pub column: usize,
}

/// Aggregated matches of one PII type.
///
/// `samples` only ever holds masked values; raw matches never leave the
/// scanner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PiiFinding {
    /// PII category.
    #[serde(rename = "type")]
    pub pii_type: PiiType,
    /// Number of confirmed matches.
    pub count: usize,
    /// Detection confidence (fixed per category, see `[pii]` config).
    pub confidence: f64,
    /// Masked sample values, bounded per category.
    pub samples: Vec<String>,
    /// All match locations.
    pub locations: Vec<PiiLocation>,
}

/// Risk level derived from a set of PII findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

/// The complete result of scanning a pack's artifacts for PII.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PiiDetectionResult {
    /// Whether any PII was found.
    pub detected: bool,
    /// Per-type findings; types with zero matches are omitted.
    pub types: Vec<PiiFinding>,
    /// Overall risk classification.
    pub risk_level: RiskLevel,
    /// Remediation recommendations.
    pub recommendations: Vec<String>,
}

impl PiiDetectionResult {
    /// Total confirmed matches across all types.
    pub fn total_count(&self) -> usize {
        self.types.iter().map(|f| f.count).sum()
    }

    /// Whether any national identifier was found.
    pub fn has_national_identifier(&self) -> bool {
        self.types
            .iter()
            .any(|f| f.pii_type == PiiType::NationalIdentifier && f.count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Critical);
    }

    #[test]
    fn test_pii_type_labels() {
        assert_eq!(PiiType::NationalIdentifier.label(), "NATIONAL_IDENTIFIER");
        assert_eq!(PiiType::Email.label(), "EMAIL");
    }

    #[test]
    fn test_serialization_uses_wire_names() {
        let finding = PiiFinding {
            pii_type: PiiType::NationalIdentifier,
            count: 1,
            confidence: 0.95,
            samples: vec!["1964********".to_string()],
            locations: vec![PiiLocation {
                file: "transports.csv".to_string(),
                line: 2,
                column: 14,
            }],
        };
        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["type"], "national_identifier");
        assert_eq!(json["count"], 1);
    }
}

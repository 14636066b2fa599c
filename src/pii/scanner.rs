//! Regex-based PII scanner for tabular artifact content
//!
//! The scanner works line by line so every match carries a line/column
//! location for audit traceability. Identifier candidates are confirmed
//! with the personnummer checksum before they count; raw matched values
//! never leave this module, samples are masked or redacted first.

use regex::Regex;

use crate::config::schema::PiiConfig;
use crate::domain::errors::TillsynError;
use crate::domain::result::Result;
use crate::pii::models::{PiiFinding, PiiLocation, PiiType};
use crate::pii::personnummer;

/// 6 or 8 digit date part, optional separator, 4 digit serial+checksum.
const IDENTIFIER_PATTERN: &str = r"\b\d{6}(?:\d{2})?[-+]?\d{4}\b";

const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

/// Scans textual artifact content for PII.
pub struct PiiScanner {
    identifier_regex: Regex,
    email_regex: Regex,
    identifier_confidence: f64,
    email_confidence: f64,
    max_samples_per_type: usize,
}

impl PiiScanner {
    /// Create a scanner using the confidence constants and sample cap
    /// from configuration.
    pub fn new(config: &PiiConfig) -> Result<Self> {
        let identifier_regex = Regex::new(IDENTIFIER_PATTERN)
            .map_err(|e| TillsynError::Configuration(format!("identifier pattern: {e}")))?;
        let email_regex = Regex::new(EMAIL_PATTERN)
            .map_err(|e| TillsynError::Configuration(format!("email pattern: {e}")))?;

        Ok(Self {
            identifier_regex,
            email_regex,
            identifier_confidence: config.identifier_confidence,
            email_confidence: config.email_confidence,
            max_samples_per_type: config.max_samples_per_type,
        })
    }

    /// Scan content line by line, returning one finding per PII type
    /// that had at least one confirmed match.
    ///
    /// `source` labels the artifact in match locations. Malformed lines
    /// contribute nothing; this function is read-only and never fails.
    pub fn scan(&self, content: &str, source: &str) -> Vec<PiiFinding> {
        let mut identifiers = TypeAccumulator::new(
            PiiType::NationalIdentifier,
            self.identifier_confidence,
            self.max_samples_per_type,
        );
        let mut emails = TypeAccumulator::new(
            PiiType::Email,
            self.email_confidence,
            self.max_samples_per_type,
        );

        for (line_idx, line) in content.lines().enumerate() {
            let line_no = line_idx + 1;

            for m in self.identifier_regex.find_iter(line) {
                // Only checksum-confirmed candidates count; everything
                // else is just a number that happened to look like one.
                if personnummer::validate(m.as_str()) {
                    identifiers.record(
                        personnummer::mask(m.as_str()),
                        location(source, line_no, m.start()),
                    );
                }
            }

            for m in self.email_regex.find_iter(line) {
                emails.record(
                    redact_email(m.as_str()),
                    location(source, line_no, m.start()),
                );
            }
        }

        let mut findings = Vec::new();
        if let Some(f) = identifiers.into_finding() {
            findings.push(f);
        }
        if let Some(f) = emails.into_finding() {
            findings.push(f);
        }
        findings
    }

    /// Merge per-artifact findings into one set keyed by PII type.
    ///
    /// Counts and locations accumulate; samples stay capped. Because the
    /// merge is keyed by type, scan order never affects the result.
    pub fn merge(groups: Vec<Vec<PiiFinding>>, max_samples_per_type: usize) -> Vec<PiiFinding> {
        let mut identifiers: Option<PiiFinding> = None;
        let mut emails: Option<PiiFinding> = None;

        for finding in groups.into_iter().flatten() {
            let slot = match finding.pii_type {
                PiiType::NationalIdentifier => &mut identifiers,
                PiiType::Email => &mut emails,
            };
            match slot {
                Some(existing) => {
                    existing.count += finding.count;
                    existing.locations.extend(finding.locations);
                    for sample in finding.samples {
                        if existing.samples.len() >= max_samples_per_type {
                            break;
                        }
                        existing.samples.push(sample);
                    }
                }
                None => *slot = Some(finding),
            }
        }

        identifiers.into_iter().chain(emails).collect()
    }
}

/// Collects matches for one PII type during a scan.
struct TypeAccumulator {
    pii_type: PiiType,
    confidence: f64,
    max_samples: usize,
    count: usize,
    samples: Vec<String>,
    locations: Vec<PiiLocation>,
}

impl TypeAccumulator {
    fn new(pii_type: PiiType, confidence: f64, max_samples: usize) -> Self {
        Self {
            pii_type,
            confidence,
            max_samples,
            count: 0,
            samples: Vec::new(),
            locations: Vec::new(),
        }
    }

    fn record(&mut self, masked_sample: String, location: PiiLocation) {
        self.count += 1;
        if self.samples.len() < self.max_samples {
            self.samples.push(masked_sample);
        }
        self.locations.push(location);
    }

    /// Types with zero matches are omitted from results.
    fn into_finding(self) -> Option<PiiFinding> {
        if self.count == 0 {
            return None;
        }
        Some(PiiFinding {
            pii_type: self.pii_type,
            count: self.count,
            confidence: self.confidence,
            samples: self.samples,
            locations: self.locations,
        })
    }
}

fn location(source: &str, line: usize, match_start: usize) -> PiiLocation {
    PiiLocation {
        file: source.to_string(),
        line,
        column: match_start + 1,
    }
}

/// Redact an email to `first-two-chars***@domain`.
fn redact_email(value: &str) -> String {
    match value.find('@') {
        Some(at) => {
            let local = &value[..at];
            format!("{}***{}", &local[..local.len().min(2)], &value[at..])
        }
        None => "***".to_string(),
    }
}

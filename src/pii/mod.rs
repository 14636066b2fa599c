//! PII detection for evidence pack artifacts
//!
//! This module provides detection of personally identifiable information
//! in the tabular (CSV) artifacts of an evidence pack, with audit-safe
//! reporting: every sample that leaves the scanner is masked.
//!
//! # Pipeline
//!
//! - **Validation** ([`personnummer`]): checksum confirmation and masking
//!   of Swedish national identifiers
//! - **Scanning** ([`scanner`]): line/column-aware regex matching over
//!   artifact content
//! - **Classification** ([`risk`]): risk level and remediation
//!   recommendations derived from the merged findings

pub mod models;
pub mod personnummer;
pub mod risk;
pub mod scanner;

// Re-export main types
pub use models::{PiiDetectionResult, PiiFinding, PiiLocation, PiiType, RiskLevel};
pub use scanner::PiiScanner;

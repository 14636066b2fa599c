//! Compliance validation for evidence packs
//!
//! This module evaluates an evidence pack manifest against EU/EES
//! regulatory rules and aggregates the results into a verdict.
//!
//! # Architecture
//!
//! - **Check model** ([`check`]): result types and verdict aggregation
//! - **Runners** ([`runners`]): five pure rule evaluators (data
//!   residency, encryption, retention, audit trail, cross-border)
//! - **GDPR** ([`gdpr`]): GDPR rules plus the data-subject rights
//!   assessment
//! - **EES** ([`ees`]): informational interoperability assessment
//! - **Engine** ([`engine`]): orchestration, PII scan integration,
//!   audit emission
//! - **Report** ([`report`]): console and JSON rendering

pub mod check;
pub mod ees;
pub mod engine;
pub mod gdpr;
pub mod report;
pub mod runners;

// Re-export main types
pub use check::{CheckStatus, CheckType, ComplianceCheck, ComplianceSummary, OverallStatus, Severity};
pub use ees::EesCompliance;
pub use engine::{ComplianceEngine, ValidationOptions, ValidationOutcome};
pub use gdpr::GdprAssessment;

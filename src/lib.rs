// Tillsyn - Evidence Pack Compliance & PII Detection
// Copyright (c) 2026 Tillsyn Contributors
// Licensed under the MIT License

//! # Tillsyn - Evidence Pack Compliance & PII Detection
//!
//! Tillsyn validates exported waste-management evidence packs against
//! EU/EES regulatory requirements (data residency, encryption strength,
//! GDPR data-subject handling, retention duration, audit-trail
//! completeness and cross-border transfer rules) and scans the pack's
//! tabular artifacts for personally identifiable information.
//!
//! ## Architecture
//!
//! Tillsyn follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`compliance`] - Rule runners, GDPR assessment, orchestration engine
//! - [`pii`] - Identifier validation, scanning, risk classification
//! - [`domain`] - Core domain types and the manifest model
//! - [`config`] - Configuration management
//! - [`audit`] - Audit sink abstraction and JSON-lines implementation
//! - [`artifact`] - Artifact reader abstraction
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tillsyn::artifact::FsArtifactReader;
//! use tillsyn::audit::JsonlAuditSink;
//! use tillsyn::compliance::{ComplianceEngine, ValidationOptions};
//! use tillsyn::config::TillsynConfig;
//! use tillsyn::domain::EvidencePackManifest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = TillsynConfig::default();
//!     let manifest = EvidencePackManifest::from_json(
//!         &std::fs::read_to_string("pack/manifest.json")?,
//!     )?;
//!
//!     let engine = ComplianceEngine::new(
//!         &config,
//!         Arc::new(FsArtifactReader::new("pack")),
//!         Arc::new(JsonlAuditSink::new("./audit/tillsyn_audit.jsonl")?),
//!     )?;
//!
//!     let outcome = engine
//!         .validate(&manifest, &ValidationOptions::new("inspector-17"))
//!         .await?;
//!
//!     println!("Verdict: {:?}", outcome.overall_status);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Tillsyn uses the [`domain::TillsynError`] type for all errors:
//!
//! ```rust
//! use tillsyn::domain::{Result, TillsynError};
//!
//! fn example() -> Result<()> {
//!     // Errors are automatically converted using the ? operator
//!     let value: serde_json::Value = serde_json::from_str("{}")?;
//!     let _ = value;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Tillsyn uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!(pack_id = "pack-2026-0142", "Starting validation");
//! warn!(region = "us-east-1", "Region outside the EU allow-list");
//! ```

pub mod artifact;
pub mod audit;
pub mod cli;
pub mod compliance;
pub mod config;
pub mod domain;
pub mod logging;
pub mod pii;

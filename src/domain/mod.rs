//! Domain models and types for Tillsyn.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **The evidence pack manifest** ([`EvidencePackManifest`]), the
//!   engine's primary input, produced by the upstream export pipeline
//! - **Error types** ([`TillsynError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, TillsynError>`]:
//!
//! ```rust
//! use tillsyn::domain::{Result, TillsynError};
//!
//! fn example() -> Result<()> {
//!     Err(TillsynError::Validation("invalid input".to_string()))
//! }
//! ```

pub mod errors;
pub mod manifest;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::TillsynError;
pub use manifest::{
    ArtifactEntry, AuditTrailMetadata, ComplianceMetadata, CreationRecord, DataResidency,
    EncryptionMetadata, EvidencePackManifest, RetentionMetadata,
};
pub use result::Result;

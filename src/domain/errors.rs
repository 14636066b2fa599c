//! Domain error types
//!
//! This module defines the error hierarchy for Tillsyn. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Tillsyn error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific failure categories and provides context for error handling.
#[derive(Debug, Error)]
pub enum TillsynError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Evidence pack manifest errors (unreadable or unparseable manifest)
    #[error("Manifest error: {0}")]
    Manifest(String),

    /// PII detection failures (unreadable artifact, scan aborted)
    ///
    /// An artifact that cannot be scanned cannot be certified PII-free,
    /// so this error fails the whole validation (fail-closed).
    #[error("PII detection failed: {0}")]
    PiiDetection(String),

    /// Audit sink errors
    #[error("Audit error: {0}")]
    Audit(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for TillsynError {
    fn from(err: std::io::Error) -> Self {
        TillsynError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for TillsynError {
    fn from(err: serde_json::Error) -> Self {
        TillsynError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for TillsynError {
    fn from(err: toml::de::Error) -> Self {
        TillsynError::Configuration(format!("TOML parse error: {err}"))
    }
}

//! Audit sink abstraction
//!
//! The engine emits exactly one audit record per validation run through
//! an injected [`AuditSink`]. Durable storage (and the 7-year retention
//! of entries) is the sink implementation's concern; the engine only
//! emits and never reads back.

pub mod logger;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::result::Result;

pub use logger::JsonlAuditSink;

/// Outcome recorded in an audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditStatus {
    Success,
    Failure,
}

/// One audit record. Entries never carry raw PII; the engine only puts
/// counts and classifications in `details` and `metadata`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub id: Uuid,
    pub pack_id: String,
    pub timestamp: DateTime<Utc>,
    pub user_id: String,
    pub action: String,
    pub status: AuditStatus,
    pub details: String,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// Capability trait for audit record consumers.
pub trait AuditSink: Send + Sync {
    /// Record one entry. Implementations own durability; the engine
    /// treats failures as best-effort and never lets them mask the
    /// validation outcome.
    fn log(&self, entry: &AuditEntry) -> Result<()>;
}

/// Sink that discards entries. Used when auditing is disabled in
/// configuration.
pub struct NullAuditSink;

impl AuditSink for NullAuditSink {
    fn log(&self, _entry: &AuditEntry) -> Result<()> {
        Ok(())
    }
}

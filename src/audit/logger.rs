//! JSON-lines audit sink
//!
//! Appends one JSON object per entry to a log file. Each line carries a
//! SHA-256 digest of the entry payload so tampering with an appended
//! record is detectable downstream.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::audit::{AuditEntry, AuditSink};
use crate::domain::errors::TillsynError;
use crate::domain::result::Result;

/// A written audit line: the entry plus its integrity digest.
#[derive(Debug, Serialize)]
struct AuditRecord<'a> {
    #[serde(flatten)]
    entry: &'a AuditEntry,
    /// SHA-256 over the serialized entry.
    checksum: String,
}

/// File-backed audit sink writing one JSON object per line.
pub struct JsonlAuditSink {
    log_path: PathBuf,
}

impl JsonlAuditSink {
    /// Create a sink writing to `log_path`, creating parent directories
    /// as needed.
    pub fn new(log_path: impl Into<PathBuf>) -> Result<Self> {
        let log_path = log_path.into();
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TillsynError::Audit(format!(
                    "Failed to create audit log directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
        Ok(Self { log_path })
    }

    fn checksum(entry_json: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(entry_json.as_bytes());
        let digest = hasher.finalize();
        format!("{digest:x}")
    }
}

impl AuditSink for JsonlAuditSink {
    fn log(&self, entry: &AuditEntry) -> Result<()> {
        let entry_json = serde_json::to_string(entry)
            .map_err(|e| TillsynError::Audit(format!("Failed to serialize audit entry: {e}")))?;

        let record = AuditRecord {
            entry,
            checksum: Self::checksum(&entry_json),
        };
        let line = serde_json::to_string(&record)
            .map_err(|e| TillsynError::Audit(format!("Failed to serialize audit record: {e}")))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| {
                TillsynError::Audit(format!(
                    "Failed to open audit log {}: {e}",
                    self.log_path.display()
                ))
            })?;

        writeln!(file, "{line}")
            .map_err(|e| TillsynError::Audit(format!("Failed to write audit entry: {e}")))?;

        Ok(())
    }
}

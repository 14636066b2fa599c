//! Evidence pack manifest model
//!
//! The manifest is produced by the upstream export pipeline and is the
//! engine's primary input. Field names follow the pipeline's camelCase
//! JSON wire format. All compliance leaves are optional: a manifest with
//! missing metadata is a plausible-but-noncompliant input that must fail
//! the corresponding check rather than crash the engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::TillsynError;
use crate::domain::result::Result;

/// An assembled evidence pack: identity, compliance metadata, creation
/// audit record and the list of exported artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidencePackManifest {
    /// Pack identifier assigned by the export pipeline.
    pub id: String,

    /// Declared compliance metadata for the pack.
    #[serde(default)]
    pub compliance: ComplianceMetadata,

    /// Creation audit trail recorded by the export pipeline.
    #[serde(default)]
    pub audit_trail: AuditTrailMetadata,

    /// Exported artifacts contained in the pack.
    #[serde(default)]
    pub artifacts: Vec<ArtifactEntry>,
}

impl EvidencePackManifest {
    /// Parse a manifest from its JSON representation.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| TillsynError::Manifest(format!("Failed to parse manifest JSON: {e}")))
    }

    /// Artifacts of the given type (e.g. `csv`).
    pub fn artifacts_of_type<'a>(
        &'a self,
        artifact_type: &'a str,
    ) -> impl Iterator<Item = &'a ArtifactEntry> {
        self.artifacts
            .iter()
            .filter(move |a| a.artifact_type.eq_ignore_ascii_case(artifact_type))
    }
}

/// Declared compliance metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceMetadata {
    /// Where the pack's data is stored.
    #[serde(default)]
    pub data_residency: DataResidency,

    /// Declared encryption of the stored pack.
    #[serde(default)]
    pub encryption: EncryptionMetadata,

    /// Declared retention schedule.
    #[serde(default)]
    pub retention: RetentionMetadata,
}

/// Declared storage region for the pack.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataResidency {
    /// Cloud region identifier (e.g. `eu-north-1`).
    pub region: Option<String>,
}

/// Declared encryption algorithm metadata.
///
/// The engine validates the declaration only; it performs no cryptography.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptionMetadata {
    /// Algorithm name as declared by the export pipeline (e.g. `AES-256-GCM`).
    pub algorithm: Option<String>,
}

/// Declared retention schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionMetadata {
    /// Retention duration in years.
    pub years: Option<u32>,

    /// Retention policy name (e.g. `delete_after_retention`, `legal_hold`).
    pub policy: Option<String>,
}

/// Creation audit trail for the pack.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditTrailMetadata {
    /// The creation record, if the pipeline wrote one.
    pub created: Option<CreationRecord>,
}

/// Who created the pack, and when.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationRecord {
    /// UTC timestamp of pack creation.
    pub timestamp: Option<DateTime<Utc>>,

    /// Identifier of the user who triggered the export.
    pub user_id: Option<String>,
}

/// A single exported artifact inside the pack.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactEntry {
    /// Artifact type (`csv`, `pdf`, `json`, ...). Only `csv` artifacts
    /// are scanned for PII.
    #[serde(rename = "type")]
    pub artifact_type: String,

    /// Path of the artifact, relative to the pack root.
    pub path: String,

    /// Original filename.
    pub filename: String,
}

//! Rule evaluators for evidence pack compliance
//!
//! Each runner is a pure function of the manifest and the compliance
//! configuration, returning one freshly constructed [`ComplianceCheck`].
//! Missing manifest fields are treated as failing evidence, never as an
//! engine error. Every regulatory reference is a fixed constant.

use crate::compliance::check::{CheckType, ComplianceCheck, Severity};
use crate::config::schema::ComplianceConfig;
use crate::domain::manifest::EvidencePackManifest;

pub(crate) const DATA_RESIDENCY_REF: &str = "GDPR Art. 44; Schrems II (C-311/18)";
pub(crate) const ENCRYPTION_REF: &str = "GDPR Art. 32(1)(a)";
pub(crate) const RETENTION_REF: &str = "Avfallsförordningen (2020:614) 6 kap. 1 §";
pub(crate) const AUDIT_TRAIL_REF: &str = "GDPR Art. 30";
pub(crate) const CROSS_BORDER_REF: &str = "GDPR Ch. V Art. 44-49";

/// The pack must be stored in an EU region from the configured allow-list.
pub fn data_residency(
    manifest: &EvidencePackManifest,
    config: &ComplianceConfig,
) -> ComplianceCheck {
    let description = "Data residency within the EU/EES";

    match manifest.compliance.data_residency.region.as_deref() {
        Some(region) if config.is_eu_region(region) => ComplianceCheck::passed(
            CheckType::DataResidency,
            description,
            format!("Storage region {region} is on the EU allow-list"),
            DATA_RESIDENCY_REF,
        ),
        Some(region) => ComplianceCheck::failed(
            CheckType::DataResidency,
            Severity::Critical,
            description,
            format!("Storage region {region} is not on the EU allow-list"),
            "Migrate the pack to an approved EU region before distribution",
            DATA_RESIDENCY_REF,
        ),
        None => ComplianceCheck::failed(
            CheckType::DataResidency,
            Severity::Critical,
            description,
            "Manifest declares no storage region",
            "Record the storage region in the pack manifest",
            DATA_RESIDENCY_REF,
        ),
    }
}

/// The declared algorithm must be on the approved set (256-bit symmetric
/// minimum). The engine validates the declaration only.
pub fn encryption(manifest: &EvidencePackManifest, config: &ComplianceConfig) -> ComplianceCheck {
    let description = "Encryption at rest meets the approved strength";

    match manifest.compliance.encryption.algorithm.as_deref() {
        Some(algorithm) if config.is_approved_algorithm(algorithm) => ComplianceCheck::passed(
            CheckType::Encryption,
            description,
            format!("Declared algorithm {algorithm} is approved"),
            ENCRYPTION_REF,
        ),
        Some(algorithm) => ComplianceCheck::failed(
            CheckType::Encryption,
            Severity::High,
            description,
            format!("Declared algorithm {algorithm} is not on the approved set"),
            "Re-encrypt the pack with a 256-bit approved cipher (e.g. AES-256-GCM)",
            ENCRYPTION_REF,
        ),
        None => ComplianceCheck::failed(
            CheckType::Encryption,
            Severity::High,
            description,
            "Manifest declares no encryption algorithm",
            "Encrypt the pack and record the algorithm in the manifest",
            ENCRYPTION_REF,
        ),
    }
}

/// Waste-management records must be retained at least the configured
/// minimum number of years.
pub fn retention(manifest: &EvidencePackManifest, config: &ComplianceConfig) -> ComplianceCheck {
    let minimum = config.data_retention_minimum_years;
    let description = "Retention meets the statutory minimum";

    match manifest.compliance.retention.years {
        Some(years) if years >= minimum => ComplianceCheck::passed(
            CheckType::Retention,
            description,
            format!("Declared retention of {years} years meets the {minimum}-year minimum"),
            RETENTION_REF,
        ),
        Some(years) => ComplianceCheck::failed(
            CheckType::Retention,
            Severity::High,
            description,
            format!("Declared retention of {years} years is below the {minimum}-year minimum"),
            format!("Extend the retention schedule to at least {minimum} years"),
            RETENTION_REF,
        ),
        None => ComplianceCheck::failed(
            CheckType::Retention,
            Severity::High,
            description,
            "Manifest declares no retention duration",
            format!("Declare a retention schedule of at least {minimum} years"),
            RETENTION_REF,
        ),
    }
}

/// The creation audit entry must identify when and by whom the pack was
/// assembled.
pub fn audit_trail(manifest: &EvidencePackManifest) -> ComplianceCheck {
    let description = "Creation audit trail is complete";

    let created = manifest.audit_trail.created.as_ref();
    let has_timestamp = created.is_some_and(|c| c.timestamp.is_some());
    let has_user = created.is_some_and(|c| c.user_id.as_deref().is_some_and(|u| !u.is_empty()));

    if has_timestamp && has_user {
        ComplianceCheck::passed(
            CheckType::Audit,
            description,
            "Creation record carries a timestamp and a user identifier",
            AUDIT_TRAIL_REF,
        )
    } else {
        let missing = match (has_timestamp, has_user) {
            (false, false) => "timestamp and user identifier",
            (false, true) => "timestamp",
            (true, false) => "user identifier",
            (true, true) => unreachable!(),
        };
        ComplianceCheck::failed(
            CheckType::Audit,
            Severity::Medium,
            description,
            format!("Creation record is missing: {missing}"),
            "Record creator identity and timestamp when assembling packs",
            AUDIT_TRAIL_REF,
        )
    }
}

/// No cross-border transfer outside the EU: the storage region must be
/// on the EU allow-list.
pub fn cross_border(manifest: &EvidencePackManifest, config: &ComplianceConfig) -> ComplianceCheck {
    let description = "No cross-border transfer outside the EU";

    match manifest.compliance.data_residency.region.as_deref() {
        Some(region) if config.is_eu_region(region) => ComplianceCheck::passed(
            CheckType::CrossBorder,
            description,
            format!("Processing stays within the EU ({region})"),
            CROSS_BORDER_REF,
        ),
        Some(region) => ComplianceCheck::failed(
            CheckType::CrossBorder,
            Severity::Critical,
            description,
            format!("Storage in {region} constitutes a third-country transfer"),
            "Repatriate the pack to an EU region or establish an Art. 46 transfer mechanism",
            CROSS_BORDER_REF,
        ),
        None => ComplianceCheck::failed(
            CheckType::CrossBorder,
            Severity::Critical,
            description,
            "Transfer destination cannot be established without a declared region",
            "Record the storage region in the pack manifest",
            CROSS_BORDER_REF,
        ),
    }
}

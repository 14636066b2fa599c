//! PII scanner and identifier validation behavior through the public API

use test_case::test_case;
use tillsyn::config::PiiConfig;
use tillsyn::pii::{personnummer, risk, PiiScanner, PiiType, RiskLevel};

fn scanner() -> PiiScanner {
    PiiScanner::new(&PiiConfig::default()).unwrap()
}

// ---------------------------------------------------------------------------
// 1. Identifier checksum
// ---------------------------------------------------------------------------

#[test_case("640823-3234", true; "ten digit with separator")]
#[test_case("6408233234", true; "ten digit contiguous")]
#[test_case("19640823-3234", true; "twelve digit with separator")]
#[test_case("196408233234", true; "twelve digit contiguous")]
#[test_case("640823+3234", true; "plus separator for centenarians")]
#[test_case("640823-3235", false; "wrong check digit")]
#[test_case("640823-323", false; "too short")]
#[test_case("640823-32345", false; "eleven digits")]
#[test_case("64082X-3234", false; "non numeric")]
fn test_validate(candidate: &str, expected: bool) {
    assert_eq!(personnummer::validate(candidate), expected);
}

#[test]
fn test_masking_never_leaks_the_serial() {
    for id in ["640823-3234", "19640823-3234", "196408233234"] {
        let masked = personnummer::mask(id);
        assert!(masked.starts_with("1964"));
        assert!(!masked.contains("0823"));
        assert!(!masked.contains("3234"));
    }
}

// ---------------------------------------------------------------------------
// 2. Scanning CSV content
// ---------------------------------------------------------------------------

#[test]
fn test_scan_mixed_content() {
    let content = "\
name,personal_id,contact,ewc_code
Anna Svensson,640823-3234,anna.svensson@example.se,150101
Björn Ek,ingen,bjorn.ek@example.se,170405
Okänd,550713-9139,,200301
";
    // 550713-9139 has an invalid check digit, so exactly one identifier
    // is confirmed.
    let findings = scanner().scan(content, "registry.csv");

    let identifiers = findings
        .iter()
        .find(|f| f.pii_type == PiiType::NationalIdentifier)
        .unwrap();
    assert_eq!(identifiers.count, 1);
    assert_eq!(identifiers.confidence, 0.95);

    let emails = findings
        .iter()
        .find(|f| f.pii_type == PiiType::Email)
        .unwrap();
    assert_eq!(emails.count, 2);
    assert_eq!(emails.confidence, 0.90);
    assert!(emails.samples.iter().all(|s| s.contains("***@")));
}

#[test]
fn test_scan_locations_are_line_accurate() {
    let content = "a\nb\nc\n640823-3234\n";
    let findings = scanner().scan(content, "lines.csv");
    assert_eq!(findings[0].locations[0].line, 4);
    assert_eq!(findings[0].locations[0].column, 1);
}

#[test]
fn test_zero_match_types_are_omitted() {
    let findings = scanner().scan("just,numbers\n1,2\n", "plain.csv");
    assert!(findings.is_empty());
}

// ---------------------------------------------------------------------------
// 3. Risk classification
// ---------------------------------------------------------------------------

#[test]
fn test_identifier_overrides_volume() {
    let content = "id\n640823-3234\n";
    let findings = scanner().scan(content, "one.csv");
    let result = risk::assess(findings);
    assert_eq!(result.risk_level, RiskLevel::Critical);
    assert!(result
        .recommendations
        .iter()
        .any(|r| r.contains("DPIA")));
}

#[test]
fn test_email_volume_drives_risk() {
    let mut content = String::from("contact\n");
    for i in 0..25 {
        content.push_str(&format!("user{i}@example.se\n"));
    }
    let findings = scanner().scan(&content, "bulk.csv");
    let result = risk::assess(findings);
    assert_eq!(result.risk_level, RiskLevel::High);
    assert!(!result.has_national_identifier());
}

#[test]
fn test_detection_result_serialization_hides_nothing_raw() {
    let content = "id,contact\n640823-3234,anna@example.se\n";
    let findings = scanner().scan(content, "mix.csv");
    let result = risk::assess(findings);

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"riskLevel\":\"critical\""));
    assert!(json.contains("national_identifier"));
    // Masked forms only.
    assert!(json.contains("1964********"));
    assert!(json.contains("an***@example.se"));
    assert!(!json.contains("640823-3234"));
    assert!(!json.contains("anna@example.se"));
}

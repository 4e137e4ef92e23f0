//! Tests for input module

use std::io::Write;

use tracestats::{TraceStatsError, load_records, parse_records};

#[test]
fn test_parse_records_array() {
    let records = parse_records(
        r#"[
            {"timestamp": 1700000000, "lonlat": "POINT (-122.1759 48.1492)"},
            "noise",
            {"timestamp": 1700000010}
        ]"#,
    )
    .unwrap();
    assert_eq!(records.len(), 3);
}

#[test]
fn test_parse_records_rejects_non_array() {
    let err = parse_records(r#"{"records": []}"#).unwrap_err();
    assert!(matches!(
        err,
        TraceStatsError::InvalidTopLevel { found: "an object" }
    ));
}

#[test]
fn test_parse_records_invalid_json() {
    let err = parse_records("[{").unwrap_err();
    assert!(matches!(err, TraceStatsError::Json(_)));
}

#[test]
fn test_load_records_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"timestamp": 1700000000, "lonlat": "POINT (-122.0 48.0)"}}]"#
    )
    .unwrap();

    let records = load_records(file.path()).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_load_records_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let err = load_records(&path).unwrap_err();
    assert!(matches!(err, TraceStatsError::Io { .. }));
    assert!(err.to_string().contains("missing.json"));
}

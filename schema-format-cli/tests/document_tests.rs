#![allow(clippy::unwrap_used)]
//! Integration tests for loading documents from disk and checking them.

use std::fs;
use std::path::PathBuf;

use schema_format::{ValidationOptions, ViolationKind};
use schema_format_cli::{check_document, load_document, output};
use tempfile::TempDir;

const SCHEMA_JSON: &str = r#"{
  "type": "object",
  "properties": {
    "birthday": {"type": "string", "format": "date"},
    "server": {
      "type": "object",
      "properties": {
        "v4": {"format": "ipv4"},
        "v6": {"format": "ipv6"}
      }
    },
    "zips": {"type": "array", "items": {"format": "zip"}}
  }
}"#;

const SCHEMA_YAML: &str = "\
type: object
properties:
  birthday:
    type: string
    format: date
  server:
    type: object
    properties:
      v4:
        format: ipv4
      v6:
        format: ipv6
  zips:
    type: array
    items:
      format: zip
";

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn collect() -> ValidationOptions {
    ValidationOptions::default().with_record_errors(true)
}

#[test]
fn test_json_schema_and_instance() {
    let tmp = TempDir::new().unwrap();
    let schema = load_document(&write(&tmp, "schema.json", SCHEMA_JSON)).unwrap();
    let instance = load_document(&write(
        &tmp,
        "instance.json",
        r#"{"birthday": "2023-02-29", "server": {"v4": "10.0.0.1", "v6": "fe80::1::2"}, "zips": ["12345", "1234"]}"#,
    ))
    .unwrap();

    let report = check_document(&schema, &instance, collect());
    assert!(!report.ok);
    assert_eq!(report.checked, 5);

    let found: Vec<(&str, ViolationKind)> = report
        .violations
        .iter()
        .map(|v| (v.fragment.as_str(), v.kind))
        .collect();
    assert_eq!(
        found,
        vec![
            ("#/birthday", ViolationKind::CalendarInvalid),
            ("#/server/v6", ViolationKind::StructuralViolation),
            ("#/zips/1", ViolationKind::SyntaxMismatch),
        ]
    );
}

#[test]
fn test_yaml_schema_with_json_instance() {
    let tmp = TempDir::new().unwrap();
    let schema = load_document(&write(&tmp, "schema.yaml", SCHEMA_YAML)).unwrap();
    let instance = load_document(&write(
        &tmp,
        "instance.json",
        r#"{"birthday": "2024-02-29", "server": {"v4": "192.168.1.1"}, "zips": ["12345-6789"]}"#,
    ))
    .unwrap();

    let report = check_document(&schema, &instance, collect());
    assert!(report.ok, "{:?}", report.violations);
    assert_eq!(report.checked, 3);
}

#[test]
fn test_fail_fast_document() {
    let tmp = TempDir::new().unwrap();
    let schema = load_document(&write(&tmp, "schema.json", SCHEMA_JSON)).unwrap();
    let instance = load_document(&write(
        &tmp,
        "instance.yml",
        "birthday: 2024-13-01\nzips:\n  - nope\n  - '1'\n",
    ))
    .unwrap();

    let report = check_document(&schema, &instance, ValidationOptions::default());
    assert_eq!(report.errors_count(), 1);
    assert_eq!(report.violations[0].fragment, "#/birthday");
}

#[test]
fn test_missing_file_errors() {
    let tmp = TempDir::new().unwrap();
    let err = load_document(&tmp.path().join("absent.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read"), "got: {err}");
}

#[test]
fn test_invalid_json_errors() {
    let tmp = TempDir::new().unwrap();
    let err = load_document(&write(&tmp, "broken.json", "{\"a\": ")).unwrap_err();
    assert!(err.to_string().contains("Failed to parse"), "got: {err}");
}

#[test]
fn test_report_round_trips_through_json_output() {
    let tmp = TempDir::new().unwrap();
    let schema = load_document(&write(&tmp, "schema.json", SCHEMA_JSON)).unwrap();
    let instance = load_document(&write(&tmp, "instance.json", r#"{"zips": ["x"]}"#)).unwrap();
    let report = check_document(&schema, &instance, collect());

    let mut buf = Vec::new();
    output::write_json(&report, &mut buf).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(value["violations"][0]["fragment"], "#/zips/0");
    assert_eq!(
        value["violations"][0]["message"],
        "The zip code '#/zips/0' is not formatted correctly"
    );
}

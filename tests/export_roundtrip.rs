//! Integration tests for the export writers, including the JSON
//! export / report import round-trip.

use robotscope::core::record::{AnalysisRecord, AnalysisStatus, DisallowRule};
use robotscope::core::report::load_report;
use robotscope::export::{csv_export, json_export, text_export};

fn sample_records() -> Vec<AnalysisRecord> {
    vec![
        AnalysisRecord {
            url: "https://shop.example.net".into(),
            robots_url: "https://shop.example.net/robots.txt".into(),
            status: AnalysisStatus::Success,
            google_disallowed: true,
            disallow_rules: vec![
                DisallowRule {
                    agent: "Googlebot".into(),
                    rule: "/".into(),
                },
                DisallowRule {
                    agent: "*".into(),
                    rule: "/checkout".into(),
                },
            ],
            robots_content: "User-agent: Googlebot\nDisallow: /\n".into(),
            error_message: String::new(),
        },
        AnalysisRecord {
            url: "https://example.com".into(),
            robots_url: "https://example.com/robots.txt".into(),
            status: AnalysisStatus::Success,
            google_disallowed: false,
            disallow_rules: vec![],
            robots_content: "User-agent: *\nAllow: /\n".into(),
            error_message: String::new(),
        },
        AnalysisRecord::failed("https://down.example.org", "Connection refused"),
    ]
}

#[test]
fn json_export_roundtrips_through_report_import() {
    let records = sample_records();
    let path = std::env::temp_dir().join("robotscope_test_roundtrip.json");

    json_export::export_json(&records, &path).expect("export should succeed");
    let reloaded = load_report(&path).expect("exported report should re-import");
    let _ = std::fs::remove_file(&path);

    assert_eq!(records, reloaded);
}

#[test]
fn csv_export_writes_header_and_rows() {
    let records = sample_records();
    let path = std::env::temp_dir().join("robotscope_test_export.csv");

    csv_export::export_csv(&records, &path).expect("export should succeed");
    let content = std::fs::read_to_string(&path).expect("read back");
    let _ = std::fs::remove_file(&path);

    let mut lines = content.lines();
    let header = lines.next().expect("header row");
    assert!(header.starts_with("URL,Status,Google Allowed"));
    assert_eq!(lines.count(), records.len());

    assert!(content.contains("https://shop.example.net,success,No,2"));
    assert!(content.contains("https://example.com,success,Yes,0"));
    assert!(content.contains("Connection refused"));
}

#[test]
fn text_export_writes_readable_report() {
    let records = sample_records();
    let path = std::env::temp_dir().join("robotscope_test_export.txt");

    text_export::export_text(&records, &path).expect("export should succeed");
    let content = std::fs::read_to_string(&path).expect("read back");
    let _ = std::fs::remove_file(&path);

    assert!(content.starts_with("Robots.txt Analysis Report - "));
    assert!(content.contains("1. https://shop.example.net"));
    assert!(content.contains("   Google Allowed: No"));
    assert!(content.contains("3. https://down.example.org"));
    assert!(content.contains("   Error: Connection refused"));
}

#[test]
fn empty_export_is_valid() {
    let path = std::env::temp_dir().join("robotscope_test_empty.json");
    json_export::export_json(&[], &path).expect("empty export should succeed");
    let reloaded = load_report(&path).expect("empty report is valid");
    let _ = std::fs::remove_file(&path);
    assert!(reloaded.is_empty());
}

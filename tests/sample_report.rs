//! Validates the bundled sample report against the import schema.

use robotscope::core::filter::{visible_indices, CategoryFilter};
use robotscope::core::report::parse_report;

static SAMPLE_REPORT: &str = include_str!("../assets/sample_report.json");

#[test]
fn sample_report_parses() {
    let records = parse_report(SAMPLE_REPORT).expect("bundled sample must be valid");
    assert!(!records.is_empty());
}

#[test]
fn sample_report_covers_every_category() {
    let records = parse_report(SAMPLE_REPORT).expect("bundled sample must be valid");
    for filter in [
        CategoryFilter::Allowed,
        CategoryFilter::Disallowed,
        CategoryFilter::Errors,
    ] {
        assert!(
            !visible_indices(&records, filter).is_empty(),
            "sample should include at least one {} record",
            filter.label()
        );
    }
}

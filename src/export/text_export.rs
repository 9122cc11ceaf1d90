//! Plain-text report export.
//!
//! Writes a human-readable numbered report, one block per URL, with up to
//! ten disallow rules listed per record.

use crate::core::record::{AnalysisRecord, AnalysisStatus};
use crate::util::error::RobotScopeError;
use std::path::Path;

/// Render the records as a plain-text report.
pub fn render_text_report(records: &[AnalysisRecord]) -> String {
    let mut out = Vec::new();
    out.push(format!(
        "Robots.txt Analysis Report - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    out.push("=".repeat(80));
    out.push(String::new());

    for (i, record) in records.iter().enumerate() {
        out.push(format!("{}. {}", i + 1, record.url));
        out.push(format!("   Status: {}", record.status_label()));
        if record.status == AnalysisStatus::Error && !record.error_message.is_empty() {
            out.push(format!("   Error: {}", record.error_message));
        }
        out.push(format!(
            "   Google Allowed: {}",
            if record.google_disallowed { "No" } else { "Yes" }
        ));

        if record.disallow_rules.is_empty() {
            out.push("   No disallow rules for Google".into());
        } else {
            out.push(format!(
                "   Disallow Rules ({}):",
                record.disallow_rules.len()
            ));
            for rule in record.disallow_rules.iter().take(10) {
                out.push(format!("     - {}: {}", rule.agent, rule.rule));
            }
            if record.disallow_rules.len() > 10 {
                out.push(format!(
                    "     ... and {} more rules",
                    record.disallow_rules.len() - 10
                ));
            }
        }
        out.push(String::new());
    }

    out.join("\n")
}

/// Export the given records as a plain-text report at `path`.
///
/// # Errors
/// Returns [`RobotScopeError::Export`] if the file cannot be written.
pub fn export_text(records: &[AnalysisRecord], path: &Path) -> Result<(), RobotScopeError> {
    std::fs::write(path, render_text_report(records))
        .map_err(|e| RobotScopeError::Export(format!("Failed to write text report: {e}")))?;

    tracing::info!(
        "Exported {} records to text report: {}",
        records.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::DisallowRule;

    #[test]
    fn report_lists_each_record_numbered() {
        let records = vec![
            AnalysisRecord {
                url: "a.com".into(),
                robots_url: String::new(),
                status: AnalysisStatus::Success,
                google_disallowed: true,
                disallow_rules: vec![DisallowRule {
                    agent: "Googlebot".into(),
                    rule: "/x/".into(),
                }],
                robots_content: String::new(),
                error_message: String::new(),
            },
            AnalysisRecord::failed("b.com", "Connection timed out"),
        ];

        let text = render_text_report(&records);
        assert!(text.contains("1. a.com"));
        assert!(text.contains("   Google Allowed: No"));
        assert!(text.contains("     - Googlebot: /x/"));
        assert!(text.contains("2. b.com"));
        assert!(text.contains("   Error: Connection timed out"));
    }

    #[test]
    fn report_caps_rules_at_ten() {
        let record = AnalysisRecord {
            url: "a.com".into(),
            robots_url: String::new(),
            status: AnalysisStatus::Success,
            google_disallowed: true,
            disallow_rules: (0..14)
                .map(|i| DisallowRule {
                    agent: "Googlebot".into(),
                    rule: format!("/p{i}/"),
                })
                .collect(),
            robots_content: String::new(),
            error_message: String::new(),
        };

        let text = render_text_report(&[record]);
        assert!(text.contains("Disallow Rules (14):"));
        assert!(text.contains("... and 4 more rules"));
        assert!(!text.contains("/p10/"));
    }
}

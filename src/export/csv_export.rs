//! CSV export for filtered analysis records.
//!
//! Writes the currently visible records to a CSV file with one row per URL.

use crate::core::record::AnalysisRecord;
use crate::util::error::RobotScopeError;
use std::path::Path;

/// Export the given records to a CSV file at `path`.
///
/// Columns: URL, Status, Google Allowed, Disallow Rules Count,
/// Robots.txt URL, Error Message, Top Disallow Rules.
///
/// # Errors
/// Returns [`RobotScopeError::Export`] if the file cannot be created or
/// written.
pub fn export_csv(records: &[AnalysisRecord], path: &Path) -> Result<(), RobotScopeError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| RobotScopeError::Export(format!("Failed to create CSV file: {e}")))?;

    writer
        .write_record([
            "URL",
            "Status",
            "Google Allowed",
            "Disallow Rules Count",
            "Robots.txt URL",
            "Error Message",
            "Top Disallow Rules",
        ])
        .map_err(|e| RobotScopeError::Export(format!("Failed to write CSV header: {e}")))?;

    for record in records {
        let google_allowed = if record.google_disallowed { "No" } else { "Yes" };
        writer
            .write_record([
                record.url.as_str(),
                record.status_label(),
                google_allowed,
                &record.disallow_rules.len().to_string(),
                record.robots_url.as_str(),
                record.error_message.as_str(),
                &top_rules_summary(record),
            ])
            .map_err(|e| RobotScopeError::Export(format!("Failed to write CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| RobotScopeError::Export(format!("Failed to flush CSV: {e}")))?;

    tracing::info!("Exported {} records to CSV: {}", records.len(), path.display());
    Ok(())
}

/// Summarise up to three disallow rules as `agent: rule; ...`, appending a
/// `... and N more` suffix when the record has more.
pub fn top_rules_summary(record: &AnalysisRecord) -> String {
    if record.disallow_rules.is_empty() {
        return String::new();
    }

    let mut summary = record
        .disallow_rules
        .iter()
        .take(3)
        .map(|r| format!("{}: {}", r.agent, r.rule))
        .collect::<Vec<_>>()
        .join("; ");

    if record.disallow_rules.len() > 3 {
        summary.push_str(&format!("; ... and {} more", record.disallow_rules.len() - 3));
    }
    summary
}

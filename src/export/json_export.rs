//! JSON export for filtered analysis records.
//!
//! Serialises the record list as a pretty-printed JSON array using Serde.
//! The output is a valid report: it can be re-imported via
//! [`crate::core::report::load_report`].

use crate::core::record::AnalysisRecord;
use crate::util::error::RobotScopeError;
use std::path::Path;

/// Export the given records to a JSON file at `path`.
///
/// # Errors
/// Returns [`RobotScopeError::Export`] if the file cannot be created or
/// written.
pub fn export_json(records: &[AnalysisRecord], path: &Path) -> Result<(), RobotScopeError> {
    let file = std::fs::File::create(path)
        .map_err(|e| RobotScopeError::Export(format!("Failed to create JSON file: {e}")))?;

    let mut writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)
        .map_err(|e| RobotScopeError::Export(format!("Failed to write JSON: {e}")))?;

    // Explicit flush so I/O errors are not silently swallowed by BufWriter::drop.
    use std::io::Write;
    writer
        .flush()
        .map_err(|e| RobotScopeError::Export(format!("Failed to flush JSON output: {e}")))?;

    tracing::info!(
        "Exported {} records to JSON: {}",
        records.len(),
        path.display()
    );
    Ok(())
}

//! Analysis report import.
//!
//! A report is a JSON array of [`AnalysisRecord`] objects — the same schema
//! the JSON export writes, so exported reports round-trip back in. Loading
//! happens on a background thread and feeds the UI through the same
//! [`WorkerMessage`] channel the analysis worker uses.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crossbeam_channel::Sender;

use crate::core::record::AnalysisRecord;
use crate::core::worker::WorkerMessage;
use crate::util::error::{Result, RobotScopeError};

/// Parse a JSON report string into records.
pub fn parse_report(json: &str) -> Result<Vec<AnalysisRecord>> {
    serde_json::from_str(json).map_err(|e| RobotScopeError::ReportFormat(e.to_string()))
}

/// Load a report file from disk.
pub fn load_report(path: &Path) -> Result<Vec<AnalysisRecord>> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| RobotScopeError::Import(format!("{}: {e}", path.display())))?;
    parse_report(&json)
}

/// Spawn a background thread that loads a report file and streams its
/// records to the UI via `sender`.
///
/// Uses the same message protocol as the analysis worker so the UI has a
/// single drain loop. Errors arrive as a [`WorkerMessage::Error`] keyed by
/// the file name, followed by an empty `Complete`.
pub fn spawn_report_loader(
    path: PathBuf,
    sender: Sender<WorkerMessage>,
    cancel: Arc<AtomicBool>,
) -> std::thread::JoinHandle<()> {
    std::thread::Builder::new()
        .name("report-loader".into())
        .spawn(move || {
            let start = Instant::now();
            let display_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());

            let records = match load_report(&path) {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!("Failed to load report {}: {e}", path.display());
                    let _ = sender.send(WorkerMessage::Error {
                        url: display_name,
                        error: e.to_string(),
                    });
                    let _ = sender.send(WorkerMessage::Complete {
                        total: 0,
                        elapsed: start.elapsed(),
                    });
                    return;
                }
            };

            if cancel.load(Ordering::Relaxed) {
                return;
            }

            let total = records.len();
            tracing::info!("Loaded report {display_name}: {total} records");
            let _ = sender.send(WorkerMessage::ResultBatch(records));
            let _ = sender.send(WorkerMessage::Complete {
                total,
                elapsed: start.elapsed(),
            });
        })
        .expect("Failed to spawn report loader thread")
}

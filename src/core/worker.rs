//! Background analysis worker.
//!
//! Walks a submitted URL list on a background thread, calling a pluggable
//! [`RobotsAnalyzer`] per URL. Result batches are sent to the UI via a
//! [`crossbeam_channel`] sender; the UI polls the receiving end each frame
//! with non-blocking `try_recv`. Cancellation is cooperative via a shared
//! `AtomicBool` checked between URLs.
//!
//! The analyzer itself is a seam: RobotScope does no network fetching or
//! robots.txt parsing of its own, so the trait is implemented by whatever
//! host embeds the library (tests use stubs).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crossbeam_channel::Sender;

use crate::core::record::AnalysisRecord;
use crate::util::constants::RESULT_BATCH_SIZE;

/// Produces an [`AnalysisRecord`] for a single URL.
///
/// Implementations must not panic for ordinary failures — a fetch error is
/// still a record, with `status: error` and an explanatory message, exactly
/// as the filter and table expect.
pub trait RobotsAnalyzer: Send + Sync {
    fn analyze(&self, url: &str) -> AnalysisRecord;
}

/// Messages sent from the background worker (or report loader) to the UI.
#[derive(Debug)]
pub enum WorkerMessage {
    /// A batch of analysis results ready to append to the display list.
    ResultBatch(Vec<AnalysisRecord>),
    /// Progress update after each analyzed URL.
    Progress {
        done: usize,
        total: usize,
        url: String,
    },
    /// The run finished (all URLs analyzed, or the report fully loaded).
    Complete {
        total: usize,
        elapsed: std::time::Duration,
    },
    /// A non-fatal failure attributed to one URL or file; the run continues.
    Error { url: String, error: String },
}

/// Spawn a background thread that analyzes the given URLs in order.
///
/// Results are sent as batches via `sender`. Set `cancel` to `true` to
/// request graceful termination between URLs.
pub fn spawn_analysis_thread(
    urls: Vec<String>,
    analyzer: Arc<dyn RobotsAnalyzer>,
    sender: Sender<WorkerMessage>,
    cancel: Arc<AtomicBool>,
) -> std::thread::JoinHandle<()> {
    std::thread::Builder::new()
        .name("robots-analyzer".into())
        .spawn(move || {
            worker_thread_main(urls, analyzer, sender, cancel);
        })
        .expect("Failed to spawn analysis worker thread")
}

/// Main loop of the worker thread: analyze each URL, batch up results,
/// and report progress/completion to the UI.
fn worker_thread_main(
    urls: Vec<String>,
    analyzer: Arc<dyn RobotsAnalyzer>,
    sender: Sender<WorkerMessage>,
    cancel: Arc<AtomicBool>,
) {
    let start = Instant::now();
    let total = urls.len();
    let mut done = 0usize;
    let mut batch: Vec<AnalysisRecord> = Vec::with_capacity(RESULT_BATCH_SIZE);

    for url in urls {
        if cancel.load(Ordering::Relaxed) {
            tracing::info!("Analysis cancelled after {done} of {total} URLs");
            break;
        }

        // An analyzer panic must not kill the whole batch: convert it to an
        // error record and keep going, like any other per-URL failure.
        let record = match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            analyzer.analyze(&url)
        })) {
            Ok(record) => record,
            Err(_) => {
                tracing::error!("Analyzer panicked on {url}");
                let _ = sender.send(WorkerMessage::Error {
                    url: url.clone(),
                    error: "analyzer panicked".into(),
                });
                AnalysisRecord::failed(&url, "Unexpected analyzer failure")
            }
        };

        done += 1;
        batch.push(record);

        if batch.len() >= RESULT_BATCH_SIZE {
            if sender
                .send(WorkerMessage::ResultBatch(std::mem::take(&mut batch)))
                .is_err()
            {
                // UI dropped the receiver; nothing left to report to.
                return;
            }
        }

        let _ = sender.send(WorkerMessage::Progress {
            done,
            total,
            url: url.clone(),
        });
    }

    if !batch.is_empty() {
        let _ = sender.send(WorkerMessage::ResultBatch(batch));
    }

    let _ = sender.send(WorkerMessage::Complete {
        total: done,
        elapsed: start.elapsed(),
    });
}

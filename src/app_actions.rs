//! Extended actions for [`RobotScopeApp`]: export, report import, sample
//! data, keyboard shortcuts, and the About dialog.
//!
//! These are `impl` blocks on the app struct, split out from `app.rs`
//! to keep file sizes manageable.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::app::RobotScopeApp;
use crate::core::report;
use crate::util::constants;
use crate::util::time::export_timestamp;

/// Embedded sample report so a fresh install has data to explore before
/// any real report is imported.
static SAMPLE_REPORT: &str = include_str!("../assets/sample_report.json");

/// Which export format a toolbar menu entry dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Text,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
            ExportFormat::Text => "text",
        }
    }
}

// ── Export actions ──────────────────────────────────────────────────────

impl RobotScopeApp {
    /// Export the currently visible records via a native save dialog.
    ///
    /// Runs on a background thread and sends a completion message back
    /// via `export_rx` so the UI can display feedback.
    pub fn export_records(&mut self, format: ExportFormat) {
        if self.export_rx.is_some() {
            self.export_message = Some((
                "Export already in progress".into(),
                std::time::Instant::now(),
            ));
            return;
        }

        let records = self.visible_record_list();
        if records.is_empty() {
            self.export_message =
                Some(("No results to export".into(), std::time::Instant::now()));
            return;
        }

        let (tx, rx) = crossbeam_channel::bounded::<String>(1);
        self.export_rx = Some(rx);

        std::thread::spawn(move || {
            let ext = format.extension();
            if let Some(path) = rfd::FileDialog::new()
                .add_filter(format.label(), &[ext])
                .set_file_name(format!("robots_analysis_{}.{ext}", export_timestamp()))
                .save_file()
            {
                let result = match format {
                    ExportFormat::Csv => crate::export::csv_export::export_csv(&records, &path),
                    ExportFormat::Json => crate::export::json_export::export_json(&records, &path),
                    ExportFormat::Text => crate::export::text_export::export_text(&records, &path),
                };
                match result {
                    Ok(()) => {
                        let _ = tx.send(format!(
                            "Exported {} results to {}",
                            records.len(),
                            format.label()
                        ));
                    }
                    Err(e) => {
                        tracing::error!("{} export failed: {e}", format.label());
                        let _ = tx.send(format!("{} export failed: {e}", format.label()));
                    }
                }
            }
        });
    }

    /// Process export completion messages from background threads.
    ///
    /// Called once per frame. Checks the `export_rx` channel for messages
    /// and clears stale export messages after a timeout.
    pub fn process_export_messages(&mut self) {
        if let Some(rx) = &self.export_rx {
            match rx.try_recv() {
                Ok(msg) => {
                    self.export_message = Some((msg, std::time::Instant::now()));
                    self.export_rx = None;
                }
                Err(crossbeam_channel::TryRecvError::Disconnected) => {
                    // Sender dropped without sending (user cancelled the save
                    // dialog). Clear the receiver so future exports are not
                    // permanently blocked.
                    self.export_rx = None;
                }
                Err(crossbeam_channel::TryRecvError::Empty) => {}
            }
        }
        if let Some((_, instant)) = &self.export_message {
            if instant.elapsed()
                > std::time::Duration::from_secs(constants::EXPORT_MESSAGE_TTL_SECS)
            {
                self.export_message = None;
            }
        }
    }
}

// ── Report import ───────────────────────────────────────────────────────

impl RobotScopeApp {
    /// Open a native file dialog (on a background thread) to select a
    /// report JSON file. The chosen path is sent back via `import_rx`.
    ///
    /// Guards against double-activation: if a file dialog is already open,
    /// the call is a no-op so the first dialog is not silently abandoned.
    pub fn import_report(&mut self) {
        if self.import_rx.is_some() {
            tracing::debug!("import_report: dialog already open, ignoring duplicate call");
            return;
        }
        let (tx, rx) = crossbeam_channel::bounded(1);
        self.import_rx = Some(rx);

        std::thread::spawn(move || {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Analysis Report", &["json"])
                .set_title("Open Analysis Report")
                .pick_file()
            {
                let _ = tx.send(path);
            }
        });
    }

    /// Poll the import channel for a user-chosen report path.
    pub fn process_import_selection(&mut self) {
        let path = {
            let rx = match &self.import_rx {
                Some(rx) => rx,
                None => return,
            };
            match rx.try_recv() {
                Ok(p) => p,
                Err(crossbeam_channel::TryRecvError::Disconnected) => {
                    self.import_rx = None;
                    return;
                }
                Err(crossbeam_channel::TryRecvError::Empty) => return,
            }
        };
        self.import_rx = None;
        self.start_loading_report(&path);
    }

    /// Begin loading records from a report file.
    ///
    /// Cancels any in-progress run, clears existing data, and spawns a
    /// loader thread feeding the shared worker channel.
    pub fn start_loading_report(&mut self, path: &std::path::Path) {
        self.cancel_run();

        self.records.clear();
        self.visible_indices.clear();
        self.detail = None;
        self.sort = None;
        self.errors.clear();
        self.run_elapsed = None;
        self.progress_done = 0;
        self.progress_total = 0;
        self.progress_url.clear();
        self.needs_refilter = true;

        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "report".into());

        let (tx, rx) = crossbeam_channel::bounded(constants::CHANNEL_BOUND);
        let cancel = Arc::new(AtomicBool::new(false));

        let _handle = report::spawn_report_loader(path.to_path_buf(), tx, cancel.clone());

        self.worker_rx = Some(rx);
        self.cancel_flag = Some(cancel);
        self.is_loading = true;
        self.status_text = format!("Loading {display_name}...");
    }

    /// Load the embedded sample report. Small enough to parse on the UI
    /// thread without a loader round-trip.
    pub fn load_sample_report(&mut self) {
        match report::parse_report(SAMPLE_REPORT) {
            Ok(records) => {
                tracing::info!("Loaded sample report: {} records", records.len());
                self.set_records(records);
            }
            Err(e) => {
                // The asset ships with the binary; failure here is a build
                // defect, but degrade to an error entry rather than panic.
                tracing::error!("Embedded sample report is invalid: {e}");
                self.errors
                    .push(("sample_report.json".into(), e.to_string()));
            }
        }
    }
}

// ── Keyboard shortcuts ──────────────────────────────────────────────────

impl RobotScopeApp {
    /// Handle global keyboard shortcuts.
    ///
    /// - **Ctrl+O**: Open a report file
    /// - **Ctrl+Enter**: Submit the URL batch
    /// - **Escape**: Cancel the running analysis, else close open windows
    pub fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            if i.modifiers.ctrl && i.key_pressed(egui::Key::O) {
                self.import_report();
            }

            if i.modifiers.ctrl && i.key_pressed(egui::Key::Enter) && self.pending.is_none() {
                self.submit_batch();
            }

            if i.key_pressed(egui::Key::Escape) {
                if self.is_loading {
                    self.cancel_run();
                    self.status_text = "Cancelled".into();
                } else if self.detail.is_some() {
                    self.detail = None;
                } else if self.show_about {
                    self.show_about = false;
                }
            }
        });
    }
}

// ── About dialog ────────────────────────────────────────────────────────

impl RobotScopeApp {
    /// Render the About dialog window.
    pub fn render_about_dialog(&mut self, ctx: &egui::Context) {
        if !self.show_about {
            return;
        }

        let mut open = true;
        egui::Window::new("About")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([320.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(constants::APP_NAME)
                            .color(crate::ui::theme::accent(self.dark_mode))
                            .strong()
                            .size(20.0),
                    );
                    ui.label(
                        egui::RichText::new(format!("v{}", constants::APP_VERSION))
                            .color(crate::ui::theme::text_secondary(self.dark_mode)),
                    );
                    ui.add_space(8.0);
                    ui.label("A filterable viewer for robots.txt batch analysis results");
                    ui.add_space(8.0);
                });
            });

        if !open {
            self.show_about = false;
        }
    }
}

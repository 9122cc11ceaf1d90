//! Top-level application state and `eframe::App` implementation.
//!
//! `RobotScopeApp` owns all UI state: the master record list (whose order
//! IS the display order), the active category filter, the active sort
//! state, the in-flight submission, and the communication channels with
//! background threads. Rendering is delegated to panel sub-modules in `ui/`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossbeam_channel::Receiver;

use crate::core::filter::{self, CategoryFilter};
use crate::core::record::AnalysisRecord;
use crate::core::sort::{self, SortKey, SortState};
use crate::core::submission::{self, Banner, PendingSubmission};
use crate::core::worker::{self, RobotsAnalyzer, WorkerMessage};
use crate::util::constants;

/// Central application state for RobotScope.
///
/// All fields are accessible to the UI rendering methods (defined in
/// `ui/*.rs` via `impl RobotScopeApp` blocks).
pub struct RobotScopeApp {
    // ── Result storage ──────────────────────────────────────────
    /// Master list of all loaded records. Sorting reorders this list in
    /// place; its order is the single source of truth for the table.
    pub records: Vec<AnalysisRecord>,
    /// Indices into `records` that pass the current filter, in list order.
    pub visible_indices: Vec<usize>,
    /// Flag: re-compute `visible_indices` on the next frame.
    pub needs_refilter: bool,

    // ── Filter / sort ───────────────────────────────────────────
    /// The active category filter (exactly one at a time).
    pub filter: CategoryFilter,
    /// The active sort column and direction, if any. `None` = submission
    /// order, and header clicks go through [`SortState::click`].
    pub sort: Option<SortState>,

    // ── Submission ──────────────────────────────────────────────
    /// Multi-line URL input bound to the submit form's text area.
    pub urls_input: String,
    /// Busy state for the in-flight submission, if any. While `Some`, the
    /// Analyze control is disabled.
    pub pending: Option<PendingSubmission>,
    /// Dismissible banners shown under the submit form.
    pub banners: Vec<Banner>,
    /// Pluggable analysis backend. `None` in the stock binary: submissions
    /// then only exercise the feedback contract until the deadline fires.
    pub analyzer: Option<Arc<dyn RobotsAnalyzer>>,

    // ── Background worker ───────────────────────────────────────
    /// Receiver end of the channel from the worker or report loader.
    pub worker_rx: Option<Receiver<WorkerMessage>>,
    /// Shared flag to request cancellation of the background thread.
    pub cancel_flag: Option<Arc<AtomicBool>>,
    /// `true` while a worker or loader thread is running.
    pub is_loading: bool,

    // ── Status ──────────────────────────────────────────────────
    /// Human-readable status text shown in the status bar.
    pub status_text: String,
    /// How long the last completed run took.
    pub run_elapsed: Option<std::time::Duration>,
    /// URLs analyzed so far in the current run.
    pub progress_done: usize,
    /// Total URLs in the current run.
    pub progress_total: usize,
    /// URL currently being analyzed.
    pub progress_url: String,

    // ── Errors ──────────────────────────────────────────────────
    /// Non-fatal errors from the last run: `(url_or_file, message)`.
    pub errors: Vec<(String, String)>,

    // ── Detail window ───────────────────────────────────────────
    /// The record shown in the detail window. Populated verbatim (cloned)
    /// from the clicked row; `None` = window closed.
    pub detail: Option<AnalysisRecord>,

    // ── Dialogs ─────────────────────────────────────────────────
    /// Whether the About dialog is open.
    pub show_about: bool,

    // ── Theme ───────────────────────────────────────────────────
    /// `true` = dark mode (default), `false` = light mode.
    pub dark_mode: bool,

    // ── Export / import feedback ────────────────────────────────
    /// Receiver for export completion messages from background threads.
    pub export_rx: Option<Receiver<String>>,
    /// Transient status message for export results (shown briefly).
    pub export_message: Option<(String, std::time::Instant)>,
    /// Receiver for a report path selected by the user via the open dialog.
    pub import_rx: Option<Receiver<std::path::PathBuf>>,
}

// ── Construction ────────────────────────────────────────────────────────

impl RobotScopeApp {
    /// Create a new `RobotScopeApp` and apply the theme.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        crate::ui::theme::apply_theme(&cc.egui_ctx);

        let mut app = Self::bare();

        // Restore persisted theme preference. Filter and sort state are
        // deliberately NOT persisted: every launch starts at "All",
        // unsorted.
        if let Some(storage) = cc.storage {
            if let Some(dark) = eframe::get_value::<bool>(storage, "dark_mode") {
                app.dark_mode = dark;
                if dark {
                    crate::ui::theme::apply_dark_theme(&cc.egui_ctx);
                } else {
                    crate::ui::theme::apply_light_theme(&cc.egui_ctx);
                }
            }
        }

        app
    }

    /// Initial application state, independent of any window context.
    fn bare() -> Self {
        Self {
            records: Vec::new(),
            visible_indices: Vec::new(),
            needs_refilter: false,

            filter: CategoryFilter::default(),
            sort: None,

            urls_input: String::new(),
            pending: None,
            banners: Vec::new(),
            analyzer: None,

            worker_rx: None,
            cancel_flag: None,
            is_loading: false,

            status_text: "Ready".into(),
            run_elapsed: None,
            progress_done: 0,
            progress_total: 0,
            progress_url: String::new(),

            errors: Vec::new(),

            detail: None,

            show_about: false,

            dark_mode: true,

            export_rx: None,
            export_message: None,
            import_rx: None,
        }
    }

    /// Attach an analysis backend. Hosts embedding the library call this to
    /// make the Analyze button dispatch real work.
    pub fn with_analyzer(mut self, analyzer: Arc<dyn RobotsAnalyzer>) -> Self {
        self.analyzer = Some(analyzer);
        self
    }
}

// ── Core logic ──────────────────────────────────────────────────────────

impl RobotScopeApp {
    /// Handle a click on the Analyze control: validate the URL list, set up
    /// the submission feedback, and dispatch to the worker if an analyzer
    /// is attached.
    pub fn submit_batch(&mut self) {
        if self.pending.is_some() {
            // Control is disabled while pending; nothing further needed.
            return;
        }

        // Each submission starts with a fresh banner strip so the
        // large-batch notice appears exactly once per submission.
        let (urls, banners) = submission::prepare_batch(&self.urls_input);
        self.banners = banners;
        if urls.is_empty() {
            return;
        }

        let count = urls.len();
        tracing::info!("Analyzing batch of {count} URLs");

        if let Some(analyzer) = self.analyzer.clone() {
            // Tear down any previous run and clear its state BEFORE arming
            // the feedback deadline — cancel_run also resets `pending`.
            self.cancel_run();
            self.records.clear();
            self.visible_indices.clear();
            self.detail = None;
            self.errors.clear();
            self.run_elapsed = None;
            self.progress_done = 0;
            self.progress_total = count;
            self.progress_url.clear();
            self.needs_refilter = true;

            let (tx, rx) = crossbeam_channel::bounded::<WorkerMessage>(constants::CHANNEL_BOUND);
            let cancel = Arc::new(AtomicBool::new(false));

            let _handle = worker::spawn_analysis_thread(urls, analyzer, tx, cancel.clone());

            self.worker_rx = Some(rx);
            self.cancel_flag = Some(cancel);
            self.is_loading = true;
        } else {
            // No backend attached: the submission feedback still runs, and
            // the deadline eventually restores the control with a warning.
            tracing::warn!("No analyzer attached; submission will time out");
        }

        self.pending = Some(PendingSubmission::new(count));
        self.status_text = format!("Analyzing {count} domains…");
    }

    /// Request cancellation of the current background thread and restore
    /// the submit control.
    pub fn cancel_run(&mut self) {
        if let Some(flag) = &self.cancel_flag {
            flag.store(true, Ordering::Relaxed);
        }
        self.is_loading = false;
        self.worker_rx = None;
        self.cancel_flag = None;
        self.pending = None;
    }

    /// Poll the worker channel for incoming messages and process them.
    ///
    /// Called once per frame. Non-blocking — uses `try_recv` in a loop
    /// to drain all available messages.
    pub(crate) fn process_worker_messages(&mut self) {
        let rx = match &self.worker_rx {
            Some(rx) => rx.clone(),
            None => return,
        };

        let mut received_records = false;
        while let Ok(msg) = rx.try_recv() {
            match msg {
                WorkerMessage::ResultBatch(batch) => {
                    self.records.extend(batch);
                    received_records = true;
                }
                WorkerMessage::Progress { done, total, url } => {
                    self.progress_done = done;
                    self.progress_total = total;
                    self.progress_url = url;
                }
                WorkerMessage::Complete { total, elapsed } => {
                    self.is_loading = false;
                    self.worker_rx = None;
                    self.cancel_flag = None;
                    // Completion cancels the feedback deadline explicitly,
                    // so a finished run never draws a stale warning banner.
                    self.pending = None;
                    self.run_elapsed = Some(elapsed);
                    self.status_text = format!("Analyzed {total} URLs");
                    tracing::info!("Run complete: {total} records");
                }
                WorkerMessage::Error { url, error } => {
                    if self.errors.len() < constants::MAX_ERRORS {
                        self.errors.push((url, error));
                    }
                }
            }
        }

        if received_records {
            self.needs_refilter = true;
        }
    }

    /// If the submission deadline has passed with the run still pending,
    /// restore the submit control and append the "still processing?"
    /// warning banner. A later worker completion only updates the status
    /// bar — the stale banner stays, which is cosmetic, not harmful.
    pub(crate) fn check_submission_deadline(&mut self, ctx: &egui::Context) {
        let Some(pending) = self.pending else {
            return;
        };
        let now = std::time::Instant::now();
        if pending.expired(now) {
            self.pending = None;
            self.banners.push(Banner::warning(
                "Still processing? The analysis is taking longer than expected. \
                 You can try again with a smaller batch if needed.",
            ));
            self.status_text = "Ready".into();
            tracing::warn!(
                "Submission of {} domains hit the feedback deadline",
                pending.domain_count
            );
        } else {
            // Wake up again when the deadline is due.
            ctx.request_repaint_after(pending.remaining(now));
        }
    }

    /// Rebuild `visible_indices` by applying the current filter.
    pub fn apply_filter(&mut self) {
        self.visible_indices = filter::visible_indices(&self.records, self.filter);
        self.needs_refilter = false;
    }

    /// Switch the active category filter.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.needs_refilter = true;
    }

    /// Handle a click on a sortable column header: toggle or select the
    /// sort state, reorder the master list, and rebuild the visible set.
    pub fn sort_by(&mut self, key: SortKey) {
        let state = SortState::click(self.sort, key);
        self.sort = Some(state);
        sort::sort_records(&mut self.records, self.sort);
        self.needs_refilter = true;
    }

    /// Replace the loaded records wholesale (report import, sample data).
    pub fn set_records(&mut self, records: Vec<AnalysisRecord>) {
        self.records = records;
        self.sort = None;
        self.detail = None;
        self.errors.clear();
        self.needs_refilter = true;
        self.status_text = format!("Loaded {} records", self.records.len());
    }

    /// Collect the visible records into a cloned `Vec` for export.
    ///
    /// Cloning is necessary because export happens on a background thread
    /// (for the file dialog) and can't hold references to `self`.
    pub fn visible_record_list(&self) -> Vec<AnalysisRecord> {
        self.visible_indices
            .iter()
            .filter_map(|&idx| self.records.get(idx).cloned())
            .collect()
    }

    /// Number of records in the given filter's category, for button badges.
    pub fn filter_count(&self, filter: CategoryFilter) -> usize {
        self.records.iter().filter(|r| filter.matches(r)).count()
    }
}

// ── eframe::App implementation ──────────────────────────────────────────

impl eframe::App for RobotScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 1. Process messages from the worker / report loader
        self.process_worker_messages();

        // 2. Process export completion messages
        self.process_export_messages();

        // 3. Process report import file selection
        self.process_import_selection();

        // 4. Submission feedback deadline
        self.check_submission_deadline(ctx);

        // 5. Re-filter if needed
        if self.needs_refilter {
            self.apply_filter();
        }

        // 6. Keep repainting while loading (to poll messages)
        if self.is_loading {
            ctx.request_repaint();
        }

        // 7. Keyboard shortcuts
        self.handle_keyboard_shortcuts(ctx);

        // ── Top toolbar ─────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .exact_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                self.render_toolbar(ui);
            });

        // ── Bottom status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(26.0)
            .show(ctx, |ui| {
                self.render_status_bar(ui);
            });

        // ── Left submit panel (the "form") ──────────────────────────
        egui::SidePanel::left("submit_panel")
            .resizable(true)
            .default_width(260.0)
            .min_width(200.0)
            .max_width(420.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.render_submit_panel(ui);
                });
            });

        // ── Central results table with filter bar ───────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_filter_bar(ui);
            ui.add_space(4.0);
            self.render_results_table(ui);
        });

        // ── Floating windows ────────────────────────────────────────
        self.render_detail_window(ctx);
        self.render_about_dialog(ctx);
    }

    /// Persist user preferences on shutdown. Only the theme: filter and
    /// sort state intentionally reset on every launch.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, "dark_mode", &self.dark_mode);
    }
}

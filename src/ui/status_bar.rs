//! Bottom status bar: result counts, run time, loading progress, and
//! transient export feedback.

use crate::app::RobotScopeApp;
use crate::ui::theme;
use crate::util::time::format_duration;

impl RobotScopeApp {
    /// Render the status bar at the bottom of the window.
    ///
    /// Shows: visible/total counts | run time | status | export feedback
    /// and an error indicator on the right.
    pub fn render_status_bar(&self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;
        ui.horizontal_centered(|ui| {
            // ── Result count ────────────────────────────────────────
            let visible = self.visible_indices.len();
            let total = self.records.len();
            let count_text = if visible == total {
                format!("{total} results")
            } else {
                format!("Showing {visible} of {total} results")
            };
            ui.label(egui::RichText::new(count_text).color(theme::text_secondary(dark)));

            ui.separator();

            // ── Run time ────────────────────────────────────────────
            if let Some(elapsed) = self.run_elapsed {
                ui.label(
                    egui::RichText::new(format!("Run: {}", format_duration(elapsed)))
                        .color(theme::text_dim(dark)),
                );
                ui.separator();
            }

            // ── Loading / ready status ──────────────────────────────
            if self.is_loading {
                ui.spinner();
                let progress = if self.progress_total > 0 {
                    format!(
                        "Analyzing… {}/{} ({})",
                        self.progress_done, self.progress_total, self.progress_url
                    )
                } else {
                    self.status_text.clone()
                };
                ui.label(egui::RichText::new(progress).color(theme::text_secondary(dark)));
            } else {
                ui.label(egui::RichText::new(&self.status_text).color(theme::ACCENT_DIM));
            }

            // ── Export feedback ─────────────────────────────────────
            if let Some((msg, _)) = &self.export_message {
                ui.separator();
                ui.label(egui::RichText::new(msg).color(theme::accent(dark)));
            }

            // ── Errors indicator ────────────────────────────────────
            if !self.errors.is_empty() {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let err_text = format!("!! {} error(s)", self.errors.len());
                    let response = ui.label(
                        egui::RichText::new(err_text).color(theme::CAT_DISALLOWED),
                    );
                    // Show error details on hover
                    response.on_hover_ui(|ui| {
                        for (url, msg) in &self.errors {
                            ui.label(
                                egui::RichText::new(format!("{url}: {msg}"))
                                    .color(theme::CAT_ERROR)
                                    .small(),
                            );
                        }
                    });
                });
            }
        });
    }
}

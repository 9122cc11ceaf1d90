//! Detail window for a single analysis record.
//!
//! Opens when a table row is clicked and shows the record's fields
//! verbatim: the resolved robots.txt URL, the raw robots.txt content in a
//! monospaced scroll area, the matched disallow rules, and any error
//! message.

use crate::app::RobotScopeApp;
use crate::core::record::{AnalysisStatus, Category};
use crate::ui::theme;

impl RobotScopeApp {
    /// Render the detail window (if a record is selected).
    pub fn render_detail_window(&mut self, ctx: &egui::Context) {
        let Some(record) = self.detail.clone() else {
            return;
        };
        let dark = self.dark_mode;

        let mut open = true;
        egui::Window::new(format!("🤖 {}", record.url))
            .open(&mut open)
            .collapsible(false)
            .resizable(true)
            .default_width(560.0)
            .default_height(420.0)
            .show(ctx, |ui| {
                // ── Header grid ─────────────────────────────────────
                egui::Grid::new("detail_header_grid")
                    .num_columns(2)
                    .striped(false)
                    .spacing([20.0, 4.0])
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new("robots.txt").color(theme::text_dim(dark)));
                        if record.robots_url.is_empty() {
                            ui.label(
                                egui::RichText::new("(not resolved)")
                                    .color(theme::text_dim(dark))
                                    .italics(),
                            );
                        } else {
                            ui.label(record.robots_url.as_str());
                        }
                        ui.end_row();

                        ui.label(egui::RichText::new("Status").color(theme::text_dim(dark)));
                        ui.label(record.status_label());
                        ui.end_row();

                        ui.label(egui::RichText::new("Google Check").color(theme::text_dim(dark)));
                        ui.label(
                            egui::RichText::new(record.check_label())
                                .color(theme::category_color(record.category(), dark)),
                        );
                        ui.end_row();
                    });

                if record.status == AnalysisStatus::Error && !record.error_message.is_empty() {
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(record.error_message.as_str())
                            .color(theme::category_color(Category::Error, dark)),
                    );
                }

                // ── Disallow rules ──────────────────────────────────
                if !record.disallow_rules.is_empty() {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(format!(
                            "🚫 Disallow rules ({})",
                            record.disallow_rules.len()
                        ))
                        .color(theme::accent(dark))
                        .strong(),
                    );
                    ui.separator();

                    egui::Grid::new("disallow_rules_grid")
                        .num_columns(2)
                        .striped(true)
                        .spacing([12.0, 4.0])
                        .show(ui, |ui| {
                            for rule in &record.disallow_rules {
                                ui.label(
                                    egui::RichText::new(rule.agent.as_str())
                                        .color(theme::text_secondary(dark)),
                                );
                                ui.label(egui::RichText::new(rule.rule.as_str()).monospace());
                                ui.end_row();
                            }
                        });
                }

                // ── Raw robots.txt content ──────────────────────────
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("📄 robots.txt content")
                            .color(theme::accent(dark))
                            .strong(),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .small_button("📋 Copy")
                            .on_hover_text("Copy the robots.txt content to the clipboard")
                            .clicked()
                        {
                            ui.ctx().copy_text(record.robots_content.clone());
                        }
                    });
                });
                ui.separator();

                egui::ScrollArea::vertical().show(ui, |ui| {
                    if record.robots_content.is_empty() {
                        ui.label(
                            egui::RichText::new("(no content available)")
                                .color(theme::text_dim(dark))
                                .italics(),
                        );
                    } else {
                        // Shown verbatim — no reformatting or escaping.
                        ui.label(
                            egui::RichText::new(record.robots_content.as_str())
                                .monospace()
                                .size(12.0)
                                .color(theme::text_secondary(dark)),
                        );
                    }
                });
            });

        if !open {
            self.detail = None;
        }
    }
}

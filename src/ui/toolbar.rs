//! Top toolbar: report import, sample data, export menu, theme toggle
//! and the About button.

use crate::app::RobotScopeApp;
use crate::app_actions::ExportFormat;
use crate::ui::theme;
use crate::util::constants;

impl RobotScopeApp {
    /// Render the toolbar row.
    pub fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;
        ui.horizontal(|ui| {
            if ui
                .button("📂 Import Report…")
                .on_hover_text("Open a saved analysis report (Ctrl+O)")
                .clicked()
            {
                self.import_report();
            }

            if ui
                .button("🧪 Load Sample")
                .on_hover_text("Load the bundled sample report")
                .clicked()
            {
                self.load_sample_report();
            }

            ui.separator();

            ui.menu_button("💾 Export", |ui| {
                let has_results = !self.visible_indices.is_empty();
                if ui
                    .add_enabled(has_results, egui::Button::new("Export as CSV…"))
                    .clicked()
                {
                    self.export_records(ExportFormat::Csv);
                    ui.close_menu();
                }
                if ui
                    .add_enabled(has_results, egui::Button::new("Export as JSON…"))
                    .clicked()
                {
                    self.export_records(ExportFormat::Json);
                    ui.close_menu();
                }
                if ui
                    .add_enabled(has_results, egui::Button::new("Export as text report…"))
                    .clicked()
                {
                    self.export_records(ExportFormat::Text);
                    ui.close_menu();
                }
            });

            if self.is_loading {
                ui.separator();
                if ui
                    .button(egui::RichText::new("⏹ Stop").color(theme::CAT_ERROR))
                    .on_hover_text("Cancel the running analysis (Esc)")
                    .clicked()
                {
                    self.cancel_run();
                    self.status_text = "Cancelled".into();
                }
            }

            // ── Right side ──────────────────────────────────────────
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button("ℹ")
                    .on_hover_text(format!(
                        "About {} v{}",
                        constants::APP_NAME,
                        constants::APP_VERSION
                    ))
                    .clicked()
                {
                    self.show_about = !self.show_about;
                }

                let theme_icon = if dark { "☀" } else { "🌙" };
                if ui
                    .button(theme_icon)
                    .on_hover_text("Toggle light/dark theme")
                    .clicked()
                {
                    self.dark_mode = !self.dark_mode;
                    if self.dark_mode {
                        theme::apply_dark_theme(ui.ctx());
                    } else {
                        theme::apply_light_theme(ui.ctx());
                    }
                }

                ui.label(
                    egui::RichText::new(format!(
                        "{} v{}",
                        constants::APP_NAME,
                        constants::APP_VERSION
                    ))
                    .color(theme::text_dim(dark))
                    .small(),
                );
            });
        });
    }
}

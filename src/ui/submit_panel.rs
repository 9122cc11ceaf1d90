//! Left submit panel: the URL input form, the Analyze control with its
//! busy state, and the dismissible banner strip underneath.

use crate::app::RobotScopeApp;
use crate::core::submission;
use crate::ui::theme;

impl RobotScopeApp {
    /// Render the submit form within the given `Ui` region.
    pub fn render_submit_panel(&mut self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;

        ui.add_space(6.0);
        ui.heading(egui::RichText::new("🤖 Analyze").color(theme::accent(dark)));
        ui.separator();

        ui.label("Domains (one per line)");
        ui.add(
            egui::TextEdit::multiline(&mut self.urls_input)
                .hint_text("example.com\nanother-site.org")
                .desired_rows(10)
                .desired_width(f32::INFINITY)
                .font(egui::TextStyle::Monospace),
        )
        .on_hover_text(
            "Paste the sites to check, one per line.\nBlank lines are ignored.",
        );

        let count = submission::domain_count(&self.urls_input);
        ui.label(
            egui::RichText::new(format!("{count} domains"))
                .color(theme::text_dim(dark))
                .small(),
        );

        ui.add_space(6.0);

        // ── Analyze control ─────────────────────────────────────────
        // While a submission is pending the control is disabled and shows
        // the busy indicator — that alone prevents duplicate submits.
        if let Some(pending) = self.pending {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.add_enabled(
                    false,
                    egui::Button::new(format!("Analyzing {} domains…", pending.domain_count)),
                );
            });
        } else if ui
            .button(egui::RichText::new("🔍 Analyze").color(theme::accent(dark)))
            .on_hover_text("Dispatch the listed domains for robots.txt analysis (Ctrl+Enter)")
            .clicked()
        {
            self.submit_batch();
        }

        // ── Banners ─────────────────────────────────────────────────
        if !self.banners.is_empty() {
            ui.add_space(8.0);
            self.render_banners(ui);
        }
    }

    /// Render the banner strip. Each banner carries a dismiss button;
    /// dismissal only removes that one banner.
    fn render_banners(&mut self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;
        let mut dismissed: Option<usize> = None;

        for (idx, banner) in self.banners.iter().enumerate() {
            egui::Frame::new()
                .fill(theme::banner_fill(banner.kind, dark))
                .inner_margin(egui::Margin::same(6))
                .corner_radius(4.0)
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(
                            egui::RichText::new(banner.text.as_str())
                                .color(theme::text_primary(dark)),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        if ui.small_button("✖").on_hover_text("Dismiss").clicked() {
                            dismissed = Some(idx);
                        }
                    });
                });
            ui.add_space(4.0);
        }

        if let Some(idx) = dismissed {
            self.banners.remove(idx);
        }
    }
}

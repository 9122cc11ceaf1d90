//! Category filter bar above the results table.
//!
//! Four buttons — All / Disallowed / Allowed / Errors. The active filter is
//! the app's single `CategoryFilter` value, so exactly one button renders
//! active at any time.

use crate::app::RobotScopeApp;
use crate::core::filter::CategoryFilter;
use crate::ui::theme;

impl RobotScopeApp {
    /// Render the filter button row.
    pub fn render_filter_bar(&mut self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Show:")
                    .color(theme::text_secondary(dark))
                    .small(),
            );

            let mut clicked: Option<CategoryFilter> = None;
            for choice in CategoryFilter::ALL {
                let active = self.filter == choice;
                let label = format!("{} ({})", choice.label(), self.filter_count(choice));
                if ui.selectable_label(active, label).clicked() {
                    clicked = Some(choice);
                }
            }
            if let Some(choice) = clicked {
                self.set_filter(choice);
            }
        });
    }
}

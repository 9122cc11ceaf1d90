//! Central results table with virtual scrolling and sortable columns.
//!
//! Uses `egui_extras::TableBuilder` for column layout, which provides
//! built-in virtual scrolling via its `body.rows()` method — only visible
//! rows are laid out. Clicking a sortable header toggles/selects its sort
//! state; clicking a row opens the detail window for that record.

use crate::app::RobotScopeApp;
use crate::core::sort::{SortDirection, SortKey};
use crate::ui::theme;
use crate::util::constants::TABLE_ROW_HEIGHT;
use egui_extras::{Column, TableBuilder};

impl RobotScopeApp {
    /// Render the results table in the central panel.
    ///
    /// Columns: URL, Status, Google Check (all sortable) and Rules (count,
    /// not sortable). Zero visible rows renders the header only — no
    /// empty-state message.
    pub fn render_results_table(&mut self, ui: &mut egui::Ui) {
        let row_count = self.visible_indices.len();

        let table = TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::remainder().at_least(220.0).clip(true)) // URL
            .column(Column::auto().at_least(80.0)) // Status
            .column(Column::auto().at_least(110.0)) // Google Check
            .column(Column::auto().at_least(55.0)) // Rules
            .sense(egui::Sense::click());

        table
            .header(22.0, |mut header| {
                header.col(|ui| {
                    self.render_sort_header(ui, SortKey::Url, "URL");
                });
                header.col(|ui| {
                    self.render_sort_header(ui, SortKey::Status, "Status");
                });
                header.col(|ui| {
                    self.render_sort_header(ui, SortKey::Check, "Google Check");
                });
                header.col(|ui| {
                    ui.label(
                        egui::RichText::new("Rules")
                            .color(theme::text_primary(self.dark_mode)),
                    );
                });
            })
            .body(|body| {
                let mut open_detail: Option<usize> = None;

                body.rows(TABLE_ROW_HEIGHT, row_count, |mut row| {
                    let visible_idx = row.index();
                    if visible_idx >= self.visible_indices.len() {
                        return;
                    }
                    let record_idx = self.visible_indices[visible_idx];
                    let record = &self.records[record_idx];
                    let dark = self.dark_mode;
                    let cat_color = theme::category_color(record.category(), dark);

                    // URL
                    row.col(|ui| {
                        ui.label(record.url.as_str());
                    });

                    // Status
                    row.col(|ui| {
                        ui.label(
                            egui::RichText::new(record.status_label())
                                .color(theme::text_secondary(dark)),
                        );
                    });

                    // Google Check (colour-coded by category)
                    row.col(|ui| {
                        ui.label(egui::RichText::new(record.check_label()).color(cat_color));
                    });

                    // Rule count
                    row.col(|ui| {
                        ui.label(
                            egui::RichText::new(record.disallow_rules.len().to_string())
                                .color(theme::text_secondary(dark)),
                        );
                    });

                    // Handle row click → open the detail window
                    if row.response().clicked() {
                        open_detail = Some(record_idx);
                    }
                });

                if let Some(record_idx) = open_detail {
                    // The detail window holds a verbatim copy of the record.
                    self.detail = self.records.get(record_idx).cloned();
                }
            });
    }

    /// Render a sortable column header button.
    ///
    /// Shows an arrow indicator for the active sort column; clicking toggles
    /// direction (same column) or selects ascending (new column). All other
    /// headers implicitly render neutral because there is only one
    /// `SortState`.
    fn render_sort_header(&mut self, ui: &mut egui::Ui, key: SortKey, label: &str) {
        let active = self.sort.filter(|s| s.key == key);
        let arrow = match active.map(|s| s.direction) {
            Some(SortDirection::Ascending) => " ▲",
            Some(SortDirection::Descending) => " ▼",
            None => "",
        };

        let text = format!("{label}{arrow}");
        let dark = self.dark_mode;
        let rich = if active.is_some() {
            egui::RichText::new(text).color(theme::accent(dark)).strong()
        } else {
            egui::RichText::new(text).color(theme::text_primary(dark))
        };

        if ui.button(rich).clicked() {
            self.sort_by(key);
        }
    }
}

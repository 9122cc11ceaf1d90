//! Colour palette and style helpers for RobotScope's dark and light themes.
//!
//! Result categories are colour-coded consistently everywhere a category
//! appears: table rows, filter badges, the detail window, and banners.

use egui::Color32;

use crate::core::record::Category;
use crate::core::submission::BannerKind;

// ── Dark palette ────────────────────────────────────────────────────────

/// Main window background.
pub const BG_DARK: Color32 = Color32::from_rgb(28, 30, 38);

/// Panel / sidebar background.
pub const BG_PANEL: Color32 = Color32::from_rgb(34, 36, 46);

/// Even rows in the results table.
pub const BG_TABLE_ROW_EVEN: Color32 = Color32::from_rgb(31, 33, 42);

/// Currently selected / highlighted row.
pub const BG_SELECTED: Color32 = Color32::from_rgb(52, 58, 86);

/// Primary text colour.
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(206, 208, 216);

/// Secondary / muted text.
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(138, 142, 158);

/// Dim text (hints, placeholders).
pub const TEXT_DIM: Color32 = Color32::from_rgb(98, 102, 120);

/// Primary accent (teal).
pub const ACCENT: Color32 = Color32::from_rgb(76, 198, 212);

/// Dimmer accent for secondary highlights.
pub const ACCENT_DIM: Color32 = Color32::from_rgb(58, 148, 162);

// ── Category colours (dark) ─────────────────────────────────────────────

/// Allowed — green.
pub const CAT_ALLOWED: Color32 = Color32::from_rgb(120, 200, 120);

/// Disallowed — amber.
pub const CAT_DISALLOWED: Color32 = Color32::from_rgb(226, 168, 70);

/// Error — red.
pub const CAT_ERROR: Color32 = Color32::from_rgb(226, 106, 96);

// ── Helpers ─────────────────────────────────────────────────────────────

/// Primary text colour for the active theme.
pub fn text_primary(dark: bool) -> Color32 {
    if dark {
        TEXT_PRIMARY
    } else {
        Color32::from_rgb(40, 42, 52)
    }
}

/// Secondary text colour for the active theme.
pub fn text_secondary(dark: bool) -> Color32 {
    if dark {
        TEXT_SECONDARY
    } else {
        Color32::from_rgb(95, 100, 118)
    }
}

/// Dim text colour for the active theme.
pub fn text_dim(dark: bool) -> Color32 {
    if dark {
        TEXT_DIM
    } else {
        Color32::from_rgb(150, 153, 168)
    }
}

/// Accent colour for the active theme.
pub fn accent(dark: bool) -> Color32 {
    if dark {
        ACCENT
    } else {
        Color32::from_rgb(24, 140, 158)
    }
}

/// Return the colour associated with a result category.
pub fn category_color(category: Category, dark: bool) -> Color32 {
    match category {
        Category::Allowed => {
            if dark {
                CAT_ALLOWED
            } else {
                Color32::from_rgb(38, 140, 60)
            }
        }
        Category::Disallowed => {
            if dark {
                CAT_DISALLOWED
            } else {
                Color32::from_rgb(182, 120, 20)
            }
        }
        Category::Error => {
            if dark {
                CAT_ERROR
            } else {
                Color32::from_rgb(190, 54, 48)
            }
        }
    }
}

/// Background fill for a banner strip of the given kind.
pub fn banner_fill(kind: BannerKind, dark: bool) -> Color32 {
    match (kind, dark) {
        (BannerKind::Info, true) => Color32::from_rgb(32, 52, 66),
        (BannerKind::Info, false) => Color32::from_rgb(214, 234, 244),
        (BannerKind::Warning, true) => Color32::from_rgb(62, 48, 18),
        (BannerKind::Warning, false) => Color32::from_rgb(250, 238, 200),
    }
}

/// Apply the RobotScope theme to the given egui context.
///
/// Should be called once during initialisation (in `App::new`).
pub fn apply_theme(ctx: &egui::Context) {
    apply_dark_theme(ctx);
}

/// Apply the RobotScope dark theme.
pub fn apply_dark_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();

    // Background tones
    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = BG_DARK;
    visuals.faint_bg_color = BG_TABLE_ROW_EVEN;

    // Override all text to our primary colour
    visuals.override_text_color = Some(TEXT_PRIMARY);

    // Widget resting state
    visuals.widgets.inactive.bg_fill = Color32::from_rgb(44, 46, 60);
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(39, 41, 54);

    // Widget hover state
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(54, 57, 76);
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);

    // Widget active state
    visuals.widgets.active.bg_fill = Color32::from_rgb(64, 68, 92);

    // Non-interactive backgrounds
    visuals.widgets.noninteractive.bg_fill = BG_PANEL;
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);

    // Selection
    visuals.selection.bg_fill = BG_SELECTED;
    visuals.selection.stroke = egui::Stroke::new(1.0, ACCENT);

    // Window appearance
    visuals.window_shadow = egui::Shadow::NONE;
    visuals.window_stroke = egui::Stroke::new(1.0, Color32::from_rgb(50, 52, 68));

    ctx.set_visuals(visuals);
}

/// Apply the RobotScope light theme.
pub fn apply_light_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();

    visuals.panel_fill = Color32::from_rgb(245, 245, 248);
    visuals.window_fill = Color32::from_rgb(250, 250, 252);
    visuals.extreme_bg_color = Color32::WHITE;
    visuals.faint_bg_color = Color32::from_rgb(238, 238, 242);

    visuals.override_text_color = Some(Color32::from_rgb(40, 42, 52));

    visuals.widgets.inactive.bg_fill = Color32::from_rgb(225, 225, 232);
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, Color32::from_rgb(80, 84, 102));
    visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(230, 230, 236);

    visuals.widgets.hovered.bg_fill = Color32::from_rgb(210, 210, 220);
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, Color32::from_rgb(40, 42, 52));

    visuals.widgets.active.bg_fill = Color32::from_rgb(195, 195, 210);

    visuals.widgets.noninteractive.bg_fill = Color32::from_rgb(240, 240, 244);
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Color32::from_rgb(100, 104, 122));

    visuals.selection.bg_fill = Color32::from_rgb(180, 215, 235);
    visuals.selection.stroke = egui::Stroke::new(1.0, Color32::from_rgb(30, 150, 170));

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.window_stroke = egui::Stroke::new(1.0, Color32::from_rgb(200, 200, 210));

    ctx.set_visuals(visuals);
}

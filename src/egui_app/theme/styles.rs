//! Theme Styling Functions
//!
//! Frame builders and the global style for the todo board.

use eframe::egui::{self, Color32, CornerRadius, RichText, Stroke};
use super::colors;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.window_fill = colors::BOARD_BG;
    style.visuals.panel_fill = colors::BG_DARK;

    style.visuals.widgets.noninteractive.bg_fill = colors::INPUT_BAR_BG;
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::TEXT_DARK);

    style.visuals.widgets.inactive.bg_fill = colors::INPUT_BAR_BG;
    style.visuals.widgets.inactive.weak_bg_fill = colors::INPUT_BAR_BG;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_DARK);

    style.visuals.widgets.hovered.bg_fill = colors::HOVER;
    style.visuals.widgets.hovered.weak_bg_fill = colors::HOVER;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.widgets.active.bg_fill = colors::BUTTON_PRIMARY;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.extreme_bg_color = colors::INPUT_BAR_BG;
    style.visuals.selection.bg_fill = colors::HOVER;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    ctx.set_style(style);
}

/// Create a frame style for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame style for the card holding the list
pub fn board_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::BOARD_BG)
        .corner_radius(CornerRadius::same(12))
        .inner_margin(egui::Margin::same(20))
        .shadow(egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(60),
        })
}

/// Create a frame style for the input bar
pub fn input_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::INPUT_BAR_BG)
        .stroke(Stroke::new(1.0, colors::INPUT_BAR_BORDER))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame for one todo row
pub fn todo_row_frame(completed: bool) -> egui::Frame {
    let fill = if completed { colors::ROW_DONE_BG } else { colors::ROW_BG };
    egui::Frame::new()
        .fill(fill)
        .stroke(Stroke::new(1.0, colors::ROW_BORDER))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Filled button with light text
pub fn filled_button(label: &str, fill: Color32) -> egui::Button<'static> {
    egui::Button::new(RichText::new(label.to_owned()).color(colors::TEXT_LIGHT))
        .fill(fill)
        .stroke(Stroke::NONE)
        .corner_radius(CornerRadius::same(6))
}

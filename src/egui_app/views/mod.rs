use eframe::egui;

use crate::egui_app::state::{AppState, ConnectionStatus};
use crate::egui_app::theme::{colors, styles};

pub mod todo_list;

pub fn render_top_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("xftodo").size(18.0).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);

                    match &state.connection {
                        ConnectionStatus::Connected => {
                            ui.colored_label(colors::STATUS_ONLINE, "● Connected");
                        }
                        ConnectionStatus::Connecting => {
                            ui.colored_label(colors::STATUS_CONNECTING, "● Connecting…");
                        }
                        ConnectionStatus::Disconnected(reason) => {
                            ui.colored_label(colors::STATUS_OFFLINE, "● Offline")
                                .on_hover_text(reason.as_str());
                        }
                    }

                    ui.add_space(8.0);
                    ui.colored_label(colors::TEXT_SECONDARY, state.config.server_url());
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(24));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| todo_list::render(ui, state));
}

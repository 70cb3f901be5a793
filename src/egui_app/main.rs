/**
 * egui Native Desktop App - Main Entry Point
 *
 * This is the main entry point for the xftodo desktop client.
 * It implements eframe::App and renders the todo board.
 */
use std::time::Duration;

use eframe::egui;
use xftodo::egui_app::{theme::styles, views, AppState, Config};

/// Redraw interval while a stopwatch is visible
const CLOCK_REPAINT: Duration = Duration::from_secs(1);

fn main() -> Result<(), eframe::Error> {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 640.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        "xftodo",
        options,
        Box::new(|cc| {
            styles::apply_global_theme(&cc.egui_ctx);

            let mut state = AppState::new(Config::load());
            let ctx = cc.egui_ctx.clone();
            state.connect(Box::new(move || ctx.request_repaint()));

            Ok(Box::new(TodoApp { state }))
        }),
    )
}

/// Main application state
struct TodoApp {
    state: AppState,
}

impl eframe::App for TodoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();

        views::render_top_bar(ctx, &self.state);
        views::render_main_panel(ctx, &mut self.state);

        if self.state.board.has_running() {
            ctx.request_repaint_after(CLOCK_REPAINT);
        }
    }
}

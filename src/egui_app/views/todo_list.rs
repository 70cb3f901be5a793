//! Todo List View
//!
//! Input bar on top, one row per todo below. Row buttons are collected while
//! the board is borrowed and applied after the list is drawn.

use eframe::egui;

use crate::egui_app::state::{AppState, TimerControls};
use crate::egui_app::theme::{colors, styles};
use crate::shared::{format_duration, Todo};

/// A button pressed on a row
#[derive(Debug, Clone, PartialEq, Eq)]
enum RowAction {
    Toggle(String),
    Delete(String),
    Start(String),
    Resume(String),
    Stop(String),
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.set_max_width(640.0);

        styles::board_frame().show(ui, |ui| {
            ui.colored_label(
                colors::TEXT_DARK,
                egui::RichText::new("TODO List with Stopwatch").size(22.0).strong(),
            );
            ui.add_space(12.0);

            render_input_bar(ui, state);
            if !state.is_connected() {
                ui.add_space(4.0);
                ui.colored_label(colors::TEXT_SECONDARY, "Offline, changes are sent once reconnected");
            }
            ui.add_space(12.0);

            let actions = render_rows(ui, state);
            for action in actions {
                perform(state, action);
            }
        });
    });
}

fn render_input_bar(ui: &mut egui::Ui, state: &mut AppState) {
    styles::input_bar_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            let add_width = 64.0;
            let response = ui.add(
                egui::TextEdit::singleline(&mut state.todo_input)
                    .hint_text("Add a new todo...")
                    .desired_width(ui.available_width() - add_width),
            );

            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let clicked = ui.add(styles::filled_button("Add", colors::BUTTON_PRIMARY)).clicked();

            if submitted || clicked {
                // Blank input is simply not sent
                if state.add_todo().is_ok() {
                    response.request_focus();
                }
            }
        });
    });
}

fn render_rows(ui: &mut egui::Ui, state: &AppState) -> Vec<RowAction> {
    let mut actions = Vec::new();

    if state.board.is_empty() {
        ui.add_space(24.0);
        ui.colored_label(colors::TEXT_SECONDARY, "Nothing to do yet");
        ui.add_space(24.0);
        return actions;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, true])
        .show(ui, |ui| {
            for todo in state.board.todos() {
                let controls = state.board.controls_for(todo);
                render_row(ui, todo, controls, &mut actions);
                ui.add_space(6.0);
            }
        });

    actions
}

fn render_row(ui: &mut egui::Ui, todo: &Todo, controls: TimerControls, actions: &mut Vec<RowAction>) {
    styles::todo_row_frame(todo.completed).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            let mut completed = todo.completed;
            if ui.checkbox(&mut completed, "").changed() {
                actions.push(RowAction::Toggle(todo.id.clone()));
            }

            let text = if todo.completed {
                egui::RichText::new(&todo.text).strikethrough().color(colors::TEXT_SECONDARY)
            } else {
                egui::RichText::new(&todo.text).color(colors::TEXT_DARK)
            };
            ui.label(text);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.add(styles::filled_button("Delete", colors::BUTTON_DANGER)).clicked() {
                    actions.push(RowAction::Delete(todo.id.clone()));
                }
                render_timer_controls(ui, todo, controls, actions);
            });
        });
    });
}

/// Laid out right to left, so buttons come before the clock
fn render_timer_controls(ui: &mut egui::Ui, todo: &Todo, controls: TimerControls, actions: &mut Vec<RowAction>) {
    match controls {
        TimerControls::Completed { saved } => {
            if let Some(saved) = saved {
                clock(ui, saved, colors::TIMER_SAVED);
            }
        }
        TimerControls::Running { total } => {
            if ui.add(styles::filled_button("Stop", colors::BUTTON_PRIMARY)).clicked() {
                actions.push(RowAction::Stop(todo.id.clone()));
            }
            clock(ui, total, colors::TIMER_RUNNING);
        }
        TimerControls::Paused { saved } => {
            if ui.add(styles::filled_button("Start New", colors::BUTTON_PRIMARY)).clicked() {
                actions.push(RowAction::Start(todo.id.clone()));
            }
            if ui.add(styles::filled_button("Resume", colors::BUTTON_PRIMARY)).clicked() {
                actions.push(RowAction::Resume(todo.id.clone()));
            }
            clock(ui, saved, colors::TIMER_SAVED);
        }
        TimerControls::Idle => {
            if ui.add(styles::filled_button("Start", colors::BUTTON_PRIMARY)).clicked() {
                actions.push(RowAction::Start(todo.id.clone()));
            }
        }
    }
}

fn clock(ui: &mut egui::Ui, seconds: u64, color: egui::Color32) {
    ui.colored_label(color, egui::RichText::new(format_duration(seconds)).monospace().strong());
}

fn perform(state: &mut AppState, action: RowAction) {
    let result = match &action {
        RowAction::Toggle(id) => state.toggle_todo(id),
        RowAction::Delete(id) => state.delete_todo(id),
        RowAction::Start(id) => state.start_timer(id),
        RowAction::Resume(id) => state.resume_timer(id),
        RowAction::Stop(id) => state.stop_timer(id),
    };
    if let Err(e) = result {
        tracing::warn!("[Client] {:?} not sent: {}", action, e);
    }
}

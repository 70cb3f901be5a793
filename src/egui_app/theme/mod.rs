//! Theme Module
//!
//! Color scheme and frame builders for the todo board.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::todo_row_frame(todo.completed).show(ui, |ui| {
//!     ui.colored_label(colors::TEXT_DARK, &todo.text);
//! });
//! ```

pub mod colors;
pub mod styles;

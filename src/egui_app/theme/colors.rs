//! Color Constants for the Todo Board
//!
//! Warm brown/tan palette. Dark chrome around a light list area.

use eframe::egui::Color32;

/// Window and panel background - Deep brown
pub const BG_DARK: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Top bar background - Dark brown
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x3E, 0x2A, 0x24);

/// Card holding the input and the list - Off-white
pub const BOARD_BG: Color32 = Color32::from_rgb(0xF7, 0xF2, 0xEC);

/// Todo row background
pub const ROW_BG: Color32 = Color32::from_rgb(0xEA, 0xDB, 0xC8);

/// Completed todo row background
pub const ROW_DONE_BG: Color32 = Color32::from_rgb(0xE0, 0xD6, 0xCA);

/// Row border
pub const ROW_BORDER: Color32 = Color32::from_rgb(0xC7, 0xB2, 0x9A);

/// Input bar background - Light tan
pub const INPUT_BAR_BG: Color32 = Color32::from_rgb(0xE6, 0xD7, 0xC7);

/// Input bar border - Muted tan
pub const INPUT_BAR_BORDER: Color32 = Color32::from_rgb(0xC3, 0xA9, 0x90);

/// Hovered widget background
pub const HOVER: Color32 = Color32::from_rgb(0x5C, 0x3A, 0x2C);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF0, 0xE0, 0xD6);

/// Text on light backgrounds
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Muted text (completed todos, empty state)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x8B, 0x7B, 0x6B);

/// Connected indicator - Green
pub const STATUS_ONLINE: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Connecting indicator - Orange
pub const STATUS_CONNECTING: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);

/// Disconnected indicator - Red
pub const STATUS_OFFLINE: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Running clock
pub const TIMER_RUNNING: Color32 = Color32::from_rgb(0x2E, 0x7D, 0x32);

/// Paused or saved clock
pub const TIMER_SAVED: Color32 = Color32::from_rgb(0x6D, 0x4B, 0x3D);

/// Primary button background
pub const BUTTON_PRIMARY: Color32 = Color32::from_rgb(0x5C, 0x3A, 0x2C);

/// Destructive button background
pub const BUTTON_DANGER: Color32 = Color32::from_rgb(0xB7, 0x4B, 0x4B);

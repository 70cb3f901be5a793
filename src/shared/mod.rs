//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the server and the desktop client. These types travel as JSON over the
//! WebSocket channel.
//!
//! # Overview
//!
//! The shared module provides platform-agnostic types that can be used
//! in both server and client code:
//!
//! - **`todo`** - The `Todo` record and its stopwatch transitions
//! - **`event`** - Named socket events (`ClientEvent`, `ServerEvent`)
//! - **`time`** - Clock and duration formatting helpers
//! - **`error`** - Errors shared by both sides
//! - **`config`** - Connection configuration and URL rules

/// Todo record and stopwatch transitions
pub mod todo;

/// Socket event protocol
pub mod event;

/// Clock and duration formatting
pub mod time;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use todo::{elapsed_seconds, Todo};
pub use event::{ClientEvent, ServerEvent, TimerStarted, TimerStopped};
pub use time::{format_duration, now_millis};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};

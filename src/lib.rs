//! xftodo - Main Library
//!
//! xftodo is a real-time todo list with per-item timers. A single Axum
//! server holds the list and talks to clients over a WebSocket using a small
//! JSON event protocol; a native egui client renders the list and its
//! running clocks.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between client and server
//!   - The `Todo` record and its timer transitions
//!   - Client and server event envelopes
//!   - Time formatting, configuration helpers, error types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum server with the `/ws` channel and static file hosting
//!   - SQLite or in-memory todo store
//!   - Optional relay of updates to every connected client
//!
//! - **`egui_app`** - Native desktop client (egui/eframe)
//!   - Background WebSocket connection with automatic reconnect
//!   - Todo list view with live timers
//!
//! # Feature Flags
//!
//! - **`ssr`** - Enables the backend modules (on by default)
//!
//! # Usage
//!
//! ```rust,no_run
//! use xftodo::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() {
//! let app = create_app(&ServerConfig::from_env()).await;
//! // Use app with axum::serve
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;

//! egui Native Desktop App Module
//!
//! This module provides the native desktop client for the todo server.
//!
//! # Architecture
//!
//! - **`config`** - Server URL from `client.toml` and `CLIENT_API_URL`
//! - **`socket_client`** - Background WebSocket connection with reconnect
//! - **`state`** - `AppState` and the `TodoBoard` mirror
//! - **`views`** - Top bar and todo list rendering
//! - **`theme`** - Colors and frame builders
//! - **`main`** - Main application entry point (binary)
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs           - Module exports and documentation
//! ├── main.rs          - Main application entry point
//! ├── config.rs        - Configuration management
//! ├── socket_client.rs - WebSocket client
//! ├── state/           - Application state and todo mirror
//! ├── views/           - UI rendering
//! └── theme/           - Colors and styles
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the egui app:
//! // cargo run --bin egui_app
//! ```

pub mod config;
pub mod socket_client;
pub mod state;
pub mod views;
pub mod theme;

// Re-export commonly used types
pub use config::Config;
pub use socket_client::{SocketClient, SocketSignal};
pub use state::{AppState, ConnectionStatus, TimerControls, TodoBoard};

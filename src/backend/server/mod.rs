//! Server Module
//!
//! This module contains the code that configures and starts the Axum HTTP
//! server.
//!
//! # Architecture
//!
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`config`** - Environment configuration
//! - **`init`** - Store selection and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs   - Module exports and documentation
//! ├── state.rs - AppState and FromRef implementations
//! ├── config.rs - ServerConfig loading
//! └── init.rs  - Server initialization and app creation
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use xftodo::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() {
//! let config = ServerConfig::from_env();
//! let app = create_app(&config).await;
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use state::AppState;
pub use config::ServerConfig;
pub use init::{create_app, shutdown_signal};

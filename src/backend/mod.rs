//! Backend Module
//!
//! This module contains all server-side code for the xftodo application.
//! It provides an Axum HTTP server that speaks a small JSON event protocol
//! over a WebSocket at `/ws` and serves the frontend's static files.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Router assembly (`/ws`, `/health`, static files)
//! - **`realtime`** - WebSocket connection handling and the cross-client relay
//! - **`todos`** - One handler per client event
//! - **`store`** - Todo persistence (SQLite or in-memory)
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs     - Module exports and documentation
//! ├── server/    - Server initialization and state
//! ├── routes/    - Route configuration
//! ├── realtime/  - WebSocket sessions and relay
//! ├── todos/     - Event handlers
//! ├── store/     - Persistence
//! └── error/     - Error types
//! ```
//!
//! # Request Flow
//!
//! Each text frame received on a socket is decoded into a
//! [`ClientEvent`](crate::shared::ClientEvent), dispatched to the matching
//! handler in [`todos`], and the resulting
//! [`ServerEvent`](crate::shared::ServerEvent) (if any) is written back to the
//! same socket. Frames that fail to decode are logged and ignored; the
//! connection stays open.
//!
//! # Example
//!
//! ```rust,no_run
//! use xftodo::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() {
//! let app = create_app(&ServerConfig::default()).await;
//! // Use app with axum::serve
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// WebSocket sessions and relay
pub mod realtime;

/// Todo event handlers
pub mod todos;

/// Todo persistence
pub mod store;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::BackendError;
pub use realtime::{broadcast_event, TodoEventBroadcast};
pub use server::create_app;
pub use store::TodoStore;

//! Real-time Module
//!
//! This module carries todo events over WebSockets:
//!
//! - **`socket`** - WebSocket upgrade and per-connection event loop
//! - **`broadcast`** - Optional relay of mutations to other connections
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs       - Module exports and documentation
//! ├── broadcast.rs - Relay channel between connections
//! └── socket.rs    - WebSocket handler
//! ```
//!
//! # Delivery
//!
//! Every response goes to the connection that sent the request. When the
//! server runs with `BROADCAST_UPDATES=true`, mutation responses are also
//! relayed to every other connection; `todos-list` never is.

/// Relay channel between connections
pub mod broadcast;

/// WebSocket handler
pub mod socket;

// Re-export commonly used types and functions
pub use broadcast::{broadcast_event, RelayedEvent, TodoEventBroadcast};
pub use socket::handle_socket_upgrade;

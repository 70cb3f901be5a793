//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports and documentation
//! ├── router.rs     - Main router creation
//! └── api_routes.rs - Plain HTTP endpoints
//! ```
//!
//! # Routes
//!
//! - `GET /ws` - WebSocket channel carrying todo events
//! - `GET /health` - Liveness probe
//! - everything else - static frontend files, `index.html` fallback

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;

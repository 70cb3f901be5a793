//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//!
//! # Architecture
//!
//! ```text
//! error/
//! ├── mod.rs   - Module exports and documentation
//! └── types.rs - Error type definitions
//! ```
//!
//! # Error Types
//!
//! - `Store` - Query or connection failures from `sqlx`
//! - `Migration` - Schema migration failures
//! - `InvalidRecord` - Stored rows that cannot be decoded into a todo
//! - `Shared` - Errors from the shared module (malformed socket frames)
//!
//! # Reporting
//!
//! Handlers return `Result<_, BackendError>` and propagate with `?`. The
//! socket loop is the only place that inspects an error: it logs it and
//! drops it, so clients never see failures.

/// Error type definitions
pub mod types;

// Re-export commonly used types
pub use types::BackendError;

//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Store fixtures for both backends
//! - A real server bound to an ephemeral port, plus a socket client
//! - Custom assertion macros

pub mod assertions;
#[cfg(feature = "ssr")]
pub mod server;

pub use assertions::*;

//! Shared Error Types
//!
//! This module defines error types that are shared between the server and the
//! desktop client.
//!
//! # Error Categories
//!
//! - `SerializationError` - JSON envelope encoding/decoding failures
//! - `ValidationError` - Data validation failures
//! - `ChannelClosed` - The socket worker is gone and cannot take more events
//!
//! # Usage
//!
//! ```rust
//! use xftodo::shared::error::SharedError;
//!
//! let error = SharedError::validation("text", "Todo text cannot be empty");
//! ```
use thiserror::Error;

/// Shared error types that can occur in both client and server
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// The receiving side of a channel has been dropped
    #[error("Channel closed: {message}")]
    ChannelClosed {
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new channel-closed error
    pub fn channel_closed(message: impl Into<String>) -> Self {
        Self::ChannelClosed {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

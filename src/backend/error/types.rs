/**
 * Backend Error Types
 *
 * This module defines error types specific to the todo server.
 *
 * # Error Categories
 *
 * ## Store Errors
 *
 * Store errors occur when the document store cannot be reached or a query
 * fails. They are reported by `sqlx` and wrapped unchanged.
 *
 * ## Record Errors
 *
 * Record errors occur when a stored row cannot be turned back into a `Todo`,
 * for example a negative accumulated time.
 *
 * ## Protocol Errors
 *
 * Protocol errors occur when a socket frame is not a valid event envelope.
 *
 * None of these errors ever reach a client. The socket loop logs them and
 * carries on with the next frame.
 */

use thiserror::Error;
use crate::shared::SharedError;

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Query or connection failure in the SQL store
    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),

    /// Schema migration failure
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored row does not describe a valid todo
    #[error("Invalid record {id}: {message}")]
    InvalidRecord {
        /// Id of the offending record
        id: String,
        /// Human-readable error message
        message: String,
    },

    /// Shared error (malformed envelope, validation)
    #[error(transparent)]
    Shared(#[from] SharedError),
}

impl BackendError {
    /// Create a new invalid-record error
    pub fn invalid_record(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Whether the error comes from the store rather than from client input
    pub fn is_store_failure(&self) -> bool {
        matches!(
            self,
            Self::Store(_) | Self::Migration(_) | Self::InvalidRecord { .. }
        )
    }
}

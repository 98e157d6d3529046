//! Error types for index operations.
//!
//! Aggregation and inference never fail on well-formed terms (every object
//! decodes to something, worst case text); only backend connectivity,
//! lifecycle, and bulk-write operations are fallible.

use thiserror::Error;

/// Errors raised by the index side of the pipeline.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Backend unreachable, or the liveness check failed.
    #[error("backend unreachable: {message}")]
    Connectivity { message: String },

    /// Index existence check, delete, or create failed.
    #[error("index lifecycle error: {message}")]
    Lifecycle { message: String },

    /// Batched document write failed.
    #[error("bulk write failed: {message}")]
    BulkWrite { message: String },

    /// Backend returned a response the client could not interpret.
    #[error("invalid backend response: {message}")]
    InvalidResponse { message: String },
}

impl IndexError {
    /// Create a connectivity error
    pub fn connectivity(message: impl Into<String>) -> Self {
        Self::Connectivity {
            message: message.into(),
        }
    }

    /// Create a lifecycle error
    pub fn lifecycle(message: impl Into<String>) -> Self {
        Self::Lifecycle {
            message: message.into(),
        }
    }

    /// Create a bulk-write error
    pub fn bulk_write(message: impl Into<String>) -> Self {
        Self::BulkWrite {
            message: message.into(),
        }
    }

    /// Create an invalid-response error
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }
}

/// Result type alias for index operations.
pub type Result<T> = std::result::Result<T, IndexError>;

//! Error types for rindex
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Tokenization is total and removing an unknown document is not a failure,
//! so almost every error originates in the backing store.

use std::io;
use thiserror::Error;

/// Result type alias for rindex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for rindex
#[derive(Debug, Error)]
pub enum Error {
    /// The store could not be reached (connection refused, timed out, closed)
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// The store was reached but failed or rejected the operation
    #[error("Store error: {0}")]
    StoreError(String),

    /// Configuration could not be parsed or failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error (reading configuration files)
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

impl Error {
    /// Create a `StoreUnavailable` error
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Error::StoreUnavailable(msg.into())
    }

    /// Create a `StoreError` error
    pub fn store(msg: impl Into<String>) -> Self {
        Error::StoreError(msg.into())
    }

    /// Create an `InvalidConfig` error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Error::InvalidConfig(msg.into())
    }

    /// True for failures reported by (or on the way to) the backing store
    pub fn is_store_error(&self) -> bool {
        matches!(self, Error::StoreUnavailable(_) | Error::StoreError(_))
    }
}

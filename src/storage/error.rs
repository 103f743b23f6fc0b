//! Error types for the storage layer

use std::fmt;
use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage error types
///
/// A failed write is fatal to the run; there is no retry policy.
#[derive(Error, Debug)]
pub enum StorageError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error (bad location, disabled backend)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Storage backend unreachable
    #[error("Connection error: {0}")]
    Connection(String),

    /// Write to the backend failed
    #[error("Write error: {0}")]
    Write(String),

    /// Read from the backend failed
    #[error("Read error: {0}")]
    Read(String),
}

impl StorageError {
    /// Create a configuration error
    pub fn configuration<E: fmt::Display>(msg: E) -> Self {
        Self::Configuration(msg.to_string())
    }

    /// Create a connection error
    pub fn connection<E: fmt::Display>(msg: E) -> Self {
        Self::Connection(msg.to_string())
    }

    /// Create a write error
    pub fn write<E: fmt::Display>(msg: E) -> Self {
        Self::Write(msg.to_string())
    }

    /// Create a read error
    pub fn read<E: fmt::Display>(msg: E) -> Self {
        Self::Read(msg.to_string())
    }
}

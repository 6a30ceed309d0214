//! Error types for storage operations

use thiserror::Error;

/// Errors that can occur while reading or writing persisted data
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding/decoding error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Write would grow the store beyond its quota
    #[error("Storage quota exceeded: {needed} bytes (quota {quota} bytes)")]
    QuotaExceeded { needed: u64, quota: u64 },

    /// Document id is not one this store could have issued
    #[error("Invalid document id: {0}")]
    InvalidId(String),

    /// Backend cannot be used at all (not configured, no directory)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

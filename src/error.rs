//! Error types for serp-cards.
//!
//! This module defines the error types returned by parsing and batch
//! operations. The parse entry points themselves never surface these; they
//! log and degrade instead. The batch layer does surface them, so a caller
//! can tell an unusable input directory from an ordinary empty run.

use std::path::PathBuf;

/// Error type for parsing and batch operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A filesystem operation on a snapshot or artifact failed.
    #[error("{}: {source}", path.display())]
    Io {
        /// The path the operation was addressed to.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A backslash escape inside an obfuscated script literal was invalid.
    #[error("invalid string escape: {0}")]
    Escape(String),

    /// Serializing a parse result to JSON failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for parsing and batch operations.
pub type Result<T> = std::result::Result<T, Error>;

//! # Store Errors
//!
//! Error types for the flat-file store collaborator.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while reading or writing the store file
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying filesystem failure
    #[error("store I/O error at '{path}': {source}")]
    Io {
        /// Store file path
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File contents are not valid JSON
    #[error("store file '{path}' is not valid JSON: {reason}")]
    MalformedFile {
        /// Store file path
        path: String,
        /// Parser diagnostic
        reason: String,
    },

    /// File parsed but the top level is not a list of objects
    #[error("store file '{path}' must contain a JSON array of objects")]
    NotAList {
        /// Store file path
        path: String,
    },
}

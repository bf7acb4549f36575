//! # CLI Errors
//!
//! Top-level error type wrapping the collaborator errors a command can hit.

use thiserror::Error;

use crate::directory::DirectoryError;
use crate::store::StoreError;
use crate::validation::ValidationError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced to the terminal by `cli::run`
#[derive(Debug, Error)]
pub enum CliError {
    /// Store file could not be read or written
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A record or field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Directory rejected the operation
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// Operation log could not be written
    #[error("operation log error: {0}")]
    OperationLog(#[from] std::io::Error),
}

//! Observability for custodb
//!
//! # Principles
//!
//! 1. Observability is read-only: no side effects on record state
//! 2. Structured logging (JSON lines), deterministic field ordering
//! 3. The operation log is append-only and flushed synchronously

mod logger;
mod oplog;

pub use logger::{Logger, Severity};
pub use oplog::{OperationEntry, OperationLog};

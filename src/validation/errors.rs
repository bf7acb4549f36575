//! # Validation Errors
//!
//! The single error kind of the record core. Every validator, setter and
//! constructor that rejects a value raises a `ValidationError` synchronously;
//! the codec surfaces its structural problems (missing keys, wrong JSON types,
//! malformed dates) as the same kind so callers can apply one recovery policy.
//!
//! Routine business outcomes (insufficient points, insufficient credit) are
//! NOT errors; those operations return `bool`.

use thiserror::Error;

/// Result type for validation and decode operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation and decode errors for customer records
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    // ==================
    // Field Validation
    // ==================

    /// Required text value is empty or whitespace-only
    #[error("{field} must not be empty")]
    EmptyValue {
        /// Field name for the message
        field: &'static str,
    },

    /// Trimmed text value is shorter than the minimum
    #[error("{field} must be at least {min} characters (got {actual})")]
    TooShort {
        /// Field name for the message
        field: &'static str,
        /// Minimum trimmed length
        min: usize,
        /// Actual trimmed length
        actual: usize,
    },

    /// Text value does not match the required pattern
    #[error("{field} '{value}' has an invalid format: {reason}")]
    InvalidFormat {
        /// Field name for the message
        field: &'static str,
        /// Offending value
        value: String,
        /// What the pattern requires
        reason: &'static str,
    },

    // ==================
    // Numeric Validation
    // ==================

    /// Number falls outside the permitted range
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        /// Field name for the message
        field: &'static str,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
        /// Offending value
        value: f64,
    },

    /// Point count below zero
    #[error("points must not be negative (got {value})")]
    NegativePoints {
        /// Offending value
        value: i64,
    },

    /// Monetary amount not strictly positive
    #[error("amount must be greater than 0 (got {value})")]
    NonPositiveAmount {
        /// Offending value
        value: f64,
    },

    /// Unknown membership tier name
    #[error("membership tier must be one of Bronze, Silver, Gold (got '{value}')")]
    UnknownTier {
        /// Offending value
        value: String,
    },

    // ==================
    // Decode Structure
    // ==================

    /// Snapshot is missing a required key
    #[error("snapshot is missing required field '{field}'")]
    MissingField {
        /// Missing key
        field: &'static str,
    },

    /// Snapshot value has the wrong JSON type
    #[error("snapshot field '{field}' must be {expected} (got {actual})")]
    TypeMismatch {
        /// Offending key
        field: &'static str,
        /// Expected JSON type
        expected: &'static str,
        /// Actual JSON type
        actual: &'static str,
    },

    /// Registration date string is not `YYYY-MM-DD`
    #[error("registration date '{value}' is not a valid YYYY-MM-DD date")]
    MalformedDate {
        /// Offending value
        value: String,
    },
}

//! custodb - A strict, validated customer record store
//!
//! Three customer variants (standard, loyalty, corporate) with per-field
//! validation, a flat key-value snapshot codec, and round-trip persistence to
//! a JSON text store.

pub mod cli;
pub mod codec;
pub mod directory;
pub mod observability;
pub mod record;
pub mod store;
pub mod validation;

//! Flat-file persistence for customer records
//!
//! The store keeps one JSON array of snapshot maps in a single text file.
//! The codec is its only consumer-facing dependency: the store moves
//! snapshots to and from disk, the codec turns them into records.
//!
//! Loading applies the collection-level skip-and-report policy: a snapshot
//! that fails to decode is recorded as skipped (with its index and error) and
//! the load continues with the remaining entries. Each snapshot decode itself
//! is a single unit that fully succeeds or fully fails.

mod errors;

pub use errors::{StoreError, StoreResult};

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::codec;
use crate::record::{Clock, Customer};
use crate::validation::ValidationError;

/// A snapshot entry that failed to decode during a load.
#[derive(Debug)]
pub struct SkippedEntry {
    /// Position in the stored list
    pub index: usize,
    /// Why the entry was skipped
    pub error: ValidationError,
}

/// Result of loading the store: the records that decoded plus the entries
/// that were skipped.
#[derive(Debug)]
pub struct LoadOutcome {
    /// Successfully decoded records, in stored order
    pub customers: Vec<Customer>,
    /// Entries that failed to decode
    pub skipped: Vec<SkippedEntry>,
}

/// JSON flat-file store for customer snapshots.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Creates a store over the given file path. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the store file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every record from the store.
    ///
    /// A missing file is an empty store. Decode failures do not abort the
    /// load; they are reported in the outcome's `skipped` list.
    pub fn load(&self, clock: &dyn Clock) -> StoreResult<LoadOutcome> {
        let entries = self.read_entries()?;

        let mut customers = Vec::with_capacity(entries.len());
        let mut skipped = Vec::new();

        for (index, entry) in entries.iter().enumerate() {
            match entry.as_object() {
                Some(snapshot) => match codec::decode(snapshot, clock) {
                    Ok(customer) => customers.push(customer),
                    Err(error) => skipped.push(SkippedEntry { index, error }),
                },
                None => skipped.push(SkippedEntry {
                    index,
                    error: ValidationError::TypeMismatch {
                        field: "record",
                        expected: "an object",
                        actual: json_type_name(entry),
                    },
                }),
            }
        }

        Ok(LoadOutcome { customers, skipped })
    }

    /// Rewrites the store with the given records.
    pub fn save_all(&self, customers: &[Customer]) -> StoreResult<()> {
        let snapshots: Vec<Value> = customers
            .iter()
            .map(|c| Value::Object(codec::encode(c)))
            .collect();
        self.write_entries(&snapshots)
    }

    /// Inserts or updates a single record.
    ///
    /// An existing entry with the same email (case-insensitive) is replaced
    /// in place; otherwise the record is appended.
    pub fn upsert(&self, customer: &Customer) -> StoreResult<()> {
        let mut entries = self.read_entries()?;
        let email = customer.profile().email();
        let encoded = Value::Object(codec::encode(customer));

        match entries.iter_mut().find(|e| entry_email_matches(e, email)) {
            Some(existing) => *existing = encoded,
            None => entries.push(encoded),
        }

        self.write_entries(&entries)
    }

    /// Removes the entry with the given email (case-insensitive).
    ///
    /// Returns whether an entry was removed.
    pub fn remove(&self, email: &str) -> StoreResult<bool> {
        let mut entries = self.read_entries()?;
        let before = entries.len();
        entries.retain(|e| !entry_email_matches(e, email));

        if entries.len() == before {
            return Ok(false);
        }
        self.write_entries(&entries)?;
        Ok(true)
    }

    /// Empties the store file.
    pub fn clear(&self) -> StoreResult<()> {
        self.write_entries(&[])
    }

    fn read_entries(&self) -> StoreResult<Vec<Value>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.display().to_string(),
            source,
        })?;

        let value: Value =
            serde_json::from_str(&content).map_err(|e| StoreError::MalformedFile {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        match value {
            Value::Array(entries) => Ok(entries),
            _ => Err(StoreError::NotAList {
                path: self.path.display().to_string(),
            }),
        }
    }

    fn write_entries(&self, entries: &[Value]) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(entries).map_err(|e| {
            StoreError::MalformedFile {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            }
        })?;

        fs::write(&self.path, content).map_err(|source| StoreError::Io {
            path: self.path.display().to_string(),
            source,
        })
    }
}

/// Compares a stored entry's email key against a target, case-insensitively.
fn entry_email_matches(entry: &Value, email: &str) -> bool {
    entry
        .get("email")
        .and_then(Value::as_str)
        .is_some_and(|e| e.eq_ignore_ascii_case(email))
}

/// Returns the JSON type name for skip reports.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

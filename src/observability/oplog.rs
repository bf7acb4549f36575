//! Append-only operation log
//!
//! Every directory mutation (add, update, remove, credit/point movement) can
//! be recorded here: one JSON line per entry, appended and flushed before the
//! call returns. The log file is never rewritten in place; `truncate`
//! exists for operator use only.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One logged operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationEntry {
    /// Unique entry id
    pub id: Uuid,
    /// When the operation happened
    pub timestamp: DateTime<Utc>,
    /// Operation name, e.g. `CUSTOMER_ADDED`
    pub operation: String,
    /// Email of the customer involved, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Free-form detail
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub detail: String,
}

impl OperationEntry {
    fn new(operation: &str, email: Option<&str>, detail: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            operation: operation.to_string(),
            email: email.map(str::to_string),
            detail: detail.to_string(),
        }
    }
}

/// Append-only operation log backed by a JSON-lines file.
pub struct OperationLog {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl OperationLog {
    /// Opens (or creates) the log file for appending.
    pub fn open(path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    /// Returns the log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one entry and flushes it.
    pub fn record(
        &self,
        operation: &str,
        email: Option<&str>,
        detail: &str,
    ) -> std::io::Result<()> {
        let entry = OperationEntry::new(operation, email, detail);
        let line = serde_json::to_string(&entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        let mut writer = self.writer.lock().expect("operation log lock poisoned");
        writeln!(writer, "{}", line)?;
        writer.flush()
    }

    /// Reads the last `count` entries from the log file.
    ///
    /// Lines that fail to parse are skipped; a truncated trailing line from a
    /// crashed writer must not hide the rest of the history.
    pub fn read_last(&self, count: usize) -> std::io::Result<Vec<OperationEntry>> {
        // Flush pending writes so the read sees them.
        self.writer
            .lock()
            .expect("operation log lock poisoned")
            .flush()?;

        let file = File::open(&self.path)?;
        let entries: Vec<OperationEntry> = BufReader::new(file)
            .lines()
            .filter_map(|line| line.ok())
            .filter_map(|line| serde_json::from_str(&line).ok())
            .collect();

        let start = entries.len().saturating_sub(count);
        Ok(entries[start..].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_log(dir: &TempDir) -> OperationLog {
        OperationLog::open(dir.path().join("custodb.log")).unwrap()
    }

    #[test]
    fn test_record_and_read_back() {
        let dir = TempDir::new().unwrap();
        let log = open_log(&dir);

        log.record("CUSTOMER_ADDED", Some("juan@email.com"), "standard")
            .unwrap();
        log.record("POINTS_ADDED", Some("ana@email.com"), "500").unwrap();

        let entries = log.read_last(10).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, "CUSTOMER_ADDED");
        assert_eq!(entries[0].email.as_deref(), Some("juan@email.com"));
        assert_eq!(entries[1].detail, "500");
        assert_ne!(entries[0].id, entries[1].id);
    }

    #[test]
    fn test_read_last_limits_entries() {
        let dir = TempDir::new().unwrap();
        let log = open_log(&dir);

        for i in 0..5 {
            log.record("OP", None, &i.to_string()).unwrap();
        }

        let entries = log.read_last(2).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].detail, "3");
        assert_eq!(entries[1].detail, "4");
    }

    #[test]
    fn test_reopen_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custodb.log");

        OperationLog::open(&path)
            .unwrap()
            .record("FIRST", None, "")
            .unwrap();
        let log = OperationLog::open(&path).unwrap();
        log.record("SECOND", None, "").unwrap();

        let entries = log.read_last(10).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, "FIRST");
        assert_eq!(entries[1].operation, "SECOND");
    }

    #[test]
    fn test_corrupt_line_is_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custodb.log");

        let log = OperationLog::open(&path).unwrap();
        log.record("GOOD", None, "").unwrap();
        drop(log);

        use std::io::Write as _;
        let mut file = OpenOptions::new().append(true).open(&path).unwrap();
        writeln!(file, "{{not json").unwrap();

        let log = OperationLog::open(&path).unwrap();
        let entries = log.read_last(10).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, "GOOD");
    }
}

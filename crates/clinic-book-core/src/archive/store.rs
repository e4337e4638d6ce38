//! Durable partition storage for archived appointments.

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::warn;
use thiserror::Error;

use super::PartitionKey;
use crate::models::ArchivedAppointment;

/// Errors from reading or writing archive partitions.
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("archive store rejected the write: {0}")]
    Rejected(String),
}

pub type ArchiveResult<T> = Result<T, ArchiveError>;

/// Storage seam for archive partitions.
///
/// Appends accumulate: writing the same records to a partition twice stores
/// two copies of each. The rollover engine relies on that append-log shape
/// to make repeated passes safe.
pub trait ArchiveStore {
    /// Append `records` to the partition for `key`.
    fn append_batch(
        &mut self,
        key: &PartitionKey,
        records: &[ArchivedAppointment],
    ) -> ArchiveResult<()>;

    /// All records currently held by the partition for `key`; empty if the
    /// partition has never been written.
    fn read_batch(&self, key: &PartitionKey) -> ArchiveResult<Vec<ArchivedAppointment>>;
}

/// File-backed store: one JSON-lines file per partition under `root`.
pub struct FileArchiveStore {
    root: PathBuf,
}

impl FileArchiveStore {
    /// Store rooted at `root`; the directory is created on first append.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn partition_path(&self, key: &PartitionKey) -> PathBuf {
        self.root.join(key.file_name())
    }
}

impl ArchiveStore for FileArchiveStore {
    fn append_batch(
        &mut self,
        key: &PartitionKey,
        records: &[ArchivedAppointment],
    ) -> ArchiveResult<()> {
        fs::create_dir_all(&self.root)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.partition_path(key))?;
        for record in records {
            let line = serde_json::to_string(record)?;
            writeln!(file, "{line}")?;
        }
        Ok(())
    }

    fn read_batch(&self, key: &PartitionKey) -> ArchiveResult<Vec<ArchivedAppointment>> {
        let path = self.partition_path(key);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(fs::File::open(path)?);
        let mut records = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(&line) {
                Ok(record) => records.push(record),
                // A damaged line drops one record, not the partition.
                Err(err) => warn!("skipping unreadable record in partition {key}: {err}"),
            }
        }
        Ok(records)
    }
}

/// In-memory store for tests.
///
/// Mirrors the file store's append semantics; `failing()` builds one that
/// rejects every append so flush-failure handling can be exercised.
#[derive(Debug, Default)]
pub struct MemoryArchiveStore {
    partitions: HashMap<PartitionKey, Vec<ArchivedAppointment>>,
    fail_appends: bool,
    appends: usize,
}

impl MemoryArchiveStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_appends: true,
            ..Self::default()
        }
    }

    /// Number of successful append calls.
    pub fn append_count(&self) -> usize {
        self.appends
    }

    pub fn partition_keys(&self) -> Vec<PartitionKey> {
        self.partitions.keys().copied().collect()
    }
}

impl ArchiveStore for MemoryArchiveStore {
    fn append_batch(
        &mut self,
        key: &PartitionKey,
        records: &[ArchivedAppointment],
    ) -> ArchiveResult<()> {
        if self.fail_appends {
            return Err(ArchiveError::Rejected("store configured to fail".into()));
        }
        self.appends += 1;
        self.partitions
            .entry(*key)
            .or_default()
            .extend_from_slice(records);
        Ok(())
    }

    fn read_batch(&self, key: &PartitionKey) -> ArchiveResult<Vec<ArchivedAppointment>> {
        Ok(self.partitions.get(key).cloned().unwrap_or_default())
    }
}

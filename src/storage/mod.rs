pub mod csv_backend;

use crate::{errors::TrackerError, ledger::Record};

pub type Result<T> = std::result::Result<T, TrackerError>;

/// Append-only persistence for validated records.
pub trait StorageBackend {
    /// Prepares the backing store so that `append` and `load` can succeed.
    fn ensure_ready(&self) -> Result<()>;
    fn append(&self, record: &Record) -> Result<()>;
    fn load(&self) -> Result<LoadReport>;
}

/// Records read back from storage plus the rows that had to be dropped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub records: Vec<Record>,
    pub skipped: Vec<SkippedRow>,
}

/// A stored row that no longer passes validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number in the backing file, header included.
    pub line: u64,
    pub reason: String,
}

pub use csv_backend::{CsvStorage, CSV_HEADER};

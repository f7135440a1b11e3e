use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
};

use rust_decimal::Decimal;

use crate::ledger::{Category, Record, RecordDraft, DATE_FORMAT};

use super::{LoadReport, Result, SkippedRow, StorageBackend};

/// Column names written as the first line of every data file.
pub const CSV_HEADER: [&str; 5] = ["date", "type", "amount", "category", "description"];

const MIN_COLUMNS: usize = 3;

/// Flat CSV file holding one record per line.
#[derive(Debug, Clone)]
pub struct CsvStorage {
    path: PathBuf,
}

impl CsvStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the file with its header row when it does not exist yet.
    pub fn ensure_file(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(CSV_HEADER)?;
        writer.flush()?;
        tracing::info!(path = %self.path.display(), "created data file");
        Ok(())
    }

    fn is_empty_file(&self) -> Result<bool> {
        Ok(fs::metadata(&self.path)?.len() == 0)
    }
}

impl StorageBackend for CsvStorage {
    fn ensure_ready(&self) -> Result<()> {
        self.ensure_file()
    }

    fn append(&self, record: &Record) -> Result<()> {
        self.ensure_file()?;
        let write_header = self.is_empty_file()?;
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if write_header {
            writer.write_record(CSV_HEADER)?;
        }
        writer.write_record(row_fields(record))?;
        writer.flush()?;
        tracing::debug!(
            date = %record.date(),
            kind = %record.kind(),
            amount = %record.amount(),
            "appended record"
        );
        Ok(())
    }

    fn load(&self) -> Result<LoadReport> {
        if !self.path.exists() {
            return Ok(LoadReport::default());
        }
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)?;

        let mut report = LoadReport::default();
        for (index, result) in reader.records().enumerate() {
            let fallback_line = index as u64 + 2;
            let row = match result {
                Ok(row) => row,
                Err(err) if err.is_io_error() => return Err(err.into()),
                Err(err) => {
                    skip(&mut report, fallback_line, err.to_string());
                    continue;
                }
            };
            let line = row
                .position()
                .map(|pos| pos.line())
                .unwrap_or(fallback_line);
            if row.len() < MIN_COLUMNS {
                skip(
                    &mut report,
                    line,
                    format!("expected at least {MIN_COLUMNS} columns, found {}", row.len()),
                );
                continue;
            }
            let draft = RecordDraft {
                date: row.get(0).unwrap_or_default().to_string(),
                kind: row.get(1).unwrap_or_default().to_string(),
                amount: row.get(2).unwrap_or_default().to_string(),
                category: row
                    .get(3)
                    .filter(|value| !value.trim().is_empty())
                    .unwrap_or(Category::Other.as_str())
                    .to_string(),
                description: row.get(4).unwrap_or_default().to_string(),
            };
            match draft.validate() {
                Ok(record) => report.records.push(record),
                Err(err) => skip(&mut report, line, err.to_string()),
            }
        }
        tracing::debug!(
            loaded = report.records.len(),
            skipped = report.skipped.len(),
            "loaded data file"
        );
        Ok(report)
    }
}

fn skip(report: &mut LoadReport, line: u64, reason: String) {
    tracing::warn!(line, %reason, "skipping malformed row");
    report.skipped.push(SkippedRow { line, reason });
}

fn row_fields(record: &Record) -> [String; 5] {
    [
        record.date().format(DATE_FORMAT).to_string(),
        record.kind().to_string(),
        storage_amount(record.amount()),
        record.category().to_string(),
        record.description().to_string(),
    ]
}

/// Writes at least two decimal places, never fewer than the value carries.
fn storage_amount(amount: Decimal) -> String {
    let mut value = amount;
    if value.scale() < 2 {
        value.rescale(2);
    }
    value.to_string()
}

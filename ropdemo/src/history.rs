//! The CSV dataset adapter.

use rop_core::{RawSalesRecord, RecordError, SalesRecord, ports::SalesHistorySource};
use std::{fs::File, io::Read, path::PathBuf};
use thiserror::Error;

/// A CSV-backed [`SalesHistorySource`].
///
/// Expects a header row naming at least `date`, `price` and `demand`;
/// rows are validated strictly and the first bad row aborts the load.
#[derive(Debug, Clone)]
pub struct CsvSalesHistory {
    path: PathBuf,
}

impl CsvSalesHistory {
    /// Points the adapter at a CSV file. No I/O happens until `load`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SalesHistorySource for CsvSalesHistory {
    type Error = HistoryError;

    fn load(&self) -> Result<Vec<SalesRecord>, Self::Error> {
        let file = File::open(&self.path).map_err(|source| HistoryError::Open {
            path: self.path.clone(),
            source,
        })?;
        let records = read_records(file)?;
        tracing::info!(
            records = records.len(),
            path = %self.path.display(),
            "loaded historical dataset"
        );
        Ok(records)
    }
}

/// Reads and validates every row from a CSV stream.
///
/// Row numbers in errors are 1-based file lines, counting the header.
pub(crate) fn read_records<R: Read>(reader: R) -> Result<Vec<SalesRecord>, HistoryError> {
    let mut csv = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for (index, row) in csv.deserialize::<RawSalesRecord>().enumerate() {
        let line = index + 2;
        let raw = row.map_err(|source| HistoryError::Row { line, source })?;
        let record =
            SalesRecord::try_from(raw).map_err(|source| HistoryError::Record { line, source })?;
        records.push(record);
    }
    Ok(records)
}

/// The ways in which the dataset load can fail. All of them are fatal to
/// startup.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Error when the file cannot be opened
    #[error("failed to open {path}")]
    Open {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// Error when a row cannot be deserialized against the schema
    #[error("malformed row at line {line}")]
    Row {
        /// 1-based file line of the offending row
        line: usize,
        /// The underlying CSV error
        #[source]
        source: csv::Error,
    },
    /// Error when a row deserializes but fails validation
    #[error("invalid record at line {line}")]
    Record {
        /// 1-based file line of the offending row
        line: usize,
        /// The validation failure
        #[source]
        source: RecordError,
    },
}

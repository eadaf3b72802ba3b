//! Streaming CSV reader producing loosely-typed records
//!
//! The first row of the file defines the column names; every subsequent row
//! becomes a [`Record`] keyed by those names.

use crate::{Error, Record, Result};
use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Streaming CSV reader that yields one record per data row
pub struct CsvReader {
    rows: StringRecordsIntoIter<File>,
    headers: StringRecord,
    records_read: usize,
}

impl CsvReader {
    /// Open a CSV file with a header row.
    ///
    /// Fails with [`Error::NotFound`] when `path` does not exist. Rows with
    /// fewer fields than the header are accepted and simply carry fewer keys.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::NotFound(path.to_path_buf()));
        }

        debug!("Opening CSV file: {:?}", path);
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;
        let headers = reader.headers()?.clone();

        Ok(Self {
            rows: reader.into_records(),
            headers,
            records_read: 0,
        })
    }

    /// Column names from the header row
    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    /// Number of data rows yielded so far
    pub fn records_processed(&self) -> usize {
        self.records_read
    }
}

impl Iterator for CsvReader {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = match self.rows.next()? {
            Ok(row) => row,
            Err(e) => return Some(Err(Error::Csv(e))),
        };

        self.records_read += 1;
        let line = row
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(self.records_read + 1);

        Some(Ok(Record::from_row(&self.headers, &row, line)))
    }
}

/// Load an entire CSV file into memory as an ordered dataset.
///
/// This is a full, non-streaming read; record order matches file order.
pub fn read_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    CsvReader::open(path)?.collect()
}

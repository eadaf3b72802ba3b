//! CSV writer with a fixed column projection
//!
//! The header row is written as soon as the file is opened, so even an empty
//! sample produces a valid CSV file.  Call `close()` when finished — rows are
//! buffered and the last ones may be lost without the final flush.

use crate::{Record, Result};
use std::fs::File;
use std::path::Path;

/// CSV writer that projects records onto a fixed, ordered set of columns
pub struct CsvWriter {
    inner: csv::Writer<File>,
    columns: Vec<String>,
    records_written: usize,
}

impl CsvWriter {
    /// Create or truncate the file at `path` and write the header row.
    pub fn open<P: AsRef<Path>>(path: P, columns: &[&str]) -> Result<Self> {
        let mut inner = csv::Writer::from_path(path)?;
        inner.write_record(columns)?;

        Ok(Self {
            inner,
            columns: columns.iter().map(|c| c.to_string()).collect(),
            records_written: 0,
        })
    }

    /// Write one record projected onto the configured columns.
    ///
    /// Columns the record lacks are written as empty strings.
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        let row: Vec<&str> = self.columns.iter().map(|c| record.get(c)).collect();
        self.inner.write_record(&row)?;
        self.records_written += 1;
        Ok(())
    }

    /// Number of data rows written so far (the header is not counted)
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Flush buffered rows to disk.
    pub fn close(mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read_dataset;
    use std::collections::HashMap;
    use tempfile::NamedTempFile;

    const COLUMNS: [&str; 3] = ["textID", "text", "sentiment"];

    fn record(pairs: &[(&str, &str)]) -> Record {
        let data: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Record::new(data, 0)
    }

    #[test]
    fn test_header_written_for_empty_output() {
        let file = NamedTempFile::new().unwrap();

        let writer = CsvWriter::open(file.path(), &COLUMNS).unwrap();
        assert_eq!(writer.records_written(), 0);
        writer.close().unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, "textID,text,sentiment\n");
    }

    #[test]
    fn test_write_projects_columns_in_order() {
        let file = NamedTempFile::new().unwrap();

        let mut writer = CsvWriter::open(file.path(), &COLUMNS).unwrap();
        writer
            .write_record(&record(&[
                ("sentiment", "positive"),
                ("textID", "1"),
                ("text", "good"),
                ("lang", "en"),
            ]))
            .unwrap();
        assert_eq!(writer.records_written(), 1);
        writer.close().unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, "textID,text,sentiment\n1,good,positive\n");
    }

    #[test]
    fn test_missing_field_written_as_empty() {
        let file = NamedTempFile::new().unwrap();

        let mut writer = CsvWriter::open(file.path(), &COLUMNS).unwrap();
        writer
            .write_record(&record(&[("textID", "1"), ("text", "no label")]))
            .unwrap();
        writer.close().unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, "textID,text,sentiment\n1,no label,\n");
    }

    #[test]
    fn test_values_with_delimiter_round_trip() {
        let file = NamedTempFile::new().unwrap();

        let mut writer = CsvWriter::open(file.path(), &COLUMNS).unwrap();
        writer
            .write_record(&record(&[
                ("textID", "1"),
                ("text", "hello, world\nsecond line"),
                ("sentiment", "neutral"),
            ]))
            .unwrap();
        writer.close().unwrap();

        let records = read_dataset(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("text"), "hello, world\nsecond line");
    }

    #[test]
    fn test_open_truncates_existing_file() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "stale contents\nmore stale\n").unwrap();

        let writer = CsvWriter::open(file.path(), &COLUMNS).unwrap();
        writer.close().unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, "textID,text,sentiment\n");
    }
}

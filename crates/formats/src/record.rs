//! Record data structure for loosely-typed CSV rows

use std::collections::HashMap;

use csv::StringRecord;

/// A single row of tweet data keyed by column name
///
/// Columns absent from the source row are not stored; [`Record::get`]
/// defaults them to the empty string at access time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    data: HashMap<String, String>,
    /// 1-based line number of the row in the source file
    pub source_line: usize,
}

impl Record {
    /// Create a record from an explicit column map
    pub fn new(data: HashMap<String, String>, source_line: usize) -> Self {
        Self { data, source_line }
    }

    /// Build a record by zipping a header row with a data row.
    ///
    /// A row shorter than the header yields a record with fewer keys;
    /// trailing values beyond the header are dropped.
    pub fn from_row(headers: &StringRecord, row: &StringRecord, source_line: usize) -> Self {
        let data = headers
            .iter()
            .zip(row.iter())
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        Self { data, source_line }
    }

    /// Value for `key`, or the empty string when the column is absent
    pub fn get(&self, key: &str) -> &str {
        self.data.get(key).map(String::as_str).unwrap_or("")
    }

    /// Whether the record carries a value for `key`
    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Number of columns present in this record
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the record has no columns at all
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

//! CSV reading and writing for tweet datasets
//!
//! This crate provides a loosely-typed record model for CSV files with a
//! header row, along with a streaming reader and a projection-based writer.

pub mod csv_reader;
pub mod csv_writer;
pub mod error;
pub mod record;

pub use csv_reader::{read_dataset, CsvReader};
pub use csv_writer::CsvWriter;
pub use error::{Error, Result};
pub use record::Record;

//! Error types for CSV reading and writing

use std::path::PathBuf;
use thiserror::Error;

/// Dataset I/O errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Input file '{}' does not exist.", .0.display())]
    NotFound(PathBuf),

    #[error("Input file contains no tweet rows.")]
    EmptyInput,
}

/// Result type alias for dataset operations
pub type Result<T> = std::result::Result<T, Error>;

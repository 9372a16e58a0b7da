//! Data Loading Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors while reading or validating the passenger table
#[derive(Debug, Error)]
pub enum DataError {
    /// Source file could not be opened
    #[error("Failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV or a value that does not parse into its column type
    #[error("Malformed passenger data: {0}")]
    Csv(#[from] csv::Error),

    /// Missing required column
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// Value out of allowed range
    #[error("Record {row}: {field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        row: usize,
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Header present but no passenger rows
    #[error("Passenger table contains no records")]
    Empty,
}

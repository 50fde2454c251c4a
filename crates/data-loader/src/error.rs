//! Error types for the data-loader crate.
//!
//! Only acquiring the table can fail. Once rows are in memory every
//! downstream step is total: malformed rows are dropped by the sanitizer
//! instead of being reported.

use thiserror::Error;

/// Errors that can occur while reading a showtime table
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader rejected the input (bad quoting, invalid UTF-8, ...)
    #[error("CSV error in {file}: {source}")]
    CsvError {
        file: String,
        #[source]
        source: csv::Error,
    },

    /// A column the table cannot do without is absent from the header row
    #[error("Missing column {column} in {file}")]
    MissingColumn { file: String, column: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;

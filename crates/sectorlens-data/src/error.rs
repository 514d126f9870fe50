//! Error types for data ingestion.

use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while reading a raw table.
#[derive(Debug, Error)]
pub enum DataError {
    /// CSV parsing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input had no header row
    #[error("Input is empty: no header row found")]
    EmptyInput,
}

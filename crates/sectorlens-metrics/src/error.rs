//! Error types for the metrics pipeline.

use thiserror::Error;

/// Structural problems with an input table.
///
/// These are the only failures of the pipeline: missing values, unparsable
/// cells and undefined statistics are reported as `None` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The table has no columns at all
    #[error("Table has no sector column")]
    MissingSectorColumn,

    /// The table has a sector column but no year columns
    #[error("Table has no year columns")]
    NoYearColumns,

    /// Two rows carry the same sector label
    #[error("Duplicate sector label: {0}")]
    DuplicateSector(String),

    /// A row does not have one value per year column
    #[error("Row for {sector} has {actual} values, expected {expected}")]
    RowWidthMismatch {
        /// Sector label of the offending row
        sector: String,
        /// Number of year columns
        expected: usize,
        /// Number of values in the row
        actual: usize,
    },
}

/// Invalid pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

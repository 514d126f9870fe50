//! Cell values of a raw table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell as read from the source spreadsheet.
///
/// Text cells are kept verbatim (including placeholder tokens such as `…`);
/// interpreting them is the job of the cleaning pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum Cell {
    /// No value at all.
    #[default]
    Empty,
    /// Free text, possibly a placeholder or a number that failed to parse.
    Text(String),
    /// A numeric value.
    Number(f64),
}

impl Cell {
    /// Build a cell from a field of a text source such as CSV.
    ///
    /// Blank fields become [`Cell::Empty`], fields that parse as a finite
    /// number become [`Cell::Number`], anything else is kept as text.
    pub fn from_field(field: &str) -> Self {
        let trimmed = field.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Number(value),
            _ => Self::Text(trimmed.to_string()),
        }
    }

    /// Whether the cell holds nothing.
    ///
    /// `NaN` numbers count as empty, matching how spreadsheet readers report
    /// blank numeric cells.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(value) => value.is_nan(),
        }
    }

    /// Text content of the cell, if it is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Numeric content of the cell, if it is a number cell.
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(text) => write!(f, "{text}"),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

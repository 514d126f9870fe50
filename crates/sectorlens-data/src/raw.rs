//! The raw, uncleaned sector table.

use crate::cell::Cell;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A table as read from the source, before any cleaning.
///
/// Column 0 holds the sector label, the remaining columns are years. Every
/// row has exactly one cell per header: short rows are padded with
/// [`Cell::Empty`] and cells beyond the last header are discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(from = "RawTableParts")]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

/// Deserialized form of [`RawTable`], shaped through [`RawTable::new`].
#[derive(Deserialize)]
struct RawTableParts {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl From<RawTableParts> for RawTable {
    fn from(parts: RawTableParts) -> Self {
        Self::new(parts.headers, parts.rows)
    }
}

impl RawTable {
    /// Create a raw table from a header row and data rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = headers.len();
        let mut truncated = 0usize;
        let rows = rows
            .into_iter()
            .map(|mut row| {
                if row.len() > width {
                    truncated += 1;
                }
                row.resize(width, Cell::Empty);
                row
            })
            .collect();

        if truncated > 0 {
            warn!(
                rows = truncated,
                width, "discarded cells beyond the last header column"
            );
        }

        Self { headers, rows }
    }

    /// Header labels, sector column first.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Label of the sector column, if the table has any column.
    pub fn sector_header(&self) -> Option<&str> {
        self.headers.first().map(String::as_str)
    }

    /// Labels of the year columns.
    pub fn year_headers(&self) -> &[String] {
        self.headers.get(1..).unwrap_or_default()
    }

    /// Data rows.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of columns, including the sector column.
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pads_short_rows() {
        let table = RawTable::new(
            headers(&["Sector", "2012", "2013"]),
            vec![vec![Cell::from("Tourism"), Cell::Number(1.0)]],
        );

        assert_eq!(table.rows()[0].len(), 3);
        assert_eq!(table.rows()[0][2], Cell::Empty);
    }

    #[test]
    fn test_truncates_long_rows() {
        let table = RawTable::new(
            headers(&["Sector", "2012"]),
            vec![vec![
                Cell::from("Tourism"),
                Cell::Number(1.0),
                Cell::Number(2.0),
            ]],
        );

        assert_eq!(table.rows()[0].len(), 2);
    }

    #[test]
    fn test_header_accessors() {
        let table = RawTable::new(headers(&["Sector", "2012", "2013"]), vec![]);

        assert_eq!(table.sector_header(), Some("Sector"));
        assert_eq!(table.year_headers(), &["2012".to_string(), "2013".to_string()]);
        assert_eq!(table.width(), 3);
        assert!(table.is_empty());
    }

    #[test]
    fn test_no_columns() {
        let table = RawTable::default();

        assert_eq!(table.sector_header(), None);
        assert!(table.year_headers().is_empty());
    }

    #[test]
    fn test_deserialize_normalises_rows() {
        let json = r#"{
            "headers": ["Sector", "2012"],
            "rows": [[], [{"Text": "Tourism"}, {"Number": 1.0}, {"Number": 2.0}]]
        }"#;
        let table: RawTable = serde_json::from_str(json).unwrap();

        assert_eq!(table.rows()[0], vec![Cell::Empty, Cell::Empty]);
        assert_eq!(
            table.rows()[1],
            vec![Cell::from("Tourism"), Cell::Number(1.0)]
        );
    }
}

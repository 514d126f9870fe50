//! CSV ingestion.
//!
//! Spreadsheets are expected to be exported to CSV with the header row first.
//! Rows may have differing lengths; the table is normalised to the header
//! width by [`RawTable::new`].

use crate::cell::Cell;
use crate::error::{DataError, Result};
use crate::raw::RawTable;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

impl RawTable {
    /// Read a raw table from any CSV source.
    ///
    /// # Errors
    /// Returns [`DataError::EmptyInput`] when there is no header row, or a CSV
    /// error when a record cannot be decoded.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = csv_reader.records();

        let headers: Vec<String> = match records.next() {
            Some(record) => record?.iter().map(|h| h.trim().to_string()).collect(),
            None => return Err(DataError::EmptyInput),
        };

        let mut rows = Vec::new();
        for record in records {
            let record = record?;
            rows.push(record.iter().map(Cell::from_field).collect());
        }

        debug!(columns = headers.len(), rows = rows.len(), "read CSV table");

        Ok(Self::new(headers, rows))
    }

    /// Read a raw table from a CSV file on disk.
    ///
    /// # Errors
    /// Returns an IO error when the file cannot be opened, otherwise the same
    /// errors as [`RawTable::from_csv_reader`].
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening CSV input");
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_header_and_rows() {
        let data = "Sector,2012,2013\nTourism,100,150\nMining,…,20\n";
        let table = RawTable::from_csv_reader(data.as_bytes()).unwrap();

        assert_eq!(table.headers(), &["Sector", "2012", "2013"]);
        assert_eq!(table.height(), 2);
        assert_eq!(table.rows()[0][1], Cell::Number(100.0));
        assert_eq!(table.rows()[1][1], Cell::Text("…".to_string()));
    }

    #[test]
    fn test_ragged_rows() {
        let data = "Sector,2012,2013\nTourism,100\n,,\n";
        let table = RawTable::from_csv_reader(data.as_bytes()).unwrap();

        assert_eq!(table.rows()[0], vec![Cell::from("Tourism"), Cell::Number(100.0), Cell::Empty]);
        assert!(table.rows()[1].iter().all(Cell::is_empty));
    }

    #[test]
    fn test_empty_input() {
        let result = RawTable::from_csv_reader("".as_bytes());
        assert!(matches!(result, Err(DataError::EmptyInput)));
    }

    #[test]
    fn test_missing_file() {
        let result = RawTable::from_csv_path("/definitely/not/here.csv");
        assert!(matches!(result, Err(DataError::Io(_))));
    }
}

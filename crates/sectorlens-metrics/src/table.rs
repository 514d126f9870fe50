//! Sector-keyed tables of per-year values.

use crate::config::DEFAULT_PLACEHOLDER;
use crate::error::SchemaError;
use sectorlens_data::{Cell, RawTable};
use serde::Serialize;
use std::collections::HashSet;
use std::ops::Deref;

/// Header used for the sector column when a table is written back out.
pub const SECTOR_HEADER: &str = "Sector";

/// One sector and its per-year values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorRow {
    /// Sector label (unique within a table).
    pub sector: String,

    /// One value per year column; `None` where the value is missing.
    pub values: Vec<Option<f64>>,
}

impl SectorRow {
    /// Create a new sector row.
    pub fn new(sector: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            sector: sector.into(),
            values,
        }
    }

    /// Non-missing values in year order.
    pub fn present(&self) -> Vec<f64> {
        self.values.iter().flatten().copied().collect()
    }
}

/// Ordered years × uniquely labelled sectors.
///
/// Rows keep the order they had in the source. Every row has exactly one
/// value per year column.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct SectorTable {
    years: Vec<String>,
    rows: Vec<SectorRow>,
}

impl SectorTable {
    /// Create a table, checking row widths and sector uniqueness.
    ///
    /// # Errors
    /// Returns [`SchemaError::RowWidthMismatch`] for a row with the wrong
    /// number of values and [`SchemaError::DuplicateSector`] for a repeated
    /// sector label.
    pub fn new(years: Vec<String>, rows: Vec<SectorRow>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::with_capacity(rows.len());
        for row in &rows {
            if row.values.len() != years.len() {
                return Err(SchemaError::RowWidthMismatch {
                    sector: row.sector.clone(),
                    expected: years.len(),
                    actual: row.values.len(),
                });
            }
            if !seen.insert(row.sector.as_str()) {
                return Err(SchemaError::DuplicateSector(row.sector.clone()));
            }
        }
        Ok(Self { years, rows })
    }

    /// Assemble a table whose rows are already known to be valid.
    pub(crate) const fn from_parts(years: Vec<String>, rows: Vec<SectorRow>) -> Self {
        Self { years, rows }
    }

    /// Year labels in column order.
    pub fn years(&self) -> &[String] {
        &self.years
    }

    /// Rows in source order.
    pub fn rows(&self) -> &[SectorRow] {
        &self.rows
    }

    /// Sector labels in source order.
    pub fn sectors(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.sector.as_str())
    }

    /// Values of one sector.
    pub fn get(&self, sector: &str) -> Option<&[Option<f64>]> {
        self.rows
            .iter()
            .find(|row| row.sector == sector)
            .map(|row| row.values.as_slice())
    }

    /// Whether the table contains `sector`.
    pub fn contains(&self, sector: &str) -> bool {
        self.get(sector).is_some()
    }

    /// Number of sectors.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no sectors.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of year columns.
    pub fn year_count(&self) -> usize {
        self.years.len()
    }
}

/// Output of cleaning: numeric per-year values keyed by sector.
///
/// Every sector has at least one value. Every year column had at least one
/// non-empty cell in the raw table, but may hold only missing values when
/// that year was reported as placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(transparent)]
pub struct CleanTable(SectorTable);

impl CleanTable {
    /// Build a clean table directly from rows.
    ///
    /// # Errors
    /// Same as [`SectorTable::new`].
    pub fn from_rows(years: Vec<String>, rows: Vec<SectorRow>) -> Result<Self, SchemaError> {
        SectorTable::new(years, rows).map(Self)
    }

    /// Express the table as a raw table again, with a `Sector` header.
    ///
    /// Missing values are written as the default placeholder so that a year
    /// without any value survives. Cleaning the result yields this table
    /// unchanged, whatever placeholders the cleaning uses.
    pub fn to_raw_table(&self) -> RawTable {
        let headers = std::iter::once(SECTOR_HEADER.to_string())
            .chain(self.years().iter().cloned())
            .collect();
        let rows = self
            .rows()
            .iter()
            .map(|row| {
                std::iter::once(Cell::Text(row.sector.clone()))
                    .chain(row.values.iter().map(|v| match v {
                        Some(value) => Cell::Number(*value),
                        None => Cell::Text(DEFAULT_PLACEHOLDER.to_string()),
                    }))
                    .collect()
            })
            .collect();
        RawTable::new(headers, rows)
    }

    /// The underlying table.
    pub const fn as_table(&self) -> &SectorTable {
        &self.0
    }
}

impl Deref for CleanTable {
    type Target = SectorTable;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Year-over-year growth in percent, keyed by sector.
///
/// Has the same sectors as the clean table it came from and one year column
/// fewer: column `i` is the growth from clean year `i` to clean year `i + 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(transparent)]
pub struct GrowthTable(SectorTable);

impl GrowthTable {
    /// Build a growth table directly from rows.
    ///
    /// # Errors
    /// Same as [`SectorTable::new`].
    pub fn from_rows(years: Vec<String>, rows: Vec<SectorRow>) -> Result<Self, SchemaError> {
        SectorTable::new(years, rows).map(Self)
    }

    pub(crate) const fn from_table(table: SectorTable) -> Self {
        Self(table)
    }

    /// The underlying table.
    pub const fn as_table(&self) -> &SectorTable {
        &self.0
    }
}

impl Deref for GrowthTable {
    type Target = SectorTable;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn years(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_rejects_duplicate_sector() {
        let result = SectorTable::new(
            years(&["2012"]),
            vec![
                SectorRow::new("Mining", vec![Some(1.0)]),
                SectorRow::new("Mining", vec![Some(2.0)]),
            ],
        );
        assert_eq!(result, Err(SchemaError::DuplicateSector("Mining".to_string())));
    }

    #[test]
    fn test_rejects_wrong_width() {
        let result = SectorTable::new(
            years(&["2012", "2013"]),
            vec![SectorRow::new("Mining", vec![Some(1.0)])],
        );
        assert!(matches!(result, Err(SchemaError::RowWidthMismatch { .. })));
    }

    #[test]
    fn test_lookup_keeps_source_order() {
        let table = SectorTable::new(
            years(&["2012"]),
            vec![
                SectorRow::new("Tourism", vec![Some(1.0)]),
                SectorRow::new("Agriculture", vec![None]),
            ],
        )
        .unwrap();

        assert_eq!(table.sectors().collect::<Vec<_>>(), vec!["Tourism", "Agriculture"]);
        assert_eq!(table.get("Agriculture"), Some(&[None][..]));
        assert!(!table.contains("Mining"));
    }

    #[test]
    fn test_to_raw_table() {
        let clean = CleanTable::from_rows(
            years(&["2012", "2013"]),
            vec![SectorRow::new("Tourism", vec![Some(100.0), None])],
        )
        .unwrap();

        let raw = clean.to_raw_table();
        assert_eq!(raw.headers(), &["Sector", "2012", "2013"]);
        assert_eq!(
            raw.rows()[0],
            vec![Cell::from("Tourism"), Cell::Number(100.0), Cell::from("…")]
        );
    }

    #[test]
    fn test_present_values() {
        let row = SectorRow::new("Tourism", vec![Some(1.0), None, Some(3.0)]);
        assert_eq!(row.present(), vec![1.0, 3.0]);
    }
}

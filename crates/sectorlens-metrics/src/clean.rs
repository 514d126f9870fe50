//! Cleaning a raw sector table into numeric per-year values.
//!
//! Cleaning runs these steps in order, each a filter or transform that never
//! reorders rows or columns:
//!
//! 1. Column 0 is the sector label; rows with an empty label are dropped.
//! 2. Year columns that are empty in every remaining row are dropped.
//! 3. Rows that are empty in every remaining year column are dropped.
//! 4. Cells matching a configured placeholder token become missing.
//! 5. Remaining cells are parsed as numbers; unparsable cells become missing.
//!
//! Steps 4 and 5 can leave a row with nothing but missing values, so step 3
//! is applied once more on the numeric values, followed by step 2 over the
//! rows that are left. Step 2 looks at cells, not numbers: a year reported
//! only as placeholders stays as an all-missing column, so the years on
//! either side are never treated as adjacent.

use crate::config::PipelineConfig;
use crate::error::SchemaError;
use crate::table::{CleanTable, SectorRow};
use sectorlens_data::{Cell, RawTable};
use tracing::{debug, warn};

/// Clean a raw table.
///
/// # Errors
/// Returns a [`SchemaError`] when the table has no sector column, no year
/// columns, or when two surviving rows carry the same (trimmed) label.
pub fn clean(raw: &RawTable, config: &PipelineConfig) -> Result<CleanTable, SchemaError> {
    if raw.width() == 0 {
        return Err(SchemaError::MissingSectorColumn);
    }
    let year_headers = raw.year_headers();
    if year_headers.is_empty() {
        return Err(SchemaError::NoYearColumns);
    }

    // Step 1: rows need a label
    let labelled: Vec<(String, &[Cell])> = raw
        .rows()
        .iter()
        .filter_map(|row| sector_label(&row[0]).map(|label| (label, &row[1..])))
        .collect();
    debug!(
        kept = labelled.len(),
        dropped = raw.height() - labelled.len(),
        "dropped rows without a sector label"
    );

    // Step 2: columns need at least one non-empty cell
    let columns: Vec<usize> = (0..year_headers.len())
        .filter(|&col| labelled.iter().any(|(_, cells)| !cells[col].is_empty()))
        .collect();
    debug!(
        kept = columns.len(),
        dropped = year_headers.len() - columns.len(),
        "dropped empty year columns"
    );

    // Step 3: rows need at least one non-empty cell in the kept columns
    let before = labelled.len();
    let labelled: Vec<(String, &[Cell])> = labelled
        .into_iter()
        .filter(|(_, cells)| columns.iter().any(|&col| !cells[col].is_empty()))
        .collect();
    debug!(
        kept = labelled.len(),
        dropped = before - labelled.len(),
        "dropped empty sector rows"
    );

    // Steps 4 and 5: placeholders and unparsable text become missing
    let coerced: Vec<(String, &[Cell], Vec<Option<f64>>)> = labelled
        .into_iter()
        .map(|(label, cells)| {
            let values = columns
                .iter()
                .map(|&col| coerce(&cells[col], config))
                .collect();
            (label, cells, values)
        })
        .collect();

    // Step 3 again, on numeric values, then step 2 again over the rows left
    let before = coerced.len();
    let coerced: Vec<(String, &[Cell], Vec<Option<f64>>)> = coerced
        .into_iter()
        .filter(|(_, _, values)| values.iter().any(Option::is_some))
        .collect();
    let kept: Vec<usize> = (0..columns.len())
        .filter(|&idx| coerced.iter().any(|(_, cells, _)| !cells[columns[idx]].is_empty()))
        .collect();
    if before != coerced.len() {
        debug!(
            rows = before - coerced.len(),
            columns = columns.len() - kept.len(),
            "dropped rows left without numeric values"
        );
    }

    let years = kept
        .iter()
        .map(|&idx| year_headers[columns[idx]].clone())
        .collect();
    let rows = coerced
        .into_iter()
        .map(|(label, _, values)| {
            let values = kept.iter().map(|&idx| values[idx]).collect();
            SectorRow::new(label, values)
        })
        .collect();

    let table = CleanTable::from_rows(years, rows)?;
    if table.is_empty() {
        warn!("no sector rows survived cleaning");
    }
    Ok(table)
}

/// Trimmed sector label of a cell, if it has one.
fn sector_label(cell: &Cell) -> Option<String> {
    match cell {
        Cell::Text(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Cell::Number(value) if value.is_finite() => Some(value.to_string()),
        _ => None,
    }
}

/// Lenient numeric coercion of a single cell.
fn coerce(cell: &Cell, config: &PipelineConfig) -> Option<f64> {
    if let Some(value) = cell.as_number() {
        return value.is_finite().then_some(value);
    }
    cell.as_text()
        .filter(|text| !config.is_placeholder(text))
        .and_then(|text| text.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(headers: &[&str], rows: Vec<Vec<Cell>>) -> RawTable {
        RawTable::new(headers.iter().map(|s| s.to_string()).collect(), rows)
    }

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    fn num(v: f64) -> Cell {
        Cell::Number(v)
    }

    #[test]
    fn test_missing_sector_column() {
        let table = RawTable::default();
        assert_eq!(
            clean(&table, &PipelineConfig::default()),
            Err(SchemaError::MissingSectorColumn)
        );
    }

    #[test]
    fn test_no_year_columns() {
        let table = raw(&["Sector"], vec![vec![text("Tourism")]]);
        assert_eq!(
            clean(&table, &PipelineConfig::default()),
            Err(SchemaError::NoYearColumns)
        );
    }

    #[test]
    fn test_drops_unlabelled_rows() {
        let table = raw(
            &["Sector", "2012"],
            vec![
                vec![text("Tourism"), num(1.0)],
                vec![Cell::Empty, num(2.0)],
                vec![text("   "), num(3.0)],
            ],
        );
        let clean = clean(&table, &PipelineConfig::default()).unwrap();

        assert_eq!(clean.sectors().collect::<Vec<_>>(), vec!["Tourism"]);
    }

    #[test]
    fn test_drops_empty_columns_and_rows() {
        let table = raw(
            &["Sector", "2012", "2013", "2014"],
            vec![
                vec![text("Tourism"), num(1.0), Cell::Empty, num(3.0)],
                vec![text("Notes"), Cell::Empty, Cell::Empty, Cell::Empty],
                vec![text("Mining"), Cell::Empty, Cell::Empty, num(4.0)],
            ],
        );
        let clean = clean(&table, &PipelineConfig::default()).unwrap();

        assert_eq!(clean.years(), &["2012", "2014"]);
        assert_eq!(clean.sectors().collect::<Vec<_>>(), vec!["Tourism", "Mining"]);
        assert_eq!(clean.get("Mining"), Some(&[None, Some(4.0)][..]));
    }

    #[test]
    fn test_placeholders_and_coercion() {
        let table = raw(
            &["Sector", "2012", "2013", "2014"],
            vec![vec![text("Tourism"), text("…"), text("12.5"), text("approx. 3")]],
        );
        let clean = clean(&table, &PipelineConfig::default()).unwrap();

        // 2012 and 2014 had cells, so they stay as missing years
        assert_eq!(clean.years(), &["2012", "2013", "2014"]);
        assert_eq!(clean.get("Tourism"), Some(&[None, Some(12.5), None][..]));
    }

    #[test]
    fn test_custom_placeholders() {
        let table = raw(
            &["Sector", "2012", "2013"],
            vec![
                vec![text("Tourism"), text("n/a"), num(2.0)],
                vec![text("Mining"), num(1.0), text("-")],
            ],
        );
        let config = PipelineConfig::default().with_placeholders(["n/a", "-"]);
        let clean = clean(&table, &config).unwrap();

        assert_eq!(clean.get("Tourism"), Some(&[None, Some(2.0)][..]));
        assert_eq!(clean.get("Mining"), Some(&[Some(1.0), None][..]));
    }

    #[test]
    fn test_placeholder_only_row_removed() {
        let table = raw(
            &["Sector", "2012", "2013"],
            vec![
                vec![text("Tourism"), num(1.0), num(2.0)],
                vec![text("Launch"), text("…"), text("…")],
            ],
        );
        let clean = clean(&table, &PipelineConfig::default()).unwrap();

        assert!(!clean.contains("Launch"));
        assert_eq!(clean.len(), 1);
    }

    #[test]
    fn test_placeholder_only_year_kept() {
        let table = raw(
            &["Sector", "2012", "2013", "2014"],
            vec![
                vec![text("A"), num(100.0), text("…"), num(400.0)],
                vec![text("B"), num(10.0), text("…"), num(20.0)],
            ],
        );
        let config = PipelineConfig::default();
        let clean = clean(&table, &config).unwrap();

        assert_eq!(clean.years(), &["2012", "2013", "2014"]);
        assert_eq!(clean.get("A"), Some(&[Some(100.0), None, Some(400.0)][..]));
        assert_eq!(super::clean(&clean.to_raw_table(), &config).unwrap(), clean);
    }

    #[test]
    fn test_labels_trimmed_before_duplicate_check() {
        let table = raw(
            &["Sector", "2012"],
            vec![
                vec![text("Tourism"), num(1.0)],
                vec![text(" Tourism "), num(2.0)],
            ],
        );
        assert_eq!(
            clean(&table, &PipelineConfig::default()),
            Err(SchemaError::DuplicateSector("Tourism".to_string()))
        );
    }

    #[test]
    fn test_numeric_labels_kept() {
        let table = raw(&["Code", "2012"], vec![vec![num(4811.0), num(5.0)]]);
        let clean = clean(&table, &PipelineConfig::default()).unwrap();

        assert!(clean.contains("4811"));
    }

    #[test]
    fn test_idempotent() {
        let table = raw(
            &["Sector", "2012", "2013", "2014"],
            vec![
                vec![text(" Tourism"), num(100.0), text("…"), num(300.0)],
                vec![Cell::Empty, num(1.0), num(1.0), num(1.0)],
                vec![text("Mining"), text("bad"), num(5.0), Cell::Empty],
            ],
        );
        let config = PipelineConfig::default();
        let once = clean(&table, &config).unwrap();
        let twice = clean(&once.to_raw_table(), &config).unwrap();

        assert_eq!(once, twice);
    }
}

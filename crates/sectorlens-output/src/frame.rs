//! Polars views of SectorLens tables.
//!
//! Chart renderers and notebooks consume data frames; these helpers lay
//! each table out the way the corresponding chart reads it. Missing values
//! become polars nulls.

use polars::prelude::*;
use sectorlens_metrics::{CorrelationRanking, RiskRewardTable, SectorTable};

/// Name of the sector column in every frame.
pub const SECTOR_COLUMN: &str = "sector";

/// Wide frame: a `sector` column followed by one `f64` column per year.
///
/// Works for both clean and growth tables (heatmap input).
///
/// # Errors
///
/// Returns an error if two year labels collide with each other or with
/// the sector column.
pub fn sector_table_frame(table: &SectorTable) -> PolarsResult<DataFrame> {
    let mut columns = Vec::with_capacity(table.year_count() + 1);
    let sectors: Vec<&str> = table.sectors().collect();
    columns.push(Column::new(SECTOR_COLUMN.into(), sectors));

    for (idx, year) in table.years().iter().enumerate() {
        let values: Vec<Option<f64>> = table.rows().iter().map(|row| row.values[idx]).collect();
        columns.push(Column::new(year.as_str().into(), values));
    }

    DataFrame::new(columns)
}

/// One row per sector with volatility, average growth, observation count
/// and quadrant label (scatter and bar chart input).
///
/// Rows are ordered by sector name.
///
/// # Errors
///
/// Returns an error if the frame cannot be assembled.
pub fn risk_reward_frame(table: &RiskRewardTable) -> PolarsResult<DataFrame> {
    let thresholds = table.quadrant_thresholds();

    let mut sectors = Vec::with_capacity(table.len());
    let mut volatility = Vec::with_capacity(table.len());
    let mut average_growth = Vec::with_capacity(table.len());
    let mut observations = Vec::with_capacity(table.len());
    let mut quadrant = Vec::with_capacity(table.len());

    for (sector, entry) in table.iter() {
        sectors.push(sector);
        volatility.push(entry.volatility);
        average_growth.push(entry.average_growth);
        observations.push(u32::try_from(entry.observations).unwrap_or(u32::MAX));
        quadrant.push(table.quadrant_with(sector, &thresholds).map(|q| q.label()));
    }

    DataFrame::new(vec![
        Column::new(SECTOR_COLUMN.into(), sectors),
        Column::new("volatility".into(), volatility),
        Column::new("average_growth".into(), average_growth),
        Column::new("observations".into(), observations),
        Column::new("quadrant".into(), quadrant),
    ])
}

/// One row per defined pair in canonical order, with a `pair` label column
/// for bar charts.
///
/// # Errors
///
/// Returns an error if the frame cannot be assembled.
pub fn correlation_frame(ranking: &CorrelationRanking) -> PolarsResult<DataFrame> {
    let pairs = ranking.pairs();

    let first: Vec<&str> = pairs.iter().map(|p| p.first.as_str()).collect();
    let second: Vec<&str> = pairs.iter().map(|p| p.second.as_str()).collect();
    let label: Vec<String> = pairs.iter().map(|p| p.label()).collect();
    let coefficient: Vec<f64> = pairs.iter().map(|p| p.coefficient).collect();
    let overlap: Vec<u32> = pairs
        .iter()
        .map(|p| u32::try_from(p.overlap).unwrap_or(u32::MAX))
        .collect();

    DataFrame::new(vec![
        Column::new("first".into(), first),
        Column::new("second".into(), second),
        Column::new("pair".into(), label),
        Column::new("coefficient".into(), coefficient),
        Column::new("overlap".into(), overlap),
    ])
}

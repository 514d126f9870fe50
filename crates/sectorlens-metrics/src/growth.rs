//! Year-over-year growth.
//!
//! Growth from year `i - 1` to year `i` is
//! `(value[i] - value[i-1]) / value[i-1] * 100`. The first year has no
//! growth value, so the growth table has one column fewer than its input.

use crate::table::{CleanTable, GrowthTable, SectorRow, SectorTable};
use tracing::debug;

/// Percentage change from `prior` to `current`.
///
/// Missing on either side gives `None`. A prior value of exactly zero also
/// gives `None`: the change is undefined and is never computed as an
/// infinite ratio.
pub fn growth_rate(prior: Option<f64>, current: Option<f64>) -> Option<f64> {
    let (prior, current) = (prior?, current?);
    if prior == 0.0 {
        return None;
    }
    let rate = (current - prior) / prior * 100.0;
    rate.is_finite().then_some(rate)
}

/// Compute the growth table of a clean table.
///
/// The result has the same sectors, in the same order, and one growth
/// column per year after the first, labelled with the later year.
pub fn compute_growth(clean: &CleanTable) -> GrowthTable {
    let years = clean.years().iter().skip(1).cloned().collect();
    let rows = clean
        .rows()
        .iter()
        .map(|row| {
            let values = row
                .values
                .windows(2)
                .map(|pair| growth_rate(pair[0], pair[1]))
                .collect();
            SectorRow::new(row.sector.clone(), values)
        })
        .collect();

    debug!(
        sectors = clean.len(),
        years = clean.year_count().saturating_sub(1),
        "computed year-over-year growth"
    );

    // Sector keys and widths carry over from a valid clean table
    GrowthTable::from_table(SectorTable::from_parts(years, rows))
}

//! Pairwise correlation of sector growth series.
//!
//! The correlation of two sectors is the Pearson coefficient of their growth
//! values over the years where both are present. Pairs with fewer than two
//! such years, or where either side is constant over them, have no
//! coefficient and are left out.
//!
//! Pairs are enumerated in canonical order: sector names sorted
//! lexicographically, then every `(i, j)` with `i < j`. Rankings sort stably,
//! so exact ties always come out in canonical order.

use crate::stats::pearson;
use crate::table::GrowthTable;
use ndarray::Array2;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Minimum number of overlapping years for a defined coefficient.
pub const MIN_OVERLAP: usize = 2;

/// Two distinct sectors and the correlation of their growth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationPair {
    /// Lexicographically smaller sector name.
    pub first: String,

    /// Lexicographically larger sector name.
    pub second: String,

    /// Pearson coefficient, within `[-1, 1]`.
    pub coefficient: f64,

    /// Number of years where both sectors have growth values.
    pub overlap: usize,
}

impl CorrelationPair {
    /// Whether the pair involves `sector`.
    pub fn involves(&self, sector: &str) -> bool {
        self.first == sector || self.second == sector
    }

    /// `"first & second"`, as used for chart labels.
    pub fn label(&self) -> String {
        format!("{} & {}", self.first, self.second)
    }
}

impl fmt::Display for CorrelationPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.4} ({} years)",
            self.label(),
            self.coefficient,
            self.overlap
        )
    }
}

/// Correlation of two aligned growth series over their common years.
///
/// Returns the coefficient and the number of overlapping years, or `None`
/// when the coefficient is undefined.
pub fn pair_correlation(x: &[Option<f64>], y: &[Option<f64>]) -> Option<(f64, usize)> {
    let (xs, ys): (Vec<f64>, Vec<f64>) = x
        .iter()
        .zip(y)
        .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
        .unzip();

    if xs.len() < MIN_OVERLAP {
        return None;
    }
    pearson(&xs, &ys).map(|r| (r, xs.len()))
}

/// All defined sector pairs in canonical order.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(transparent)]
pub struct CorrelationRanking {
    pairs: Vec<CorrelationPair>,
}

impl CorrelationRanking {
    /// Pairs in canonical order.
    pub fn pairs(&self) -> &[CorrelationPair] {
        &self.pairs
    }

    /// Consume the ranking, returning pairs in canonical order.
    pub fn into_pairs(self) -> Vec<CorrelationPair> {
        self.pairs
    }

    /// Number of defined pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no pair is defined.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pair of two sectors, in either order.
    pub fn get(&self, a: &str, b: &str) -> Option<&CorrelationPair> {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        self.pairs
            .iter()
            .find(|p| p.first == first && p.second == second)
    }

    /// Pairs sorted by coefficient, most negative first.
    pub fn ranked_ascending(&self) -> Vec<&CorrelationPair> {
        let mut ranked: Vec<&CorrelationPair> = self.pairs.iter().collect();
        ranked.sort_by(|a, b| a.coefficient.total_cmp(&b.coefficient));
        ranked
    }

    /// Pairs sorted by coefficient, most positive first.
    pub fn ranked_descending(&self) -> Vec<&CorrelationPair> {
        let mut ranked: Vec<&CorrelationPair> = self.pairs.iter().collect();
        ranked.sort_by(|a, b| b.coefficient.total_cmp(&a.coefficient));
        ranked
    }

    /// The `n` most negatively correlated pairs.
    pub fn most_negative(&self, n: usize) -> Vec<&CorrelationPair> {
        let mut ranked = self.ranked_ascending();
        ranked.truncate(n);
        ranked
    }

    /// The `n` most positively correlated pairs.
    pub fn most_positive(&self, n: usize) -> Vec<&CorrelationPair> {
        let mut ranked = self.ranked_descending();
        ranked.truncate(n);
        ranked
    }
}

/// Sector names of a growth table in canonical (lexicographic) order,
/// paired with their row index.
fn canonical_sectors(growth: &GrowthTable) -> Vec<(&str, usize)> {
    let mut sectors: Vec<(&str, usize)> = growth.sectors().zip(0..).collect();
    sectors.sort_by(|a, b| a.0.cmp(b.0));
    sectors
}

/// Correlate every pair of distinct sectors.
pub fn compute_correlations(growth: &GrowthTable) -> CorrelationRanking {
    let sectors = canonical_sectors(growth);
    let rows = growth.rows();

    let mut pairs = Vec::new();
    let mut undefined = 0usize;
    for (i, &(first, first_idx)) in sectors.iter().enumerate() {
        for &(second, second_idx) in &sectors[i + 1..] {
            match pair_correlation(&rows[first_idx].values, &rows[second_idx].values) {
                Some((coefficient, overlap)) => pairs.push(CorrelationPair {
                    first: first.to_string(),
                    second: second.to_string(),
                    coefficient,
                    overlap,
                }),
                None => undefined += 1,
            }
        }
    }

    debug!(defined = pairs.len(), undefined, "computed sector correlations");

    CorrelationRanking { pairs }
}

/// Square correlation matrix over sectors in canonical order.
///
/// Undefined entries are `NaN`. The diagonal is `1.0` for sectors with at
/// least two growth values that are not all equal.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    /// Row and column labels.
    pub sectors: Vec<String>,

    /// Coefficients, `sectors.len()` × `sectors.len()`.
    pub values: Array2<f64>,
}

impl CorrelationMatrix {
    /// Coefficient of two sectors, if both exist and it is defined.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.sectors.iter().position(|s| s == a)?;
        let j = self.sectors.iter().position(|s| s == b)?;
        let value = self.values[[i, j]];
        (!value.is_nan()).then_some(value)
    }
}

/// Build the full correlation matrix of a growth table.
pub fn correlation_matrix(growth: &GrowthTable) -> CorrelationMatrix {
    let sectors = canonical_sectors(growth);
    let rows = growth.rows();
    let n = sectors.len();

    let mut values = Array2::<f64>::from_elem((n, n), f64::NAN);
    for i in 0..n {
        for j in i..n {
            let coefficient =
                pair_correlation(&rows[sectors[i].1].values, &rows[sectors[j].1].values)
                    .map_or(f64::NAN, |(r, _)| r);
            values[[i, j]] = coefficient;
            values[[j, i]] = coefficient;
        }
    }

    CorrelationMatrix {
        sectors: sectors.iter().map(|(s, _)| s.to_string()).collect(),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::SectorRow;
    use approx::assert_abs_diff_eq;

    fn growth_table(rows: Vec<(&str, Vec<Option<f64>>)>) -> GrowthTable {
        let width = rows.first().map_or(0, |(_, v)| v.len());
        GrowthTable::from_rows(
            (0..width).map(|i| (2013 + i).to_string()).collect(),
            rows.into_iter()
                .map(|(sector, values)| SectorRow::new(sector, values))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_colinear_pair() {
        let growth = growth_table(vec![
            ("A", vec![Some(100.0), Some(50.0)]),
            ("B", vec![Some(100.0), Some(50.0)]),
        ]);
        let ranking = compute_correlations(&growth);

        assert_eq!(ranking.len(), 1);
        let pair = ranking.get("B", "A").unwrap();
        assert_eq!(pair.first, "A");
        assert_eq!(pair.second, "B");
        assert_abs_diff_eq!(pair.coefficient, 1.0, epsilon = 1e-12);
        assert_eq!(pair.overlap, 2);
    }

    #[test]
    fn test_insufficient_overlap_is_absent() {
        let growth = growth_table(vec![
            ("A", vec![Some(1.0), None, Some(3.0)]),
            ("B", vec![None, Some(2.0), Some(4.0)]),
        ]);
        let ranking = compute_correlations(&growth);

        assert!(ranking.is_empty());
        assert!(ranking.get("A", "B").is_none());
    }

    #[test]
    fn test_uses_only_overlapping_years() {
        let x = [Some(1.0), Some(2.0), None, Some(3.0)];
        let y = [Some(2.0), Some(4.0), Some(100.0), Some(6.0)];
        let (r, overlap) = pair_correlation(&x, &y).unwrap();

        assert_abs_diff_eq!(r, 1.0, epsilon = 1e-12);
        assert_eq!(overlap, 3);
    }

    #[test]
    fn test_canonical_order_and_no_self_pairs() {
        let growth = growth_table(vec![
            ("Tourism", vec![Some(1.0), Some(2.0), Some(4.0)]),
            ("Agriculture", vec![Some(3.0), Some(1.0), Some(2.0)]),
            ("Mining", vec![Some(2.0), Some(5.0), Some(1.0)]),
        ]);
        let ranking = compute_correlations(&growth);

        let labels: Vec<String> = ranking.pairs().iter().map(CorrelationPair::label).collect();
        assert_eq!(
            labels,
            vec![
                "Agriculture & Mining",
                "Agriculture & Tourism",
                "Mining & Tourism"
            ]
        );
        assert!(ranking.pairs().iter().all(|p| p.first != p.second));
    }

    #[test]
    fn test_ties_keep_canonical_order() {
        let growth = growth_table(vec![
            ("D", vec![Some(1.0), Some(2.0)]),
            ("C", vec![Some(1.0), Some(2.0)]),
            ("B", vec![Some(1.0), Some(2.0)]),
            ("A", vec![Some(2.0), Some(1.0)]),
        ]);
        let ranking = compute_correlations(&growth);

        let positive: Vec<String> = ranking
            .most_positive(3)
            .into_iter()
            .map(CorrelationPair::label)
            .collect();
        assert_eq!(positive, vec!["B & C", "B & D", "C & D"]);

        let negative: Vec<String> = ranking
            .most_negative(3)
            .into_iter()
            .map(CorrelationPair::label)
            .collect();
        assert_eq!(negative, vec!["A & B", "A & C", "A & D"]);
    }

    #[test]
    fn test_ranking_order() {
        let growth = growth_table(vec![
            ("A", vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0)]),
            ("B", vec![Some(2.0), Some(1.0), Some(4.0), Some(3.0), Some(5.0)]),
            ("C", vec![Some(5.0), Some(4.0), Some(3.0), Some(2.0), Some(1.0)]),
        ]);
        let ranking = compute_correlations(&growth);

        let ascending: Vec<f64> = ranking
            .ranked_ascending()
            .iter()
            .map(|p| p.coefficient)
            .collect();
        assert!(ascending.windows(2).all(|w| w[0] <= w[1]));
        assert_abs_diff_eq!(ascending[0], -1.0, epsilon = 1e-12);

        let top = ranking.most_positive(1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].label(), "A & B");
        assert_abs_diff_eq!(top[0].coefficient, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_constant_series_is_undefined() {
        let growth = growth_table(vec![
            ("Flat", vec![Some(5.0), Some(5.0), Some(5.0)]),
            ("Moving", vec![Some(1.0), Some(2.0), Some(3.0)]),
        ]);
        assert!(compute_correlations(&growth).is_empty());
    }

    #[test]
    fn test_correlation_matrix() {
        let growth = growth_table(vec![
            ("B", vec![Some(1.0), Some(2.0), Some(3.0)]),
            ("A", vec![Some(3.0), Some(2.0), Some(1.0)]),
            ("C", vec![Some(1.0), None, None]),
        ]);
        let matrix = correlation_matrix(&growth);

        assert_eq!(matrix.sectors, vec!["A", "B", "C"]);
        assert_eq!(matrix.values.dim(), (3, 3));
        assert_abs_diff_eq!(matrix.get("A", "A").unwrap(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(matrix.get("A", "B").unwrap(), -1.0, epsilon = 1e-12);
        assert_eq!(matrix.get("A", "C"), None);
        assert_eq!(matrix.get("C", "C"), None);
        assert_eq!(matrix.get("A", "Z"), None);
    }
}

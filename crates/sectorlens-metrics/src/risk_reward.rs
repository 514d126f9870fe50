//! Risk/reward summary per sector.
//!
//! Risk is the volatility of a sector's year-over-year growth (sample
//! standard deviation), reward is its average growth. Both are computed over
//! the non-missing growth values only.

use crate::stats::{mean, sample_std_dev};
use crate::table::GrowthTable;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Volatility and average growth of one sector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskRewardEntry {
    /// Sample standard deviation of growth; `None` with fewer than 2 values.
    pub volatility: Option<f64>,

    /// Mean growth; `None` without any value.
    pub average_growth: Option<f64>,

    /// Number of non-missing growth values behind the statistics.
    pub observations: usize,
}

impl RiskRewardEntry {
    /// Summarise one sector's growth series.
    pub fn from_growth(values: &[Option<f64>]) -> Self {
        let present: Vec<f64> = values.iter().flatten().copied().collect();
        Self {
            volatility: sample_std_dev(&present),
            average_growth: mean(&present),
            observations: present.len(),
        }
    }
}

/// Position of a sector relative to the cross-sector average risk and reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Quadrant {
    /// Above-average volatility and above-average growth
    HighRiskHighReward,
    /// Above-average volatility, average growth or below
    HighRiskLowReward,
    /// Average volatility or below, above-average growth
    LowRiskHighReward,
    /// Average volatility or below, average growth or below
    LowRiskLowReward,
}

impl Quadrant {
    /// Short human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::HighRiskHighReward => "high risk / high reward",
            Self::HighRiskLowReward => "high risk / low reward",
            Self::LowRiskHighReward => "low risk / high reward",
            Self::LowRiskLowReward => "low risk / low reward",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cross-sector averages splitting the risk/reward plane into quadrants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuadrantThresholds {
    /// Mean of the defined sector volatilities.
    pub volatility: Option<f64>,

    /// Mean of the defined sector average growths.
    pub average_growth: Option<f64>,
}

/// Risk/reward entries keyed by sector.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(transparent)]
pub struct RiskRewardTable {
    entries: BTreeMap<String, RiskRewardEntry>,
}

impl RiskRewardTable {
    /// Entry for one sector.
    pub fn get(&self, sector: &str) -> Option<&RiskRewardEntry> {
        self.entries.get(sector)
    }

    /// Entries ordered by sector name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RiskRewardEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of sectors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no sectors.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sectors with a defined volatility, most volatile first.
    ///
    /// Equal volatilities keep sector-name order.
    pub fn volatility_ranking(&self) -> Vec<(&str, f64)> {
        let mut ranking: Vec<(&str, f64)> = self
            .iter()
            .filter_map(|(sector, entry)| entry.volatility.map(|v| (sector, v)))
            .collect();
        ranking.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranking
    }

    /// Mean volatility and mean average growth across sectors.
    pub fn quadrant_thresholds(&self) -> QuadrantThresholds {
        let volatilities: Vec<f64> = self.entries.values().filter_map(|e| e.volatility).collect();
        let growths: Vec<f64> = self
            .entries
            .values()
            .filter_map(|e| e.average_growth)
            .collect();
        QuadrantThresholds {
            volatility: mean(&volatilities),
            average_growth: mean(&growths),
        }
    }

    /// Quadrant of a sector, if both its statistics are defined.
    pub fn quadrant(&self, sector: &str) -> Option<Quadrant> {
        let thresholds = self.quadrant_thresholds();
        self.quadrant_with(sector, &thresholds)
    }

    /// Quadrant of a sector against precomputed thresholds.
    pub fn quadrant_with(&self, sector: &str, thresholds: &QuadrantThresholds) -> Option<Quadrant> {
        let entry = self.get(sector)?;
        let high_risk = entry.volatility? > thresholds.volatility?;
        let high_reward = entry.average_growth? > thresholds.average_growth?;
        Some(match (high_risk, high_reward) {
            (true, true) => Quadrant::HighRiskHighReward,
            (true, false) => Quadrant::HighRiskLowReward,
            (false, true) => Quadrant::LowRiskHighReward,
            (false, false) => Quadrant::LowRiskLowReward,
        })
    }
}

impl FromIterator<(String, RiskRewardEntry)> for RiskRewardTable {
    fn from_iter<T: IntoIterator<Item = (String, RiskRewardEntry)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Compute the risk/reward entry of every sector in a growth table.
pub fn compute_risk_reward(growth: &GrowthTable) -> RiskRewardTable {
    let table: RiskRewardTable = growth
        .rows()
        .iter()
        .map(|row| (row.sector.clone(), RiskRewardEntry::from_growth(&row.values)))
        .collect();

    debug!(
        sectors = table.len(),
        with_volatility = table.volatility_ranking().len(),
        "computed risk/reward"
    );

    table
}

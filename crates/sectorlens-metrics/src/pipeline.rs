//! The full sector metrics pipeline.

use crate::clean::clean;
use crate::config::PipelineConfig;
use crate::correlation::{CorrelationRanking, compute_correlations};
use crate::error::{ConfigError, SchemaError};
use crate::growth::compute_growth;
use crate::risk_reward::{RiskRewardTable, compute_risk_reward};
use crate::table::{CleanTable, GrowthTable};
use sectorlens_data::RawTable;
use serde::Serialize;
use tracing::{info, instrument};

/// Everything derived from one raw table.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct PipelineOutput {
    /// Cleaned per-year values.
    pub clean: CleanTable,

    /// Year-over-year growth in percent.
    pub growth: GrowthTable,

    /// Volatility and average growth per sector.
    pub risk_reward: RiskRewardTable,

    /// Defined sector pairs in canonical order.
    pub correlations: CorrelationRanking,
}

/// Cleans a raw sector table and derives growth, risk/reward and
/// correlation metrics from it.
///
/// The pipeline holds only its configuration. Each operation is a pure
/// function of its arguments, so one pipeline can serve any number of
/// inputs, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct SectorMetricsPipeline {
    config: PipelineConfig,
}

impl SectorMetricsPipeline {
    /// Create a pipeline with the given configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the configuration does not validate.
    pub fn new(config: PipelineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The pipeline configuration.
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Clean a raw table.
    ///
    /// # Errors
    /// See [`crate::clean::clean`].
    pub fn clean(&self, raw: &RawTable) -> Result<CleanTable, SchemaError> {
        clean(raw, &self.config)
    }

    /// Year-over-year growth of a clean table.
    pub fn compute_growth(&self, clean: &CleanTable) -> GrowthTable {
        compute_growth(clean)
    }

    /// Volatility and average growth per sector.
    pub fn compute_risk_reward(&self, growth: &GrowthTable) -> RiskRewardTable {
        compute_risk_reward(growth)
    }

    /// Correlation of every pair of distinct sectors.
    pub fn compute_correlations(&self, growth: &GrowthTable) -> CorrelationRanking {
        compute_correlations(growth)
    }

    /// Run every step on a raw table.
    ///
    /// # Errors
    /// Fails only when cleaning fails; there is no partial result.
    #[instrument(level = "debug", skip_all, fields(rows = raw.height(), columns = raw.width()))]
    pub fn run(&self, raw: &RawTable) -> Result<PipelineOutput, SchemaError> {
        let clean = self.clean(raw)?;
        let growth = self.compute_growth(&clean);
        let risk_reward = self.compute_risk_reward(&growth);
        let correlations = self.compute_correlations(&growth);

        info!(
            sectors = clean.len(),
            years = clean.year_count(),
            pairs = correlations.len(),
            "sector metrics computed"
        );

        Ok(PipelineOutput {
            clean,
            growth,
            risk_reward,
            correlations,
        })
    }
}

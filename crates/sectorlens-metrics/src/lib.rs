#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/sectorlens/sectorlens/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod clean;
pub mod config;
pub mod correlation;
pub mod error;
pub mod growth;
pub mod pipeline;
pub mod risk_reward;
pub mod stats;
pub mod table;

// Re-export main types
pub use clean::clean;
pub use config::PipelineConfig;
pub use correlation::{
    CorrelationMatrix, CorrelationPair, CorrelationRanking, compute_correlations,
    correlation_matrix,
};
pub use error::{ConfigError, SchemaError};
pub use growth::{compute_growth, growth_rate};
pub use pipeline::{PipelineOutput, SectorMetricsPipeline};
pub use risk_reward::{
    Quadrant, QuadrantThresholds, RiskRewardEntry, RiskRewardTable, compute_risk_reward,
};
pub use table::{CleanTable, GrowthTable, SectorRow, SectorTable};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

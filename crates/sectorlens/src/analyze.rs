//! One-call analysis of a CSV source.

use sectorlens_data::{DataError, RawTable};
use sectorlens_metrics::{
    ConfigError, PipelineConfig, PipelineOutput, SchemaError, SectorMetricsPipeline,
};
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors from loading and analysing a sector table.
#[derive(Debug, Error)]
pub enum Error {
    /// The input could not be read or parsed as CSV.
    #[error(transparent)]
    Data(#[from] DataError),

    /// The table does not have the expected shape.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The pipeline configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn build_pipeline(config: PipelineConfig) -> Result<SectorMetricsPipeline, ConfigError> {
    debug!(
        placeholders = ?config.placeholders,
        top_pairs = config.top_pairs,
        "configuring pipeline"
    );
    SectorMetricsPipeline::new(config)
}

/// Load a CSV file and run the full pipeline on it.
///
/// # Errors
///
/// Returns an error if `config` is invalid, the file cannot be read, or
/// the table fails schema checks during cleaning.
pub fn analyze_path(
    path: impl AsRef<Path>,
    config: PipelineConfig,
) -> Result<PipelineOutput, Error> {
    let pipeline = build_pipeline(config)?;
    let raw = RawTable::from_csv_path(path)?;
    Ok(pipeline.run(&raw)?)
}

/// Read CSV from `reader` and run the full pipeline on it.
///
/// # Errors
///
/// Same as [`analyze_path`].
pub fn analyze_reader<R: Read>(reader: R, config: PipelineConfig) -> Result<PipelineOutput, Error> {
    let pipeline = build_pipeline(config)?;
    let raw = RawTable::from_csv_reader(reader)?;
    Ok(pipeline.run(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    const INPUT: &str = "Sector,2012,2013,2014\nA,1,2,4\nB,10,5,5\n";

    #[test]
    fn test_analyze_reader() {
        let output = analyze_reader(INPUT.as_bytes(), PipelineConfig::default()).unwrap();
        assert_eq!(output.clean.len(), 2);
        assert_eq!(output.growth.year_count(), 2);
        assert_eq!(output.risk_reward.len(), 2);
    }

    #[test]
    fn test_analyze_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(INPUT.as_bytes()).unwrap();

        let output = analyze_path(file.path(), PipelineConfig::default()).unwrap();
        assert!(output.clean.contains("A"));
    }

    #[test]
    fn test_missing_file_is_data_error() {
        let err = analyze_path("/nonexistent/sectors.csv", PipelineConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Data(_)));
    }

    #[rstest]
    #[case("Sector\nA\n")]
    #[case("Sector,2012\nA,1\nA,2\n")]
    fn test_schema_errors(#[case] input: &str) {
        let err = analyze_reader(input.as_bytes(), PipelineConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Schema(_)));
    }

    #[test]
    fn test_invalid_config() {
        let config = PipelineConfig::default().with_top_pairs(0);
        let err = analyze_reader(INPUT.as_bytes(), config).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}

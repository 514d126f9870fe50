//! Export functionality for SectorLens results.
//!
//! This module provides CSV and JSON export of the clean table, the growth
//! table, the risk/reward table and the correlation ranking.

use sectorlens_metrics::table::SECTOR_HEADER;
use sectorlens_metrics::{
    CleanTable, CorrelationRanking, GrowthTable, PipelineOutput, RiskRewardTable, SectorTable,
};
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV output was not valid UTF-8.
    #[error("Invalid UTF-8 in output: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Invalid format error.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "pretty-json" | "pretty_json" | "prettyjson" => Ok(Self::PrettyJson),
            other => Err(ExportError::InvalidFormat(other.to_string())),
        }
    }
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(value)?),
        _ => Ok(serde_json::to_string(value)?),
    }
}

fn finish(wtr: csv::Writer<Vec<u8>>) -> Result<String, ExportError> {
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

fn format_value(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Wide CSV: one row per sector, one column per year, blanks for missing.
fn sector_table_csv(table: &SectorTable) -> Result<String, ExportError> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header = Vec::with_capacity(table.year_count() + 1);
    header.push(SECTOR_HEADER);
    header.extend(table.years().iter().map(String::as_str));
    wtr.write_record(&header)?;

    for row in table.rows() {
        let mut record = Vec::with_capacity(row.values.len() + 1);
        record.push(row.sector.clone());
        record.extend(row.values.iter().map(|v| format_value(*v)));
        wtr.write_record(&record)?;
    }

    finish(wtr)
}

impl Exporter for CleanTable {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => sector_table_csv(self),
            _ => to_json(self, format),
        }
    }
}

impl Exporter for GrowthTable {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => sector_table_csv(self),
            _ => to_json(self, format),
        }
    }
}

impl Exporter for RiskRewardTable {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let thresholds = self.quadrant_thresholds();
                let mut wtr = csv::Writer::from_writer(vec![]);
                wtr.write_record([
                    "sector",
                    "volatility",
                    "average_growth",
                    "observations",
                    "quadrant",
                ])?;
                for (sector, entry) in self.iter() {
                    let quadrant = self
                        .quadrant_with(sector, &thresholds)
                        .map(|q| q.label())
                        .unwrap_or_default();
                    wtr.write_record([
                        sector,
                        format_value(entry.volatility).as_str(),
                        format_value(entry.average_growth).as_str(),
                        entry.observations.to_string().as_str(),
                        quadrant,
                    ])?;
                }
                finish(wtr)
            }
            _ => to_json(self, format),
        }
    }
}

impl Exporter for CorrelationRanking {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                // serialize() writes no header for an empty ranking
                wtr.write_record(["first", "second", "coefficient", "overlap"])?;
                for pair in self.pairs() {
                    wtr.write_record([
                        pair.first.as_str(),
                        pair.second.as_str(),
                        pair.coefficient.to_string().as_str(),
                        pair.overlap.to_string().as_str(),
                    ])?;
                }
                finish(wtr)
            }
            _ => to_json(self, format),
        }
    }
}

/// Write every table of a pipeline run into `dir`.
///
/// Files are named `clean`, `growth`, `risk_reward` and `correlations` with
/// the extension of `format`. The directory is created if needed.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or a file cannot be
/// written.
pub fn write_bundle(
    output: &PipelineOutput,
    dir: &Path,
    format: ExportFormat,
) -> Result<Vec<PathBuf>, ExportError> {
    fs::create_dir_all(dir)?;
    let ext = format.extension();

    let items: [(&str, &dyn Exporter); 4] = [
        ("clean", &output.clean),
        ("growth", &output.growth),
        ("risk_reward", &output.risk_reward),
        ("correlations", &output.correlations),
    ];

    let mut written = Vec::with_capacity(items.len());
    for (name, item) in items {
        let path = dir.join(format!("{name}.{ext}"));
        item.export_to_file(&path, format)?;
        written.push(path);
    }
    Ok(written)
}

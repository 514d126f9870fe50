//! Report generation for SectorLens analyses.

use crate::summary::AnalysisSummary;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A required field was not set on the builder.
    #[error("Missing report field: {0}")]
    MissingField(&'static str),
}

/// A timestamped report wrapping an analysis result.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Dataset the report describes.
    pub source: String,

    /// Report generation timestamp.
    pub timestamp: DateTime<Utc>,

    /// Crate version that produced the report.
    pub version: String,

    /// Report contents.
    pub contents: serde_json::Value,
}

impl Report {
    /// Create a new report stamped with the current time.
    pub fn new(source: String, contents: serde_json::Value) -> Self {
        Self {
            source,
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            contents,
        }
    }

    /// Create a report whose contents are an analysis summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the summary cannot be serialized.
    pub fn from_summary(summary: &AnalysisSummary) -> Result<Self, ReportError> {
        Ok(Self::new(summary.name.clone(), serde_json::to_value(summary)?))
    }

    /// Convert report to JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builder for creating reports.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    source: Option<String>,
    timestamp: Option<DateTime<Utc>>,
    contents: Option<serde_json::Value>,
}

impl ReportBuilder {
    /// Create a new report builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source dataset name.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Pin the timestamp instead of using the build time.
    pub const fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Set the report contents.
    pub fn contents(mut self, contents: serde_json::Value) -> Self {
        self.contents = Some(contents);
        self
    }

    /// Set the contents from an analysis summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the summary cannot be serialized.
    pub fn summary(self, summary: &AnalysisSummary) -> Result<Self, ReportError> {
        Ok(self.contents(serde_json::to_value(summary)?))
    }

    /// Build the report.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MissingField`] if no source was set.
    pub fn build(self) -> Result<Report, ReportError> {
        let source = self.source.ok_or(ReportError::MissingField("source"))?;
        let mut report = Report::new(source, self.contents.unwrap_or(serde_json::Value::Null));
        if let Some(timestamp) = self.timestamp {
            report.timestamp = timestamp;
        }
        Ok(report)
    }
}

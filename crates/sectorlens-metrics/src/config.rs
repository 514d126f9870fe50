//! Pipeline configuration.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default placeholder token used by spreadsheet exports for missing values.
pub const DEFAULT_PLACEHOLDER: &str = "…";

/// Default number of pairs reported at each end of the correlation ranking.
pub const DEFAULT_TOP_PAIRS: usize = 5;

/// Configuration for the sector metrics pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Cell texts that mean "missing" (default: `["…"]`)
    pub placeholders: Vec<String>,

    /// Number of most positive / most negative pairs to report (default: 5)
    pub top_pairs: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            placeholders: vec![DEFAULT_PLACEHOLDER.to_string()],
            top_pairs: DEFAULT_TOP_PAIRS,
        }
    }
}

impl PipelineConfig {
    /// Replace the placeholder token set.
    pub fn with_placeholders<I, S>(mut self, placeholders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.placeholders = placeholders.into_iter().map(Into::into).collect();
        self
    }

    /// Set the number of pairs reported at each end of the ranking.
    pub const fn with_top_pairs(mut self, top_pairs: usize) -> Self {
        self.top_pairs = top_pairs;
        self
    }

    /// Check the configuration for values the pipeline cannot use.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidParameter`] when `top_pairs` is zero or a
    /// placeholder token is blank (a blank token would match empty cells,
    /// which are already missing).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_pairs == 0 {
            return Err(ConfigError::InvalidParameter(
                "top_pairs must be at least 1".to_string(),
            ));
        }
        if self.placeholders.iter().any(|p| p.trim().is_empty()) {
            return Err(ConfigError::InvalidParameter(
                "placeholder tokens must not be blank".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether `text` is one of the configured placeholder tokens.
    pub fn is_placeholder(&self, text: &str) -> bool {
        let text = text.trim();
        self.placeholders.iter().any(|p| p.trim() == text)
    }
}

//! Settings file handling.
//!
//! Settings live in a TOML file with a `[pipeline]` table:
//!
//! ```toml
//! [pipeline]
//! placeholders = ["…", "n/a"]
//! top_pairs = 3
//! ```
//!
//! An explicit `--config` path must exist. Otherwise
//! `<config dir>/sectorlens/config.toml` is used when present, and the
//! built-in defaults when it is not.

use sectorlens_metrics::PipelineConfig;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors while loading settings.
#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read settings file {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for [`Settings`].
    #[error("invalid settings file {}: {source}", path.display())]
    Parse {
        /// File that was being parsed.
        path: PathBuf,
        /// Underlying error.
        source: toml::de::Error,
    },
}

/// Contents of the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Settings {
    /// Pipeline parameters.
    pub(crate) pipeline: PipelineConfig,
}

impl Settings {
    /// Default settings file location, if the platform has a config dir.
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sectorlens").join("config.toml"))
    }

    /// Load settings from `explicit`, or from the default location.
    pub(crate) fn load(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => {
                    debug!("no settings file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Parse a settings file.
    pub(crate) fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = toml::from_str(&text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Apply command-line overrides to the pipeline configuration.
    ///
    /// Placeholders given on the command line replace the configured set.
    pub(crate) fn into_pipeline_config(
        self,
        placeholders: &[String],
        top: Option<usize>,
    ) -> PipelineConfig {
        let mut config = self.pipeline;
        if !placeholders.is_empty() {
            config = config.with_placeholders(placeholders.iter().cloned());
        }
        if let Some(top) = top {
            config = config.with_top_pairs(top);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_pipeline_table() {
        let file = write("[pipeline]\nplaceholders = [\"…\", \"n/a\"]\ntop_pairs = 3\n");
        let settings = Settings::from_file(file.path()).unwrap();

        assert_eq!(settings.pipeline.placeholders, vec!["…", "n/a"]);
        assert_eq!(settings.pipeline.top_pairs, 3);
    }

    #[test]
    fn test_partial_table_keeps_defaults() {
        let file = write("[pipeline]\ntop_pairs = 2\n");
        let settings = Settings::from_file(file.path()).unwrap();

        assert_eq!(settings.pipeline.placeholders, PipelineConfig::default().placeholders);
        assert_eq!(settings.pipeline.top_pairs, 2);
    }

    #[test]
    fn test_empty_file_is_default() {
        let file = write("");
        assert_eq!(Settings::from_file(file.path()).unwrap(), Settings::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let file = write("[pipelin]\ntop_pairs = 2\n");
        assert!(matches!(
            Settings::from_file(file.path()),
            Err(SettingsError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = Settings::load(Some(Path::new("/nonexistent/sectorlens.toml"))).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }

    #[test]
    fn test_overrides() {
        let config = Settings::default().into_pipeline_config(&["-".to_string()], Some(7));
        assert_eq!(config.placeholders, vec!["-"]);
        assert_eq!(config.top_pairs, 7);

        let config = Settings::default().into_pipeline_config(&[], None);
        assert_eq!(config, PipelineConfig::default());
    }
}

//! Subcommand implementations.

mod analyze;
mod correlations;
mod export;

pub(crate) use analyze::{AnalyzeArgs, analyze};
pub(crate) use correlations::{CorrelationsArgs, correlations};
pub(crate) use export::{ExportArgs, export};

use crate::settings::Settings;
use clap::Args;
use sectorlens_metrics::PipelineConfig;
use std::path::{Path, PathBuf};

/// Arguments shared by every subcommand that reads a sector table.
#[derive(Args, Debug)]
pub(crate) struct InputArgs {
    /// CSV file with a sector column followed by one column per year
    pub(crate) path: PathBuf,

    /// Cell text meaning "missing"; repeat for several (replaces configured set)
    #[arg(long = "placeholder", value_name = "TOKEN")]
    pub(crate) placeholders: Vec<String>,

    /// Settings file (default: <config dir>/sectorlens/config.toml)
    #[arg(long, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,
}

impl InputArgs {
    /// Pipeline configuration from the settings file and command-line flags.
    pub(crate) fn pipeline_config(
        &self,
        top: Option<usize>,
    ) -> Result<PipelineConfig, Box<dyn std::error::Error>> {
        let settings = Settings::load(self.config.as_deref())?;
        Ok(settings.into_pipeline_config(&self.placeholders, top))
    }

    /// File name of the input, used as the dataset name in summaries.
    pub(crate) fn dataset_name(&self) -> String {
        display_name(&self.path)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}

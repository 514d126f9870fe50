use super::InputArgs;
use clap::{Args, ValueEnum};
use sectorlens::analyze_path;
use sectorlens_output::{ExportFormat, write_bundle};
use std::path::PathBuf;
use tracing::info;

/// File format for exported tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum FileFormat {
    /// Comma-separated values
    Csv,
    /// Compact JSON
    Json,
    /// Indented JSON
    PrettyJson,
}

impl From<FileFormat> for ExportFormat {
    fn from(format: FileFormat) -> Self {
        match format {
            FileFormat::Csv => Self::Csv,
            FileFormat::Json => Self::Json,
            FileFormat::PrettyJson => Self::PrettyJson,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    pub(crate) input: InputArgs,

    /// Directory to write into (created if missing)
    #[arg(long, value_name = "DIR")]
    pub(crate) out_dir: PathBuf,

    /// File format
    #[arg(long, value_enum, default_value_t = FileFormat::Csv)]
    pub(crate) format: FileFormat,
}

pub(crate) fn export(args: &ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.input.pipeline_config(None)?;
    let output = analyze_path(&args.input.path, config)?;

    let written = write_bundle(&output, &args.out_dir, args.format.into())?;
    info!(files = written.len(), dir = %args.out_dir.display(), "export complete");
    for path in written {
        println!("{}", path.display());
    }

    Ok(())
}

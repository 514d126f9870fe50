use super::InputArgs;
use clap::{Args, ValueEnum};
use sectorlens::analyze_path;
use sectorlens_output::{AnalysisSummary, Report};
use tracing::info;

/// How `analyze` renders its summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum SummaryFormat {
    /// Aligned plain-text tables
    #[default]
    Text,
    /// Markdown tables
    Markdown,
    /// JSON report with timestamp
    Json,
}

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    #[command(flatten)]
    pub(crate) input: InputArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    pub(crate) format: SummaryFormat,

    /// Number of most positive / most negative pairs to show
    #[arg(long)]
    pub(crate) top: Option<usize>,
}

pub(crate) fn analyze(args: &AnalyzeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.input.pipeline_config(args.top)?;
    let top = config.top_pairs;
    let output = analyze_path(&args.input.path, config)?;

    let summary = AnalysisSummary::from_output(args.input.dataset_name(), &output, top);
    info!(sectors = summary.sector_count(), "analysis complete");

    match args.format {
        SummaryFormat::Text => print!("{}", summary.to_ascii_table()),
        SummaryFormat::Markdown => print!("{}", summary.to_markdown()),
        SummaryFormat::Json => println!("{}", Report::from_summary(&summary)?.to_json()?),
    }

    Ok(())
}

//! SectorLens CLI binary.
//!
//! Provides the command-line interface for sector growth, volatility and
//! correlation analysis.

mod commands;
mod settings;

use clap::{Parser, Subcommand};
use commands::{AnalyzeArgs, CorrelationsArgs, ExportArgs};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sectorlens")]
#[command(
    about = "SectorLens: sector growth, volatility and correlation analysis",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print risk/reward, volatility ranking and top correlations
    Analyze(AnalyzeArgs),

    /// Write clean, growth, risk/reward and correlation tables to a directory
    Export(ExportArgs),

    /// Print the most positively and negatively correlated sector pairs
    Correlations(CorrelationsArgs),
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Log to stderr so stdout carries only command output.
///
/// `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Analyze(args) => commands::analyze(&args)?,
        Commands::Export(args) => commands::export(&args)?,
        Commands::Correlations(args) => commands::correlations(&args)?,
    }

    Ok(())
}

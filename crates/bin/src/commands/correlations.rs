use super::InputArgs;
use clap::Args;
use sectorlens::analyze_path;
use sectorlens_metrics::CorrelationPair;

#[derive(Args, Debug)]
pub(crate) struct CorrelationsArgs {
    #[command(flatten)]
    pub(crate) input: InputArgs,

    /// Number of pairs to show at each end of the ranking
    #[arg(long)]
    pub(crate) top: Option<usize>,

    /// Only show pairs involving this sector
    #[arg(long)]
    pub(crate) sector: Option<String>,
}

pub(crate) fn correlations(args: &CorrelationsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.input.pipeline_config(args.top)?;
    let top = config.top_pairs;
    let output = analyze_path(&args.input.path, config)?;

    let involved = |pair: &&CorrelationPair| {
        args.sector
            .as_deref()
            .is_none_or(|sector| pair.involves(sector))
    };

    let ascending: Vec<&CorrelationPair> =
        output.correlations.ranked_ascending().into_iter().filter(involved).collect();
    let descending: Vec<&CorrelationPair> =
        output.correlations.ranked_descending().into_iter().filter(involved).collect();

    println!("Most positive correlations:");
    print_pairs(descending.iter().take(top).copied());
    println!();
    println!("Most negative correlations:");
    print_pairs(ascending.iter().take(top).copied());

    Ok(())
}

fn print_pairs<'a>(pairs: impl Iterator<Item = &'a CorrelationPair>) {
    let mut any = false;
    for pair in pairs {
        println!("  {pair}");
        any = true;
    }
    if !any {
        println!("  (no pairs with enough overlapping years)");
    }
}

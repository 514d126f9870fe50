//! Human-readable analysis summaries.
//!
//! An [`AnalysisSummary`] collects what the charts of a sector analysis show
//! (risk/reward per sector, the volatility ranking, quadrant placement and
//! the strongest correlations) and renders it for a terminal or as Markdown.

use sectorlens_metrics::{CorrelationPair, PipelineOutput, Quadrant, QuadrantThresholds};
use serde::Serialize;
use std::fmt;

/// Risk/reward line for one sector.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SectorSummary {
    /// Sector label.
    pub sector: String,

    /// Volatility of YoY growth, in percentage points.
    pub volatility: Option<f64>,

    /// Average YoY growth, in percent.
    pub average_growth: Option<f64>,

    /// Number of growth values behind the statistics.
    pub observations: usize,

    /// Placement against the cross-sector averages.
    pub quadrant: Option<Quadrant>,
}

/// Summary of one pipeline run.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnalysisSummary {
    /// Name of the analysed dataset, usually the input file name.
    pub name: String,

    /// First year column of the clean table.
    pub first_year: Option<String>,

    /// Last year column of the clean table.
    pub last_year: Option<String>,

    /// Number of year columns in the clean table.
    pub year_count: usize,

    /// Per-sector risk/reward, ordered by sector name.
    pub sectors: Vec<SectorSummary>,

    /// Sectors with a defined volatility, most volatile first.
    pub volatility_ranking: Vec<(String, f64)>,

    /// Quadrant split lines.
    pub thresholds: QuadrantThresholds,

    /// Most positively correlated pairs, strongest first.
    pub most_positive: Vec<CorrelationPair>,

    /// Most negatively correlated pairs, strongest first.
    pub most_negative: Vec<CorrelationPair>,
}

impl AnalysisSummary {
    /// Summarise `output`, keeping the `top` strongest correlations each way.
    pub fn from_output(name: impl Into<String>, output: &PipelineOutput, top: usize) -> Self {
        let risk_reward = &output.risk_reward;
        let thresholds = risk_reward.quadrant_thresholds();

        let sectors = risk_reward
            .iter()
            .map(|(sector, entry)| SectorSummary {
                sector: sector.to_string(),
                volatility: entry.volatility,
                average_growth: entry.average_growth,
                observations: entry.observations,
                quadrant: risk_reward.quadrant_with(sector, &thresholds),
            })
            .collect();

        let volatility_ranking = risk_reward
            .volatility_ranking()
            .into_iter()
            .map(|(sector, v)| (sector.to_string(), v))
            .collect();

        let years = output.clean.years();

        Self {
            name: name.into(),
            first_year: years.first().cloned(),
            last_year: years.last().cloned(),
            year_count: years.len(),
            sectors,
            volatility_ranking,
            thresholds,
            most_positive: output
                .correlations
                .most_positive(top)
                .into_iter()
                .cloned()
                .collect(),
            most_negative: output
                .correlations
                .most_negative(top)
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    /// Number of sectors in the summary.
    pub fn sector_count(&self) -> usize {
        self.sectors.len()
    }

    fn period(&self) -> String {
        match (&self.first_year, &self.last_year) {
            (Some(first), Some(last)) => format!("{first} to {last}"),
            _ => "no years".to_string(),
        }
    }

    /// Format as ASCII table for terminal display.
    pub fn to_ascii_table(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("\nSector Analysis: {}\n", self.name));
        output.push_str(&format!(
            "Period: {} ({} sectors, {} years)\n",
            self.period(),
            self.sector_count(),
            self.year_count
        ));
        output.push_str(&"=".repeat(80));
        output.push('\n');

        output.push_str("\nRisk / Reward:\n");
        output.push_str(&"-".repeat(80));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>12} {:>12} {:>6}  {}\n",
            "Sector", "Volatility", "Avg Growth", "Obs", "Quadrant"
        ));
        output.push_str(&"-".repeat(80));
        output.push('\n');
        for row in &self.sectors {
            output.push_str(&format!(
                "{:<28} {:>12} {:>12} {:>6}  {}\n",
                row.sector,
                fmt_pct(row.volatility),
                fmt_pct(row.average_growth),
                row.observations,
                row.quadrant.map(|q| q.label()).unwrap_or("-")
            ));
        }
        output.push_str(&format!(
            "\n  Mean volatility: {}   Mean growth: {}\n",
            fmt_pct(self.thresholds.volatility),
            fmt_pct(self.thresholds.average_growth)
        ));

        if !self.volatility_ranking.is_empty() {
            output.push_str("\nVolatility Ranking:\n");
            output.push_str(&"-".repeat(80));
            output.push('\n');
            for (rank, (sector, volatility)) in self.volatility_ranking.iter().enumerate() {
                output.push_str(&format!(
                    "{:>3}. {:<28} {:>11.2}%\n",
                    rank + 1,
                    sector,
                    volatility
                ));
            }
        }

        push_ascii_pairs(&mut output, "Most Positive Correlations", &self.most_positive);
        push_ascii_pairs(&mut output, "Most Negative Correlations", &self.most_negative);

        output.push_str(&"=".repeat(80));
        output.push('\n');

        output
    }

    /// Format as Markdown for documentation.
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("# Sector Analysis: {}\n\n", self.name));
        output.push_str(&format!(
            "**Period:** {} ({} sectors, {} years)\n\n",
            self.period(),
            self.sector_count(),
            self.year_count
        ));

        output.push_str("## Risk / Reward\n\n");
        output.push_str("| Sector | Volatility | Avg Growth | Obs | Quadrant |\n");
        output.push_str("|--------|------------|------------|-----|----------|\n");
        for row in &self.sectors {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                row.sector,
                fmt_pct(row.volatility),
                fmt_pct(row.average_growth),
                row.observations,
                row.quadrant.map(|q| q.label()).unwrap_or("-")
            ));
        }
        output.push_str(&format!(
            "\n- **Mean volatility:** {}\n- **Mean growth:** {}\n\n",
            fmt_pct(self.thresholds.volatility),
            fmt_pct(self.thresholds.average_growth)
        ));

        if !self.volatility_ranking.is_empty() {
            output.push_str("## Volatility Ranking\n\n");
            for (rank, (sector, volatility)) in self.volatility_ranking.iter().enumerate() {
                output.push_str(&format!("{}. {} ({:.2}%)\n", rank + 1, sector, volatility));
            }
            output.push('\n');
        }

        push_markdown_pairs(&mut output, "Most Positive Correlations", &self.most_positive);
        push_markdown_pairs(&mut output, "Most Negative Correlations", &self.most_negative);

        output
    }
}

impl fmt::Display for AnalysisSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sector Analysis: {} ({})", self.name, self.period())?;
        writeln!(f, "  Sectors: {}", self.sector_count())?;
        if let Some((sector, volatility)) = self.volatility_ranking.first() {
            writeln!(f, "  Most volatile: {sector} ({volatility:.2}%)")?;
        }
        if let Some(pair) = self.most_positive.first() {
            writeln!(f, "  Strongest positive: {pair}")?;
        }
        if let Some(pair) = self.most_negative.first() {
            writeln!(f, "  Strongest negative: {pair}")?;
        }
        Ok(())
    }
}

fn fmt_pct(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}%"))
}

fn push_ascii_pairs(output: &mut String, title: &str, pairs: &[CorrelationPair]) {
    if pairs.is_empty() {
        return;
    }
    output.push_str(&format!("\n{title}:\n"));
    output.push_str(&"-".repeat(80));
    output.push('\n');
    output.push_str(&format!("{:<56} {:>12} {:>8}\n", "Pair", "Correlation", "Years"));
    output.push_str(&"-".repeat(80));
    output.push('\n');
    for pair in pairs {
        output.push_str(&format!(
            "{:<56} {:>12.4} {:>8}\n",
            pair.label(),
            pair.coefficient,
            pair.overlap
        ));
    }
}

fn push_markdown_pairs(output: &mut String, title: &str, pairs: &[CorrelationPair]) {
    if pairs.is_empty() {
        return;
    }
    output.push_str(&format!("## {title}\n\n"));
    output.push_str("| Pair | Correlation | Years |\n");
    output.push_str("|------|-------------|-------|\n");
    for pair in pairs {
        output.push_str(&format!(
            "| {} | {:.4} | {} |\n",
            pair.label(),
            pair.coefficient,
            pair.overlap
        ));
    }
    output.push('\n');
}

//! Run every scenario in a CSV file and write one summary row per scenario
//!
//! Usage: run_batch --input scenarios.csv --output summaries.csv

use anyhow::{Context, Result};
use clap::Parser;
use compound_growth::inputs::load_scenarios;
use compound_growth::ScenarioRunner;
use log::info;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "run_batch")]
#[command(about = "Project every scenario in a CSV file", long_about = None)]
struct Cli {
    /// Scenario CSV: name,initial_amount,rate_percent,rate_period,deposit,periods
    #[arg(long, short = 'i')]
    input: PathBuf,

    #[arg(long, short = 'o', default_value = "batch_summaries.csv")]
    output: PathBuf,
}

#[derive(Debug, Serialize)]
struct SummaryRow {
    name: String,
    periods: u32,
    final_balance: Option<f64>,
    total_interest: Option<f64>,
    total_interest_pct: Option<f64>,
    error: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let start = Instant::now();

    let scenarios = load_scenarios(&cli.input)
        .with_context(|| format!("failed to load scenarios from {}", cli.input.display()))?;
    info!("loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let runner = ScenarioRunner::new();
    let results = runner.run_batch(&scenarios);

    let mut writer = csv::Writer::from_path(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;
    let mut failures = 0;

    for (scenario, result) in scenarios.iter().zip(&results) {
        let row = match result {
            Ok(result) => {
                let summary = result.summary();
                SummaryRow {
                    name: scenario.label(),
                    periods: summary.periods,
                    final_balance: Some(summary.final_balance),
                    total_interest: Some(summary.total_interest),
                    total_interest_pct: Some(summary.total_interest_pct),
                    error: None,
                }
            }
            Err(e) => {
                failures += 1;
                SummaryRow {
                    name: scenario.label(),
                    periods: scenario.periods,
                    final_balance: None,
                    total_interest: None,
                    total_interest_pct: None,
                    error: Some(e.to_string()),
                }
            }
        };
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!(
        "Projected {} scenarios ({} failed) in {:?}; summaries written to {}",
        scenarios.len(),
        failures,
        start.elapsed(),
        cli.output.display()
    );

    Ok(())
}

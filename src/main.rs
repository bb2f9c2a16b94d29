//! Compound growth calculator CLI
//!
//! Projects a balance under periodic compounding with optional end-of-period
//! deposits and prints the results table, growth chart and summary.

use anyhow::{bail, Context, Result};
use clap::Parser;
use compound_growth::{
    report, OutputFormat, RatePeriod, RawScenario, ReportConfig, Scenario,
};
use compound_growth::report::Locale;
use log::info;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "compound-calc")]
#[command(about = "Project compound growth with recurring deposits", long_about = None)]
struct Cli {
    /// Initial amount; thousands separators allowed (e.g. 10,000)
    #[arg(long, short = 'i', allow_hyphen_values = true)]
    initial: String,

    /// Nominal interest rate in percent
    #[arg(long, short = 'r', allow_hyphen_values = true)]
    rate: String,

    /// Rate period; monthly divides the rate across twelve periods
    #[arg(long, value_enum, default_value_t = RatePeriod::Monthly)]
    rate_period: RatePeriod,

    /// Deposit added at the end of every period; negative for withdrawals
    #[arg(long, short = 'd', default_value = "0.00", allow_hyphen_values = true)]
    deposit: String,

    /// Number of periods to project
    #[arg(long, short = 'n', default_value = "1", allow_hyphen_values = true)]
    periods: String,

    #[arg(long, value_enum, env = "COMPOUND_CALC_FORMAT", default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[arg(long, value_enum, env = "COMPOUND_CALC_LOCALE", default_value_t = Locale::He)]
    locale: Locale,

    /// JSON file with label overrides
    #[arg(long, env = "COMPOUND_CALC_LABELS")]
    labels: Option<PathBuf>,

    /// Show only the first N table rows
    #[arg(long)]
    max_rows: Option<usize>,

    #[arg(long)]
    no_chart: bool,

    #[arg(long, default_value_t = 60)]
    chart_width: usize,

    #[arg(long, default_value_t = 12)]
    chart_height: usize,
}

impl Cli {
    fn report_config(&self) -> ReportConfig {
        ReportConfig {
            locale: self.locale,
            format: self.format,
            max_rows: self.max_rows,
            show_chart: !self.no_chart,
            chart_width: self.chart_width,
            chart_height: self.chart_height,
            labels_path: self.labels.clone(),
        }
    }

    fn raw_scenario(&self) -> RawScenario {
        RawScenario {
            name: None,
            initial_amount: self.initial.clone(),
            rate_percent: self.rate.clone(),
            rate_period: self.rate_period,
            deposit: self.deposit.clone(),
            periods: self.periods.clone(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.report_config();
    let labels = config.labels().context("failed to load labels")?;

    let scenario = match Scenario::from_raw(&cli.raw_scenario()) {
        Ok(scenario) => scenario,
        Err(e) => bail!("{}", labels.describe_error(&e)),
    };
    info!("calculating {}", scenario.label());

    let result = scenario.project().context("projection failed")?;
    let output = report::render(&config, &labels, &scenario, &result)?;
    print!("{output}");

    Ok(())
}

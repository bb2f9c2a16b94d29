//! Presentation of projection results: labels, table, chart, summary, exports

mod chart;
mod format;
mod labels;
mod table;

pub use chart::{growth_series, render_chart};
pub use format::{format_amount, format_percent};
pub use labels::{LabelKey, Labels, Locale};
pub use table::{render_summary, render_table, write_csv};

use serde::Serialize;
use thiserror::Error;

use crate::config::{OutputFormat, ReportConfig};
use crate::inputs::Scenario;
use crate::projection::{ProjectionInput, ProjectionResult, ProjectionRow, ProjectionSummary};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything shown for one calculation, in a serializable form
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionReport<'a> {
    pub scenario: &'a Scenario,
    pub input: ProjectionInput,
    pub summary: ProjectionSummary,
    pub rows: &'a [ProjectionRow],
}

impl<'a> ProjectionReport<'a> {
    pub fn new(scenario: &'a Scenario, result: &'a ProjectionResult) -> Self {
        Self {
            scenario,
            input: result.input,
            summary: result.summary(),
            rows: &result.rows,
        }
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Render a finished calculation in the configured output format
pub fn render(
    config: &ReportConfig,
    labels: &Labels,
    scenario: &Scenario,
    result: &ProjectionResult,
) -> Result<String, ReportError> {
    match config.format {
        OutputFormat::Json => ProjectionReport::new(scenario, result).to_json(),
        OutputFormat::Csv => {
            let mut buf = Vec::new();
            write_csv(result, &mut buf)?;
            Ok(String::from_utf8_lossy(&buf).into_owned())
        }
        OutputFormat::Table => {
            let mut out = format!("{}\n", labels.get(LabelKey::AppTitle));
            out.push_str(&format!(
                "{}: {}  {}: {}% ({})  {}: {}  {}: {}\n",
                labels.get(LabelKey::InitialAmount),
                format_amount(scenario.initial_amount),
                labels.get(LabelKey::InterestRate),
                scenario.rate_percent,
                labels.rate_period(scenario.rate_period),
                labels.get(LabelKey::Deposit),
                format_amount(scenario.deposit),
                labels.get(LabelKey::NumberOfPeriods),
                scenario.periods,
            ));
            out.push('\n');
            out.push_str(&render_table(result, labels, config.max_rows));

            if config.show_chart {
                out.push_str(&format!("\n{}\n", labels.get(LabelKey::GrowthOverTime)));
                out.push_str(&render_chart(result, config.chart_width, config.chart_height));
            }

            out.push('\n');
            out.push_str(&render_summary(&result.summary(), labels));
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::RatePeriod;

    fn scenario() -> Scenario {
        Scenario::new(1000.0, 10.0, RatePeriod::Annual, 0.0, 3).unwrap()
    }

    #[test]
    fn test_json_report() {
        let scenario = scenario();
        let result = scenario.project().unwrap();
        let json = ProjectionReport::new(&scenario, &result).to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"]["final_balance"], 1331.0);
        assert_eq!(value["summary"]["total_interest"], 331.0);
        assert_eq!(value["rows"].as_array().unwrap().len(), 3);
        assert_eq!(value["rows"][2]["interest_earned"], 121.0);
        assert_eq!(value["scenario"]["rate_period"], "annual");
    }

    #[test]
    fn test_render_table_format() {
        let scenario = scenario();
        let result = scenario.project().unwrap();
        let config = ReportConfig {
            locale: Locale::En,
            ..ReportConfig::default()
        };
        let labels = Labels::for_locale(Locale::En);

        let text = render(&config, &labels, &scenario, &result).unwrap();
        assert!(text.starts_with("Interest Calculator\n"));
        assert!(text.contains("Results"));
        assert!(text.contains("Growth over time"));
        assert!(text.contains("Final balance: 1,331.00"));
    }

    #[test]
    fn test_render_without_chart() {
        let scenario = scenario();
        let result = scenario.project().unwrap();
        let config = ReportConfig {
            show_chart: false,
            ..ReportConfig::default()
        };
        let labels = Labels::for_locale(Locale::He);

        let text = render(&config, &labels, &scenario, &result).unwrap();
        assert!(!text.contains("צמיחה לאורך זמן"));
        assert!(text.contains("סכום סופי: 1,331.00"));
    }

    #[test]
    fn test_render_csv_format() {
        let scenario = scenario();
        let result = scenario.project().unwrap();
        let config = ReportConfig {
            format: OutputFormat::Csv,
            ..ReportConfig::default()
        };

        let text = render(&config, &Labels::default(), &scenario, &result).unwrap();
        assert_eq!(text.lines().count(), 4);
    }
}

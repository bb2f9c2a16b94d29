//! Load scenarios from CSV
//!
//! Expected header: `name,initial_amount,rate_percent,rate_period,deposit,periods`.
//! Numeric columns are kept as text so they go through the same parsing and
//! validation as interactive input (thousands separators included).

use csv::{Reader, ReaderBuilder};
use log::debug;
use std::path::Path;

use super::{InputError, RawScenario, Scenario};

/// Raw CSV row matching the scenario file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(default)]
    name: String,
    initial_amount: String,
    rate_percent: String,
    rate_period: String,
    #[serde(default)]
    deposit: String,
    periods: String,
}

impl CsvRow {
    fn to_scenario(self) -> Result<Scenario, InputError> {
        let name = self.name.trim();
        let raw = RawScenario {
            name: (!name.is_empty()).then(|| name.to_string()),
            initial_amount: self.initial_amount,
            rate_percent: self.rate_percent,
            rate_period: self.rate_period.parse()?,
            deposit: self.deposit,
            periods: self.periods,
        };
        Scenario::from_raw(&raw)
    }
}

fn read_all<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<Scenario>, InputError> {
    let headers = reader.headers()?.clone();
    let mut scenarios = Vec::new();

    for result in reader.records() {
        let record = result?;
        // Quoted fields may span lines, so take the line from the reader
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let row: CsvRow = record.deserialize(Some(&headers))?;
        let scenario = row.to_scenario().map_err(|e| InputError::Row {
            line,
            source: Box::new(e),
        })?;
        scenarios.push(scenario);
    }

    debug!("loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, InputError> {
    let reader = ReaderBuilder::new().trim(csv::Trim::Headers).from_path(path)?;
    read_all(reader)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Scenario>, InputError> {
    let csv_reader = ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);
    read_all(csv_reader)
}

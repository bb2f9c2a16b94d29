//! User-entered scenarios: text parsing, validation and rate normalization
//!
//! The projection engine works on a per-period fractional rate. Users enter a
//! nominal percentage and pick how often it compounds; this module turns that
//! request into a [`ProjectionInput`], rejecting anything unusable with an
//! [`InputError`] instead of substituting defaults.

pub mod loader;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::projection::{ProjectionError, ProjectionInput, ProjectionResult};

pub use loader::{load_scenarios, load_scenarios_from_reader};

/// Why a scenario could not be turned into a projection
#[derive(Debug, Error)]
pub enum InputError {
    #[error("{field} is not a valid number: {value:?}")]
    Parse { field: &'static str, value: String },

    #[error("{field} must be greater than 0")]
    NotPositive { field: &'static str },

    #[error("{field} is too large: {value}")]
    TooLarge { field: &'static str, value: String },

    #[error("unknown rate period {0:?} (expected monthly or annual)")]
    UnknownRatePeriod(String),

    #[error("line {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: Box<InputError>,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// How often the entered nominal rate compounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RatePeriod {
    /// Annual rate split evenly across twelve monthly periods
    #[default]
    Monthly,
    /// Annual rate applied once per yearly period
    #[value(alias = "yearly")]
    Annual,
}

impl RatePeriod {
    /// Convert a nominal percentage into the fractional rate for one period
    pub fn rate_per_period(self, rate_percent: f64) -> f64 {
        match self {
            RatePeriod::Monthly => rate_percent / 12.0 / 100.0,
            RatePeriod::Annual => rate_percent / 100.0,
        }
    }
}

impl FromStr for RatePeriod {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(RatePeriod::Monthly),
            "annual" | "yearly" => Ok(RatePeriod::Annual),
            _ => Err(InputError::UnknownRatePeriod(s.to_string())),
        }
    }
}

impl fmt::Display for RatePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatePeriod::Monthly => write!(f, "monthly"),
            RatePeriod::Annual => write!(f, "annual"),
        }
    }
}

fn strip_separators(text: &str) -> String {
    text.trim().replace(',', "")
}

/// Parse an amount that may contain `,` thousands separators
pub fn parse_amount(field: &'static str, text: &str) -> Result<f64, InputError> {
    let cleaned = strip_separators(text);
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::Parse {
            field,
            value: text.to_string(),
        }),
    }
}

/// Parse a whole, positive number of periods
pub fn parse_period_count(text: &str) -> Result<u32, InputError> {
    const FIELD: &str = "number of periods";

    let cleaned = strip_separators(text);
    let value: i64 = cleaned.parse().map_err(|_| InputError::Parse {
        field: FIELD,
        value: text.to_string(),
    })?;

    if value <= 0 {
        return Err(InputError::NotPositive { field: FIELD });
    }

    u32::try_from(value).map_err(|_| InputError::TooLarge {
        field: FIELD,
        value: text.to_string(),
    })
}

/// Scenario fields exactly as the user typed them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawScenario {
    pub name: Option<String>,
    pub initial_amount: String,
    pub rate_percent: String,
    pub rate_period: RatePeriod,
    /// Optional; blank means no deposits
    pub deposit: String,
    pub periods: String,
}

/// A validated compounding request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: Option<String>,
    pub initial_amount: f64,
    /// Nominal rate in percent (5.0 = 5%)
    pub rate_percent: f64,
    pub rate_period: RatePeriod,
    pub deposit: f64,
    pub periods: u32,
}

impl Scenario {
    /// Build a scenario from already-numeric values, applying the same range checks as text input
    pub fn new(
        initial_amount: f64,
        rate_percent: f64,
        rate_period: RatePeriod,
        deposit: f64,
        periods: u32,
    ) -> Result<Self, InputError> {
        let scenario = Self {
            name: None,
            initial_amount,
            rate_percent,
            rate_period,
            deposit,
            periods,
        };
        scenario.validate()?;
        Ok(scenario)
    }

    /// Parse and validate a scenario typed into text fields
    pub fn from_raw(raw: &RawScenario) -> Result<Self, InputError> {
        let initial_amount = parse_amount("initial amount", &raw.initial_amount)?;
        let rate_percent = parse_amount("interest rate", &raw.rate_percent)?;
        let deposit = if raw.deposit.trim().is_empty() {
            0.0
        } else {
            parse_amount("deposit", &raw.deposit)?
        };
        let periods = parse_period_count(&raw.periods)?;

        let scenario = Self {
            name: raw.name.clone(),
            initial_amount,
            rate_percent,
            rate_period: raw.rate_period,
            deposit,
            periods,
        };
        scenario.validate()?;
        Ok(scenario)
    }

    /// Range checks in the order the form reports them: principal, rate, periods
    pub fn validate(&self) -> Result<(), InputError> {
        for (field, value) in [
            ("initial amount", self.initial_amount),
            ("interest rate", self.rate_percent),
            ("deposit", self.deposit),
        ] {
            if !value.is_finite() {
                return Err(InputError::Parse {
                    field,
                    value: value.to_string(),
                });
            }
        }

        if self.initial_amount <= 0.0 {
            return Err(InputError::NotPositive { field: "initial amount" });
        }
        if self.rate_percent <= 0.0 {
            return Err(InputError::NotPositive { field: "interest rate" });
        }
        if self.periods == 0 {
            return Err(InputError::NotPositive { field: "number of periods" });
        }
        Ok(())
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Display name, falling back to a description of the parameters
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!(
                "{} @ {}% {} x{}",
                self.initial_amount, self.rate_percent, self.rate_period, self.periods
            ),
        }
    }

    /// Normalize into the engine's per-period input
    pub fn to_projection_input(&self) -> ProjectionInput {
        ProjectionInput {
            initial_amount: self.initial_amount,
            rate_per_period: self.rate_period.rate_per_period(self.rate_percent),
            deposit_per_period: self.deposit,
            period_count: self.periods,
        }
    }

    pub fn project(&self) -> Result<ProjectionResult, ProjectionError> {
        self.to_projection_input().project()
    }
}

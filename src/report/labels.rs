//! Localized display labels
//!
//! Labels are plain data: a map from [`LabelKey`] to text. Built-in Hebrew and
//! English sets can be partially overridden from a JSON object such as
//! `{"final_balance": "Balance at maturity"}`.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::ReportError;
use crate::inputs::{InputError, RatePeriod};

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    He,
    En,
}

impl Locale {
    /// Whether text in this locale reads right to left
    pub fn is_rtl(self) -> bool {
        matches!(self, Locale::He)
    }
}

/// Every user-visible label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKey {
    AppTitle,
    InitialAmount,
    RatePeriod,
    Monthly,
    Annual,
    InterestRate,
    Deposit,
    NumberOfPeriods,
    ResultsTable,
    Period,
    EndingBalance,
    InterestEarned,
    GrowthOverTime,
    Summary,
    FinalBalance,
    TotalInterest,
    TotalInterestPct,
    MoreRows,
    InitialAmountNotPositive,
    RateNotPositive,
    PeriodsNotPositive,
    InvalidNumber,
}

impl LabelKey {
    pub const ALL: [LabelKey; 22] = [
        LabelKey::AppTitle,
        LabelKey::InitialAmount,
        LabelKey::RatePeriod,
        LabelKey::Monthly,
        LabelKey::Annual,
        LabelKey::InterestRate,
        LabelKey::Deposit,
        LabelKey::NumberOfPeriods,
        LabelKey::ResultsTable,
        LabelKey::Period,
        LabelKey::EndingBalance,
        LabelKey::InterestEarned,
        LabelKey::GrowthOverTime,
        LabelKey::Summary,
        LabelKey::FinalBalance,
        LabelKey::TotalInterest,
        LabelKey::TotalInterestPct,
        LabelKey::MoreRows,
        LabelKey::InitialAmountNotPositive,
        LabelKey::RateNotPositive,
        LabelKey::PeriodsNotPositive,
        LabelKey::InvalidNumber,
    ];
}

fn hebrew(key: LabelKey) -> &'static str {
    match key {
        LabelKey::AppTitle => "מחשבון ריבית",
        LabelKey::InitialAmount => "סכום התחלתי",
        LabelKey::RatePeriod => "תקופת הריבית",
        LabelKey::Monthly => "חודשי",
        LabelKey::Annual => "שנתי",
        LabelKey::InterestRate => "ריבית (%)",
        LabelKey::Deposit => "הפקדה חודשית (אופציונלי)",
        LabelKey::NumberOfPeriods => "מספר תקופות",
        LabelKey::ResultsTable => "טבלת תוצאות",
        LabelKey::Period => "תקופה",
        LabelKey::EndingBalance => "סכום בסוף",
        LabelKey::InterestEarned => "ריבית בסוף",
        LabelKey::GrowthOverTime => "צמיחה לאורך זמן",
        LabelKey::Summary => "סיכום",
        LabelKey::FinalBalance => "סכום סופי",
        LabelKey::TotalInterest => "סך הריבית שנצברה",
        LabelKey::TotalInterestPct => "סך שיעור הריבית (%)",
        LabelKey::MoreRows => "תקופות נוספות",
        LabelKey::InitialAmountNotPositive => "סכום התחלתי חייב להיות גדול מ-0",
        LabelKey::RateNotPositive => "הריבית חייבת להיות גדולה מ-0",
        LabelKey::PeriodsNotPositive => "מספר התקופות חייב להיות גדול מ-0",
        LabelKey::InvalidNumber => "ערך מספרי לא תקין",
    }
}

fn english(key: LabelKey) -> &'static str {
    match key {
        LabelKey::AppTitle => "Interest Calculator",
        LabelKey::InitialAmount => "Initial amount",
        LabelKey::RatePeriod => "Interest period",
        LabelKey::Monthly => "Monthly",
        LabelKey::Annual => "Annual",
        LabelKey::InterestRate => "Interest rate (%)",
        LabelKey::Deposit => "Monthly deposit (optional)",
        LabelKey::NumberOfPeriods => "Number of periods",
        LabelKey::ResultsTable => "Results",
        LabelKey::Period => "Period",
        LabelKey::EndingBalance => "Ending balance",
        LabelKey::InterestEarned => "Interest earned",
        LabelKey::GrowthOverTime => "Growth over time",
        LabelKey::Summary => "Summary",
        LabelKey::FinalBalance => "Final balance",
        LabelKey::TotalInterest => "Total interest earned",
        LabelKey::TotalInterestPct => "Total interest rate (%)",
        LabelKey::MoreRows => "more periods",
        LabelKey::InitialAmountNotPositive => "Initial amount must be greater than 0",
        LabelKey::RateNotPositive => "Interest rate must be greater than 0",
        LabelKey::PeriodsNotPositive => "Number of periods must be greater than 0",
        LabelKey::InvalidNumber => "Invalid numeric input",
    }
}

/// Label set for one locale
#[derive(Debug, Clone)]
pub struct Labels {
    locale: Locale,
    text: HashMap<LabelKey, String>,
}

impl Labels {
    /// Built-in labels for a locale
    pub fn for_locale(locale: Locale) -> Self {
        let lookup = match locale {
            Locale::He => hebrew,
            Locale::En => english,
        };
        let text = LabelKey::ALL
            .iter()
            .map(|&key| (key, lookup(key).to_string()))
            .collect();
        Self { locale, text }
    }

    /// Built-in labels for a locale, overridden by entries from a JSON file
    pub fn from_json_path(locale: Locale, path: &Path) -> Result<Self, ReportError> {
        let file = File::open(path)?;
        let mut labels = Self::for_locale(locale);
        labels.overlay_json(BufReader::new(file))?;
        Ok(labels)
    }

    /// Replace labels with the entries of a JSON object
    pub fn overlay_json<R: std::io::Read>(&mut self, reader: R) -> Result<(), ReportError> {
        let overrides: HashMap<LabelKey, String> = serde_json::from_reader(reader)?;
        self.text.extend(overrides);
        Ok(())
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn get(&self, key: LabelKey) -> &str {
        self.text.get(&key).map(String::as_str).unwrap_or_default()
    }

    pub fn rate_period(&self, period: RatePeriod) -> &str {
        match period {
            RatePeriod::Monthly => self.get(LabelKey::Monthly),
            RatePeriod::Annual => self.get(LabelKey::Annual),
        }
    }

    /// User-facing message for a validation failure
    pub fn describe_error(&self, err: &InputError) -> String {
        match err {
            InputError::NotPositive { field: "initial amount" } => {
                self.get(LabelKey::InitialAmountNotPositive).to_string()
            }
            InputError::NotPositive { field: "interest rate" } => {
                self.get(LabelKey::RateNotPositive).to_string()
            }
            InputError::NotPositive { field: "number of periods" } => {
                self.get(LabelKey::PeriodsNotPositive).to_string()
            }
            InputError::Parse { value, .. } => {
                format!("{}: {:?}", self.get(LabelKey::InvalidNumber), value)
            }
            InputError::Row { line, source } => format!("{line}: {}", self.describe_error(source)),
            other => other.to_string(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

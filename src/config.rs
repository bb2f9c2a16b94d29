//! Output configuration for rendering projection results

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::report::{Labels, Locale, ReportError};

/// How results are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Title, results table, growth chart and summary
    #[default]
    Table,
    /// Ledger rows only
    Csv,
    /// Scenario, summary and rows as one JSON document
    Json,
}

/// Settings for one rendering of a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub locale: Locale,

    pub format: OutputFormat,

    /// Truncate the text table after this many rows
    pub max_rows: Option<usize>,

    /// Include the growth chart in table output
    pub show_chart: bool,

    pub chart_width: usize,

    pub chart_height: usize,

    /// JSON file overriding individual labels
    pub labels_path: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            locale: Locale::He,
            format: OutputFormat::Table,
            max_rows: None,
            show_chart: true,
            chart_width: 60,
            chart_height: 12,
            labels_path: None,
        }
    }
}

impl ReportConfig {
    /// Labels for the configured locale, with file overrides applied
    pub fn labels(&self) -> Result<Labels, ReportError> {
        match &self.labels_path {
            Some(path) => Labels::from_json_path(self.locale, path),
            None => Ok(Labels::for_locale(self.locale)),
        }
    }
}

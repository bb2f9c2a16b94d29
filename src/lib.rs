//! Compound Growth - projection engine for periodic compounding with recurring deposits
//!
//! This library provides:
//! - The per-period projection engine (interest first, deposit at period end)
//! - Parsing, validation and rate normalization of user-entered scenarios
//! - Batch scenario runs over CSV input
//! - Report rendering: localized labels, result table, growth chart, summary metrics

pub mod config;
pub mod inputs;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use config::{OutputFormat, ReportConfig};
pub use inputs::{InputError, RatePeriod, RawScenario, Scenario};
pub use projection::{
    project, ProjectionError, ProjectionInput, ProjectionResult, ProjectionRow, ProjectionSummary,
};
pub use report::{Labels, Locale, ProjectionReport, ReportError};
pub use scenario::ScenarioRunner;

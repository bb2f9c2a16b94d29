//! Scenario runner for batch projections
//!
//! Every projection is independent; batches are spread over the rayon pool and
//! returned in input order.

use log::{debug, warn};
use rayon::prelude::*;

use crate::inputs::Scenario;
use crate::projection::{ProjectionError, ProjectionResult};

/// Runs validated scenarios through the projection engine
///
/// # Example
/// ```
/// use compound_growth::{RatePeriod, Scenario, ScenarioRunner};
///
/// let runner = ScenarioRunner::new();
/// let scenario = Scenario::new(1000.0, 10.0, RatePeriod::Annual, 0.0, 3).unwrap();
/// let results = runner.run_rates(&scenario, &[5.0, 10.0]);
/// assert_eq!(results.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    /// Log each failed scenario at warn level
    warn_on_failure: bool,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self {
            warn_on_failure: true,
        }
    }

    /// Runner that leaves failure reporting entirely to the caller
    pub fn quiet() -> Self {
        Self {
            warn_on_failure: false,
        }
    }

    /// Run a single scenario
    pub fn run(&self, scenario: &Scenario) -> Result<ProjectionResult, ProjectionError> {
        let result = scenario.project();
        if let Err(e) = &result {
            if self.warn_on_failure {
                warn!("scenario {:?} failed: {}", scenario.label(), e);
            }
        }
        result
    }

    /// Run many scenarios in parallel; output order matches input order
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<Result<ProjectionResult, ProjectionError>> {
        debug!("running batch of {} scenarios", scenarios.len());
        scenarios.par_iter().map(|s| self.run(s)).collect()
    }

    /// Run one scenario at several nominal rates (in percent)
    pub fn run_rates(
        &self,
        scenario: &Scenario,
        rate_percents: &[f64],
    ) -> Vec<Result<ProjectionResult, ProjectionError>> {
        rate_percents
            .par_iter()
            .map(|&rate_percent| {
                let variant = Scenario {
                    rate_percent,
                    ..scenario.clone()
                };
                self.run(&variant)
            })
            .collect()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

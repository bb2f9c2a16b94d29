//! Ledger output structures for projections

use serde::{Deserialize, Serialize};

use super::engine::ProjectionInput;

/// A single row of projection output for one period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    /// 1-based period number
    pub period_index: u32,

    /// Balance after this period's interest and deposit
    pub ending_balance: f64,

    /// Interest earned in this period only
    pub interest_earned: f64,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Input the ledger was produced from
    pub input: ProjectionInput,

    /// Per-period rows, ascending by period
    pub rows: Vec<ProjectionRow>,

    /// Ending balance of the last row
    pub final_balance: f64,

    /// Interest accumulated across all rows, in period order
    pub total_interest: f64,
}

impl ProjectionResult {
    /// Number of projected periods
    pub fn period_count(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let initial_amount = self.input.initial_amount;
        let total_interest_pct = if initial_amount > 0.0 {
            self.total_interest / initial_amount * 100.0
        } else {
            0.0
        };

        ProjectionSummary {
            periods: self.period_count(),
            initial_amount,
            total_deposits: self.input.deposit_per_period * self.period_count() as f64,
            final_balance: self.final_balance,
            total_interest: self.total_interest,
            total_interest_pct,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub periods: u32,
    pub initial_amount: f64,
    pub total_deposits: f64,
    pub final_balance: f64,
    pub total_interest: f64,
    /// Total interest as a percentage of the initial amount (0 when that is 0)
    pub total_interest_pct: f64,
}

#[cfg(test)]
mod tests {
    use crate::projection::project;
    use approx::assert_relative_eq;

    #[test]
    fn test_summary_metrics() {
        let summary = project(1000.0, 0.05, 100.0, 2).unwrap().summary();

        assert_eq!(summary.periods, 2);
        assert_eq!(summary.initial_amount, 1000.0);
        assert_eq!(summary.total_deposits, 200.0);
        assert_eq!(summary.final_balance, 1307.5);
        assert_eq!(summary.total_interest, 107.5);
        assert_relative_eq!(summary.total_interest_pct, 10.75, epsilon = 1e-12);
    }

    #[test]
    fn test_interest_pct_is_zero_without_principal() {
        let summary = project(0.0, 0.02, 100.0, 12).unwrap().summary();

        assert!(summary.total_interest > 0.0);
        assert_eq!(summary.total_interest_pct, 0.0);
    }

    #[test]
    fn test_summary_balance_reconciles() {
        // Final balance is principal plus deposits plus interest
        let summary = project(2500.0, 0.004, 80.0, 60).unwrap().summary();
        assert_relative_eq!(
            summary.final_balance,
            summary.initial_amount + summary.total_deposits + summary.total_interest,
            max_relative = 1e-12
        );
    }
}

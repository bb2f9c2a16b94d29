//! Core projection engine: per-period compounding with end-of-period deposits

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ledger::ProjectionResult;
use super::state::ProjectionState;

/// Reasons a projection is refused before any row is produced
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error("period count must be at least 1, got {0}")]
    InvalidPeriodCount(u32),

    #[error("invalid numeric input: {field} is {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("initial amount must not be negative, got {0}")]
    NegativePrincipal(f64),

    #[error("balance overflowed in period {period}")]
    Overflow { period: u32 },
}

/// A compounding scenario with the rate already normalized to one period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Starting principal
    pub initial_amount: f64,

    /// Fractional rate applied once per period (0.01 = 1%)
    pub rate_per_period: f64,

    /// Amount added at the end of each period; negative for withdrawals
    pub deposit_per_period: f64,

    /// Number of periods to project
    pub period_count: u32,
}

impl ProjectionInput {
    pub fn new(
        initial_amount: f64,
        rate_per_period: f64,
        deposit_per_period: f64,
        period_count: u32,
    ) -> Self {
        Self {
            initial_amount,
            rate_per_period,
            deposit_per_period,
            period_count,
        }
    }

    /// Check the input can produce a meaningful ledger
    pub fn validate(&self) -> Result<(), ProjectionError> {
        let fields = [
            ("initial_amount", self.initial_amount),
            ("rate_per_period", self.rate_per_period),
            ("deposit_per_period", self.deposit_per_period),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ProjectionError::NonFinite { field, value });
            }
        }

        if self.initial_amount < 0.0 {
            return Err(ProjectionError::NegativePrincipal(self.initial_amount));
        }

        if self.period_count < 1 {
            return Err(ProjectionError::InvalidPeriodCount(self.period_count));
        }

        Ok(())
    }

    /// Run the projection for this input
    pub fn project(&self) -> Result<ProjectionResult, ProjectionError> {
        self.validate()?;

        debug!(
            "projecting {} periods: initial={} rate={} deposit={}",
            self.period_count, self.initial_amount, self.rate_per_period, self.deposit_per_period
        );

        let mut state = ProjectionState::from_input(self);
        let mut rows = Vec::with_capacity(self.period_count as usize);

        for _period in 1..=self.period_count {
            let row = state.advance_period(self.rate_per_period, self.deposit_per_period);
            if !(row.ending_balance.is_finite() && state.total_interest.is_finite()) {
                return Err(ProjectionError::Overflow {
                    period: row.period_index,
                });
            }
            rows.push(row);
        }

        debug!(
            "projection complete: final_balance={} total_interest={}",
            state.balance, state.total_interest
        );

        Ok(ProjectionResult {
            input: *self,
            rows,
            final_balance: state.balance,
            total_interest: state.total_interest,
        })
    }
}

/// Project a balance over `period_count` periods.
///
/// Each period earns `balance * rate_per_period`, then the deposit is added.
pub fn project(
    initial_amount: f64,
    rate_per_period: f64,
    deposit_per_period: f64,
    period_count: u32,
) -> Result<ProjectionResult, ProjectionError> {
    ProjectionInput::new(initial_amount, rate_per_period, deposit_per_period, period_count).project()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balances(result: &ProjectionResult) -> Vec<f64> {
        result.rows.iter().map(|r| r.ending_balance).collect()
    }

    fn interests(result: &ProjectionResult) -> Vec<f64> {
        result.rows.iter().map(|r| r.interest_earned).collect()
    }

    #[test]
    fn test_compounding_without_deposits() {
        let result = project(1000.0, 0.10, 0.0, 3).unwrap();

        assert_eq!(interests(&result), vec![100.0, 110.0, 121.0]);
        assert_eq!(balances(&result), vec![1100.0, 1210.0, 1331.0]);
        assert_eq!(result.total_interest, 331.0);
        assert_eq!(result.final_balance, 1331.0);
    }

    #[test]
    fn test_compounding_with_deposits() {
        let result = project(1000.0, 0.05, 100.0, 2).unwrap();

        assert_eq!(interests(&result), vec![50.0, 57.5]);
        assert_eq!(balances(&result), vec![1150.0, 1307.5]);
        assert_eq!(result.total_interest, 107.5);
        assert_eq!(result.final_balance, 1307.5);
    }

    #[test]
    fn test_zero_rate_only_accumulates_deposits() {
        let result = project(500.0, 0.0, 50.0, 4).unwrap();

        assert_eq!(interests(&result), vec![0.0; 4]);
        assert_eq!(balances(&result), vec![550.0, 600.0, 650.0, 700.0]);
        assert_eq!(result.total_interest, 0.0);
        assert_eq!(result.final_balance, 700.0);
    }

    #[test]
    fn test_zero_rate_matches_linear_formula() {
        let initial = 1200.0;
        let deposit = 75.0;
        let result = project(initial, 0.0, deposit, 24).unwrap();

        for row in &result.rows {
            assert_eq!(row.interest_earned, 0.0);
            assert_eq!(row.ending_balance, initial + row.period_index as f64 * deposit);
        }
    }

    #[test]
    fn test_deposit_earns_nothing_in_its_own_period() {
        // Deposit-at-start semantics would give 10 interest in period 1
        let result = project(0.0, 0.10, 100.0, 2).unwrap();

        assert_eq!(interests(&result), vec![0.0, 10.0]);
        assert_eq!(balances(&result), vec![100.0, 210.0]);
    }

    #[test]
    fn test_matches_grouped_balance_update() {
        let rate = 0.05 / 12.0;
        let deposit = 100.1;
        let result = project(1000.0, rate, deposit, 120).unwrap();

        let mut balance = 1000.0_f64;
        for row in &result.rows {
            balance += balance * rate + deposit;
            assert_eq!(row.ending_balance.to_bits(), balance.to_bits());
        }
        assert_eq!(result.final_balance.to_bits(), balance.to_bits());
    }

    #[test]
    fn test_row_count_and_ordering() {
        for periods in [1, 2, 12, 360] {
            let result = project(100.0, 0.004, 25.0, periods).unwrap();
            assert_eq!(result.rows.len(), periods as usize);
            for (i, row) in result.rows.iter().enumerate() {
                assert_eq!(row.period_index, i as u32 + 1);
            }
        }
    }

    #[test]
    fn test_total_interest_is_exact_running_sum() {
        let result = project(12_345.67, 0.0041666, 321.09, 480).unwrap();
        let summed = result.rows.iter().fold(0.0, |acc, r| acc + r.interest_earned);

        assert_eq!(summed, result.total_interest);
        assert_eq!(result.rows.last().unwrap().ending_balance, result.final_balance);
    }

    #[test]
    fn test_monotonic_for_non_negative_rate_and_deposit() {
        let result = project(0.0, 0.0075, 0.0, 36).unwrap();
        let result2 = project(5000.0, 0.02, 150.0, 120).unwrap();

        for r in [result, result2] {
            let mut prev = r.input.initial_amount;
            for row in &r.rows {
                assert!(row.ending_balance >= prev);
                prev = row.ending_balance;
            }
        }
    }

    #[test]
    fn test_negative_rate_depreciates() {
        let result = project(1000.0, -0.5, 0.0, 2).unwrap();
        assert_eq!(balances(&result), vec![500.0, 250.0]);
        assert_eq!(result.total_interest, -750.0);
    }

    #[test]
    fn test_single_period() {
        let result = project(200.0, 0.25, 10.0, 1).unwrap();
        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.final_balance, 260.0);
        assert_eq!(result.total_interest, 50.0);
    }

    #[test]
    fn test_same_inputs_same_outputs() {
        let a = project(987.65, 0.0123, 45.6, 60).unwrap();
        let b = project(987.65, 0.0123, 45.6, 60).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_zero_periods() {
        assert_eq!(
            project(1000.0, 0.1, 0.0, 0),
            Err(ProjectionError::InvalidPeriodCount(0))
        );
    }

    #[test]
    fn test_rejects_non_finite_inputs() {
        assert!(matches!(
            project(f64::NAN, 0.1, 0.0, 3),
            Err(ProjectionError::NonFinite { field: "initial_amount", .. })
        ));
        assert!(matches!(
            project(100.0, f64::INFINITY, 0.0, 3),
            Err(ProjectionError::NonFinite { field: "rate_per_period", .. })
        ));
        assert!(matches!(
            project(100.0, 0.1, f64::NEG_INFINITY, 3),
            Err(ProjectionError::NonFinite { field: "deposit_per_period", .. })
        ));
    }

    #[test]
    fn test_rejects_overflowing_balance() {
        assert_eq!(
            project(1e308, -3.0, 0.0, 3),
            Err(ProjectionError::Overflow { period: 1 })
        );
        assert_eq!(
            project(1e300, 1e5, 0.0, 10),
            Err(ProjectionError::Overflow { period: 2 })
        );
    }

    #[test]
    fn test_rejects_negative_principal() {
        assert_eq!(
            project(-1.0, 0.1, 0.0, 3),
            Err(ProjectionError::NegativePrincipal(-1.0))
        );
    }
}

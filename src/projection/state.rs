//! Running balance state carried from one period to the next

use super::engine::ProjectionInput;
use super::ledger::ProjectionRow;

/// State of the projection at the end of a period
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionState {
    /// Last completed period (0 before the first period runs)
    pub period_index: u32,

    /// Balance after the last completed period's interest and deposit
    pub balance: f64,

    /// Running sum of interest earned so far, in period order
    pub total_interest: f64,
}

impl ProjectionState {
    /// Initialize state at projection start
    pub fn from_input(input: &ProjectionInput) -> Self {
        Self {
            period_index: 0,
            balance: input.initial_amount,
            total_interest: 0.0,
        }
    }

    /// Advance one period and return the row it produces.
    ///
    /// Interest is taken on the opening balance; the deposit lands after
    /// interest has been recorded, so it earns nothing until next period.
    pub fn advance_period(&mut self, rate_per_period: f64, deposit_per_period: f64) -> ProjectionRow {
        self.period_index += 1;

        let interest = self.balance * rate_per_period;
        self.total_interest += interest;
        self.balance += interest + deposit_per_period;

        ProjectionRow {
            period_index: self.period_index,
            ending_balance: self.balance,
            interest_earned: interest,
        }
    }
}

//! Projection engine for periodic compounding with end-of-period deposits

mod state;
mod engine;
mod ledger;

pub use state::ProjectionState;
pub use engine::{project, ProjectionError, ProjectionInput};
pub use ledger::{ProjectionResult, ProjectionRow, ProjectionSummary};

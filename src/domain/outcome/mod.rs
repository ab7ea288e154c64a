//! Outcome module - probability-weighted futures and expected-value machinery.
//!
//! # Components
//!
//! - `OutcomeBranch` - one possible future with its probability
//! - `DecisionPoint` - a validated set of branches conditioning one option
//! - `ExpectedValueCalculator` - EV arithmetic and breakeven probability
//! - `ScenarioLookup` - how branches resolve the scenarios they name

mod branch;
mod decision_point;
mod expected_value;
mod lookup;

pub use branch::{BranchOutcome, OutcomeBranch};
pub use decision_point::{DecisionPoint, DEFAULT_PROBABILITY_TOLERANCE};
pub use expected_value::{ExpectedMetric, ExpectedValueCalculator};
pub use lookup::ScenarioLookup;

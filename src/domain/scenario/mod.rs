//! Scenario module - architectural options and their derived cash-flow series.

mod breakeven;
#[allow(clippy::module_inception)]
mod scenario;
mod series;

pub use breakeven::Breakeven;
pub use scenario::Scenario;

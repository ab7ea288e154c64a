//! Domain layer containing the decision economics model.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (periods, probabilities, rates, errors)
//! - `cashflow` - Typed cost and benefit line items
//! - `scenario` - Architectural options and their derived series
//! - `outcome` - Probability-weighted futures and expected values
//! - `analysis` - Comparison, NPV and recommendation across options

pub mod analysis;
pub mod cashflow;
pub mod foundation;
pub mod outcome;
pub mod scenario;

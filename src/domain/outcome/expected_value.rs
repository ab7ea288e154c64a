//! Expected Value Calculator - probability-weighted payoffs and decision thresholds.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EconomicsError, Probability, ValidationError};

/// Which per-branch quantity an expected value blends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedMetric {
    /// Probability-weighted cumulative ROI.
    Roi,
    /// Probability-weighted cumulative benefit minus cost.
    NetBenefit,
}

/// Stateless expected-value arithmetic.
pub struct ExpectedValueCalculator;

impl ExpectedValueCalculator {
    /// Expected payoff of paying `cost` for sure to win `benefit` with `probability`.
    ///
    /// # Algorithm
    /// EV = benefit × probability − cost
    pub fn expected_gain(probability: Probability, benefit: f64, cost: f64) -> f64 {
        benefit * probability.value() - cost
    }

    /// Probability at which `expected_gain` is exactly zero.
    ///
    /// Above the threshold the bet pays off in expectation, below it does not.
    /// A threshold above 1.0 means no probability makes the cost worthwhile.
    ///
    /// # Errors
    /// - `Configuration` when `benefit` is zero (the threshold is undefined)
    /// - `Validation` when either input is negative or not finite
    pub fn breakeven_probability(cost: f64, benefit: f64) -> Result<f64, EconomicsError> {
        for (field, value) in [("cost", cost), ("benefit", benefit)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::out_of_range(field, 0.0, f64::MAX, value).into());
            }
        }
        if benefit == 0.0 {
            return Err(EconomicsError::configuration(
                "benefit",
                "breakeven probability is undefined when benefit is zero",
            ));
        }
        Ok(cost / benefit)
    }

    /// Σ probability × value.
    ///
    /// # Edge Cases
    /// - Empty input: Returns 0.0
    pub fn weighted_sum<I>(weighted: I) -> f64
    where
        I: IntoIterator<Item = (Probability, f64)>,
    {
        weighted
            .into_iter()
            .map(|(probability, value)| probability.value() * value)
            .sum()
    }
}

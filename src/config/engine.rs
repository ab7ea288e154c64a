//! Engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::DecisionModelBuilder;
use crate::domain::outcome::DEFAULT_PROBABILITY_TOLERANCE;

/// Numeric defaults applied to every decision model built from configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Allowed drift of branch probability sums from 1.0
    #[serde(default = "default_probability_tolerance")]
    pub probability_tolerance: f64,

    /// Per-period discount rate used for expected NPV
    #[serde(default)]
    pub default_discount_rate: f64,
}

impl EngineConfig {
    /// Starts a model builder preloaded with these defaults
    pub fn model_builder(&self) -> DecisionModelBuilder {
        DecisionModelBuilder::new()
            .probability_tolerance(self.probability_tolerance)
            .discount_rate(self.default_discount_rate)
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let tolerance = self.probability_tolerance;
        if !(tolerance > 0.0 && tolerance <= 0.01) {
            return Err(ValidationError::InvalidProbabilityTolerance(tolerance));
        }
        let rate = self.default_discount_rate;
        if !rate.is_finite() || rate < 0.0 {
            return Err(ValidationError::InvalidDiscountRate(rate));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            probability_tolerance: default_probability_tolerance(),
            default_discount_rate: 0.0,
        }
    }
}

fn default_probability_tolerance() -> f64 {
    DEFAULT_PROBABILITY_TOLERANCE
}

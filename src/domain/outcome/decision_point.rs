//! DecisionPoint - a set of mutually exclusive outcome branches for one option.

use serde::Serialize;

use super::{ExpectedMetric, ExpectedValueCalculator, OutcomeBranch, ScenarioLookup};
use crate::domain::foundation::{DiscountRate, EconomicsError, Period, Probability, ValidationError};

/// Default allowed drift of the branch probability sum from 1.0.
pub const DEFAULT_PROBABILITY_TOLERANCE: f64 = 1e-6;

/// Probability-weighted futures of one option (e.g. "Monolith: do we hit scale?").
///
/// Probabilities must sum to 1.0 within `tolerance`. They are never
/// renormalised; a bad sum is always reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionPoint {
    name: String,
    option: String,
    branches: Vec<OutcomeBranch>,
    tolerance: f64,
}

impl DecisionPoint {
    /// Creates a decision point attached to the scenario named `option`.
    ///
    /// # Errors
    /// - `Validation` for a blank name or a tolerance outside (0, 0.01]
    /// - `ProbabilitySum` if the branch probabilities do not sum to 1.0
    pub fn new(
        name: impl Into<String>,
        option: impl Into<String>,
        branches: Vec<OutcomeBranch>,
        tolerance: f64,
    ) -> Result<Self, EconomicsError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("decision point name").into());
        }
        if !(tolerance > 0.0 && tolerance <= 0.01) {
            return Err(ValidationError::out_of_range("tolerance", 0.0, 0.01, tolerance).into());
        }

        let point = Self {
            name,
            option: option.into(),
            branches,
            tolerance,
        };
        point.validate()?;
        Ok(point)
    }

    /// Creates a decision point with the default tolerance.
    pub fn with_default_tolerance(
        name: impl Into<String>,
        option: impl Into<String>,
        branches: Vec<OutcomeBranch>,
    ) -> Result<Self, EconomicsError> {
        Self::new(name, option, branches, DEFAULT_PROBABILITY_TOLERANCE)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Scenario this decision point conditions.
    pub fn option(&self) -> &str {
        &self.option
    }

    pub fn branches(&self) -> &[OutcomeBranch] {
        &self.branches
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Sum of all branch probabilities.
    pub fn probability_sum(&self) -> f64 {
        self.branches.iter().map(|b| b.probability().value()).sum()
    }

    /// Checks the probability-sum invariant.
    pub fn validate(&self) -> Result<(), EconomicsError> {
        let sum = self.probability_sum();
        if (sum - 1.0).abs() > self.tolerance {
            return Err(EconomicsError::ProbabilitySum {
                decision_point: self.name.clone(),
                sum,
                tolerance: self.tolerance,
            });
        }
        Ok(())
    }

    /// Appends a branch. The set may be invalid until further edits complete it.
    pub fn push_branch(&mut self, branch: OutcomeBranch) {
        self.branches.push(branch);
    }

    /// Replaces the probability of the branch labelled `label`.
    pub fn set_probability(&mut self, label: &str, probability: f64) -> Result<(), EconomicsError> {
        let probability = Probability::try_new(probability)?;
        let branch = self
            .branches
            .iter_mut()
            .find(|b| b.label() == label)
            .ok_or_else(|| {
                EconomicsError::from(ValidationError::invalid_format(
                    "branch",
                    format!("decision point '{}' has no branch '{}'", self.name, label),
                ))
            })?;
        branch.probability = probability;
        Ok(())
    }

    /// Names of scenarios referenced by branches.
    pub fn referenced_scenarios(&self) -> impl Iterator<Item = &str> {
        self.branches.iter().filter_map(OutcomeBranch::scenario_name)
    }

    /// Σ probability × branch value for `metric` at `period`.
    ///
    /// Re-validates the probability sum first, since branches may have been edited.
    pub fn expected_value<L>(
        &self,
        lookup: &L,
        period: Period,
        metric: ExpectedMetric,
    ) -> Result<f64, EconomicsError>
    where
        L: ScenarioLookup + ?Sized,
    {
        self.validate()?;
        let weighted = self
            .branches
            .iter()
            .map(|b| Ok((b.probability(), b.value(lookup, period, metric)?)))
            .collect::<Result<Vec<_>, EconomicsError>>()?;
        Ok(ExpectedValueCalculator::weighted_sum(weighted))
    }

    /// Σ probability × branch NPV.
    pub fn expected_npv<L>(&self, lookup: &L, rate: DiscountRate) -> Result<f64, EconomicsError>
    where
        L: ScenarioLookup + ?Sized,
    {
        self.validate()?;
        let weighted = self
            .branches
            .iter()
            .map(|b| Ok((b.probability(), b.npv(lookup, rate)?)))
            .collect::<Result<Vec<_>, EconomicsError>>()?;
        Ok(ExpectedValueCalculator::weighted_sum(weighted))
    }
}

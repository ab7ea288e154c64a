//! OutcomeBranch - one probability-weighted future of a decision point.

use serde::Serialize;

use super::{ExpectedMetric, ScenarioLookup};
use crate::domain::foundation::{
    DiscountRate, EconomicsError, Period, Probability, ValidationError,
};

/// What happens if this branch plays out.
///
/// Branches name a scenario held elsewhere rather than owning it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchOutcome {
    /// The future follows the named scenario's cash flows.
    Scenario(String),
    /// The future is a lump cost and benefit, already in present-value terms.
    Fixed { cost: f64, benefit: f64 },
}

/// A labelled future with its probability.
///
/// Only built through `scenario` or `fixed`, so fixed amounts are never negative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeBranch {
    label: String,
    outcome: BranchOutcome,
    pub(super) probability: Probability,
}

impl OutcomeBranch {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn outcome(&self) -> &BranchOutcome {
        &self.outcome
    }

    pub fn probability(&self) -> Probability {
        self.probability
    }

    /// Branch that follows a named scenario.
    pub fn scenario(
        label: impl Into<String>,
        scenario: impl Into<String>,
        probability: f64,
    ) -> Result<Self, EconomicsError> {
        Ok(Self {
            label: label.into(),
            outcome: BranchOutcome::Scenario(scenario.into()),
            probability: Probability::try_new(probability)?,
        })
    }

    /// Branch with a fixed cost and benefit instead of a scenario.
    pub fn fixed(
        label: impl Into<String>,
        cost: f64,
        benefit: f64,
        probability: f64,
    ) -> Result<Self, EconomicsError> {
        for (field, value) in [("cost", cost), ("benefit", benefit)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::out_of_range(field, 0.0, f64::MAX, value).into());
            }
        }
        Ok(Self {
            label: label.into(),
            outcome: BranchOutcome::Fixed { cost, benefit },
            probability: Probability::try_new(probability)?,
        })
    }

    /// Name of the scenario this branch follows, if any.
    pub fn scenario_name(&self) -> Option<&str> {
        match &self.outcome {
            BranchOutcome::Scenario(name) => Some(name),
            BranchOutcome::Fixed { .. } => None,
        }
    }

    /// Unweighted value of this branch for `metric` at `period`.
    pub fn value<L>(
        &self,
        lookup: &L,
        period: Period,
        metric: ExpectedMetric,
    ) -> Result<f64, EconomicsError>
    where
        L: ScenarioLookup + ?Sized,
    {
        match &self.outcome {
            BranchOutcome::Scenario(name) => {
                let scenario = lookup.require_scenario(name)?;
                match metric {
                    ExpectedMetric::Roi => scenario.roi(period),
                    ExpectedMetric::NetBenefit => scenario.net_benefit(period),
                }
            }
            BranchOutcome::Fixed { cost, benefit } => match metric {
                ExpectedMetric::Roi if *cost == 0.0 => Err(EconomicsError::DivisionByZero {
                    scenario: self.label.clone(),
                    period,
                }),
                ExpectedMetric::Roi => Ok((benefit - cost) / cost),
                ExpectedMetric::NetBenefit => Ok(benefit - cost),
            },
        }
    }

    /// Unweighted net present value of this branch.
    pub fn npv<L>(&self, lookup: &L, rate: DiscountRate) -> Result<f64, EconomicsError>
    where
        L: ScenarioLookup + ?Sized,
    {
        match &self.outcome {
            BranchOutcome::Scenario(name) => lookup.require_scenario(name)?.npv(rate),
            BranchOutcome::Fixed { cost, benefit } => Ok(benefit - cost),
        }
    }
}

//! Decision Model - compares competing options and recommends one.

use std::collections::HashSet;

use tracing::{debug, info};

use super::{
    ComparisonReport, RankingAnalyzer, Recommendation, RecommendationBasis, ScenarioMetrics,
};
use crate::domain::foundation::{DiscountRate, EconomicsError, Period};
use crate::domain::outcome::{
    DecisionPoint, ExpectedMetric, OutcomeBranch, ScenarioLookup, DEFAULT_PROBABILITY_TOLERANCE,
};
use crate::domain::scenario::Scenario;

/// Named scenarios, optional outcome branches, and a shared discount rate.
///
/// Built once per comparison run. Only scenarios and decision points can be
/// edited afterwards; each scenario invalidates its own cached series on edit.
#[derive(Debug, Clone)]
pub struct DecisionModel {
    scenarios: Vec<Scenario>,
    decision_points: Vec<DecisionPoint>,
    discount_rate: DiscountRate,
}

impl DecisionModel {
    /// Creates a builder for constructing a decision model.
    pub fn builder() -> DecisionModelBuilder {
        DecisionModelBuilder::new()
    }

    /// Scenarios in insertion order.
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Finds a scenario by name.
    pub fn scenario(&self, name: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.name() == name)
    }

    /// Mutable access to a scenario, e.g. to add a component.
    pub fn scenario_mut(&mut self, name: &str) -> Option<&mut Scenario> {
        self.scenarios.iter_mut().find(|s| s.name() == name)
    }

    pub fn decision_points(&self) -> &[DecisionPoint] {
        &self.decision_points
    }

    /// Finds a decision point by name.
    pub fn decision_point(&self, name: &str) -> Option<&DecisionPoint> {
        self.decision_points.iter().find(|d| d.name() == name)
    }

    /// Mutable access to a decision point. Its probabilities are re-checked on use.
    pub fn decision_point_mut(&mut self, name: &str) -> Option<&mut DecisionPoint> {
        self.decision_points.iter_mut().find(|d| d.name() == name)
    }

    pub fn discount_rate(&self) -> DiscountRate {
        self.discount_rate
    }

    /// Horizon shared by every scenario, or `None` for an empty model.
    pub fn horizon(&self) -> Option<usize> {
        self.scenarios.first().map(Scenario::horizon)
    }

    fn require_decision_point(&self, name: &str) -> Result<&DecisionPoint, EconomicsError> {
        self.decision_point(name)
            .ok_or_else(|| EconomicsError::DecisionPointNotFound(name.to_string()))
    }

    /// Metrics for every scenario at `period`, ranked by ROI.
    ///
    /// A scenario whose ROI is undefined is reported with `roi: None` and
    /// ranked last; it does not abort the comparison. Any other error does.
    pub fn compare(&self, period: Period) -> Result<ComparisonReport, EconomicsError> {
        let mut entries = Vec::with_capacity(self.scenarios.len());

        for scenario in &self.scenarios {
            let roi = match scenario.roi(period) {
                Ok(roi) => Some(roi),
                Err(e) if e.is_undefined_metric() => {
                    debug!(scenario = scenario.name(), %period, "ROI undefined, reporting sentinel");
                    None
                }
                Err(e) => return Err(e),
            };

            entries.push(ScenarioMetrics {
                scenario: scenario.name().to_string(),
                cumulative_cost: scenario.cumulative_cost(period)?,
                cumulative_benefit: scenario.cumulative_benefit(period)?,
                roi,
                breakeven: scenario.breakeven_period()?,
            });
        }

        let ranking = RankingAnalyzer::rank_by_roi(&entries);
        debug!(%period, ranking = ?ranking, "Compared scenarios");

        Ok(ComparisonReport {
            period,
            entries,
            ranking,
        })
    }

    /// Net present value of a scenario at an explicit discount rate.
    ///
    /// # Errors
    /// `InvalidRate` for a negative or non-finite rate.
    pub fn npv(&self, scenario: &str, discount_rate: f64) -> Result<f64, EconomicsError> {
        let rate = DiscountRate::try_new(discount_rate)?;
        self.require_scenario(scenario)?.npv(rate)
    }

    /// Net present value of a scenario at the model's discount rate.
    pub fn npv_at_model_rate(&self, scenario: &str) -> Result<f64, EconomicsError> {
        self.require_scenario(scenario)?.npv(self.discount_rate)
    }

    /// Probability-weighted ROI or net benefit across a decision point's branches.
    pub fn expected_value(
        &self,
        decision_point: &str,
        period: Period,
        metric: ExpectedMetric,
    ) -> Result<f64, EconomicsError> {
        self.require_decision_point(decision_point)?
            .expected_value(self, period, metric)
    }

    /// Probability-weighted NPV across a decision point's branches.
    ///
    /// Branch probabilities are re-validated, since they may have been edited.
    pub fn expected_npv(&self, decision_point: &str) -> Result<f64, EconomicsError> {
        self.require_decision_point(decision_point)?
            .expected_npv(self, self.discount_rate)
    }

    /// Picks the best option.
    ///
    /// Without decision points: the scenario ranked first by ROI at `period`.
    /// With decision points: the option with the highest expected NPV, where
    /// an option without branches counts its own NPV and scenarios reachable
    /// only through a branch are not candidates. Ties go to the earlier
    /// scenario.
    ///
    /// Returns `None` when there is nothing to recommend.
    pub fn recommend(&self, period: Period) -> Result<Option<Recommendation>, EconomicsError> {
        let recommendation = if self.decision_points.is_empty() {
            let report = self.compare(period)?;
            report.best().and_then(|best| {
                best.roi.map(|roi| Recommendation {
                    scenario: best.scenario.clone(),
                    period,
                    basis: RecommendationBasis::Roi(roi),
                })
            })
        } else {
            let mut best: Option<(&str, f64)> = None;
            for candidate in self.candidates() {
                let value = match self.decision_point_for(candidate.name()) {
                    Some(point) => point.expected_npv(self, self.discount_rate)?,
                    None => candidate.npv(self.discount_rate)?,
                };
                if best.map_or(true, |(_, top)| value > top) {
                    best = Some((candidate.name(), value));
                }
            }
            best.map(|(name, value)| Recommendation {
                scenario: name.to_string(),
                period,
                basis: RecommendationBasis::ExpectedNpv(value),
            })
        };

        match &recommendation {
            Some(r) => info!(
                scenario = %r.scenario,
                value = r.basis.value(),
                basis = ?r.basis,
                "Recommended option"
            ),
            None => info!(%period, "No option could be recommended"),
        }
        Ok(recommendation)
    }

    fn decision_point_for(&self, option: &str) -> Option<&DecisionPoint> {
        self.decision_points.iter().find(|d| d.option() == option)
    }

    /// Options eligible for a branch-aware recommendation.
    fn candidates(&self) -> impl Iterator<Item = &Scenario> {
        let options: HashSet<&str> = self.decision_points.iter().map(|d| d.option()).collect();
        let branch_targets: HashSet<&str> = self
            .decision_points
            .iter()
            .flat_map(|d| d.referenced_scenarios())
            .collect();

        self.scenarios.iter().filter(move |s| {
            options.contains(s.name()) || !branch_targets.contains(s.name())
        })
    }
}

impl ScenarioLookup for DecisionModel {
    fn scenario(&self, name: &str) -> Option<&Scenario> {
        DecisionModel::scenario(self, name)
    }
}

/// Builder for constructing DecisionModel instances.
#[derive(Debug)]
pub struct DecisionModelBuilder {
    scenarios: Vec<Scenario>,
    decision_points: Vec<DecisionPoint>,
    pending_points: Vec<(String, String, Vec<OutcomeBranch>)>,
    discount_rate: f64,
    probability_tolerance: f64,
}

impl Default for DecisionModelBuilder {
    fn default() -> Self {
        Self {
            scenarios: Vec::new(),
            decision_points: Vec::new(),
            pending_points: Vec::new(),
            discount_rate: 0.0,
            probability_tolerance: DEFAULT_PROBABILITY_TOLERANCE,
        }
    }
}

impl DecisionModelBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shared discount rate used for expected NPV.
    pub fn discount_rate(mut self, rate: f64) -> Self {
        self.discount_rate = rate;
        self
    }

    /// Sets the tolerance used for branch sets added via `decision_point`.
    pub fn probability_tolerance(mut self, tolerance: f64) -> Self {
        self.probability_tolerance = tolerance;
        self
    }

    /// Adds a scenario.
    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.scenarios.push(scenario);
        self
    }

    /// Adds a branch set for `option`; validated when the model is built.
    pub fn decision_point(
        mut self,
        name: impl Into<String>,
        option: impl Into<String>,
        branches: Vec<OutcomeBranch>,
    ) -> Self {
        self.pending_points.push((name.into(), option.into(), branches));
        self
    }

    /// Adds an already-validated decision point.
    pub fn with_decision_point(mut self, point: DecisionPoint) -> Self {
        self.decision_points.push(point);
        self
    }

    /// Validates and builds the model.
    ///
    /// # Errors
    /// - `InvalidRate` for a negative discount rate
    /// - `ScenarioHorizonMismatch` when scenarios have different horizons
    /// - `DuplicateName` for repeated scenario or decision point names, or a
    ///   second decision point on the same option
    /// - `ScenarioNotFound` when a decision point names an unknown scenario
    /// - `ProbabilitySum` when a branch set does not sum to 1.0
    pub fn build(self) -> Result<DecisionModel, EconomicsError> {
        let discount_rate = DiscountRate::try_new(self.discount_rate)?;

        let mut decision_points = self.decision_points;
        for (name, option, branches) in self.pending_points {
            decision_points.push(DecisionPoint::new(
                name,
                option,
                branches,
                self.probability_tolerance,
            )?);
        }

        let mut names = HashSet::new();
        for scenario in &self.scenarios {
            if !names.insert(scenario.name()) {
                return Err(EconomicsError::DuplicateName(scenario.name().to_string()));
            }
        }

        if let Some(reference) = self.scenarios.first() {
            if let Some(odd) = self
                .scenarios
                .iter()
                .find(|s| s.horizon() != reference.horizon())
            {
                return Err(EconomicsError::ScenarioHorizonMismatch {
                    scenario: odd.name().to_string(),
                    reference: reference.name().to_string(),
                    horizon: odd.horizon(),
                    expected: reference.horizon(),
                });
            }
        }

        let mut point_names = HashSet::new();
        let mut options = HashSet::new();
        for point in &decision_points {
            if !point_names.insert(point.name()) {
                return Err(EconomicsError::DuplicateName(point.name().to_string()));
            }
            if !options.insert(point.option()) {
                return Err(EconomicsError::DuplicateName(format!(
                    "decision point for option '{}'",
                    point.option()
                )));
            }
            for referenced in std::iter::once(point.option()).chain(point.referenced_scenarios()) {
                if !names.contains(referenced) {
                    return Err(EconomicsError::ScenarioNotFound(referenced.to_string()));
                }
            }
            point.validate()?;
        }

        debug!(
            scenarios = self.scenarios.len(),
            decision_points = decision_points.len(),
            %discount_rate,
            "Built decision model"
        );

        Ok(DecisionModel {
            scenarios: self.scenarios,
            decision_points,
            discount_rate,
        })
    }
}

#[cfg(test)]
#[path = "decision_model_test.rs"]
mod decision_model_test;

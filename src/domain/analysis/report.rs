//! Comparison and recommendation results handed to reporting layers.

use serde::Serialize;

use crate::domain::foundation::Period;
use crate::domain::scenario::Breakeven;

/// Metrics for one scenario at the compared period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioMetrics {
    pub scenario: String,
    pub cumulative_cost: f64,
    pub cumulative_benefit: f64,
    /// `None` when nothing has been spent yet (ROI undefined).
    pub roi: Option<f64>,
    pub breakeven: Breakeven,
}

impl ScenarioMetrics {
    /// Cumulative benefit minus cumulative cost.
    pub fn net_benefit(&self) -> f64 {
        self.cumulative_benefit - self.cumulative_cost
    }
}

/// Side-by-side metrics for every scenario, plus a deterministic ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub period: Period,
    /// Metrics in scenario insertion order.
    pub entries: Vec<ScenarioMetrics>,
    /// Scenario names, best ROI first.
    pub ranking: Vec<String>,
}

impl ComparisonReport {
    /// Metrics for a scenario by name.
    pub fn entry(&self, scenario: &str) -> Option<&ScenarioMetrics> {
        self.entries.iter().find(|e| e.scenario == scenario)
    }

    /// Top-ranked scenario with a defined ROI.
    pub fn best(&self) -> Option<&ScenarioMetrics> {
        self.ranking
            .iter()
            .filter_map(|name| self.entry(name))
            .find(|e| e.roi.is_some())
    }

    /// Scenarios whose ROI could not be computed.
    pub fn undefined_roi(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.roi.is_none())
            .map(|e| e.scenario.as_str())
            .collect()
    }
}

/// What a recommendation was chosen on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "metric", content = "value", rename_all = "snake_case")]
pub enum RecommendationBasis {
    /// Highest cumulative ROI at the requested period.
    Roi(f64),
    /// Highest probability-weighted NPV at the model's discount rate.
    ExpectedNpv(f64),
}

impl RecommendationBasis {
    /// The winning metric value.
    pub fn value(&self) -> f64 {
        match self {
            RecommendationBasis::Roi(v) | RecommendationBasis::ExpectedNpv(v) => *v,
        }
    }
}

/// The option to pick and why.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub scenario: String,
    pub period: Period,
    pub basis: RecommendationBasis,
}

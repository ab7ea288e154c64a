//! Model definitions - serde documents that build a `DecisionModel`.
//!
//! A definition is plain data: scenario names, component rows and branch
//! probabilities. All validation happens when it is turned into a model, so a
//! bad document reports the same errors as the equivalent builder calls.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::domain::analysis::DecisionModel;
use crate::domain::cashflow::{CashFlowComponent, FlowKind, FlowPattern};
use crate::domain::foundation::EconomicsError;
use crate::domain::outcome::OutcomeBranch;
use crate::domain::scenario::Scenario;

/// Errors raised while reading or applying a model definition.
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("Failed to read definition: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML definition: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON definition: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported definition format '{0}' (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),

    #[error("Branch '{label}' must name either a scenario or a fixed cost/benefit, not both")]
    AmbiguousBranch { label: String },

    #[error("Branch '{label}' names neither a scenario nor a fixed cost/benefit")]
    EmptyBranch { label: String },

    #[error(transparent)]
    Model(#[from] EconomicsError),
}

/// Complete description of a decision model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDefinition {
    /// Overrides the engine's default discount rate when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_rate: Option<f64>,

    /// Overrides the engine's probability tolerance when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability_tolerance: Option<f64>,

    pub scenarios: Vec<ScenarioDefinition>,

    #[serde(default)]
    pub decision_points: Vec<DecisionPointDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDefinition {
    pub name: String,
    pub horizon: usize,
    #[serde(default)]
    pub components: Vec<ComponentDefinition>,
}

/// One cost or benefit row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDefinition {
    pub name: String,
    pub kind: FlowKind,
    pub pattern: FlowPattern,
    pub amount: f64,
    #[serde(default)]
    pub start_period: i64,
    /// Required for `per_unit` components.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionPointDefinition {
    pub name: String,
    pub option: String,
    pub branches: Vec<BranchDefinition>,
}

/// A branch follows a named scenario, or else carries a fixed cost and benefit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchDefinition {
    pub label: String,
    pub probability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefit: Option<f64>,
}

impl ModelDefinition {
    pub fn from_yaml_str(source: &str) -> Result<Self, DefinitionError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Reads a definition, choosing the format from the file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DefinitionError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let definition = match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&fs::read_to_string(path)?)?,
            "json" => Self::from_json_str(&fs::read_to_string(path)?)?,
            other => return Err(DefinitionError::UnsupportedFormat(other.to_string())),
        };

        info!(
            path = %path.display(),
            scenarios = definition.scenarios.len(),
            decision_points = definition.decision_points.len(),
            "Loaded model definition"
        );
        Ok(definition)
    }

    /// Builds a validated model, using `engine` for anything the definition omits.
    pub fn into_model(self, engine: &EngineConfig) -> Result<DecisionModel, DefinitionError> {
        let mut builder = engine.model_builder();
        if let Some(rate) = self.discount_rate {
            builder = builder.discount_rate(rate);
        }
        if let Some(tolerance) = self.probability_tolerance {
            builder = builder.probability_tolerance(tolerance);
        }

        for scenario in self.scenarios {
            builder = builder.scenario(scenario.into_scenario()?);
        }
        for point in self.decision_points {
            let branches = point
                .branches
                .into_iter()
                .map(BranchDefinition::into_branch)
                .collect::<Result<Vec<_>, _>>()?;
            builder = builder.decision_point(point.name, point.option, branches);
        }

        Ok(builder.build()?)
    }
}

impl ScenarioDefinition {
    fn into_scenario(self) -> Result<Scenario, EconomicsError> {
        let mut scenario = Scenario::new(self.name, self.horizon)?;
        for component in self.components {
            scenario.add_component(component.into_component()?)?;
        }
        debug!(
            scenario = scenario.name(),
            components = scenario.components().len(),
            "Defined scenario"
        );
        Ok(scenario)
    }
}

impl ComponentDefinition {
    fn into_component(self) -> Result<CashFlowComponent, EconomicsError> {
        let component = CashFlowComponent::new(
            self.name,
            self.kind,
            self.pattern,
            self.amount,
            self.start_period,
        )?;
        match self.units {
            Some(units) => component.with_units(units),
            None => Ok(component),
        }
    }
}

impl BranchDefinition {
    fn into_branch(self) -> Result<OutcomeBranch, DefinitionError> {
        let has_fixed = self.cost.is_some() || self.benefit.is_some();
        let branch = match self.scenario {
            Some(_) if has_fixed => {
                return Err(DefinitionError::AmbiguousBranch { label: self.label })
            }
            Some(scenario) => OutcomeBranch::scenario(self.label, scenario, self.probability)?,
            None if !has_fixed => return Err(DefinitionError::EmptyBranch { label: self.label }),
            None => OutcomeBranch::fixed(
                self.label,
                self.cost.unwrap_or(0.0),
                self.benefit.unwrap_or(0.0),
                self.probability,
            )?,
        };
        Ok(branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ErrorCode, Period};
    use crate::domain::outcome::BranchOutcome;
    use std::io::Write;

    const YAML: &str = r#"
discount_rate: 0.0
scenarios:
  - name: Monolith
    horizon: 2
    components:
      - name: build
        kind: cost
        pattern: one_time
        amount: 100
      - name: value
        kind: benefit
        pattern: recurring
        amount: 80
  - name: Monolith rewrite
    horizon: 2
    components:
      - name: build
        kind: cost
        pattern: one_time
        amount: 100
      - name: rewrite
        kind: cost
        pattern: one_time
        amount: 200
        start_period: 1
      - name: value
        kind: benefit
        pattern: recurring
        amount: 80
decision_points:
  - name: scale
    option: Monolith
    branches:
      - label: never scale
        probability: 0.85
        scenario: Monolith
      - label: scale in year 3
        probability: 0.15
        scenario: Monolith rewrite
"#;

    #[test]
    fn yaml_definition_builds_model() {
        let model = ModelDefinition::from_yaml_str(YAML)
            .unwrap()
            .into_model(&EngineConfig::default())
            .unwrap();

        assert_eq!(model.scenarios().len(), 2);
        assert_eq!(
            model.scenario("Monolith").unwrap().cumulative_benefit(Period::new(1)).unwrap(),
            160.0
        );
        assert!((model.expected_npv("scale").unwrap() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn json_definition_with_per_unit_and_fixed_branch() {
        let json = r#"{
            "discount_rate": 0.1,
            "scenarios": [{
                "name": "Microservices",
                "horizon": 3,
                "components": [
                    {"name": "platform", "kind": "cost", "pattern": "one_time", "amount": 50},
                    {"name": "api", "kind": "benefit", "pattern": "per_unit", "amount": 2,
                     "units": [10, 20, 30]}
                ]
            }],
            "decision_points": [{
                "name": "adoption",
                "option": "Microservices",
                "branches": [
                    {"label": "adopted", "probability": 0.5, "scenario": "Microservices"},
                    {"label": "abandoned", "probability": 0.5, "cost": 50}
                ]
            }]
        }"#;

        let model = ModelDefinition::from_json_str(json)
            .unwrap()
            .into_model(&EngineConfig::default())
            .unwrap();

        assert_eq!(model.discount_rate().value(), 0.1);
        let scenario = model.scenario("Microservices").unwrap();
        assert_eq!(scenario.benefit_series().unwrap(), &[20.0, 40.0, 60.0]);

        let point = model.decision_point("adoption").unwrap();
        assert_eq!(
            point.branches()[1].outcome(),
            &BranchOutcome::Fixed {
                cost: 50.0,
                benefit: 0.0
            }
        );
    }

    #[test]
    fn engine_defaults_apply_when_definition_is_silent() {
        let engine = EngineConfig {
            default_discount_rate: 0.05,
            ..Default::default()
        };
        let yaml = "scenarios:\n  - name: Monolith\n    horizon: 1\n";
        let model = ModelDefinition::from_yaml_str(yaml)
            .unwrap()
            .into_model(&engine)
            .unwrap();
        assert_eq!(model.discount_rate().value(), 0.05);
    }

    #[test]
    fn invalid_component_surfaces_model_error() {
        let yaml = r#"
scenarios:
  - name: Monolith
    horizon: 2
    components:
      - name: build
        kind: cost
        pattern: one_time
        amount: -5
"#;
        let err = ModelDefinition::from_yaml_str(yaml)
            .unwrap()
            .into_model(&EngineConfig::default())
            .unwrap_err();
        match err {
            DefinitionError::Model(e) => assert_eq!(e.code(), ErrorCode::InvalidComponent),
            other => panic!("Expected model error, got {:?}", other),
        }
    }

    #[test]
    fn branch_with_scenario_and_amounts_is_rejected() {
        let branch = BranchDefinition {
            label: "confused".to_string(),
            probability: 1.0,
            scenario: Some("Monolith".to_string()),
            cost: Some(10.0),
            benefit: None,
        };
        assert!(matches!(
            branch.into_branch(),
            Err(DefinitionError::AmbiguousBranch { .. })
        ));
    }

    #[test]
    fn branch_without_scenario_or_amounts_is_rejected() {
        let yaml = r#"
scenarios:
  - name: Monolith
    horizon: 1
decision_points:
  - name: scale
    option: Monolith
    branches:
      - label: nothing happens
        probability: 1.0
"#;
        let err = ModelDefinition::from_yaml_str(yaml)
            .unwrap()
            .into_model(&EngineConfig::default())
            .unwrap_err();
        assert!(matches!(
            err,
            DefinitionError::EmptyBranch { label } if label == "nothing happens"
        ));
    }

    #[test]
    fn malformed_yaml_is_reported() {
        let err = ModelDefinition::from_yaml_str("scenarios: [").unwrap_err();
        assert!(matches!(err, DefinitionError::Yaml(_)));
    }

    #[test]
    fn from_path_reads_yaml_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".yml")
            .tempfile()
            .unwrap();
        file.write_all(YAML.as_bytes()).unwrap();

        let definition = ModelDefinition::from_path(file.path()).unwrap();
        assert_eq!(definition.scenarios[0].name, "Monolith");
        assert_eq!(definition.decision_points.len(), 1);
    }

    #[test]
    fn from_path_rejects_unknown_extension() {
        let file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        assert!(matches!(
            ModelDefinition::from_path(file.path()),
            Err(DefinitionError::UnsupportedFormat(ext)) if ext == "toml"
        ));
    }
}

//! Integration tests for building decision models from definition files.

use std::io::Write;

use decision_economics::application::{DefinitionError, ModelDefinition};
use decision_economics::config::{AppConfig, EngineConfig};
use decision_economics::domain::foundation::{ErrorCode, Period};
use decision_economics::domain::scenario::Breakeven;

const DEFINITION: &str = r#"
discount_rate: 0.0
scenarios:
  - name: Monolith
    horizon: 12
    components:
      - { name: initial build, kind: cost, pattern: one_time, amount: 20000 }
      - { name: hosting, kind: cost, pattern: recurring, amount: 1175 }
      - { name: time to market, kind: benefit, pattern: recurring, amount: 12000 }
      - name: customer ramp
        kind: benefit
        pattern: per_unit
        amount: 1
        units: [0, 0, 1000, 2000, 3000, 4000, 5000, 6000, 7000, 8000, 9000, 10000]
  - name: Microservices
    horizon: 12
    components:
      - { name: platform build, kind: cost, pattern: one_time, amount: 73000 }
      - { name: cluster, kind: cost, pattern: recurring, amount: 1250 }
      - { name: platform team, kind: cost, pattern: recurring, amount: 5300 }
      - name: independent deploys
        kind: benefit
        pattern: per_unit
        amount: 125
        units: [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]
decision_points:
  - name: scale
    option: Monolith
    branches:
      - { label: never scale, probability: 0.85, scenario: Monolith }
      - { label: scale in year 3, probability: 0.15, cost: 60000 }
"#;

fn write_definition(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn yaml_file_reproduces_builder_results() {
    let file = write_definition(".yaml", DEFINITION);
    let model = ModelDefinition::from_path(file.path())
        .unwrap()
        .into_model(&EngineConfig::default())
        .unwrap();

    let monolith = model.scenario("Monolith").unwrap();
    assert_eq!(monolith.breakeven_period().unwrap(), Breakeven::At(Period::new(1)));
    let micro = model.scenario("Microservices").unwrap();
    assert_eq!(micro.breakeven_period().unwrap(), Breakeven::NotWithinHorizon);

    let stay = model.npv("Monolith", 0.0).unwrap();
    let expected = model.expected_npv("scale").unwrap();
    assert!((expected - (0.85 * stay + 0.15 * -60_000.0)).abs() < 1e-6);
}

#[test]
fn json_round_trip_of_a_yaml_definition() {
    let definition = ModelDefinition::from_yaml_str(DEFINITION).unwrap();
    let json = serde_json::to_string(&definition).unwrap();

    let file = write_definition(".json", &json);
    assert_eq!(ModelDefinition::from_path(file.path()).unwrap(), definition);
}

#[test]
fn configured_tolerance_governs_loaded_branches() {
    let drifting = DEFINITION.replace("probability: 0.15", "probability: 0.1499");
    let definition = ModelDefinition::from_yaml_str(&drifting).unwrap();

    let strict = definition.clone().into_model(&EngineConfig::default()).unwrap_err();
    match strict {
        DefinitionError::Model(e) => assert_eq!(e.code(), ErrorCode::ProbabilitySum),
        other => panic!("Expected probability error, got {:?}", other),
    }

    let lenient = EngineConfig {
        probability_tolerance: 0.001,
        ..Default::default()
    };
    assert!(definition.into_model(&lenient).is_ok());
}

#[test]
fn config_file_feeds_definition_loading() {
    let config_file = write_definition(".yaml", "engine:\n  default_discount_rate: 0.02\n");
    let config = AppConfig::load_from_file(config_file.path()).unwrap();
    config.validate().unwrap();

    let without_rate = DEFINITION.replace("discount_rate: 0.0\n", "");
    let model = ModelDefinition::from_yaml_str(&without_rate)
        .unwrap()
        .into_model(&config.engine)
        .unwrap();

    assert_eq!(model.discount_rate().value(), 0.02);
}

//! Application layer - loading decision models from external definitions.
//!
//! The domain layer never touches files or formats; this layer turns YAML or
//! JSON documents into validated `DecisionModel`s.

pub mod definition;

pub use definition::{
    BranchDefinition, ComponentDefinition, DecisionPointDefinition, DefinitionError,
    ModelDefinition, ScenarioDefinition,
};

//! Seam through which outcome branches resolve the scenarios they name.

use crate::domain::foundation::EconomicsError;
use crate::domain::scenario::Scenario;

/// Anything that can hand out scenarios by name.
pub trait ScenarioLookup {
    /// Finds a scenario by name.
    fn scenario(&self, name: &str) -> Option<&Scenario>;

    /// Finds a scenario by name or reports which one is missing.
    fn require_scenario(&self, name: &str) -> Result<&Scenario, EconomicsError> {
        self.scenario(name)
            .ok_or_else(|| EconomicsError::ScenarioNotFound(name.to_string()))
    }
}

impl ScenarioLookup for [Scenario] {
    fn scenario(&self, name: &str) -> Option<&Scenario> {
        self.iter().find(|s| s.name() == name)
    }
}

//! Direction and recurrence of a cash-flow line item.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a line item costs money or brings it in.
///
/// The sign of a flow lives here, never in the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowKind {
    Cost,
    Benefit,
}

impl FlowKind {
    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            FlowKind::Cost => "Cost",
            FlowKind::Benefit => "Benefit",
        }
    }

    /// +1 for benefits, -1 for costs.
    pub fn sign(&self) -> f64 {
        match self {
            FlowKind::Cost => -1.0,
            FlowKind::Benefit => 1.0,
        }
    }
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// How a line item recurs across the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowPattern {
    /// Applies once, at the start period.
    OneTime,
    /// Applies every period from the start period to the end of the horizon.
    Recurring,
    /// Applies `amount × units[period]` from the start period on.
    PerUnit,
}

impl FlowPattern {
    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            FlowPattern::OneTime => "One-time",
            FlowPattern::Recurring => "Recurring",
            FlowPattern::PerUnit => "Per unit",
        }
    }

    /// Returns true if this pattern needs a unit series to produce amounts.
    pub fn requires_units(&self) -> bool {
        matches!(self, FlowPattern::PerUnit)
    }
}

impl fmt::Display for FlowPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_sign_encodes_direction() {
        assert_eq!(FlowKind::Cost.sign(), -1.0);
        assert_eq!(FlowKind::Benefit.sign(), 1.0);
    }

    #[test]
    fn only_per_unit_requires_units() {
        assert!(FlowPattern::PerUnit.requires_units());
        assert!(!FlowPattern::OneTime.requires_units());
        assert!(!FlowPattern::Recurring.requires_units());
    }

    #[test]
    fn serializes_to_snake_case() {
        assert_eq!(serde_json::to_string(&FlowPattern::OneTime).unwrap(), "\"one_time\"");
        assert_eq!(serde_json::to_string(&FlowPattern::PerUnit).unwrap(), "\"per_unit\"");
        let kind: FlowKind = serde_json::from_str("\"benefit\"").unwrap();
        assert_eq!(kind, FlowKind::Benefit);
    }

    #[test]
    fn displays_human_names() {
        assert_eq!(format!("{}", FlowPattern::Recurring), "Recurring");
        assert_eq!(format!("{}", FlowKind::Cost), "Cost");
    }
}

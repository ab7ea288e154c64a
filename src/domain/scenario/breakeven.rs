//! Breakeven outcome - either a period or "not within the horizon".

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::Period;

/// First period where cumulative benefit meets or exceeds cumulative cost.
///
/// `NotWithinHorizon` is an ordinary answer, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "status", content = "period", rename_all = "snake_case")]
pub enum Breakeven {
    At(Period),
    NotWithinHorizon,
}

impl Breakeven {
    /// Finds the first index where `benefits[i] >= costs[i]`.
    pub(crate) fn first_crossing(cumulative_costs: &[f64], cumulative_benefits: &[f64]) -> Self {
        cumulative_costs
            .iter()
            .zip(cumulative_benefits)
            .position(|(cost, benefit)| benefit >= cost)
            .map_or(Breakeven::NotWithinHorizon, |idx| Breakeven::At(Period::new(idx)))
    }

    /// The breakeven period, if reached.
    pub fn period(&self) -> Option<Period> {
        match self {
            Breakeven::At(period) => Some(*period),
            Breakeven::NotWithinHorizon => None,
        }
    }

    /// Returns true if breakeven happens inside the horizon.
    pub fn is_reached(&self) -> bool {
        matches!(self, Breakeven::At(_))
    }
}

impl fmt::Display for Breakeven {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Breakeven::At(period) => write!(f, "{}", period),
            Breakeven::NotWithinHorizon => write!(f, "no breakeven within horizon"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_crossing() {
        let b = Breakeven::first_crossing(&[10.0, 12.0, 14.0], &[0.0, 12.0, 20.0]);
        assert_eq!(b, Breakeven::At(Period::new(1)));
        assert_eq!(b.period(), Some(Period::new(1)));
    }

    #[test]
    fn no_crossing_is_sentinel() {
        let b = Breakeven::first_crossing(&[10.0, 12.0], &[1.0, 2.0]);
        assert_eq!(b, Breakeven::NotWithinHorizon);
        assert!(!b.is_reached());
        assert_eq!(format!("{}", b), "no breakeven within horizon");
    }

    #[test]
    fn zero_flows_break_even_immediately() {
        let b = Breakeven::first_crossing(&[0.0, 0.0], &[0.0, 0.0]);
        assert_eq!(b, Breakeven::At(Period::START));
    }

    #[test]
    fn serializes_with_status_tag() {
        let json = serde_json::to_string(&Breakeven::At(Period::new(1))).unwrap();
        assert_eq!(json, r#"{"status":"at","period":1}"#);
        let json = serde_json::to_string(&Breakeven::NotWithinHorizon).unwrap();
        assert_eq!(json, r#"{"status":"not_within_horizon"}"#);
    }
}

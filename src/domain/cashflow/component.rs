//! CashFlowComponent - a single typed cost or benefit line item.

use serde::Serialize;

use super::{FlowKind, FlowPattern, UnitSeries};
use crate::domain::foundation::{EconomicsError, Period};

/// One row of a cost table: what it is, which way money moves, when and how often.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashFlowComponent {
    name: String,
    kind: FlowKind,
    pattern: FlowPattern,
    amount: f64,
    start_period: Period,
    units: Option<UnitSeries>,
}

impl CashFlowComponent {
    /// Creates a new component.
    ///
    /// # Errors
    /// `InvalidComponent` when the name is blank, `amount` is negative or not
    /// finite, or `start_period` is negative.
    pub fn new(
        name: impl Into<String>,
        kind: FlowKind,
        pattern: FlowPattern,
        amount: f64,
        start_period: i64,
    ) -> Result<Self, EconomicsError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(EconomicsError::invalid_component(
                "<unnamed>",
                "name cannot be empty",
            ));
        }
        if !amount.is_finite() || amount < 0.0 {
            return Err(EconomicsError::invalid_component(
                name,
                format!(
                    "amount must be a non-negative number, got {} (use the kind to express direction)",
                    amount
                ),
            ));
        }
        let start_period = Period::try_from_signed(start_period).map_err(|_| {
            EconomicsError::invalid_component(
                name.clone(),
                format!("start period must be >= 0, got {}", start_period),
            )
        })?;

        Ok(Self {
            name,
            kind,
            pattern,
            amount,
            start_period,
            units: None,
        })
    }

    /// One-time cost at `start_period`.
    pub fn one_time_cost(
        name: impl Into<String>,
        amount: f64,
        start_period: i64,
    ) -> Result<Self, EconomicsError> {
        Self::new(name, FlowKind::Cost, FlowPattern::OneTime, amount, start_period)
    }

    /// Cost paid every period from `start_period` on.
    pub fn recurring_cost(
        name: impl Into<String>,
        amount: f64,
        start_period: i64,
    ) -> Result<Self, EconomicsError> {
        Self::new(name, FlowKind::Cost, FlowPattern::Recurring, amount, start_period)
    }

    /// One-time benefit at `start_period`.
    pub fn one_time_benefit(
        name: impl Into<String>,
        amount: f64,
        start_period: i64,
    ) -> Result<Self, EconomicsError> {
        Self::new(name, FlowKind::Benefit, FlowPattern::OneTime, amount, start_period)
    }

    /// Benefit earned every period from `start_period` on.
    pub fn recurring_benefit(
        name: impl Into<String>,
        amount: f64,
        start_period: i64,
    ) -> Result<Self, EconomicsError> {
        Self::new(name, FlowKind::Benefit, FlowPattern::Recurring, amount, start_period)
    }

    /// Cost of `amount` per unit, driven by `units`.
    pub fn per_unit_cost(
        name: impl Into<String>,
        amount: f64,
        start_period: i64,
        units: Vec<f64>,
    ) -> Result<Self, EconomicsError> {
        Self::new(name, FlowKind::Cost, FlowPattern::PerUnit, amount, start_period)?
            .with_units(units)
    }

    /// Benefit of `amount` per unit, driven by `units`.
    pub fn per_unit_benefit(
        name: impl Into<String>,
        amount: f64,
        start_period: i64,
        units: Vec<f64>,
    ) -> Result<Self, EconomicsError> {
        Self::new(name, FlowKind::Benefit, FlowPattern::PerUnit, amount, start_period)?
            .with_units(units)
    }

    /// Attaches a unit series.
    ///
    /// Only PER_UNIT components read it; other patterns keep it for reference.
    pub fn with_units(mut self, units: Vec<f64>) -> Result<Self, EconomicsError> {
        let series = UnitSeries::try_new(units)
            .map_err(|e| EconomicsError::invalid_component(self.name.clone(), e.to_string()))?;
        self.units = Some(series);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FlowKind {
        self.kind
    }

    pub fn pattern(&self) -> FlowPattern {
        self.pattern
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn start_period(&self) -> Period {
        self.start_period
    }

    pub fn units(&self) -> Option<&UnitSeries> {
        self.units.as_ref()
    }

    pub fn is_cost(&self) -> bool {
        self.kind == FlowKind::Cost
    }

    /// Number of periods this component assumes exist, if it assumes any.
    ///
    /// Only a PER_UNIT series pins a length; the other patterns adapt to
    /// whatever horizon they are placed in.
    pub fn implied_horizon(&self) -> Option<usize> {
        if self.pattern.requires_units() {
            self.units.as_ref().map(UnitSeries::len)
        } else {
            None
        }
    }

    /// Contribution of this component in `period` (always non-negative).
    ///
    /// # Errors
    /// `Configuration` when a PER_UNIT component has no unit series.
    pub fn amount_at(&self, period: Period) -> Result<f64, EconomicsError> {
        let value = match self.pattern {
            FlowPattern::OneTime => {
                if period == self.start_period {
                    self.amount
                } else {
                    0.0
                }
            }
            FlowPattern::Recurring => {
                if period >= self.start_period {
                    self.amount
                } else {
                    0.0
                }
            }
            FlowPattern::PerUnit => {
                let units = self.units.as_ref().ok_or_else(|| {
                    EconomicsError::configuration(
                        self.name.clone(),
                        "per-unit component needs a unit series",
                    )
                })?;
                if period < self.start_period {
                    0.0
                } else {
                    units.get(period).map_or(0.0, |u| self.amount * u)
                }
            }
        };
        Ok(value)
    }

    /// Same line item, starting `by` periods later.
    ///
    /// The unit series is delayed too and cut to `horizon` entries.
    pub fn shifted(&self, by: usize, horizon: usize) -> Self {
        Self {
            name: self.name.clone(),
            kind: self.kind,
            pattern: self.pattern,
            amount: self.amount,
            start_period: self.start_period.offset(by),
            units: self.units.as_ref().map(|u| u.shifted(by, horizon)),
        }
    }
}

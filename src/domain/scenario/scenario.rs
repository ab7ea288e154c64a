//! Scenario - one architectural option as a bundle of cash-flow components.

use once_cell::sync::OnceCell;

use super::series::DerivedSeries;
use super::Breakeven;
use crate::domain::cashflow::CashFlowComponent;
use crate::domain::foundation::{
    DiscountRate, EconomicsError, Period, Timeline, ValidationError,
};

/// A named option (e.g. "Monolith") over a fixed horizon.
///
/// Derived series are computed on first read and cached until a component
/// is added or removed. Mutation needs `&mut self`, so readers sharing a
/// `&Scenario` never observe a half-updated cache.
#[derive(Debug, Clone)]
pub struct Scenario {
    name: String,
    timeline: Timeline,
    components: Vec<CashFlowComponent>,
    derived: OnceCell<DerivedSeries>,
}

impl Scenario {
    /// Creates an empty scenario with `horizon` periods.
    pub fn new(name: impl Into<String>, horizon: usize) -> Result<Self, EconomicsError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("scenario name").into());
        }
        Ok(Self {
            name,
            timeline: Timeline::new(horizon)?,
            components: Vec::new(),
            derived: OnceCell::new(),
        })
    }

    /// Adds a component and returns the scenario (for chained construction).
    pub fn with_component(mut self, component: CashFlowComponent) -> Result<Self, EconomicsError> {
        self.add_component(component)?;
        Ok(self)
    }

    /// Appends a component and invalidates cached series.
    ///
    /// # Errors
    /// - `HorizonMismatch` if the component's unit series is longer than the horizon
    /// - `DuplicateName` if a component with the same name already exists
    pub fn add_component(&mut self, component: CashFlowComponent) -> Result<(), EconomicsError> {
        if let Some(required) = component.implied_horizon() {
            if required > self.timeline.horizon() {
                return Err(EconomicsError::HorizonMismatch {
                    scenario: self.name.clone(),
                    component: component.name().to_string(),
                    required,
                    horizon: self.timeline.horizon(),
                });
            }
        }
        if self.component(component.name()).is_some() {
            return Err(EconomicsError::DuplicateName(format!(
                "{}/{}",
                self.name,
                component.name()
            )));
        }

        self.components.push(component);
        self.derived.take();
        Ok(())
    }

    /// Removes a component by name, invalidating cached series.
    pub fn remove_component(&mut self, name: &str) -> Option<CashFlowComponent> {
        let idx = self.components.iter().position(|c| c.name() == name)?;
        self.derived.take();
        Some(self.components.remove(idx))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn horizon(&self) -> usize {
        self.timeline.horizon()
    }

    pub fn components(&self) -> &[CashFlowComponent] {
        &self.components
    }

    /// Finds a component by name.
    pub fn component(&self, name: &str) -> Option<&CashFlowComponent> {
        self.components.iter().find(|c| c.name() == name)
    }

    fn derived(&self) -> Result<&DerivedSeries, EconomicsError> {
        self.derived
            .get_or_try_init(|| DerivedSeries::compute(&self.timeline, &self.components))
    }

    fn check_period(&self, period: Period) -> Result<usize, EconomicsError> {
        if !self.timeline.contains(period) {
            return Err(EconomicsError::PeriodOutOfRange {
                scenario: self.name.clone(),
                period,
                horizon: self.timeline.horizon(),
            });
        }
        Ok(period.index())
    }

    /// Total cost per period; entry `i` sums every COST component at period `i`.
    pub fn cost_series(&self) -> Result<&[f64], EconomicsError> {
        Ok(&self.derived()?.costs)
    }

    /// Total benefit per period.
    pub fn benefit_series(&self) -> Result<&[f64], EconomicsError> {
        Ok(&self.derived()?.benefits)
    }

    /// Benefit minus cost per period.
    pub fn net_series(&self) -> Result<&[f64], EconomicsError> {
        Ok(&self.derived()?.net)
    }

    /// Cost from period 0 through `period` inclusive.
    pub fn cumulative_cost(&self, period: Period) -> Result<f64, EconomicsError> {
        let idx = self.check_period(period)?;
        Ok(self.derived()?.cumulative_costs[idx])
    }

    /// Benefit from period 0 through `period` inclusive.
    pub fn cumulative_benefit(&self, period: Period) -> Result<f64, EconomicsError> {
        let idx = self.check_period(period)?;
        Ok(self.derived()?.cumulative_benefits[idx])
    }

    /// Cumulative benefit minus cumulative cost at `period`.
    pub fn net_benefit(&self, period: Period) -> Result<f64, EconomicsError> {
        Ok(self.cumulative_benefit(period)? - self.cumulative_cost(period)?)
    }

    /// Cumulative-to-date ROI: `(benefit - cost) / cost` through `period`.
    ///
    /// # Errors
    /// `DivisionByZero` when nothing has been spent yet. Callers decide the
    /// fallback; comparisons report the ROI as undefined.
    pub fn roi(&self, period: Period) -> Result<f64, EconomicsError> {
        let cost = self.cumulative_cost(period)?;
        let benefit = self.cumulative_benefit(period)?;
        self.ratio(benefit, cost, period)
    }

    /// ROI over the window `from..=to` only (e.g. "ROI over year two").
    pub fn roi_between(&self, from: Period, to: Period) -> Result<f64, EconomicsError> {
        if from > to {
            return Err(ValidationError::invalid_format(
                "period range",
                format!("{} comes after {}", from, to),
            )
            .into());
        }
        let start = self.check_period(from)?;
        let end = self.check_period(to)?;
        let derived = self.derived()?;

        let cost: f64 = derived.costs[start..=end].iter().sum();
        let benefit: f64 = derived.benefits[start..=end].iter().sum();
        self.ratio(benefit, cost, to)
    }

    fn ratio(&self, benefit: f64, cost: f64, period: Period) -> Result<f64, EconomicsError> {
        if cost == 0.0 {
            return Err(EconomicsError::DivisionByZero {
                scenario: self.name.clone(),
                period,
            });
        }
        Ok((benefit - cost) / cost)
    }

    /// Smallest period where cumulative benefit >= cumulative cost.
    pub fn breakeven_period(&self) -> Result<Breakeven, EconomicsError> {
        let derived = self.derived()?;
        Ok(Breakeven::first_crossing(
            &derived.cumulative_costs,
            &derived.cumulative_benefits,
        ))
    }

    /// Breakeven on discounted flows (discounted payback period).
    pub fn discounted_breakeven_period(
        &self,
        rate: DiscountRate,
    ) -> Result<Breakeven, EconomicsError> {
        let derived = self.derived()?;
        let discounted = |values: &[f64]| -> Vec<f64> {
            self.timeline
                .periods()
                .scan(0.0, |total, period| {
                    *total += rate.present_value(values[period.index()], period);
                    Some(*total)
                })
                .collect()
        };

        Ok(Breakeven::first_crossing(
            &discounted(&derived.costs),
            &discounted(&derived.benefits),
        ))
    }

    /// Net present value: `Σ (benefit[t] - cost[t]) / (1 + rate)^t` over the horizon.
    pub fn npv(&self, rate: DiscountRate) -> Result<f64, EconomicsError> {
        let net = &self.derived()?.net;
        Ok(self
            .timeline
            .periods()
            .map(|period| rate.present_value(net[period.index()], period))
            .sum())
    }

    /// The same option started `by` periods later, over the same horizon.
    ///
    /// Useful for "build now or later" comparisons. Flows pushed past the
    /// horizon drop out.
    pub fn deferred(&self, name: impl Into<String>, by: usize) -> Result<Scenario, EconomicsError> {
        let horizon = self.timeline.horizon();
        let mut later = Scenario::new(name, horizon)?;
        for component in &self.components {
            later.add_component(component.shifted(by, horizon))?;
        }
        Ok(later)
    }
}

#[cfg(test)]
#[path = "scenario_test.rs"]
mod scenario_test;

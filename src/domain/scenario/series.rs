//! Per-period series derived from a scenario's components.

use crate::domain::cashflow::CashFlowComponent;
use crate::domain::foundation::{EconomicsError, Timeline};

/// Cost, benefit and running totals for every period of the horizon.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DerivedSeries {
    pub costs: Vec<f64>,
    pub benefits: Vec<f64>,
    pub net: Vec<f64>,
    pub cumulative_costs: Vec<f64>,
    pub cumulative_benefits: Vec<f64>,
}

impl DerivedSeries {
    /// Sums every component into per-period buckets, then takes prefix sums.
    ///
    /// Amounts are non-negative, so both prefix sums are non-decreasing.
    pub fn compute(
        timeline: &Timeline,
        components: &[CashFlowComponent],
    ) -> Result<Self, EconomicsError> {
        let horizon = timeline.horizon();
        let mut costs = vec![0.0; horizon];
        let mut benefits = vec![0.0; horizon];
        let mut net = vec![0.0; horizon];

        for component in components {
            let sign = component.kind().sign();
            let bucket = if component.is_cost() {
                &mut costs
            } else {
                &mut benefits
            };
            for period in timeline.periods() {
                let amount = component.amount_at(period)?;
                bucket[period.index()] += amount;
                net[period.index()] += sign * amount;
            }
        }

        let cumulative_costs = prefix_sums(&costs);
        let cumulative_benefits = prefix_sums(&benefits);

        Ok(Self {
            costs,
            benefits,
            net,
            cumulative_costs,
            cumulative_benefits,
        })
    }
}

fn prefix_sums(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |total, v| {
            *total += v;
            Some(*total)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_sums_accumulate() {
        assert_eq!(prefix_sums(&[1.0, 2.0, 3.0]), vec![1.0, 3.0, 6.0]);
        assert!(prefix_sums(&[]).is_empty());
    }

    #[test]
    fn compute_splits_costs_and_benefits() {
        let timeline = Timeline::new(3).unwrap();
        let components = vec![
            CashFlowComponent::one_time_cost("build", 10.0, 0).unwrap(),
            CashFlowComponent::recurring_benefit("savings", 4.0, 1).unwrap(),
        ];

        let series = DerivedSeries::compute(&timeline, &components).unwrap();
        assert_eq!(series.costs, vec![10.0, 0.0, 0.0]);
        assert_eq!(series.benefits, vec![0.0, 4.0, 4.0]);
        assert_eq!(series.net, vec![-10.0, 4.0, 4.0]);
        assert_eq!(series.cumulative_benefits, vec![0.0, 4.0, 8.0]);
    }

    #[test]
    fn components_starting_after_horizon_are_inert() {
        let timeline = Timeline::new(3).unwrap();
        let components = vec![CashFlowComponent::recurring_cost("later", 5.0, 9).unwrap()];

        let series = DerivedSeries::compute(&timeline, &components).unwrap();
        assert_eq!(series.cumulative_costs, vec![0.0, 0.0, 0.0]);
    }
}

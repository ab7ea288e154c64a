//! Ranking Analyzer - deterministic ordering of compared scenarios.

use std::cmp::Ordering;

use super::ScenarioMetrics;

/// Orders scenarios for comparison reports.
pub struct RankingAnalyzer;

impl RankingAnalyzer {
    /// Ranks scenarios by ROI, best first.
    ///
    /// # Algorithm
    /// 1. Defined ROI before undefined ROI
    /// 2. Higher ROI first
    /// 3. Lower cumulative cost first
    /// 4. Earlier insertion first
    ///
    /// The input order is taken as insertion order, so the result is fully
    /// determined by the input.
    pub fn rank_by_roi(entries: &[ScenarioMetrics]) -> Vec<String> {
        let mut order: Vec<usize> = (0..entries.len()).collect();
        order.sort_by(|&a, &b| Self::compare(&entries[a], &entries[b]).then(a.cmp(&b)));
        order
            .into_iter()
            .map(|idx| entries[idx].scenario.clone())
            .collect()
    }

    fn compare(a: &ScenarioMetrics, b: &ScenarioMetrics) -> Ordering {
        let by_roi = match (a.roi, b.roi) {
            (Some(x), Some(y)) => y.total_cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_roi.then_with(|| a.cumulative_cost.total_cmp(&b.cumulative_cost))
    }
}

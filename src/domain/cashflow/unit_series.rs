//! Caller-supplied per-period unit counts that drive PER_UNIT line items.

use serde::Serialize;

use crate::domain::foundation::{Period, ValidationError};

/// Non-negative unit counts indexed by period (e.g. features shipped per month).
///
/// Periods past the end of the series have no entry and contribute nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct UnitSeries(Vec<f64>);

impl UnitSeries {
    /// Creates a unit series, rejecting negative or non-finite entries.
    pub fn try_new(units: Vec<f64>) -> Result<Self, ValidationError> {
        if let Some((idx, bad)) = units
            .iter()
            .enumerate()
            .find(|(_, u)| !u.is_finite() || **u < 0.0)
        {
            return Err(ValidationError::invalid_format(
                "units",
                format!("entry {} must be a non-negative number, got {}", idx, bad),
            ));
        }
        Ok(Self(units))
    }

    /// Units recorded for `period`, if the series reaches that far.
    pub fn get(&self, period: Period) -> Option<f64> {
        self.0.get(period.index()).copied()
    }

    /// Number of periods covered.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the series has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw unit counts.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Delays the series by `by` periods and cuts it to `max_len` entries.
    pub fn shifted(&self, by: usize, max_len: usize) -> Self {
        let units = std::iter::repeat(0.0)
            .take(by)
            .chain(self.0.iter().copied())
            .take(max_len)
            .collect();
        Self(units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_units() {
        let err = UnitSeries::try_new(vec![1.0, -2.0]).unwrap_err();
        assert!(format!("{}", err).contains("entry 1"));
    }

    #[test]
    fn rejects_non_finite_units() {
        assert!(UnitSeries::try_new(vec![f64::INFINITY]).is_err());
    }

    #[test]
    fn get_returns_none_past_end() {
        let units = UnitSeries::try_new(vec![0.0, 3.0]).unwrap();
        assert_eq!(units.get(Period::new(1)), Some(3.0));
        assert_eq!(units.get(Period::new(2)), None);
    }

    #[test]
    fn shifted_prepends_zeros_and_truncates() {
        let units = UnitSeries::try_new(vec![1.0, 2.0, 3.0]).unwrap();
        let later = units.shifted(2, 4);
        assert_eq!(later.as_slice(), &[0.0, 0.0, 1.0, 2.0]);
    }
}

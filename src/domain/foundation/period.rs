//! Period index and the fixed-horizon timeline that bounds it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A discrete time bucket, counted from the start of the model (0-based).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Period(usize);

impl Period {
    /// The first period of every timeline.
    pub const START: Self = Self(0);

    /// Creates a period from a 0-based index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Creates a period from a signed index, rejecting negative values.
    pub fn try_from_signed(index: i64) -> Result<Self, ValidationError> {
        usize::try_from(index)
            .map(Self)
            .map_err(|_| ValidationError::out_of_range("period", 0.0, usize::MAX as f64, index as f64))
    }

    /// Returns the 0-based index.
    pub fn index(&self) -> usize {
        self.0
    }

    /// Returns the period `by` buckets later.
    pub fn offset(&self, by: usize) -> Self {
        Self(self.0.saturating_add(by))
    }
}

impl From<usize> for Period {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "period {}", self.0)
    }
}

/// Ordered periods `0..horizon`. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Timeline {
    horizon: usize,
}

impl Timeline {
    /// Creates a timeline with `horizon` periods.
    pub fn new(horizon: usize) -> Result<Self, ValidationError> {
        if horizon == 0 {
            return Err(ValidationError::out_of_range(
                "horizon",
                1.0,
                usize::MAX as f64,
                0.0,
            ));
        }
        Ok(Self { horizon })
    }

    /// Number of periods.
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Iterates `0..horizon` in order.
    pub fn periods(&self) -> impl Iterator<Item = Period> + '_ {
        (0..self.horizon).map(Period::new)
    }

    /// Returns true if `period` lies inside the horizon.
    pub fn contains(&self, period: Period) -> bool {
        period.index() < self.horizon
    }

    /// The final period of the horizon.
    pub fn last(&self) -> Period {
        Period::new(self.horizon - 1)
    }
}

impl TryFrom<usize> for Timeline {
    type Error = ValidationError;

    fn try_from(horizon: usize) -> Result<Self, Self::Error> {
        Timeline::new(horizon)
    }
}

impl From<Timeline> for usize {
    fn from(timeline: Timeline) -> Self {
        timeline.horizon
    }
}

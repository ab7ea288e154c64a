//! Per-period discount rate used to bring future cash flows to present value.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{EconomicsError, Period};

/// A non-negative per-period discount rate (0.01 = 1% per period).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DiscountRate(f64);

impl DiscountRate {
    /// No discounting: NPV equals the plain sum of net cash flow.
    pub const ZERO: Self = Self(0.0);

    /// Creates a rate, rejecting negative or non-finite values.
    pub fn try_new(rate: f64) -> Result<Self, EconomicsError> {
        if !rate.is_finite() || rate < 0.0 {
            return Err(EconomicsError::InvalidRate { rate });
        }
        Ok(Self(rate))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Multiplier for a cash flow in `period`: `1 / (1 + rate)^period`.
    pub fn factor(&self, period: Period) -> f64 {
        (1.0 + self.0).powf(period.index() as f64).recip()
    }

    /// Present value of `amount` received in `period`.
    pub fn present_value(&self, amount: f64, period: Period) -> f64 {
        amount * self.factor(period)
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<f64> for DiscountRate {
    type Error = EconomicsError;

    fn try_from(rate: f64) -> Result<Self, Self::Error> {
        DiscountRate::try_new(rate)
    }
}

impl From<DiscountRate> for f64 {
    fn from(rate: DiscountRate) -> Self {
        rate.0
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% per period", self.0 * 100.0)
    }
}

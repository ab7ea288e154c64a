//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary of the
//! decision economics domain.

mod discount_rate;
mod errors;
mod period;
mod probability;

pub use discount_rate::DiscountRate;
pub use errors::{EconomicsError, ErrorCode, ValidationError};
pub use period::{Period, Timeline};
pub use probability::Probability;

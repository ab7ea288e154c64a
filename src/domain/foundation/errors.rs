//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

use super::Period;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Stable error codes for callers that branch on the failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationFailed,
    InvalidComponent,
    HorizonMismatch,
    ConfigurationMissing,
    DivisionByZero,
    InvalidRate,
    ProbabilitySum,
    PeriodOutOfRange,
    ScenarioNotFound,
    DecisionPointNotFound,
    DuplicateName,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidComponent => "INVALID_COMPONENT",
            ErrorCode::HorizonMismatch => "HORIZON_MISMATCH",
            ErrorCode::ConfigurationMissing => "CONFIGURATION_MISSING",
            ErrorCode::DivisionByZero => "DIVISION_BY_ZERO",
            ErrorCode::InvalidRate => "INVALID_RATE",
            ErrorCode::ProbabilitySum => "PROBABILITY_SUM",
            ErrorCode::PeriodOutOfRange => "PERIOD_OUT_OF_RANGE",
            ErrorCode::ScenarioNotFound => "SCENARIO_NOT_FOUND",
            ErrorCode::DecisionPointNotFound => "DECISION_POINT_NOT_FOUND",
            ErrorCode::DuplicateName => "DUPLICATE_NAME",
        };
        write!(f, "{}", s)
    }
}

/// Errors raised by the decision economics engine.
///
/// Every variant names the scenario, component, period or decision point it
/// concerns. All of them are local to the call that produced them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EconomicsError {
    #[error("Component '{component}' is invalid: {reason}")]
    InvalidComponent { component: String, reason: String },

    #[error(
        "Component '{component}' spans {required} periods but scenario '{scenario}' has a horizon of {horizon}"
    )]
    HorizonMismatch {
        scenario: String,
        component: String,
        required: usize,
        horizon: usize,
    },

    #[error(
        "Scenario '{scenario}' has a horizon of {horizon} periods but '{reference}' has {expected}; all scenarios in a model share one horizon"
    )]
    ScenarioHorizonMismatch {
        scenario: String,
        reference: String,
        horizon: usize,
        expected: usize,
    },

    #[error("Missing configuration for '{subject}': {reason}")]
    Configuration { subject: String, reason: String },

    #[error("ROI is undefined for scenario '{scenario}' at {period}: cumulative cost is zero")]
    DivisionByZero { scenario: String, period: Period },

    #[error("Discount rate must be a non-negative number, got {rate}")]
    InvalidRate { rate: f64 },

    #[error(
        "Branch probabilities of decision point '{decision_point}' sum to {sum}, expected 1.0 (tolerance {tolerance})"
    )]
    ProbabilitySum {
        decision_point: String,
        sum: f64,
        tolerance: f64,
    },

    #[error("{period} is outside the {horizon}-period horizon of '{scenario}'")]
    PeriodOutOfRange {
        scenario: String,
        period: Period,
        horizon: usize,
    },

    #[error("Scenario '{0}' not found")]
    ScenarioNotFound(String),

    #[error("Decision point '{0}' not found")]
    DecisionPointNotFound(String),

    #[error("Name '{0}' is already defined")]
    DuplicateName(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl EconomicsError {
    /// Creates an invalid component error.
    pub fn invalid_component(component: impl Into<String>, reason: impl Into<String>) -> Self {
        EconomicsError::InvalidComponent {
            component: component.into(),
            reason: reason.into(),
        }
    }

    /// Creates a missing-configuration error.
    pub fn configuration(subject: impl Into<String>, reason: impl Into<String>) -> Self {
        EconomicsError::Configuration {
            subject: subject.into(),
            reason: reason.into(),
        }
    }

    /// Returns the stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EconomicsError::InvalidComponent { .. } => ErrorCode::InvalidComponent,
            EconomicsError::HorizonMismatch { .. }
            | EconomicsError::ScenarioHorizonMismatch { .. } => ErrorCode::HorizonMismatch,
            EconomicsError::Configuration { .. } => ErrorCode::ConfigurationMissing,
            EconomicsError::DivisionByZero { .. } => ErrorCode::DivisionByZero,
            EconomicsError::InvalidRate { .. } => ErrorCode::InvalidRate,
            EconomicsError::ProbabilitySum { .. } => ErrorCode::ProbabilitySum,
            EconomicsError::PeriodOutOfRange { .. } => ErrorCode::PeriodOutOfRange,
            EconomicsError::ScenarioNotFound(_) => ErrorCode::ScenarioNotFound,
            EconomicsError::DecisionPointNotFound(_) => ErrorCode::DecisionPointNotFound,
            EconomicsError::DuplicateName(_) => ErrorCode::DuplicateName,
            EconomicsError::Validation(_) => ErrorCode::ValidationFailed,
        }
    }

    /// Returns true when the error only means "this metric is undefined".
    ///
    /// Comparisons report such scenarios with a sentinel instead of failing.
    pub fn is_undefined_metric(&self) -> bool {
        matches!(self, EconomicsError::DivisionByZero { .. })
    }
}

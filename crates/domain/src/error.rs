//! Errors raised by the position and range calculations.

use thiserror::Error;

/// Errors produced by the pure calculation functions.
///
/// The form layer validates inputs before calling into the domain, so these
/// only surface when the domain API is used directly or when a value is too
/// large for the numeric type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    /// An input that must be strictly positive was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveInput(&'static str),
    /// An intermediate value does not fit in the numeric type.
    #[error("arithmetic overflow while computing {0}")]
    Overflow(&'static str),
}

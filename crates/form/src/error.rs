use crate::validation::ValidationFailure;
use hedge_calc_domain::CalculationError;
use thiserror::Error;

/// Why a calculate trigger did not produce a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationFailure),
    #[error(transparent)]
    Calculation(#[from] CalculationError),
}

//! Validation of raw form text into a calculation request.

use crate::field::{FieldKind, FormField};
use crate::inputs::FormInputs;
use crate::parse::{ParseFailure, parse_decimal};
use hedge_calc_domain::{CalculationRequest, Percentage, Price, TokenSymbol};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Sign rule applied to the upper and lower bound percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoundPolicy {
    /// Bounds must be zero or greater.
    #[default]
    NonNegative,
    /// Any finite bound is accepted, including negative distances.
    Unchecked,
}

/// What to do once a field fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FailurePolicy {
    /// Check every field and report all failures together.
    #[default]
    CollectAll,
    /// Stop at the first failing field.
    FailFast,
}

/// Configuration for the [`Validator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub bound_policy: BoundPolicy,
    pub failure_policy: FailurePolicy,
}

/// A single violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{} must be a number", .field.label())]
    NotANumber { field: FormField },
    #[error("{} is outside the supported numeric range", .field.label())]
    OutOfRange { field: FormField },
    #[error("{} must be greater than zero", .field.label())]
    NotPositive { field: FormField },
    #[error("{} cannot be negative", .field.label())]
    Negative { field: FormField },
    #[error("{} is required", .field.label())]
    EmptySymbol { field: FormField },
}

impl ValidationError {
    pub fn field(&self) -> FormField {
        match self {
            Self::NotANumber { field }
            | Self::OutOfRange { field }
            | Self::NotPositive { field }
            | Self::Negative { field }
            | Self::EmptySymbol { field } => *field,
        }
    }
}

/// One or more validation errors, in field order.
///
/// Displays as a single message with the errors joined by `"; "`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", JoinedErrors(.errors))]
pub struct ValidationFailure {
    errors: Vec<ValidationError>,
}

struct JoinedErrors<'a>(&'a [ValidationError]);

impl fmt::Display for JoinedErrors<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl ValidationFailure {
    fn new(errors: Vec<ValidationError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self { errors }
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The first violated constraint in field order.
    pub fn first(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.errors.iter().map(ValidationError::field)
    }
}

/// Turns [`FormInputs`] into a [`CalculationRequest`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validates every field in [`FormField::ALL`] order.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationFailure`] holding every failing field, or only
    /// the first one under [`FailurePolicy::FailFast`].
    pub fn validate(&self, inputs: &FormInputs) -> Result<CalculationRequest, ValidationFailure> {
        let mut errors = Vec::new();

        let token1_price = self.record(positive(inputs, FormField::Token1Price), &mut errors)?;
        let token2_price = self.record(positive(inputs, FormField::Token2Price), &mut errors)?;
        let total_value = self.record(positive(inputs, FormField::TotalLiquidity), &mut errors)?;
        let upper_bound = self.record(self.bound(inputs, FormField::UpperBound), &mut errors)?;
        let lower_bound = self.record(self.bound(inputs, FormField::LowerBound), &mut errors)?;
        let token1_symbol = self.record(symbol(inputs, FormField::Token1Symbol), &mut errors)?;
        let token2_symbol = self.record(symbol(inputs, FormField::Token2Symbol), &mut errors)?;

        match (
            token1_price,
            token2_price,
            total_value,
            upper_bound,
            lower_bound,
            token1_symbol,
            token2_symbol,
        ) {
            (
                Some(token1_price),
                Some(token2_price),
                Some(total_value),
                Some(upper_bound),
                Some(lower_bound),
                Some(token1_symbol),
                Some(token2_symbol),
            ) if errors.is_empty() => Ok(CalculationRequest {
                token1_symbol,
                token2_symbol,
                token1_price_usd: Price::new(token1_price),
                token2_price_usd: Price::new(token2_price),
                total_value_usd: total_value,
                upper_bound,
                lower_bound,
            }),
            _ => Err(ValidationFailure::new(errors)),
        }
    }

    /// Applies the failure policy to one field outcome.
    fn record<T>(
        &self,
        outcome: Result<T, ValidationError>,
        errors: &mut Vec<ValidationError>,
    ) -> Result<Option<T>, ValidationFailure> {
        match outcome {
            Ok(value) => Ok(Some(value)),
            Err(error) => {
                debug!(field = %error.field(), error = %error, "Field failed validation");
                errors.push(error);
                match self.config.failure_policy {
                    FailurePolicy::FailFast => Err(ValidationFailure::new(std::mem::take(errors))),
                    FailurePolicy::CollectAll => Ok(None),
                }
            }
        }
    }

    fn bound(
        &self,
        inputs: &FormInputs,
        field: FormField,
    ) -> Result<Percentage, ValidationError> {
        debug_assert_eq!(field.kind(), FieldKind::BoundPercentage);
        let bound = Percentage::from_percent(number(inputs, field)?);
        if self.config.bound_policy == BoundPolicy::NonNegative && bound.is_negative() {
            return Err(ValidationError::Negative { field });
        }
        Ok(bound)
    }
}

fn number(inputs: &FormInputs, field: FormField) -> Result<Decimal, ValidationError> {
    parse_decimal(inputs.get(field)).map_err(|failure| match failure {
        ParseFailure::OutOfRange => ValidationError::OutOfRange { field },
        ParseFailure::Empty | ParseFailure::NotANumber => ValidationError::NotANumber { field },
    })
}

fn positive(inputs: &FormInputs, field: FormField) -> Result<Decimal, ValidationError> {
    debug_assert_eq!(field.kind(), FieldKind::PositiveNumber);
    let value = number(inputs, field)?;
    if value <= Decimal::ZERO {
        return Err(ValidationError::NotPositive { field });
    }
    Ok(value)
}

fn symbol(inputs: &FormInputs, field: FormField) -> Result<TokenSymbol, ValidationError> {
    debug_assert_eq!(field.kind(), FieldKind::Symbol);
    TokenSymbol::parse(inputs.get(field)).ok_or(ValidationError::EmptySymbol { field })
}

//! The calculator form controller.
//!
//! [`HedgeForm`] owns the raw inputs, the last result and the last error
//! message. It moves between three observable phases:
//!
//! ```text
//! Idle --calculate--> Displaying       (validation and calculation succeeded)
//! Idle --calculate--> ErrorDisplayed   (validation or calculation failed)
//! Displaying | ErrorDisplayed --edit--> Idle
//! ```
//!
//! Validation happens inside [`HedgeForm::calculate`] and is never observable
//! as a phase of its own.

use crate::error::FormError;
use crate::field::FormField;
use crate::inputs::FormInputs;
use crate::validation::{ValidationConfig, Validator};
use hedge_calc_domain::{CalculationResult, calculate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Observable state of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FormPhase {
    /// Waiting for the next calculate trigger.
    #[default]
    Idle,
    /// The last trigger produced a result.
    Displaying,
    /// The last trigger produced an error message.
    ErrorDisplayed,
}

/// Form state plus the validator that guards the calculation.
#[derive(Debug, Clone, Default)]
pub struct HedgeForm {
    inputs: FormInputs,
    validator: Validator,
    result: Option<CalculationResult>,
    error: Option<String>,
    phase: FormPhase,
}

impl HedgeForm {
    /// Creates a form with default inputs.
    #[must_use]
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            validator: Validator::new(config),
            ..Self::default()
        }
    }

    /// Replaces the starting inputs.
    #[must_use]
    pub fn with_inputs(mut self, inputs: FormInputs) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn inputs(&self) -> &FormInputs {
        &self.inputs
    }

    pub fn get(&self, field: FormField) -> &str {
        self.inputs.get(field)
    }

    /// Updates one field. The last result or error stays visible but is no
    /// longer current, so the form returns to [`FormPhase::Idle`].
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        debug!(field = %field, value = %value, "Field edited");
        self.inputs.set(field, value);
        self.phase = FormPhase::Idle;
    }

    /// Validates the inputs and, when they are valid, runs the calculation.
    ///
    /// On success the new result replaces the previous one and any error is
    /// cleared. On failure the message is stored and the previous result is
    /// discarded.
    pub fn calculate(&mut self) -> Result<&CalculationResult, FormError> {
        let outcome = self
            .validator
            .validate(&self.inputs)
            .map_err(FormError::from)
            .and_then(|request| calculate(&request).map_err(FormError::from));

        match outcome {
            Ok(result) => {
                info!(
                    pair = %result.pair_label(),
                    token1_amount = %result.token1_amount,
                    token2_amount = %result.token2_amount,
                    pair_price = %result.pair_price,
                    "Position calculated"
                );
                self.error = None;
                self.phase = FormPhase::Displaying;
                Ok(&*self.result.insert(result))
            }
            Err(error) => {
                warn!(error = %error, "Calculation rejected");
                self.result = None;
                self.error = Some(error.to_string());
                self.phase = FormPhase::ErrorDisplayed;
                Err(error)
            }
        }
    }

    /// Restores default inputs and clears the result and error.
    pub fn reset(&mut self) {
        debug!("Form reset");
        self.inputs = FormInputs::default();
        self.result = None;
        self.error = None;
        self.phase = FormPhase::Idle;
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn validation_config(&self) -> &ValidationConfig {
        self.validator.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{FailurePolicy, ValidationError};
    use rust_decimal_macros::dec;

    #[test]
    fn test_starts_idle_with_defaults() {
        let form = HedgeForm::default();
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.get(FormField::Token2Symbol), "WETH");
        assert!(form.result().is_none());
        assert!(form.error().is_none());
    }

    #[test]
    fn test_calculate_defaults() {
        let mut form = HedgeForm::default();
        let result = form.calculate().unwrap();

        assert_eq!(result.token2_amount, dec!(2));
        assert_eq!(result.pair_price.value, dec!(0.0002844));
        assert_eq!(form.phase(), FormPhase::Displaying);
        assert!(form.error().is_none());
    }

    #[test]
    fn test_edit_returns_to_idle_without_recomputing() {
        let mut form = HedgeForm::default();
        form.calculate().unwrap();
        let before = form.result().cloned();

        form.set(FormField::TotalLiquidity, "20000");

        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.result().cloned(), before);
    }

    #[test]
    fn test_invalid_input_clears_previous_result() {
        let mut form = HedgeForm::default();
        form.calculate().unwrap();

        form.set(FormField::TotalLiquidity, "abc");
        let error = form.calculate().unwrap_err();

        assert!(matches!(error, FormError::Validation(_)));
        assert!(form.result().is_none());
        assert_eq!(form.phase(), FormPhase::ErrorDisplayed);
        assert!(form.error().unwrap().contains("Total Liquidity"));
    }

    #[test]
    fn test_empty_symbol_yields_no_result() {
        let mut form = HedgeForm::default();
        form.set(FormField::Token1Symbol, "");

        match form.calculate() {
            Err(FormError::Validation(failure)) => assert_eq!(
                failure.first(),
                Some(&ValidationError::EmptySymbol {
                    field: FormField::Token1Symbol
                })
            ),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(form.result().is_none());
        assert_eq!(form.error(), Some("Token 1 Symbol is required"));
    }

    #[test]
    fn test_success_after_error_clears_message() {
        let mut form = HedgeForm::default();
        form.set(FormField::Token1Price, "-1");
        assert!(form.calculate().is_err());

        form.set(FormField::Token1Price, "1");
        assert_eq!(form.phase(), FormPhase::Idle);
        assert!(form.error().is_some());

        form.calculate().unwrap();
        assert!(form.error().is_none());
        assert_eq!(form.phase(), FormPhase::Displaying);
    }

    #[test]
    fn test_result_reflects_inputs_at_trigger() {
        let mut form = HedgeForm::default();
        form.set(FormField::Token1Price, "100");
        form.set(FormField::Token2Price, "50");
        form.set(FormField::UpperBound, "10");
        form.set(FormField::LowerBound, "5");
        form.calculate().unwrap();

        let result = form.result().unwrap();
        assert_eq!(result.pair_price.value, dec!(2));
        assert_eq!(result.price_range.upper_price.value, dec!(2.2));
        assert_eq!(result.price_range.lower_price.value, dec!(1.9));
        assert_eq!(result.token1_amount, dec!(50));
        assert_eq!(result.token2_amount, dec!(100));
    }

    #[test]
    fn test_calculation_overflow_surfaces_as_error() {
        let mut form = HedgeForm::default();
        form.set(FormField::Token1Price, "0.0000000000000000000000000001");
        form.set(FormField::TotalLiquidity, "79228162514264337593543950335");

        assert!(matches!(form.calculate(), Err(FormError::Calculation(_))));
        assert_eq!(form.phase(), FormPhase::ErrorDisplayed);
    }

    #[test]
    fn test_reset() {
        let mut form = HedgeForm::new(ValidationConfig {
            failure_policy: FailurePolicy::FailFast,
            ..ValidationConfig::default()
        });
        form.set(FormField::Token1Symbol, "");
        let _ = form.calculate();

        form.reset();

        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.get(FormField::Token1Symbol), "S");
        assert!(form.error().is_none());
        assert_eq!(
            form.validation_config().failure_policy,
            FailurePolicy::FailFast
        );
    }
}

//! Input handling for the hedge calculator: raw form fields, parsing,
//! validation and the form controller that drives the calculation.

pub mod error;
pub mod field;
pub mod form;
pub mod inputs;
pub mod parse;
pub mod prelude;
pub mod validation;

pub use error::FormError;
pub use field::{FieldKind, FormField, UnknownField};
pub use form::{FormPhase, HedgeForm};
pub use inputs::FormInputs;
pub use parse::{ParseFailure, parse_decimal};
pub use validation::{
    BoundPolicy, FailurePolicy, ValidationConfig, ValidationError, ValidationFailure, Validator,
};

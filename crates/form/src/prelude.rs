//! Prelude module for convenient imports.
//!
//! ```rust
//! use hedge_calc_form::prelude::*;
//! ```

pub use crate::error::FormError;
pub use crate::field::{FormField, UnknownField};
pub use crate::form::{FormPhase, HedgeForm};
pub use crate::inputs::FormInputs;
pub use crate::validation::{BoundPolicy, FailurePolicy, ValidationConfig, Validator};
pub use hedge_calc_domain::{CalculationResult, Price, PriceRange, TokenSymbol};

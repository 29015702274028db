//! Prelude module for convenient imports.
//!
//! ```rust
//! use hedge_calc_domain::prelude::*;
//! ```

pub use crate::calculation::{CalculationRequest, calculate};
pub use crate::error::CalculationError;
pub use crate::math::{PositionSplit, split_position};
pub use crate::token::TokenSymbol;
pub use crate::value_objects::{
    CalculationResult, InvertedPriceRange, Percentage, Price, PriceRange,
};

//! Domain types and closed-form math for sizing a two-token liquidity
//! position and its delta-neutral hedge.
//!
//! This crate contains no I/O and no global state.

pub mod calculation;
pub mod error;
pub mod math;
pub mod prelude;
pub mod token;
pub mod value_objects;

pub use calculation::{CalculationRequest, calculate};
pub use error::CalculationError;
pub use token::TokenSymbol;
pub use value_objects::{
    CalculationResult, InvertedPriceRange, Percentage, Price, PriceRange,
};

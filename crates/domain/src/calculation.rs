//! End-to-end calculation: position split followed by range derivation.

use crate::error::CalculationError;
use crate::math::split_position;
use crate::token::TokenSymbol;
use crate::value_objects::calculation_result::CalculationResult;
use crate::value_objects::percentage::Percentage;
use crate::value_objects::price::Price;
use crate::value_objects::price_range::PriceRange;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fully parsed inputs for one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub token1_symbol: TokenSymbol,
    pub token2_symbol: TokenSymbol,
    pub token1_price_usd: Price,
    pub token2_price_usd: Price,
    pub total_value_usd: Decimal,
    pub upper_bound: Percentage,
    pub lower_bound: Percentage,
}

/// Sizes the position and hedge, then derives the price range around the
/// resulting pair price.
pub fn calculate(request: &CalculationRequest) -> Result<CalculationResult, CalculationError> {
    let split = split_position(
        request.token1_price_usd,
        request.token2_price_usd,
        request.total_value_usd,
    )?;
    let range = PriceRange::around(split.pair_price, request.upper_bound, request.lower_bound)?;

    Ok(CalculationResult::from_parts(request, split, range))
}

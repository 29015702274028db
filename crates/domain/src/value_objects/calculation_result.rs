use crate::calculation::CalculationRequest;
use crate::math::PositionSplit;
use crate::token::TokenSymbol;
use crate::value_objects::percentage::Percentage;
use crate::value_objects::price::Price;
use crate::value_objects::price_range::PriceRange;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Everything produced by a single calculation.
///
/// A result is created whole from one set of inputs and never patched
/// afterwards; a new calculation replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub token1_symbol: TokenSymbol,
    pub token2_symbol: TokenSymbol,
    pub total_value_usd: Decimal,
    pub upper_bound: Percentage,
    pub lower_bound: Percentage,
    pub token1_amount: Decimal,
    pub token2_amount: Decimal,
    pub token1_value_usd: Decimal,
    pub token2_value_usd: Decimal,
    pub token1_hedge: Decimal,
    pub token2_hedge: Decimal,
    pub pair_price: Price,
    pub price_range: PriceRange,
}

impl CalculationResult {
    pub fn from_parts(
        request: &CalculationRequest,
        split: PositionSplit,
        price_range: PriceRange,
    ) -> Self {
        Self {
            token1_symbol: request.token1_symbol.clone(),
            token2_symbol: request.token2_symbol.clone(),
            total_value_usd: request.total_value_usd,
            upper_bound: request.upper_bound,
            lower_bound: request.lower_bound,
            token1_amount: split.token1_amount,
            token2_amount: split.token2_amount,
            token1_value_usd: split.token1_value_usd,
            token2_value_usd: split.token2_value_usd,
            token1_hedge: split.token1_hedge,
            token2_hedge: split.token2_hedge,
            pair_price: split.pair_price,
            price_range,
        }
    }

    /// Combined USD value of both sides of the position, or `None` when the
    /// sum leaves the decimal range.
    pub fn total_position_value_usd(&self) -> Option<Decimal> {
        self.token1_value_usd.checked_add(self.token2_value_usd)
    }

    /// Label for the pair price, e.g. `S/WETH`.
    pub fn pair_label(&self) -> String {
        format!("{}/{}", self.token1_symbol, self.token2_symbol)
    }
}

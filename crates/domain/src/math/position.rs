//! Even-split position sizing and the matching hedge.
//!
//! The deposit is divided 50/50 in USD terms between the two tokens. The
//! hedge for each token is half of the amount deposited.

use crate::error::CalculationError;
use crate::value_objects::price::Price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Token amounts, USD values and hedges for an evenly split deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionSplit {
    /// Units of token 1 deposited.
    pub token1_amount: Decimal,
    /// Units of token 2 deposited.
    pub token2_amount: Decimal,
    /// USD value of the token 1 side.
    pub token1_value_usd: Decimal,
    /// USD value of the token 2 side.
    pub token2_value_usd: Decimal,
    /// Units of token 1 to hold against the position.
    pub token1_hedge: Decimal,
    /// Units of token 2 to hold against the position.
    pub token2_hedge: Decimal,
    /// Price of token 1 denominated in token 2.
    pub pair_price: Price,
}

/// Sizes a position worth `total_value_usd` split evenly between two tokens.
///
/// # Arguments
///
/// * `token1_price_usd` - USD price of token 1, must be positive
/// * `token2_price_usd` - USD price of token 2, must be positive
/// * `total_value_usd` - total USD value to deposit, must be positive
///
/// # Errors
///
/// Returns [`CalculationError::NonPositiveInput`] when any input is zero or
/// negative and [`CalculationError::Overflow`] when an intermediate value
/// leaves the decimal range.
pub fn split_position(
    token1_price_usd: Price,
    token2_price_usd: Price,
    total_value_usd: Decimal,
) -> Result<PositionSplit, CalculationError> {
    if !token1_price_usd.is_positive() {
        return Err(CalculationError::NonPositiveInput("token 1 price"));
    }
    if !token2_price_usd.is_positive() {
        return Err(CalculationError::NonPositiveInput("token 2 price"));
    }
    if total_value_usd <= Decimal::ZERO {
        return Err(CalculationError::NonPositiveInput("total value"));
    }

    let value_per_side = total_value_usd / Decimal::TWO;

    let token1_amount = value_per_side
        .checked_div(token1_price_usd.value)
        .ok_or(CalculationError::Overflow("token 1 amount"))?;
    let token2_amount = value_per_side
        .checked_div(token2_price_usd.value)
        .ok_or(CalculationError::Overflow("token 2 amount"))?;

    let token1_value_usd = token1_amount
        .checked_mul(token1_price_usd.value)
        .ok_or(CalculationError::Overflow("token 1 value"))?;
    let token2_value_usd = token2_amount
        .checked_mul(token2_price_usd.value)
        .ok_or(CalculationError::Overflow("token 2 value"))?;

    let pair_price = token1_price_usd
        .value
        .checked_div(token2_price_usd.value)
        .ok_or(CalculationError::Overflow("pair price"))?;

    Ok(PositionSplit {
        token1_amount,
        token2_amount,
        token1_value_usd,
        token2_value_usd,
        token1_hedge: token1_amount / Decimal::TWO,
        token2_hedge: token2_amount / Decimal::TWO,
        pair_price: Price::new(pair_price),
    })
}

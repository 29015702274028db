use crate::error::CalculationError;
use crate::value_objects::percentage::Percentage;
use crate::value_objects::price::Price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A concentrated-liquidity range around the current pair price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub lower_price: Price,
    pub current_price: Price,
    pub upper_price: Price,
}

impl PriceRange {
    pub fn new(lower: Price, current: Price, upper: Price) -> Self {
        Self {
            lower_price: lower,
            current_price: current,
            upper_price: upper,
        }
    }

    /// Derives a range from the current pair price and the percentage
    /// distances to each edge.
    ///
    /// `lower = current * (1 - lower_pct / 100)` and
    /// `upper = current * (1 + upper_pct / 100)`. The edges are not ordered or
    /// clamped: a lower distance above 100% produces a negative lower edge.
    pub fn around(
        current: Price,
        upper_pct: Percentage,
        lower_pct: Percentage,
    ) -> Result<Self, CalculationError> {
        let lower_factor = Decimal::ONE
            .checked_sub(lower_pct.as_fraction())
            .ok_or(CalculationError::Overflow("lower range factor"))?;
        let upper_factor = Decimal::ONE
            .checked_add(upper_pct.as_fraction())
            .ok_or(CalculationError::Overflow("upper range factor"))?;

        let lower = current
            .value
            .checked_mul(lower_factor)
            .ok_or(CalculationError::Overflow("lower range price"))?;
        let upper = current
            .value
            .checked_mul(upper_factor)
            .ok_or(CalculationError::Overflow("upper range price"))?;

        Ok(Self::new(Price::new(lower), current, Price::new(upper)))
    }

    pub fn contains(&self, price: Price) -> bool {
        price.value >= self.lower_price.value && price.value <= self.upper_price.value
    }

    /// The same range quoted the other way around (token 2 in token 1).
    ///
    /// Inverting swaps the edges, so the lower edge of the inverted range is
    /// the reciprocal of this range's upper edge. A lower edge at or below
    /// zero leaves the inverted range without an upper edge.
    pub fn invert(&self) -> InvertedPriceRange {
        InvertedPriceRange {
            lower_price: self.upper_price.invert(),
            current_price: self.current_price.invert(),
            upper_price: self.lower_price.invert(),
        }
    }
}

/// A [`PriceRange`] quoted in the opposite direction.
///
/// Edges without a positive reciprocal are `None`: a missing upper edge means
/// the range is unbounded above, a missing lower edge means the original
/// range holds no positive price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvertedPriceRange {
    pub lower_price: Option<Price>,
    pub current_price: Option<Price>,
    pub upper_price: Option<Price>,
}

impl InvertedPriceRange {
    pub fn is_unbounded(&self) -> bool {
        self.upper_price.is_none()
    }

    pub fn contains(&self, price: Price) -> bool {
        let above_lower = self
            .lower_price
            .is_some_and(|lower| price.value >= lower.value);
        let below_upper = self
            .upper_price
            .is_none_or(|upper| price.value <= upper.value);
        above_lower && below_upper
    }
}

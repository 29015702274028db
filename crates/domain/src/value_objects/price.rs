use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A price expressed as a decimal value.
///
/// Depending on context this is either a USD price of a single token or a
/// pair price (token 1 denominated in token 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Price {
    pub value: Decimal,
}

impl Price {
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    pub fn is_positive(&self) -> bool {
        self.value > Decimal::ZERO
    }

    /// Returns the reciprocal price.
    ///
    /// Only a positive price has a meaningful reciprocal, so zero and
    /// negative prices yield `None`, as does a reciprocal too large for the
    /// decimal range.
    pub fn invert(&self) -> Option<Self> {
        if !self.is_positive() {
            return None;
        }
        Decimal::ONE.checked_div(self.value).map(Self::new)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

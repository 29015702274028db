use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A percentage stored in percent units (`4.44` means 4.44%).
///
/// Used for the distance between the current pair price and the edges of a
/// concentrated-liquidity range. Sign is not constrained here; callers decide
/// whether negative distances are acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Percentage(pub Decimal);

impl Percentage {
    pub fn from_percent(percent: Decimal) -> Self {
        Self(percent)
    }

    pub fn as_percent(&self) -> Decimal {
        self.0
    }

    /// The percentage as a fraction of one (`4.44` -> `0.0444`).
    pub fn as_fraction(&self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_as_fraction() {
        assert_eq!(Percentage::from_percent(dec!(4.44)).as_fraction(), dec!(0.0444));
        assert_eq!(Percentage::from_percent(dec!(150)).as_fraction(), dec!(1.5));
    }

    #[test]
    fn test_negative_zero_is_not_negative() {
        assert!(!Percentage::from_percent(-Decimal::ZERO).is_negative());
        assert!(Percentage::from_percent(dec!(-0.5)).is_negative());
    }
}

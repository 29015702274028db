//! Fallible parsing of free-text numeric input.

use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// Why a piece of text could not be read as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error("value is empty")]
    Empty,
    #[error("value is not a number")]
    NotANumber,
    /// Well-formed, but too large or too precise for the decimal type.
    #[error("value is outside the supported range")]
    OutOfRange,
}

/// Parses user text as a decimal number.
///
/// Surrounding whitespace is ignored. Accepts an optional leading sign,
/// plain decimal notation (`0.7110`, `.5`) and scientific notation (`1e4`,
/// `2.5E-3`). `NaN`, `inf`, digit separators and trailing garbage are not
/// numbers; well-formed values the decimal type cannot hold (`1e29`,
/// `1e-30`) are out of range.
pub fn parse_decimal(raw: &str) -> Result<Decimal, ParseFailure> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseFailure::Empty);
    }

    let (negative, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let unsigned = unsigned.to_ascii_lowercase();
    let value = match unsigned.split_once('e') {
        Some((mantissa, exponent)) => {
            if !is_mantissa(mantissa) || !is_exponent(exponent) {
                return Err(ParseFailure::NotANumber);
            }
            Decimal::from_scientific(&unsigned)
        }
        None => {
            if !is_mantissa(&unsigned) {
                return Err(ParseFailure::NotANumber);
            }
            Decimal::from_str(&unsigned)
        }
    }
    .map_err(|_| ParseFailure::OutOfRange)?;

    Ok(if negative { -value } else { value })
}

/// Digits with at most one decimal point and at least one digit.
fn is_mantissa(s: &str) -> bool {
    let (int, frac) = s.split_once('.').unwrap_or((s, ""));
    let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    digits(int) && digits(frac) && (!int.is_empty() || !frac.is_empty())
}

/// An optionally signed, non-empty run of digits.
fn is_exponent(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_decimal("0.7110"), Ok(dec!(0.7110)));
        assert_eq!(parse_decimal("  2500 "), Ok(dec!(2500)));
        assert_eq!(parse_decimal("-3"), Ok(dec!(-3)));
        assert_eq!(parse_decimal("+2"), Ok(dec!(2)));
        assert_eq!(parse_decimal("0"), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(parse_decimal("1e4"), Ok(dec!(10000)));
        assert_eq!(parse_decimal("2.5E-3"), Ok(dec!(0.0025)));
    }

    #[test]
    fn test_rejects_non_numbers() {
        assert_eq!(parse_decimal(""), Err(ParseFailure::Empty));
        assert_eq!(parse_decimal("   "), Err(ParseFailure::Empty));
        assert_eq!(parse_decimal("abc"), Err(ParseFailure::NotANumber));
        assert_eq!(parse_decimal("NaN"), Err(ParseFailure::NotANumber));
        assert_eq!(parse_decimal("inf"), Err(ParseFailure::NotANumber));
        assert_eq!(parse_decimal("-Infinity"), Err(ParseFailure::NotANumber));
        assert_eq!(parse_decimal("12abc"), Err(ParseFailure::NotANumber));
        assert_eq!(parse_decimal("1_000"), Err(ParseFailure::NotANumber));
        assert_eq!(parse_decimal("+-2"), Err(ParseFailure::NotANumber));
        assert_eq!(parse_decimal("1-2"), Err(ParseFailure::NotANumber));
        assert_eq!(parse_decimal("e5"), Err(ParseFailure::NotANumber));
        assert_eq!(parse_decimal("-"), Err(ParseFailure::NotANumber));
    }

    #[test]
    fn test_malformed_literals() {
        assert_eq!(parse_decimal("."), Err(ParseFailure::NotANumber));
        assert_eq!(parse_decimal("1.2.3"), Err(ParseFailure::NotANumber));
        assert_eq!(parse_decimal("1e"), Err(ParseFailure::NotANumber));
        assert_eq!(parse_decimal("1e3.5"), Err(ParseFailure::NotANumber));
        assert_eq!(parse_decimal("1e+-3"), Err(ParseFailure::NotANumber));
        assert_eq!(parse_decimal("1e2e3"), Err(ParseFailure::NotANumber));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(parse_decimal("1e-30"), Err(ParseFailure::OutOfRange));
        assert_eq!(parse_decimal("1e29"), Err(ParseFailure::OutOfRange));
        assert_eq!(parse_decimal("1e400"), Err(ParseFailure::OutOfRange));
        assert_eq!(
            parse_decimal("100000000000000000000000000000"),
            Err(ParseFailure::OutOfRange)
        );
    }
}

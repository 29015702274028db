//! The seven input fields of the calculator form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How a field's raw text is interpreted during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A number strictly greater than zero.
    PositiveNumber,
    /// A percentage distance from the current pair price.
    BoundPercentage,
    /// A token ticker, non-empty after trimming.
    Symbol,
}

/// One input of the calculator form, listed in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Token1Price,
    Token2Price,
    TotalLiquidity,
    UpperBound,
    LowerBound,
    Token1Symbol,
    Token2Symbol,
}

impl FormField {
    /// All fields in validation order.
    pub const ALL: [FormField; 7] = [
        FormField::Token1Price,
        FormField::Token2Price,
        FormField::TotalLiquidity,
        FormField::UpperBound,
        FormField::LowerBound,
        FormField::Token1Symbol,
        FormField::Token2Symbol,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Wire name of the field (camelCase).
    pub fn name(self) -> &'static str {
        match self {
            Self::Token1Price => "token1Price",
            Self::Token2Price => "token2Price",
            Self::TotalLiquidity => "totalLiquidity",
            Self::UpperBound => "upperBound",
            Self::LowerBound => "lowerBound",
            Self::Token1Symbol => "token1Symbol",
            Self::Token2Symbol => "token2Symbol",
        }
    }

    /// Human readable label, used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Token1Price => "Token 1 Price (USD)",
            Self::Token2Price => "Token 2 Price (USD)",
            Self::TotalLiquidity => "Total Liquidity (USD)",
            Self::UpperBound => "Upper Bound (%)",
            Self::LowerBound => "Lower Bound (%)",
            Self::Token1Symbol => "Token 1 Symbol",
            Self::Token2Symbol => "Token 2 Symbol",
        }
    }

    /// Value the field holds when the form is created or reset.
    pub fn default_value(self) -> &'static str {
        match self {
            Self::Token1Price => "0.7110",
            Self::Token2Price => "2500",
            Self::TotalLiquidity => "10000",
            Self::UpperBound => "4.44",
            Self::LowerBound => "4.44",
            Self::Token1Symbol => "S",
            Self::Token2Symbol => "WETH",
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            Self::Token1Price => "Current USD price of the first token in the pair",
            Self::Token2Price => "Current USD price of the second token in the pair",
            Self::TotalLiquidity => "Total USD value to deposit, split evenly between both tokens",
            Self::UpperBound => "Distance of the upper range edge above the current pair price, in percent",
            Self::LowerBound => "Distance of the lower range edge below the current pair price, in percent",
            Self::Token1Symbol => "Ticker of the first token (e.g. S)",
            Self::Token2Symbol => "Ticker of the second token (e.g. WETH)",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Token1Price | Self::Token2Price | Self::TotalLiquidity => {
                FieldKind::PositiveNumber
            }
            Self::UpperBound | Self::LowerBound => FieldKind::BoundPercentage,
            Self::Token1Symbol | Self::Token2Symbol => FieldKind::Symbol,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a field name does not match any form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for FormField {
    type Err = UnknownField;

    /// Accepts the wire name in any case, with or without `_`/`-`
    /// separators (`token1Price`, `token1_price`, `TOKEN1-PRICE`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Self::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| UnknownField(s.trim().to_string()))
    }
}

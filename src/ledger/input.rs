//! Raw caller input and its validation
//!
//! The presentation layer hands the ledger text straight from its input
//! widgets (or a number it already holds). Everything is checked here before
//! the ledger mutates anything.

use crate::error::{FinanceError, FinanceResult};
use crate::models::Money;

/// An amount as supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawAmount<'a> {
    Text(&'a str),
    Number(f64),
    Exact(Money),
}

impl<'a> RawAmount<'a> {
    /// Whether the caller left the amount empty
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }

    /// Parse into a non-negative amount
    pub fn to_money(&self) -> FinanceResult<Money> {
        let money = match *self {
            Self::Text(s) => Money::parse(s).map_err(|_| FinanceError::invalid_amount(s.trim()))?,
            Self::Number(n) => {
                let cents = (n * 100.0).round();
                if !cents.is_finite() || cents.abs() >= i64::MAX as f64 {
                    return Err(FinanceError::invalid_amount(n.to_string()));
                }
                Money::from_cents(cents as i64)
            }
            Self::Exact(m) => m,
        };

        if money.is_negative() {
            return Err(FinanceError::invalid_amount(self.to_string()));
        }
        Ok(money)
    }
}

impl std::fmt::Display for RawAmount<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s.trim()),
            Self::Number(n) => write!(f, "{n}"),
            Self::Exact(m) => write!(f, "{m}"),
        }
    }
}

impl<'a> From<&'a str> for RawAmount<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(s)
    }
}

impl<'a> From<&'a String> for RawAmount<'a> {
    fn from(s: &'a String) -> Self {
        Self::Text(s.as_str())
    }
}

impl From<f64> for RawAmount<'_> {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<Money> for RawAmount<'_> {
    fn from(m: Money) -> Self {
        Self::Exact(m)
    }
}

/// Trim a required text field, rejecting empty and whitespace-only values
pub(crate) fn require_text<'s>(value: &'s str, field: &'static str) -> FinanceResult<&'s str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FinanceError::missing(field))
    } else {
        Ok(trimmed)
    }
}

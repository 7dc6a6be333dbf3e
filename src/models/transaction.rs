//! Transaction model
//!
//! A transaction is one recorded income or expense event. It is immutable
//! once created; the ledger only ever appends or removes whole records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::ids::TransactionId;
use super::money::Money;

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognised transaction kind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown transaction type '{0}' (expected income or expense)")]
pub struct UnknownKind(pub String);

impl FromStr for TransactionKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

/// A recorded income or expense entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    kind: TransactionKind,
    category: String,
    amount: Money,
    /// Caller-supplied `YYYY-MM-DD` text, stored as given
    date: String,
}

impl Transaction {
    pub(crate) fn new(
        kind: TransactionKind,
        category: impl Into<String>,
        amount: Money,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            category: category.into(),
            amount,
            date: date.into(),
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    /// The date as a calendar day, if the stored text is a valid `YYYY-MM-DD`
    ///
    /// The ledger never requires this to succeed; it exists so callers can
    /// warn about or sort by well-formed dates.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {}: {}",
            self.date, self.kind, self.category, self.amount
        )
    }
}

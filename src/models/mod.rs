//! Core data models for the finance tracker
//!
//! This module contains the data structures the ledger is built from:
//! money amounts, transaction records and derived summaries.

pub mod ids;
pub mod money;
pub mod summary;
pub mod transaction;

pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use summary::{BudgetAlert, Summary};
pub use transaction::{Transaction, TransactionKind, UnknownKind};

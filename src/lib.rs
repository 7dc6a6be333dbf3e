//! Finance Tracker - a personal income/expense ledger
//!
//! This library records income and expense entries, computes running totals,
//! filters by category and reports when expenses exceed a budget limit.
//!
//! # Architecture
//!
//! - `ledger`: the in-memory transaction store and every derived view
//! - `models`: money, transaction and summary types
//! - `error`: the crate error type
//! - `storage`: optional JSON persistence for a ledger
//! - `config`: data paths and display settings
//! - `display` / `export`: presentation helpers used by the CLI
//! - `cli`: command handlers behind the `finance` binary
//!
//! # Example
//!
//! ```
//! use finance_tracker::ledger::Ledger;
//! use finance_tracker::models::TransactionKind;
//!
//! let mut ledger = Ledger::new();
//! ledger.add_transaction(TransactionKind::Income, "Salary", "1000", "2024-01-01")?;
//! ledger.add_transaction(TransactionKind::Expense, "Food", "300", "2024-01-02")?;
//! ledger.set_budget("200")?;
//!
//! let summary = ledger.compute_summary();
//! assert_eq!(summary.balance.cents(), 70_000);
//! assert!(summary.budget_exceeded);
//! # Ok::<(), finance_tracker::FinanceError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod storage;

pub use error::{ErrorKind, FinanceError, FinanceResult};
pub use ledger::Ledger;

//! Storage layer for the finance tracker
//!
//! Persistence is kept outside the ledger: this module only reads records
//! into a [`crate::ledger::Ledger`] and writes them back out.

pub mod ledger_file;

pub use ledger_file::{LedgerStore, SCHEMA_VERSION};

//! Export functionality
//!
//! Writes ledger views to portable formats.

pub mod csv;

pub use self::csv::export_transactions_csv;

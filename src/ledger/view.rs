//! Read-only views over the ledger
//!
//! A view is what the presentation layer draws: the transactions that pass
//! the current category filter, each tagged with where it lives in storage.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::models::{Summary, Transaction};

/// Category filter value that matches every transaction
pub const ALL_CATEGORIES: &str = "All";

/// One row of a filtered view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewEntry<'a> {
    /// Zero-based position within the view
    pub position: usize,
    /// Zero-based position within the ledger's storage
    pub index: usize,
    pub transaction: &'a Transaction,
}

/// Whether `category` passes the filter `selected`
pub fn matches_category(selected: &str, category: &str) -> bool {
    selected == ALL_CATEGORIES || category == selected
}

/// Everything a front end needs to redraw after a change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerSnapshot {
    pub summary: Summary,
    pub categories: BTreeSet<String>,
    /// The filter the entries were selected with
    pub selected: String,
    pub entries: Vec<Transaction>,
}

/// Order a category set for a picker: "All" first, the rest sorted
pub fn menu_order(categories: &BTreeSet<String>) -> Vec<&str> {
    std::iter::once(ALL_CATEGORIES)
        .chain(
            categories
                .iter()
                .map(String::as_str)
                .filter(|c| *c != ALL_CATEGORIES),
        )
        .collect()
}

//! Display formatting for terminal output
//!
//! The ledger returns raw amounts and text; currency symbol, digit grouping
//! and layout are decided here from the user's [`Settings`].

pub mod summary;
pub mod transaction;

pub use summary::{format_budget_alert, format_categories, format_summary};
pub use transaction::{format_transaction_list, format_transaction_row, format_transaction_table};

use crate::config::Settings;
use crate::models::Money;

/// Format an amount with the configured symbol and grouping
pub fn format_amount(amount: Money, settings: &Settings) -> String {
    if settings.group_thousands {
        amount.format_grouped(&settings.currency_symbol)
    } else {
        amount.format_with_symbol(&settings.currency_symbol)
    }
}

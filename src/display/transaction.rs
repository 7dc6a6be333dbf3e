//! Transaction display formatting
//!
//! Row and table renderings of a filtered ledger view. Positions shown to
//! the user are 1-based.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::format_amount;
use crate::config::Settings;
use crate::ledger::ViewEntry;
use crate::models::Transaction;

/// Format a single transaction as a list line
///
/// e.g. `2024-01-02 - Expense - Food: ₦300.00`
pub fn format_transaction_row(txn: &Transaction, settings: &Settings) -> String {
    format!(
        "{} - {} - {}: {}",
        txn.date(),
        txn.kind(),
        txn.category(),
        format_amount(txn.amount(), settings)
    )
}

/// Format a view as numbered list lines
pub fn format_transaction_list(view: &[ViewEntry<'_>], settings: &Settings) -> String {
    if view.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    for entry in view {
        output.push_str(&format!(
            "{:>3}. {}\n",
            entry.position + 1,
            format_transaction_row(entry.transaction, settings)
        ));
    }
    output
}

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a view as a table
pub fn format_transaction_table(view: &[ViewEntry<'_>], settings: &Settings) -> String {
    if view.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = view.iter().map(|entry| TransactionRow {
        position: entry.position + 1,
        date: entry.transaction.date().to_string(),
        kind: entry.transaction.kind().to_string(),
        category: entry.transaction.category().to_string(),
        amount: format_amount(entry.transaction.amount(), settings),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Columns::single(4)).with(Alignment::right()));

    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;
    use crate::models::TransactionKind;

    fn ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger
            .add_transaction(TransactionKind::Income, "Salary", "1000", "2024-01-01")
            .unwrap();
        ledger
            .add_transaction(TransactionKind::Expense, "Food", "300", "2024-01-02")
            .unwrap();
        ledger
    }

    #[test]
    fn test_row_format() {
        let ledger = ledger();
        let row = format_transaction_row(&ledger.transactions()[0], &Settings::default());
        assert_eq!(row, "2024-01-01 - Income - Salary: ₦1,000.00");
    }

    #[test]
    fn test_list_is_numbered_by_view_position() {
        let ledger = ledger();
        let output = format_transaction_list(&ledger.view("Food"), &Settings::default());
        assert_eq!(output, "  1. 2024-01-02 - Expense - Food: ₦300.00\n");
    }

    #[test]
    fn test_empty_view() {
        let ledger = Ledger::new();
        let settings = Settings::default();
        assert_eq!(
            format_transaction_list(&ledger.view("All"), &settings),
            "No transactions found.\n"
        );
        assert_eq!(
            format_transaction_table(&ledger.view("All"), &settings),
            "No transactions found.\n"
        );
    }

    #[test]
    fn test_table_contains_rows() {
        let ledger = ledger();
        let table = format_transaction_table(&ledger.view("All"), &Settings::default());
        assert!(table.contains("Category"));
        assert!(table.contains("Salary"));
        assert!(table.contains("₦300.00"));
    }
}

//! CSV export of a ledger view

use std::io::Write;

use serde::Serialize;
use tracing::debug;

use crate::error::{FinanceError, FinanceResult};
use crate::ledger::Ledger;

#[derive(Serialize)]
struct CsvRow<'a> {
    id: String,
    date: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    category: &'a str,
    amount: String,
}

/// Export the transactions matching `selected` to CSV, in storage order
///
/// Amounts are plain decimals with two places and no currency symbol.
/// Returns the number of rows written.
pub fn export_transactions_csv<W: Write>(
    ledger: &Ledger,
    selected: &str,
    writer: W,
) -> FinanceResult<usize> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);
    let transactions = ledger.filter_by_category(selected);

    if transactions.is_empty() {
        // serde only emits the header along with the first record
        csv_writer
            .write_record(["id", "date", "type", "category", "amount"])
            .map_err(|e| FinanceError::Export(e.to_string()))?;
    }

    for txn in &transactions {
        csv_writer
            .serialize(CsvRow {
                id: txn.id().to_string(),
                date: txn.date(),
                kind: txn.kind().as_str(),
                category: txn.category(),
                amount: txn.amount().to_string(),
            })
            .map_err(|e| FinanceError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| FinanceError::Export(e.to_string()))?;

    debug!(rows = transactions.len(), selected, "exported csv");
    Ok(transactions.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;

    fn export(ledger: &Ledger, selected: &str) -> String {
        let mut buffer = Vec::new();
        export_transactions_csv(ledger, selected, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_export_all() {
        let mut ledger = Ledger::new();
        let salary = ledger
            .add_transaction(TransactionKind::Income, "Salary", "1000", "2024-01-01")
            .unwrap();
        ledger
            .add_transaction(TransactionKind::Expense, "Eating, out", "12.5", "2024-01-02")
            .unwrap();

        let output = export(&ledger, "All");
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "id,date,type,category,amount");
        assert_eq!(
            lines[1],
            format!("{},2024-01-01,Income,Salary,1000.00", salary.id())
        );
        assert!(lines[2].ends_with(",2024-01-02,Expense,\"Eating, out\",12.50"));
    }

    #[test]
    fn test_export_filtered() {
        let mut ledger = Ledger::new();
        ledger
            .add_transaction(TransactionKind::Income, "Salary", "1000", "2024-01-01")
            .unwrap();
        ledger
            .add_transaction(TransactionKind::Expense, "Food", "3", "2024-01-02")
            .unwrap();

        let mut buffer = Vec::new();
        let rows = export_transactions_csv(&ledger, "Food", &mut buffer).unwrap();
        assert_eq!(rows, 1);
        assert!(!String::from_utf8(buffer).unwrap().contains("Salary"));
    }

    #[test]
    fn test_export_empty_has_header() {
        let ledger = Ledger::new();
        assert_eq!(export(&ledger, "All"), "id,date,type,category,amount\n");
    }
}

//! Ledger persistence in `ledger.json`
//!
//! Loading goes back through [`Ledger::restore`], so a hand-edited file with
//! bad records is rejected instead of silently producing wrong totals. Saves
//! go to a sibling temp file that is renamed over the ledger, so a failed
//! save leaves the previous file intact.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{FinanceError, FinanceResult};
use crate::ledger::Ledger;
use crate::models::{Money, Transaction};

/// Newest file layout this build reads and the one it writes
pub const SCHEMA_VERSION: u32 = 1;

/// On-disk layout of the ledger file, as read
#[derive(Debug, Deserialize)]
struct StoredLedger {
    #[serde(default = "default_schema_version")]
    schema_version: u32,
    #[serde(default)]
    budget_limit: Option<Money>,
    #[serde(default)]
    transactions: Vec<Transaction>,
}

/// The same layout, borrowed from a live ledger for writing
#[derive(Debug, Serialize)]
struct LedgerRecord<'a> {
    schema_version: u32,
    budget_limit: Option<Money>,
    transactions: &'a [Transaction],
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Loads and saves a [`Ledger`] as JSON
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger, or an empty one if nothing has been saved yet
    ///
    /// # Errors
    ///
    /// `UnsupportedSchema` for files from a newer release, `CorruptLedger`
    /// for unparseable JSON or records the ledger rejects.
    pub fn load(&self) -> FinanceResult<Ledger> {
        let Some(stored) = self.read()? else {
            trace!(path = %self.path.display(), "no ledger file yet");
            return Ok(Ledger::new());
        };

        if stored.schema_version > SCHEMA_VERSION {
            return Err(FinanceError::UnsupportedSchema {
                path: self.path.clone(),
                found: stored.schema_version,
                supported: SCHEMA_VERSION,
            });
        }

        let ledger = Ledger::restore(stored.transactions, stored.budget_limit)
            .map_err(|e| self.corrupt(e))?;
        debug!(path = %self.path.display(), count = ledger.len(), "ledger loaded");
        Ok(ledger)
    }

    /// Save the ledger, preserving storage order
    pub fn save(&self, ledger: &Ledger) -> FinanceResult<()> {
        let record = LedgerRecord {
            schema_version: SCHEMA_VERSION,
            budget_limit: ledger.budget_limit(),
            transactions: ledger.transactions(),
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                FinanceError::Storage(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        // Same directory as the ledger so the rename cannot cross filesystems
        let temp_path = self.path.with_extension("json.tmp");
        let written =
            write_record(&temp_path, &record).and_then(|()| fs::rename(&temp_path, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(FinanceError::Storage(format!(
                "Failed to write {}: {}",
                self.path.display(),
                e
            )));
        }

        debug!(path = %self.path.display(), count = ledger.len(), "ledger saved");
        Ok(())
    }

    fn read(&self) -> FinanceResult<Option<StoredLedger>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(FinanceError::Storage(format!(
                    "Failed to open {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        serde_json::from_reader(BufReader::new(file))
            .map(Some)
            .map_err(|e| self.corrupt(e))
    }

    fn corrupt(&self, reason: impl fmt::Display) -> FinanceError {
        FinanceError::CorruptLedger {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}

fn write_record(path: &Path, record: &LedgerRecord<'_>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, record)?;
    writer.flush()?;
    writer.get_ref().sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use tempfile::TempDir;

    fn store(temp_dir: &TempDir) -> LedgerStore {
        LedgerStore::new(temp_dir.path().join("data").join("ledger.json"))
    }

    fn write_raw(store: &LedgerStore, contents: &str) {
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), contents).unwrap();
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = store(&temp_dir).load().unwrap();
        assert!(ledger.is_empty());
        assert_eq!(ledger.budget_limit(), None);
    }

    #[test]
    fn test_save_and_load_preserves_order_and_budget() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        let mut ledger = Ledger::new();
        ledger
            .add_transaction(TransactionKind::Expense, "Food", "300", "2024-01-02")
            .unwrap();
        ledger
            .add_transaction(TransactionKind::Income, "Salary", "1000", "2024-01-01")
            .unwrap();
        ledger.set_budget("200").unwrap();

        store.save(&ledger).unwrap();
        assert!(!store.path().with_extension("json.tmp").exists());

        let loaded = store.load().unwrap();
        assert_eq!(loaded, ledger);
        assert_eq!(loaded.transactions()[0].category(), "Food");
        assert!(loaded.compute_summary().budget_exceeded);
    }

    #[test]
    fn test_save_replaces_previous_contents() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        let mut ledger = Ledger::new();
        ledger
            .add_transaction(TransactionKind::Expense, "Food", "5", "2024-01-01")
            .unwrap();
        store.save(&ledger).unwrap();

        ledger.remove_transaction(Some(0)).unwrap();
        store.save(&ledger).unwrap();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_rejects_negative_amount() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        write_raw(
            &store,
            r#"{
                "schema_version": 1,
                "budget_limit": null,
                "transactions": [{
                    "id": "550e8400-e29b-41d4-a716-446655440000",
                    "kind": "Expense",
                    "category": "Food",
                    "amount": -500,
                    "date": "2024-01-01"
                }]
            }"#,
        );

        let err = store.load().unwrap_err();
        assert!(matches!(err, FinanceError::CorruptLedger { .. }));
        assert!(err.to_string().contains("Invalid amount"));
    }

    #[test]
    fn test_load_rejects_duplicate_ids() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        let record = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "kind": "Expense",
            "category": "Food",
            "amount": 500,
            "date": "2024-01-01"
        }"#;
        write_raw(&store, &format!(r#"{{"transactions": [{record}, {record}]}}"#));

        let err = store.load().unwrap_err();
        assert!(matches!(
            err,
            FinanceError::CorruptLedger { ref path, .. } if path == store.path()
        ));
        assert!(err.to_string().contains("Duplicate transaction id"));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        write_raw(&store, "not json");

        assert!(matches!(
            store.load().unwrap_err(),
            FinanceError::CorruptLedger { .. }
        ));
    }

    #[test]
    fn test_load_rejects_newer_schema() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        write_raw(&store, r#"{"schema_version": 99}"#);

        let err = store.load().unwrap_err();
        assert!(matches!(
            err,
            FinanceError::UnsupportedSchema {
                found: 99,
                supported: SCHEMA_VERSION,
                ..
            }
        ));
    }
}

//! CLI command handlers
//!
//! A thin front end over the ledger: each invocation loads the ledger,
//! applies at most one operation, saves, and prints the refreshed views.

pub mod budget;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use report::{handle_categories, handle_config, handle_export, handle_summary};
pub use transaction::{handle_transaction_command, TransactionCommands};

use crate::config::{FinancePaths, Settings};
use crate::display::{format_budget_alert, format_summary};
use crate::error::FinanceResult;
use crate::ledger::Ledger;
use crate::storage::LedgerStore;

/// Everything a command needs: resolved paths, settings and the loaded ledger
pub struct CliContext {
    pub paths: FinancePaths,
    pub settings: Settings,
    pub ledger: Ledger,
    store: LedgerStore,
}

impl CliContext {
    /// Load settings and the ledger from `paths`
    pub fn open(paths: FinancePaths) -> FinanceResult<Self> {
        let settings = Settings::load_or_create(&paths)?;
        let store = LedgerStore::new(paths.ledger_file());
        let ledger = store.load()?;

        Ok(Self {
            paths,
            settings,
            ledger,
            store,
        })
    }

    /// Persist the ledger
    pub fn save(&self) -> FinanceResult<()> {
        self.paths.ensure_directories()?;
        self.store.save(&self.ledger)
    }

    /// Print the totals block
    pub fn print_summary(&self) {
        let summary = self.ledger.compute_summary();
        print!("{}", format_summary(&summary, &self.settings));
    }

    /// Repeat the budget warning on stderr after a change, if enabled
    pub fn print_budget_warning(&self) {
        if !self.settings.warn_on_budget_exceeded {
            return;
        }
        if let Some(alert) = self.ledger.compute_summary().budget_alert() {
            eprintln!("{}", format_budget_alert(&alert, &self.settings));
        }
    }
}

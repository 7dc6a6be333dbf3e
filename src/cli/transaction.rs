//! Transaction CLI commands
//!
//! Implements add, remove and list over the ledger.

use std::num::NonZeroUsize;

use chrono::Local;
use clap::Subcommand;
use tracing::warn;

use super::CliContext;
use crate::display::{format_transaction_list, format_transaction_row, format_transaction_table};
use crate::error::FinanceResult;
use crate::ledger::ALL_CATEGORIES;
use crate::models::{TransactionId, TransactionKind};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new income or expense
    Add {
        /// income or expense
        kind: TransactionKind,
        /// Category label (case-sensitive)
        category: String,
        /// Amount (e.g., "300" or "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Remove a transaction by its position in `list`
    Remove {
        /// 1-based position as shown by `list` with the same --category
        position: Option<NonZeroUsize>,
        /// Category filter the position refers to
        #[arg(short = 'C', long, default_value = ALL_CATEGORIES)]
        category: String,
        /// Remove by transaction ID instead of position
        #[arg(long, conflicts_with = "position")]
        id: Option<TransactionId>,
    },
    /// List transactions
    List {
        /// Only show this category
        #[arg(short = 'C', long, default_value = ALL_CATEGORIES)]
        category: String,
        /// Render as a table
        #[arg(long)]
        table: bool,
        /// Show transaction IDs
        #[arg(long, conflicts_with = "table")]
        ids: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    ctx: &mut CliContext,
    cmd: TransactionCommands,
) -> FinanceResult<()> {
    match cmd {
        TransactionCommands::Add {
            kind,
            category,
            amount,
            date,
        } => {
            let date =
                date.unwrap_or_else(|| Local::now().date_naive().format("%Y-%m-%d").to_string());
            let txn = ctx
                .ledger
                .add_transaction(kind, &category, amount.as_str(), &date)?;
            if txn.calendar_date().is_none() {
                warn!(
                    date = txn.date(),
                    "date is not a valid YYYY-MM-DD day; stored as given"
                );
            }
            ctx.save()?;

            println!("Added: {}", format_transaction_row(&txn, &ctx.settings));
            ctx.print_summary();
            ctx.print_budget_warning();
        }

        TransactionCommands::Remove {
            position,
            category,
            id,
        } => {
            let removed = match id {
                Some(id) => ctx.ledger.remove_by_id(id)?,
                None => ctx
                    .ledger
                    .remove_from_view(&category, position.map(|p| p.get() - 1))?,
            };
            ctx.save()?;

            println!("Removed: {}", format_transaction_row(&removed, &ctx.settings));
            ctx.print_summary();
            ctx.print_budget_warning();
        }

        TransactionCommands::List {
            category,
            table,
            ids,
        } => {
            let view = ctx.ledger.view(&category);
            if table {
                print!("{}", format_transaction_table(&view, &ctx.settings));
            } else if ids {
                for entry in &view {
                    println!(
                        "{:>3}. {}  {}",
                        entry.position + 1,
                        entry.transaction.id(),
                        format_transaction_row(entry.transaction, &ctx.settings)
                    );
                }
            } else {
                print!("{}", format_transaction_list(&view, &ctx.settings));
            }
        }
    }

    Ok(())
}

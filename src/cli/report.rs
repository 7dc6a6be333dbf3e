//! Read-only CLI commands: summary, categories, export, config

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use super::CliContext;
use crate::display::format_categories;
use crate::error::FinanceResult;
use crate::export::export_transactions_csv;
use crate::ledger::ALL_CATEGORIES;

/// Print the totals block
pub fn handle_summary(ctx: &CliContext) -> FinanceResult<()> {
    ctx.print_summary();
    Ok(())
}

/// Print the category filter options
pub fn handle_categories(ctx: &CliContext) -> FinanceResult<()> {
    print!("{}", format_categories(&ctx.ledger.list_categories()));
    Ok(())
}

/// Export the filtered view as CSV to a file or stdout
///
/// With `save`, the file goes to the exports directory under a dated name.
pub fn handle_export(
    ctx: &CliContext,
    category: &str,
    output: Option<PathBuf>,
    save: bool,
) -> FinanceResult<()> {
    let output = if save {
        let today = Local::now().date_naive();
        Some(ctx.paths.export_dir().join(export_file_name(category, today)))
    } else {
        output
    };

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let file = File::create(&path)?;
            let rows = export_transactions_csv(&ctx.ledger, category, BufWriter::new(file))?;
            println!("Exported {} transactions to {}", rows, path.display());
        }
        None => {
            let stdout = io::stdout();
            export_transactions_csv(&ctx.ledger, category, stdout.lock())?;
        }
    }
    Ok(())
}

/// `transactions-2024-01-31.csv`, or `transactions-food-2024-01-31.csv` when filtered
fn export_file_name(category: &str, date: NaiveDate) -> String {
    let stem = if category == ALL_CATEGORIES {
        "transactions".to_string()
    } else {
        let slug: String = category
            .chars()
            .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
            .collect();
        format!("transactions-{slug}")
    };
    format!("{stem}-{}.csv", date.format("%Y-%m-%d"))
}

/// Print resolved paths and settings
pub fn handle_config(ctx: &CliContext) -> FinanceResult<()> {
    println!("Finance Tracker Configuration");
    println!("=============================");
    println!("Base directory:  {}", ctx.paths.base_dir().display());
    println!("Ledger file:     {}", ctx.paths.ledger_file().display());
    println!("Settings file:   {}", ctx.paths.settings_file().display());
    println!("Export dir:      {}", ctx.paths.export_dir().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:  {}", ctx.settings.currency_symbol);
    println!("  Group thousands:  {}", ctx.settings.group_thousands);
    println!("  Budget warnings:  {}", ctx.settings.warn_on_budget_exceeded);
    Ok(())
}

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use finance_tracker::cli::{
    handle_budget_command, handle_categories, handle_config, handle_export, handle_summary,
    handle_transaction_command, BudgetCommands, CliContext, TransactionCommands,
};
use finance_tracker::config::paths::{FinancePaths, DATA_DIR_ENV};
use finance_tracker::ledger::ALL_CATEGORIES;
use finance_tracker::logging;

#[derive(Parser)]
#[command(
    name = "finance",
    version,
    about = "Personal finance tracker",
    long_about = "Record income and expenses, see running totals, filter by \
                  category and get warned when expenses pass your budget."
)]
struct Cli {
    /// Directory holding config.json and data/ledger.json
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Log ledger operations to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget limit commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show total income, expenses and balance
    Summary,

    /// List the categories available for filtering
    Categories,

    /// Export transactions as CSV
    Export {
        /// Only export this category
        #[arg(short = 'C', long, default_value = ALL_CATEGORIES)]
        category: String,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write a dated file into the exports directory
        #[arg(long, conflicts_with = "output")]
        save: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let paths = match cli.data_dir {
        Some(dir) => FinancePaths::with_base_dir(dir),
        None => FinancePaths::new()?,
    };
    let mut ctx = CliContext::open(paths)?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => handle_transaction_command(&mut ctx, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&mut ctx, cmd)?,
        Some(Commands::Summary) => handle_summary(&ctx)?,
        Some(Commands::Categories) => handle_categories(&ctx)?,
        Some(Commands::Export {
            category,
            output,
            save,
        }) => handle_export(&ctx, &category, output, save)?,
        Some(Commands::Config) => handle_config(&ctx)?,
        None => {
            println!("Finance Tracker - income, expenses and budget from the terminal");
            println!();
            println!("Run 'finance --help' for usage information.");
            println!("Run 'finance txn add expense Food 12.50' to record your first expense.");
        }
    }

    Ok(())
}

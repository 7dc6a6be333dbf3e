//! Budget CLI commands

use clap::Subcommand;

use super::CliContext;
use crate::display::format_amount;
use crate::error::FinanceResult;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the limit on total expenses (replaces any previous limit)
    Set {
        /// Amount (e.g., "200" or "1500.00"); 0 disables the check
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Remove the budget limit
    Clear,
    /// Show the current limit and whether it is exceeded
    Show,
}

/// Handle a budget command
pub fn handle_budget_command(ctx: &mut CliContext, cmd: BudgetCommands) -> FinanceResult<()> {
    match cmd {
        BudgetCommands::Set { amount } => {
            let limit = ctx.ledger.set_budget(amount.as_str())?;
            ctx.save()?;

            println!("Budget limit set to {}", format_amount(limit, &ctx.settings));
            ctx.print_summary();
            ctx.print_budget_warning();
        }

        BudgetCommands::Clear => {
            match ctx.ledger.clear_budget() {
                Some(previous) => {
                    ctx.save()?;
                    println!(
                        "Budget limit of {} removed",
                        format_amount(previous, &ctx.settings)
                    );
                }
                None => println!("No budget limit was set"),
            }
        }

        BudgetCommands::Show => {
            let summary = ctx.ledger.compute_summary();
            match summary.budget_limit {
                Some(limit) if !limit.is_zero() => {
                    println!("Budget limit:   {}", format_amount(limit, &ctx.settings));
                    println!(
                        "Total expenses: {}",
                        format_amount(summary.total_expense, &ctx.settings)
                    );
                    println!(
                        "Status:         {}",
                        if summary.budget_exceeded {
                            "EXCEEDED"
                        } else {
                            "within budget"
                        }
                    );
                }
                _ => println!("No budget limit set"),
            }
        }
    }

    Ok(())
}

//! Summary, budget and category formatting

use std::collections::BTreeSet;

use super::format_amount;
use crate::config::Settings;
use crate::ledger::menu_order;
use crate::models::{BudgetAlert, Summary};

/// Format the totals block
pub fn format_summary(summary: &Summary, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Total Income:   {}\n",
        format_amount(summary.total_income, settings)
    ));
    output.push_str(&format!(
        "Total Expenses: {}\n",
        format_amount(summary.total_expense, settings)
    ));
    output.push_str(&format!(
        "Balance:        {}\n",
        format_amount(summary.balance, settings)
    ));

    match summary.budget_limit {
        Some(limit) if !limit.is_zero() => {
            output.push_str(&format!(
                "Budget:         {}\n",
                format_amount(limit, settings)
            ));
        }
        _ => output.push_str("Budget:         not set\n"),
    }

    if let Some(alert) = summary.budget_alert() {
        output.push_str(&format_budget_alert(&alert, settings));
        output.push('\n');
    }

    output
}

/// Format a budget warning line
pub fn format_budget_alert(alert: &BudgetAlert, settings: &Settings) -> String {
    format!(
        "Warning! Expenses exceeded the budget limit of {} by {}!",
        format_amount(alert.limit, settings),
        format_amount(alert.overspent_by, settings)
    )
}

/// One category per line, "All" first
pub fn format_categories(categories: &BTreeSet<String>) -> String {
    menu_order(categories)
        .into_iter()
        .map(|c| format!("{c}\n"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_summary_without_budget() {
        let summary = Summary {
            total_income: Money::from_cents(100_000),
            total_expense: Money::from_cents(30_000),
            balance: Money::from_cents(70_000),
            budget_limit: None,
            budget_exceeded: false,
        };
        let output = format_summary(&summary, &Settings::default());
        assert_eq!(
            output,
            "Total Income:   ₦1,000.00\n\
             Total Expenses: ₦300.00\n\
             Balance:        ₦700.00\n\
             Budget:         not set\n"
        );
    }

    #[test]
    fn test_summary_with_alert() {
        let summary = Summary {
            total_income: Money::zero(),
            total_expense: Money::from_cents(30_000),
            balance: Money::from_cents(-30_000),
            budget_limit: Some(Money::from_cents(20_000)),
            budget_exceeded: true,
        };
        let settings = Settings {
            currency_symbol: "$".into(),
            ..Settings::default()
        };
        let output = format_summary(&summary, &settings);
        assert!(output.contains("Balance:        -$300.00\n"));
        assert!(output.contains("Budget:         $200.00\n"));
        assert!(output.ends_with("Warning! Expenses exceeded the budget limit of $200.00 by $100.00!\n"));
    }

    #[test]
    fn test_categories() {
        let categories: BTreeSet<String> = ["Salary", "All", "Food"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(format_categories(&categories), "All\nFood\nSalary\n");
    }
}

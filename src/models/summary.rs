//! Derived totals over a set of transactions
//!
//! A `Summary` is always computed from scratch; nothing here is cached.

use serde::Serialize;

use super::money::Money;
use super::transaction::Transaction;

/// Income/expense totals, balance and budget state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub total_income: Money,
    pub total_expense: Money,
    /// Income minus expense; may be negative
    pub balance: Money,
    pub budget_limit: Option<Money>,
    pub budget_exceeded: bool,
}

/// Details for a "budget exceeded" warning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetAlert {
    pub limit: Money,
    pub total_expense: Money,
    pub overspent_by: Money,
}

impl Summary {
    /// Compute totals over `transactions` against an optional budget limit
    ///
    /// A zero limit counts as "no budget". Totals clamp at the largest
    /// representable amount; a [`crate::Ledger`] never holds records whose
    /// totals would get there.
    pub fn compute<'a, I>(transactions: I, budget_limit: Option<Money>) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut total_income = Money::zero();
        let mut total_expense = Money::zero();

        for txn in transactions {
            if txn.is_income() {
                total_income = total_income.saturating_add(txn.amount());
            } else {
                total_expense = total_expense.saturating_add(txn.amount());
            }
        }

        let budget_exceeded = budget_limit
            .filter(|limit| !limit.is_zero())
            .is_some_and(|limit| total_expense > limit);

        Self {
            total_income,
            total_expense,
            balance: total_income - total_expense,
            budget_limit,
            budget_exceeded,
        }
    }

    /// The warning to raise, if expenses exceed the budget
    pub fn budget_alert(&self) -> Option<BudgetAlert> {
        if !self.budget_exceeded {
            return None;
        }
        let limit = self.budget_limit?;
        Some(BudgetAlert {
            limit,
            total_expense: self.total_expense,
            overspent_by: self.total_expense - limit,
        })
    }
}

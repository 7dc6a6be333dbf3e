//! The ledger: the owning store of transactions and budget state
//!
//! All inputs are validated before anything is mutated, so a failed call
//! leaves the ledger exactly as it was. Totals, the category set and
//! filtered views are recomputed from the stored transactions on every
//! request.

pub mod input;
pub mod view;

use std::collections::{BTreeSet, HashSet};

use tracing::{debug, warn};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, Summary, Transaction, TransactionId, TransactionKind};

pub use input::RawAmount;
pub use view::{matches_category, menu_order, LedgerSnapshot, ViewEntry, ALL_CATEGORIES};

use input::require_text;

/// Ordered transactions plus an optional budget limit on total expenses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    budget_limit: Option<Money>,
}

impl Ledger {
    /// Create an empty ledger with no budget
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from persisted records
    ///
    /// Every record is re-checked so loaded data obeys the same rules as
    /// data entered through [`Ledger::add_transaction`]. Handles must be
    /// unique.
    pub fn restore(
        transactions: Vec<Transaction>,
        budget_limit: Option<Money>,
    ) -> FinanceResult<Self> {
        let mut seen = HashSet::with_capacity(transactions.len());
        let mut total_income = Money::zero();
        let mut total_expense = Money::zero();
        for txn in &transactions {
            require_text(txn.category(), "category")?;
            require_text(txn.date(), "date")?;
            if txn.amount().is_negative() {
                return Err(FinanceError::invalid_amount(txn.amount().to_string()));
            }
            if !seen.insert(txn.id()) {
                return Err(FinanceError::DuplicateTransaction(txn.id()));
            }
            let total = if txn.is_income() {
                &mut total_income
            } else {
                &mut total_expense
            };
            *total = total
                .checked_add(txn.amount())
                .ok_or_else(|| FinanceError::invalid_amount(txn.amount().to_string()))?;
        }
        if let Some(limit) = budget_limit.filter(Money::is_negative) {
            return Err(FinanceError::invalid_amount(limit.to_string()));
        }

        debug!(
            count = transactions.len(),
            budget = ?budget_limit,
            "ledger restored"
        );
        Ok(Self {
            transactions,
            budget_limit,
        })
    }

    /// All transactions in storage (insertion) order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn budget_limit(&self) -> Option<Money> {
        self.budget_limit
    }

    /// Look up a transaction by its handle
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id() == id)
    }

    /// Storage index of the transaction with this handle
    pub fn position_of(&self, id: TransactionId) -> Option<usize> {
        self.transactions.iter().position(|t| t.id() == id)
    }

    /// Validate raw fields and append a new transaction
    ///
    /// Fails with `MissingField` if category, amount or date is empty, then
    /// with `InvalidAmount` if the amount is not a non-negative number or
    /// would push its kind's total past the largest representable amount.
    pub fn add_transaction<'a>(
        &mut self,
        kind: TransactionKind,
        category: &str,
        amount: impl Into<RawAmount<'a>>,
        date: &str,
    ) -> FinanceResult<Transaction> {
        let amount = amount.into();

        let category = require_text(category, "category")?;
        if amount.is_blank() {
            return Err(FinanceError::missing("amount"));
        }
        let date = require_text(date, "date")?;
        let amount = amount.to_money()?;
        let total_fits = self
            .transactions
            .iter()
            .filter(|t| t.kind() == kind)
            .map(Transaction::amount)
            .try_fold(amount, Money::checked_add)
            .is_some();
        if !total_fits {
            return Err(FinanceError::invalid_amount(amount.to_string()));
        }

        let txn = Transaction::new(kind, category, amount, date);
        debug!(
            id = %txn.id(),
            kind = %kind,
            category,
            amount = %amount,
            date,
            "transaction added"
        );
        self.transactions.push(txn.clone());
        self.warn_if_over_budget();

        Ok(txn)
    }

    /// Remove the transaction at a storage index
    ///
    /// Later entries shift down by one.
    pub fn remove_transaction(&mut self, index: Option<usize>) -> FinanceResult<Transaction> {
        let index = index.ok_or(FinanceError::NoSelection)?;
        if index >= self.transactions.len() {
            return Err(FinanceError::IndexOutOfRange {
                index,
                len: self.transactions.len(),
            });
        }

        let removed = self.transactions.remove(index);
        debug!(id = %removed.id(), index, "transaction removed");
        Ok(removed)
    }

    /// Remove a transaction by its handle
    pub fn remove_by_id(&mut self, id: TransactionId) -> FinanceResult<Transaction> {
        let index = self
            .position_of(id)
            .ok_or(FinanceError::TransactionNotFound(id))?;
        self.remove_transaction(Some(index))
    }

    /// Remove the entry shown at `position` in the view filtered by `selected`
    pub fn remove_from_view(
        &mut self,
        selected: &str,
        position: Option<usize>,
    ) -> FinanceResult<Transaction> {
        let position = position.ok_or(FinanceError::NoSelection)?;
        let view = self.view(selected);
        let index = view
            .get(position)
            .map(|entry| entry.index)
            .ok_or(FinanceError::IndexOutOfRange {
                index: position,
                len: view.len(),
            })?;
        self.remove_transaction(Some(index))
    }

    /// Totals, balance and budget state for the current transactions
    pub fn compute_summary(&self) -> Summary {
        Summary::compute(&self.transactions, self.budget_limit)
    }

    /// Parse and install a new budget limit, replacing any previous one
    ///
    /// Negative limits are rejected. A zero limit is stored but disables the
    /// exceeded check. Callers should redraw from [`Ledger::compute_summary`]
    /// afterwards to pick up the new budget state.
    pub fn set_budget<'a>(&mut self, raw: impl Into<RawAmount<'a>>) -> FinanceResult<Money> {
        let raw = raw.into();
        if raw.is_blank() {
            return Err(FinanceError::invalid_amount(""));
        }
        let limit = raw.to_money()?;

        self.budget_limit = Some(limit);
        debug!(limit = %limit, "budget set");
        self.warn_if_over_budget();
        Ok(limit)
    }

    /// Remove the budget limit
    pub fn clear_budget(&mut self) -> Option<Money> {
        let previous = self.budget_limit.take();
        if previous.is_some() {
            debug!("budget cleared");
        }
        previous
    }

    /// "All" plus every distinct category currently present
    pub fn list_categories(&self) -> BTreeSet<String> {
        std::iter::once(ALL_CATEGORIES.to_string())
            .chain(self.transactions.iter().map(|t| t.category().to_string()))
            .collect()
    }

    /// Transactions matching `selected` in storage order
    ///
    /// `"All"` matches everything; otherwise the category must match exactly.
    pub fn filter_by_category(&self, selected: &str) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| matches_category(selected, t.category()))
            .collect()
    }

    /// The filtered view, with each entry's storage index
    pub fn view(&self, selected: &str) -> Vec<ViewEntry<'_>> {
        self.transactions
            .iter()
            .enumerate()
            .filter(|(_, t)| matches_category(selected, t.category()))
            .enumerate()
            .map(|(position, (index, transaction))| ViewEntry {
                position,
                index,
                transaction,
            })
            .collect()
    }

    /// Summary, category set and filtered entries in one value
    pub fn snapshot(&self, selected: &str) -> LedgerSnapshot {
        LedgerSnapshot {
            summary: self.compute_summary(),
            categories: self.list_categories(),
            selected: selected.to_string(),
            entries: self
                .filter_by_category(selected)
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    fn warn_if_over_budget(&self) {
        if let Some(alert) = self.compute_summary().budget_alert() {
            warn!(
                limit = %alert.limit,
                total_expense = %alert.total_expense,
                overspent_by = %alert.overspent_by,
                "expenses exceed budget"
            );
        }
    }
}

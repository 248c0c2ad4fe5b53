//! Ledger model
//!
//! A ledger is the per-profile pair of income and expense sequences.
//! Storage order is insertion order; every consuming view re-sorts by the
//! canonical comparator in `reports`.

use serde::{Deserialize, Serialize};

use super::entry::{Entry, EntryKind};

/// The per-profile pair of income/expense record sequences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub income: Vec<Entry>,
    #[serde(default)]
    pub expenses: Vec<Entry>,
}

impl Ledger {
    /// Borrow the sequence for one kind
    pub fn entries(&self, kind: EntryKind) -> &Vec<Entry> {
        match kind {
            EntryKind::Income => &self.income,
            EntryKind::Expense => &self.expenses,
        }
    }

    /// Mutably borrow the sequence for one kind
    pub fn entries_mut(&mut self, kind: EntryKind) -> &mut Vec<Entry> {
        match kind {
            EntryKind::Income => &mut self.income,
            EntryKind::Expense => &mut self.expenses,
        }
    }

    /// Total number of records across both sequences
    pub fn len(&self) -> usize {
        self.income.len() + self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expenses.is_empty()
    }
}

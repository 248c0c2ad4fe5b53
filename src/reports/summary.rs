//! Ledger totals
//!
//! Sums both sequences of a ledger snapshot into the income/expense/balance
//! triple shown on the home view.

use crate::models::{Ledger, Money};

/// Aggregate totals over one ledger snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Sum of all income amounts
    pub income: Money,
    /// Sum of all expense amounts
    pub expense: Money,
    /// Income minus expense
    pub balance: Money,
}

/// Compute totals for a ledger snapshot
///
/// Empty sequences yield zero totals, never errors.
pub fn totals(ledger: &Ledger) -> Totals {
    let income: Money = ledger.income.iter().map(|e| e.amount).sum();
    let expense: Money = ledger.expenses.iter().map(|e| e.amount).sum();
    Totals {
        income,
        expense,
        balance: income - expense,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryInput, Money};

    fn entry(amount: i64, category: &str, date: &str) -> crate::models::Entry {
        EntryInput::new(Money::from_cents(amount), category, date.parse().unwrap())
            .with_timestamp(1)
            .into_entry()
    }

    #[test]
    fn test_totals_scenario() {
        let ledger = Ledger {
            income: vec![entry(100000, "Salary", "2024-01-01")],
            expenses: vec![entry(20000, "Food", "2024-01-02")],
        };

        let t = totals(&ledger);
        assert_eq!(t.income, Money::from_cents(100000));
        assert_eq!(t.expense, Money::from_cents(20000));
        assert_eq!(t.balance, Money::from_cents(80000));
    }

    #[test]
    fn test_empty_ledger_zero_totals() {
        let t = totals(&Ledger::default());
        assert_eq!(t.income, Money::zero());
        assert_eq!(t.expense, Money::zero());
        assert_eq!(t.balance, Money::zero());
    }

    #[test]
    fn test_balance_can_be_negative() {
        let ledger = Ledger {
            income: vec![entry(100, "Gift", "2024-01-01")],
            expenses: vec![entry(300, "Rent", "2024-01-01")],
        };

        let t = totals(&ledger);
        assert_eq!(t.balance, Money::from_cents(-200));
    }
}

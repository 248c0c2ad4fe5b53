//! Daily trend series
//!
//! Produces one point per calendar day for a trailing window, zero-filled
//! for days without matching records. Points are in ascending date order
//! because this feeds a trend rendering, not a listing.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};

use crate::models::{EntryKind, Ledger, Money};

/// One day's aggregate total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: Money,
}

/// Aggregate one kind's entries per day over the trailing window
///
/// The window covers `window_days` consecutive calendar days ending at
/// `end_date` inclusive. Days with no matching records carry a zero total.
pub fn daily_series(
    ledger: &Ledger,
    kind: EntryKind,
    window_days: u64,
    end_date: NaiveDate,
) -> Vec<DailyTotal> {
    if window_days == 0 {
        return Vec::new();
    }

    let mut by_date: HashMap<NaiveDate, Money> = HashMap::new();
    let mut dates: Vec<NaiveDate> = Vec::with_capacity(window_days as usize);

    for offset in (0..window_days).rev() {
        if let Some(date) = end_date.checked_sub_days(Days::new(offset)) {
            by_date.insert(date, Money::zero());
            dates.push(date);
        }
    }

    // Entries outside the window are ignored
    for entry in ledger.entries(kind) {
        if let Some(total) = by_date.get_mut(&entry.date) {
            *total += entry.amount;
        }
    }

    dates
        .into_iter()
        .map(|date| DailyTotal {
            total: by_date.get(&date).copied().unwrap_or_else(Money::zero),
            date,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryInput, Money};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn entry(amount: i64, date_str: &str) -> crate::models::Entry {
        EntryInput::new(Money::from_cents(amount), "Food", date(date_str))
            .with_timestamp(1)
            .into_entry()
    }

    #[test]
    fn test_empty_ledger_yields_zero_filled_week() {
        let series = daily_series(
            &Ledger::default(),
            EntryKind::Expense,
            7,
            date("2024-03-10"),
        );

        assert_eq!(series.len(), 7);
        assert_eq!(series[0].date, date("2024-03-04"));
        assert_eq!(series[6].date, date("2024-03-10"));
        assert!(series.iter().all(|p| p.total.is_zero()));

        // Consecutive calendar days, ascending
        for pair in series.windows(2) {
            assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
        }
    }

    #[test]
    fn test_sums_within_window() {
        let ledger = Ledger {
            income: vec![],
            expenses: vec![
                entry(100, "2024-03-09"),
                entry(250, "2024-03-09"),
                entry(400, "2024-03-10"),
                // Outside the 3-day window
                entry(999, "2024-03-01"),
            ],
        };

        let series = daily_series(&ledger, EntryKind::Expense, 3, date("2024-03-10"));
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].total, Money::zero());
        assert_eq!(series[1].total, Money::from_cents(350));
        assert_eq!(series[2].total, Money::from_cents(400));
    }

    #[test]
    fn test_only_requested_kind_counts() {
        let ledger = Ledger {
            income: vec![entry(5000, "2024-03-10")],
            expenses: vec![entry(100, "2024-03-10")],
        };

        let series = daily_series(&ledger, EntryKind::Income, 1, date("2024-03-10"));
        assert_eq!(series[0].total, Money::from_cents(5000));
    }

    #[test]
    fn test_zero_window_yields_empty() {
        assert!(daily_series(&Ledger::default(), EntryKind::Expense, 0, date("2024-03-10")).is_empty());
    }
}

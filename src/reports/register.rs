//! Merged chronological register
//!
//! Builds the canonical display ordering over a ledger snapshot: income and
//! expense records merged, each tagged with its kind, sorted by date
//! descending then creation timestamp descending. The sort is stable, so
//! records equal on both keys keep their pre-sort relative order.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::models::{Entry, EntryKind, Ledger};

/// An entry tagged with its kind for display and mutation addressing
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRecord {
    /// Which sequence the entry lives in
    pub kind: EntryKind,
    /// The underlying record
    pub entry: Entry,
}

/// The canonical comparator: date descending, then timestamp descending
///
/// A missing timestamp is stored as 0 and therefore sorts last within its
/// date, which keeps legacy records below newer ones on the same day.
pub fn canonical_cmp(a: &Entry, b: &Entry) -> Ordering {
    b.date.cmp(&a.date).then(b.timestamp.cmp(&a.timestamp))
}

/// Merge a ledger into one sorted sequence of tagged records
///
/// `kind_filter` restricts the view to one kind; `None` includes both.
pub fn merged_view(ledger: &Ledger, kind_filter: Option<EntryKind>) -> Vec<ViewRecord> {
    let mut records: Vec<ViewRecord> = Vec::with_capacity(ledger.len());

    for (kind, entries) in [
        (EntryKind::Income, &ledger.income),
        (EntryKind::Expense, &ledger.expenses),
    ] {
        if kind_filter.is_some() && kind_filter != Some(kind) {
            continue;
        }
        records.extend(entries.iter().map(|entry| ViewRecord {
            kind,
            entry: entry.clone(),
        }));
    }

    // Vec::sort_by is stable; ties beyond both keys keep input order
    records.sort_by(|a, b| canonical_cmp(&a.entry, &b.entry));
    records
}

/// Keep records whose date falls within the range, inclusive on both bounds
pub fn filter_by_date_range(
    records: &[ViewRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<ViewRecord> {
    records
        .iter()
        .filter(|r| r.entry.date >= start && r.entry.date <= end)
        .cloned()
        .collect()
}

/// Keep records whose category or note contains the query, case-insensitive
///
/// An empty query matches everything.
pub fn search_filter(records: &[ViewRecord], query: &str) -> Vec<ViewRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| {
            r.entry.category.to_lowercase().contains(&needle)
                || r.entry.note.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryInput, Money};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn entry(amount: i64, category: &str, date_str: &str, timestamp: i64) -> Entry {
        EntryInput::new(Money::from_cents(amount), category, date(date_str))
            .with_timestamp(timestamp)
            .into_entry()
    }

    fn sample_ledger() -> Ledger {
        Ledger {
            income: vec![entry(100000, "Salary", "2024-01-01", 100)],
            expenses: vec![entry(20000, "Food", "2024-01-02", 200)],
        }
    }

    #[test]
    fn test_merged_view_orders_by_date_desc() {
        let view = merged_view(&sample_ledger(), None);

        assert_eq!(view.len(), 2);
        assert_eq!(view[0].entry.category, "Food");
        assert_eq!(view[0].kind, EntryKind::Expense);
        assert_eq!(view[1].entry.category, "Salary");
        assert_eq!(view[1].kind, EntryKind::Income);
    }

    #[test]
    fn test_merged_view_kind_filter() {
        let ledger = sample_ledger();

        let income_only = merged_view(&ledger, Some(EntryKind::Income));
        assert_eq!(income_only.len(), 1);
        assert_eq!(income_only[0].entry.category, "Salary");

        let expense_only = merged_view(&ledger, Some(EntryKind::Expense));
        assert_eq!(expense_only.len(), 1);
        assert_eq!(expense_only[0].entry.category, "Food");
    }

    #[test]
    fn test_timestamp_breaks_date_ties() {
        let ledger = Ledger {
            income: vec![],
            expenses: vec![
                entry(100, "Older", "2024-01-01", 100),
                entry(200, "Newer", "2024-01-01", 300),
            ],
        };

        let view = merged_view(&ledger, None);
        assert_eq!(view[0].entry.category, "Newer");
        assert_eq!(view[1].entry.category, "Older");
    }

    #[test]
    fn test_sort_is_stable_on_full_ties() {
        // Same date, same timestamp: income entries precede expense entries
        // because they are concatenated first, and ties keep input order.
        let ledger = Ledger {
            income: vec![entry(1, "A", "2024-01-01", 50), entry(2, "B", "2024-01-01", 50)],
            expenses: vec![entry(3, "C", "2024-01-01", 50)],
        };

        let view = merged_view(&ledger, None);
        let categories: Vec<_> = view.iter().map(|r| r.entry.category.as_str()).collect();
        assert_eq!(categories, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_missing_timestamp_sorts_last_within_date() {
        let legacy: Entry = serde_json::from_str(
            r#"{"amount":100,"category":"Legacy","date":"2024-01-01"}"#,
        )
        .unwrap();
        let ledger = Ledger {
            income: vec![legacy],
            expenses: vec![entry(100, "Recent", "2024-01-01", 10)],
        };

        let view = merged_view(&ledger, None);
        assert_eq!(view[0].entry.category, "Recent");
        assert_eq!(view[1].entry.category, "Legacy");
    }

    #[test]
    fn test_empty_ledger_yields_empty_view() {
        assert!(merged_view(&Ledger::default(), None).is_empty());
    }

    #[test]
    fn test_filter_by_date_range_is_inclusive() {
        let ledger = Ledger {
            income: vec![],
            expenses: vec![
                entry(1, "Before", "2024-01-01", 1),
                entry(2, "Start", "2024-01-02", 2),
                entry(3, "End", "2024-01-04", 3),
                entry(4, "After", "2024-01-05", 4),
            ],
        };
        let view = merged_view(&ledger, None);

        let filtered = filter_by_date_range(&view, date("2024-01-02"), date("2024-01-04"));
        let categories: Vec<_> = filtered.iter().map(|r| r.entry.category.as_str()).collect();
        assert_eq!(categories, vec!["End", "Start"]);
    }

    #[test]
    fn test_search_filter_matches_category_or_note() {
        let ledger = Ledger {
            income: vec![],
            expenses: vec![
                entry(1, "Groceries", "2024-01-01", 1),
                EntryInput::new(Money::from_cents(2), "Transport", date("2024-01-01"))
                    .with_note("weekly groceries run")
                    .with_timestamp(2)
                    .into_entry(),
                entry(3, "Rent", "2024-01-01", 3),
            ],
        };
        let view = merged_view(&ledger, None);

        let matched = search_filter(&view, "GROCER");
        assert_eq!(matched.len(), 2);

        let all = search_filter(&view, "");
        assert_eq!(all.len(), 3);
    }
}

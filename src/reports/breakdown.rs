//! Category breakdown
//!
//! Rolls entries up by category, sorts by total descending, and buckets
//! everything beyond the top N into a synthetic "Others" total that keeps
//! its constituent breakdown for drill-down.

use crate::models::{Entry, Money};

/// Number of categories shown individually before bucketing
pub const DEFAULT_TOP_N: usize = 5;

/// One category's aggregate total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
}

/// Top-N categories plus the bucketed remainder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopCategories {
    /// The first N categories by total
    pub top: Vec<CategoryTotal>,
    /// Combined total of everything beyond the top N
    pub others_total: Money,
    /// The bucketed categories, still ordered by total descending
    pub others: Vec<CategoryTotal>,
}

/// Aggregate entries by category, sorted by total descending
///
/// Ties keep first-encountered order (the sort is stable and the
/// accumulator preserves encounter order).
pub fn category_totals(entries: &[Entry]) -> Vec<CategoryTotal> {
    let mut rollup: Vec<CategoryTotal> = Vec::new();

    for entry in entries {
        match rollup.iter_mut().find(|c| c.category == entry.category) {
            Some(slot) => slot.total += entry.amount,
            None => rollup.push(CategoryTotal {
                category: entry.category.clone(),
                total: entry.amount,
            }),
        }
    }

    rollup.sort_by(|a, b| b.total.cmp(&a.total));
    rollup
}

/// Split sorted category totals into the top N and an "Others" bucket
pub fn top_n_with_others(totals: Vec<CategoryTotal>, n: usize) -> TopCategories {
    let mut top = totals;
    let others: Vec<CategoryTotal> = if top.len() > n {
        top.split_off(n)
    } else {
        Vec::new()
    };

    let others_total: Money = others.iter().map(|c| c.total).sum();

    TopCategories {
        top,
        others_total,
        others,
    }
}

/// Percentage of `part` relative to `total`, guarded against a zero total
pub fn percentage_of(part: Money, total: Money) -> f64 {
    if total.is_zero() {
        return 0.0;
    }
    (part.cents() as f64 / total.cents() as f64) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryInput;

    fn entry(amount: i64, category: &str) -> Entry {
        EntryInput::new(
            Money::from_cents(amount),
            category,
            "2024-01-01".parse().unwrap(),
        )
        .with_timestamp(1)
        .into_entry()
    }

    #[test]
    fn test_category_totals_sorted_desc() {
        let entries = vec![
            entry(100, "Food"),
            entry(500, "Rent"),
            entry(200, "Food"),
            entry(50, "Transport"),
        ];

        let totals = category_totals(&entries);
        assert_eq!(totals.len(), 3);
        assert_eq!(totals[0].category, "Rent");
        assert_eq!(totals[0].total, Money::from_cents(500));
        assert_eq!(totals[1].category, "Food");
        assert_eq!(totals[1].total, Money::from_cents(300));
        assert_eq!(totals[2].category, "Transport");
    }

    #[test]
    fn test_ties_keep_first_encountered_order() {
        let entries = vec![entry(100, "Alpha"), entry(100, "Beta")];

        let totals = category_totals(&entries);
        assert_eq!(totals[0].category, "Alpha");
        assert_eq!(totals[1].category, "Beta");
    }

    #[test]
    fn test_empty_entries_yield_empty_totals() {
        assert!(category_totals(&[]).is_empty());
    }

    #[test]
    fn test_top_n_with_others() {
        let totals: Vec<CategoryTotal> = (0..7)
            .map(|i| CategoryTotal {
                category: format!("cat{}", i),
                total: Money::from_cents(700 - i * 100),
            })
            .collect();

        let bucketed = top_n_with_others(totals, DEFAULT_TOP_N);
        assert_eq!(bucketed.top.len(), 5);
        assert_eq!(bucketed.others.len(), 2);
        // 200 + 100 cents beyond the top five
        assert_eq!(bucketed.others_total, Money::from_cents(300));
        assert_eq!(bucketed.others[0].category, "cat5");
    }

    #[test]
    fn test_top_n_without_remainder() {
        let totals = vec![CategoryTotal {
            category: "Food".into(),
            total: Money::from_cents(100),
        }];

        let bucketed = top_n_with_others(totals, DEFAULT_TOP_N);
        assert_eq!(bucketed.top.len(), 1);
        assert!(bucketed.others.is_empty());
        assert_eq!(bucketed.others_total, Money::zero());
    }

    #[test]
    fn test_percentage_guard() {
        assert_eq!(percentage_of(Money::from_cents(50), Money::zero()), 0.0);
        let pct = percentage_of(Money::from_cents(25), Money::from_cents(100));
        assert!((pct - 25.0).abs() < f64::EPSILON);
    }
}

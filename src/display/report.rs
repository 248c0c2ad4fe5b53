//! Report display formatting
//!
//! Renders the summary, category breakdown, and daily trend reports.

use crate::reports::{percentage_of, DailyTotal, TopCategories, Totals};

use super::format::{format_bar, format_percentage, separator, truncate_pad};

const BAR_WIDTH: usize = 20;

/// Format the income/expense/balance summary
pub fn format_summary(totals: &Totals, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Income:   {:>14}\n",
        totals.income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Expenses: {:>14}\n",
        totals.expense.format_with_symbol(symbol)
    ));
    output.push_str(&separator(24));
    output.push('\n');
    output.push_str(&format!(
        "Balance:  {:>14}\n",
        totals.balance.format_with_symbol(symbol)
    ));

    output
}

/// Format the top-N category breakdown with an "Others" bucket
pub fn format_breakdown(breakdown: &TopCategories, symbol: &str) -> String {
    let grand_total = breakdown
        .top
        .iter()
        .map(|c| c.total)
        .sum::<crate::models::Money>()
        + breakdown.others_total;

    if grand_total.is_zero() {
        return "No entries to break down.\n".to_string();
    }

    let max_cents = breakdown
        .top
        .first()
        .map(|c| c.total.cents())
        .unwrap_or(0) as f64;

    let mut output = String::new();
    for category in &breakdown.top {
        let pct = percentage_of(category.total, grand_total);
        output.push_str(&format!(
            "{} {} {:>12} {:>7}\n",
            truncate_pad(&category.category, 16),
            format_bar(category.total.cents() as f64, max_cents, BAR_WIDTH),
            category.total.format_with_symbol(symbol),
            format_percentage(pct)
        ));
    }

    if !breakdown.others.is_empty() {
        let pct = percentage_of(breakdown.others_total, grand_total);
        output.push_str(&format!(
            "{} {} {:>12} {:>7}\n",
            truncate_pad(&format!("Others ({})", breakdown.others.len()), 16),
            format_bar(breakdown.others_total.cents() as f64, max_cents, BAR_WIDTH),
            breakdown.others_total.format_with_symbol(symbol),
            format_percentage(pct)
        ));
    }

    output
}

/// Format a daily trend series, one bar per day
pub fn format_trend(series: &[DailyTotal], symbol: &str) -> String {
    if series.is_empty() {
        return "No days in range.\n".to_string();
    }

    let max_cents = series
        .iter()
        .map(|p| p.total.cents())
        .max()
        .unwrap_or(0) as f64;

    let mut output = String::new();
    for point in series {
        output.push_str(&format!(
            "{} {} {:>12}\n",
            point.date.format("%Y-%m-%d"),
            format_bar(point.total.cents() as f64, max_cents, BAR_WIDTH),
            point.total.format_with_symbol(symbol)
        ));
    }

    output
}

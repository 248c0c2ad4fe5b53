//! Entry display formatting
//!
//! Renders merged register views and single-entry details for the
//! terminal. Amounts are shown with the profile's currency symbol; expense
//! amounts are prefixed with a minus in the register so the two kinds read
//! apart at a glance.

use crate::models::Entry;
use crate::reports::ViewRecord;

use super::format::truncate_pad;

const REGISTER_WIDTH: usize = 85;

/// Format a single register row
pub fn format_entry_row(record: &ViewRecord, symbol: &str) -> String {
    let entry = &record.entry;
    let amount = if record.kind.is_income() {
        entry.amount.format_with_symbol(symbol)
    } else {
        format!("-{}", entry.amount.format_with_symbol(symbol))
    };

    format!(
        "{:12} {} {:8} {} {} {:>12}",
        entry.id,
        entry.date.format("%Y-%m-%d"),
        record.kind.as_str(),
        truncate_pad(&entry.category, 16),
        truncate_pad(&entry.note, 16),
        amount
    )
}

/// Format a merged register view
pub fn format_register(records: &[ViewRecord], symbol: &str) -> String {
    if records.is_empty() {
        return "No entries found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:8} {:16} {:16} {:>12}\n",
        "Id", "Date", "Kind", "Category", "Note", "Amount"
    ));
    output.push_str(&"-".repeat(REGISTER_WIDTH));
    output.push('\n');

    for record in records {
        output.push_str(&format_entry_row(record, symbol));
        output.push('\n');
    }

    output
}

/// Format one entry's details, shown after add and edit
pub fn format_entry_details(entry: &Entry, kind_label: &str, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Entry:     {}\n", entry.id));
    output.push_str(&format!("Kind:      {}\n", kind_label));
    output.push_str(&format!("Date:      {}\n", entry.date.format("%Y-%m-%d")));
    output.push_str(&format!(
        "Amount:    {}\n",
        entry.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Category:  {}\n", entry.category));

    if !entry.note.is_empty() {
        output.push_str(&format!("Note:      {}\n", entry.note));
    }

    output
}

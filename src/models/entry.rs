//! Ledger entry model
//!
//! An entry is a single income or expense record: an amount, a free-form
//! category, a calendar date, and an optional note. The creation timestamp
//! (milliseconds since epoch) tie-breaks entries sharing a date.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EntryId;
use super::money::Money;

/// The two kinds of ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// Current instant in milliseconds since the Unix epoch
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// A single income or expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Stable identity assigned at creation; records imported from older
    /// backups without one are assigned a fresh id on deserialization
    #[serde(default)]
    pub id: EntryId,

    /// Positive amount in cents
    pub amount: Money,

    /// Free-form grouping key, non-empty and trimmed
    pub category: String,

    /// Calendar date; serialized as YYYY-MM-DD so string order equals
    /// chronological order
    pub date: NaiveDate,

    /// Optional free-form note
    #[serde(default)]
    pub note: String,

    /// Creation instant in milliseconds since epoch; 0 for legacy records
    #[serde(default)]
    pub timestamp: i64,
}

/// Field values for creating or editing an entry
///
/// On create, a missing `timestamp` defaults to now. On edit, a missing
/// `timestamp` preserves the original record's value.
#[derive(Debug, Clone)]
pub struct EntryInput {
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
    pub note: String,
    pub timestamp: Option<i64>,
}

impl EntryInput {
    pub fn new(amount: Money, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            category: category.into(),
            date,
            note: String::new(),
            timestamp: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Build a new entry with a fresh id
    pub fn into_entry(self) -> Entry {
        let timestamp = self.timestamp.unwrap_or_else(now_ms);
        Entry {
            id: EntryId::new(),
            amount: self.amount,
            category: self.category,
            date: self.date,
            note: self.note,
            timestamp,
        }
    }

    /// Build a replacement for an existing entry, keeping its id and,
    /// unless explicitly supplied, its original timestamp
    pub fn apply_to(self, existing: &Entry) -> Entry {
        Entry {
            id: existing.id,
            amount: self.amount,
            category: self.category,
            date: self.date,
            note: self.note,
            timestamp: self.timestamp.unwrap_or(existing.timestamp),
        }
    }
}

//! Entry service
//!
//! The write boundary for ledger records: validates field values before any
//! mutation reaches the repository, so the store never holds a non-positive
//! amount or a blank category.

use crate::error::{SpendTrailError, SpendTrailResult};
use crate::models::{Entry, EntryId, EntryInput, EntryKind, Ledger, ProfileId};
use crate::storage::LedgerRepository;

/// Service applying write-boundary validation to ledger mutations
pub struct EntryService<'a> {
    ledgers: &'a LedgerRepository,
}

impl<'a> EntryService<'a> {
    pub fn new(ledgers: &'a LedgerRepository) -> Self {
        Self { ledgers }
    }

    /// Snapshot a profile's ledger for read-only queries
    pub fn ledger(&self, profile_id: ProfileId) -> SpendTrailResult<Ledger> {
        self.ledgers.load(profile_id)
    }

    /// Record a new entry at the end of one kind's sequence
    pub fn add(
        &self,
        profile_id: ProfileId,
        kind: EntryKind,
        input: EntryInput,
    ) -> SpendTrailResult<Entry> {
        let input = validate(input)?;
        self.ledgers.append(profile_id, kind, input)
    }

    /// Replace an existing entry's field values
    ///
    /// The id and original creation timestamp survive the edit.
    pub fn edit(
        &self,
        profile_id: ProfileId,
        kind: EntryKind,
        entry_id: EntryId,
        input: EntryInput,
    ) -> SpendTrailResult<Entry> {
        let input = validate(input)?;
        self.ledgers.replace(profile_id, kind, entry_id, input)
    }

    /// Remove an entry, returning the removed record
    pub fn delete(
        &self,
        profile_id: ProfileId,
        kind: EntryKind,
        entry_id: EntryId,
    ) -> SpendTrailResult<Entry> {
        self.ledgers.remove(profile_id, kind, entry_id)
    }
}

fn validate(mut input: EntryInput) -> SpendTrailResult<EntryInput> {
    if !input.amount.is_positive() {
        return Err(SpendTrailError::Validation(
            "Amount must be greater than zero".to_string(),
        ));
    }

    input.category = input.category.trim().to_string();
    if input.category.is_empty() {
        return Err(SpendTrailError::Validation(
            "Category cannot be empty".to_string(),
        ));
    }

    input.note = input.note.trim().to_string();
    Ok(input)
}

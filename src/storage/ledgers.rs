//! Ledger repository
//!
//! Persists one ledger per profile namespace. Every mutation is a complete
//! load-mutate-save cycle; a per-namespace mutex keeps two mutations from
//! interleaving their load and save phases (the classic lost-update race).

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::{SpendTrailError, SpendTrailResult};
use crate::models::{Entry, EntryId, EntryInput, EntryKind, Ledger, ProfileId};

use super::kv::FileKv;

/// Base key for a profile's ledger snapshot
pub const LEDGER_KEY: &str = "data";

/// Repository for per-profile ledger persistence
pub struct LedgerRepository {
    kv: FileKv,
    /// One write lock per namespace, created on first use
    locks: Mutex<HashMap<ProfileId, Arc<Mutex<()>>>>,
}

impl LedgerRepository {
    /// Create a new ledger repository over the key-value store
    pub fn new(kv: FileKv) -> Self {
        Self {
            kv,
            locks: Mutex::new(HashMap::new()),
        }
    }

    fn namespace_lock(&self, profile_id: ProfileId) -> SpendTrailResult<Arc<Mutex<()>>> {
        let mut locks = self
            .locks
            .lock()
            .map_err(|e| SpendTrailError::Storage(format!("Failed to acquire lock map: {}", e)))?;
        Ok(locks
            .entry(profile_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone())
    }

    /// Load the ledger snapshot for a profile
    ///
    /// A namespace with nothing persisted yields an empty ledger, never an
    /// error. Corrupt JSON is a storage error.
    pub fn load(&self, profile_id: ProfileId) -> SpendTrailResult<Ledger> {
        match self.kv.scoped(profile_id).get(LEDGER_KEY)? {
            Some(text) => serde_json::from_str(&text).map_err(|e| {
                SpendTrailError::Storage(format!(
                    "Failed to parse ledger for {}: {}",
                    profile_id, e
                ))
            }),
            None => Ok(Ledger::default()),
        }
    }

    /// Replace the entire persisted ledger for a profile
    pub fn save(&self, profile_id: ProfileId, ledger: &Ledger) -> SpendTrailResult<()> {
        let lock = self.namespace_lock(profile_id)?;
        let _guard = lock
            .lock()
            .map_err(|e| SpendTrailError::Storage(format!("Failed to acquire lock: {}", e)))?;
        self.write(profile_id, ledger)
    }

    /// Append an entry to the end of one kind's sequence
    ///
    /// Assigns the creation timestamp when the input doesn't supply one.
    pub fn append(
        &self,
        profile_id: ProfileId,
        kind: EntryKind,
        input: EntryInput,
    ) -> SpendTrailResult<Entry> {
        let lock = self.namespace_lock(profile_id)?;
        let _guard = lock
            .lock()
            .map_err(|e| SpendTrailError::Storage(format!("Failed to acquire lock: {}", e)))?;

        let mut ledger = self.load(profile_id)?;
        let entry = input.into_entry();
        ledger.entries_mut(kind).push(entry.clone());
        self.write(profile_id, &ledger)?;
        Ok(entry)
    }

    /// Replace an entry addressed by id
    ///
    /// Preserves the original timestamp unless the input supplies one.
    /// Unknown ids fail with `NotFound` and leave the store untouched.
    pub fn replace(
        &self,
        profile_id: ProfileId,
        kind: EntryKind,
        entry_id: EntryId,
        input: EntryInput,
    ) -> SpendTrailResult<Entry> {
        let lock = self.namespace_lock(profile_id)?;
        let _guard = lock
            .lock()
            .map_err(|e| SpendTrailError::Storage(format!("Failed to acquire lock: {}", e)))?;

        let mut ledger = self.load(profile_id)?;
        let entries = ledger.entries_mut(kind);
        let slot = entries
            .iter_mut()
            .find(|e| e.id == entry_id)
            .ok_or_else(|| SpendTrailError::entry_not_found(entry_id.to_string()))?;

        let updated = input.apply_to(slot);
        *slot = updated.clone();
        self.write(profile_id, &ledger)?;
        Ok(updated)
    }

    /// Remove an entry addressed by id, shifting subsequent entries down
    ///
    /// Unknown ids fail with `NotFound` and leave the store untouched.
    pub fn remove(
        &self,
        profile_id: ProfileId,
        kind: EntryKind,
        entry_id: EntryId,
    ) -> SpendTrailResult<Entry> {
        let lock = self.namespace_lock(profile_id)?;
        let _guard = lock
            .lock()
            .map_err(|e| SpendTrailError::Storage(format!("Failed to acquire lock: {}", e)))?;

        let mut ledger = self.load(profile_id)?;
        let entries = ledger.entries_mut(kind);
        let position = entries
            .iter()
            .position(|e| e.id == entry_id)
            .ok_or_else(|| SpendTrailError::entry_not_found(entry_id.to_string()))?;

        let removed = entries.remove(position);
        self.write(profile_id, &ledger)?;
        Ok(removed)
    }

    fn write(&self, profile_id: ProfileId, ledger: &Ledger) -> SpendTrailResult<()> {
        let text = serde_json::to_string_pretty(ledger)?;
        self.kv.scoped(profile_id).set(LEDGER_KEY, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn repo() -> (TempDir, LedgerRepository, ProfileId) {
        let temp_dir = TempDir::new().unwrap();
        let kv = FileKv::new(temp_dir.path().to_path_buf());
        (temp_dir, LedgerRepository::new(kv), ProfileId::new())
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_load_missing_yields_empty() {
        let (_tmp, repo, profile) = repo();
        let ledger = repo.load(profile).unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_append_persists() {
        let (_tmp, repo, profile) = repo();

        let entry = repo
            .append(
                profile,
                EntryKind::Expense,
                EntryInput::new(Money::from_cents(20000), "Food", date("2024-01-02")),
            )
            .unwrap();
        assert!(entry.timestamp > 0);

        let ledger = repo.load(profile).unwrap();
        assert_eq!(ledger.expenses.len(), 1);
        assert_eq!(ledger.expenses[0].id, entry.id);
        assert!(ledger.income.is_empty());
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let (_tmp, repo, profile) = repo();

        for category in ["First", "Second", "Third"] {
            repo.append(
                profile,
                EntryKind::Income,
                EntryInput::new(Money::from_cents(100), category, date("2024-01-01")),
            )
            .unwrap();
        }

        let ledger = repo.load(profile).unwrap();
        let categories: Vec<_> = ledger.income.iter().map(|e| e.category.as_str()).collect();
        assert_eq!(categories, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_replace_preserves_timestamp() {
        let (_tmp, repo, profile) = repo();

        let entry = repo
            .append(
                profile,
                EntryKind::Expense,
                EntryInput::new(Money::from_cents(100), "Food", date("2024-01-02"))
                    .with_timestamp(42),
            )
            .unwrap();

        let updated = repo
            .replace(
                profile,
                EntryKind::Expense,
                entry.id,
                EntryInput::new(Money::from_cents(250), "Groceries", date("2024-01-03")),
            )
            .unwrap();

        assert_eq!(updated.timestamp, 42);
        assert_eq!(updated.id, entry.id);

        let ledger = repo.load(profile).unwrap();
        assert_eq!(ledger.expenses[0].amount, Money::from_cents(250));
        assert_eq!(ledger.expenses[0].category, "Groceries");
    }

    #[test]
    fn test_remove_shifts_sequence() {
        let (_tmp, repo, profile) = repo();

        let first = repo
            .append(
                profile,
                EntryKind::Income,
                EntryInput::new(Money::from_cents(100), "A", date("2024-01-01")),
            )
            .unwrap();
        repo.append(
            profile,
            EntryKind::Income,
            EntryInput::new(Money::from_cents(200), "B", date("2024-01-01")),
        )
        .unwrap();

        repo.remove(profile, EntryKind::Income, first.id).unwrap();

        let ledger = repo.load(profile).unwrap();
        assert_eq!(ledger.income.len(), 1);
        assert_eq!(ledger.income[0].category, "B");
    }

    #[test]
    fn test_unknown_id_leaves_store_unchanged() {
        let (_tmp, repo, profile) = repo();

        repo.append(
            profile,
            EntryKind::Expense,
            EntryInput::new(Money::from_cents(100), "Food", date("2024-01-01")),
        )
        .unwrap();
        let before = repo.load(profile).unwrap();

        let err = repo
            .remove(profile, EntryKind::Expense, EntryId::new())
            .unwrap_err();
        assert!(err.is_not_found());

        let err = repo
            .replace(
                profile,
                EntryKind::Expense,
                EntryId::new(),
                EntryInput::new(Money::from_cents(1), "X", date("2024-01-01")),
            )
            .unwrap_err();
        assert!(err.is_not_found());

        assert_eq!(repo.load(profile).unwrap(), before);
    }

    #[test]
    fn test_save_replaces_whole_snapshot() {
        let (_tmp, repo, profile) = repo();

        repo.append(
            profile,
            EntryKind::Expense,
            EntryInput::new(Money::from_cents(100), "Food", date("2024-01-01")),
        )
        .unwrap();

        repo.save(profile, &Ledger::default()).unwrap();
        assert!(repo.load(profile).unwrap().is_empty());
    }

    #[test]
    fn test_namespaces_are_isolated() {
        let (_tmp, repo, profile) = repo();
        let other = ProfileId::new();

        repo.append(
            profile,
            EntryKind::Expense,
            EntryInput::new(Money::from_cents(100), "Food", date("2024-01-01")),
        )
        .unwrap();

        assert!(repo.load(other).unwrap().is_empty());
    }
}

//! Backup service
//!
//! Moves ledger snapshots between the store and backup files on disk.
//! Export writes one document per profile; restore is a whole-store
//! replace, so callers preview entry counts and confirm before committing.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::backup::{self, BackupPayload};
use crate::error::{SpendTrailError, SpendTrailResult};
use crate::models::ProfileId;
use crate::storage::{read_string_opt, write_string_atomic, LedgerRepository};

/// Service for exporting and restoring ledger snapshots
pub struct BackupService<'a> {
    ledgers: &'a LedgerRepository,
}

impl<'a> BackupService<'a> {
    pub fn new(ledgers: &'a LedgerRepository) -> Self {
        Self { ledgers }
    }

    /// Export a profile's ledger as plain JSON
    pub fn export(
        &self,
        profile_id: ProfileId,
        profile_name: &str,
        path: &Path,
    ) -> SpendTrailResult<()> {
        let ledger = self.ledgers.load(profile_id)?;
        let text = backup::serialize(&ledger, profile_name)?;
        write_string_atomic(path, &text)
    }

    /// Export a profile's ledger as a password-encrypted envelope
    pub fn export_encrypted(
        &self,
        profile_id: ProfileId,
        profile_name: &str,
        password: &str,
        path: &Path,
    ) -> SpendTrailResult<()> {
        let ledger = self.ledgers.load(profile_id)?;
        let text = backup::serialize_encrypted(&ledger, profile_name, password)?;
        write_string_atomic(path, &text)
    }

    /// Whether the backup file at `path` needs a password to open
    pub fn requires_password(&self, path: &Path) -> SpendTrailResult<bool> {
        Ok(backup::is_encrypted(&self.read_document(path)?))
    }

    /// Parse a backup file, decrypting when a password is supplied
    ///
    /// The returned payload carries entry counts and metadata so the caller
    /// can confirm before restoring.
    pub fn inspect(&self, path: &Path, password: Option<&str>) -> SpendTrailResult<BackupPayload> {
        let text = self.read_document(path)?;

        if backup::is_encrypted(&text) {
            let password = password.ok_or_else(|| {
                SpendTrailError::Validation(
                    "This backup is encrypted; a password is required".to_string(),
                )
            })?;
            backup::deserialize_encrypted(&text, password)
        } else {
            backup::deserialize(&text)
        }
    }

    /// Replace a profile's entire ledger with the payload's contents
    ///
    /// Returns the restored (income, expense) counts.
    pub fn restore(
        &self,
        profile_id: ProfileId,
        payload: BackupPayload,
    ) -> SpendTrailResult<(usize, usize)> {
        let counts = (payload.income_count(), payload.expense_count());
        self.ledgers.save(profile_id, &payload.into_ledger())?;
        Ok(counts)
    }

    fn read_document(&self, path: &Path) -> SpendTrailResult<String> {
        read_string_opt(path)?.ok_or_else(|| SpendTrailError::NotFound {
            entity_type: "Backup file",
            identifier: path.display().to_string(),
        })
    }
}

/// Conventional file name for a new backup
pub fn default_backup_filename(profile_name: &str, encrypted: bool, date: NaiveDate) -> PathBuf {
    let extension = if encrypted { "encrypted" } else { "json" };
    PathBuf::from(format!("SpendTrail-{}-{}.{}", profile_name, date, extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryInput, EntryKind, Money};
    use crate::storage::FileKv;
    use tempfile::TempDir;

    fn setup() -> (TempDir, LedgerRepository, ProfileId) {
        let temp_dir = TempDir::new().unwrap();
        let kv = FileKv::new(temp_dir.path().join("data"));
        (temp_dir, LedgerRepository::new(kv), ProfileId::new())
    }

    fn seed(ledgers: &LedgerRepository, profile: ProfileId) {
        ledgers
            .append(
                profile,
                EntryKind::Income,
                EntryInput::new(Money::from_cents(100000), "Salary", "2024-01-01".parse().unwrap()),
            )
            .unwrap();
        ledgers
            .append(
                profile,
                EntryKind::Expense,
                EntryInput::new(Money::from_cents(20000), "Food", "2024-01-02".parse().unwrap()),
            )
            .unwrap();
    }

    #[test]
    fn test_plain_export_restore_cycle() {
        let (tmp, ledgers, profile) = setup();
        let service = BackupService::new(&ledgers);
        seed(&ledgers, profile);

        let path = tmp.path().join("backup.json");
        service.export(profile, "Personal", &path).unwrap();
        assert!(!service.requires_password(&path).unwrap());

        // Restore into a different, empty profile
        let other = ProfileId::new();
        let payload = service.inspect(&path, None).unwrap();
        assert_eq!(payload.profile_name, "Personal");

        let (income, expenses) = service.restore(other, payload).unwrap();
        assert_eq!((income, expenses), (1, 1));
        assert_eq!(ledgers.load(other).unwrap(), ledgers.load(profile).unwrap());
    }

    #[test]
    fn test_encrypted_export_needs_password() {
        let (tmp, ledgers, profile) = setup();
        let service = BackupService::new(&ledgers);
        seed(&ledgers, profile);

        let path = tmp.path().join("backup.encrypted");
        service
            .export_encrypted(profile, "Personal", "hunter2hunter2", &path)
            .unwrap();
        assert!(service.requires_password(&path).unwrap());

        let err = service.inspect(&path, None).unwrap_err();
        assert!(err.is_validation());

        let err = service.inspect(&path, Some("wrong-password")).unwrap_err();
        assert!(matches!(err, SpendTrailError::WrongPassword));

        let payload = service.inspect(&path, Some("hunter2hunter2")).unwrap();
        assert_eq!(payload.income_count(), 1);
    }

    #[test]
    fn test_restore_replaces_existing_entries() {
        let (tmp, ledgers, profile) = setup();
        let service = BackupService::new(&ledgers);
        seed(&ledgers, profile);

        let path = tmp.path().join("empty.json");
        let empty = ProfileId::new();
        service.export(empty, "Empty", &path).unwrap();

        let payload = service.inspect(&path, None).unwrap();
        service.restore(profile, payload).unwrap();

        // Pre-existing entries are gone, not merged
        assert!(ledgers.load(profile).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let (tmp, ledgers, _profile) = setup();
        let service = BackupService::new(&ledgers);

        let err = service
            .inspect(&tmp.path().join("missing.json"), None)
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_default_backup_filename() {
        let date = "2024-03-10".parse().unwrap();
        assert_eq!(
            default_backup_filename("Personal", false, date),
            PathBuf::from("SpendTrail-Personal-2024-03-10.json")
        );
        assert_eq!(
            default_backup_filename("Work", true, date),
            PathBuf::from("SpendTrail-Work-2024-03-10.encrypted")
        );
    }
}

//! Profile registry persistence
//!
//! Raw storage for the profile registry, the active-profile pointer, the
//! per-profile currency preference, and the legacy flat keys left behind by
//! the pre-multi-profile version. Registry rules (caps, name validation,
//! cascades) live in `services::profile`.

use crate::error::{SpendTrailError, SpendTrailResult};
use crate::models::{Profile, ProfileId};

use super::kv::FileKv;

/// Key holding the registry: a JSON sequence of profiles in creation order
const REGISTRY_KEY: &str = "profiles";

/// Key holding the active profile id
const ACTIVE_KEY: &str = "active-profile";

/// Base key for a profile's currency symbol preference
const CURRENCY_KEY: &str = "currency";

/// Legacy flat ledger key from the single-profile version
const LEGACY_LEDGER_KEY: &str = "data";

/// Legacy flat currency key from the single-profile version
const LEGACY_CURRENCY_KEY: &str = "currency";

/// Repository for registry and preference persistence
pub struct ProfileRepository {
    kv: FileKv,
}

impl ProfileRepository {
    pub fn new(kv: FileKv) -> Self {
        Self { kv }
    }

    /// Load the registry in creation order; empty when nothing persisted
    pub fn load_registry(&self) -> SpendTrailResult<Vec<Profile>> {
        match self.kv.get(REGISTRY_KEY)? {
            Some(text) => serde_json::from_str(&text).map_err(|e| {
                SpendTrailError::Storage(format!("Failed to parse profile registry: {}", e))
            }),
            None => Ok(Vec::new()),
        }
    }

    /// Replace the persisted registry
    pub fn save_registry(&self, profiles: &[Profile]) -> SpendTrailResult<()> {
        let text = serde_json::to_string_pretty(profiles)?;
        self.kv.set(REGISTRY_KEY, &text)
    }

    /// Read the active-profile pointer; `None` when unset or unparseable
    pub fn active_id(&self) -> SpendTrailResult<Option<ProfileId>> {
        Ok(self
            .kv
            .get(ACTIVE_KEY)?
            .and_then(|text| ProfileId::parse(text.trim()).ok()))
    }

    /// Set the active-profile pointer
    pub fn set_active_id(&self, id: ProfileId) -> SpendTrailResult<()> {
        self.kv.set(ACTIVE_KEY, &id.as_uuid().to_string())
    }

    /// Read a profile's currency symbol preference
    pub fn currency(&self, id: ProfileId) -> SpendTrailResult<Option<String>> {
        self.kv.scoped(id).get(CURRENCY_KEY)
    }

    /// Set a profile's currency symbol preference
    pub fn set_currency(&self, id: ProfileId, symbol: &str) -> SpendTrailResult<()> {
        self.kv.scoped(id).set(CURRENCY_KEY, symbol)
    }

    /// Irrecoverably remove every key in a profile's namespace
    pub fn clear_namespace(&self, id: ProfileId) -> SpendTrailResult<()> {
        self.kv.scoped(id).clear()
    }

    /// Take the legacy flat ledger value, removing it from storage
    pub fn take_legacy_ledger(&self) -> SpendTrailResult<Option<String>> {
        let value = self.kv.get(LEGACY_LEDGER_KEY)?;
        if value.is_some() {
            self.kv.remove(LEGACY_LEDGER_KEY)?;
        }
        Ok(value)
    }

    /// Take the legacy flat currency value, removing it from storage
    pub fn take_legacy_currency(&self) -> SpendTrailResult<Option<String>> {
        let value = self.kv.get(LEGACY_CURRENCY_KEY)?;
        if value.is_some() {
            self.kv.remove(LEGACY_CURRENCY_KEY)?;
        }
        Ok(value)
    }

    /// Move a legacy flat ledger into a profile's namespace
    pub fn store_raw_ledger(&self, id: ProfileId, text: &str) -> SpendTrailResult<()> {
        self.kv.scoped(id).set(super::ledgers::LEDGER_KEY, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repo() -> (TempDir, ProfileRepository) {
        let temp_dir = TempDir::new().unwrap();
        let kv = FileKv::new(temp_dir.path().to_path_buf());
        (temp_dir, ProfileRepository::new(kv))
    }

    #[test]
    fn test_empty_registry() {
        let (_tmp, repo) = repo();
        assert!(repo.load_registry().unwrap().is_empty());
        assert_eq!(repo.active_id().unwrap(), None);
    }

    #[test]
    fn test_registry_round_trip() {
        let (_tmp, repo) = repo();

        let profiles = vec![Profile::new("Personal"), Profile::new("Work")];
        repo.save_registry(&profiles).unwrap();

        let loaded = repo.load_registry().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].name, "Personal");
        assert_eq!(loaded[1].name, "Work");
    }

    #[test]
    fn test_active_pointer() {
        let (_tmp, repo) = repo();

        let id = ProfileId::new();
        repo.set_active_id(id).unwrap();
        assert_eq!(repo.active_id().unwrap(), Some(id));
    }

    #[test]
    fn test_garbage_active_pointer_reads_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let kv = FileKv::new(temp_dir.path().to_path_buf());
        kv.set("active-profile", "not-a-uuid").unwrap();

        let repo = ProfileRepository::new(kv);
        assert_eq!(repo.active_id().unwrap(), None);
    }

    #[test]
    fn test_currency_per_profile() {
        let (_tmp, repo) = repo();

        let a = ProfileId::new();
        let b = ProfileId::new();
        repo.set_currency(a, "$").unwrap();

        assert_eq!(repo.currency(a).unwrap(), Some("$".to_string()));
        assert_eq!(repo.currency(b).unwrap(), None);
    }

    #[test]
    fn test_take_legacy_keys_removes_them() {
        let temp_dir = TempDir::new().unwrap();
        let kv = FileKv::new(temp_dir.path().to_path_buf());
        kv.set("data", r#"{"income":[],"expenses":[]}"#).unwrap();
        kv.set("currency", "$").unwrap();

        let repo = ProfileRepository::new(kv);
        assert!(repo.take_legacy_ledger().unwrap().is_some());
        assert!(repo.take_legacy_currency().unwrap().is_some());
        assert_eq!(repo.take_legacy_ledger().unwrap(), None);
        assert_eq!(repo.take_legacy_currency().unwrap(), None);
    }
}

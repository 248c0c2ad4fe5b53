//! Profile registry service
//!
//! Business rules over the persisted registry: the profile cap, name
//! validation and case-insensitive uniqueness, the delete cascade, the
//! active pointer, and the first-run bootstrap with one-shot migration of
//! pre-multi-profile flat state.

use crate::error::{SpendTrailError, SpendTrailResult};
use crate::models::{profile::validate_name, Profile, ProfileId, DEFAULT_PROFILE_NAME, MAX_PROFILES};
use crate::storage::ProfileRepository;

/// Display symbol used when a profile has no currency preference
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Service enforcing registry rules
pub struct ProfileService {
    repo: ProfileRepository,
}

impl ProfileService {
    pub fn new(repo: ProfileRepository) -> Self {
        Self { repo }
    }

    /// First-run bootstrap
    ///
    /// An empty registry synthesizes one profile and marks it active. Flat
    /// ledger/currency state left by the pre-multi-profile version is moved
    /// into the new profile's namespace exactly once. Returns the active
    /// profile either way.
    pub fn bootstrap(&self) -> SpendTrailResult<Profile> {
        let profiles = self.repo.load_registry()?;
        if !profiles.is_empty() {
            return self.active();
        }

        let profile = Profile::new(DEFAULT_PROFILE_NAME);
        self.repo.save_registry(std::slice::from_ref(&profile))?;
        self.repo.set_active_id(profile.id)?;

        if let Some(ledger_text) = self.repo.take_legacy_ledger()? {
            self.repo.store_raw_ledger(profile.id, &ledger_text)?;
        }
        if let Some(symbol) = self.repo.take_legacy_currency()? {
            self.repo.set_currency(profile.id, &symbol)?;
        }

        Ok(profile)
    }

    /// List profiles in creation order
    pub fn list(&self) -> SpendTrailResult<Vec<Profile>> {
        self.repo.load_registry()
    }

    /// Create a new profile with an empty ledger namespace
    pub fn create(&self, name: &str) -> SpendTrailResult<Profile> {
        let profiles = self.repo.load_registry()?;
        if profiles.len() >= MAX_PROFILES {
            return Err(SpendTrailError::ProfileLimit { max: MAX_PROFILES });
        }

        let name = validate_name(name).map_err(SpendTrailError::Validation)?;
        ensure_unique_name(&profiles, &name, None)?;

        let profile = Profile::new(name);
        let mut updated = profiles;
        updated.push(profile.clone());
        self.repo.save_registry(&updated)?;
        Ok(profile)
    }

    /// Rename a profile, keeping the same validation as create
    pub fn rename(&self, id: ProfileId, new_name: &str) -> SpendTrailResult<Profile> {
        let mut profiles = self.repo.load_registry()?;

        let name = validate_name(new_name).map_err(SpendTrailError::Validation)?;
        ensure_unique_name(&profiles, &name, Some(id))?;

        let profile = profiles
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| SpendTrailError::profile_not_found(id.to_string()))?;
        profile.name = name;
        let renamed = profile.clone();

        self.repo.save_registry(&profiles)?;
        Ok(renamed)
    }

    /// Delete a profile and everything in its namespace, irrecoverably
    ///
    /// When the deleted profile was active, the first remaining profile in
    /// creation order becomes active in the same operation.
    pub fn delete(&self, id: ProfileId) -> SpendTrailResult<()> {
        let profiles = self.repo.load_registry()?;
        if !profiles.iter().any(|p| p.id == id) {
            return Err(SpendTrailError::profile_not_found(id.to_string()));
        }
        if profiles.len() <= 1 {
            return Err(SpendTrailError::LastProfile);
        }

        // Drop the registry entry and repair the pointer before touching
        // the namespace: an interruption mid-delete must never leave a
        // registered profile whose data is already gone.
        let remaining: Vec<Profile> = profiles.into_iter().filter(|p| p.id != id).collect();
        self.repo.save_registry(&remaining)?;

        if self.repo.active_id()? == Some(id) {
            self.repo.set_active_id(remaining[0].id)?;
        }

        self.repo.clear_namespace(id)?;
        Ok(())
    }

    /// Set the active pointer; ledger content is untouched
    pub fn switch_active(&self, id: ProfileId) -> SpendTrailResult<Profile> {
        let profiles = self.repo.load_registry()?;
        let profile = profiles
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| SpendTrailError::profile_not_found(id.to_string()))?;

        self.repo.set_active_id(id)?;
        Ok(profile)
    }

    /// Get the active profile
    ///
    /// A stale or missing pointer deterministically falls back to the
    /// first listed profile.
    pub fn active(&self) -> SpendTrailResult<Profile> {
        let profiles = self.repo.load_registry()?;
        if profiles.is_empty() {
            return Err(SpendTrailError::Storage(
                "Profile registry is empty; run bootstrap first".to_string(),
            ));
        }

        let active_id = self.repo.active_id()?;
        Ok(profiles
            .iter()
            .find(|p| Some(p.id) == active_id)
            .unwrap_or(&profiles[0])
            .clone())
    }

    /// Find a profile by case-insensitive name
    pub fn find_by_name(&self, name: &str) -> SpendTrailResult<Option<Profile>> {
        let needle = name.trim().to_lowercase();
        Ok(self
            .list()?
            .into_iter()
            .find(|p| p.name.to_lowercase() == needle))
    }

    /// Get a profile's display currency symbol
    pub fn currency_symbol(&self, id: ProfileId) -> SpendTrailResult<String> {
        Ok(self
            .repo
            .currency(id)?
            .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string()))
    }

    /// Set a profile's display currency symbol
    pub fn set_currency_symbol(&self, id: ProfileId, symbol: &str) -> SpendTrailResult<()> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(SpendTrailError::Validation(
                "Currency symbol cannot be empty".to_string(),
            ));
        }
        self.repo.set_currency(id, symbol)
    }
}

fn ensure_unique_name(
    profiles: &[Profile],
    name: &str,
    exclude: Option<ProfileId>,
) -> SpendTrailResult<()> {
    let lowered = name.to_lowercase();
    let clash = profiles
        .iter()
        .filter(|p| Some(p.id) != exclude)
        .any(|p| p.name.to_lowercase() == lowered);
    if clash {
        return Err(SpendTrailError::DuplicateName(name.to_string()));
    }
    Ok(())
}

//! File-backed key-value store
//!
//! The persistence medium for the registry and for per-profile state. Each
//! key maps to one file in the data directory; values are whole UTF-8
//! strings replaced atomically on write.
//!
//! Profile-scoped keys are derived through [`FileKv::scoped`], which returns
//! a handle that owns the namespacing. Callers never format namespaced keys
//! themselves.

use std::path::PathBuf;

use crate::error::SpendTrailError;
use crate::models::ProfileId;

use super::file_io::{read_string_opt, remove_file_opt, write_string_atomic};

/// Separator between a profile id and the base key
const NAMESPACE_SEP: char = '-';

/// A directory of key/value files
#[derive(Debug, Clone)]
pub struct FileKv {
    dir: PathBuf,
}

impl FileKv {
    /// Create a store over the given directory
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Get the value for a key, or `None` if absent
    pub fn get(&self, key: &str) -> Result<Option<String>, SpendTrailError> {
        read_string_opt(self.dir.join(key))
    }

    /// Set the value for a key, replacing any previous value atomically
    pub fn set(&self, key: &str, value: &str) -> Result<(), SpendTrailError> {
        write_string_atomic(self.dir.join(key), value)
    }

    /// Remove a key; absent keys are not an error
    pub fn remove(&self, key: &str) -> Result<(), SpendTrailError> {
        remove_file_opt(self.dir.join(key))
    }

    /// List all keys in the store
    pub fn list_keys(&self) -> Result<Vec<String>, SpendTrailError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&self.dir).map_err(|e| {
            SpendTrailError::Storage(format!("Failed to read {}: {}", self.dir.display(), e))
        })?;

        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SpendTrailError::Storage(e.to_string()))?;
            if entry.path().is_file() {
                if let Some(name) = entry.file_name().to_str() {
                    keys.push(name.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }

    /// Get a handle scoped to one profile's namespace
    pub fn scoped(&self, profile_id: ProfileId) -> ProfileKv {
        ProfileKv {
            kv: self.clone(),
            prefix: format!("{}{}", profile_id.as_uuid(), NAMESPACE_SEP),
        }
    }
}

/// A key-value handle scoped to one profile's namespace
///
/// All keys read or written through this handle are qualified with the
/// profile id, so two profiles can never observe each other's state.
#[derive(Debug, Clone)]
pub struct ProfileKv {
    kv: FileKv,
    prefix: String,
}

impl ProfileKv {
    fn qualified(&self, base_key: &str) -> String {
        format!("{}{}", self.prefix, base_key)
    }

    pub fn get(&self, base_key: &str) -> Result<Option<String>, SpendTrailError> {
        self.kv.get(&self.qualified(base_key))
    }

    pub fn set(&self, base_key: &str, value: &str) -> Result<(), SpendTrailError> {
        self.kv.set(&self.qualified(base_key), value)
    }

    pub fn remove(&self, base_key: &str) -> Result<(), SpendTrailError> {
        self.kv.remove(&self.qualified(base_key))
    }

    /// Remove every key in this profile's namespace
    pub fn clear(&self) -> Result<(), SpendTrailError> {
        for key in self.kv.list_keys()? {
            if key.starts_with(&self.prefix) {
                self.kv.remove(&key)?;
            }
        }
        Ok(())
    }
}

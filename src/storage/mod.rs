//! Storage layer for SpendTrail
//!
//! A file-backed key-value store with atomic whole-value writes, plus the
//! two repositories built on it: per-profile ledgers and the profile
//! registry.

pub mod file_io;
pub mod kv;
pub mod ledgers;
pub mod profiles;

pub use file_io::{read_string_opt, write_string_atomic};
pub use kv::{FileKv, ProfileKv};
pub use ledgers::LedgerRepository;
pub use profiles::ProfileRepository;

use crate::config::SpendTrailPaths;
use crate::error::SpendTrailError;

/// Open the key-value store under the configured data directory
pub fn open_store(paths: &SpendTrailPaths) -> Result<FileKv, SpendTrailError> {
    paths.ensure_directories()?;
    Ok(FileKv::new(paths.data_dir()))
}

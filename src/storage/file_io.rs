//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::SpendTrailError;

/// Read a file as a UTF-8 string, returning `None` if it doesn't exist
pub fn read_string_opt<P: AsRef<Path>>(path: P) -> Result<Option<String>, SpendTrailError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    fs::read_to_string(path)
        .map(Some)
        .map_err(|e| SpendTrailError::Storage(format!("Failed to read {}: {}", path.display(), e)))
}

/// Write a string to a file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified
/// at all, preventing corruption on crashes or power failures.
pub fn write_string_atomic<P: AsRef<Path>>(path: P, value: &str) -> Result<(), SpendTrailError> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            SpendTrailError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Create temp file in same directory (important for atomic rename)
    let temp_path = path.with_extension("tmp");

    let file = File::create(&temp_path)
        .map_err(|e| SpendTrailError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(value.as_bytes())
        .map_err(|e| SpendTrailError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| SpendTrailError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| SpendTrailError::Storage(format!("Failed to sync data: {}", e)))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        SpendTrailError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Remove a file, ignoring the case where it doesn't exist
pub fn remove_file_opt<P: AsRef<Path>>(path: P) -> Result<(), SpendTrailError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(());
    }

    fs::remove_file(path).map_err(|e| {
        SpendTrailError::Storage(format!("Failed to remove {}: {}", path.display(), e))
    })
}

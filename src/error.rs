//! Custom error types for SpendTrail
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for SpendTrail operations
#[derive(Error, Debug)]
pub enum SpendTrailError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Another profile already uses this name (case-insensitive)
    #[error("Profile name already exists: {0}")]
    DuplicateName(String),

    /// Profile cap reached
    #[error("Profile limit reached ({max} max)")]
    ProfileLimit { max: usize },

    /// Attempted to delete the only remaining profile
    #[error("At least one profile must exist")]
    LastProfile,

    /// Backup password shorter than the required minimum
    #[error("Password too short: minimum {min} characters")]
    PasswordTooShort { min: usize },

    /// Decryption failed: wrong password or corrupted ciphertext
    #[error("Wrong password or corrupted backup")]
    WrongPassword,

    /// Encryption errors
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Malformed backup payload
    #[error("Invalid backup format: {0}")]
    Format(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SpendTrailError {
    /// Create a "not found" error for profiles
    pub fn profile_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Profile",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for ledger entries
    pub fn entry_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Entry",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SpendTrailError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpendTrailError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for SpendTrail operations
pub type SpendTrailResult<T> = Result<T, SpendTrailError>;

//! Profile model
//!
//! A profile is an isolated namespace grouping one user's ledger and
//! currency preference. At most [`MAX_PROFILES`] may exist and at least one
//! must always exist.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::ProfileId;

/// Maximum number of profiles that may exist
pub const MAX_PROFILES: usize = 5;

/// Maximum profile name length in characters
pub const MAX_PROFILE_NAME_CHARS: usize = 20;

/// Name of the profile synthesized on first run
pub const DEFAULT_PROFILE_NAME: &str = "Personal";

/// An isolated ledger namespace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Opaque stable identifier
    pub id: ProfileId,

    /// Display name, trimmed, unique case-insensitively among profiles
    pub name: String,

    /// When the profile was created
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Create a new profile with a fresh id
    ///
    /// The caller is responsible for name validation; see
    /// [`validate_name`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ProfileId::new(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}

/// Validate and normalize a profile name
///
/// Returns the trimmed name, or an error message when the trimmed name is
/// empty or longer than [`MAX_PROFILE_NAME_CHARS`] characters.
pub fn validate_name(name: &str) -> Result<String, String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Profile name cannot be empty".to_string());
    }
    if trimmed.chars().count() > MAX_PROFILE_NAME_CHARS {
        return Err(format!(
            "Profile name too long (max {} characters)",
            MAX_PROFILE_NAME_CHARS
        ));
    }
    Ok(trimmed.to_string())
}

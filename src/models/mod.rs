//! Core data models for SpendTrail
//!
//! This module contains the data structures that represent the ledger
//! domain: entries, ledgers, profiles, and money amounts.

pub mod entry;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod profile;

pub use entry::{now_ms, Entry, EntryInput, EntryKind};
pub use ids::{EntryId, ProfileId};
pub use ledger::Ledger;
pub use money::Money;
pub use profile::{Profile, DEFAULT_PROFILE_NAME, MAX_PROFILES, MAX_PROFILE_NAME_CHARS};

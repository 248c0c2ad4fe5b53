//! Service layer
//!
//! Business rules between the CLI and the repositories: write-boundary
//! validation for entries, registry invariants for profiles, and backup
//! export/restore orchestration.

pub mod backup;
pub mod entry;
pub mod profile;

pub use backup::{default_backup_filename, BackupService};
pub use entry::EntryService;
pub use profile::{ProfileService, DEFAULT_CURRENCY_SYMBOL};

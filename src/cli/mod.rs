//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

use std::io::{self, Write};

use crate::error::{SpendTrailError, SpendTrailResult};

pub mod backup;
pub mod entry;
pub mod profile;
pub mod report;

pub use backup::{handle_backup_command, BackupCommands};
pub use entry::{
    handle_add, handle_delete, handle_edit, handle_list, AddArgs, DeleteArgs, EditArgs, KindArg,
    ListArgs,
};
pub use profile::{handle_profile_command, ProfileCommands};
pub use report::{handle_analytics, handle_summary, AnalyticsArgs};

/// Ask the user a yes/no question on stdin, defaulting to no
pub fn confirm(prompt: &str) -> SpendTrailResult<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout()
        .flush()
        .map_err(|e| SpendTrailError::Io(format!("Failed to flush stdout: {}", e)))?;

    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .map_err(|e| SpendTrailError::Io(format!("Failed to read answer: {}", e)))?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

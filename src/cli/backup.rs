//! Backup CLI commands
//!
//! Implements export and restore of the active profile's ledger, with
//! password prompts for encrypted documents and a count confirmation
//! before the whole-store replace.

use std::path::PathBuf;

use chrono::Local;
use clap::Subcommand;

use crate::config::SpendTrailPaths;
use crate::error::{SpendTrailError, SpendTrailResult};
use crate::services::{default_backup_filename, BackupService, ProfileService};
use crate::storage::LedgerRepository;

use super::confirm;

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Export the active profile's ledger to a backup file
    Export {
        /// Output path (defaults to the backup directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Encrypt the backup with a password
        #[arg(long)]
        encrypt: bool,
        /// Password for --encrypt (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },
    /// Restore a backup into the active profile, replacing its entries
    Restore {
        /// Path to the backup file
        file: PathBuf,
        /// Password for encrypted backups (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Handle a backup command
pub fn handle_backup_command(
    ledgers: &LedgerRepository,
    profiles: &ProfileService,
    paths: &SpendTrailPaths,
    cmd: BackupCommands,
) -> SpendTrailResult<()> {
    let service = BackupService::new(ledgers);
    let active = profiles.active()?;

    match cmd {
        BackupCommands::Export {
            output,
            encrypt,
            password,
        } => {
            let path = output.unwrap_or_else(|| {
                paths.backup_dir().join(default_backup_filename(
                    &active.name,
                    encrypt,
                    Local::now().date_naive(),
                ))
            });

            if encrypt {
                let password = match password {
                    Some(password) => password,
                    None => prompt_new_password()?,
                };
                service.export_encrypted(active.id, &active.name, &password, &path)?;
                println!("Encrypted backup written to {}", path.display());
            } else {
                service.export(active.id, &active.name, &path)?;
                println!("Backup written to {}", path.display());
            }
        }

        BackupCommands::Restore {
            file,
            password,
            yes,
        } => {
            let password = if service.requires_password(&file)? {
                Some(match password {
                    Some(password) => password,
                    None => prompt_password("Backup password: ")?,
                })
            } else {
                None
            };

            let payload = service.inspect(&file, password.as_deref())?;
            let prompt = format!(
                "Restore {} income and {} expense entries into '{}', replacing its current data?",
                payload.income_count(),
                payload.expense_count(),
                active.name
            );
            if !yes && !confirm(&prompt)? {
                println!("Aborted.");
                return Ok(());
            }

            let (income, expenses) = service.restore(active.id, payload)?;
            println!(
                "Restored {} income and {} expense entries into '{}'",
                income, expenses, active.name
            );
        }
    }

    Ok(())
}

fn prompt_password(prompt: &str) -> SpendTrailResult<String> {
    rpassword::prompt_password(prompt)
        .map_err(|e| SpendTrailError::Io(format!("Failed to read password: {}", e)))
}

fn prompt_new_password() -> SpendTrailResult<String> {
    let password = prompt_password("Backup password: ")?;
    let repeated = prompt_password("Confirm password: ")?;
    if password != repeated {
        return Err(SpendTrailError::Validation(
            "Passwords do not match".to_string(),
        ));
    }
    Ok(password)
}

//! Profile CLI commands
//!
//! Implements profile management: list, create, rename, delete, switch,
//! current, and the per-profile currency symbol.

use clap::Subcommand;

use crate::display::format_profile_list;
use crate::error::{SpendTrailError, SpendTrailResult};
use crate::models::{Profile, ProfileId};
use crate::services::ProfileService;

use super::confirm;

/// Profile subcommands
#[derive(Subcommand)]
pub enum ProfileCommands {
    /// List all profiles
    List,
    /// Create a new profile with an empty ledger
    Create {
        /// Profile name (max 20 characters, unique)
        name: String,
    },
    /// Rename a profile
    Rename {
        /// Profile name or id
        profile: String,
        /// New name
        new_name: String,
    },
    /// Delete a profile and all its data
    Delete {
        /// Profile name or id
        profile: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Make a profile the active one
    Switch {
        /// Profile name or id
        profile: String,
    },
    /// Show the active profile
    Current,
    /// Show or set the active profile's currency symbol
    Currency {
        /// New symbol; omit to show the current one
        symbol: Option<String>,
    },
}

/// Handle a profile command
pub fn handle_profile_command(
    profiles: &ProfileService,
    cmd: ProfileCommands,
) -> SpendTrailResult<()> {
    match cmd {
        ProfileCommands::List => {
            let all = profiles.list()?;
            let active = profiles.active()?;
            print!("{}", format_profile_list(&all, active.id));
        }

        ProfileCommands::Create { name } => {
            let profile = profiles.create(&name)?;
            println!("Created profile: {} ({})", profile.name, profile.id);
        }

        ProfileCommands::Rename { profile, new_name } => {
            let found = resolve_profile(profiles, &profile)?;
            let renamed = profiles.rename(found.id, &new_name)?;
            println!("Renamed '{}' to '{}'", found.name, renamed.name);
        }

        ProfileCommands::Delete { profile, yes } => {
            let found = resolve_profile(profiles, &profile)?;
            let prompt = format!(
                "Delete profile '{}' and all of its entries? This cannot be undone.",
                found.name
            );
            if !yes && !confirm(&prompt)? {
                println!("Aborted.");
                return Ok(());
            }

            profiles.delete(found.id)?;
            println!("Deleted profile '{}'", found.name);
            println!("Active profile: {}", profiles.active()?.name);
        }

        ProfileCommands::Switch { profile } => {
            let found = resolve_profile(profiles, &profile)?;
            let switched = profiles.switch_active(found.id)?;
            println!("Switched to profile '{}'", switched.name);
        }

        ProfileCommands::Current => {
            let active = profiles.active()?;
            let symbol = profiles.currency_symbol(active.id)?;
            println!("Active profile: {} ({})", active.name, active.id);
            println!("Currency symbol: {}", symbol);
        }

        ProfileCommands::Currency { symbol } => {
            let active = profiles.active()?;
            match symbol {
                Some(symbol) => {
                    profiles.set_currency_symbol(active.id, &symbol)?;
                    println!("Currency symbol for '{}' set to {}", active.name, symbol.trim());
                }
                None => {
                    println!("{}", profiles.currency_symbol(active.id)?);
                }
            }
        }
    }

    Ok(())
}

/// Resolve a profile reference by case-insensitive name, then by id
fn resolve_profile(profiles: &ProfileService, reference: &str) -> SpendTrailResult<Profile> {
    if let Some(profile) = profiles.find_by_name(reference)? {
        return Ok(profile);
    }

    if let Ok(id) = reference.parse::<ProfileId>() {
        if let Some(profile) = profiles.list()?.into_iter().find(|p| p.id == id) {
            return Ok(profile);
        }
    }

    Err(SpendTrailError::profile_not_found(reference.to_string()))
}

use anyhow::Result;
use clap::{Parser, Subcommand};

use spendtrail::cli::{
    handle_add, handle_analytics, handle_backup_command, handle_delete, handle_edit, handle_list,
    handle_profile_command, handle_summary, AddArgs, AnalyticsArgs, BackupCommands, DeleteArgs,
    EditArgs, ListArgs, ProfileCommands,
};
use spendtrail::config::SpendTrailPaths;
use spendtrail::services::ProfileService;
use spendtrail::storage::{open_store, LedgerRepository, ProfileRepository};

#[derive(Parser)]
#[command(
    name = "spendtrail",
    author = "Kaylee Beyene",
    version,
    about = "Profile-aware personal finance ledger for the terminal",
    long_about = "SpendTrail tracks income and expenses across isolated profiles, \
                  with category analytics, daily trends, and password-encrypted \
                  backups, all from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new income or expense entry
    Add(AddArgs),

    /// Edit an existing entry
    Edit(EditArgs),

    /// Delete an entry
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// List entries from the active profile
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show income, expense, and balance totals
    Summary,

    /// Show category breakdown and daily trend
    Analytics(AnalyticsArgs),

    /// Profile management commands
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Backup and restore commands
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SpendTrailPaths::new()?;
    let kv = open_store(&paths)?;
    let ledgers = LedgerRepository::new(kv.clone());
    let profiles = ProfileService::new(ProfileRepository::new(kv));

    // First run creates the default profile and migrates flat legacy state
    profiles.bootstrap()?;

    match cli.command {
        Some(Commands::Add(args)) => handle_add(&ledgers, &profiles, args)?,
        Some(Commands::Edit(args)) => handle_edit(&ledgers, &profiles, args)?,
        Some(Commands::Delete(args)) => handle_delete(&ledgers, &profiles, args)?,
        Some(Commands::List(args)) => handle_list(&ledgers, &profiles, args)?,
        Some(Commands::Summary) => handle_summary(&ledgers, &profiles)?,
        Some(Commands::Analytics(args)) => handle_analytics(&ledgers, &profiles, args)?,
        Some(Commands::Profile(cmd)) => handle_profile_command(&profiles, cmd)?,
        Some(Commands::Backup(cmd)) => handle_backup_command(&ledgers, &profiles, &paths, cmd)?,
        Some(Commands::Config) => {
            let active = profiles.active()?;
            println!("SpendTrail Configuration");
            println!("========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Backup directory: {}", paths.backup_dir().display());
            println!();
            println!("Active profile:   {}", active.name);
            println!(
                "Currency symbol:  {}",
                profiles.currency_symbol(active.id)?
            );
        }
        None => {
            println!("SpendTrail - Profile-aware personal finance ledger");
            println!();
            println!("Run 'spendtrail --help' for usage information.");
            println!("Run 'spendtrail add expense 12.50 Food' to record an expense.");
        }
    }

    Ok(())
}

//! Report CLI commands
//!
//! Implements the summary and analytics views over the active profile.

use chrono::Local;
use clap::Args;

use crate::display::{format_breakdown, format_summary, format_trend, separator};
use crate::error::SpendTrailResult;
use crate::models::EntryKind;
use crate::reports::{category_totals, daily_series, top_n_with_others, totals, DEFAULT_TOP_N};
use crate::services::ProfileService;
use crate::storage::LedgerRepository;

use super::entry::KindArg;

#[derive(Args)]
pub struct AnalyticsArgs {
    /// Which kind to break down
    #[arg(short, long, value_enum, default_value = "expense")]
    pub kind: KindArg,
    /// Trailing window for the daily trend, in days
    #[arg(short, long, default_value = "7")]
    pub days: u64,
}

/// Handle the summary command
pub fn handle_summary(
    ledgers: &LedgerRepository,
    profiles: &ProfileService,
) -> SpendTrailResult<()> {
    let active = profiles.active()?;
    let symbol = profiles.currency_symbol(active.id)?;
    let ledger = ledgers.load(active.id)?;

    println!("Summary for '{}'", active.name);
    print!("{}", format_summary(&totals(&ledger), &symbol));
    Ok(())
}

/// Handle the analytics command
pub fn handle_analytics(
    ledgers: &LedgerRepository,
    profiles: &ProfileService,
    args: AnalyticsArgs,
) -> SpendTrailResult<()> {
    let active = profiles.active()?;
    let symbol = profiles.currency_symbol(active.id)?;
    let ledger = ledgers.load(active.id)?;
    let kind: EntryKind = args.kind.into();

    let breakdown = top_n_with_others(category_totals(ledger.entries(kind)), DEFAULT_TOP_N);
    println!("Top {} categories for '{}'", kind.as_str(), active.name);
    print!("{}", format_breakdown(&breakdown, &symbol));

    println!();
    println!("Daily {} over the last {} days", kind.as_str(), args.days);
    println!("{}", separator(46));
    let series = daily_series(&ledger, kind, args.days, Local::now().date_naive());
    print!("{}", format_trend(&series, &symbol));
    Ok(())
}

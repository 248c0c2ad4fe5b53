//! Entry CLI commands
//!
//! Implements add, edit, delete, and list over the active profile's
//! ledger, bridging clap argument parsing with the entry service.

use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};

use crate::display::{format_entry_details, format_register};
use crate::error::{SpendTrailError, SpendTrailResult};
use crate::models::{Entry, EntryInput, EntryKind, Ledger, Money};
use crate::reports::{filter_by_date_range, merged_view, search_filter};
use crate::services::{EntryService, ProfileService};
use crate::storage::LedgerRepository;

/// Entry kind as a CLI argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for EntryKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Income => EntryKind::Income,
            KindArg::Expense => EntryKind::Expense,
        }
    }
}

#[derive(Args)]
pub struct AddArgs {
    /// Entry kind
    #[arg(value_enum)]
    pub kind: KindArg,
    /// Amount (e.g., "10.50" or "10")
    pub amount: String,
    /// Category label
    pub category: String,
    /// Entry date (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,
    /// Optional note
    #[arg(short, long)]
    pub note: Option<String>,
}

#[derive(Args)]
pub struct EditArgs {
    /// Entry id (full or the short form shown by 'list')
    pub entry: String,
    /// New amount
    #[arg(short, long)]
    pub amount: Option<String>,
    /// New category
    #[arg(short, long)]
    pub category: Option<String>,
    /// New date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,
    /// New note
    #[arg(short, long)]
    pub note: Option<String>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Entry id (full or the short form shown by 'list')
    pub entry: String,
}

#[derive(Args)]
pub struct ListArgs {
    /// Restrict to one kind
    #[arg(short, long, value_enum)]
    pub kind: Option<KindArg>,
    /// Case-insensitive search over category and note
    #[arg(short, long)]
    pub search: Option<String>,
    /// Start date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,
    /// End date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
    /// Maximum number of rows to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

/// Handle the add command
pub fn handle_add(
    ledgers: &LedgerRepository,
    profiles: &ProfileService,
    args: AddArgs,
) -> SpendTrailResult<()> {
    let service = EntryService::new(ledgers);
    let active = profiles.active()?;
    let symbol = profiles.currency_symbol(active.id)?;

    let amount = parse_amount(&args.amount)?;
    let date = match args.date {
        Some(text) => parse_date(&text)?,
        None => Local::now().date_naive(),
    };

    let mut input = EntryInput::new(amount, args.category, date);
    if let Some(note) = args.note {
        input = input.with_note(note);
    }

    let kind: EntryKind = args.kind.into();
    let entry = service.add(active.id, kind, input)?;

    println!("Recorded {}:", kind.as_str());
    print!("{}", format_entry_details(&entry, &kind.to_string(), &symbol));
    Ok(())
}

/// Handle the edit command
///
/// Unspecified fields keep the existing entry's values.
pub fn handle_edit(
    ledgers: &LedgerRepository,
    profiles: &ProfileService,
    args: EditArgs,
) -> SpendTrailResult<()> {
    let service = EntryService::new(ledgers);
    let active = profiles.active()?;
    let symbol = profiles.currency_symbol(active.id)?;

    let ledger = service.ledger(active.id)?;
    let (kind, existing) = resolve_entry(&ledger, &args.entry)?;

    let amount = match args.amount {
        Some(text) => parse_amount(&text)?,
        None => existing.amount,
    };
    let category = args.category.unwrap_or_else(|| existing.category.clone());
    let date = match args.date {
        Some(text) => parse_date(&text)?,
        None => existing.date,
    };
    let note = args.note.unwrap_or_else(|| existing.note.clone());

    let input = EntryInput::new(amount, category, date).with_note(note);
    let updated = service.edit(active.id, kind, existing.id, input)?;

    println!("Updated {}:", kind.as_str());
    print!("{}", format_entry_details(&updated, &kind.to_string(), &symbol));
    Ok(())
}

/// Handle the delete command
pub fn handle_delete(
    ledgers: &LedgerRepository,
    profiles: &ProfileService,
    args: DeleteArgs,
) -> SpendTrailResult<()> {
    let service = EntryService::new(ledgers);
    let active = profiles.active()?;
    let symbol = profiles.currency_symbol(active.id)?;

    let ledger = service.ledger(active.id)?;
    let (kind, existing) = resolve_entry(&ledger, &args.entry)?;

    let removed = service.delete(active.id, kind, existing.id)?;
    println!(
        "Deleted {} {} ({} on {})",
        kind.as_str(),
        removed.id,
        removed.amount.format_with_symbol(&symbol),
        removed.date.format("%Y-%m-%d")
    );
    Ok(())
}

/// Handle the list command
pub fn handle_list(
    ledgers: &LedgerRepository,
    profiles: &ProfileService,
    args: ListArgs,
) -> SpendTrailResult<()> {
    let service = EntryService::new(ledgers);
    let active = profiles.active()?;
    let symbol = profiles.currency_symbol(active.id)?;

    let ledger = service.ledger(active.id)?;
    let mut records = merged_view(&ledger, args.kind.map(Into::into));

    if args.from.is_some() || args.to.is_some() {
        let start = match args.from {
            Some(text) => parse_date(&text)?,
            None => NaiveDate::MIN,
        };
        let end = match args.to {
            Some(text) => parse_date(&text)?,
            None => NaiveDate::MAX,
        };
        records = filter_by_date_range(&records, start, end);
    }

    if let Some(query) = args.search {
        records = search_filter(&records, &query);
    }

    records.truncate(args.limit);
    print!("{}", format_register(&records, &symbol));
    Ok(())
}

fn parse_amount(text: &str) -> SpendTrailResult<Money> {
    Money::parse(text).map_err(|e| {
        SpendTrailError::Validation(format!(
            "Invalid amount '{}'. Use a format like '10.50' or '10'. {}",
            text, e
        ))
    })
}

fn parse_date(text: &str) -> SpendTrailResult<NaiveDate> {
    text.parse().map_err(|_| {
        SpendTrailError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD.", text))
    })
}

/// Resolve an entry reference against both sequences of a ledger
///
/// Accepts the full UUID or any unique prefix of it, with or without the
/// short-form "ent-" prefix. Ambiguous references are rejected rather than
/// resolved arbitrarily.
fn resolve_entry(ledger: &Ledger, reference: &str) -> SpendTrailResult<(EntryKind, Entry)> {
    let needle = reference.strip_prefix("ent-").unwrap_or(reference);
    if needle.is_empty() {
        return Err(SpendTrailError::Validation(
            "Entry id cannot be empty".to_string(),
        ));
    }

    let mut matches: Vec<(EntryKind, Entry)> = Vec::new();
    for (kind, entries) in [
        (EntryKind::Income, &ledger.income),
        (EntryKind::Expense, &ledger.expenses),
    ] {
        for entry in entries {
            if entry.id.as_uuid().to_string().starts_with(needle) {
                matches.push((kind, entry.clone()));
            }
        }
    }

    match matches.len() {
        0 => Err(SpendTrailError::entry_not_found(reference.to_string())),
        1 => Ok(matches.remove(0)),
        n => Err(SpendTrailError::Validation(format!(
            "Entry id '{}' is ambiguous ({} matches); use more characters",
            reference, n
        ))),
    }
}

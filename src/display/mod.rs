//! Display formatting for terminal output
//!
//! Formats models and report rows for the terminal: register columns,
//! summary lines, bar-chart breakdowns, and the profile list.

pub mod entry;
pub mod format;
pub mod profile;
pub mod report;

pub use entry::{format_entry_details, format_entry_row, format_register};
pub use format::{format_bar, format_percentage, separator, truncate_pad};
pub use profile::format_profile_list;
pub use report::{format_breakdown, format_summary, format_trend};

//! Query and aggregation engine
//!
//! Pure functions over a ledger snapshot: no mutation, no I/O. Every view
//! is derived deterministically from the snapshot passed in.

pub mod breakdown;
pub mod register;
pub mod summary;
pub mod trend;

pub use breakdown::{
    category_totals, percentage_of, top_n_with_others, CategoryTotal, TopCategories,
    DEFAULT_TOP_N,
};
pub use register::{canonical_cmp, filter_by_date_range, merged_view, search_filter, ViewRecord};
pub use summary::{totals, Totals};
pub use trend::{daily_series, DailyTotal};

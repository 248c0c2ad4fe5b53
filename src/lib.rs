//! SpendTrail - Profile-aware personal finance ledger
//!
//! This library provides the core functionality for the SpendTrail ledger:
//! income and expense tracking across isolated profiles, with derived
//! reports and encrypted backups.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (entries, profiles, money, ids)
//! - `storage`: File-backed key-value store and repositories
//! - `services`: Business logic layer
//! - `reports`: Pure query and aggregation functions
//! - `backup`: Backup codec (plain and password-encrypted)
//! - `crypto`: Key derivation and authenticated encryption
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use spendtrail::config::SpendTrailPaths;
//! use spendtrail::storage::open_store;
//!
//! let paths = SpendTrailPaths::new()?;
//! let kv = open_store(&paths)?;
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SpendTrailError, SpendTrailResult};

//! Backup and restore
//!
//! The codec turns ledger snapshots into portable documents (plain JSON or
//! password-encrypted envelopes) and back.

pub mod codec;

pub use codec::{
    deserialize, deserialize_encrypted, is_encrypted, serialize, serialize_encrypted,
    BackupPayload, MIN_PASSWORD_LEN,
};

//! Backup payload codec
//!
//! Serializes a ledger snapshot to a portable UTF-8 document: plain JSON,
//! or a JSON envelope holding password-encrypted ciphertext. Restore is
//! always a whole-store replace; the parsed payload exposes entry counts so
//! callers can confirm before committing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::crypto::{self, EncryptedData, KeyDerivationParams};
use crate::error::{SpendTrailError, SpendTrailResult};
use crate::models::{Entry, Ledger};

/// Minimum password length for encrypted backups
pub const MIN_PASSWORD_LEN: usize = 8;

/// A portable snapshot of one profile's ledger
///
/// Only the two entry sequences are required on parse; the metadata fields
/// are lenient so older exports keep restoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupPayload {
    pub income: Vec<Entry>,
    pub expenses: Vec<Entry>,
    #[serde(default)]
    pub backup_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub profile_name: String,
    #[serde(default)]
    pub encrypted: bool,
}

impl BackupPayload {
    fn from_ledger(ledger: &Ledger, profile_name: &str, encrypted: bool) -> Self {
        Self {
            income: ledger.income.clone(),
            expenses: ledger.expenses.clone(),
            backup_date: Some(Utc::now()),
            version: env!("CARGO_PKG_VERSION").to_string(),
            profile_name: profile_name.to_string(),
            encrypted,
        }
    }

    /// Number of income entries in the payload
    pub fn income_count(&self) -> usize {
        self.income.len()
    }

    /// Number of expense entries in the payload
    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }

    /// Turn the payload into a ledger for whole-store replacement
    pub fn into_ledger(self) -> Ledger {
        Ledger {
            income: self.income,
            expenses: self.expenses,
        }
    }
}

/// Envelope written for encrypted backups
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EncryptedBackup {
    kdf: KeyDerivationParams,
    payload: EncryptedData,
}

/// Serialize a ledger to plain JSON text
pub fn serialize(ledger: &Ledger, profile_name: &str) -> SpendTrailResult<String> {
    let payload = BackupPayload::from_ledger(ledger, profile_name, false);
    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Serialize a ledger to a password-encrypted JSON envelope
///
/// Fails with `PasswordTooShort` before any encryption work.
pub fn serialize_encrypted(
    ledger: &Ledger,
    profile_name: &str,
    password: &str,
) -> SpendTrailResult<String> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(SpendTrailError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }

    let payload = BackupPayload::from_ledger(ledger, profile_name, true);
    let plaintext = serde_json::to_string(&payload)?;

    let kdf = KeyDerivationParams::new();
    let key = crypto::derive_key(password, &kdf)?;
    let encrypted = crypto::encrypt_string(&plaintext, &key)?;

    let envelope = EncryptedBackup {
        kdf,
        payload: encrypted,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Parse a plain backup document
///
/// Fails with `Format` when the text is not JSON carrying both an `income`
/// and an `expenses` sequence.
pub fn deserialize(text: &str) -> SpendTrailResult<BackupPayload> {
    serde_json::from_str(text)
        .map_err(|e| SpendTrailError::Format(format!("Not a valid backup: {}", e)))
}

/// Decrypt and parse an encrypted backup document
///
/// A wrong password surfaces as `WrongPassword` via the AEAD integrity
/// check, never as garbage parsed into a payload.
pub fn deserialize_encrypted(text: &str, password: &str) -> SpendTrailResult<BackupPayload> {
    let envelope: EncryptedBackup = serde_json::from_str(text)
        .map_err(|e| SpendTrailError::Format(format!("Not an encrypted backup: {}", e)))?;

    let key = crypto::derive_key(password, &envelope.kdf)?;
    let plaintext = crypto::decrypt_string(&envelope.payload, &key)?;
    deserialize(&plaintext)
}

/// Whether a document looks like an encrypted backup envelope
pub fn is_encrypted(text: &str) -> bool {
    serde_json::from_str::<EncryptedBackup>(text).is_ok()
}

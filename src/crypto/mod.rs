//! Password-based encryption for backups
//!
//! Keys are derived from the backup password with Argon2id and used with
//! AES-256-GCM. The authentication tag means a wrong password or corrupted
//! ciphertext surfaces as an integrity failure instead of garbage output.

pub mod encryption;
pub mod key_derivation;

pub use encryption::{decrypt_string, encrypt_string, EncryptedData};
pub use key_derivation::{derive_key, DerivedKey, KeyDerivationParams};

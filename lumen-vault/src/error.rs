//! Error types for vault operations.

use core::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while storing or retrieving vault data.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The unlock window has expired.
    VaultLocked,
    /// Decryption failed: wrong key material or corrupted blob.
    DecryptionFailed,
    /// Encryption failed.
    EncryptionFailed,
    /// No record is stored under this vault's id.
    NoData,
    /// The vault was constructed with empty key material.
    MissingKeyMaterial,
    /// PBKDF2 key derivation failed.
    KeyDerivation,
    /// The storage collaborator reported a failure.
    Storage(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VaultLocked => write!(f, "vault is locked: unlock window has expired"),
            Self::DecryptionFailed => {
                write!(f, "decryption failed: wrong key material or corrupted data")
            }
            Self::EncryptionFailed => write!(f, "encryption failed"),
            Self::NoData => write!(f, "no data stored for this vault"),
            Self::MissingKeyMaterial => write!(f, "vault key material must not be empty"),
            Self::KeyDerivation => write!(f, "PBKDF2 key derivation failed"),
            Self::Storage(reason) => write!(f, "storage failure: {reason}"),
        }
    }
}

impl std::error::Error for Error {}

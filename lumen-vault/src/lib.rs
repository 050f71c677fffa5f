//! # Lumen Vault - Expiring Encrypted Secret Storage
//!
//! A [`Vault`] protects one opaque byte blob (typically a padded mnemonic
//! phrase) between sessions. The blob is encrypted with AES-256-GCM under a
//! key stretched from caller-supplied key material, and reads are gated by
//! an unlock window fixed when the vault is constructed.
//!
//! The vault does not persist anything itself: it hands `(salt, nonce,
//! ciphertext)` records to a [`Storage`] collaborator implemented by the
//! embedding application. Salt and id are not secret; the caller's key
//! material never reaches storage.
//!
//! # Example
//!
//! ```
//! use lumen_vault::{MemoryStorage, Vault, VaultConfig};
//!
//! let config = VaultConfig { pbkdf2_iterations: 32 }; // light, for docs
//! let vault = Vault::with_config("wallet-1", b"pin-derived-key", 60_000, MemoryStorage::new(), config)?;
//!
//! vault.set_data(b"secret phrase, padded")?;
//! assert_eq!(&*vault.get_data()?, b"secret phrase, padded");
//! # Ok::<(), lumen_vault::Error>(())
//! ```

#![warn(missing_docs, rust_2018_idioms, clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod storage;
pub mod vault;

pub use error::{Error, Result};
pub use storage::{MemoryStorage, Storage, VaultRecord};
pub use vault::{Vault, VaultConfig};

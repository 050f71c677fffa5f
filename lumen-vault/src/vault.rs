//! The expiring encrypted vault.

use std::time::{Duration, Instant};

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use hmac::Hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::storage::{Storage, VaultRecord};

/// Default PBKDF2 round count for deriving the encryption key.
pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 600_000;

const SALT_LEN: usize = 16;
const NONCE_LEN: usize = 12;
const KEY_LEN: usize = 32;

/// Tunable vault parameters.
///
/// The default iteration count is sized for interactive unlock; tests and
/// benchmarks drop it to keep key derivation cheap.
#[derive(Clone, Copy, Debug)]
pub struct VaultConfig {
    /// PBKDF2-HMAC-SHA256 round count.
    pub pbkdf2_iterations: u32,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            pbkdf2_iterations: DEFAULT_PBKDF2_ITERATIONS,
        }
    }
}

/// A time-limited encrypted store for one secret blob.
///
/// Construction opens an unlock window of `timeout_ms` milliseconds; once
/// it elapses the vault is locked and [`Vault::get_data`] fails until a new
/// vault is constructed. The deadline is fixed at construction — reads do
/// not extend it.
///
/// A vault instance is not internally synchronized; callers serialize
/// concurrent access to the same instance. Vaults with different ids are
/// independent.
pub struct Vault<S: Storage> {
    id: String,
    key_material: Zeroizing<Vec<u8>>,
    deadline: Instant,
    config: VaultConfig,
    store: S,
}

impl<S: Storage> Vault<S> {
    /// Open a vault with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKeyMaterial`] if `key_material` is empty.
    pub fn new(
        id: impl Into<String>,
        key_material: &[u8],
        timeout_ms: u64,
        store: S,
    ) -> Result<Self> {
        Self::with_config(id, key_material, timeout_ms, store, VaultConfig::default())
    }

    /// Open a vault with explicit parameters.
    ///
    /// See [`Vault::new`] for details.
    pub fn with_config(
        id: impl Into<String>,
        key_material: &[u8],
        timeout_ms: u64,
        store: S,
        config: VaultConfig,
    ) -> Result<Self> {
        if key_material.is_empty() {
            return Err(Error::MissingKeyMaterial);
        }
        let id = id.into();
        debug!(id = %id, timeout_ms, "vault opened");
        Ok(Self {
            id,
            key_material: Zeroizing::new(key_material.to_vec()),
            deadline: Instant::now() + Duration::from_millis(timeout_ms),
            config,
            store,
        })
    }

    /// This vault's storage id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the unlock window has expired.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        Instant::now() >= self.deadline
    }

    /// Encrypt `plaintext` and hand it to storage under this vault's id.
    ///
    /// Permitted regardless of lock state: writing re-arms storage and
    /// discloses nothing; only reads are gated by the deadline. Each write
    /// uses a fresh random salt and nonce and replaces the previous record.
    ///
    /// # Errors
    ///
    /// [`Error::KeyDerivation`], [`Error::EncryptionFailed`], or a
    /// [`Error::Storage`] failure from the collaborator. Storage is
    /// untouched on failure.
    pub fn set_data(&self, plaintext: &[u8]) -> Result<()> {
        let mut salt = [0u8; SALT_LEN];
        let mut nonce = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut salt);
        OsRng.fill_bytes(&mut nonce);

        let key = self.derive_key(&salt)?;
        let cipher =
            Aes256Gcm::new_from_slice(key.as_slice()).map_err(|_| Error::EncryptionFailed)?;
        let ciphertext = cipher
            .encrypt(Nonce::from_slice(&nonce), plaintext)
            .map_err(|_| Error::EncryptionFailed)?;

        self.store.save(
            &self.id,
            &VaultRecord {
                salt: salt.to_vec(),
                nonce: nonce.to_vec(),
                ciphertext,
            },
        )?;
        debug!(id = %self.id, "vault data stored");
        Ok(())
    }

    /// Load, decrypt, and return the last bytes passed to `set_data`.
    ///
    /// # Errors
    ///
    /// - [`Error::VaultLocked`] once the unlock window has expired.
    /// - [`Error::NoData`] if nothing is stored under this id.
    /// - [`Error::DecryptionFailed`] on wrong key material or a corrupted
    ///   record — never silently returns garbage.
    pub fn get_data(&self) -> Result<Zeroizing<Vec<u8>>> {
        if self.is_locked() {
            debug!(id = %self.id, "read rejected: vault locked");
            return Err(Error::VaultLocked);
        }

        let record = self.store.load(&self.id)?.ok_or(Error::NoData)?;
        if record.nonce.len() != NONCE_LEN {
            return Err(Error::DecryptionFailed);
        }

        let key = self.derive_key(&record.salt)?;
        let cipher =
            Aes256Gcm::new_from_slice(key.as_slice()).map_err(|_| Error::DecryptionFailed)?;
        let plaintext = cipher
            .decrypt(Nonce::from_slice(&record.nonce), record.ciphertext.as_slice())
            .map_err(|_| Error::DecryptionFailed)?;

        Ok(Zeroizing::new(plaintext))
    }

    /// Stretch the caller's key material into an AES key for `salt`.
    fn derive_key(&self, salt: &[u8]) -> Result<Zeroizing<[u8; KEY_LEN]>> {
        let mut key = Zeroizing::new([0u8; KEY_LEN]);
        pbkdf2::pbkdf2::<Hmac<Sha256>>(
            &self.key_material,
            salt,
            self.config.pbkdf2_iterations,
            key.as_mut(),
        )
        .map_err(|_| Error::KeyDerivation)?;
        Ok(key)
    }
}

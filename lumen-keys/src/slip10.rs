//! Hardened-only hierarchical ed25519 key derivation.
//!
//! A 64-byte seed is expanded into a master extended key with
//! `HMAC-SHA512(key = "ed25519 seed", data = seed)`; each hardened child
//! step computes
//! `HMAC-SHA512(key = chain_code, data = 0x00 || key || ser32(index | 0x80000000))`,
//! taking the left half as the child key and the right half as the child
//! chain code. Ed25519 defines no non-hardened child algorithm, so normal
//! path components are rejected outright.

use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::Zeroizing;

use lumen_core::hdpath::{ChildIndex, DerivationPath};
use lumen_core::Seed;

use crate::error::{Error, Result};

type HmacSha512 = Hmac<Sha512>;

/// Domain-separation key for master key generation on this curve.
const CURVE_DOMAIN: &[u8] = b"ed25519 seed";

/// An extended key: 32 bytes of key material plus a 32-byte chain code.
///
/// Every value is independent; deriving a child never mutates the parent.
/// Both halves are zeroized on drop, and the type implements neither
/// `Clone` nor `Debug` publicly.
pub struct ExtendedKey {
    key: Zeroizing<[u8; 32]>,
    chain_code: Zeroizing<[u8; 32]>,
}

impl ExtendedKey {
    /// Derive the master extended key from seed bytes.
    ///
    /// The seed is normally the 64 bytes of a [`Seed`], but any length is
    /// accepted (reference vectors use shorter seeds).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Hmac`] if HMAC initialization fails.
    pub fn from_seed_bytes(seed: &[u8]) -> Result<Self> {
        let mut mac = HmacSha512::new_from_slice(CURVE_DOMAIN).map_err(|_| Error::Hmac)?;
        mac.update(seed);
        Ok(Self::split(&mac.finalize().into_bytes()))
    }

    /// Derive the master extended key from a stretched seed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Hmac`] if HMAC initialization fails.
    pub fn from_seed(seed: &Seed) -> Result<Self> {
        Self::from_seed_bytes(seed.as_bytes())
    }

    /// Derive the hardened child at `index`.
    ///
    /// `index` is the raw (unhardened) value; the hardened offset is
    /// applied internally.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPathSegment`] if `index` is >= 2^31, or
    /// [`Error::Hmac`] if HMAC initialization fails.
    pub fn derive_hardened(&self, index: u32) -> Result<Self> {
        if index >= ChildIndex::HARDENED_OFFSET {
            return Err(Error::InvalidPathSegment(index));
        }
        let hardened_index = index | ChildIndex::HARDENED_OFFSET;

        let mut mac = HmacSha512::new_from_slice(&*self.chain_code).map_err(|_| Error::Hmac)?;
        mac.update(&[0x00]);
        mac.update(&*self.key);
        mac.update(&hardened_index.to_be_bytes());

        Ok(Self::split(&mac.finalize().into_bytes()))
    }

    /// Derive along a full path, one hardened step per component.
    ///
    /// An empty path returns a value equal to `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDerivation`] on the first non-hardened
    /// component, or the errors of [`ExtendedKey::derive_hardened`].
    pub fn derive_path(&self, path: &DerivationPath) -> Result<Self> {
        let mut current = Self {
            key: self.key.clone(),
            chain_code: self.chain_code.clone(),
        };
        for component in path.indices() {
            current = match component {
                ChildIndex::Hardened(index) => current.derive_hardened(*index)?,
                ChildIndex::Normal(_) => {
                    return Err(Error::UnsupportedDerivation(component.to_u32()))
                }
            };
        }
        Ok(current)
    }

    /// The 32-byte key half, used as an ed25519 seed by the keypair adapter.
    #[must_use]
    pub fn key(&self) -> &[u8; 32] {
        &self.key
    }

    /// The 32-byte chain code half.
    #[must_use]
    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    /// Split a 64-byte HMAC output into key and chain code halves.
    fn split(output: &[u8]) -> Self {
        let mut key = Zeroizing::new([0u8; 32]);
        let mut chain_code = Zeroizing::new([0u8; 32]);
        key.copy_from_slice(&output[..32]);
        chain_code.copy_from_slice(&output[32..]);
        Self { key, chain_code }
    }
}

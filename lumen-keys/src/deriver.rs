//! Account keypair derivation from a wallet seed.

use lumen_core::{DerivationPath, Seed};

use crate::error::{Error, Result};
use crate::keypair::KeyPair;
use crate::slip10::ExtendedKey;

/// Derives account keypairs from a wallet seed.
///
/// Each account index maps to the 3-level hardened path
/// `m/44'/148'/account'`; the resulting extended key feeds the keypair
/// adapter.
#[derive(Clone, Copy)]
pub struct AccountDeriver<'a> {
    seed: &'a Seed,
}

impl<'a> AccountDeriver<'a> {
    /// Create a deriver over a wallet seed.
    #[must_use]
    pub const fn new(seed: &'a Seed) -> Self {
        Self { seed }
    }

    /// Derive the keypair for the given account index.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range or derivation fails.
    pub fn derive(&self, account: u32) -> Result<KeyPair> {
        let path =
            DerivationPath::account(account).map_err(|_| Error::InvalidPathSegment(account))?;
        let extended = ExtendedKey::from_seed(self.seed)?.derive_path(&path)?;
        Ok(KeyPair::from_extended_key(&extended))
    }

    /// Derive `count` consecutive account keypairs starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if any derivation fails.
    pub fn derive_many(&self, start: u32, count: u32) -> Result<Vec<KeyPair>> {
        (start..start + count).map(|account| self.derive(account)).collect()
    }
}

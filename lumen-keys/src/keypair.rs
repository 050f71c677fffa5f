//! Signing keypairs and watch-only identities.
//!
//! A [`KeyPair`] is either a full signing identity (derived from an
//! extended key or imported from an encoded secret) or a watch-only
//! identity that can verify and display an address but holds no secret.
//! The two cases are separate variants, so callers that match can rule
//! out signing on a watch-only value at compile time; the method surface
//! fails explicitly instead of silently.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::slip10::ExtendedKey;
use crate::strkey;

/// A signing identity: full keypair or watch-only public key.
///
/// No `Clone` and no `Debug`: the full variant embeds the raw signing
/// secret.
pub enum KeyPair {
    /// Holds the signing secret; can sign, verify, and export.
    Full(SigningKey),
    /// Public key only; verification and address display, no signing.
    WatchOnly(VerifyingKey),
}

impl KeyPair {
    /// Build a full keypair from an extended key.
    ///
    /// The extended key's 32-byte key half is used as the ed25519 seed;
    /// the public key follows from the curve's scalar multiplication.
    #[must_use]
    pub fn from_extended_key(extended: &ExtendedKey) -> Self {
        Self::Full(SigningKey::from_bytes(extended.key()))
    }

    /// Import a full keypair from an encoded `S...` secret.
    ///
    /// Recovers the same 32-byte seed the secret was exported from and
    /// reconstructs the complete keypair, bypassing mnemonic derivation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSecret`] on bad version or checksum.
    pub fn from_secret(secret: &str) -> Result<Self> {
        let seed = strkey::decode_seed(secret)?;
        Ok(Self::Full(SigningKey::from_bytes(&seed)))
    }

    /// Build a watch-only identity from an encoded `G...` address.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAddress`] on bad version or checksum, or if
    /// the payload is not a valid ed25519 point.
    pub fn from_address(address: &str) -> Result<Self> {
        let public = strkey::decode_account(address)?;
        let verifying = VerifyingKey::from_bytes(&public).map_err(|_| Error::InvalidAddress)?;
        Ok(Self::WatchOnly(verifying))
    }

    /// The public key as an encoded `G...` address.
    #[must_use]
    pub fn address(&self) -> String {
        strkey::encode_account(&self.verifying_key().to_bytes())
    }

    /// The signing secret as an encoded `S...` string, zeroized on drop.
    ///
    /// `None` for a watch-only identity.
    #[must_use]
    pub fn secret(&self) -> Option<Zeroizing<String>> {
        match self {
            Self::Full(signing) => Some(strkey::encode_seed(&signing.to_bytes())),
            Self::WatchOnly(_) => None,
        }
    }

    /// The public half of the identity.
    #[must_use]
    pub fn verifying_key(&self) -> VerifyingKey {
        match self {
            Self::Full(signing) => signing.verifying_key(),
            Self::WatchOnly(verifying) => *verifying,
        }
    }

    /// Whether this identity can sign.
    #[must_use]
    pub fn is_watch_only(&self) -> bool {
        matches!(self, Self::WatchOnly(_))
    }

    /// Sign a message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSecret`] on a watch-only identity.
    pub fn sign(&self, message: &[u8]) -> Result<Signature> {
        match self {
            Self::Full(signing) => Ok(signing.sign(message)),
            Self::WatchOnly(_) => Err(Error::MissingSecret),
        }
    }

    /// Verify a signature against this identity's public key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Signature`] if verification fails.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> Result<()> {
        self.verifying_key()
            .verify(message, signature)
            .map_err(|_| Error::Signature)
    }
}

//! Error types for key derivation and encoding.

use core::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during key derivation, encoding, and signing.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A path component requested non-hardened derivation, which ed25519
    /// does not define. Carries the raw wire-form index.
    UnsupportedDerivation(u32),
    /// A derivation index is outside [0, 2^31).
    InvalidPathSegment(u32),
    /// An encoded secret failed version or checksum validation.
    InvalidSecret,
    /// An encoded address failed version or checksum validation.
    InvalidAddress,
    /// A signing operation was invoked on a watch-only keypair.
    MissingSecret,
    /// Signature verification failed.
    Signature,
    /// HMAC key initialization failed.
    Hmac,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedDerivation(index) => {
                write!(f, "non-hardened derivation is not supported (index {index})")
            }
            Self::InvalidPathSegment(index) => {
                write!(f, "derivation index {index} is out of range")
            }
            Self::InvalidSecret => write!(f, "invalid encoded secret"),
            Self::InvalidAddress => write!(f, "invalid encoded address"),
            Self::MissingSecret => {
                write!(f, "keypair is watch-only and holds no signing secret")
            }
            Self::Signature => write!(f, "signature verification failed"),
            Self::Hmac => write!(f, "HMAC initialization failed"),
        }
    }
}

impl std::error::Error for Error {}

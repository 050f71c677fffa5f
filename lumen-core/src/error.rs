//! Error types for mnemonic and path operations.

use core::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while encoding, decoding, or expanding mnemonics
/// and while parsing derivation paths.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Entropy length is not one of 16, 20, 24, 28, or 32 bytes.
    InvalidEntropy(usize),
    /// Word count is not 12, 15, 18, 21, or 24.
    InvalidWordCount(usize),
    /// A word is not present in the active language's wordlist.
    UnknownWord(String),
    /// The trailing checksum bits do not match the recovered entropy.
    InvalidChecksum,
    /// A derivation path component is malformed or out of range.
    InvalidDerivationPath,
    /// PBKDF2 seed stretching failed.
    KeyStretching,
    /// A word prefix is too short for unambiguous expansion.
    PrefixTooShort {
        /// The prefix that was too short.
        prefix: String,
        /// Minimum required prefix length.
        min_len: usize,
    },
    /// A word prefix does not match any word in the wordlist.
    UnknownPrefix(String),
    /// A word prefix matches multiple words in the wordlist.
    AmbiguousPrefix {
        /// The ambiguous prefix.
        prefix: String,
        /// Words that match the prefix.
        candidates: Vec<String>,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEntropy(n) => {
                write!(f, "invalid entropy length {n}, must be 16, 20, 24, 28, or 32 bytes")
            }
            Self::InvalidWordCount(n) => {
                write!(f, "invalid word count {n}, must be 12, 15, 18, 21, or 24")
            }
            Self::UnknownWord(word) => write!(f, "word \"{word}\" is not in the wordlist"),
            Self::InvalidChecksum => write!(f, "mnemonic checksum mismatch"),
            Self::InvalidDerivationPath => write!(f, "invalid derivation path"),
            Self::KeyStretching => write!(f, "PBKDF2 key stretching failed"),
            Self::PrefixTooShort { prefix, min_len } => {
                write!(f, "prefix \"{prefix}\" is too short (minimum {min_len} characters)")
            }
            Self::UnknownPrefix(prefix) => {
                write!(f, "prefix \"{prefix}\" does not match any word")
            }
            Self::AmbiguousPrefix { prefix, candidates } => {
                write!(f, "prefix \"{prefix}\" is ambiguous, matches: {}", candidates.join(", "))
            }
        }
    }
}

impl std::error::Error for Error {}

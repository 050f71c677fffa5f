//! # Lumen Core - Wallet Identity Primitives
//!
//! This crate turns randomness into a recoverable wallet identity:
//!
//! - **Mnemonic codec**: entropy to checksummed word phrase and back
//! - **Seed derivation**: PBKDF2-HMAC-SHA512 stretching of a phrase into a
//!   64-byte seed
//! - **Derivation paths**: structured `m/44'/148'/0'`-style paths consumed
//!   by the key deriver in `lumen-keys`
//!
//! # Example
//!
//! ```
//! use lumen_core::Mnemonic;
//!
//! // Generate a new 24-word phrase (the default strength)
//! let mnemonic = Mnemonic::generate()?;
//!
//! // Stretch it into the seed every key derives from
//! let seed = mnemonic.to_seed("")?;
//! assert_eq!(seed.as_bytes().len(), 64);
//! # Ok::<(), lumen_core::Error>(())
//! ```

#![warn(missing_docs, rust_2018_idioms, clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod hdpath;
pub mod mnemonic;
pub mod wordlist;

pub use error::{Error, Result};
pub use hdpath::{ChildIndex, DerivationPath};
pub use mnemonic::{split_words, Mnemonic, Seed};
pub use wordlist::Language;

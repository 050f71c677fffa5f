//! # Lumen Keys - Signing Identities
//!
//! Turns a seed from `lumen-core` into signing keypairs:
//!
//! - **Hierarchical derivation**: hardened-only ed25519 extended keys, one
//!   HMAC-SHA512 step per path level
//! - **Strkey codec**: version-prefixed, checksummed base-32 encoding of
//!   public (`G...`) and secret (`S...`) keys
//! - **Keypair adapter**: full signing keypairs, imported keypairs, and
//!   watch-only identities
//!
//! # Example
//!
//! ```
//! use lumen_core::Mnemonic;
//! use lumen_keys::AccountDeriver;
//!
//! let mnemonic = Mnemonic::generate()?;
//! let seed = mnemonic.to_seed("")?;
//!
//! let keypair = AccountDeriver::new(&seed).derive(0)?;
//! assert!(keypair.address().starts_with('G'));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs, rust_2018_idioms, clippy::all)]
#![forbid(unsafe_code)]

pub mod deriver;
pub mod error;
pub mod keypair;
pub mod slip10;
pub mod strkey;

pub use deriver::AccountDeriver;
pub use error::{Error, Result};
pub use keypair::KeyPair;
pub use slip10::ExtendedKey;

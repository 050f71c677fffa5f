//! Hierarchical derivation path support.
//!
//! Provides structured parsing and manipulation of derivation paths like
//! `m/44'/148'/0'`. The path type can represent non-hardened components
//! (so parse errors stay separate from derivation errors), but the ed25519
//! deriver in `lumen-keys` accepts hardened components only.

use core::fmt;

use crate::error::{Error, Result};

/// This wallet's fixed purpose level (`44'`).
pub const PURPOSE: u32 = 44;

/// This wallet's registered coin type (`148'`).
pub const COIN_TYPE: u32 = 148;

/// A child index in a derivation path.
///
/// Hardened indices are displayed as `n'` and occupy the upper half of the
/// u32 range in raw form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChildIndex {
    /// Normal (non-hardened) index: 0 to 2^31 - 1.
    Normal(u32),
    /// Hardened index: displayed as `n'`, stored as `n`.
    Hardened(u32),
}

impl ChildIndex {
    /// The offset for hardened indices (2^31).
    pub const HARDENED_OFFSET: u32 = 0x8000_0000;

    /// Create a normal (non-hardened) child index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDerivationPath`] if `index` is >= 2^31.
    pub const fn normal(index: u32) -> Result<Self> {
        if index >= Self::HARDENED_OFFSET {
            Err(Error::InvalidDerivationPath)
        } else {
            Ok(Self::Normal(index))
        }
    }

    /// Create a hardened child index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDerivationPath`] if `index` is >= 2^31.
    pub const fn hardened(index: u32) -> Result<Self> {
        if index >= Self::HARDENED_OFFSET {
            Err(Error::InvalidDerivationPath)
        } else {
            Ok(Self::Hardened(index))
        }
    }

    /// Check if this is a hardened index.
    #[must_use]
    pub const fn is_hardened(&self) -> bool {
        matches!(self, Self::Hardened(_))
    }

    /// Get the raw index value (without the hardened flag).
    #[must_use]
    pub const fn index(&self) -> u32 {
        match self {
            Self::Normal(index) | Self::Hardened(index) => *index,
        }
    }

    /// The raw u32 used on the wire: hardened indices include the offset.
    #[must_use]
    pub const fn to_u32(&self) -> u32 {
        match self {
            Self::Normal(index) => *index,
            Self::Hardened(index) => *index | Self::HARDENED_OFFSET,
        }
    }
}

impl fmt::Display for ChildIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal(index) => write!(f, "{index}"),
            Self::Hardened(index) => write!(f, "{index}'"),
        }
    }
}

impl core::str::FromStr for ChildIndex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(index_str) = s
            .strip_suffix('\'')
            .or_else(|| s.strip_suffix('h'))
            .or_else(|| s.strip_suffix('H'))
        {
            let index: u32 = index_str.parse().map_err(|_| Error::InvalidDerivationPath)?;
            Self::hardened(index)
        } else {
            let index: u32 = s.parse().map_err(|_| Error::InvalidDerivationPath)?;
            Self::normal(index)
        }
    }
}

/// An ordered derivation path.
///
/// Represents paths like `m/44'/148'/0'` as a sequence of child indices.
/// An empty path addresses the master key itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct DerivationPath {
    indices: Vec<ChildIndex>,
}

impl DerivationPath {
    /// The empty path (master key).
    #[must_use]
    pub fn master() -> Self {
        Self::default()
    }

    /// Build a path from a sequence of child indices.
    #[must_use]
    pub fn new(indices: Vec<ChildIndex>) -> Self {
        Self { indices }
    }

    /// This wallet's 3-level account path: `m/44'/148'/account'`.
    ///
    /// The 3-level shape is the account layer's convention; the deriver
    /// itself accepts any depth.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDerivationPath`] if `account` is >= 2^31.
    pub fn account(account: u32) -> Result<Self> {
        Ok(Self {
            indices: vec![
                ChildIndex::Hardened(PURPOSE),
                ChildIndex::Hardened(COIN_TYPE),
                ChildIndex::hardened(account)?,
            ],
        })
    }

    /// Parse a path from its string form.
    ///
    /// Accepts `m/44'/148'/0'`, `m/44h/148h/0h`, a bare `m`, and the
    /// prefix-less `44'/148'/0'`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDerivationPath`] on malformed components or
    /// out-of-range indices.
    pub fn parse(path: &str) -> Result<Self> {
        let path = path.trim();
        if path.is_empty() || path == "m" || path == "M" {
            return Ok(Self::master());
        }

        let components = path
            .strip_prefix("m/")
            .or_else(|| path.strip_prefix("M/"))
            .unwrap_or(path);

        let mut indices = Vec::new();
        for component in components.split('/') {
            if component.is_empty() {
                return Err(Error::InvalidDerivationPath);
            }
            indices.push(component.parse()?);
        }
        Ok(Self { indices })
    }

    /// The child indices in this path.
    #[must_use]
    pub fn indices(&self) -> &[ChildIndex] {
        &self.indices
    }

    /// Number of levels in this path.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.indices.len()
    }

    /// Check if this path is empty (master key).
    #[must_use]
    pub fn is_master(&self) -> bool {
        self.indices.is_empty()
    }

    /// Append a child index, yielding a new path.
    #[must_use]
    pub fn child(&self, index: ChildIndex) -> Self {
        let mut indices = self.indices.clone();
        indices.push(index);
        Self { indices }
    }

    /// Append a hardened child index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDerivationPath`] if `index` is >= 2^31.
    pub fn hardened_child(&self, index: u32) -> Result<Self> {
        Ok(self.child(ChildIndex::hardened(index)?))
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for index in &self.indices {
            write!(f, "/{index}")?;
        }
        Ok(())
    }
}

impl core::str::FromStr for DerivationPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

//! The key-value storage collaborator.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One encrypted blob as handed to storage.
///
/// Nothing here is secret: the salt and nonce are public parameters and the
/// ciphertext is authenticated. The record is serde-serializable so
/// embedding applications can persist it however they like.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultRecord {
    /// Random per-write salt for key derivation.
    pub salt: Vec<u8>,
    /// Random per-write AES-GCM nonce (12 bytes).
    pub nonce: Vec<u8>,
    /// Ciphertext with the 16-byte authentication tag appended.
    pub ciphertext: Vec<u8>,
}

/// Key-value persistence implemented by the embedding application.
///
/// The vault calls `save`/`load` with its id; everything else about the
/// medium (disk, browser storage, a database) is the implementer's choice.
pub trait Storage {
    /// Persist `record` under `id`, replacing any previous record.
    fn save(&self, id: &str, record: &VaultRecord) -> Result<()>;

    /// Load the record stored under `id`, if any.
    fn load(&self, id: &str) -> Result<Option<VaultRecord>>;
}

/// In-memory [`Storage`] backed by a shared map.
///
/// Clones share the same underlying map, so several vaults (or a vault and
/// a test) can observe the same entries.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, VaultRecord>>>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn save(&self, id: &str, record: &VaultRecord) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| Error::Storage("memory store lock poisoned".to_string()))?;
        entries.insert(id.to_string(), record.clone());
        Ok(())
    }

    fn load(&self, id: &str) -> Result<Option<VaultRecord>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| Error::Storage("memory store lock poisoned".to_string()))?;
        Ok(entries.get(id).cloned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn record(tag: u8) -> VaultRecord {
        VaultRecord {
            salt: vec![tag; 16],
            nonce: vec![tag; 12],
            ciphertext: vec![tag; 48],
        }
    }

    #[test]
    fn save_then_load() {
        let store = MemoryStorage::new();
        store.save("id-1", &record(1)).unwrap();
        assert_eq!(store.load("id-1").unwrap(), Some(record(1)));
    }

    #[test]
    fn missing_id_is_none() {
        let store = MemoryStorage::new();
        assert_eq!(store.load("missing").unwrap(), None);
    }

    #[test]
    fn save_replaces_previous_record() {
        let store = MemoryStorage::new();
        store.save("id-1", &record(1)).unwrap();
        store.save("id-1", &record(2)).unwrap();
        assert_eq!(store.load("id-1").unwrap(), Some(record(2)));
    }

    #[test]
    fn clones_share_entries() {
        let store = MemoryStorage::new();
        let view = store.clone();
        store.save("id-1", &record(3)).unwrap();
        assert_eq!(view.load("id-1").unwrap(), Some(record(3)));
    }

    #[test]
    fn record_serializes_round_trip() {
        let original = record(7);
        let json = serde_json::to_string(&original).unwrap();
        let parsed: VaultRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }
}

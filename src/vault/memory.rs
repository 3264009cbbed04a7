//! In-process vault store.

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use super::entry::VaultEntry;
use super::repository::{sort_entries, VaultRepository};
use crate::errors::{Result, VaultGuardError};

/// A `VaultRepository` backed by a locked `HashMap`.
///
/// Each call takes the lock once, so single-entry operations are atomic.
#[derive(Debug, Default)]
pub struct MemoryVaultStore {
    entries: RwLock<HashMap<Uuid, VaultEntry>>,
}

impl MemoryVaultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries across all owners.
    pub fn len(&self) -> usize {
        self.entries.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> VaultGuardError {
    VaultGuardError::StoreError("vault store lock poisoned".into())
}

impl VaultRepository for MemoryVaultStore {
    fn list(&self, owner_id: &str) -> Result<Vec<VaultEntry>> {
        let map = self.entries.read().map_err(poisoned)?;
        let mut entries: Vec<VaultEntry> = map
            .values()
            .filter(|e| e.owner_id == owner_id)
            .cloned()
            .collect();
        sort_entries(&mut entries);
        Ok(entries)
    }

    fn get(&self, id: &Uuid, owner_id: &str) -> Result<Option<VaultEntry>> {
        let map = self.entries.read().map_err(poisoned)?;
        Ok(map.get(id).filter(|e| e.owner_id == owner_id).cloned())
    }

    fn put(&self, entry: VaultEntry) -> Result<()> {
        entry.validate()?;
        let mut map = self.entries.write().map_err(poisoned)?;
        if let Some(existing) = map.get(&entry.id) {
            if existing.owner_id != entry.owner_id {
                return Err(VaultGuardError::StoreError(
                    "entry id is already taken".into(),
                ));
            }
        }
        map.insert(entry.id, entry);
        Ok(())
    }

    fn delete(&self, id: &Uuid, owner_id: &str) -> Result<bool> {
        let mut map = self.entries.write().map_err(poisoned)?;
        match map.get(id) {
            Some(e) if e.owner_id == owner_id => {
                map.remove(id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

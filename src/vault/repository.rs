//! The storage seam between the engine and whatever persists entries.
//!
//! Every id-addressed call takes the owner id as well, and a store must
//! treat an entry owned by someone else exactly like a missing one.

use std::sync::Arc;

use uuid::Uuid;

use super::entry::VaultEntry;
use crate::errors::Result;

/// Abstraction over vault entry persistence.
pub trait VaultRepository: Send + Sync {
    /// All entries belonging to `owner_id`, oldest first.
    fn list(&self, owner_id: &str) -> Result<Vec<VaultEntry>>;

    /// One entry, or `None` if it does not exist or belongs to another owner.
    fn get(&self, id: &Uuid, owner_id: &str) -> Result<Option<VaultEntry>>;

    /// Insert or replace an entry (keyed by id).
    fn put(&self, entry: VaultEntry) -> Result<()>;

    /// Remove an entry. Returns false if it did not exist or is not owned
    /// by `owner_id`.
    fn delete(&self, id: &Uuid, owner_id: &str) -> Result<bool>;
}

impl<T: VaultRepository + ?Sized> VaultRepository for Arc<T> {
    fn list(&self, owner_id: &str) -> Result<Vec<VaultEntry>> {
        (**self).list(owner_id)
    }

    fn get(&self, id: &Uuid, owner_id: &str) -> Result<Option<VaultEntry>> {
        (**self).get(id, owner_id)
    }

    fn put(&self, entry: VaultEntry) -> Result<()> {
        (**self).put(entry)
    }

    fn delete(&self, id: &Uuid, owner_id: &str) -> Result<bool> {
        (**self).delete(id, owner_id)
    }
}

/// Sort entries the way `list` promises: creation time, then id.
pub(crate) fn sort_entries(entries: &mut [VaultEntry]) {
    entries.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
}

//! JSON-file vault store used by the CLI.
//!
//! The whole vault lives in one JSON document:
//!
//! ```text
//! { "version": 1, "entries": [ VaultEntry, ... ] }
//! ```
//!
//! Only ciphertext is ever written.  Every mutation rewrites the file
//! atomically (unique temp file in the same directory, then rename) with
//! owner-only permissions on Unix, while holding an exclusive OS lock so
//! separate processes never drop each other's entries.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use fs4::fs_std::FileExt;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use uuid::Uuid;

use super::entry::VaultEntry;
use super::repository::{sort_entries, VaultRepository};
use crate::errors::{Result, VaultGuardError};

/// Current document format version.
pub const CURRENT_VERSION: u8 = 1;

#[derive(Serialize, Deserialize)]
struct VaultDocument {
    version: u8,
    #[serde(default)]
    entries: Vec<VaultEntry>,
}

impl Default for VaultDocument {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION,
            entries: Vec::new(),
        }
    }
}

/// A `VaultRepository` persisted as a single JSON file.
///
/// Cross-process safety comes from an advisory lock on a sidecar
/// `.<file>.lock`: shared for reads, exclusive for a whole
/// read-modify-write cycle.
pub struct FileVaultStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FileVaultStore {
    /// Point a store at `path`. The file is created on first write.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }

    fn lock_path(&self) -> PathBuf {
        self.parent().join(format!(
            ".{}.lock",
            self.path.file_name().unwrap_or_default().to_string_lossy()
        ))
    }

    /// Open the sidecar lock file and take the OS lock on it. The lock is
    /// released when the returned handle is dropped.
    fn os_lock(&self, exclusive: bool) -> Result<File> {
        fs::create_dir_all(self.parent()).map_err(|e| self.io_error(e))?;
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(self.lock_path())
            .map_err(|e| self.io_error(e))?;

        let locked = if exclusive {
            FileExt::lock_exclusive(&file)
        } else {
            FileExt::lock_shared(&file)
        };
        locked.map_err(|e| self.io_error(e))?;
        Ok(file)
    }

    fn read_document(&self) -> Result<VaultDocument> {
        if !self.path.exists() {
            return Ok(VaultDocument::default());
        }

        let data = fs::read(&self.path).map_err(|e| self.io_error(e))?;
        let doc: VaultDocument = serde_json::from_slice(&data).map_err(|e| {
            VaultGuardError::StoreError(format!("{}: {e}", self.path.display()))
        })?;

        if doc.version != CURRENT_VERSION {
            return Err(VaultGuardError::StoreError(format!(
                "unsupported vault file version {}, expected {CURRENT_VERSION}",
                doc.version
            )));
        }
        Ok(doc)
    }

    /// Must be called with the exclusive lock held.
    fn write_document(&self, doc: &VaultDocument) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(doc)
            .map_err(|e| VaultGuardError::SerializationError(format!("vault: {e}")))?;

        // Unique name per write; created 0o600 on Unix.
        let mut tmp = NamedTempFile::new_in(self.parent()).map_err(|e| self.io_error(e))?;
        tmp.write_all(&bytes).map_err(|e| self.io_error(e))?;
        tmp.as_file().sync_all().map_err(|e| self.io_error(e))?;

        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;
        Ok(())
    }

    fn io_error(&self, e: std::io::Error) -> VaultGuardError {
        VaultGuardError::StoreError(format!("{}: {e}", self.path.display()))
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|_| VaultGuardError::StoreError("vault file lock poisoned".into()))
    }

    /// Read under a shared lock. A vault whose directory does not exist
    /// yet is empty; nothing is created for a read.
    fn read_locked(&self) -> Result<VaultDocument> {
        let _guard = self.guard()?;
        if !self.parent().exists() {
            return Ok(VaultDocument::default());
        }
        let _os = self.os_lock(false)?;
        self.read_document()
    }

    /// Run one read-modify-write cycle under the exclusive lock. `apply`
    /// returns whether the document changed and needs writing.
    fn modify<T>(&self, apply: impl FnOnce(&mut VaultDocument) -> Result<(bool, T)>) -> Result<T> {
        let _guard = self.guard()?;
        let _os = self.os_lock(true)?;

        let mut doc = self.read_document()?;
        let (changed, out) = apply(&mut doc)?;
        if changed {
            self.write_document(&doc)?;
        }
        Ok(out)
    }
}

impl VaultRepository for FileVaultStore {
    fn list(&self, owner_id: &str) -> Result<Vec<VaultEntry>> {
        let mut entries: Vec<VaultEntry> = self
            .read_locked()?
            .entries
            .into_iter()
            .filter(|e| e.owner_id == owner_id)
            .collect();
        sort_entries(&mut entries);
        Ok(entries)
    }

    fn get(&self, id: &Uuid, owner_id: &str) -> Result<Option<VaultEntry>> {
        Ok(self
            .read_locked()?
            .entries
            .into_iter()
            .find(|e| e.id == *id && e.owner_id == owner_id))
    }

    fn put(&self, entry: VaultEntry) -> Result<()> {
        entry.validate()?;
        self.modify(|doc| {
            match doc.entries.iter_mut().find(|e| e.id == entry.id) {
                Some(existing) if existing.owner_id != entry.owner_id => {
                    return Err(VaultGuardError::StoreError(
                        "entry id is already taken".into(),
                    ));
                }
                Some(existing) => *existing = entry,
                None => doc.entries.push(entry),
            }
            Ok((true, ()))
        })
    }

    fn delete(&self, id: &Uuid, owner_id: &str) -> Result<bool> {
        self.modify(|doc| {
            let before = doc.entries.len();
            doc.entries
                .retain(|e| !(e.id == *id && e.owner_id == owner_id));
            let removed = doc.entries.len() != before;
            Ok((removed, removed))
        })
    }
}

//! Vault module — stored credentials and the stores that persist them.
//!
//! This module provides:
//! - `VaultEntry`, `EntrySummary`, `NewEntry`, `EntryUpdate` (`entry`)
//! - The `VaultRepository` storage seam (`repository`)
//! - An in-memory store (`memory`) and a JSON file store (`file`)

pub mod entry;
pub mod file;
pub mod memory;
pub mod repository;

// Re-export the most commonly used items.
pub use entry::{EntrySummary, EntryUpdate, NewEntry, VaultEntry};
pub use file::FileVaultStore;
pub use memory::MemoryVaultStore;
pub use repository::VaultRepository;

//! Vault entry types.
//!
//! A `VaultEntry` is what the store persists: descriptive fields in the
//! clear and the secret only as ciphertext.  `EntrySummary` is the list
//! view without the secret field.  `NewEntry` and `EntryUpdate` carry the
//! caller's plaintext into the engine inside `Zeroizing` buffers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use zeroize::Zeroizing;

use crate::errors::{Result, VaultGuardError};

/// A single stored credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultEntry {
    pub id: Uuid,

    /// The only user allowed to see or change this entry.
    pub owner_id: String,

    /// Service name, e.g. "Netflix".
    pub service: String,

    /// Login name on that service.
    pub username: String,

    /// Output of `SecretCipher::encrypt` for the current secret.
    pub ciphertext: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    pub created_at: DateTime<Utc>,

    /// Bumped on every mutation, including secret rotation.
    pub updated_at: DateTime<Utc>,
}

impl VaultEntry {
    /// Build a fresh entry with a random id and matching timestamps.
    pub fn new(
        owner_id: &str,
        service: &str,
        username: &str,
        ciphertext: String,
        category: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id: owner_id.to_string(),
            service: service.to_string(),
            username: username.to_string(),
            ciphertext,
            category,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check the entry invariants before it is persisted.
    pub fn validate(&self) -> Result<()> {
        if self.owner_id.is_empty() {
            return Err(VaultGuardError::InvalidEntry("owner id cannot be empty".into()));
        }
        if self.ciphertext.is_empty() {
            return Err(VaultGuardError::InvalidEntry(
                "entry has no ciphertext".into(),
            ));
        }
        Ok(())
    }

    /// The list view of this entry.
    pub fn summary(&self) -> EntrySummary {
        EntrySummary {
            id: self.id,
            owner_id: self.owner_id.clone(),
            service: self.service.clone(),
            username: self.username.clone(),
            category: self.category.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Entry metadata without the secret field.
///
/// Returned by list operations so no ciphertext (and never plaintext)
/// leaves the engine for bulk views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntrySummary {
    pub id: Uuid,
    pub owner_id: String,
    pub service: String,
    pub username: String,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for storing a new credential.
pub struct NewEntry {
    pub service: String,
    pub username: String,
    pub secret: Zeroizing<String>,
    pub category: Option<String>,
}

impl NewEntry {
    pub fn new(service: &str, username: &str, secret: &str) -> Self {
        Self {
            service: service.to_string(),
            username: username.to_string(),
            secret: Zeroizing::new(secret.to_string()),
            category: None,
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }
}

impl std::fmt::Debug for NewEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewEntry")
            .field("service", &self.service)
            .field("username", &self.username)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

/// Partial update of an entry. `None` leaves a field untouched.
///
/// `category` is doubly optional: `Some(None)` clears it.
#[derive(Default)]
pub struct EntryUpdate {
    pub service: Option<String>,
    pub username: Option<String>,
    pub secret: Option<Zeroizing<String>>,
    pub category: Option<Option<String>>,
}

impl EntryUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn service(mut self, service: &str) -> Self {
        self.service = Some(service.to_string());
        self
    }

    pub fn username(mut self, username: &str) -> Self {
        self.username = Some(username.to_string());
        self
    }

    pub fn secret(mut self, secret: &str) -> Self {
        self.secret = Some(Zeroizing::new(secret.to_string()));
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(Some(category.to_string()));
        self
    }

    pub fn clear_category(mut self) -> Self {
        self.category = Some(None);
        self
    }

    /// True when nothing would change.
    pub fn is_empty(&self) -> bool {
        self.service.is_none()
            && self.username.is_none()
            && self.secret.is_none()
            && self.category.is_none()
    }
}

impl std::fmt::Debug for EntryUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryUpdate")
            .field("service", &self.service)
            .field("username", &self.username)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("category", &self.category)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entry_has_matching_timestamps() {
        let e = VaultEntry::new("alice", "Gmail", "alice@example.com", "v1.x.y".into(), None);
        assert_eq!(e.created_at, e.updated_at);
        assert!(e.validate().is_ok());
    }

    #[test]
    fn empty_ciphertext_is_invalid() {
        let e = VaultEntry::new("alice", "Gmail", "alice", String::new(), None);
        assert!(matches!(e.validate(), Err(VaultGuardError::InvalidEntry(_))));
    }

    #[test]
    fn empty_owner_is_invalid() {
        let e = VaultEntry::new("", "Gmail", "alice", "v1.x.y".into(), None);
        assert!(e.validate().is_err());
    }

    #[test]
    fn summary_serializes_without_ciphertext() {
        let e = VaultEntry::new("alice", "Gmail", "alice", "v1.abcd.SECRETBLOB".into(), None);
        let json = serde_json::to_string(&e.summary()).unwrap();
        assert!(json.contains("Gmail"));
        assert!(!json.contains("SECRETBLOB"));
        assert!(!json.contains("ciphertext"));
    }

    #[test]
    fn debug_output_never_shows_plaintext() {
        let new = NewEntry::new("Gmail", "alice", "hunter2hunter2");
        assert!(!format!("{new:?}").contains("hunter2"));

        let update = EntryUpdate::new().secret("hunter2hunter2");
        let shown = format!("{update:?}");
        assert!(!shown.contains("hunter2"));
        assert!(shown.contains("<redacted>"));
    }

    #[test]
    fn update_builder_tracks_emptiness() {
        assert!(EntryUpdate::new().is_empty());
        assert!(!EntryUpdate::new().clear_category().is_empty());
        let u = EntryUpdate::new().service("Work mail").category("Work");
        assert_eq!(u.service.as_deref(), Some("Work mail"));
        assert_eq!(u.category, Some(Some("Work".to_string())));
    }
}

//! The vault security engine.
//!
//! `VaultSecurityEngine` is the only entry point the web layer (or the CLI)
//! needs: it owns the cipher, the breach oracle, the health scorer and the
//! strength oracle, and reads and writes through a `VaultRepository`.
//!
//! Every id-addressed operation takes the caller's owner id.  An entry that
//! belongs to someone else is reported exactly like a missing one.

use tracing::debug;
use uuid::Uuid;
use zeroize::Zeroizing;

use crate::breach::{BreachCheckResult, BreachOracle};
use crate::config::Settings;
use crate::crypto::SecretCipher;
use crate::errors::{Result, VaultGuardError};
use crate::generator::{self, GeneratedPassword, GeneratorOptions};
use crate::health::{HealthScoreReport, HealthScorer};
use crate::strength::{StrengthOracle, StrengthVerdict, UnavailableOracle};
use crate::vault::{EntrySummary, EntryUpdate, NewEntry, VaultEntry, VaultRepository};

pub struct VaultSecurityEngine<S> {
    store: S,
    cipher: SecretCipher,
    breach: BreachOracle,
    scorer: HealthScorer,
    strength: Box<dyn StrengthOracle>,
}

impl<S: VaultRepository> VaultSecurityEngine<S> {
    /// Build an engine from validated settings.
    ///
    /// Fails if no usable encryption key is configured.
    pub fn from_settings(settings: &Settings, store: S) -> Result<Self> {
        settings.validate()?;
        let cipher = SecretCipher::new(settings.cipher_key()?);
        Ok(Self::with_parts(
            store,
            cipher,
            BreachOracle::from_settings(settings),
            HealthScorer::new(settings.weak_min_length),
        ))
    }

    /// Build an engine from explicit collaborators (tests, embedding).
    pub fn with_parts(
        store: S,
        cipher: SecretCipher,
        breach: BreachOracle,
        scorer: HealthScorer,
    ) -> Self {
        Self {
            store,
            cipher,
            breach,
            scorer,
            strength: Box::new(UnavailableOracle),
        }
    }

    /// Replace the strength oracle (defaults to `UnavailableOracle`).
    pub fn with_strength_oracle<O: StrengthOracle + 'static>(mut self, oracle: O) -> Self {
        self.strength = Box::new(oracle);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn cipher(&self) -> &SecretCipher {
        &self.cipher
    }

    pub fn scorer(&self) -> &HealthScorer {
        &self.scorer
    }

    // ------------------------------------------------------------------
    // Entry operations
    // ------------------------------------------------------------------

    /// Encrypt and persist a new credential.
    ///
    /// Returns the stored entry and, separately, the plaintext for the
    /// immediate response. The plaintext is never part of the entry.
    pub fn store_secret(
        &self,
        owner_id: &str,
        new: NewEntry,
    ) -> Result<(VaultEntry, Zeroizing<String>)> {
        let ciphertext = self.cipher.encrypt(&new.secret)?;
        let entry = VaultEntry::new(
            owner_id,
            &new.service,
            &new.username,
            ciphertext,
            new.category,
        );
        self.store.put(entry.clone())?;

        debug!(entry_id = %entry.id, owner = owner_id, "secret stored");
        Ok((entry, new.secret))
    }

    /// List an owner's entries without any secret material.
    pub fn list_entries(&self, owner_id: &str) -> Result<Vec<EntrySummary>> {
        Ok(self
            .store
            .list(owner_id)?
            .iter()
            .map(VaultEntry::summary)
            .collect())
    }

    /// Metadata for one entry.
    pub fn entry(&self, id: &Uuid, owner_id: &str) -> Result<EntrySummary> {
        Ok(self.owned_entry(id, owner_id)?.summary())
    }

    /// Decrypt one entry's secret on demand.
    pub fn reveal_secret(&self, id: &Uuid, owner_id: &str) -> Result<Zeroizing<String>> {
        let entry = self.owned_entry(id, owner_id)?;
        let plaintext = self.cipher.decrypt(&entry.ciphertext)?;

        debug!(entry_id = %id, owner = owner_id, "secret revealed");
        Ok(plaintext)
    }

    /// Apply a partial update. A new secret is re-encrypted with a fresh
    /// nonce and echoed back alongside the entry.
    pub fn update_secret(
        &self,
        id: &Uuid,
        owner_id: &str,
        update: EntryUpdate,
    ) -> Result<(VaultEntry, Option<Zeroizing<String>>)> {
        let mut entry = self.owned_entry(id, owner_id)?;

        if let Some(secret) = &update.secret {
            entry.ciphertext = self.cipher.encrypt(secret)?;
        }
        if let Some(service) = update.service {
            entry.service = service;
        }
        if let Some(username) = update.username {
            entry.username = username;
        }
        if let Some(category) = update.category {
            entry.category = category;
        }
        entry.updated_at = chrono::Utc::now();

        self.store.put(entry.clone())?;

        debug!(
            entry_id = %id,
            owner = owner_id,
            rotated = update.secret.is_some(),
            "entry updated"
        );
        Ok((entry, update.secret))
    }

    /// Delete an entry. Returns false if it was missing or not owned.
    pub fn delete_secret(&self, id: &Uuid, owner_id: &str) -> Result<bool> {
        let deleted = self.store.delete(id, owner_id)?;
        debug!(entry_id = %id, owner = owner_id, deleted, "delete requested");
        Ok(deleted)
    }

    // ------------------------------------------------------------------
    // Security signals
    // ------------------------------------------------------------------

    /// Look a password up in the breach corpus. Never fails.
    pub fn check_breach(&self, plaintext: &str) -> BreachCheckResult {
        self.breach.check(plaintext)
    }

    /// Score the owner's whole vault.
    pub fn score_vault(&self, owner_id: &str) -> Result<HealthScoreReport> {
        let entries = self.store.list(owner_id)?;
        Ok(self.scorer.score(&entries, &self.cipher))
    }

    /// Ask the strength oracle about a password.
    pub fn predict_strength(&self, plaintext: &str) -> StrengthVerdict {
        StrengthVerdict::from_prediction(self.strength.predict(plaintext))
    }

    /// Generate a random password.
    pub fn generate_password(&self, options: &GeneratorOptions) -> GeneratedPassword {
        generator::generate(options)
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn owned_entry(&self, id: &Uuid, owner_id: &str) -> Result<VaultEntry> {
        self.store
            .get(id, owner_id)?
            .ok_or(VaultGuardError::NotFound)
    }
}

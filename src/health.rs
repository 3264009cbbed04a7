//! Vault health scoring.
//!
//! The scorer decrypts one owner's entries in memory, counts weak and
//! reused secrets, and folds the counts into a 0-100 score:
//!
//! ```text
//! score = 100 - min(reused * 10, 50) - min(weak * 5, 50), floored at 0
//! ```
//!
//! Entries that fail to decrypt are skipped and counted as neither weak
//! nor reused.  Plaintexts live in `Zeroizing` buffers that are dropped
//! before `score` returns; the report holds counts only.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::crypto::SecretCipher;
use crate::vault::VaultEntry;

/// Points lost per distinct reused secret.
const REUSE_PENALTY: usize = 10;

/// Points lost per weak secret.
const WEAK_PENALTY: usize = 5;

/// Cap for each of the two penalties.
const PENALTY_CAP: usize = 50;

/// Default minimum length for a secret not to count as weak.
pub const DEFAULT_MIN_LENGTH: usize = 10;

pub const EMPTY_VAULT_MESSAGE: &str = "Vault is empty.";

/// Score bands. Thresholds: 80 and 50.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthBand {
    Excellent,
    Good,
    Critical,
}

impl HealthBand {
    pub fn for_score(score: u8) -> Self {
        if score >= 80 {
            HealthBand::Excellent
        } else if score >= 50 {
            HealthBand::Good
        } else {
            HealthBand::Critical
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            HealthBand::Excellent => "Excellent! Your vault is very secure.",
            HealthBand::Good => "Good, but you have some weak or reused passwords.",
            HealthBand::Critical => "Critical! High risk of reused or weak passwords.",
        }
    }
}

/// Aggregate health of one owner's vault. Computed per request, never
/// cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthScoreReport {
    pub score: u8,
    pub total_entries: usize,
    pub weak_count: usize,
    pub reused_count: usize,
    pub advisory_message: String,
}

impl HealthScoreReport {
    pub fn empty() -> Self {
        Self {
            score: 0,
            total_entries: 0,
            weak_count: 0,
            reused_count: 0,
            advisory_message: EMPTY_VAULT_MESSAGE.to_string(),
        }
    }
}

/// Combine the two penalties into a score, clamped to 0..=100.
pub fn compute_score(reused_count: usize, weak_count: usize) -> u8 {
    let reuse = reused_count.saturating_mul(REUSE_PENALTY).min(PENALTY_CAP);
    let weak = weak_count.saturating_mul(WEAK_PENALTY).min(PENALTY_CAP);
    let score = 100usize.saturating_sub(reuse).saturating_sub(weak);
    // 0..=100 fits in a u8.
    score as u8
}

/// Scores a decrypted-in-memory snapshot of a vault.
#[derive(Debug, Clone, Copy)]
pub struct HealthScorer {
    min_length: usize,
}

impl Default for HealthScorer {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH)
    }
}

impl HealthScorer {
    /// `min_length`: secrets with fewer characters count as weak.
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn is_weak(&self, secret: &str) -> bool {
        secret.chars().count() < self.min_length
    }

    pub fn score(&self, entries: &[VaultEntry], cipher: &SecretCipher) -> HealthScoreReport {
        if entries.is_empty() {
            return HealthScoreReport::empty();
        }

        let mut plaintexts: Vec<Zeroizing<String>> = Vec::with_capacity(entries.len());
        for entry in entries {
            match cipher.decrypt(&entry.ciphertext) {
                Ok(plain) => plaintexts.push(plain),
                Err(e) => {
                    warn!(entry_id = %entry.id, error = %e, "skipping entry that failed to decrypt");
                }
            }
        }

        let weak_count = plaintexts.iter().filter(|p| self.is_weak(p.as_str())).count();

        let mut occurrences: HashMap<&str, usize> = HashMap::new();
        for plain in &plaintexts {
            *occurrences.entry(plain.as_str()).or_insert(0) += 1;
        }
        let reused_count = occurrences.values().filter(|&&n| n > 1).count();

        let score = compute_score(reused_count, weak_count);
        debug!(
            total = entries.len(),
            skipped = entries.len() - plaintexts.len(),
            weak_count,
            reused_count,
            score,
            "vault scored"
        );

        HealthScoreReport {
            score,
            total_entries: entries.len(),
            weak_count,
            reused_count,
            advisory_message: HealthBand::for_score(score).message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_penalties_is_perfect() {
        assert_eq!(compute_score(0, 0), 100);
    }

    #[test]
    fn penalties_are_capped_independently() {
        assert_eq!(compute_score(1, 0), 90);
        assert_eq!(compute_score(0, 1), 95);
        assert_eq!(compute_score(5, 0), 50);
        assert_eq!(compute_score(20, 0), 50);
        assert_eq!(compute_score(0, 10), 50);
        assert_eq!(compute_score(0, 40), 50);
    }

    #[test]
    fn combined_penalties_floor_at_zero() {
        assert_eq!(compute_score(6, 11), 0);
        assert_eq!(compute_score(usize::MAX, usize::MAX), 0);
    }

    #[test]
    fn band_thresholds() {
        assert_eq!(HealthBand::for_score(100), HealthBand::Excellent);
        assert_eq!(HealthBand::for_score(80), HealthBand::Excellent);
        assert_eq!(HealthBand::for_score(79), HealthBand::Good);
        assert_eq!(HealthBand::for_score(50), HealthBand::Good);
        assert_eq!(HealthBand::for_score(49), HealthBand::Critical);
        assert_eq!(HealthBand::for_score(0), HealthBand::Critical);
    }

    #[test]
    fn weakness_counts_characters_not_bytes() {
        let scorer = HealthScorer::new(10);
        assert!(scorer.is_weak("short"));
        assert!(!scorer.is_weak("exactly10!"));
        // 9 chars, 18 bytes.
        assert!(scorer.is_weak("ééééééééé"));
    }
}

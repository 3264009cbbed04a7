//! Integration tests for vault health scoring.

use vaultguard::crypto::{CipherKey, SecretCipher};
use vaultguard::health::{HealthScorer, EMPTY_VAULT_MESSAGE};
use vaultguard::vault::VaultEntry;

fn entry(cipher: &SecretCipher, secret: &str) -> VaultEntry {
    VaultEntry::new(
        "alice",
        "Service",
        "alice",
        cipher.encrypt(secret).unwrap(),
        None,
    )
}

fn entries(cipher: &SecretCipher, secrets: &[&str]) -> Vec<VaultEntry> {
    secrets.iter().map(|s| entry(cipher, s)).collect()
}

#[test]
fn empty_vault_scores_zero() {
    let cipher = SecretCipher::new(CipherKey::generate());
    let report = HealthScorer::default().score(&[], &cipher);
    assert_eq!(report.score, 0);
    assert_eq!(report.total_entries, 0);
    assert_eq!(report.weak_count, 0);
    assert_eq!(report.reused_count, 0);
    assert_eq!(report.advisory_message, EMPTY_VAULT_MESSAGE);
}

#[test]
fn one_reused_secret_costs_ten_points() {
    let cipher = SecretCipher::new(CipherKey::generate());
    let vault = entries(&cipher, &["samepass123", "samepass123", "unique999!"]);

    let report = HealthScorer::default().score(&vault, &cipher);
    assert_eq!(report.total_entries, 3);
    assert_eq!(report.reused_count, 1);
    assert_eq!(report.weak_count, 0);
    assert_eq!(report.score, 90);
    assert!(report.advisory_message.starts_with("Excellent"));
}

#[test]
fn reuse_counts_distinct_values_not_entries() {
    let cipher = SecretCipher::new(CipherKey::generate());
    let vault = entries(
        &cipher,
        &["aaaaaaaaaaaa", "aaaaaaaaaaaa", "aaaaaaaaaaaa", "bbbbbbbbbbbb", "bbbbbbbbbbbb"],
    );
    let report = HealthScorer::default().score(&vault, &cipher);
    assert_eq!(report.reused_count, 2);
    assert_eq!(report.score, 80);
}

#[test]
fn weak_secrets_cost_five_points_each() {
    let cipher = SecretCipher::new(CipherKey::generate());
    let vault = entries(&cipher, &["short", "tiny", "a-long-enough-one"]);
    let report = HealthScorer::default().score(&vault, &cipher);
    assert_eq!(report.weak_count, 2);
    assert_eq!(report.reused_count, 0);
    assert_eq!(report.score, 90);
}

#[test]
fn penalties_clamp_to_zero() {
    let cipher = SecretCipher::new(CipherKey::generate());
    // Six distinct short values, each stored twice: 6 reused, 12 weak.
    let mut secrets = Vec::new();
    for s in ["a", "b", "c", "d", "e", "f"] {
        secrets.push(s);
        secrets.push(s);
    }
    let report = HealthScorer::default().score(&entries(&cipher, &secrets), &cipher);
    assert_eq!(report.reused_count, 6);
    assert_eq!(report.weak_count, 12);
    assert_eq!(report.score, 0);
    assert!(report.advisory_message.starts_with("Critical"));
}

#[test]
fn middle_band_message() {
    let cipher = SecretCipher::new(CipherKey::generate());
    // 3 reused, none weak: 70.
    let vault = entries(
        &cipher,
        &[
            "first-value-1", "first-value-1",
            "second-value-2", "second-value-2",
            "third-value-3", "third-value-3",
        ],
    );
    let report = HealthScorer::default().score(&vault, &cipher);
    assert_eq!(report.score, 70);
    assert!(report.advisory_message.starts_with("Good"));
}

#[test]
fn undecryptable_entries_are_skipped() {
    let cipher = SecretCipher::new(CipherKey::generate());
    let other = SecretCipher::new(CipherKey::generate());

    let mut vault = entries(&cipher, &["a-strong-secret-1"]);
    // Same weak value under a foreign key: neither weak nor reused here.
    vault.push(entry(&other, "weak"));
    vault.push(entry(&other, "weak"));

    let report = HealthScorer::default().score(&vault, &cipher);
    assert_eq!(report.total_entries, 3);
    assert_eq!(report.weak_count, 0);
    assert_eq!(report.reused_count, 0);
    assert_eq!(report.score, 100);
}

#[test]
fn custom_min_length() {
    let cipher = SecretCipher::new(CipherKey::generate());
    let vault = entries(&cipher, &["twelve-chars"]);
    assert_eq!(HealthScorer::new(16).score(&vault, &cipher).weak_count, 1);
    assert_eq!(HealthScorer::new(12).score(&vault, &cipher).weak_count, 0);
}

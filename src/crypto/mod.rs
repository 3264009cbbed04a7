//! Cryptographic primitives for VaultGuard.
//!
//! This module provides:
//! - AES-256-GCM sealing and opening of raw bytes (`encryption`)
//! - The zeroize-on-drop vault key and its fingerprint (`keys`)
//! - The text envelope stored on every vault entry (`cipher`)

pub mod cipher;
pub mod encryption;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{SecretCipher, CipherKey};
pub use cipher::SecretCipher;
pub use encryption::{open, seal};
pub use keys::CipherKey;

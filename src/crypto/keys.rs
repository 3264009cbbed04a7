//! The vault encryption key.
//!
//! A single 32-byte key protects every stored secret.  It is provisioned
//! externally (config file or environment) as base64 and lives in a
//! `CipherKey`, which wipes its memory on drop.
//!
//! The key fingerprint (`key_id`) is the first 4 bytes of SHA-256 over the
//! key, hex-encoded.  It is written into every ciphertext so a later
//! rotation can tell which key sealed which entry.

use base64::engine::general_purpose::{STANDARD as BASE64, URL_SAFE as BASE64_URL};
use base64::Engine;
use rand::RngCore;
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, Zeroizing};

use crate::errors::{Result, VaultGuardError};

/// Length of the key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// Number of fingerprint bytes embedded in ciphertexts.
const KEY_ID_LEN: usize = 4;

/// A 32-byte symmetric key that automatically zeroes its memory when
/// dropped.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct CipherKey {
    bytes: [u8; KEY_LEN],
}

impl CipherKey {
    /// Wrap raw key bytes.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Parse a base64 key (standard or URL-safe alphabet).
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let encoded = encoded.trim();
        if encoded.is_empty() {
            return Err(VaultGuardError::InvalidKey("key is empty".into()));
        }

        let decoded = BASE64
            .decode(encoded)
            .or_else(|_| BASE64_URL.decode(encoded))
            .map(Zeroizing::new)
            .map_err(|e| VaultGuardError::InvalidKey(format!("not valid base64: {e}")))?;

        if decoded.len() != KEY_LEN {
            return Err(VaultGuardError::InvalidKey(format!(
                "expected {KEY_LEN} bytes, got {}",
                decoded.len()
            )));
        }

        let mut bytes = [0u8; KEY_LEN];
        bytes.copy_from_slice(&decoded);
        Ok(Self { bytes })
    }

    /// Generate a fresh random key.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_LEN];
        rand::rng().fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Encode the key as standard base64 (for provisioning).
    pub fn to_base64(&self) -> Zeroizing<String> {
        Zeroizing::new(BASE64.encode(self.bytes))
    }

    /// Short hex fingerprint of the key.
    pub fn key_id(&self) -> String {
        let digest = Sha256::digest(self.bytes);
        hex::encode(&digest[..KEY_ID_LEN])
    }

    /// Access the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

impl std::fmt::Debug for CipherKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CipherKey")
            .field("key_id", &self.key_id())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_roundtrip() {
        let key = CipherKey::generate();
        let encoded = key.to_base64();
        let parsed = CipherKey::from_base64(&encoded).unwrap();
        assert_eq!(parsed.as_bytes(), key.as_bytes());
    }

    #[test]
    fn accepts_url_safe_alphabet() {
        let raw = [0xFBu8; KEY_LEN];
        let encoded = BASE64_URL.encode(raw);
        assert!(encoded.contains('-') || encoded.contains('_'));
        let parsed = CipherKey::from_base64(&encoded).unwrap();
        assert_eq!(parsed.as_bytes(), &raw);
    }

    #[test]
    fn rejects_wrong_length() {
        let encoded = BASE64.encode([1u8; 16]);
        assert!(matches!(
            CipherKey::from_base64(&encoded),
            Err(VaultGuardError::InvalidKey(_))
        ));
    }

    #[test]
    fn rejects_empty_and_garbage() {
        assert!(CipherKey::from_base64("").is_err());
        assert!(CipherKey::from_base64("   ").is_err());
        assert!(CipherKey::from_base64("not base64 at all!").is_err());
    }

    #[test]
    fn key_id_is_stable_and_key_specific() {
        let a = CipherKey::from_bytes([1u8; KEY_LEN]);
        let b = CipherKey::from_bytes([2u8; KEY_LEN]);
        assert_eq!(a.key_id().len(), KEY_ID_LEN * 2);
        assert_eq!(a.key_id(), CipherKey::from_bytes([1u8; KEY_LEN]).key_id());
        assert_ne!(a.key_id(), b.key_id());
    }

    #[test]
    fn debug_does_not_print_key_bytes() {
        let key = CipherKey::from_bytes([0xAAu8; KEY_LEN]);
        let shown = format!("{key:?}");
        assert!(shown.contains(&key.key_id()));
        assert!(!shown.contains("bytes"));
    }
}

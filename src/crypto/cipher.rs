//! The secret cipher: string-in, string-out envelope encryption.
//!
//! Stored ciphertexts look like:
//!
//! ```text
//! v1.<key-id>.<base64(nonce || ciphertext || tag)>
//! ```
//!
//! The `v1.<key-id>` header is passed to AES-GCM as associated data, so
//! changing any byte of the text (header included) fails authentication.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use zeroize::{Zeroize, Zeroizing};

use super::encryption::{open, seal};
use super::keys::CipherKey;
use crate::errors::{Result, VaultGuardError};

/// Envelope format version written by this build.
const FORMAT_VERSION: &str = "v1";

/// Encrypts and decrypts individual secret strings under one key.
///
/// The key is handed in at construction and never looked up elsewhere, so
/// tests can run with ephemeral keys.
#[derive(Debug)]
pub struct SecretCipher {
    key: CipherKey,
    header: String,
}

impl SecretCipher {
    pub fn new(key: CipherKey) -> Self {
        let header = format!("{FORMAT_VERSION}.{}", key.key_id());
        Self { key, header }
    }

    /// Fingerprint of the active key.
    pub fn key_id(&self) -> &str {
        &self.header[FORMAT_VERSION.len() + 1..]
    }

    /// Encrypt `plaintext` with a fresh nonce.
    ///
    /// Encrypting the same value twice yields two different ciphertexts.
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        let sealed = seal(
            self.key.as_bytes(),
            plaintext.as_bytes(),
            self.header.as_bytes(),
        )?;
        Ok(format!("{}.{}", self.header, BASE64.encode(sealed)))
    }

    /// Decrypt a ciphertext produced by `encrypt` under the same key.
    pub fn decrypt(&self, ciphertext: &str) -> Result<Zeroizing<String>> {
        let (header, body) = ciphertext
            .rsplit_once('.')
            .ok_or(VaultGuardError::DecryptionFailed)?;

        // Sealed by another key or another format version.
        if header != self.header {
            return Err(VaultGuardError::DecryptionFailed);
        }

        let sealed = BASE64
            .decode(body)
            .map_err(|_| VaultGuardError::DecryptionFailed)?;
        let plaintext_bytes = open(self.key.as_bytes(), &sealed, header.as_bytes())?;

        String::from_utf8(plaintext_bytes)
            .map(Zeroizing::new)
            .map_err(|e| {
                let mut bad_bytes = e.into_bytes();
                bad_bytes.zeroize();
                VaultGuardError::DecryptionFailed
            })
    }

    /// Return the key fingerprint a ciphertext claims to be sealed with.
    ///
    /// Metadata only: nothing is authenticated until `decrypt` runs.
    pub fn key_id_of(ciphertext: &str) -> Option<&str> {
        let mut parts = ciphertext.splitn(3, '.');
        let version = parts.next()?;
        let key_id = parts.next()?;
        parts.next()?;
        (version == FORMAT_VERSION).then_some(key_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::KEY_LEN;

    fn cipher(fill: u8) -> SecretCipher {
        SecretCipher::new(CipherKey::from_bytes([fill; KEY_LEN]))
    }

    #[test]
    fn ciphertext_carries_version_and_key_id() {
        let c = cipher(7);
        let ct = c.encrypt("correct horse").unwrap();
        assert!(ct.starts_with(&format!("v1.{}.", c.key_id())));
        assert_eq!(SecretCipher::key_id_of(&ct), Some(c.key_id()));
    }

    #[test]
    fn key_id_of_rejects_unknown_layouts() {
        assert_eq!(SecretCipher::key_id_of("garbage"), None);
        assert_eq!(SecretCipher::key_id_of("v9.abcd1234.AAAA"), None);
        assert_eq!(SecretCipher::key_id_of("v1.abcd1234"), None);
    }

    #[test]
    fn empty_plaintext_roundtrips() {
        let c = cipher(3);
        let ct = c.encrypt("").unwrap();
        assert_eq!(c.decrypt(&ct).unwrap().as_str(), "");
    }

    #[test]
    fn missing_separator_is_rejected() {
        let c = cipher(3);
        assert!(matches!(
            c.decrypt("no-separators-here"),
            Err(VaultGuardError::DecryptionFailed)
        ));
    }
}

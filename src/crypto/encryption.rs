//! AES-256-GCM authenticated encryption.
//!
//! Each call to `seal` generates a fresh random 12-byte nonce and
//! prepends it to the ciphertext.  `open` splits the nonce back out
//! before decrypting.  Both take associated data that is authenticated
//! but not encrypted.
//!
//! Layout of the returned byte buffer:
//!   [ 12-byte nonce | ciphertext + 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit, OsRng, Payload};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};

use crate::errors::{Result, VaultGuardError};

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// Encrypt `plaintext` with a 32-byte `key`, binding `aad` to the output.
///
/// Returns the nonce prepended to the ciphertext (nonce || ciphertext).
pub fn seal(key: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| VaultGuardError::EncryptionFailed(format!("invalid key length: {e}")))?;

    // Never reuse a nonce under the same key.
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(
            &nonce,
            Payload {
                msg: plaintext,
                aad,
            },
        )
        .map_err(|e| VaultGuardError::EncryptionFailed(format!("encryption error: {e}")))?;

    let mut output = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    output.extend_from_slice(&nonce);
    output.extend_from_slice(&ciphertext);
    Ok(output)
}

/// Decrypt data that was produced by `seal` with the same `aad`.
///
/// Every failure (short input, wrong key, flipped bit, different `aad`)
/// collapses into `DecryptionFailed`.
pub fn open(key: &[u8], sealed: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
    if sealed.len() < NONCE_LEN + TAG_LEN {
        return Err(VaultGuardError::DecryptionFailed);
    }

    let (nonce_bytes, ciphertext) = sealed.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| VaultGuardError::DecryptionFailed)?;

    cipher
        .decrypt(
            nonce,
            Payload {
                msg: ciphertext,
                aad,
            },
        )
        .map_err(|_| VaultGuardError::DecryptionFailed)
}

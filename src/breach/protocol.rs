//! The range protocol itself, independent of transport.
//!
//! 1. SHA-1 the password and hex-encode it in uppercase (40 chars).
//! 2. Send only the first 5 chars (the prefix) to the corpus.
//! 3. The corpus answers with `SUFFIX:COUNT` lines for every hash that
//!    shares the prefix.
//! 4. Look for our 35-char suffix locally.
//!
//! SHA-1 is what the public corpus is keyed by; it is used here for
//! compatibility, not as a security primitive.

use sha1::{Digest, Sha1};
use zeroize::Zeroizing;

use crate::errors::{Result, VaultGuardError};

/// Number of hex chars revealed to the corpus.
pub const PREFIX_LEN: usize = 5;

/// Uppercase hex SHA-1 of a password, split for the range query.
///
/// The full digest never leaves this value: `Debug` shows the prefix only
/// and the buffer is wiped on drop.
pub struct PasswordHash {
    hex: Zeroizing<String>,
}

impl PasswordHash {
    pub fn of(password: &str) -> Self {
        let digest = Sha1::digest(password.as_bytes());
        Self {
            hex: Zeroizing::new(hex::encode_upper(digest)),
        }
    }

    /// The part sent over the wire.
    pub fn prefix(&self) -> &str {
        &self.hex[..PREFIX_LEN]
    }

    /// The part kept local and matched against the response.
    pub fn suffix(&self) -> &str {
        &self.hex[PREFIX_LEN..]
    }
}

impl std::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHash")
            .field("prefix", &self.prefix())
            .finish_non_exhaustive()
    }
}

/// Scan a range response body for `suffix` and return its count.
///
/// Matching is case-insensitive.  Returns `Ok(0)` when the suffix is not
/// listed and `OracleUnavailable` when a line is not `suffix:count`.
pub fn find_suffix_count(body: &str, suffix: &str) -> Result<u64> {
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (candidate, count) = line
            .split_once(':')
            .ok_or_else(|| VaultGuardError::OracleUnavailable("malformed range line".into()))?;
        let count: u64 = count.trim().parse().map_err(|_| {
            VaultGuardError::OracleUnavailable("malformed occurrence count".into())
        })?;

        if candidate.trim().eq_ignore_ascii_case(suffix) {
            return Ok(count);
        }
    }
    Ok(0)
}

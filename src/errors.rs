use thiserror::Error;

/// All errors that can occur in VaultGuard.
#[derive(Debug, Error)]
pub enum VaultGuardError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Secret is not retrievable: ciphertext is corrupt or was sealed with another key")]
    DecryptionFailed,

    #[error("Invalid encryption key: {0}")]
    InvalidKey(String),

    // --- Vault errors ---
    /// Covers both "no such entry" and "entry belongs to someone else".
    #[error("Vault entry not found")]
    NotFound,

    #[error("Invalid vault entry: {0}")]
    InvalidEntry(String),

    #[error("Vault store error: {0}")]
    StoreError(String),

    // --- Breach oracle errors ---
    /// Never leaves the `breach` module; degraded to a clean result there.
    #[error("Breach oracle unavailable: {0}")]
    OracleUnavailable(String),

    // --- Config errors ---
    #[error("Config error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for VaultGuard results.
pub type Result<T> = std::result::Result<T, VaultGuardError>;

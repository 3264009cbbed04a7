use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::crypto::CipherKey;
use crate::errors::{Result, VaultGuardError};

/// Environment variable holding the base64 vault key.
pub const ENV_ENCRYPTION_KEY: &str = "VAULTGUARD_ENCRYPTION_KEY";

/// Environment variable overriding the breach corpus base URL.
pub const ENV_BREACH_API_URL: &str = "VAULTGUARD_BREACH_API_URL";

/// Environment variable overriding the breach call timeout (seconds).
pub const ENV_BREACH_TIMEOUT_SECS: &str = "VAULTGUARD_BREACH_TIMEOUT_SECS";

/// Engine configuration, loaded from `.vaultguard.toml`.
///
/// Every field except the key has a sensible default, so a deployment
/// only has to provision `VAULTGUARD_ENCRYPTION_KEY`.
#[derive(Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Base64-encoded 32-byte key protecting every stored secret.
    /// Prefer the environment variable over committing it to the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_key: Option<String>,

    /// Base URL of the k-anonymity range API (prefix is appended).
    #[serde(default = "default_breach_api_url")]
    pub breach_api_url: String,

    /// Upper bound for a single breach lookup, in seconds.
    #[serde(default = "default_breach_timeout_secs")]
    pub breach_timeout_secs: u64,

    /// Ask the corpus to pad responses with decoy suffixes.
    #[serde(default = "default_breach_add_padding")]
    pub breach_add_padding: bool,

    /// Secrets shorter than this many characters count as weak.
    #[serde(default = "default_weak_min_length")]
    pub weak_min_length: usize,

    /// Location of the JSON vault store (relative to the project root).
    #[serde(default = "default_store_path")]
    pub store_path: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_breach_api_url() -> String {
    "https://api.pwnedpasswords.com/range".to_string()
}

fn default_breach_timeout_secs() -> u64 {
    10
}

fn default_breach_add_padding() -> bool {
    true
}

fn default_weak_min_length() -> usize {
    10
}

fn default_store_path() -> String {
    ".vaultguard/vault.json".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            encryption_key: None,
            breach_api_url: default_breach_api_url(),
            breach_timeout_secs: default_breach_timeout_secs(),
            breach_add_padding: default_breach_add_padding(),
            weak_min_length: default_weak_min_length(),
            store_path: default_store_path(),
        }
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field(
                "encryption_key",
                &self.encryption_key.as_ref().map(|_| "<redacted>"),
            )
            .field("breach_api_url", &self.breach_api_url)
            .field("breach_timeout_secs", &self.breach_timeout_secs)
            .field("breach_add_padding", &self.breach_add_padding)
            .field("weak_min_length", &self.weak_min_length)
            .field("store_path", &self.store_path)
            .finish()
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    pub const FILE_NAME: &'static str = ".vaultguard.toml";

    /// Load settings from `<project_dir>/.vaultguard.toml`, then apply
    /// `VAULTGUARD_*` environment overrides and validate.
    ///
    /// If the file does not exist, defaults are used.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let mut settings = Self::load_file(project_dir)?;
        settings.apply_overrides(|name| std::env::var(name).ok());
        settings.validate()?;
        Ok(settings)
    }

    /// Load only the config file, without environment overrides.
    pub fn load_file(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        toml::from_str(&contents).map_err(|e| {
            VaultGuardError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })
    }

    /// Overlay values from `lookup` (normally the process environment).
    ///
    /// Empty values are ignored. An unparsable timeout becomes 0, which
    /// `validate` rejects.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = get(ENV_ENCRYPTION_KEY) {
            self.encryption_key = Some(key);
        }
        if let Some(url) = get(ENV_BREACH_API_URL) {
            self.breach_api_url = url;
        }
        if let Some(secs) = get(ENV_BREACH_TIMEOUT_SECS) {
            self.breach_timeout_secs = secs.trim().parse().unwrap_or(0);
        }
    }

    /// Reject settings the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        if !self.breach_api_url.starts_with("https://") {
            return Err(VaultGuardError::ConfigError(format!(
                "breach_api_url must use https:// (got '{}')",
                self.breach_api_url
            )));
        }
        if self.breach_timeout_secs == 0 {
            return Err(VaultGuardError::ConfigError(
                "breach_timeout_secs must be a positive number of seconds".into(),
            ));
        }
        if self.weak_min_length == 0 {
            return Err(VaultGuardError::ConfigError(
                "weak_min_length must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Parse the configured vault key.
    pub fn cipher_key(&self) -> Result<CipherKey> {
        let encoded = self.encryption_key.as_deref().ok_or_else(|| {
            VaultGuardError::ConfigError(format!(
                "no encryption key configured; set {ENV_ENCRYPTION_KEY} (generate one with `vaultguard keygen`)"
            ))
        })?;
        CipherKey::from_base64(encoded)
    }

    /// Timeout for a single breach lookup.
    pub fn breach_timeout(&self) -> Duration {
        Duration::from_secs(self.breach_timeout_secs)
    }

    /// Full path to the JSON vault store.
    ///
    /// Example: `project_dir/.vaultguard/vault.json`
    pub fn store_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.store_path)
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn default_settings_are_sensible() {
        let s = Settings::default();
        assert!(s.encryption_key.is_none());
        assert_eq!(s.breach_api_url, "https://api.pwnedpasswords.com/range");
        assert_eq!(s.breach_timeout_secs, 10);
        assert!(s.breach_add_padding);
        assert_eq!(s.weak_min_length, 10);
        assert_eq!(s.store_path, ".vaultguard/vault.json");
        assert!(s.validate().is_ok());
    }

    #[test]
    fn load_file_returns_defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load_file(tmp.path()).unwrap();
        assert_eq!(settings.breach_timeout_secs, 10);
    }

    #[test]
    fn load_file_parses_toml_file() {
        let tmp = TempDir::new().unwrap();
        let config = r#"
breach_api_url = "https://corpus.internal/range"
breach_timeout_secs = 3
breach_add_padding = false
weak_min_length = 12
store_path = "data/entries.json"
"#;
        fs::write(tmp.path().join(".vaultguard.toml"), config).unwrap();

        let settings = Settings::load_file(tmp.path()).unwrap();
        assert_eq!(settings.breach_api_url, "https://corpus.internal/range");
        assert_eq!(settings.breach_timeout_secs, 3);
        assert!(!settings.breach_add_padding);
        assert_eq!(settings.weak_min_length, 12);
        assert_eq!(
            settings.store_path(tmp.path()),
            tmp.path().join("data/entries.json")
        );
    }

    #[test]
    fn load_file_errors_on_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".vaultguard.toml"), "not valid {{toml").unwrap();
        assert!(Settings::load_file(tmp.path()).is_err());
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut s = Settings::default();
        s.apply_overrides(env(&[
            (ENV_ENCRYPTION_KEY, "a2V5"),
            (ENV_BREACH_API_URL, "https://mirror.example/range"),
            (ENV_BREACH_TIMEOUT_SECS, "4"),
        ]));
        assert_eq!(s.encryption_key.as_deref(), Some("a2V5"));
        assert_eq!(s.breach_api_url, "https://mirror.example/range");
        assert_eq!(s.breach_timeout(), Duration::from_secs(4));
    }

    #[test]
    fn empty_overrides_are_ignored() {
        let mut s = Settings::default();
        s.apply_overrides(env(&[(ENV_BREACH_API_URL, "  ")]));
        assert_eq!(s.breach_api_url, default_breach_api_url());
    }

    #[test]
    fn garbage_timeout_fails_validation() {
        let mut s = Settings::default();
        s.apply_overrides(env(&[(ENV_BREACH_TIMEOUT_SECS, "soon")]));
        assert!(s.validate().is_err());
    }

    #[test]
    fn plain_http_corpus_is_rejected() {
        let s = Settings {
            breach_api_url: "http://api.pwnedpasswords.com/range".into(),
            ..Settings::default()
        };
        assert!(matches!(s.validate(), Err(VaultGuardError::ConfigError(_))));
    }

    #[test]
    fn zero_weak_threshold_is_rejected() {
        let s = Settings {
            weak_min_length: 0,
            ..Settings::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn cipher_key_requires_configuration() {
        let s = Settings::default();
        assert!(matches!(s.cipher_key(), Err(VaultGuardError::ConfigError(_))));

        let key = CipherKey::generate();
        let s = Settings {
            encryption_key: Some(key.to_base64().as_str().to_owned()),
            ..Settings::default()
        };
        assert_eq!(s.cipher_key().unwrap().key_id(), key.key_id());
    }

    #[test]
    fn debug_redacts_key() {
        let s = Settings {
            encryption_key: Some("c2VjcmV0LWtleS1tYXRlcmlhbA==".into()),
            ..Settings::default()
        };
        let shown = format!("{s:?}");
        assert!(shown.contains("<redacted>"));
        assert!(!shown.contains("c2VjcmV0"));
    }
}

//! Breach oracle client.
//!
//! `BreachOracle::check` is advisory: any transport or parse failure is
//! logged (prefix only) and reported as "not breached" so that a flaky
//! corpus never blocks storing or revealing secrets.  No retries.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, warn};
use ureq::Agent;

use super::protocol::{find_suffix_count, PasswordHash};
use crate::config::Settings;
use crate::errors::{Result, VaultGuardError};

/// Fetches the range body for one 5-char hash prefix.
pub trait RangeSource: Send + Sync {
    fn fetch_range(&self, prefix: &str) -> Result<String>;
}

impl<F> RangeSource for F
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    fn fetch_range(&self, prefix: &str) -> Result<String> {
        self(prefix)
    }
}

/// `GET {base}/{prefix}` over HTTPS with a per-call timeout.
pub struct HttpRangeSource {
    agent: Agent,
    base_url: String,
    add_padding: bool,
}

impl HttpRangeSource {
    pub fn new(base_url: &str, timeout: Duration, add_padding: bool) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        Self {
            agent: config.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            add_padding,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            &settings.breach_api_url,
            settings.breach_timeout(),
            settings.breach_add_padding,
        )
    }

    /// The URL queried for `prefix`.
    pub fn range_url(&self, prefix: &str) -> String {
        format!("{}/{prefix}", self.base_url)
    }
}

impl RangeSource for HttpRangeSource {
    fn fetch_range(&self, prefix: &str) -> Result<String> {
        let mut request = self.agent.get(&self.range_url(prefix)).header(
            "User-Agent",
            &format!("vaultguard/{}", env!("CARGO_PKG_VERSION")),
        );
        if self.add_padding {
            request = request.header("Add-Padding", "true");
        }

        let mut response = request.call().map_err(|e| {
            VaultGuardError::OracleUnavailable(match e {
                ureq::Error::Timeout(_) => "request timed out".to_string(),
                ureq::Error::StatusCode(code) => format!("corpus answered HTTP {code}"),
                other => other.to_string(),
            })
        })?;

        response
            .body_mut()
            .read_to_string()
            .map_err(|e| VaultGuardError::OracleUnavailable(format!("reading body: {e}")))
    }
}

/// Outcome of a breach check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreachCheckResult {
    pub is_breached: bool,
    pub occurrence_count: u64,
}

impl BreachCheckResult {
    pub fn from_count(occurrence_count: u64) -> Self {
        Self {
            is_breached: occurrence_count > 0,
            occurrence_count,
        }
    }

    /// Not found, or the corpus could not be asked.
    pub fn clean() -> Self {
        Self::from_count(0)
    }

    /// A short advisory for display.
    pub fn message(&self) -> String {
        if self.is_breached {
            format!(
                "This password has appeared in {} known data breaches. Do not use it!",
                self.occurrence_count
            )
        } else {
            "This password was not found in known data breaches.".to_string()
        }
    }
}

/// Checks passwords against the breach corpus.
pub struct BreachOracle {
    source: Box<dyn RangeSource>,
}

impl BreachOracle {
    pub fn new<R: RangeSource + 'static>(source: R) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(HttpRangeSource::from_settings(settings))
    }

    /// How often `password` appears in the corpus; 0 if absent or on failure.
    pub fn check(&self, password: &str) -> BreachCheckResult {
        let hash = PasswordHash::of(password);
        match self.lookup(&hash) {
            Ok(count) => {
                debug!(prefix = hash.prefix(), breached = count > 0, "breach lookup done");
                BreachCheckResult::from_count(count)
            }
            Err(e) => {
                warn!(prefix = hash.prefix(), error = %e, "breach lookup failed; reporting not breached");
                BreachCheckResult::clean()
            }
        }
    }

    fn lookup(&self, hash: &PasswordHash) -> Result<u64> {
        let body = self.source.fetch_range(hash.prefix())?;
        find_suffix_count(&body, hash.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_url_trims_trailing_slash() {
        let source =
            HttpRangeSource::new("https://corpus.example/range/", Duration::from_secs(1), false);
        assert_eq!(
            source.range_url("5BAA6"),
            "https://corpus.example/range/5BAA6"
        );
    }

    #[test]
    fn closure_sources_work() {
        let oracle = BreachOracle::new(|prefix: &str| -> Result<String> {
            assert_eq!(prefix, "5BAA6");
            Ok("1E4C9B93F3F0682250B6CF8331B7EE68FD8:42\n".to_string())
        });
        assert_eq!(oracle.check("password"), BreachCheckResult::from_count(42));
    }

    #[test]
    fn source_errors_degrade_to_clean() {
        let oracle = BreachOracle::new(|_: &str| -> Result<String> {
            Err(VaultGuardError::OracleUnavailable("down".into()))
        });
        let result = oracle.check("password");
        assert!(!result.is_breached);
        assert_eq!(result.occurrence_count, 0);
    }

    #[test]
    fn messages_reflect_outcome() {
        assert!(BreachCheckResult::from_count(3).message().contains('3'));
        assert!(BreachCheckResult::clean().message().contains("not found"));
    }
}

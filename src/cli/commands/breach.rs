//! `vaultguard breach` — check a password against the breach corpus.
//!
//! Only the first 5 hex chars of the password's SHA-1 leave the machine.

use crate::cli::output;
use crate::cli::{load_settings, read_secret};
use crate::breach::BreachOracle;
use crate::errors::Result;

/// Execute the `breach` command.
pub fn execute(password: Option<&str>) -> Result<()> {
    // No key needed: build the oracle straight from settings.
    let settings = load_settings()?;
    let oracle = BreachOracle::from_settings(&settings);

    let value = read_secret("Password to check", password)?;
    let result = oracle.check(&value);

    if result.is_breached {
        output::error(&result.message());
    } else {
        output::success(&result.message());
    }
    Ok(())
}

//! `vaultguard strength` — ask the strength model about a password.
//!
//! This build ships no model, so the verdict is "unavailable" unless an
//! embedding application wires an oracle into the engine.

use crate::cli::output;
use crate::cli::{open_engine, read_secret, Cli};
use crate::errors::Result;
use crate::strength::StrengthBand;

/// Execute the `strength` command.
pub fn execute(cli: &Cli, password: Option<&str>) -> Result<()> {
    let engine = open_engine(cli)?;
    let value = read_secret("Password to rate", password)?;
    let verdict = engine.predict_strength(&value);

    match verdict.band {
        StrengthBand::Strong => output::success(&verdict.message),
        StrengthBand::Moderate | StrengthBand::Unavailable => output::warning(&verdict.message),
        StrengthBand::Weak => output::error(&verdict.message),
    }
    Ok(())
}

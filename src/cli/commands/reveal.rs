//! `vaultguard reveal` — decrypt and print one secret.

use crate::cli::{open_engine, parse_entry_id, Cli};
use crate::errors::Result;

/// Execute the `reveal` command.
pub fn execute(cli: &Cli, id: &str) -> Result<()> {
    let engine = open_engine(cli)?;
    let id = parse_entry_id(id)?;

    let value = engine.reveal_secret(&id, &cli.owner)?;

    println!("{}", value.as_str());
    Ok(())
}

//! `vaultguard store` — encrypt and save a new credential.

use crate::cli::output;
use crate::cli::{open_engine, read_secret, Cli};
use crate::errors::Result;
use crate::vault::NewEntry;

/// Execute the `store` command.
pub fn execute(
    cli: &Cli,
    service: &str,
    username: &str,
    secret: Option<&str>,
    category: Option<&str>,
) -> Result<()> {
    let engine = open_engine(cli)?;
    let value = read_secret(&format!("Secret for {service}"), secret)?;

    let mut new = NewEntry::new(service, username, &value);
    if let Some(c) = category {
        new = new.with_category(c);
    }

    let (entry, _echo) = engine.store_secret(&cli.owner, new)?;
    let id = entry.id.to_string();

    output::success(&format!("Stored {service} credential ({id})"));
    if engine.scorer().is_weak(&value) {
        output::warning("This secret is shorter than the weak-password threshold.");
    }
    output::tip("Check it against known breaches: vaultguard breach");

    Ok(())
}

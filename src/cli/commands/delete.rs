//! `vaultguard delete` — remove a credential.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{open_engine, parse_entry_id, Cli};
use crate::errors::{Result, VaultGuardError};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, id: &str, force: bool) -> Result<()> {
    let engine = open_engine(cli)?;
    let id = parse_entry_id(id)?;

    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete credential {id}?"))
            .default(false)
            .interact()
            .map_err(|e| VaultGuardError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    if !engine.delete_secret(&id, &cli.owner)? {
        return Err(VaultGuardError::NotFound);
    }

    output::success(&format!("Deleted credential {id}"));
    Ok(())
}

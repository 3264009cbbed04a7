//! `vaultguard list` — display stored credentials in a table.

use crate::cli::output;
use crate::cli::{open_engine, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let engine = open_engine(cli)?;
    let entries = engine.list_entries(&cli.owner)?;

    output::info(&format!("{}: {} credential(s)", cli.owner, entries.len()));
    output::print_entries_table(&entries);

    Ok(())
}

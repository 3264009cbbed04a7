//! `vaultguard score` — vault health report.

use crate::cli::output;
use crate::cli::{open_engine, Cli};
use crate::errors::{Result, VaultGuardError};

/// Execute the `score` command.
pub fn execute(cli: &Cli, json: bool) -> Result<()> {
    let engine = open_engine(cli)?;
    let report = engine.score_vault(&cli.owner)?;

    if json {
        let body = serde_json::to_string_pretty(&report)
            .map_err(|e| VaultGuardError::SerializationError(format!("report: {e}")))?;
        println!("{body}");
    } else {
        output::print_health_report(&report);
    }
    Ok(())
}

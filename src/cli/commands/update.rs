//! `vaultguard update` — change fields of a credential, optionally
//! rotating its secret.

use crate::cli::output;
use crate::cli::{open_engine, parse_entry_id, read_secret, Cli};
use crate::errors::{Result, VaultGuardError};
use crate::vault::EntryUpdate;

/// Field changes requested on the command line.
pub struct UpdateArgs<'a> {
    pub service: Option<&'a str>,
    pub username: Option<&'a str>,
    pub category: Option<&'a str>,
    pub clear_category: bool,
    pub rotate: bool,
}

/// Execute the `update` command.
pub fn execute(cli: &Cli, id: &str, args: &UpdateArgs<'_>) -> Result<()> {
    let engine = open_engine(cli)?;
    let id = parse_entry_id(id)?;

    let mut update = EntryUpdate::new();
    if let Some(s) = args.service {
        update = update.service(s);
    }
    if let Some(u) = args.username {
        update = update.username(u);
    }
    if let Some(c) = args.category {
        update = update.category(c);
    }
    if args.clear_category {
        update = update.clear_category();
    }
    if args.rotate {
        let value = read_secret("New secret", None)?;
        update = update.secret(&value);
    }

    if update.is_empty() {
        return Err(VaultGuardError::CommandFailed(
            "nothing to update: pass --service, --username, --category, --clear-category or --rotate"
                .into(),
        ));
    }

    let (entry, rotated) = engine.update_secret(&id, &cli.owner, update)?;

    output::success(&format!("Updated {} credential ({})", entry.service, entry.id));
    if rotated.is_some() {
        output::info("Secret rotated and re-encrypted.");
    }
    Ok(())
}

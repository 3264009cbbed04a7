//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use uuid::Uuid;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::engine::VaultSecurityEngine;
use crate::errors::{Result, VaultGuardError};
use crate::vault::FileVaultStore;

/// VaultGuard CLI: local harness for the vault security engine.
#[derive(Parser)]
#[command(
    name = "vaultguard",
    about = "Password vault security engine: encrypted storage, breach checks, health scoring",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Owner whose vault to operate on
    #[arg(short, long, env = "VAULTGUARD_OWNER", default_value = "local", global = true)]
    pub owner: String,

    /// Vault file (default: from .vaultguard.toml, else .vaultguard/vault.json)
    #[arg(long, global = true)]
    pub store: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Generate a new base64 encryption key
    Keygen,

    /// Store a new credential
    Store {
        /// Service name (e.g. Gmail)
        service: String,
        /// Username on that service
        username: String,
        /// Secret value (omit for interactive prompt)
        secret: Option<String>,
        /// Optional category label
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List stored credentials (never shows secrets)
    List,

    /// Decrypt and print one secret
    Reveal {
        /// Entry id
        id: String,
    },

    /// Change fields of a credential
    Update {
        /// Entry id
        id: String,
        #[arg(long)]
        service: Option<String>,
        #[arg(long)]
        username: Option<String>,
        #[arg(long, conflicts_with = "clear_category")]
        category: Option<String>,
        /// Remove the category label
        #[arg(long)]
        clear_category: bool,
        /// Prompt for a new secret value
        #[arg(long)]
        rotate: bool,
    },

    /// Delete a credential
    Delete {
        /// Entry id
        id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Check a password against the breach corpus
    Breach {
        /// Password to check (omit for interactive prompt)
        password: Option<String>,
    },

    /// Score the health of the vault
    Score {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask the strength model about a password
    Strength {
        /// Password to rate (omit for interactive prompt)
        password: Option<String>,
    },

    /// Generate a random password
    Generate {
        /// Length (8 to 64)
        #[arg(short, long, default_value = "16")]
        length: usize,
        #[arg(long)]
        no_uppercase: bool,
        #[arg(long)]
        no_digits: bool,
        #[arg(long)]
        no_special: bool,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Load settings from the current directory plus `VAULTGUARD_*` env vars.
pub fn load_settings() -> Result<Settings> {
    let cwd = std::env::current_dir()?;
    Settings::load(&cwd)
}

/// Path of the vault file for this invocation.
pub fn store_path(cli: &Cli, settings: &Settings) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(match &cli.store {
        Some(path) => cwd.join(path),
        None => settings.store_path(&cwd),
    })
}

/// Build an engine over the JSON file store.
pub fn open_engine(cli: &Cli) -> Result<VaultSecurityEngine<FileVaultStore>> {
    let settings = load_settings()?;
    let store = FileVaultStore::new(&store_path(cli, &settings)?);
    VaultSecurityEngine::from_settings(&settings, store)
}

/// Parse an entry id. Malformed ids are reported like unknown ones.
pub fn parse_entry_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id.trim()).map_err(|_| VaultGuardError::NotFound)
}

/// Get a secret value, trying in order:
/// 1. The inline value (with a shell-history warning)
/// 2. Piped stdin
/// 3. Interactive hidden prompt
pub fn read_secret(prompt: &str, inline: Option<&str>) -> Result<Zeroizing<String>> {
    if let Some(v) = inline {
        output::warning("Value provided on command line; it may appear in shell history.");
        return Ok(Zeroizing::new(v.to_string()));
    }

    if !io::stdin().is_terminal() {
        let mut buf = Zeroizing::new(String::new());
        io::stdin().read_to_string(&mut buf)?;
        let trimmed = buf.trim_end_matches(['\r', '\n']);
        if trimmed.is_empty() {
            return Err(VaultGuardError::CommandFailed(
                "no value on stdin".into(),
            ));
        }
        return Ok(Zeroizing::new(trimmed.to_string()));
    }

    let value = dialoguer::Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| VaultGuardError::CommandFailed(format!("input prompt: {e}")))?;
    Ok(Zeroizing::new(value))
}

//! `vaultguard keygen` — print a fresh base64 encryption key.

use crate::cli::output;
use crate::config::settings::ENV_ENCRYPTION_KEY;
use crate::crypto::CipherKey;
use crate::errors::Result;

/// Execute the `keygen` command.
pub fn execute() -> Result<()> {
    let key = CipherKey::generate();

    // Key on stdout, guidance on stderr, so the output can be captured.
    println!("{}", key.to_base64().as_str());
    eprintln!("key id {}", key.key_id());
    output::warning(&format!(
        "Store this key somewhere safe and export it as {ENV_ENCRYPTION_KEY}. Losing it makes every stored secret unrecoverable."
    ));

    Ok(())
}

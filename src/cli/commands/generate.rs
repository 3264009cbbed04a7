//! `vaultguard generate` — print a random password.

use crate::errors::Result;
use crate::generator::{self, GeneratorOptions};

/// Execute the `generate` command.
pub fn execute(length: usize, uppercase: bool, digits: bool, special: bool) -> Result<()> {
    let generated = generator::generate(&GeneratorOptions {
        length,
        uppercase,
        digits,
        special,
    });

    println!("{}", generated.password.as_str());
    eprintln!(
        "length {}, complexity {}",
        generated.length, generated.complexity
    );
    Ok(())
}

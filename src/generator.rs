//! Random password generation.
//!
//! Characters are drawn uniformly from the selected classes using the
//! thread-local CSPRNG.  Lowercase letters are always included.

use rand::Rng;
use serde::Serialize;
use zeroize::Zeroizing;

/// Shortest password we will generate.
pub const MIN_LENGTH: usize = 8;

/// Longest password we will generate.
pub const MAX_LENGTH: usize = 64;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

/// Symbols accepted by nearly every site.
pub const SPECIAL: &str = "!@#$%^&*()-_=+";

/// Which character classes to draw from, and how many characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub length: usize,
    pub uppercase: bool,
    pub digits: bool,
    pub special: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            digits: true,
            special: true,
        }
    }
}

/// Rough label for how hard a generated password is to guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Complexity::Low => "Low",
            Complexity::Medium => "Medium",
            Complexity::High => "High",
        };
        f.write_str(label)
    }
}

/// A freshly generated password.
pub struct GeneratedPassword {
    pub password: Zeroizing<String>,
    pub length: usize,
    pub complexity: Complexity,
}

impl std::fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratedPassword")
            .field("length", &self.length)
            .field("complexity", &self.complexity)
            .finish_non_exhaustive()
    }
}

/// Generate a password. The requested length is clamped into
/// `MIN_LENGTH..=MAX_LENGTH`.
pub fn generate(options: &GeneratorOptions) -> GeneratedPassword {
    let length = options.length.clamp(MIN_LENGTH, MAX_LENGTH);

    let mut alphabet: Vec<char> = LOWERCASE.chars().collect();
    if options.uppercase {
        alphabet.extend(UPPERCASE.chars());
    }
    if options.digits {
        alphabet.extend(DIGITS.chars());
    }
    if options.special {
        alphabet.extend(SPECIAL.chars());
    }

    let mut rng = rand::rng();
    let password: String = (0..length)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect();

    GeneratedPassword {
        password: Zeroizing::new(password),
        length,
        complexity: complexity_of(length, options),
    }
}

fn complexity_of(length: usize, options: &GeneratorOptions) -> Complexity {
    if length < 10 || (!options.digits && !options.special) {
        Complexity::Low
    } else if length < 12 {
        Complexity::Medium
    } else {
        Complexity::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_give_sixteen_high_complexity_chars() {
        let g = generate(&GeneratorOptions::default());
        assert_eq!(g.password.chars().count(), 16);
        assert_eq!(g.length, 16);
        assert_eq!(g.complexity, Complexity::High);
    }

    #[test]
    fn length_is_clamped() {
        let short = generate(&GeneratorOptions {
            length: 3,
            ..GeneratorOptions::default()
        });
        assert_eq!(short.password.len(), MIN_LENGTH);

        let long = generate(&GeneratorOptions {
            length: 500,
            ..GeneratorOptions::default()
        });
        assert_eq!(long.password.len(), MAX_LENGTH);
    }

    #[test]
    fn lowercase_only_when_everything_disabled() {
        let g = generate(&GeneratorOptions {
            length: 40,
            uppercase: false,
            digits: false,
            special: false,
        });
        assert!(g.password.chars().all(|c| c.is_ascii_lowercase()));
        assert_eq!(g.complexity, Complexity::Low);
    }

    #[test]
    fn disabled_classes_never_appear() {
        let g = generate(&GeneratorOptions {
            length: 64,
            uppercase: true,
            digits: true,
            special: false,
        });
        assert!(!g.password.chars().any(|c| SPECIAL.contains(c)));
    }

    #[test]
    fn complexity_labels() {
        let opts = GeneratorOptions::default();
        assert_eq!(complexity_of(8, &opts), Complexity::Low);
        assert_eq!(complexity_of(10, &opts), Complexity::Medium);
        assert_eq!(complexity_of(11, &opts), Complexity::Medium);
        assert_eq!(complexity_of(12, &opts), Complexity::High);

        let letters_only = GeneratorOptions {
            digits: false,
            special: false,
            ..opts
        };
        assert_eq!(complexity_of(30, &letters_only), Complexity::Low);
    }

    #[test]
    fn consecutive_passwords_differ() {
        let opts = GeneratorOptions::default();
        assert_ne!(*generate(&opts).password, *generate(&opts).password);
    }
}

// ============================
// crates/backend-lib/src/policy/rules.rs
// ============================
//! Individual password rules.

use super::CommonPasswords;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Minimum password length, in UTF-16 code units
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length, in UTF-16 code units
pub const MAX_PASSWORD_LENGTH: usize = 64;

/// Characters accepted by the special-character rule
pub const SPECIAL_CHARACTERS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

static SEQUENTIAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)123456|abcdef|qwerty").unwrap());

/// A single password rule: a predicate plus the message reported when it is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    MinLength,
    MaxLength,
    HasLower,
    HasUpper,
    HasDigit,
    HasSpecial,
    NotCommon,
    NotRepeatedChar,
    NoSequentialPattern,
}

impl Rule {
    /// Every rule, in the order violations are reported.
    pub const ALL: [Rule; 9] = [
        Rule::MinLength,
        Rule::MaxLength,
        Rule::HasLower,
        Rule::HasUpper,
        Rule::HasDigit,
        Rule::HasSpecial,
        Rule::NotCommon,
        Rule::NotRepeatedChar,
        Rule::NoSequentialPattern,
    ];

    /// Message shown to the user when this rule is violated
    pub fn message(self) -> &'static str {
        match self {
            Rule::MinLength => "Password must be at least 8 characters long",
            Rule::MaxLength => "Password must not exceed 64 characters",
            Rule::HasLower => "Password must contain at least one lowercase letter",
            Rule::HasUpper => "Password must contain at least one uppercase letter",
            Rule::HasDigit => "Password must contain at least one digit",
            Rule::HasSpecial => "Password must contain at least one special character",
            Rule::NotCommon => "Password is too common and not allowed",
            Rule::NotRepeatedChar => "Password cannot be all the same character",
            Rule::NoSequentialPattern => "Password cannot contain common sequential patterns",
        }
    }

    /// Returns `true` when `password` breaks this rule.
    pub fn is_violated_by(self, password: &str, common: &CommonPasswords) -> bool {
        match self {
            Rule::MinLength => utf16_len(password) < MIN_PASSWORD_LENGTH,
            Rule::MaxLength => utf16_len(password) > MAX_PASSWORD_LENGTH,
            Rule::HasLower => !password.chars().any(|c| c.is_ascii_lowercase()),
            Rule::HasUpper => !password.chars().any(|c| c.is_ascii_uppercase()),
            Rule::HasDigit => !password.chars().any(|c| c.is_ascii_digit()),
            Rule::HasSpecial => !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
            Rule::NotCommon => common.contains(password),
            Rule::NotRepeatedChar => is_single_repeated_char(password),
            Rule::NoSequentialPattern => SEQUENTIAL_REGEX.is_match(password),
        }
    }
}

/// Length as browsers and form clients measure it. Astral characters count twice.
fn utf16_len(password: &str) -> usize {
    password.encode_utf16().count()
}

/// Two or more identical UTF-16 code units and nothing else.
///
/// A surrogate pair never repeats its first unit, so runs of astral
/// characters are not flagged. Line breaks never count either.
fn is_single_repeated_char(password: &str) -> bool {
    let mut units = password.encode_utf16();
    match units.next() {
        Some(first) if !is_line_break(first) => {
            let mut rest = units.peekable();
            rest.peek().is_some() && rest.all(|u| u == first)
        },
        _ => false,
    }
}

fn is_line_break(unit: u16) -> bool {
    matches!(unit, 0x000A | 0x000D | 0x2028 | 0x2029)
}

// ==============================
// tests/unit/policy_tests.rs
// ==============================
//! Password policy behaviour through the public API
use passgate_lib::policy::{validate, CommonPasswords, LoginOutcome, Rule};
use proptest::prelude::*;

fn no_blocklist() -> CommonPasswords {
    CommonPasswords::empty()
}

#[test]
fn test_reject_short_password() {
    let result = validate("Test1!", &no_blocklist());
    assert!(!result.is_valid);
    assert!(result
        .errors
        .contains(&"Password must be at least 8 characters long"));
    assert!(!result.errors.contains(&"Password must not exceed 64 characters"));
}

#[test]
fn test_reject_without_lowercase() {
    let result = validate("TEST1234!", &no_blocklist());
    assert!(!result.is_valid);
    assert_eq!(
        result.errors,
        vec!["Password must contain at least one lowercase letter"]
    );
}

#[test]
fn test_reject_without_uppercase() {
    let result = validate("test1234!", &no_blocklist());
    assert!(result
        .errors
        .contains(&"Password must contain at least one uppercase letter"));
}

#[test]
fn test_reject_without_digit() {
    let result = validate("TestTest!", &no_blocklist());
    assert!(result.errors.contains(&"Password must contain at least one digit"));
}

#[test]
fn test_reject_without_special_character() {
    let result = validate("TestTest1", &no_blocklist());
    assert!(result
        .errors
        .contains(&"Password must contain at least one special character"));
}

#[test]
fn test_accept_valid_password() {
    let result = validate("SecurePass89!", &no_blocklist());
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
}

#[test]
fn test_reject_sequential_patterns() {
    let result = validate("123456Aa!", &no_blocklist());
    assert!(!result.is_valid);
    assert!(result
        .errors
        .contains(&"Password cannot contain common sequential patterns"));
}

#[test]
fn test_reject_overlong_password() {
    let password = format!("Aa1!{}", "x".repeat(61));
    let result = validate(&password, &no_blocklist());
    assert_eq!(result.errors, vec![Rule::MaxLength.message()]);
}

#[test]
fn test_astral_characters_count_twice_toward_length() {
    // Six characters but eight UTF-16 units, so long enough
    let result = validate("Aa1!😀😀", &no_blocklist());
    assert!(result.is_valid, "unexpected errors: {:?}", result.errors);

    let result = validate("😀😀", &no_blocklist());
    assert!(!result
        .errors
        .contains(&"Password cannot be all the same character"));
}

#[test]
fn test_reject_common_password_even_if_strong() {
    let common = CommonPasswords::from_list("password\nWelcome123!\n");
    let result = validate("wELCOME123!", &common);
    assert_eq!(result.errors, vec!["Password is too common and not allowed"]);
}

#[test]
fn test_repeated_character_password() {
    let result = validate("aaaaaaaa", &no_blocklist());
    assert!(result
        .errors
        .contains(&"Password cannot be all the same character"));
}

#[test]
fn test_empty_password_is_missing_not_rejected() {
    assert_eq!(
        LoginOutcome::evaluate(Some(""), &no_blocklist()),
        LoginOutcome::Missing
    );
}

#[test]
fn test_result_serializes() {
    let result = validate("short", &no_blocklist());
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["is_valid"], false);
    assert_eq!(json["errors"][0], "Password must be at least 8 characters long");
}

proptest! {
    /// Adding one character of a missing class removes that class's message.
    /// The generator avoids vowels so no sequential pattern can form.
    #[test]
    fn prop_adding_missing_class_clears_message(
        base in "[b-df-hj-np-tv-z]{4}[B-DF-HJ-NP-TV-Z]{2}[2-57-9]{1}[!@#]{1}",
        which in 0usize..4,
    ) {
        let (stripped, extra, rule): (String, char, Rule) = match which {
            0 => (base.chars().filter(|c| !c.is_ascii_lowercase()).collect(), 'k', Rule::HasLower),
            1 => (base.chars().filter(|c| !c.is_ascii_uppercase()).collect(), 'K', Rule::HasUpper),
            2 => (base.chars().filter(|c| !c.is_ascii_digit()).collect(), '8', Rule::HasDigit),
            _ => (base.chars().filter(|c| c.is_ascii_alphanumeric()).collect(), '%', Rule::HasSpecial),
        };
        // Pad back over the minimum length without touching any class
        let stripped = format!("{stripped}{}", "~".repeat(8));

        let before = validate(&stripped, &no_blocklist());
        prop_assert!(before.errors.contains(&rule.message()));

        let after = validate(&format!("{stripped}{extra}"), &no_blocklist());
        prop_assert!(!after.errors.contains(&rule.message()));
    }
}

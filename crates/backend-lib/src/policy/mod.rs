// ============================
// crates/backend-lib/src/policy/mod.rs
// ============================
//! Password policy evaluation.
//!
//! [`validate`] runs every [`Rule`] against a candidate password and collects
//! the messages of the ones it breaks. Rules never short-circuit, so a weak
//! password reports every problem at once, always in [`Rule::ALL`] order.

mod common_passwords;
mod rules;

pub use common_passwords::CommonPasswords;
pub use rules::{Rule, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH, SPECIAL_CHARACTERS};

use serde::Serialize;

/// Verdict for a single password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// `true` iff `errors` is empty
    pub is_valid: bool,
    /// One message per violated rule, in rule order
    pub errors: Vec<&'static str>,
}

impl ValidationResult {
    fn from_violations(violations: impl IntoIterator<Item = Rule>) -> Self {
        let errors: Vec<&'static str> = violations.into_iter().map(Rule::message).collect();
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Check `password` against every rule.
pub fn validate(password: &str, common: &CommonPasswords) -> ValidationResult {
    ValidationResult::from_violations(violations(password, common))
}

/// Rules broken by `password`, in rule order.
pub fn violations<'a>(
    password: &'a str,
    common: &'a CommonPasswords,
) -> impl Iterator<Item = Rule> + 'a {
    Rule::ALL
        .into_iter()
        .filter(move |rule| rule.is_violated_by(password, common))
}

/// What the login boundary should render for a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// No password, or an empty one, was submitted
    Missing,
    /// The password broke at least one rule
    Rejected(ValidationResult),
    /// The password satisfied every rule
    Accepted,
}

impl LoginOutcome {
    pub fn evaluate(password: Option<&str>, common: &CommonPasswords) -> Self {
        match password {
            None | Some("") => LoginOutcome::Missing,
            Some(password) => {
                let result = validate(password, common);
                if result.is_valid {
                    LoginOutcome::Accepted
                } else {
                    LoginOutcome::Rejected(result)
                }
            },
        }
    }

    /// Short label used for logs and metrics
    pub fn label(&self) -> &'static str {
        match self {
            LoginOutcome::Missing => "missing",
            LoginOutcome::Rejected(_) => "rejected",
            LoginOutcome::Accepted => "accepted",
        }
    }
}

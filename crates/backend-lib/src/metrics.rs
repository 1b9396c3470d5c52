// ==============
// crates/backend-lib/src/metrics.rs

//! Central place for metric keys
use crate::policy::LoginOutcome;
use metrics::counter;

pub const LOGIN_ATTEMPT: &str = "login.attempt";
pub const RULE_VIOLATION: &str = "login.rule_violation";
pub const RATE_LIMITED: &str = "http.rate_limited";

/// Count a login submission by outcome, plus one increment per violated rule
pub fn record_login(outcome: &LoginOutcome) {
    counter!(LOGIN_ATTEMPT, "outcome" => outcome.label()).increment(1);
    if let LoginOutcome::Rejected(result) = outcome {
        counter!(RULE_VIOLATION).increment(result.errors.len() as u64);
    }
}

pub fn record_rate_limited() {
    counter!(RATE_LIMITED).increment(1);
}

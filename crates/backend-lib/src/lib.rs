// ============================
// crates/backend-lib/src/lib.rs
// ============================
//! Core functionality for the passgate login server.
//!
//! The [`policy`] module holds the password validator; everything else is the
//! HTTP layer that feeds it submissions and renders its verdicts.

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod policy;
pub mod router;

use std::sync::Arc;
use crate::config::Settings;
use crate::middleware::RateLimiter;
use crate::policy::CommonPasswords;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Settings the server was started with
    pub settings: Arc<Settings>,
    /// Blocklist consulted by the password policy
    pub common_passwords: Arc<CommonPasswords>,
    /// Per-client request limiter
    pub rate_limiter: Arc<RateLimiter>,
}

impl AppState {
    /// Create a new application state
    pub fn new(settings: Settings, common_passwords: CommonPasswords) -> Self {
        let rate_limiter = Arc::new(RateLimiter::new(
            settings.rate_limit.window(),
            settings.rate_limit.max_requests,
        ));

        Self {
            settings: Arc::new(settings),
            common_passwords: Arc::new(common_passwords),
            rate_limiter,
        }
    }

    /// Create a new application state, loading the blocklist named in `settings`.
    /// A missing blocklist leaves the common-password rule inert.
    pub fn from_settings(settings: Settings) -> Self {
        let common_passwords =
            CommonPasswords::load_or_empty(&settings.policy.common_passwords_path);
        Self::new(settings, common_passwords)
    }
}

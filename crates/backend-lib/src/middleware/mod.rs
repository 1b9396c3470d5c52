// crates/backend-lib/src/middleware/mod.rs

//! Middleware for the passgate HTTP server.

pub mod rate_limit;
pub mod security_headers;

pub use rate_limit::{rate_limit, RateLimiter};
pub use security_headers::security_headers;

//! Fixed-window request limiting per client.
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::Request,
    middleware::Next,
    response::Response,
};
use dashmap::DashMap;
use crate::{error::AppError, metrics, AppState};

/// Key used when the client address cannot be determined
const UNKNOWN_CLIENT: &str = "unknown";

/// Rate limit entry for a client
#[derive(Debug, Clone)]
struct RateLimitEntry {
    requests: u32,
    window_start: Instant,
}

/// Counts requests per client key inside a fixed window.
#[derive(Debug)]
pub struct RateLimiter {
    entries: DashMap<String, RateLimitEntry>,
    window: Duration,
    max_requests: u32,
}

impl RateLimiter {
    /// Create a new rate limiter allowing `max_requests` per `window`
    pub fn new(window: Duration, max_requests: u32) -> Self {
        Self {
            entries: DashMap::new(),
            window,
            max_requests,
        }
    }

    /// Record a request from `client`. Returns `false` once the client is over its limit.
    pub fn check(&self, client: &str) -> bool {
        let now = Instant::now();
        let mut entry = self
            .entries
            .entry(client.to_string())
            .or_insert_with(|| RateLimitEntry {
                requests: 0,
                window_start: now,
            });

        // Start a fresh window once the old one has elapsed
        if now.duration_since(entry.window_start) >= self.window {
            entry.requests = 0;
            entry.window_start = now;
        }

        if entry.requests >= self.max_requests {
            return false;
        }

        entry.requests += 1;
        true
    }

    /// Requests remaining for `client` in its current window
    pub fn remaining(&self, client: &str) -> u32 {
        match self.entries.get(client) {
            Some(entry) if entry.window_start.elapsed() < self.window => {
                self.max_requests.saturating_sub(entry.requests)
            },
            _ => self.max_requests,
        }
    }

    /// Drop entries whose window has elapsed
    pub fn cleanup(&self) {
        let now = Instant::now();
        self.entries
            .retain(|_, entry| now.duration_since(entry.window_start) < self.window);
    }

    /// Number of clients currently tracked
    pub fn tracked_clients(&self) -> usize {
        self.entries.len()
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}

/// Identify the client: socket peer first, then proxy headers.
pub fn client_key(request: &Request<Body>) -> String {
    if let Some(ConnectInfo(addr)) = request.extensions().get::<ConnectInfo<SocketAddr>>() {
        return addr.ip().to_string();
    }

    let headers = request.headers();
    headers
        .get("x-real-ip")
        .and_then(|h| h.to_str().ok())
        .or_else(|| {
            headers
                .get("x-forwarded-for")
                .and_then(|h| h.to_str().ok())
                .and_then(|list| list.split(',').next())
        })
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .unwrap_or(UNKNOWN_CLIENT)
        .to_string()
}

/// Rate limiter middleware
pub async fn rate_limit(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let client = client_key(&request);

    if !state.rate_limiter.check(&client) {
        tracing::warn!(client = %client, "Rate limit exceeded");
        metrics::record_rate_limited();
        return Err(AppError::RateLimitExceeded);
    }

    Ok(next.run(request).await)
}

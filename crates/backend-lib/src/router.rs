// ============================
// crates/backend-lib/src/router.rs
// ============================
//! HTTP router.
use std::sync::Arc;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{handlers, AppState};

/// Create the application router.
///
/// Unmatched paths fall through to the static file directory. Every response,
/// including 429s from the rate limiter, carries the security headers.
pub fn create_router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.settings.static_files.dir);

    Router::new()
        .route("/", get(handlers::login_form))
        .route("/login", post(handlers::login))
        .route("/health", get(handlers::health))
        .fallback_service(static_files)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::rate_limit,
        ))
        .layer(middleware::from_fn(crate::middleware::security_headers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

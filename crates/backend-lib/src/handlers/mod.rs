//! HTTP handlers.

pub mod login;
pub mod pages;

use axum::Json;
use chrono::Utc;
use serde::Serialize;

pub use login::{login, login_form};

/// Health check response
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub timestamp: String,
}

/// `GET /health`
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "OK",
        timestamp: Utc::now().to_rfc3339(),
    })
}

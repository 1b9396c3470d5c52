// crates/backend-lib/src/error.rs

//! Central error type + Axum integration.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Message returned to clients that exceed the request limit
pub const RATE_LIMIT_MESSAGE: &str = "Too many requests from this IP, please try again later.";

/// Application error types with error codes and context
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CFG_001",
            AppError::RateLimitExceeded => "RATE_001",
            AppError::InvalidInput(_) => "VAL_001",
        }
    }

    /// Get a sanitized message suitable for production use
    pub fn sanitized_message(&self) -> String {
        match self {
            AppError::Config(_) => "An internal server error occurred".to_string(),
            AppError::RateLimitExceeded => RATE_LIMIT_MESSAGE.to_string(),
            AppError::InvalidInput(_) => "Invalid input provided".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Rate-limited clients get the bare message as text/plain
        if let AppError::RateLimitExceeded = self {
            return (status, RATE_LIMIT_MESSAGE).into_response();
        }

        let error_code = self.error_code();
        if status.is_server_error() {
            tracing::error!(code = error_code, error = %self, "Request failed");
        }

        // Use detailed messages in development, sanitized in production
        let message = if cfg!(debug_assertions) {
            self.to_string()
        } else {
            self.sanitized_message()
        };

        let body = serde_json::json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

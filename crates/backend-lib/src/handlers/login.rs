// ============================
// crates/backend-lib/src/handlers/login.rs
// ============================
//! Login form handlers.
use std::sync::Arc;
use axum::{
    extract::{FromRequest, Request, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use serde::Deserialize;
use zeroize::Zeroize;

use super::pages;
use crate::{metrics, policy::LoginOutcome, AppState};

/// Body of a login submission, urlencoded or JSON
#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    pub password: Option<String>,
}

/// `GET /`
pub async fn login_form() -> Html<String> {
    Html(pages::login_page())
}

/// `POST /login`
pub async fn login(State(state): State<Arc<AppState>>, request: Request) -> Response {
    let mut form = read_form(request).await;

    let outcome = LoginOutcome::evaluate(form.password.as_deref(), &state.common_passwords);
    if let Some(password) = form.password.as_mut() {
        password.zeroize();
    }

    tracing::debug!(outcome = outcome.label(), "Login submission evaluated");
    metrics::record_login(&outcome);

    render(&outcome)
}

/// Map an outcome onto its page and status code
pub fn render(outcome: &LoginOutcome) -> Response {
    match outcome {
        LoginOutcome::Missing => {
            (StatusCode::BAD_REQUEST, Html(pages::missing_password_page())).into_response()
        },
        LoginOutcome::Rejected(result) => (
            StatusCode::BAD_REQUEST,
            Html(pages::validation_failed_page(&result.errors)),
        )
            .into_response(),
        LoginOutcome::Accepted => Html(pages::welcome_page()).into_response(),
    }
}

/// Accept either a JSON or an urlencoded body. An unreadable body counts as no password.
async fn read_form(request: Request) -> LoginForm {
    let is_json = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"));

    let parsed = if is_json {
        Json::<LoginForm>::from_request(request, &())
            .await
            .map(|Json(form)| form)
            .map_err(|rejection| rejection.body_text())
    } else {
        Form::<LoginForm>::from_request(request, &())
            .await
            .map(|Form(form)| form)
            .map_err(|rejection| rejection.body_text())
    };

    parsed.unwrap_or_else(|reason| {
        tracing::debug!(%reason, "Unreadable login body");
        LoginForm::default()
    })
}

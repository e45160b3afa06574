//! REST surface - routers, shared state, and the HTTP error mapping.
//!
//! Handlers are thin: they check field presence, call into `core`, and
//! wrap the result. Every resource route except `/auth/*` and `/health`
//! goes through the [`AuthUser`] bearer gate.

use axum::{
    Json, Router,
    extract::FromRequestParts,
    http::{StatusCode, header, request::Parts},
    response::{IntoResponse, Response},
    routing::get,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::sync::Arc;
use tracing::error;

use crate::config::AppConfig;
use crate::errors::{Error, Result};
use crate::token;

pub mod auth;
pub mod calendar;
pub mod daily;
pub mod finances;
pub mod tasks;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: Arc<AppConfig>,
}

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/tasks", tasks::router())
        .nest("/daily", daily::router())
        .nest("/calendar", calendar::router())
        .nest("/finances", finances::router())
        .route("/health", get(health))
        .with_state(state)
}

/// GET /health - liveness probe, no auth
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "OK",
        "message": "Server running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::Validation { .. } | Error::Conflict { .. } => StatusCode::BAD_REQUEST,
            Error::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Config { .. }
            | Error::Database(_)
            | Error::PasswordHash(_)
            | Error::Token(_)
            | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Internals stay in the server log; clients get a generic message
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("Internal error: {self}");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// The authenticated caller, resolved from the `Authorization` header.
///
/// Rejections are terminal for the request: missing header, wrong scheme,
/// and invalid/expired token all end in a 401.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: i64,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> std::result::Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| Error::authentication("Token not provided"))?
            .to_str()
            .map_err(|_| Error::authentication("Invalid token format"))?;

        let mut parts_iter = header_value.splitn(2, ' ');
        let scheme = parts_iter.next().unwrap_or_default();
        let credential = parts_iter.next().unwrap_or_default();
        if scheme != "Bearer" || credential.is_empty() {
            return Err(Error::authentication("Invalid token format"));
        }

        let user_id = token::verify(credential, &state.config.auth.jwt_secret)?;
        Ok(AuthUser { user_id })
    }
}

/// Rejects a missing required request field with a 400.
fn require<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| Error::validation(format!("Field '{field}' is required")))
}

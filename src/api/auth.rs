//! Authentication endpoints - registration and login.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde::{Deserialize, Serialize};

use crate::api::{AppState, require};
use crate::core::account;
use crate::entities::user;
use crate::errors::Error;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// User as exposed to clients: no password hash, no timestamps.
#[derive(Serialize)]
pub struct UserView {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<user::Model> for UserView {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub user: UserView,
    pub token: String,
}

/// POST /auth/register - 201 `{user, token}`
async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), Error> {
    let name = require(body.name, "name")?;
    let email = require(body.email, "email")?;
    let password = require(body.password, "password")?;

    let (user, token) =
        account::register(&state.db, &state.config.auth, name, email, password).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: user.into(),
            token,
        }),
    ))
}

/// POST /auth/login - 200 `{user, token}`
async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, Error> {
    let email = require(body.email, "email")?;
    let password = require(body.password, "password")?;

    let (user, token) = account::login(&state.db, &state.config.auth, email, password).await?;

    Ok(Json(AuthResponse {
        user: user.into(),
        token,
    }))
}

//! Account business logic - registration and login.
//!
//! Both operations return the user together with a freshly signed bearer
//! token. Login failures are deliberately opaque: unknown email and wrong
//! password produce the same error.

use crate::{
    config::AuthSettings,
    crypto,
    entities::{User, user},
    errors::{Error, Result},
    token,
};
use sea_orm::{Set, prelude::*};
use tracing::{info, instrument};

/// Creates a new user and signs a token for it.
///
/// The password is bcrypt-hashed before storage; the email must not be
/// registered yet.
///
/// # Errors
/// * [`Error::Validation`] - name, email, or password missing/empty
/// * [`Error::Conflict`] - email already registered
#[instrument(skip(db, auth, password))]
pub async fn register(
    db: &DatabaseConnection,
    auth: &AuthSettings,
    name: String,
    email: String,
    password: String,
) -> Result<(user::Model, String)> {
    let name = name.trim().to_string();
    let email = email.trim().to_string();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(Error::validation("Name, email and password are required"));
    }

    let existing = User::find()
        .filter(user::Column::Email.eq(&email))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(Error::Conflict {
            message: "Email already registered".to_string(),
        });
    }

    let password_hash = crypto::hash_password(&password).await?;

    let user = user::ActiveModel {
        name: Set(name),
        email: Set(email),
        password_hash: Set(password_hash),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    let user = user.insert(db).await?;
    info!(user_id = user.id, "Registered new user");

    let token = token::issue(user.id, &auth.jwt_secret, auth.token_ttl)?;
    Ok((user, token))
}

/// Verifies credentials and signs a token for the user.
///
/// # Errors
/// * [`Error::Validation`] - email or password missing
/// * [`Error::AuthenticationFailed`] - unknown email or wrong password
#[instrument(skip(db, auth, password))]
pub async fn login(
    db: &DatabaseConnection,
    auth: &AuthSettings,
    email: String,
    password: String,
) -> Result<(user::Model, String)> {
    let email = email.trim().to_string();
    if email.is_empty() || password.is_empty() {
        return Err(Error::validation("Email and password are required"));
    }

    let user = User::find()
        .filter(user::Column::Email.eq(&email))
        .one(db)
        .await?
        .ok_or_else(|| Error::authentication("Invalid credentials"))?;

    if !crypto::verify_password(&password, &user.password_hash).await? {
        return Err(Error::authentication("Invalid credentials"));
    }

    let token = token::issue(user.id, &auth.jwt_secret, auth.token_ttl)?;
    Ok((user, token))
}

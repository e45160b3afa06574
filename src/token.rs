//! Bearer token issuing and verification.
//!
//! Tokens are HS256 JWTs whose subject is the user id. Verification
//! collapses every failure mode (bad signature, expiry, malformed
//! subject) into an opaque authentication error so callers cannot
//! distinguish them.

use crate::errors::{Error, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id, as a string per JWT convention
    pub sub: String,
    /// Issued-at, seconds since epoch
    pub iat: i64,
    /// Expiry, seconds since epoch
    pub exp: i64,
}

/// Signs a token for `user_id`, valid for `ttl` from now.
pub fn issue(user_id: i64, secret: &str, ttl: Duration) -> Result<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: (now + ttl).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(Error::from)
}

/// Verifies `token` and returns the embedded user id.
///
/// # Errors
/// Returns [`Error::AuthenticationFailed`] for any invalid or expired
/// token.
pub fn verify(token: &str, secret: &str) -> Result<i64> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| Error::authentication("Invalid or expired token"))?;

    data.claims
        .sub
        .parse::<i64>()
        .map_err(|_| Error::authentication("Invalid or expired token"))
}

//! Password hashing helpers.
//!
//! bcrypt is CPU-bound, so both operations run on the blocking pool to
//! keep the request executor free.

use crate::errors::{Error, Result};

pub async fn hash_password(password: &str) -> Result<String> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| Error::Config {
            message: format!("Hashing task failed: {e}"),
        })?
        .map_err(Error::from)
}

pub async fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let password = password.to_string();
    let hash = hash.to_string();
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| Error::Config {
            message: format!("Hashing task failed: {e}"),
        })?
        .map_err(Error::from)
}

//! Unified error type for the agenda backend.
//!
//! Every storage, auth, and validation failure is funneled into [`Error`];
//! the API layer decides how each variant maps onto an HTTP status. Nothing
//! below the API layer knows about status codes.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A required field is missing, empty, or malformed.
    #[error("{message}")]
    Validation { message: String },

    /// The caller could not be identified: missing/malformed/invalid/expired
    /// bearer token, or bad login credentials. Deliberately opaque.
    #[error("{message}")]
    AuthenticationFailed { message: String },

    /// The mutation target does not exist (or belongs to another user,
    /// which is indistinguishable on purpose).
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// A uniqueness rule was violated (duplicate email at registration).
    #[error("{message}")]
    Conflict { message: String },

    /// Bad or missing runtime configuration.
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for [`Error::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
        }
    }

    /// Shorthand for an opaque [`Error::AuthenticationFailed`].
    pub fn authentication(message: impl Into<String>) -> Self {
        Error::AuthenticationFailed {
            message: message.into(),
        }
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

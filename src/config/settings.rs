//! Application settings loaded from environment variables.
//!
//! `.env` loading itself happens in `main` (via `dotenvy`) before this
//! module is consulted, so plain `std::env` reads are enough here. The
//! only hard requirement is `JWT_SECRET`; everything else has a default
//! suitable for local development.

use crate::errors::{Error, Result};
use chrono::Duration;
use std::env;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3001";
const DEFAULT_DATABASE_URL: &str = "sqlite://data/agenda.sqlite?mode=rwc";
const DEFAULT_TOKEN_TTL_HOURS: i64 = 2;

/// Bearer-token settings shared by registration, login, and the auth gate.
#[derive(Debug, Clone)]
pub struct AuthSettings {
    /// HMAC secret the tokens are signed with
    pub jwt_secret: String,
    /// How long an issued token stays valid
    pub token_ttl: Duration,
}

/// Validation policy applied when creating appointments.
///
/// The permissive default mirrors the documented behavior: times are
/// accepted as-is and overlaps are never rejected. Strict mode requires
/// parseable `"HH:MM"` times with `start < end`; overlap detection stays
/// out of scope under every policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppointmentPolicy {
    /// Accept start/end times exactly as submitted
    #[default]
    Permissive,
    /// Require well-formed, ordered start/end times
    StrictTimes,
}

/// Fully resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,
    /// SeaORM connection string
    pub database_url: String,
    /// Token issuing/verification settings
    pub auth: AuthSettings,
    /// Appointment creation policy
    pub appointment_policy: AppointmentPolicy,
}

impl AppConfig {
    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if `JWT_SECRET` is unset or another
    /// variable fails to parse.
    pub fn from_env() -> Result<Self> {
        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| Error::Config {
                message: format!("Invalid BIND_ADDR: {e}"),
            })?;

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let jwt_secret = env::var("JWT_SECRET").map_err(|_| Error::Config {
            message: "JWT_SECRET must be set".to_string(),
        })?;

        let ttl_hours = match env::var("TOKEN_TTL_HOURS") {
            Ok(raw) => raw.parse::<i64>().map_err(|e| Error::Config {
                message: format!("Invalid TOKEN_TTL_HOURS: {e}"),
            })?,
            Err(_) => DEFAULT_TOKEN_TTL_HOURS,
        };
        if ttl_hours <= 0 {
            return Err(Error::Config {
                message: "TOKEN_TTL_HOURS must be positive".to_string(),
            });
        }

        let appointment_policy = match env::var("STRICT_APPOINTMENT_TIMES") {
            Ok(raw) if raw == "1" || raw.eq_ignore_ascii_case("true") => {
                AppointmentPolicy::StrictTimes
            }
            _ => AppointmentPolicy::Permissive,
        };

        Ok(Self {
            bind_addr,
            database_url,
            auth: AuthSettings {
                jwt_secret,
                token_ttl: Duration::hours(ttl_hours),
            },
            appointment_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn default_policy_is_permissive() {
        assert_eq!(AppointmentPolicy::default(), AppointmentPolicy::Permissive);
    }

    #[test]
    fn auth_settings_hold_ttl() {
        let auth = AuthSettings {
            jwt_secret: "secret".to_string(),
            token_ttl: Duration::hours(2),
        };
        assert_eq!(auth.token_ttl.num_hours(), 2);
    }
}

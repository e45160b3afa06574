//! Shared test utilities for the agenda backend.
//!
//! This module provides common helper functions for setting up test
//! databases and creating test entities with sensible defaults.

use crate::{
    config::{AppointmentPolicy, AuthSettings},
    core::{appointment, calendar, finance, task},
    entities::{self, finance::FinanceKind, task::TaskKind, user},
    errors::Result,
};
use sea_orm::{DatabaseConnection, Set, prelude::*};

/// Creates an in-memory SQLite database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Token settings with a fixed secret for deterministic tests.
pub fn test_auth_settings() -> AuthSettings {
    AuthSettings {
        jwt_secret: "test-secret".to_string(),
        token_ttl: chrono::Duration::hours(2),
    }
}

/// Inserts a user directly, skipping bcrypt to keep tests fast.
/// The stored hash is not a valid bcrypt hash; use `core::account` in
/// tests that exercise the real login path.
pub async fn create_test_user(
    db: &DatabaseConnection,
    email: &str,
) -> Result<entities::user::Model> {
    let user = user::ActiveModel {
        name: Set("Test User".to_string()),
        email: Set(email.to_string()),
        password_hash: Set("unusable-test-hash".to_string()),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    user.insert(db).await.map_err(Into::into)
}

/// Creates a test task with sensible defaults.
///
/// # Defaults
/// * `description`: None
/// * `kind`: `META`
pub async fn create_test_task(
    db: &DatabaseConnection,
    user_id: i64,
    title: &str,
    due_date: Date,
) -> Result<entities::task::Model> {
    task::create_task(
        db,
        user_id,
        task::NewTask {
            title: title.to_string(),
            description: None,
            due_date,
            kind: TaskKind::Meta,
        },
    )
    .await
}

/// Creates an all-day `PERSONAL` calendar event.
pub async fn create_test_event(
    db: &DatabaseConnection,
    user_id: i64,
    title: &str,
    date: Date,
) -> Result<entities::calendar_event::Model> {
    calendar::create_event(
        db,
        user_id,
        calendar::NewCalendarEvent {
            title: title.to_string(),
            description: None,
            date,
            all_day: None,
            kind: None,
        },
    )
    .await
}

/// Creates a test appointment from 09:00 to 10:00 under the permissive
/// policy.
pub async fn create_test_appointment(
    db: &DatabaseConnection,
    user_id: i64,
    title: &str,
    date: Date,
) -> Result<entities::appointment::Model> {
    create_timed_appointment(db, user_id, title, date, "09:00", "10:00").await
}

/// Creates a test appointment with explicit start/end times.
pub async fn create_timed_appointment(
    db: &DatabaseConnection,
    user_id: i64,
    title: &str,
    date: Date,
    start_time: &str,
    end_time: &str,
) -> Result<entities::appointment::Model> {
    appointment::create_appointment(
        db,
        user_id,
        appointment::NewAppointment {
            title: title.to_string(),
            date,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            description: None,
            location: None,
            event_id: None,
        },
        AppointmentPolicy::Permissive,
    )
    .await
}

/// Creates a test ledger entry with a fixed description and category.
pub async fn create_test_finance(
    db: &DatabaseConnection,
    user_id: i64,
    kind: FinanceKind,
    amount: f64,
    date: Date,
) -> Result<entities::finance::Model> {
    finance::create_finance(
        db,
        user_id,
        finance::NewFinance {
            kind,
            amount,
            description: "Test transaction".to_string(),
            category: "general".to_string(),
            date,
        },
    )
    .await
}

/// Sets up a complete test environment with one user.
/// Returns (db, user) for common test scenarios.
pub async fn setup_with_user() -> Result<(DatabaseConnection, entities::user::Model)> {
    let db = setup_test_db().await?;
    let user = create_test_user(&db, "test@example.com").await?;
    Ok((db, user))
}

//! Appointment business logic - time-bounded entries within a day.
//!
//! By default start/end times are stored exactly as submitted and two
//! appointments of the same user may overlap freely; that matches the
//! documented behavior of the system. The strict policy only adds a
//! well-formedness check on the times, never overlap detection.

use crate::{
    config::AppointmentPolicy,
    entities::{Appointment, appointment},
    errors::{Error, Result},
};
use chrono::NaiveTime;
use sea_orm::{Set, prelude::*};
use tracing::instrument;

/// Fields for a new appointment.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub title: String,
    pub date: Date,
    pub start_time: String,
    pub end_time: String,
    pub description: Option<String>,
    pub location: Option<String>,
    /// Weak link to a calendar event; existence is not checked
    pub event_id: Option<i64>,
}

/// Creates an appointment for `user_id`.
///
/// # Errors
/// * [`Error::Validation`] - empty title, or (strict policy only)
///   unparseable or unordered times
#[instrument(skip(db, new_appointment), fields(title = %new_appointment.title))]
pub async fn create_appointment(
    db: &DatabaseConnection,
    user_id: i64,
    new_appointment: NewAppointment,
    policy: AppointmentPolicy,
) -> Result<appointment::Model> {
    if new_appointment.title.trim().is_empty() {
        return Err(Error::validation("Appointment title cannot be empty"));
    }

    if policy == AppointmentPolicy::StrictTimes {
        let start = parse_hhmm(&new_appointment.start_time)?;
        let end = parse_hhmm(&new_appointment.end_time)?;
        if start >= end {
            return Err(Error::validation("Start time must be before end time"));
        }
    }

    let appointment = appointment::ActiveModel {
        title: Set(new_appointment.title.trim().to_string()),
        description: Set(new_appointment.description),
        date: Set(new_appointment.date),
        start_time: Set(new_appointment.start_time),
        end_time: Set(new_appointment.end_time),
        location: Set(new_appointment.location),
        event_id: Set(new_appointment.event_id),
        user_id: Set(user_id),
        ..Default::default()
    };

    appointment.insert(db).await.map_err(Into::into)
}

/// Returns all appointments of `user_id` on `date`, regardless of time.
pub async fn list_appointments_for_day(
    db: &DatabaseConnection,
    user_id: i64,
    date: Date,
) -> Result<Vec<appointment::Model>> {
    Appointment::find()
        .filter(appointment::Column::UserId.eq(user_id))
        .filter(appointment::Column::Date.eq(date))
        .all(db)
        .await
        .map_err(Into::into)
}

fn parse_hhmm(raw: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .map_err(|_| Error::validation(format!("Invalid time '{raw}', expected HH:MM")))
}

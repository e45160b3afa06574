//! Calendar business logic - event creation and monthly range queries.
//!
//! Events are day-level markers: create and range-query are the whole
//! surface. Month boundaries are computed with chrono so variable month
//! lengths and leap years come out right.

use crate::{
    entities::{CalendarEvent, calendar_event},
    errors::{Error, Result},
};
use chrono::Months;
use sea_orm::{Set, prelude::*};
use serde::Serialize;
use tracing::instrument;

const DEFAULT_EVENT_KIND: &str = "PERSONAL";

/// Fields for a new calendar event.
#[derive(Debug, Clone)]
pub struct NewCalendarEvent {
    pub title: String,
    pub description: Option<String>,
    pub date: Date,
    /// Defaults to true when absent on the wire
    pub all_day: Option<bool>,
    /// Defaults to `"PERSONAL"` when absent on the wire
    pub kind: Option<String>,
}

/// Projection of an event for calendar rendering: the date is emitted as
/// a plain `YYYY-MM-DD` string.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthEventView {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub all_day: bool,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<calendar_event::Model> for MonthEventView {
    fn from(event: calendar_event::Model) -> Self {
        Self {
            id: event.id,
            title: event.title,
            date: event.date.format("%Y-%m-%d").to_string(),
            all_day: event.all_day,
            kind: event.kind,
        }
    }
}

/// First and last calendar day of the given month.
///
/// The last day is derived from the first day of the following month, so
/// 28/29/30/31-day months all come out right without any table.
///
/// # Errors
/// * [`Error::Validation`] - month outside 1..=12 or year out of range
pub fn month_bounds(year: i32, month: u32) -> Result<(Date, Date)> {
    let start = Date::from_ymd_opt(year, month, 1)
        .ok_or_else(|| Error::validation("Invalid year or month"))?;
    let end = start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| Error::validation("Invalid year or month"))?;
    Ok((start, end))
}

/// Creates an event for `user_id`.
///
/// # Errors
/// * [`Error::Validation`] - empty title
#[instrument(skip(db, new_event), fields(title = %new_event.title))]
pub async fn create_event(
    db: &DatabaseConnection,
    user_id: i64,
    new_event: NewCalendarEvent,
) -> Result<calendar_event::Model> {
    if new_event.title.trim().is_empty() {
        return Err(Error::validation("Event title cannot be empty"));
    }

    let event = calendar_event::ActiveModel {
        title: Set(new_event.title.trim().to_string()),
        description: Set(new_event.description),
        date: Set(new_event.date),
        all_day: Set(new_event.all_day.unwrap_or(true)),
        kind: Set(new_event
            .kind
            .unwrap_or_else(|| DEFAULT_EVENT_KIND.to_string())),
        user_id: Set(user_id),
        ..Default::default()
    };

    event.insert(db).await.map_err(Into::into)
}

/// Returns all events of `user_id` with `start <= date <= end`.
pub async fn list_events_in_range(
    db: &DatabaseConnection,
    user_id: i64,
    start: Date,
    end: Date,
) -> Result<Vec<calendar_event::Model>> {
    CalendarEvent::find()
        .filter(calendar_event::Column::UserId.eq(user_id))
        .filter(calendar_event::Column::Date.gte(start))
        .filter(calendar_event::Column::Date.lte(end))
        .all(db)
        .await
        .map_err(Into::into)
}

/// Events of `user_id` for one month, projected for rendering.
pub async fn list_month_events(
    db: &DatabaseConnection,
    user_id: i64,
    year: i32,
    month: u32,
) -> Result<Vec<MonthEventView>> {
    let (start, end) = month_bounds(year, month)?;
    let events = list_events_in_range(db, user_id, start, end).await?;
    Ok(events.into_iter().map(MonthEventView::from).collect())
}

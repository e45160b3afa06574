//! Calendar endpoints - monthly event listing and event creation.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;

use crate::api::{AppState, AuthUser, require};
use crate::core::calendar::{self, MonthEventView, NewCalendarEvent};
use crate::entities::calendar_event::Model as CalendarEventModel;
use crate::errors::Error;
use sea_orm::prelude::Date;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(month_view).post(create))
}

#[derive(Deserialize)]
pub struct MonthQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<Date>,
    pub all_day: Option<bool>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// GET /calendar?year&month - events of the month, projected for
/// rendering
async fn month_view(
    user: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Vec<MonthEventView>>, Error> {
    let year = require(query.year, "year")?;
    let month = require(query.month, "month")?;
    let events = calendar::list_month_events(&state.db, user.user_id, year, month).await?;
    Ok(Json(events))
}

/// POST /calendar - 201 with the created event
async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    Json(body): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<CalendarEventModel>), Error> {
    let new_event = NewCalendarEvent {
        title: require(body.title, "title")?,
        description: body.description,
        date: require(body.date, "date")?,
        all_day: body.all_day,
        kind: body.kind,
    };
    let created = calendar::create_event(&state.db, user.user_id, new_event).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

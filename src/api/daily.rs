//! Daily schedule endpoints - the aggregated day view and appointment
//! creation.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::Deserialize;

use crate::api::{AppState, AuthUser, require};
use crate::core::appointment::{self, NewAppointment};
use crate::core::daily::{self, DailyData};
use crate::entities::appointment::Model as AppointmentModel;
use crate::errors::Error;
use sea_orm::prelude::Date;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(day_view))
        .route("/appointment", post(create_appointment))
}

#[derive(Deserialize)]
pub struct DailyQuery {
    pub date: Option<Date>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub title: Option<String>,
    pub date: Option<Date>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub event_id: Option<i64>,
}

/// GET /daily?date=YYYY-MM-DD - all-day events plus appointments
async fn day_view(
    user: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<DailyQuery>,
) -> Result<Json<DailyData>, Error> {
    let date = require(query.date, "date")?;
    let data = daily::daily_data(&state.db, user.user_id, date).await?;
    Ok(Json(data))
}

/// POST /daily/appointment - 201 with the created appointment
async fn create_appointment(
    user: AuthUser,
    State(state): State<AppState>,
    Json(body): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<AppointmentModel>), Error> {
    let new_appointment = NewAppointment {
        title: require(body.title, "title")?,
        date: require(body.date, "date")?,
        start_time: require(body.start_time, "startTime")?,
        end_time: require(body.end_time, "endTime")?,
        description: body.description,
        location: body.location,
        event_id: body.event_id,
    };

    let created = appointment::create_appointment(
        &state.db,
        user.user_id,
        new_appointment,
        state.config.appointment_policy,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

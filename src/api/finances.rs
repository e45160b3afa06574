//! Finance endpoints - the ledger and its monthly statement.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;

use crate::api::{AppState, AuthUser, require};
use crate::core::finance::{self, MonthlyStatement, NewFinance};
use crate::entities::finance::{FinanceKind, Model as FinanceModel};
use crate::errors::Error;
use sea_orm::prelude::Date;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/monthly", get(monthly))
        .route("/{id}", axum::routing::delete(remove))
}

#[derive(Deserialize)]
pub struct MonthQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFinanceRequest {
    #[serde(rename = "type")]
    pub kind: Option<FinanceKind>,
    pub amount: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub date: Option<Date>,
}

/// GET /finances - all transactions of the caller, newest first
async fn list(
    user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<FinanceModel>>, Error> {
    let finances = finance::list_finances(&state.db, user.user_id).await?;
    Ok(Json(finances))
}

/// POST /finances - 201 with the recorded transaction
async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    Json(body): Json<CreateFinanceRequest>,
) -> Result<(StatusCode, Json<FinanceModel>), Error> {
    let new_finance = NewFinance {
        kind: require(body.kind, "type")?,
        amount: require(body.amount, "amount")?,
        description: require(body.description, "description")?,
        category: require(body.category, "category")?,
        date: require(body.date, "date")?,
    };
    let created = finance::create_finance(&state.db, user.user_id, new_finance).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /finances/monthly?year&month - totals and balance for one month
async fn monthly(
    user: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<MonthlyStatement>, Error> {
    let year = require(query.year, "year")?;
    let month = require(query.month, "month")?;
    let statement = finance::monthly_statement(&state.db, user.user_id, year, month).await?;
    Ok(Json(statement))
}

/// DELETE /finances/{id} - 204 on success
async fn remove(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Error> {
    finance::delete_finance(&state.db, user.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

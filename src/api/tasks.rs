//! Task endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
};
use serde::Deserialize;

use crate::api::{AppState, AuthUser, require};
use crate::core::task::{self, NewTask, TaskUpdate};
use crate::entities::task::{Model as TaskModel, TaskKind};
use crate::errors::Error;
use sea_orm::prelude::Date;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}/complete", patch(complete))
        .route("/{id}", patch(update).delete(remove))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<Date>,
    #[serde(rename = "type")]
    pub kind: Option<TaskKind>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<Date>,
    #[serde(rename = "type")]
    pub kind: Option<TaskKind>,
    pub completed: Option<bool>,
}

/// GET /tasks - all tasks of the caller, due date ascending
async fn list(
    user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<TaskModel>>, Error> {
    let tasks = task::list_tasks(&state.db, user.user_id).await?;
    Ok(Json(tasks))
}

/// POST /tasks - 201 with the created task
async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    Json(body): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskModel>), Error> {
    let new_task = NewTask {
        title: require(body.title, "title")?,
        description: body.description,
        due_date: require(body.due_date, "dueDate")?,
        kind: require(body.kind, "type")?,
    };
    let created = task::create_task(&state.db, user.user_id, new_task).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /tasks/{id}/complete - idempotent completion
async fn complete(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TaskModel>, Error> {
    let completed = task::complete_task(&state.db, user.user_id, id).await?;
    Ok(Json(completed))
}

/// PATCH /tasks/{id} - sparse merge of the supplied fields
async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateTaskRequest>,
) -> Result<Json<TaskModel>, Error> {
    let update = TaskUpdate {
        title: body.title,
        description: body.description,
        due_date: body.due_date,
        kind: body.kind,
        completed: body.completed,
    };
    let updated = task::update_task(&state.db, user.user_id, id, update).await?;
    Ok(Json(updated))
}

/// DELETE /tasks/{id} - 204 on success
async fn remove(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Error> {
    task::delete_task(&state.db, user.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

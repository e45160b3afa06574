//! Task business logic - the categorized to-do list engine.
//!
//! All lookups are scoped by the acting user: a task id belonging to
//! someone else resolves exactly like a missing one. Callers are expected
//! to pre-validate input; the non-empty title check here is the terminal
//! guard.

use crate::{
    entities::{Task, task},
    errors::{Error, Result},
};
use sea_orm::{IntoActiveModel, QueryOrder, Set, prelude::*};
use tracing::instrument;

/// Fields for a new task. `completed` always starts false.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Date,
    pub kind: task::TaskKind,
}

/// Sparse update: `Some` sets the field, `None` leaves it untouched.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<Date>,
    pub kind: Option<task::TaskKind>,
    pub completed: Option<bool>,
}

/// Returns all tasks of `user_id`, ordered by due date ascending.
pub async fn list_tasks(db: &DatabaseConnection, user_id: i64) -> Result<Vec<task::Model>> {
    Task::find()
        .filter(task::Column::UserId.eq(user_id))
        .order_by_asc(task::Column::DueDate)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Creates a task for `user_id`.
///
/// # Errors
/// * [`Error::Validation`] - empty title
#[instrument(skip(db, new_task), fields(title = %new_task.title))]
pub async fn create_task(
    db: &DatabaseConnection,
    user_id: i64,
    new_task: NewTask,
) -> Result<task::Model> {
    if new_task.title.trim().is_empty() {
        return Err(Error::validation("Task title cannot be empty"));
    }

    let now = chrono::Utc::now();
    let task = task::ActiveModel {
        title: Set(new_task.title.trim().to_string()),
        description: Set(new_task.description),
        completed: Set(false),
        due_date: Set(new_task.due_date),
        kind: Set(new_task.kind),
        user_id: Set(user_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    task.insert(db).await.map_err(Into::into)
}

/// Idempotently marks a task of `user_id` as completed.
///
/// # Errors
/// * [`Error::NotFound`] - no such task for this user
#[instrument(skip(db))]
pub async fn complete_task(db: &DatabaseConnection, user_id: i64, id: i64) -> Result<task::Model> {
    let task = find_owned(db, user_id, id).await?;
    if task.completed {
        return Ok(task);
    }

    let mut active = task.into_active_model();
    active.completed = Set(true);
    active.updated_at = Set(chrono::Utc::now());
    active.update(db).await.map_err(Into::into)
}

/// Merges the supplied fields into a task of `user_id`.
///
/// Used both for completion toggling and for moving a task between
/// buckets by supplying a new `kind`.
///
/// # Errors
/// * [`Error::NotFound`] - no such task for this user
/// * [`Error::Validation`] - title supplied but empty
#[instrument(skip(db, update))]
pub async fn update_task(
    db: &DatabaseConnection,
    user_id: i64,
    id: i64,
    update: TaskUpdate,
) -> Result<task::Model> {
    let task = find_owned(db, user_id, id).await?;
    let mut active = task.into_active_model();

    if let Some(title) = update.title {
        if title.trim().is_empty() {
            return Err(Error::validation("Task title cannot be empty"));
        }
        active.title = Set(title.trim().to_string());
    }
    if let Some(description) = update.description {
        active.description = Set(Some(description));
    }
    if let Some(due_date) = update.due_date {
        active.due_date = Set(due_date);
    }
    if let Some(kind) = update.kind {
        active.kind = Set(kind);
    }
    if let Some(completed) = update.completed {
        active.completed = Set(completed);
    }
    active.updated_at = Set(chrono::Utc::now());

    active.update(db).await.map_err(Into::into)
}

/// Permanently deletes a task of `user_id`.
///
/// # Errors
/// * [`Error::NotFound`] - no such task for this user
#[instrument(skip(db))]
pub async fn delete_task(db: &DatabaseConnection, user_id: i64, id: i64) -> Result<()> {
    let task = find_owned(db, user_id, id).await?;
    task.delete(db).await?;
    Ok(())
}

async fn find_owned(db: &DatabaseConnection, user_id: i64, id: i64) -> Result<task::Model> {
    Task::find_by_id(id)
        .filter(task::Column::UserId.eq(user_id))
        .one(db)
        .await?
        .ok_or(Error::NotFound { entity: "Task" })
}

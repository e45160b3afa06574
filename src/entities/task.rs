//! Task entity - Categorized to-do items owned by a user.
//!
//! Tasks live in one of three fixed buckets (`META`, `IMPORTANTE`,
//! `AMANHA`); drag-and-drop re-categorization in the frontend is just an
//! update of `kind`. No display order is persisted; clients see insertion
//! order filtered by bucket.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The three fixed task buckets. Stored as their wire strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskKind {
    /// Long-running goal
    #[sea_orm(string_value = "META")]
    Meta,
    /// Important, do soon
    #[sea_orm(string_value = "IMPORTANTE")]
    Importante,
    /// Queued for tomorrow
    #[sea_orm(string_value = "AMANHA")]
    Amanha,
}

/// Task database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tasks")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the task
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Short task title
    pub title: String,
    /// Optional free-form details
    pub description: Option<String>,
    /// Whether the task has been completed
    pub completed: bool,
    /// Calendar day the task is due
    pub due_date: Date,
    /// Bucket the task belongs to
    #[serde(rename = "type")]
    pub kind: TaskKind,
    /// Owning user
    pub user_id: i64,
    /// When the task was created
    pub created_at: DateTimeUtc,
    /// When the task was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Task and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each task belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

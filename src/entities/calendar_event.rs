//! Calendar event entity - Day-level markers on the calendar.
//!
//! Events are all-day by default and keyed by calendar day. The current
//! surface only creates and range-queries them; there is no update or
//! delete. `kind` is an open string (the frontend treats it as free-form)
//! defaulting to `"PERSONAL"`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Calendar event database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "calendar_events")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the event
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Event title
    pub title: String,
    /// Optional free-form details
    pub description: Option<String>,
    /// Calendar day the event falls on
    pub date: Date,
    /// Whether the event spans the whole day
    pub all_day: bool,
    /// Event category, e.g. `"PERSONAL"`
    #[serde(rename = "type")]
    pub kind: String,
    /// Owning user
    pub user_id: i64,
}

/// Defines relationships between CalendarEvent and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each event belongs to one user
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

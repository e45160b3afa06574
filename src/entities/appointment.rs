//! Appointment entity - Time-bounded entries within a single day.
//!
//! `start_time`/`end_time` are `"HH:MM"` strings taken as-is: ordering is
//! not enforced by default and overlapping appointments are allowed.
//! `event_id` is a weak reference to a calendar event: relation only, no
//! foreign key, no cascade.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Appointment database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "appointments")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the appointment
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Appointment title
    pub title: String,
    /// Optional free-form details
    pub description: Option<String>,
    /// Calendar day the appointment falls on
    pub date: Date,
    /// Start of the slot, `"HH:MM"`
    pub start_time: String,
    /// End of the slot, `"HH:MM"`
    pub end_time: String,
    /// Optional location
    pub location: Option<String>,
    /// Optional weak link to a calendar event (not enforced)
    pub event_id: Option<i64>,
    /// Owning user
    pub user_id: i64,
}

/// Defines relationships between Appointment and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each appointment belongs to one user
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

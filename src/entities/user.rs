//! User entity - Identity record every other entity hangs off.
//!
//! Users are created at registration and never deleted in the current
//! surface. The `password_hash` column never leaves the server; API
//! responses use a dedicated projection instead of this model.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the user
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name
    pub name: String,
    /// Login email, unique across all users
    #[sea_orm(unique)]
    pub email: String,
    /// bcrypt hash of the login password
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the account was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between User and the owned entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One user has many tasks
    #[sea_orm(has_many = "super::task::Entity")]
    Tasks,
    /// One user has many calendar events
    #[sea_orm(has_many = "super::calendar_event::Entity")]
    CalendarEvents,
    /// One user has many appointments
    #[sea_orm(has_many = "super::appointment::Entity")]
    Appointments,
    /// One user has many finance transactions
    #[sea_orm(has_many = "super::finance::Entity")]
    Finances,
}

impl Related<super::task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tasks.def()
    }
}

impl Related<super::calendar_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CalendarEvents.def()
    }
}

impl Related<super::appointment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appointments.def()
    }
}

impl Related<super::finance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Finances.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

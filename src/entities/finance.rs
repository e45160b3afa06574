//! Finance entity - Income/expense transactions in the ledger.
//!
//! Amounts are stored as positive magnitudes; `kind` carries the
//! direction. The monthly statement aggregates these per calendar month.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Direction of a ledger entry. Stored as its wire string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "UPPERCASE")]
pub enum FinanceKind {
    /// Money coming in
    #[sea_orm(string_value = "INCOME")]
    Income,
    /// Money going out
    #[sea_orm(string_value = "EXPENSE")]
    Expense,
}

/// Finance transaction database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "finances")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the transaction
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Whether this is income or an expense
    #[serde(rename = "type")]
    pub kind: FinanceKind,
    /// Transaction amount, always positive
    pub amount: f64,
    /// Human-readable description
    pub description: String,
    /// Free-form category label
    pub category: String,
    /// Calendar day the transaction happened
    pub date: Date,
    /// Owning user
    pub user_id: i64,
    /// When the transaction was recorded
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Finance and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each transaction belongs to one user
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

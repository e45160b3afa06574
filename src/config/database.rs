//! Database connection and table creation using SeaORM.
//!
//! Tables are generated straight from the entity definitions with
//! `Schema::create_table_from_entity`, so the SQLite schema always matches
//! the Rust structs without hand-written SQL. `users` is created first
//! because every other table carries a foreign key to it.

use crate::entities::{Appointment, CalendarEvent, Finance, Task, User};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::info;

/// Connects to the database at `database_url`.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection> {
    let db = Database::connect(database_url).await?;
    info!("Database connection established: {database_url}");
    Ok(db)
}

/// Creates all tables that do not exist yet.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let user_table = schema.create_table_from_entity(User).if_not_exists().to_owned();
    let task_table = schema.create_table_from_entity(Task).if_not_exists().to_owned();
    let event_table = schema
        .create_table_from_entity(CalendarEvent)
        .if_not_exists()
        .to_owned();
    let appointment_table = schema
        .create_table_from_entity(Appointment)
        .if_not_exists()
        .to_owned();
    let finance_table = schema
        .create_table_from_entity(Finance)
        .if_not_exists()
        .to_owned();

    db.execute(builder.build(&user_table)).await?;
    db.execute(builder.build(&task_table)).await?;
    db.execute(builder.build(&event_table)).await?;
    db.execute(builder.build(&appointment_table)).await?;
    db.execute(builder.build(&finance_table)).await?;

    Ok(())
}

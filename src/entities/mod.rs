//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod appointment;
pub mod calendar_event;
pub mod finance;
pub mod task;
pub mod user;

// Re-export specific types to avoid conflicts
pub use appointment::{Column as AppointmentColumn, Entity as Appointment, Model as AppointmentModel};
pub use calendar_event::{
    Column as CalendarEventColumn, Entity as CalendarEvent, Model as CalendarEventModel,
};
pub use finance::{Column as FinanceColumn, Entity as Finance, Model as FinanceModel};
pub use task::{Column as TaskColumn, Entity as Task, Model as TaskModel};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel};

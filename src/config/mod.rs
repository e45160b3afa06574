/// Database connection and table creation
pub mod database;

/// Typed application settings loaded from the environment
pub mod settings;

pub use settings::{AppConfig, AppointmentPolicy, AuthSettings};

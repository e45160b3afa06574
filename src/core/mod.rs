//! Core business logic, framework-agnostic.
//!
//! Every function takes the database handle and the acting `user_id`
//! explicitly; there is no ambient request state. The API layer is a thin
//! translation on top of these functions.

/// Registration and login
pub mod account;
/// Appointment store
pub mod appointment;
/// Calendar event store and monthly range queries
pub mod calendar;
/// Daily aggregation of events and appointments
pub mod daily;
/// Finance ledger and monthly statement
pub mod finance;
/// Task list engine
pub mod task;

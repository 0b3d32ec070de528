//! Common types used across the application.

pub mod week;

pub use week::{WeekError, WeekId};

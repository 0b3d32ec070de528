//! Shared types, errors, and configuration for PM Report.
//!
//! This crate provides common pieces used across all other crates:
//! - ISO week keys for weekly datasets
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, ThresholdConfig};
pub use error::{AppError, AppResult};
pub use types::{WeekError, WeekId};

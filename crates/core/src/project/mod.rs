//! Project records consumed by the aggregator.

pub mod types;

pub use types::{Project, UNKNOWN_PM};

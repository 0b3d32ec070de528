//! Project report aggregation.
//!
//! This module turns a project collection and a band list into the figures
//! the presentation layer renders:
//! - Variance histogram across all projects
//! - Variance by project manager
//! - Project assignment by project manager
//! - Budget status (overrun / on track / underrun)

pub mod service;
pub mod types;


pub use service::ReportService;
pub use types::*;

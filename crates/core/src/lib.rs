//! Core logic for PM Report.
//!
//! This crate contains pure computation with ZERO file, network, or
//! logging dependencies. Callers hand in already-parsed projects and a
//! band list; every function returns freshly built results.
//!
//! # Modules
//!
//! - `variance` - Threshold bands and variance classification
//! - `report` - Aggregation by band, by project manager, and by budget status
//! - `project` - Project records consumed by the aggregator
//! - `ingest` - Field-level mapping of the weekly export rows

pub mod ingest;
pub mod project;
pub mod report;
pub mod variance;

pub use project::Project;
pub use report::{AggregationReport, ReportService};
pub use variance::{BandSet, ThresholdBand, classify};

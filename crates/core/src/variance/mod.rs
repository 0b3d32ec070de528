//! Threshold bands and variance classification.
//!
//! Variance is budget-spent % minus progress %. A band list maps it onto
//! labeled risk buckets; this module holds the one implementation of that
//! mapping used by every report.

pub mod classifier;
pub mod error;
pub mod types;


pub use classifier::{classify, classify_index, describe_range};
pub use error::BandError;
pub use types::{BandSet, ThresholdBand, VarianceBound};

//! Threshold band configuration errors.

use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons a band list is rejected before it reaches the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BandError {
    /// No bands configured.
    #[error("At least one threshold band is required")]
    Empty,

    /// A band has a blank label.
    #[error("Threshold band at position {0} has an empty label")]
    EmptyLabel(usize),

    /// Two bands share a label.
    #[error("Duplicate threshold band label: {0}")]
    DuplicateLabel(String),

    /// A band's upper bound does not exceed the previous band's.
    #[error("Threshold band {label} has max variance {max} which is not above {previous}")]
    NotAscending {
        /// Offending band label.
        label: String,
        /// Its configured upper bound.
        max: Decimal,
        /// Upper bound of the band before it.
        previous: Decimal,
    },

    /// An unbounded band appears before the end of the list.
    #[error("Only the last threshold band may be unbounded, found {0}")]
    UnboundedNotLast(String),
}

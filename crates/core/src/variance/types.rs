//! Threshold band types.

use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;

use pmreport_shared::config::{ThresholdConfig, default_thresholds};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::classifier;
use super::error::BandError;

/// Inclusive upper bound of a band, in percentage points.
///
/// `Unbounded` sorts above every finite value, so `Finite(v) <= bound`
/// reads as "v fits under this bound" for both variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Option<Decimal>", into = "Option<Decimal>")]
pub enum VarianceBound {
    /// A finite upper bound.
    Finite(Decimal),
    /// Positive infinity.
    Unbounded,
}

impl VarianceBound {
    /// Returns true if `variance <= self`.
    #[must_use]
    pub fn admits(self, variance: Decimal) -> bool {
        Self::Finite(variance) <= self
    }

    /// Returns true if `self < variance`.
    #[must_use]
    pub fn is_below(self, variance: Decimal) -> bool {
        self < Self::Finite(variance)
    }
}

impl From<Option<Decimal>> for VarianceBound {
    fn from(value: Option<Decimal>) -> Self {
        value.map_or(Self::Unbounded, Self::Finite)
    }
}

impl From<VarianceBound> for Option<Decimal> {
    fn from(value: VarianceBound) -> Self {
        match value {
            VarianceBound::Finite(v) => Some(v),
            VarianceBound::Unbounded => None,
        }
    }
}

impl From<Decimal> for VarianceBound {
    fn from(value: Decimal) -> Self {
        Self::Finite(value)
    }
}

impl fmt::Display for VarianceBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(v) => write!(f, "{}", v.normalize()),
            Self::Unbounded => f.write_str("∞"),
        }
    }
}

/// A labeled variance range with a display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdBand {
    /// Band label, e.g. "Warning".
    pub label: String,
    /// Inclusive upper bound. Informational only on the last band.
    pub max_variance: VarianceBound,
    /// Opaque display token (usually a hex color).
    pub color: String,
}

impl ThresholdBand {
    /// Creates a band.
    pub fn new(
        label: impl Into<String>,
        max_variance: impl Into<VarianceBound>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            max_variance: max_variance.into(),
            color: color.into(),
        }
    }
}

impl From<ThresholdConfig> for ThresholdBand {
    fn from(config: ThresholdConfig) -> Self {
        Self::new(config.label, config.max_variance, config.color)
    }
}

impl From<&ThresholdConfig> for ThresholdBand {
    fn from(config: &ThresholdConfig) -> Self {
        Self::from(config.clone())
    }
}

/// A validated, ordered, non-empty list of threshold bands.
///
/// Labels are unique and finite bounds strictly increase; only the last
/// band may be unbounded. Dereferences to `[ThresholdBand]` so it can be
/// handed straight to the classifier and aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BandSet(Vec<ThresholdBand>);

impl BandSet {
    /// Validates and wraps a band list.
    ///
    /// # Errors
    ///
    /// Returns a [`BandError`] describing the first problem found.
    pub fn new(bands: Vec<ThresholdBand>) -> Result<Self, BandError> {
        validate(&bands)?;
        Ok(Self(bands))
    }

    /// Builds a band set from configuration entries.
    ///
    /// # Errors
    ///
    /// Same as [`BandSet::new`].
    pub fn from_config(config: &[ThresholdConfig]) -> Result<Self, BandError> {
        Self::new(config.iter().map(ThresholdBand::from).collect())
    }

    /// The standard five-band set: Excellent, Normal, Warning,
    /// Need Attention, Need Action.
    #[must_use]
    pub fn standard() -> Self {
        Self(default_thresholds().into_iter().map(ThresholdBand::from).collect())
    }

    /// Classifies a variance against this set.
    #[must_use]
    pub fn classify(&self, variance: Option<Decimal>) -> Option<&ThresholdBand> {
        classifier::classify_index(variance, &self.0).map(|i| &self.0[i])
    }

    /// Band labels in order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|b| b.label.as_str())
    }

    /// Returns the inner list.
    #[must_use]
    pub fn into_inner(self) -> Vec<ThresholdBand> {
        self.0
    }
}

impl Default for BandSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl Deref for BandSet {
    type Target = [ThresholdBand];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<Vec<ThresholdBand>> for BandSet {
    type Error = BandError;

    fn try_from(value: Vec<ThresholdBand>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

fn validate(bands: &[ThresholdBand]) -> Result<(), BandError> {
    if bands.is_empty() {
        return Err(BandError::Empty);
    }

    let mut seen = HashSet::with_capacity(bands.len());
    for (i, band) in bands.iter().enumerate() {
        if band.label.trim().is_empty() {
            return Err(BandError::EmptyLabel(i));
        }
        if !seen.insert(band.label.as_str()) {
            return Err(BandError::DuplicateLabel(band.label.clone()));
        }

        let Some(prev) = i.checked_sub(1).map(|p| &bands[p]) else {
            continue;
        };
        match (prev.max_variance, band.max_variance) {
            (VarianceBound::Unbounded, _) => {
                return Err(BandError::UnboundedNotLast(prev.label.clone()));
            }
            (VarianceBound::Finite(previous), VarianceBound::Finite(max)) if max <= previous => {
                return Err(BandError::NotAscending {
                    label: band.label.clone(),
                    max,
                    previous,
                });
            }
            _ => {}
        }
    }

    Ok(())
}

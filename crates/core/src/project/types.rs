//! Project record types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Grouping key used for projects without a project manager.
pub const UNKNOWN_PM: &str = "Unknown";

/// One project row as seen by the aggregator.
///
/// Every numeric field is optional; a missing value means "no data" and
/// only excludes the project from the aggregates that need that value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Row identifier from the export, if any.
    #[serde(default)]
    pub id: Option<String>,
    /// Project name.
    #[serde(default)]
    pub name: Option<String>,
    /// Project manager.
    #[serde(default)]
    pub pm: Option<String>,
    /// Budget-spent % minus progress %.
    #[serde(default)]
    pub variance: Option<Decimal>,
    /// Amount over budget.
    #[serde(default)]
    pub budget_overrun: Option<Decimal>,
    /// Amount under budget.
    #[serde(default)]
    pub budget_underrun: Option<Decimal>,
}

impl Project {
    /// Creates an empty project record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the project manager.
    #[must_use]
    pub fn with_pm(mut self, pm: impl Into<String>) -> Self {
        self.pm = Some(pm.into());
        self
    }

    /// Sets the variance.
    #[must_use]
    pub fn with_variance(mut self, variance: Decimal) -> Self {
        self.variance = Some(variance);
        self
    }

    /// Sets overrun and underrun amounts.
    #[must_use]
    pub fn with_budget(mut self, overrun: Option<Decimal>, underrun: Option<Decimal>) -> Self {
        self.budget_overrun = overrun;
        self.budget_underrun = underrun;
        self
    }

    /// Variance from budget-spent and progress percentages.
    ///
    /// Absent when either input is absent.
    #[must_use]
    pub fn variance_from(
        budget_percentage: Option<Decimal>,
        progress_percentage: Option<Decimal>,
    ) -> Option<Decimal> {
        Some(budget_percentage? - progress_percentage?)
    }

    /// The PM name used for grouping. Blank or missing names become
    /// [`UNKNOWN_PM`].
    #[must_use]
    pub fn pm_key(&self) -> &str {
        self.pm
            .as_deref()
            .map(str::trim)
            .filter(|pm| !pm.is_empty())
            .unwrap_or(UNKNOWN_PM)
    }
}

//! Report data types.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};

/// A share of a whole, rounded to one decimal place.
///
/// Always carries exactly one fractional digit (`0.0`, `50.0`, `33.3`) and
/// serializes as that string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percentage(Decimal);

impl Percentage {
    /// `0.0`.
    #[must_use]
    pub fn zero() -> Self {
        Self(Decimal::new(0, 1))
    }

    /// `count / denominator * 100`, or `0.0` when the denominator is zero.
    #[must_use]
    pub fn of(count: usize, denominator: usize) -> Self {
        if denominator == 0 {
            return Self::zero();
        }

        let mut value = (Decimal::from(count) * Decimal::ONE_HUNDRED / Decimal::from(denominator))
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        value.rescale(1);
        Self(value)
    }

    /// The rounded value.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Project count for one band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandCount {
    /// Band label.
    pub label: String,
    /// Band display color.
    pub color: String,
    /// Number of classified projects in the band.
    pub count: usize,
    /// Share of classified projects.
    pub percentage: Percentage,
}

/// Band histogram across all projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VarianceSummary {
    /// One entry per band, in band order. Empty bands are kept.
    pub bands: Vec<BandCount>,
    /// Projects that received a band.
    pub classified: usize,
    /// Projects left unclassified for lack of data.
    pub skipped: usize,
}

impl VarianceSummary {
    /// Bands with at least one project, for charts that hide empty slices.
    pub fn non_empty(&self) -> impl Iterator<Item = &BandCount> {
        self.bands.iter().filter(|b| b.count > 0)
    }

    /// Count for the first band with this label.
    #[must_use]
    pub fn count_of(&self, label: &str) -> Option<usize> {
        self.bands.iter().find(|b| b.label == label).map(|b| b.count)
    }

    /// Number of projects considered, classified or not.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.classified + self.skipped
    }
}

/// Band counts for one project manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PmVarianceRow {
    /// Project manager.
    pub pm: String,
    /// Counts per band, aligned with [`PmVarianceTable::bands`].
    pub counts: Vec<usize>,
    /// Classified projects for this PM.
    pub total: usize,
    /// Share of all classified projects.
    pub percentage: Percentage,
}

/// Classified projects broken down by PM and band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PmVarianceTable {
    /// Column labels, in band order.
    pub bands: Vec<String>,
    /// One row per PM with at least one classified project, largest first.
    pub rows: Vec<PmVarianceRow>,
    /// Column sums.
    pub totals: Vec<usize>,
    /// All classified projects.
    pub total: usize,
}

impl PmVarianceTable {
    /// Row for a PM.
    #[must_use]
    pub fn row(&self, pm: &str) -> Option<&PmVarianceRow> {
        self.rows.iter().find(|r| r.pm == pm)
    }

    /// Returns true if no project was classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Number of projects assigned to one PM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PmAssignment {
    /// Project manager.
    pub pm: String,
    /// Projects assigned, with or without variance data.
    pub count: usize,
    /// Share of all projects.
    pub percentage: Percentage,
}

/// Project assignment per PM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PmAssignmentSummary {
    /// One row per PM, largest first.
    pub rows: Vec<PmAssignment>,
    /// All projects.
    pub total: usize,
}

impl PmAssignmentSummary {
    /// Count for a PM, zero if absent.
    #[must_use]
    pub fn count_of(&self, pm: &str) -> usize {
        self.rows.iter().find(|r| r.pm == pm).map_or(0, |r| r.count)
    }
}

/// Budget position of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BudgetStatus {
    /// Spent less than planned.
    Underrun,
    /// Neither over nor under.
    #[serde(rename = "On Track")]
    OnTrack,
    /// Spent more than planned.
    Overrun,
}

impl BudgetStatus {
    /// All statuses in report order.
    pub const ALL: [Self; 3] = [Self::Underrun, Self::OnTrack, Self::Overrun];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underrun => "Underrun",
            Self::OnTrack => "On Track",
            Self::Overrun => "Overrun",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Project count for one budget status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetStatusCount {
    /// Status.
    pub status: BudgetStatus,
    /// Number of projects.
    pub count: usize,
    /// Share of all projects.
    pub percentage: Percentage,
}

/// Budget status breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetStatusSummary {
    /// One entry per status, in [`BudgetStatus::ALL`] order.
    pub statuses: Vec<BudgetStatusCount>,
    /// All projects.
    pub total: usize,
}

impl BudgetStatusSummary {
    /// Count for a status.
    #[must_use]
    pub fn count_of(&self, status: BudgetStatus) -> usize {
        self.statuses
            .iter()
            .find(|s| s.status == status)
            .map_or(0, |s| s.count)
    }
}

/// Everything the presentation layer renders for one dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregationReport {
    /// Number of input projects.
    pub total_projects: usize,
    /// Global band histogram.
    pub variance: VarianceSummary,
    /// Variance by PM.
    pub pm_variance: PmVarianceTable,
    /// Assignment by PM.
    pub pm_assignment: PmAssignmentSummary,
    /// Budget status breakdown.
    pub budget_status: BudgetStatusSummary,
}

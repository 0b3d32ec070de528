//! Report aggregation service.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::types::{
    AggregationReport, BandCount, BudgetStatus, BudgetStatusCount, BudgetStatusSummary,
    Percentage, PmAssignment, PmAssignmentSummary, PmVarianceRow, PmVarianceTable,
    VarianceSummary,
};
use crate::project::Project;
use crate::variance::{ThresholdBand, classify_index};

/// Service for aggregating project collections into reports.
pub struct ReportService;

impl ReportService {
    /// Builds the full report for one dataset.
    ///
    /// Every project is classified once and the result shared by the
    /// variance summary and the PM variance table.
    #[must_use]
    pub fn aggregate(projects: &[Project], bands: &[ThresholdBand]) -> AggregationReport {
        let classes = Self::classify_all(projects, bands);

        AggregationReport {
            total_projects: projects.len(),
            variance: Self::summarize(&classes, bands),
            pm_variance: Self::tabulate_by_pm(projects, &classes, bands),
            pm_assignment: Self::pm_assignment(projects),
            budget_status: Self::budget_status(projects),
        }
    }

    /// Counts classified projects per band.
    ///
    /// Projects without variance are reported as skipped and excluded from
    /// the percentage denominator.
    #[must_use]
    pub fn variance_summary(projects: &[Project], bands: &[ThresholdBand]) -> VarianceSummary {
        Self::summarize(&Self::classify_all(projects, bands), bands)
    }

    /// Counts classified projects per PM and band.
    ///
    /// A PM only gets a row if at least one of their projects has variance
    /// data. Rows are ordered by total, largest first; ties keep input order.
    #[must_use]
    pub fn pm_variance(projects: &[Project], bands: &[ThresholdBand]) -> PmVarianceTable {
        Self::tabulate_by_pm(projects, &Self::classify_all(projects, bands), bands)
    }

    /// Counts every project per PM, regardless of variance data.
    #[must_use]
    pub fn pm_assignment(projects: &[Project]) -> PmAssignmentSummary {
        let mut groups = PmGroups::default();
        for project in projects {
            *groups.entry(project.pm_key(), || 0usize) += 1;
        }

        let mut rows: Vec<PmAssignment> = groups
            .into_rows()
            .map(|(pm, count)| PmAssignment {
                pm,
                count,
                percentage: Percentage::of(count, projects.len()),
            })
            .collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count));

        PmAssignmentSummary {
            rows,
            total: projects.len(),
        }
    }

    /// Classifies every project's budget position and counts each status.
    #[must_use]
    pub fn budget_status(projects: &[Project]) -> BudgetStatusSummary {
        let mut counts: HashMap<BudgetStatus, usize> = HashMap::new();
        for project in projects {
            *counts.entry(Self::budget_status_of(project)).or_default() += 1;
        }

        let statuses = BudgetStatus::ALL
            .into_iter()
            .map(|status| {
                let count = counts.get(&status).copied().unwrap_or(0);
                BudgetStatusCount {
                    status,
                    count,
                    percentage: Percentage::of(count, projects.len()),
                }
            })
            .collect();

        BudgetStatusSummary {
            statuses,
            total: projects.len(),
        }
    }

    /// Budget position of one project. Overrun is checked first, so a
    /// project reporting both an overrun and an underrun counts as Overrun.
    #[must_use]
    pub fn budget_status_of(project: &Project) -> BudgetStatus {
        let positive = |value: Option<Decimal>| value.is_some_and(|v| v > Decimal::ZERO);

        if positive(project.budget_overrun) {
            BudgetStatus::Overrun
        } else if positive(project.budget_underrun) {
            BudgetStatus::Underrun
        } else {
            BudgetStatus::OnTrack
        }
    }

    fn classify_all(projects: &[Project], bands: &[ThresholdBand]) -> Vec<Option<usize>> {
        projects
            .iter()
            .map(|p| classify_index(p.variance, bands))
            .collect()
    }

    fn summarize(classes: &[Option<usize>], bands: &[ThresholdBand]) -> VarianceSummary {
        let mut counts = vec![0usize; bands.len()];
        for index in classes.iter().flatten() {
            counts[*index] += 1;
        }
        let classified: usize = counts.iter().sum();

        VarianceSummary {
            bands: bands
                .iter()
                .zip(counts)
                .map(|(band, count)| BandCount {
                    label: band.label.clone(),
                    color: band.color.clone(),
                    count,
                    percentage: Percentage::of(count, classified),
                })
                .collect(),
            classified,
            skipped: classes.len() - classified,
        }
    }

    fn tabulate_by_pm(
        projects: &[Project],
        classes: &[Option<usize>],
        bands: &[ThresholdBand],
    ) -> PmVarianceTable {
        let mut groups = PmGroups::default();
        for (project, class) in projects.iter().zip(classes) {
            let Some(index) = *class else {
                continue;
            };
            groups.entry(project.pm_key(), || vec![0usize; bands.len()])[index] += 1;
        }

        let mut totals = vec![0usize; bands.len()];
        let mut rows: Vec<PmVarianceRow> = groups
            .into_rows()
            .map(|(pm, counts)| {
                for (sum, count) in totals.iter_mut().zip(&counts) {
                    *sum += count;
                }
                PmVarianceRow {
                    pm,
                    total: counts.iter().sum(),
                    counts,
                    percentage: Percentage::zero(),
                }
            })
            .collect();

        let total: usize = totals.iter().sum();
        for row in &mut rows {
            row.percentage = Percentage::of(row.total, total);
        }
        rows.sort_by(|a, b| b.total.cmp(&a.total));

        PmVarianceTable {
            bands: bands.iter().map(|b| b.label.clone()).collect(),
            rows,
            totals,
            total,
        }
    }
}

/// Per-PM accumulators kept in first-seen order.
struct PmGroups<T> {
    positions: HashMap<String, usize>,
    rows: Vec<(String, T)>,
}

impl<T> Default for PmGroups<T> {
    fn default() -> Self {
        Self {
            positions: HashMap::new(),
            rows: Vec::new(),
        }
    }
}

impl<T> PmGroups<T> {
    fn entry(&mut self, pm: &str, init: impl FnOnce() -> T) -> &mut T {
        let slot = match self.positions.get(pm) {
            Some(&slot) => slot,
            None => {
                self.rows.push((pm.to_string(), init()));
                self.positions.insert(pm.to_string(), self.rows.len() - 1);
                self.rows.len() - 1
            }
        };
        &mut self.rows[slot].1
    }

    fn into_rows(self) -> impl Iterator<Item = (String, T)> {
        self.rows.into_iter()
    }
}

//! Cost-efficiency export rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::number::parse_locale_number;
use crate::project::Project;

/// One row of the weekly cost-efficiency export, keyed by column header.
///
/// Cells are kept as the raw strings found in the export; missing columns
/// deserialize as empty cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostEfficiencyRow {
    /// Row number.
    #[serde(rename = "No")]
    pub no: String,
    /// Project status text.
    #[serde(rename = "Status")]
    pub status: String,
    /// Project manager.
    #[serde(rename = "PM")]
    pub pm: String,
    /// Project name.
    #[serde(rename = "Project Name")]
    pub project_name: String,
    /// Total budget.
    #[serde(rename = "Budget-Total")]
    pub budget_total: String,
    /// Budget spent so far.
    #[serde(rename = "Budget-Spent")]
    pub budget_spent: String,
    /// Budget spent, as a percentage of the total.
    #[serde(rename = "Budget-Percentage")]
    pub budget_percentage: String,
    /// Project progress percentage.
    #[serde(rename = "Project_Progress")]
    pub project_progress: String,
    /// Amount over budget.
    #[serde(rename = "Budget_Overrun")]
    pub budget_overrun: String,
    /// Amount under budget.
    #[serde(rename = "Budget_Underrun")]
    pub budget_underrun: String,
}

impl CostEfficiencyRow {
    /// Budget-spent percentage, if the cell parses.
    #[must_use]
    pub fn budget_percentage(&self) -> Option<Decimal> {
        parse_locale_number(&self.budget_percentage)
    }

    /// Progress percentage, if the cell parses.
    #[must_use]
    pub fn progress_percentage(&self) -> Option<Decimal> {
        parse_locale_number(&self.project_progress)
    }

    /// Maps the row onto a [`Project`]. Unparseable numbers become absent.
    #[must_use]
    pub fn to_project(&self) -> Project {
        Project {
            id: non_empty(&self.no),
            name: non_empty(&self.project_name),
            pm: non_empty(&self.pm),
            variance: Project::variance_from(self.budget_percentage(), self.progress_percentage()),
            budget_overrun: parse_locale_number(&self.budget_overrun),
            budget_underrun: parse_locale_number(&self.budget_underrun),
        }
    }
}

impl From<&CostEfficiencyRow> for Project {
    fn from(row: &CostEfficiencyRow) -> Self {
        row.to_project()
    }
}

fn non_empty(cell: &str) -> Option<String> {
    let cell = cell.trim();
    (!cell.is_empty()).then(|| cell.to_string())
}

//! Week dataset input.

use std::path::Path;

use anyhow::Context;
use pmreport_core::Project;
use pmreport_core::ingest::{CostEfficiencyRow, TimesheetRow, detect_timesheet_week};
use pmreport_shared::{AppError, AppResult, WeekId};
use serde::Deserialize;

/// One week of uploaded data.
///
/// Projects may arrive already mapped (`projects`) or as raw export rows
/// (`cost_efficiency`); both are reported together.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WeekDataset {
    /// Week the data belongs to. Detected from the timesheet when absent.
    pub week: Option<WeekId>,
    /// Pre-mapped project records.
    pub projects: Vec<Project>,
    /// Raw cost-efficiency rows keyed by column header.
    pub cost_efficiency: Vec<CostEfficiencyRow>,
    /// Raw timesheet rows keyed by column header.
    pub timesheet: Vec<TimesheetRow>,
}

impl WeekDataset {
    /// Reads a dataset from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(AppError::from)
            .with_context(|| format!("reading {}", path.display()))?;

        Self::from_json(&raw).with_context(|| format!("parsing {}", path.display()))
    }

    /// Parses a dataset from JSON text.
    pub fn from_json(raw: &str) -> AppResult<Self> {
        serde_json::from_str(raw).map_err(|e| AppError::Validation(e.to_string()))
    }

    /// The explicit week, or the one most timesheet entries fall in.
    pub fn week(&self) -> Option<WeekId> {
        self.week.or_else(|| detect_timesheet_week(&self.timesheet))
    }

    /// Number of dated timesheet entries that fall outside `week`.
    pub fn entries_outside(&self, week: WeekId) -> usize {
        self.timesheet
            .iter()
            .filter_map(TimesheetRow::date)
            .filter(|date| !week.contains(*date))
            .count()
    }

    /// All projects, mapped rows after pre-mapped records.
    pub fn projects(&self) -> Vec<Project> {
        self.projects
            .iter()
            .cloned()
            .chain(self.cost_efficiency.iter().map(Project::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_mixed_dataset() {
        let dataset = WeekDataset::from_json(
            r#"{
                "projects": [{ "pm": "Alice", "variance": 5 }],
                "cost_efficiency": [{
                    "PM": "Bob",
                    "Budget-Percentage": "40,5%",
                    "Project_Progress": "30%",
                    "Budget_Overrun": "",
                    "Budget_Underrun": "250"
                }],
                "timesheet": [
                    { "Date": "2026-03-02", "Hour": "8" },
                    { "Date": "2026-03-03", "Hour": "7,5" }
                ]
            }"#,
        )
        .unwrap();

        let projects = dataset.projects();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].pm.as_deref(), Some("Alice"));
        assert_eq!(projects[1].variance, Some(dec!(10.5)));
        assert_eq!(projects[1].budget_underrun, Some(dec!(250)));
        assert_eq!(dataset.week(), Some(WeekId::new(2026, 10).unwrap()));
    }

    #[test]
    fn test_explicit_week_wins() {
        let dataset = WeekDataset::from_json(
            r#"{ "week": "2026-W07", "timesheet": [{ "Date": "2026-03-02" }] }"#,
        )
        .unwrap();
        assert_eq!(dataset.week(), Some(WeekId::new(2026, 7).unwrap()));
    }

    #[test]
    fn test_entries_outside_week() {
        let dataset = WeekDataset::from_json(
            r#"{
                "week": "2026-W10",
                "timesheet": [
                    { "Date": "2026-03-02" },
                    { "Date": "08.03.2026" },
                    { "Date": "2026-03-09" },
                    { "Date": "not a date" }
                ]
            }"#,
        )
        .unwrap();

        let week = WeekId::new(2026, 10).unwrap();
        assert_eq!(dataset.entries_outside(week), 1);
        assert_eq!(dataset.entries_outside(WeekId::new(2026, 11).unwrap()), 2);
    }

    #[test]
    fn test_empty_object_is_empty_dataset() {
        let dataset = WeekDataset::from_json("{}").unwrap();
        assert!(dataset.projects().is_empty());
        assert_eq!(dataset.week(), None);
    }

    #[test]
    fn test_invalid_json_is_validation_error() {
        let err = WeekDataset::from_json("[1, 2").unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = WeekDataset::load(Path::new("no/such/week.json")).unwrap_err();
        let app = err.downcast_ref::<AppError>().unwrap();
        assert!(matches!(app, AppError::NotFound(_)));
    }
}

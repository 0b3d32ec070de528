//! Timesheet export rows and week detection.
//!
//! A timesheet upload is filed under the ISO week most of its entries fall
//! in, so a file exported on Monday morning that still carries a few rows
//! from the previous week lands in the right place.

use std::collections::HashMap;

use chrono::NaiveDate;
use pmreport_shared::WeekId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::number::parse_locale_number;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d.%m.%Y", "%m/%d/%Y"];

/// One row of the weekly timesheet export, keyed by column header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimesheetRow {
    /// Booking date.
    #[serde(rename = "Date")]
    pub date: String,
    /// Person who booked the time.
    #[serde(rename = "User")]
    pub user: String,
    /// Project the time was booked on.
    #[serde(rename = "Project")]
    pub project: String,
    /// Activity type.
    #[serde(rename = "Activity")]
    pub activity: String,
    /// Booked hours.
    #[serde(rename = "Hour")]
    pub hour: String,
}

impl TimesheetRow {
    /// Booking date, if the cell holds a supported date format.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        parse_report_date(&self.date)
    }

    /// Booked hours, if the cell parses.
    #[must_use]
    pub fn hours(&self) -> Option<Decimal> {
        parse_locale_number(&self.hour)
    }
}

/// Parses `YYYY-MM-DD`, `DD.MM.YYYY` or `MM/DD/YYYY`.
#[must_use]
pub fn parse_report_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

/// Returns the ISO week containing the most dates.
///
/// Ties go to the week seen first. `None` when there are no dates.
pub fn detect_week<I>(dates: I) -> Option<WeekId>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut positions: HashMap<WeekId, usize> = HashMap::new();
    let mut tallies: Vec<(WeekId, usize)> = Vec::new();

    for date in dates {
        let week = WeekId::from_date(date);
        let slot = *positions.entry(week).or_insert_with(|| {
            tallies.push((week, 0));
            tallies.len() - 1
        });
        tallies[slot].1 += 1;
    }

    // max_by_key keeps the last maximum, so scan in reverse.
    tallies
        .into_iter()
        .rev()
        .max_by_key(|(_, count)| *count)
        .map(|(week, _)| week)
}

/// Detects the week of a timesheet, ignoring rows without a usable date.
pub fn detect_timesheet_week(rows: &[TimesheetRow]) -> Option<WeekId> {
    detect_week(rows.iter().filter_map(TimesheetRow::date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row(date: &str) -> TimesheetRow {
        TimesheetRow {
            date: date.to_string(),
            hour: "7,5".to_string(),
            ..TimesheetRow::default()
        }
    }

    #[test]
    fn test_parse_report_date_formats() {
        assert_eq!(parse_report_date("2026-03-02"), Some(date(2026, 3, 2)));
        assert_eq!(parse_report_date(" 02.03.2026 "), Some(date(2026, 3, 2)));
        assert_eq!(parse_report_date("03/02/2026"), Some(date(2026, 3, 2)));
        assert_eq!(parse_report_date("yesterday"), None);
        assert_eq!(parse_report_date(""), None);
    }

    #[test]
    fn test_detect_week_majority() {
        let dates = [
            date(2026, 3, 1), // 2026-W09
            date(2026, 3, 2), // 2026-W10
            date(2026, 3, 3),
            date(2026, 3, 6),
        ];
        assert_eq!(detect_week(dates), Some(WeekId::new(2026, 10).unwrap()));
    }

    #[test]
    fn test_detect_week_tie_keeps_first_seen() {
        let dates = [
            date(2026, 3, 2), // W10
            date(2026, 3, 1), // W09
            date(2026, 2, 28),
            date(2026, 3, 3),
        ];
        assert_eq!(detect_week(dates), Some(WeekId::new(2026, 10).unwrap()));
    }

    #[test]
    fn test_detect_week_empty() {
        assert_eq!(detect_week(std::iter::empty()), None);
    }

    #[test]
    fn test_detect_timesheet_week_skips_bad_dates() {
        let rows = vec![row(""), row("not a date"), row("2025-12-30")];
        assert_eq!(
            detect_timesheet_week(&rows),
            Some(WeekId::new(2026, 1).unwrap())
        );
        assert_eq!(detect_timesheet_week(&[row("???")]), None);
    }

    #[test]
    fn test_row_hours() {
        assert_eq!(row("2026-01-05").hours(), Some(rust_decimal_macros::dec!(7.5)));
    }
}

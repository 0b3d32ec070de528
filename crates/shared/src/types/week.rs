//! ISO-8601 week keys for weekly datasets.
//!
//! Every upload is filed under the ISO week it belongs to. The canonical
//! text form is `YYYY-Www` (e.g. `2026-W07`); the unpadded `2026-W7` form
//! is accepted on input.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when building or parsing a [`WeekId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeekError {
    /// Text is not of the form `YYYY-Www`.
    #[error("Malformed week id: {0}")]
    Malformed(String),

    /// The week number does not exist in that ISO year.
    #[error("Week {week} does not exist in ISO year {year}")]
    OutOfRange {
        /// ISO year.
        year: i32,
        /// Week number.
        week: u32,
    },
}

/// An ISO year and week number.
///
/// Ordering is chronological, so sorting a list of week ids and reversing it
/// lists the newest week first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeekId {
    year: i32,
    week: u32,
}

impl WeekId {
    /// Creates a week id, checking that the week exists in the ISO year.
    ///
    /// # Errors
    ///
    /// Returns `WeekError::OutOfRange` for week 0, week 53 in a 52-week
    /// year, and anything above 53.
    pub fn new(year: i32, week: u32) -> Result<Self, WeekError> {
        NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
            .map(|_| Self { year, week })
            .ok_or(WeekError::OutOfRange { year, week })
    }

    /// Returns the ISO week containing `date`.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }

    /// ISO year. May differ from the calendar year around New Year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// ISO week number, 1-53.
    #[must_use]
    pub const fn week(&self) -> u32 {
        self.week
    }

    /// Returns true if `date` falls inside this week.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::from_date(date) == *self
    }

    /// Human-readable label, e.g. `Week 7, 2026`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Week {}, {}", self.week, self.year)
    }
}

impl fmt::Display for WeekId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

impl FromStr for WeekId {
    type Err = WeekError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || WeekError::Malformed(s.to_string());

        let (year, week) = s.trim().split_once("-W").ok_or_else(malformed)?;
        let year = year.parse::<i32>().map_err(|_| malformed())?;
        let week = week.parse::<u32>().map_err(|_| malformed())?;

        Self::new(year, week)
    }
}

impl TryFrom<String> for WeekId {
    type Error = WeekError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WeekId> for String {
    fn from(value: WeekId) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "week_tests.rs"]
mod tests;

//! Field-level mapping of the weekly exports.
//!
//! Splitting files into rows happens upstream; these types take rows keyed
//! by column header and turn locale-formatted cells into typed values.

pub mod cost_efficiency;
pub mod number;
pub mod timesheet;

pub use cost_efficiency::CostEfficiencyRow;
pub use number::parse_locale_number;
pub use timesheet::{TimesheetRow, detect_timesheet_week, detect_week, parse_report_date};

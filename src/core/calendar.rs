//! Fiscal calendar: maps calendar dates to fiscal years and teaching periods
//!
//! Two different half-year splits coexist here on purpose:
//! [`semester_of`] buckets by calendar half (Jan-Jun / Jul-Dec) and is what
//! the filter default uses, while [`term_label`] buckets by teaching term
//! (Apr-Sep / Oct-Mar) and is what display labels use. Neither boundary is
//! aligned with the fiscal-year flip at April; all three are fixed product
//! behavior and must not be unified.

use crate::core::models::Semester;
use chrono::{Datelike, Months, NaiveDate};

/// Error type for fiscal-calendar computations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month value is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month value.
        month: u32,
    },

    /// Returned when a month shift leaves the representable date range.
    #[error("cannot shift {date} back {months} months")]
    ShiftOutOfRange {
        /// The date being shifted.
        date: NaiveDate,
        /// Number of months in the attempted shift.
        months: u32,
    },
}

/// Computes the fiscal year a date belongs to.
///
/// The fiscal year runs April through March: months 1-3 belong to the
/// previous calendar year's fiscal year, months 4-12 to the current one.
/// For example 2022-04 through 2023-03 are all fiscal year 2022.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if the date's month is outside
/// 1..=12. Unreachable with a well-formed [`NaiveDate`]; kept as an explicit
/// failure rather than a sentinel year.
pub fn fiscal_year(date: NaiveDate) -> Result<i32, CalendarError> {
    match date.month() {
        1..=3 => Ok(date.year() - 1),
        4..=12 => Ok(date.year()),
        month => Err(CalendarError::InvalidMonth { month }),
    }
}

/// Buckets a date into the half-year period used for filter defaults.
///
/// Calendar months 1-6 map to [`Semester::FirstHalf`], months 7-12 to
/// [`Semester::SecondHalf`]. Note the boundary is the calendar half, not the
/// April fiscal-year flip.
#[must_use]
pub fn semester_of(date: NaiveDate) -> Semester {
    if date.month() <= 6 {
        Semester::FirstHalf
    } else {
        Semester::SecondHalf
    }
}

/// Short term label for a date: `"前"` for April-September, `"後"` otherwise.
///
/// This split differs from [`semester_of`]'s (it follows the teaching terms,
/// not the calendar halves) and the two are deliberately separate functions.
#[must_use]
pub fn term_label(date: NaiveDate) -> &'static str {
    if (4..=9).contains(&date.month()) {
        "前"
    } else {
        "後"
    }
}

/// Shifts a date back by `months` calendar months, keeping the day-of-month
/// and clamping to the target month's last day when it is shorter.
///
/// # Errors
///
/// Returns [`CalendarError::ShiftOutOfRange`] if the shifted date falls
/// outside the representable range.
pub fn months_back(date: NaiveDate, months: u32) -> Result<NaiveDate, CalendarError> {
    date.checked_sub_months(Months::new(months))
        .ok_or(CalendarError::ShiftOutOfRange { date, months })
}

//! Filter catalog: the selectable time-period options for a course list

use crate::core::calendar::{self, CalendarError};
use crate::core::filter::{FiscalPeriod, Filter, FilterOption};
use crate::core::models::Course;
use crate::debug;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Label of the match-everything sentinel option.
const ALL_LABEL: &str = "すべて";

/// The default selection looks one quarter back: dashboards are opened near
/// the start of a term, before the new term's course data is populated.
const DEFAULT_SHIFT_MONTHS: u32 = 3;

/// The fiscal period used as the default selection for `today`.
///
/// Computed from `today` shifted back three calendar months, so the previous
/// term stays selected through the opening weeks of a new term.
///
/// # Errors
///
/// Returns a [`CalendarError`] when the shifted date cannot be represented or
/// carries an invalid month.
pub fn reference_period(today: NaiveDate) -> Result<FiscalPeriod, CalendarError> {
    let shifted = calendar::months_back(today, DEFAULT_SHIFT_MONTHS)?;
    Ok(FiscalPeriod::new(
        calendar::fiscal_year(shifted)?,
        calendar::semester_of(shifted),
    ))
}

/// The initially selected filter for `today` (the reference period).
///
/// # Errors
///
/// Propagates [`CalendarError`] from [`reference_period`].
pub fn default_filter(today: NaiveDate) -> Result<Filter, CalendarError> {
    Ok(Filter::Period(reference_period(today)?))
}

/// Label describing the current term, e.g. `2024年 前期`.
///
/// Unlike [`default_filter`] this uses `today` unshifted: the control shows
/// the current term's name while the selection defaults to the previous term.
///
/// # Errors
///
/// Propagates [`CalendarError`] from the fiscal-year computation.
pub fn default_filter_label(today: NaiveDate) -> Result<String, CalendarError> {
    Ok(format!(
        "{}年 {}期",
        calendar::fiscal_year(today)?,
        calendar::term_label(today)
    ))
}

/// Builds the full catalog of selectable filters for a course list.
///
/// The catalog starts with the `すべて` sentinel, then one option per
/// distinct `(year, period)` pair among regular lectures (always including
/// the reference period, so the default selection exists even before its
/// courses do), then one option per distinct year. Both sections ascend;
/// the presentation layer renders the list in this exact order.
///
/// # Errors
///
/// Returns a [`CalendarError`] when the reference period cannot be computed.
pub fn build_filters(
    courses: &[Course],
    today: NaiveDate,
) -> Result<Vec<FilterOption>, CalendarError> {
    let mut options = vec![FilterOption::new(ALL_LABEL.to_string(), Filter::All)];

    let mut periods: BTreeSet<FiscalPeriod> = courses
        .iter()
        .filter_map(|course| match course {
            Course::RegularLecture(lecture) => {
                Some(FiscalPeriod::new(lecture.full_year, lecture.semester))
            }
            Course::Special(_) => None,
        })
        .collect();
    periods.insert(reference_period(today)?);

    let years: BTreeSet<i32> = courses
        .iter()
        .filter_map(|course| match course {
            Course::RegularLecture(lecture) => Some(lecture.full_year),
            Course::Special(_) => None,
        })
        .collect();

    options.extend(
        periods
            .iter()
            .map(|period| FilterOption::new(period.label(), Filter::Period(*period))),
    );
    options.extend(
        years
            .iter()
            .map(|year| FilterOption::new(format!("{year}年"), Filter::Year(*year))),
    );

    debug!(
        "filter catalog: {} options ({} periods, {} years)",
        options.len(),
        periods.len(),
        years.len()
    );

    Ok(options)
}

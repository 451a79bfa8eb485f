//! View assembly: everything the presentation layer needs for one render

use crate::core::calendar::CalendarError;
use crate::core::catalog;
use crate::core::filter::{Filter, FilterOption};
use crate::core::models::Course;
use crate::core::ordering::sort_courses;
use chrono::NaiveDate;

/// Render model for the quick course view widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseView {
    /// Selectable filters, in render order
    pub filters: Vec<FilterOption>,
    /// Currently selected filter
    pub selected: Filter,
    /// Courses matching the selection, in display order
    pub courses: Vec<Course>,
}

/// Assembles the render model for a course list and a date.
///
/// When `selected` is `None` the date's default filter is used. The course
/// list is narrowed to the selection and stably sorted; inputs are not
/// mutated, the model owns fresh copies.
///
/// # Errors
///
/// Returns a [`CalendarError`] when the catalog or default selection cannot
/// be computed; the previous render state stays untouched in that case.
pub fn build_view(
    courses: &[Course],
    today: NaiveDate,
    selected: Option<Filter>,
) -> Result<CourseView, CalendarError> {
    let filters = catalog::build_filters(courses, today)?;
    let selected = match selected {
        Some(filter) => filter,
        None => catalog::default_filter(today)?,
    };

    let mut courses: Vec<Course> = courses
        .iter()
        .filter(|course| selected.matches(course))
        .cloned()
        .collect();
    sort_courses(&mut courses);

    Ok(CourseView {
        filters,
        selected,
        courses,
    })
}

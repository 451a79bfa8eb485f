//! Filter values and the course predicate

use crate::core::models::{Course, Semester};
use crate::debug;
use std::fmt;
use std::str::FromStr;

/// A `(fiscal year, teaching period)` pair.
///
/// Derived `Ord` sorts by year, then by the fixed period order, which is the
/// catalog's required ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FiscalPeriod {
    /// Fiscal year (April through March).
    pub year: i32,
    /// Teaching period within the year.
    pub semester: Semester,
}

impl FiscalPeriod {
    /// Create a new fiscal period
    #[must_use]
    pub const fn new(year: i32, semester: Semester) -> Self {
        Self { year, semester }
    }

    /// User-facing label, e.g. `2024年 前期`
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}年 {}", self.year, self.semester.label())
    }
}

/// Error type for parsing serialized filter values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterParseError {
    /// Returned when the year part is not an integer.
    #[error("unparseable filter year: {value:?}")]
    Year {
        /// The offending input.
        value: String,
    },

    /// Returned when the semester part is not a known period code.
    #[error("unknown semester code: {code:?}")]
    UnknownSemester {
        /// The offending code.
        code: String,
    },
}

/// A selection criterion narrowing the displayed course list.
///
/// Serialized as `"all"`, `"<year>"` or `"<year>-<code>"`; the catalog
/// builder is the only producer of these values, so parse failures only
/// occur on hand-typed input and are treated as matching nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    /// Matches every course.
    All,
    /// Matches regular lectures of one academic year, any period.
    Year(i32),
    /// Matches regular lectures of one `(year, period)` pair.
    Period(FiscalPeriod),
}

impl Filter {
    /// Whether a course belongs to the filtered view.
    ///
    /// Special courses only ever match [`Filter::All`]; year- and
    /// period-scoped filters select regular lectures exclusively.
    #[must_use]
    pub fn matches(&self, course: &Course) -> bool {
        match (self, course) {
            (Self::All, _) => true,
            (Self::Year(year), Course::RegularLecture(lecture)) => lecture.full_year == *year,
            (Self::Period(period), Course::RegularLecture(lecture)) => {
                // TODO: also match overlapping periods (1/2 vs full, 1/2 vs 1/4)
                lecture.full_year == period.year && lecture.semester == period.semester
            }
            (Self::Year(_) | Self::Period(_), Course::Special(_)) => false,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Year(year) => write!(f, "{year}"),
            Self::Period(period) => write!(f, "{}-{}", period.year, period.semester.code()),
        }
    }
}

impl FromStr for Filter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        match s.split_once('-') {
            None => {
                let year = s.parse::<i32>().map_err(|_| FilterParseError::Year {
                    value: s.to_string(),
                })?;
                Ok(Self::Year(year))
            }
            Some((year_str, code)) => {
                let year = year_str.parse::<i32>().map_err(|_| FilterParseError::Year {
                    value: year_str.to_string(),
                })?;
                let semester =
                    Semester::from_code(code).ok_or_else(|| FilterParseError::UnknownSemester {
                        code: code.to_string(),
                    })?;
                Ok(Self::Period(FiscalPeriod::new(year, semester)))
            }
        }
    }
}

/// A user-facing catalog entry: display label plus the underlying filter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    /// Label rendered in the filter control
    pub display: String,
    /// Underlying filter value
    pub value: Filter,
}

impl FilterOption {
    /// Create a new filter option
    #[must_use]
    pub const fn new(display: String, value: Filter) -> Self {
        Self { display, value }
    }
}

/// Narrows a course list by a raw serialized filter value.
///
/// A malformed value selects nothing: filter strings are produced by the
/// catalog builder, so an unparseable one is a caller bug, and an empty view
/// is the safe rendering of it.
#[must_use]
pub fn filter_courses(courses: &[Course], raw: &str) -> Vec<Course> {
    match raw.parse::<Filter>() {
        Ok(filter) => courses
            .iter()
            .filter(|course| filter.matches(course))
            .cloned()
            .collect(),
        Err(err) => {
            debug!("ignoring malformed filter value {raw:?}: {err}");
            Vec::new()
        }
    }
}

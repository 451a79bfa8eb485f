//! Course model

use super::{Semester, WeekOfDay};
use serde::{Deserialize, Serialize};

/// A scheduled, recurring lecture with a weekly slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegularLecture {
    /// Academic year the course belongs to (e.g., 2024)
    pub full_year: i32,

    /// Teaching period within the year
    pub semester: Semester,

    /// Day of week the lecture meets
    pub week_of_day: WeekOfDay,

    /// Inclusive `[startSlot, endSlot]` class-period indices within the day
    pub period: [u8; 2],

    /// Unique course code, the final tie-break when sorting
    pub code: u32,

    /// Display name
    pub full_name: String,
}

/// A course without fixed weekly scheduling (intensive, seminar, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Special {
    /// Academic year, absent when the course is year-independent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_year: Option<i32>,

    /// Display name
    pub full_name: String,
}

/// A course record as supplied by the dashboard scraper.
///
/// The wire shape is internally tagged by a `kind` field
/// (`"regular-lecture"` or `"special"`); every record is exactly one of the
/// two variants, and matching on the enum replaces the scraper side's
/// per-call-site tag checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Course {
    /// A scheduled, recurring lecture
    #[serde(rename = "regular-lecture")]
    RegularLecture(RegularLecture),
    /// A course without fixed weekly scheduling
    #[serde(rename = "special")]
    Special(Special),
}

impl RegularLecture {
    /// Create a new regular lecture record
    #[must_use]
    pub const fn new(
        full_year: i32,
        semester: Semester,
        week_of_day: WeekOfDay,
        period: [u8; 2],
        code: u32,
        full_name: String,
    ) -> Self {
        Self {
            full_year,
            semester,
            week_of_day,
            period,
            code,
            full_name,
        }
    }
}

impl Special {
    /// Create a new special course record
    #[must_use]
    pub const fn new(full_year: Option<i32>, full_name: String) -> Self {
        Self {
            full_year,
            full_name,
        }
    }
}

impl Course {
    /// Display name of the course
    #[must_use]
    pub fn full_name(&self) -> &str {
        match self {
            Self::RegularLecture(lecture) => &lecture.full_name,
            Self::Special(special) => &special.full_name,
        }
    }

    /// Academic year, `None` for year-independent special courses
    #[must_use]
    pub const fn full_year(&self) -> Option<i32> {
        match self {
            Self::RegularLecture(lecture) => Some(lecture.full_year),
            Self::Special(special) => special.full_year,
        }
    }

    /// Whether this is a regular (weekly scheduled) lecture
    #[must_use]
    pub const fn is_regular_lecture(&self) -> bool {
        matches!(self, Self::RegularLecture(_))
    }
}

//! Teaching-period codes within a fiscal year

use serde::{Deserialize, Serialize};
use std::fmt;

/// A teaching period within a fiscal year.
///
/// Variants are declared in their fixed total order: chronological by period
/// start within the fiscal year, with a broader period sorting before the
/// quarters it contains (so first-half < second-half, and Q1/Q2 sit between
/// them). The derived `Ord` is the ordering used everywhere a period sort is
/// needed; it is never reconfigured at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Semester {
    /// Full-year course (April through March).
    #[serde(rename = "full")]
    FullYear,
    /// First half (April through September).
    #[serde(rename = "1/2")]
    FirstHalf,
    /// First quarter.
    #[serde(rename = "1/4")]
    Q1,
    /// Second quarter.
    #[serde(rename = "2/4")]
    Q2,
    /// Second half (October through March).
    #[serde(rename = "2/2")]
    SecondHalf,
    /// Third quarter.
    #[serde(rename = "3/4")]
    Q3,
    /// Fourth quarter.
    #[serde(rename = "4/4")]
    Q4,
}

impl Semester {
    /// The wire code used in course records and filter values.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::FullYear => "full",
            Self::FirstHalf => "1/2",
            Self::Q1 => "1/4",
            Self::Q2 => "2/4",
            Self::SecondHalf => "2/2",
            Self::Q3 => "3/4",
            Self::Q4 => "4/4",
        }
    }

    /// The user-facing period label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullYear => "通年",
            Self::FirstHalf => "前期",
            Self::Q1 => "Q1",
            Self::Q2 => "Q2",
            Self::SecondHalf => "後期",
            Self::Q3 => "Q3",
            Self::Q4 => "Q4",
        }
    }

    /// Look up a period by its wire code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "full" => Some(Self::FullYear),
            "1/2" => Some(Self::FirstHalf),
            "1/4" => Some(Self::Q1),
            "2/4" => Some(Self::Q2),
            "2/2" => Some(Self::SecondHalf),
            "3/4" => Some(Self::Q3),
            "4/4" => Some(Self::Q4),
            _ => None,
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_half_before_second_half() {
        assert!(Semester::FirstHalf < Semester::SecondHalf);
    }

    #[test]
    fn test_ordering_is_chronological() {
        let mut periods = vec![
            Semester::Q4,
            Semester::SecondHalf,
            Semester::Q1,
            Semester::FullYear,
            Semester::Q3,
            Semester::FirstHalf,
            Semester::Q2,
        ];
        periods.sort();
        assert_eq!(
            periods,
            vec![
                Semester::FullYear,
                Semester::FirstHalf,
                Semester::Q1,
                Semester::Q2,
                Semester::SecondHalf,
                Semester::Q3,
                Semester::Q4,
            ]
        );
    }

    #[test]
    fn test_code_round_trip() {
        for period in [
            Semester::FullYear,
            Semester::FirstHalf,
            Semester::Q1,
            Semester::Q2,
            Semester::SecondHalf,
            Semester::Q3,
            Semester::Q4,
        ] {
            assert_eq!(Semester::from_code(period.code()), Some(period));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(Semester::from_code("9/9"), None);
        assert_eq!(Semester::from_code(""), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Semester::FirstHalf.label(), "前期");
        assert_eq!(Semester::SecondHalf.label(), "後期");
        assert_eq!(Semester::FullYear.label(), "通年");
    }

    #[test]
    fn test_serde_codes() {
        let json = serde_json::to_string(&Semester::FirstHalf).unwrap();
        assert_eq!(json, "\"1/2\"");
        let parsed: Semester = serde_json::from_str("\"2/2\"").unwrap();
        assert_eq!(parsed, Semester::SecondHalf);
    }
}

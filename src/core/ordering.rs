//! Deterministic course ordering for the filtered view

use crate::core::models::Course;
use std::cmp::Ordering;

/// Year-less special courses sort after every dated entry.
const YEARLESS_SORTS_LAST: i32 = 10_000;

/// Total order over course records.
///
/// Regular lectures sort by year, period, weekday, class-period key, then
/// course code; special courses sort by year (absent year last) then name;
/// every regular lecture sorts before every special course. The ordering is
/// strict (equal keys compare `Equal`), so it is safe for a stable sort.
#[must_use]
pub fn compare_courses(a: &Course, b: &Course) -> Ordering {
    match (a, b) {
        (Course::RegularLecture(a), Course::RegularLecture(b)) => a
            .full_year
            .cmp(&b.full_year)
            .then_with(|| a.semester.cmp(&b.semester))
            .then_with(|| a.week_of_day.cmp(&b.week_of_day))
            .then_with(|| period_key(a.period, b.period))
            .then_with(|| a.code.cmp(&b.code)),
        (Course::Special(a), Course::Special(b)) => a
            .full_year
            .unwrap_or(YEARLESS_SORTS_LAST)
            .cmp(&b.full_year.unwrap_or(YEARLESS_SORTS_LAST))
            .then_with(|| a.full_name.cmp(&b.full_name)),
        (Course::RegularLecture(_), Course::Special(_)) => Ordering::Less,
        (Course::Special(_), Course::RegularLecture(_)) => Ordering::Greater,
    }
}

/// Combined class-period key: end-slot differences outweigh start-slot
/// differences by a factor of ten.
fn period_key(a: [u8; 2], b: [u8; 2]) -> Ordering {
    let diff = (i32::from(a[1]) - i32::from(b[1])) * 10 - (i32::from(a[0]) - i32::from(b[0]));
    diff.cmp(&0)
}

/// Stable in-place sort by [`compare_courses`].
pub fn sort_courses(courses: &mut [Course]) {
    courses.sort_by(compare_courses);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{RegularLecture, Semester, Special, WeekOfDay};

    fn lecture(
        year: i32,
        semester: Semester,
        day: WeekOfDay,
        period: [u8; 2],
        code: u32,
    ) -> Course {
        Course::RegularLecture(RegularLecture::new(
            year,
            semester,
            day,
            period,
            code,
            format!("Course {code}"),
        ))
    }

    fn special(year: Option<i32>, name: &str) -> Course {
        Course::Special(Special::new(year, name.to_string()))
    }

    #[test]
    fn year_takes_precedence() {
        let older = lecture(2023, Semester::SecondHalf, WeekOfDay::Sunday, [5, 6], 999);
        let newer = lecture(2024, Semester::FirstHalf, WeekOfDay::Monday, [1, 2], 1);
        assert_eq!(compare_courses(&older, &newer), Ordering::Less);
        assert_eq!(compare_courses(&newer, &older), Ordering::Greater);
    }

    #[test]
    fn semester_breaks_year_ties() {
        let first = lecture(2024, Semester::FirstHalf, WeekOfDay::Friday, [1, 2], 9);
        let second = lecture(2024, Semester::SecondHalf, WeekOfDay::Monday, [1, 2], 1);
        assert_eq!(compare_courses(&first, &second), Ordering::Less);
    }

    #[test]
    fn weekday_breaks_semester_ties() {
        let monday = lecture(2024, Semester::FirstHalf, WeekOfDay::Monday, [5, 6], 9);
        let tuesday = lecture(2024, Semester::FirstHalf, WeekOfDay::Tuesday, [1, 2], 1);
        assert_eq!(compare_courses(&monday, &tuesday), Ordering::Less);
    }

    #[test]
    fn end_slot_outweighs_start_slot() {
        // a ends earlier but starts later: the end-slot difference dominates.
        let a = lecture(2024, Semester::FirstHalf, WeekOfDay::Monday, [3, 4], 1);
        let b = lecture(2024, Semester::FirstHalf, WeekOfDay::Monday, [1, 5], 2);
        assert_eq!(compare_courses(&a, &b), Ordering::Less);
    }

    #[test]
    fn earlier_start_wins_for_equal_end() {
        let a = lecture(2024, Semester::FirstHalf, WeekOfDay::Monday, [1, 4], 9);
        let b = lecture(2024, Semester::FirstHalf, WeekOfDay::Monday, [2, 4], 1);
        assert_eq!(compare_courses(&a, &b), Ordering::Less);
    }

    #[test]
    fn code_is_final_tie_break() {
        let a = lecture(2024, Semester::FirstHalf, WeekOfDay::Monday, [1, 2], 101);
        let b = lecture(2024, Semester::FirstHalf, WeekOfDay::Monday, [1, 2], 205);
        assert_eq!(compare_courses(&a, &b), Ordering::Less);
        assert_eq!(compare_courses(&a, &a), Ordering::Equal);
    }

    #[test]
    fn regular_lectures_sort_before_special_courses() {
        let lecture = lecture(2099, Semester::Q4, WeekOfDay::Unscheduled, [7, 7], 999);
        let special = special(Some(2000), "Early Seminar");
        assert_eq!(compare_courses(&lecture, &special), Ordering::Less);
        assert_eq!(compare_courses(&special, &lecture), Ordering::Greater);
    }

    #[test]
    fn yearless_special_sorts_after_dated_specials() {
        let dated = special(Some(2024), "Dated");
        let yearless = special(None, "Anytime");
        assert_eq!(compare_courses(&dated, &yearless), Ordering::Less);
    }

    #[test]
    fn special_courses_tie_break_by_name() {
        let a = special(Some(2024), "Alpha");
        let b = special(Some(2024), "Beta");
        assert_eq!(compare_courses(&a, &b), Ordering::Less);
        assert_eq!(compare_courses(&a, &a), Ordering::Equal);
    }

    #[test]
    fn sort_is_deterministic_across_kinds() {
        let mut courses = vec![
            special(None, "Anytime"),
            lecture(2024, Semester::FirstHalf, WeekOfDay::Monday, [1, 2], 101),
            special(Some(2023), "Seminar"),
            lecture(2023, Semester::SecondHalf, WeekOfDay::Tuesday, [3, 4], 50),
        ];
        sort_courses(&mut courses);

        let names: Vec<&str> = courses.iter().map(Course::full_name).collect();
        assert_eq!(names, vec!["Course 50", "Course 101", "Seminar", "Anytime"]);
    }
}

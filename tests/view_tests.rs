//! End-to-end tests: JSON course dump through filtering and ordering

use chrono::NaiveDate;
use quick_course_view::clock::{Clock, FixedClock};
use quick_course_view::filter::{filter_courses, Filter, FiscalPeriod};
use quick_course_view::models::{Course, Semester};
use quick_course_view::ordering::compare_courses;
use quick_course_view::supplier::parse_courses_json;
use quick_course_view::view::build_view;
use std::cmp::Ordering;

const COURSE_DUMP: &str = r#"[
    {
        "kind": "regular-lecture",
        "fullYear": 2024,
        "semester": "1/2",
        "weekOfDay": "monday",
        "period": [1, 2],
        "code": 101,
        "fullName": "Linear Algebra I"
    },
    {
        "kind": "regular-lecture",
        "fullYear": 2023,
        "semester": "2/2",
        "weekOfDay": "tuesday",
        "period": [3, 4],
        "code": 50,
        "fullName": "Statistics"
    },
    {
        "kind": "regular-lecture",
        "fullYear": 2024,
        "semester": "1/2",
        "weekOfDay": "monday",
        "period": [1, 1],
        "code": 210,
        "fullName": "Academic Writing"
    },
    { "kind": "special", "fullYear": 2023, "fullName": "Intensive Seminar" },
    { "kind": "special", "fullName": "Field Work" }
]"#;

fn dump() -> Vec<Course> {
    parse_courses_json(COURSE_DUMP).expect("Failed to parse course dump")
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

#[test]
fn period_filter_selects_exactly_its_pair() {
    let courses = dump();
    let filtered = filter_courses(&courses, "2024-1/2");

    let names: Vec<&str> = filtered.iter().map(Course::full_name).collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"Linear Algebra I"));
    assert!(names.contains(&"Academic Writing"));
}

#[test]
fn all_filter_returns_everything_in_display_order() {
    let courses = dump();
    let view = build_view(&courses, date(2024, 5, 15), Some(Filter::All)).unwrap();

    let names: Vec<&str> = view.courses.iter().map(Course::full_name).collect();
    assert_eq!(
        names,
        vec![
            "Statistics",       // 2023 before 2024
            "Academic Writing", // ends period 1, before the 1-2 lecture
            "Linear Algebra I",
            "Intensive Seminar", // specials after regulars, dated first
            "Field Work",        // year-less special last
        ]
    );
}

#[test]
fn default_view_uses_fixed_clock_date() {
    let clock = FixedClock(date(2024, 5, 15));
    let courses = dump();
    let view = build_view(&courses, clock.today(), None).unwrap();

    assert_eq!(
        view.selected,
        Filter::Period(FiscalPeriod::new(2023, Semester::FirstHalf))
    );
    // The dump has no 2023 first-half course; the selection still appears in
    // the catalog.
    assert!(view.courses.is_empty());
    assert!(view
        .filters
        .iter()
        .any(|option| option.value == view.selected));
}

#[test]
fn catalog_reflects_the_dump() {
    let courses = dump();
    let view = build_view(&courses, date(2024, 5, 15), Some(Filter::All)).unwrap();

    let values: Vec<String> = view
        .filters
        .iter()
        .map(|option| option.value.to_string())
        .collect();
    assert_eq!(
        values,
        vec![
            "all", "2023-1/2", "2023-2/2", "2024-1/2", "2023", "2024",
        ]
    );

    let displays: Vec<&str> = view
        .filters
        .iter()
        .map(|option| option.display.as_str())
        .collect();
    assert_eq!(
        displays,
        vec![
            "すべて",
            "2023年 前期",
            "2023年 後期",
            "2024年 前期",
            "2023年",
            "2024年",
        ]
    );
}

#[test]
fn comparator_is_a_strict_total_order_over_the_dump() {
    let courses = dump();

    for a in &courses {
        assert_eq!(compare_courses(a, a), Ordering::Equal);
        for b in &courses {
            assert_eq!(compare_courses(a, b), compare_courses(b, a).reverse());
            for c in &courses {
                // Transitivity: a <= b and b <= c imply a <= c.
                if compare_courses(a, b) != Ordering::Greater
                    && compare_courses(b, c) != Ordering::Greater
                {
                    assert_ne!(compare_courses(a, c), Ordering::Greater);
                }
            }
        }
    }
}

#[test]
fn every_regular_lecture_sorts_before_every_special() {
    let courses = dump();
    for a in courses.iter().filter(|c| c.is_regular_lecture()) {
        for b in courses.iter().filter(|c| !c.is_regular_lecture()) {
            assert_eq!(compare_courses(a, b), Ordering::Less);
        }
    }
}

#[test]
fn year_filter_excludes_specials_with_matching_year() {
    let courses = dump();
    let filtered = filter_courses(&courses, "2023");

    let names: Vec<&str> = filtered.iter().map(Course::full_name).collect();
    // "Intensive Seminar" is a 2023 special course and must not appear.
    assert_eq!(names, vec!["Statistics"]);
}

#[test]
fn malformed_filter_value_matches_nothing() {
    let courses = dump();
    assert!(filter_courses(&courses, "bogus").is_empty());
    assert!(filter_courses(&courses, "2024-").is_empty());
    assert!(filter_courses(&courses, "-1/2").is_empty());
}

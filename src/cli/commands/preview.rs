//! Preview command handler

use chrono::NaiveDate;
use quick_course_view::catalog;
use quick_course_view::clock::{Clock, SystemClock};
use quick_course_view::config::{Config, QUICK_COURSE_VIEW_FEATURE};
use quick_course_view::filter::Filter;
use quick_course_view::models::Course;
use quick_course_view::supplier::{CourseSupplier, JsonCourseFile};
use quick_course_view::view::build_view;
use quick_course_view::{error, warn};
use std::path::Path;

/// Run the preview command for a course dump file.
///
/// # Arguments
/// * `input_file` - Path to the JSON course dump
/// * `date` - Date to render for; defaults to today
/// * `filter` - Raw filter value to apply; defaults to the date's default filter
/// * `config` - Loaded configuration (feature flags)
/// * `verbose` - Whether to show detailed output
pub fn run(
    input_file: &Path,
    date: Option<NaiveDate>,
    filter: Option<&str>,
    config: &Config,
    verbose: bool,
) {
    if let Err(err) = preview(input_file, date, filter, config, verbose) {
        error!("Preview failed for {}: {err}", input_file.display());
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn preview(
    input_file: &Path,
    date: Option<NaiveDate>,
    filter: Option<&str>,
    config: &Config,
    verbose: bool,
) -> Result<(), String> {
    if !config.feature_enabled(QUICK_COURSE_VIEW_FEATURE) {
        warn!(
            "Feature '{QUICK_COURSE_VIEW_FEATURE}' is disabled in config; the dashboard would not render this view"
        );
    }

    let courses = JsonCourseFile::new(input_file)
        .courses()
        .map_err(|e| format!("✗ Failed to load {}: {e}", input_file.display()))?;

    if verbose {
        println!(
            "✓ Loaded {} courses from: {}",
            courses.len(),
            input_file.display()
        );
    }

    let today = date.unwrap_or_else(|| SystemClock.today());
    let selected = match filter {
        Some(raw) => Some(
            raw.parse::<Filter>()
                .map_err(|e| format!("✗ Invalid filter value {raw:?}: {e}"))?,
        ),
        None => None,
    };

    let view = build_view(&courses, today, selected)
        .map_err(|e| format!("✗ Failed to build course view: {e}"))?;
    let term = catalog::default_filter_label(today)
        .map_err(|e| format!("✗ Failed to compute term label: {e}"))?;

    println!("Current term: {term}  (today: {today})");

    println!("\nFilters:");
    for option in &view.filters {
        let marker = if option.value == view.selected { '*' } else { ' ' };
        let value = option.value.to_string();
        println!("  {marker} {value:<12} {}", option.display);
    }

    println!("\nCourses ({}):", view.courses.len());
    for course in &view.courses {
        println!("  {}", describe(course));
    }

    Ok(())
}

fn describe(course: &Course) -> String {
    match course {
        Course::RegularLecture(lecture) => format!(
            "[{:>6}] {}  {}年 {} {:?} {}-{}",
            lecture.code,
            lecture.full_name,
            lecture.full_year,
            lecture.semester.label(),
            lecture.week_of_day,
            lecture.period[0],
            lecture.period[1],
        ),
        Course::Special(special) => special.full_year.map_or_else(
            || format!("[  spec] {}", special.full_name),
            |year| format!("[  spec] {}  {year}年", special.full_name),
        ),
    }
}

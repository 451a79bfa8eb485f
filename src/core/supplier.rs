//! Course supplier seam and the JSON course-dump loader

use crate::core::models::Course;
use crate::info;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// Source of raw course records.
///
/// The dashboard integration scrapes its page for records; the CLI and tests
/// read a JSON dump instead. The engine only ever sees the resulting list.
pub trait CourseSupplier {
    /// Produce the raw course list.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying source cannot be read or parsed.
    fn courses(&self) -> Result<Vec<Course>, Box<dyn Error>>;
}

/// Parse a JSON array of course records.
///
/// # Errors
///
/// Returns a deserialization error when the input is not a well-formed
/// course array.
pub fn parse_courses_json(input: &str) -> Result<Vec<Course>, serde_json::Error> {
    serde_json::from_str(input)
}

/// Course supplier backed by a JSON dump file.
#[derive(Debug, Clone)]
pub struct JsonCourseFile {
    path: PathBuf,
}

impl JsonCourseFile {
    /// Create a supplier reading from `path`
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CourseSupplier for JsonCourseFile {
    fn courses(&self) -> Result<Vec<Course>, Box<dyn Error>> {
        let content = fs::read_to_string(&self.path)?;
        let courses = parse_courses_json(&content)?;
        info!(
            "Loaded {} courses from {}",
            courses.len(),
            self.path.display()
        );
        Ok(courses)
    }
}

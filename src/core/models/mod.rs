//! Data models for the quick course view engine

pub mod course;
pub mod semester;
pub mod weekday;

pub use course::{Course, RegularLecture, Special};
pub use semester::Semester;
pub use weekday::WeekOfDay;

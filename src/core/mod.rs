//! Core module for the quick course view engine

pub mod calendar;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod filter;
pub mod models;
pub mod ordering;
pub mod supplier;
pub mod view;

/// Returns the current version of the `quick-course-view` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

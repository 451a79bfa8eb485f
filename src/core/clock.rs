//! Clock seam: "today" is injected so tests and replays stay deterministic

use chrono::{Local, NaiveDate};

/// Source of the current date.
pub trait Clock {
    /// The current date as seen by this clock.
    fn today(&self) -> NaiveDate;
}

/// System clock using the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

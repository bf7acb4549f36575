//! Injected date source for record construction
//!
//! Standard records default their registration date to "today". Reading
//! ambient process time inside a constructor makes construction
//! non-deterministic, so the date source is an explicit collaborator instead:
//! production code passes `SystemClock`, tests pass `FixedClock`.

use chrono::{Local, NaiveDate};

/// Source of the current date.
pub trait Clock {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for deterministic construction.
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

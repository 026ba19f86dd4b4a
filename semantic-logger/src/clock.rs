//! Source of the current calendar date.
//!
//! Deadline checks ask a [`Clock`] for today's date instead of reading the
//! system time directly, so the time zone and the clock itself are explicit
//! dependencies.

use chrono::{Local, NaiveDate};

/// Provides the current calendar date.
pub trait Clock: Send + Sync {
    /// Today's date.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system time in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock that always reports the same date.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use semantic_logger::clock::{Clock, FixedClock};
///
/// let date = NaiveDate::from_ymd_opt(2018, 10, 23).unwrap();
/// assert_eq!(FixedClock::new(date).today(), date);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    /// Create a clock frozen at `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}

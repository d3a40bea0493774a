//! # Core Traits Module
//!
//! Capabilities that the site configuration builder receives from the
//! outside instead of reaching for them directly.
//!
//! ## Key Traits
//!
//! - [`Clock`]: source of the current date, used for the footer copyright year
//!
//! Two implementations ship with the crate: [`SystemClock`] reads the local
//! wall clock and [`FixedClock`] always answers with the same date, which
//! makes the builder output fully deterministic in tests and reproducible
//! builds.

use chrono::{Datelike, Local, NaiveDate};

/// Source of the current calendar date.
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;

    /// Returns the current calendar year.
    fn year(&self) -> i32 {
        self.today().year()
    }
}

/// Clock backed by the system time, in the local time zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock that always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    /// Creates a clock frozen at `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Creates a clock frozen at January 1st of `year`.
    ///
    /// Returns `None` when `year` is outside the range chrono can represent.
    pub fn from_year(year: i32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, 1, 1).map(Self)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

//! Validated Gregorian date at or after the epoch.

use std::fmt;

use crate::error::CalendarError;
use crate::gregorian::month_len;
use crate::index::{civil_from_index, day_index};

/// A calendar date on or after 2000-01-01.
///
/// Construction validates the year, month and day, so every `ChimeDate`
/// has a day index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChimeDate {
    year: i32,
    month: u8,
    day: u8,
}

impl ChimeDate {
    /// Creates a new `ChimeDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the year is before the epoch, or the
    /// month or day is invalid for that year.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        day_index(year, month, day)?;
        Ok(Self { year, month, day })
    }

    /// Creates the date that lies `index` days after the epoch.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::IndexOutOfRange`] if the date would fall
    /// after the last day of year `i32::MAX`.
    pub fn from_day_index(index: u64) -> Result<Self, CalendarError> {
        let (year, month, day) = civil_from_index(index)?;
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the number of days since 2000-01-01.
    pub fn day_index(self) -> u64 {
        crate::index::days_before_year(self.year)
            + (1..self.month)
                .map(|m| u64::from(month_len(self.year, m)))
                .sum::<u64>()
            + u64::from(self.day - 1)
    }

    /// Returns the following date, rolling over month and year ends.
    ///
    /// Returns `None` only after December 31 of year `i32::MAX`.
    pub fn next(self) -> Option<Self> {
        if self.day < month_len(self.year, self.month) {
            Some(Self {
                day: self.day + 1,
                ..self
            })
        } else if self.month < 12 {
            Some(Self {
                month: self.month + 1,
                day: 1,
                ..self
            })
        } else {
            Some(Self {
                year: self.year.checked_add(1)?,
                month: 1,
                day: 1,
            })
        }
    }
}

impl fmt::Display for ChimeDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

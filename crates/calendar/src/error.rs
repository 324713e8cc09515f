//! Error types for the chimes-calendar crate.

/// Error type for all fallible operations in the chimes-calendar crate.
///
/// Every variant describes a date the calendar cannot index: a year before
/// the epoch, a month outside 1..=12, a day past the end of its month, or a
/// day index too large to map back to a representable year.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year lies before the epoch year.
    #[error("year {year} is before the epoch year {min}")]
    YearBeforeEpoch {
        /// The year that was provided.
        year: i32,
        /// The earliest supported year.
        min: i32,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number is zero or exceeds the length of its month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The number of days in that month for the given year.
        max_day: u8,
    },

    /// Returned when a day index maps past the last representable year.
    #[error("day index {index} is beyond the last representable date")]
    IndexOutOfRange {
        /// The day index that was provided.
        index: u64,
    },
}

//! Error types for the chimes-chime crate.

use chimes_calendar::CalendarError;
use chimes_factoradic::FactoradicError;

/// Error type for all fallible operations in the chimes-chime crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChimeError {
    /// The start date could not be indexed. The calendar error is passed
    /// through unchanged.
    #[error(transparent)]
    InvalidDate(#[from] CalendarError),

    /// A structural argument to the permutation stage was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] FactoradicError),

    /// Returned when a range of zero days is requested.
    #[error("invalid argument: day count must be at least 1")]
    EmptyRange,

    /// Returned when a bell number is outside 1..=10.
    #[error("invalid bell: {bell} (must be 1..={max})")]
    InvalidBell {
        /// The bell number that was provided.
        bell: u8,
        /// The highest bell number.
        max: u8,
    },

    /// Returned when a range would run past the largest day index.
    #[error("day index overflow: {start} + {offset} exceeds u64::MAX")]
    IndexOverflow {
        /// Day index of the first day in the range.
        start: u64,
        /// Offset of the day that overflowed.
        offset: u64,
    },
}

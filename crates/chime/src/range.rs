//! Day-range generator: dates to chime sequences.

use chimes_calendar::{ChimeDate, day_index};
use chimes_factoradic::{SENTINEL, nth_permutation};

use crate::bell::{BELLS, Bell};
use crate::error::ChimeError;
use crate::sequence::ChimeSequence;

/// Returns the chime sequence for the day `index` days after 2000-01-01.
///
/// The index is expanded into ten factoradic digits, decoded into a
/// permutation of the identifiers `0..=10`, and the sentinel identifier is
/// dropped. The result is always ten distinct bells.
///
/// # Errors
///
/// Returns [`ChimeError::InvalidArgument`] only if the permutation stage
/// rejects its input, which does not happen for the fixed ten-bell setup.
pub fn chime_for_index(index: u64) -> Result<ChimeSequence, ChimeError> {
    let bells = nth_permutation(index, BELLS)?
        .into_iter()
        .filter(|&id| id != SENTINEL)
        .map(Bell::from_identifier)
        .collect();
    Ok(ChimeSequence::from_bells(bells))
}

/// Returns one chime sequence per day for `n_days` days starting at
/// `year-month-day`.
///
/// Day `i` of the range uses day index `day_index(year, month, day) + i`.
///
/// # Errors
///
/// Returns [`ChimeError::InvalidDate`] (carrying the calendar error
/// unchanged) if the start date is invalid, and [`ChimeError::EmptyRange`]
/// if `n_days` is 0.
///
/// # Examples
///
/// ```
/// use chimes_chime::chimes_for_range;
///
/// let chimes = chimes_for_range(2000, 1, 1, 2).unwrap();
/// assert_eq!(chimes[0].numbers(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
/// assert_eq!(chimes[1].numbers(), vec![2, 1, 3, 4, 5, 6, 7, 8, 9, 10]);
/// ```
pub fn chimes_for_range(
    year: i32,
    month: u8,
    day: u8,
    n_days: usize,
) -> Result<Vec<ChimeSequence>, ChimeError> {
    let start = day_index(year, month, day)?;
    chimes_from_index(start, n_days)
}

/// Same as [`chimes_for_range`], for a date that is already validated.
///
/// # Errors
///
/// Returns [`ChimeError::EmptyRange`] if `n_days` is 0.
pub fn chimes_for_dates(start: ChimeDate, n_days: usize) -> Result<Vec<ChimeSequence>, ChimeError> {
    chimes_from_index(start.day_index(), n_days)
}

fn chimes_from_index(start: u64, n_days: usize) -> Result<Vec<ChimeSequence>, ChimeError> {
    if n_days == 0 {
        return Err(ChimeError::EmptyRange);
    }
    (0..n_days as u64)
        .map(|offset| {
            let index = start
                .checked_add(offset)
                .ok_or(ChimeError::IndexOverflow { start, offset })?;
            chime_for_index(index)
        })
        .collect()
}

//! Date sequence generation.

use std::iter;

use crate::date::ChimeDate;

/// Generates a contiguous sequence of dates.
///
/// Starting from `start`, produces `n_days` consecutive dates by repeatedly
/// advancing to the next day. Month ends, year ends and leap days are
/// handled by [`ChimeDate::next`]. The sequence stops early only if it runs
/// past the last representable date.
///
/// # Example
///
/// ```
/// use chimes_calendar::{ChimeDate, date_sequence};
///
/// let start = ChimeDate::new(2000, 12, 30).unwrap();
/// let dates = date_sequence(start, 4);
/// assert_eq!(dates.len(), 4);
/// assert_eq!(dates[2], ChimeDate::new(2001, 1, 1).unwrap());
/// ```
pub fn date_sequence(start: ChimeDate, n_days: usize) -> Vec<ChimeDate> {
    iter::successors(Some(start), |d| d.next())
        .take(n_days)
        .collect()
}

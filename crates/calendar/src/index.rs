//! Linear day index relative to the 2000-01-01 epoch.

use crate::error::CalendarError;
use crate::gregorian::{DAYS_BEFORE_MONTH, EPOCH_YEAR, check_month, check_year, leap, month_len};

/// Days in one full 400-year Gregorian cycle.
const DAYS_PER_CYCLE: u64 = 146_097;

/// Leap days in the years `1..year` of the proleptic Gregorian calendar.
fn leap_days_before(year: i64) -> i64 {
    let y = year - 1;
    y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
}

/// Days from the epoch to January 1 of `year`; `year` must be >= the epoch.
pub(crate) fn days_before_year(year: i32) -> u64 {
    let years = i64::from(year) - i64::from(EPOCH_YEAR);
    let leaps = leap_days_before(year.into()) - leap_days_before(EPOCH_YEAR.into());
    // Both terms are non-negative once the year is validated.
    (365 * years + leaps) as u64
}

fn days_before_month(year: i32, month: u8) -> u16 {
    let extra = u16::from(month > 2 && leap(year));
    DAYS_BEFORE_MONTH[month as usize] + extra
}

/// Converts a calendar date into its day index (2000-01-01 is 0).
///
/// The index is the sum of the lengths of every complete year since the
/// epoch, every complete month of the target year before `month`, and
/// `day - 1`. Complete years are counted in closed form from the Gregorian
/// leap-year rule, so the cost does not grow with the distance from the
/// epoch.
///
/// # Errors
///
/// Returns [`CalendarError::YearBeforeEpoch`] if `year < 2000`,
/// [`CalendarError::InvalidMonth`] if `month` is not in 1..=12, and
/// [`CalendarError::InvalidDay`] if `day` is 0 or past the end of the month.
///
/// # Examples
///
/// ```
/// use chimes_calendar::day_index;
///
/// assert_eq!(day_index(2000, 1, 1).unwrap(), 0);
/// assert_eq!(day_index(2001, 1, 1).unwrap(), 366);
/// assert!(day_index(2024, 2, 30).is_err());
/// ```
pub fn day_index(year: i32, month: u8, day: u8) -> Result<u64, CalendarError> {
    check_year(year)?;
    check_month(month)?;
    let max_day = month_len(year, month);
    if !(1..=max_day).contains(&day) {
        return Err(CalendarError::InvalidDay {
            day,
            month,
            max_day,
        });
    }
    Ok(days_before_year(year) + u64::from(days_before_month(year, month)) + u64::from(day - 1))
}

/// Maps a day index back to `(year, month, day)`.
pub(crate) fn civil_from_index(index: u64) -> Result<(i32, u8, u8), CalendarError> {
    let out_of_range = || CalendarError::IndexOutOfRange { index };

    // The epoch year is itself a multiple of 400, so every cycle starts on a
    // year with the same leap pattern.
    let cycles = index / DAYS_PER_CYCLE;
    let mut rem = index % DAYS_PER_CYCLE;
    let base = i64::from(EPOCH_YEAR) + 400 * cycles as i64;
    let mut year = i32::try_from(base).map_err(|_| out_of_range())?;

    loop {
        let len = if leap(year) { 366 } else { 365 };
        if rem < len {
            break;
        }
        rem -= len;
        year = year.checked_add(1).ok_or_else(out_of_range)?;
    }

    let mut month = 1u8;
    loop {
        let len = u64::from(month_len(year, month));
        if rem < len {
            break;
        }
        rem -= len;
        month += 1;
    }

    Ok((year, month, rem as u8 + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Year-by-year reference sum.
    fn naive_index(year: i32, month: u8, day: u8) -> u64 {
        let mut n = u64::from(day - 1);
        for y in EPOCH_YEAR..year {
            n += if leap(y) { 366 } else { 365 };
        }
        for m in 1..month {
            n += u64::from(month_len(year, m));
        }
        n
    }

    #[test]
    fn epoch_is_zero() {
        assert_eq!(day_index(2000, 1, 1).unwrap(), 0);
    }

    #[test]
    fn known_indices() {
        assert_eq!(day_index(2000, 1, 2).unwrap(), 1);
        assert_eq!(day_index(2000, 3, 1).unwrap(), 60);
        assert_eq!(day_index(2000, 12, 31).unwrap(), 365);
        assert_eq!(day_index(2001, 1, 1).unwrap(), 366);
        assert_eq!(day_index(2024, 1, 1).unwrap(), 8766);
        assert_eq!(day_index(2024, 7, 24).unwrap(), 8971);
        assert_eq!(day_index(2100, 3, 1).unwrap(), 36584);
        assert_eq!(day_index(9999, 12, 31).unwrap(), 2_921_939);
    }

    #[test]
    fn closed_form_matches_naive_sum() {
        for year in (2000..2500).step_by(7) {
            for month in 1..=12u8 {
                for day in [1, 15, month_len(year, month)] {
                    assert_eq!(
                        day_index(year, month, day).unwrap(),
                        naive_index(year, month, day),
                        "mismatch at {year}-{month:02}-{day:02}"
                    );
                }
            }
        }
    }

    #[test]
    fn rejects_pre_epoch_year() {
        assert_eq!(
            day_index(1999, 1, 1).unwrap_err(),
            CalendarError::YearBeforeEpoch {
                year: 1999,
                min: 2000,
            }
        );
    }

    #[test]
    fn rejects_bad_month() {
        assert_eq!(
            day_index(2024, 13, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn rejects_day_past_month_end() {
        assert_eq!(
            day_index(2024, 2, 30).unwrap_err(),
            CalendarError::InvalidDay {
                day: 30,
                month: 2,
                max_day: 29,
            }
        );
        assert_eq!(
            day_index(2023, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                day: 29,
                month: 2,
                max_day: 28,
            }
        );
    }

    #[test]
    fn rejects_day_zero() {
        assert_eq!(
            day_index(2024, 4, 0).unwrap_err(),
            CalendarError::InvalidDay {
                day: 0,
                month: 4,
                max_day: 30,
            }
        );
    }

    #[test]
    fn inverse_of_known_indices() {
        assert_eq!(civil_from_index(0).unwrap(), (2000, 1, 1));
        assert_eq!(civil_from_index(59).unwrap(), (2000, 2, 29));
        assert_eq!(civil_from_index(365).unwrap(), (2000, 12, 31));
        assert_eq!(civil_from_index(366).unwrap(), (2001, 1, 1));
        assert_eq!(civil_from_index(DAYS_PER_CYCLE).unwrap(), (2400, 1, 1));
    }

    #[test]
    fn inverse_rejects_huge_index() {
        assert_eq!(
            civil_from_index(u64::MAX).unwrap_err(),
            CalendarError::IndexOutOfRange { index: u64::MAX }
        );
    }
}

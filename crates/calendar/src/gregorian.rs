//! Leap-year rule and month-length tables for the Gregorian calendar.

use crate::error::CalendarError;

/// First supported year. January 1 of this year is day index 0.
pub const EPOCH_YEAR: i32 = 2000;

/// Number of days in each month of a common year (index 0 unused,
/// index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days elapsed in a common year before the first of each month
/// (index 0 unused, index 1 = January starts after 0 days, ...).
pub(crate) const DAYS_BEFORE_MONTH: [u16; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

pub(crate) fn check_year(year: i32) -> Result<(), CalendarError> {
    if year < EPOCH_YEAR {
        return Err(CalendarError::YearBeforeEpoch {
            year,
            min: EPOCH_YEAR,
        });
    }
    Ok(())
}

pub(crate) fn check_month(month: u8) -> Result<(), CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(())
}

/// Leap-year test without the epoch check, for years already validated.
pub(crate) fn leap(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Month length without validation; `month` must be in 1..=12.
pub(crate) fn month_len(year: i32, month: u8) -> u8 {
    if month == 2 && leap(year) {
        29
    } else {
        DAYS_PER_MONTH[month as usize]
    }
}

/// Returns whether `year` is a leap year.
///
/// A year is a leap year when it is divisible by 4 and either not divisible
/// by 100 or divisible by 400.
///
/// # Errors
///
/// Returns [`CalendarError::YearBeforeEpoch`] if `year` is before
/// [`EPOCH_YEAR`].
///
/// # Examples
///
/// ```
/// use chimes_calendar::is_leap_year;
///
/// assert!(is_leap_year(2000).unwrap());
/// assert!(!is_leap_year(2100).unwrap());
/// assert!(is_leap_year(1999).is_err());
/// ```
pub fn is_leap_year(year: i32) -> Result<bool, CalendarError> {
    check_year(year)?;
    Ok(leap(year))
}

/// Returns the number of days in `year` (365 or 366).
///
/// # Errors
///
/// Returns [`CalendarError::YearBeforeEpoch`] if `year` is before
/// [`EPOCH_YEAR`].
pub fn days_in_year(year: i32) -> Result<u16, CalendarError> {
    Ok(if is_leap_year(year)? { 366 } else { 365 })
}

/// Returns the number of days in `month` of `year`, with February extended
/// to 29 days in leap years.
///
/// # Errors
///
/// Returns [`CalendarError::YearBeforeEpoch`] for years before the epoch and
/// [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    check_year(year)?;
    check_month(month)?;
    Ok(month_len(year, month))
}

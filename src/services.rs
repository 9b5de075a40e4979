//! Month lengths, weekdays and the Hijri to Gregorian direction.
//!
//! Weekdays here are derived by counting elapsed days forward from the
//! epoch, independently of [`crate::cycle::resolve`]. Both paths share only
//! the constant tables.

use crate::consts::{DAYS_PER_CYCLE, DAYS_PER_WEEK, EPOCH_WEEKDAY, HIJRI_EPOCH_JDN, YEARS_PER_CYCLE};
use crate::cycle::{self, cycle_year_length, month_lengths};
use crate::epoch::from_julian_day;
use crate::{CalendarError, GregorianDate, HijriDate};

/// Number of days in a Hijri month.
///
/// Dhu al-Hijjah has 30 days in leap years and 29 otherwise.
///
/// # Errors
/// Returns `CalendarError::InvalidHijriYear` for year 0 and
/// `CalendarError::InvalidHijriMonth` for a month outside 1-12.
///
/// ```
/// # use tabular_hijri::month_length;
/// assert_eq!(month_length(1446, 9).unwrap(), 30);
/// assert_eq!(month_length(1445, 12).unwrap(), 30); // leap year
/// assert_eq!(month_length(1446, 12).unwrap(), 29);
/// ```
pub fn month_length(year: u32, month: u8) -> Result<u8, CalendarError> {
    HijriDate::validate_year_month(year, month)?;
    Ok(days_in_month(year, month))
}

/// Month length without validation. `year` must be non-zero and `month` in 1-12.
pub(crate) const fn days_in_month(year: u32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= 12);
    month_lengths(cycle::is_leap_year(year))[(month - 1) as usize]
}

/// Whether the Hijri year has 355 days.
///
/// # Errors
/// Returns `CalendarError::InvalidHijriYear` for year 0.
///
/// ```
/// # use tabular_hijri::is_leap_year;
/// assert_eq!(is_leap_year(1445), Ok(true));
/// assert_eq!(is_leap_year(1446), Ok(false));
/// ```
pub fn is_leap_year(year: u32) -> Result<bool, CalendarError> {
    validate_year(year)?;
    Ok(cycle::is_leap_year(year))
}

/// Days in the Hijri year, 354 or 355.
///
/// # Errors
/// Returns `CalendarError::InvalidHijriYear` for year 0.
pub fn year_length(year: u32) -> Result<u16, CalendarError> {
    validate_year(year)?;
    Ok(cycle::year_length(year))
}

/// Days from 1 Muharram 1 AH to 1 Muharram of `year`.
///
/// # Errors
/// Returns `CalendarError::InvalidHijriYear` for year 0.
pub fn days_before_year(year: u32) -> Result<i64, CalendarError> {
    validate_year(year)?;
    Ok(days_before(year))
}

fn validate_year(year: u32) -> Result<(), CalendarError> {
    if year == 0 {
        return Err(CalendarError::InvalidHijriYear(year));
    }
    Ok(())
}

/// Unchecked [`days_before_year`] for validated years.
fn days_before(year: u32) -> i64 {
    let completed = year - 1;
    let full_cycles = i64::from(completed / YEARS_PER_CYCLE);
    let partial: i64 = (1..=completed % YEARS_PER_CYCLE)
        .map(|y| i64::from(cycle_year_length(y)))
        .sum();
    full_cycles * DAYS_PER_CYCLE + partial
}

/// Whole days elapsed between the epoch and `date`.
pub(crate) fn elapsed_days(date: HijriDate) -> i64 {
    let lengths = month_lengths(cycle::is_leap_year(date.year()));
    let before_month: i64 = lengths[..usize::from(date.month() - 1)]
        .iter()
        .map(|&d| i64::from(d))
        .sum();
    days_before(date.year()) + before_month + i64::from(date.day()) - 1
}

/// Weekday index of a validated date, 0 = Sunday.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn weekday_of(date: HijriDate) -> u8 {
    (i64::from(EPOCH_WEEKDAY) + elapsed_days(date)).rem_euclid(DAYS_PER_WEEK) as u8
}

/// Day of the week of a Hijri date, 0 = Sunday through 6 = Saturday.
///
/// # Errors
/// Returns a `CalendarError` if the triple is not a valid Hijri date.
///
/// ```
/// # use tabular_hijri::day_of_week;
/// // 1 Muharram 1 AH was a Friday
/// assert_eq!(day_of_week(1, 1, 1).unwrap(), 5);
/// ```
pub fn day_of_week(year: u32, month: u8, day: u8) -> Result<u8, CalendarError> {
    HijriDate::new(year, month, day).map(weekday_of)
}

/// Converts a Hijri date back to the proleptic Gregorian calendar.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if the result is beyond the
/// Gregorian range chrono supports.
pub fn to_gregorian(date: HijriDate) -> Result<GregorianDate, CalendarError> {
    from_julian_day(HIJRI_EPOCH_JDN + elapsed_days(date))
}

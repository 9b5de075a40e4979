//! Gregorian date to Julian Day Number, and JDN to days since the Hijri epoch.

use crate::consts::HIJRI_EPOCH_JDN;
use crate::{CalendarError, GregorianDate};
use chrono::NaiveDate;

/// JDN of the day before 0001-01-01, i.e. chrono's day zero of the common era.
const JDN_OF_CE_DAY_ZERO: i64 = 1_721_425;

/// Converts a proleptic Gregorian date to its Julian Day Number.
///
/// Integer arithmetic only, floor division throughout, so years before 1
/// resolve correctly.
///
/// ```
/// # use tabular_hijri::{GregorianDate, epoch::to_julian_day};
/// let date = GregorianDate::new(2000, 1, 1).unwrap();
/// assert_eq!(to_julian_day(date), 2_451_545);
/// ```
pub fn to_julian_day(date: GregorianDate) -> i64 {
    let year = i64::from(date.year());
    let month = i64::from(date.month());
    let day = i64::from(date.day());

    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Converts a date in the Julian calendar to its Julian Day Number.
///
/// Only used to state the epoch the way it is usually quoted
/// (16 July 622, Julian).
pub fn julian_calendar_to_jdn(year: i64, month: u32, day: u32) -> i64 {
    let month = i64::from(month);
    let day = i64::from(day);

    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - 32083
}

/// Days elapsed since 1 Muharram 1 AH. Negative before the epoch.
pub const fn days_since_hijri_epoch(jdn: i64) -> i64 {
    jdn - HIJRI_EPOCH_JDN
}

/// Converts a Julian Day Number back to a Gregorian date.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` when the day lies outside the range
/// chrono can represent.
pub fn from_julian_day(jdn: i64) -> Result<GregorianDate, CalendarError> {
    i32::try_from(jdn - JDN_OF_CE_DAY_ZERO)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .map(GregorianDate::from)
        .ok_or(CalendarError::OutOfRange { jdn })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn jdn(year: i32, month: u32, day: u32) -> i64 {
        to_julian_day(GregorianDate::new(year, month, day).unwrap())
    }

    #[test]
    fn test_known_julian_day_numbers() {
        assert_eq!(jdn(2000, 1, 1), 2_451_545);
        assert_eq!(jdn(2025, 3, 1), 2_460_736);
        assert_eq!(jdn(1, 1, 1), 1_721_426);
        assert_eq!(jdn(1858, 11, 17), 2_400_001); // MJD zero
    }

    #[test]
    fn test_epoch_in_both_calendars() {
        // 16 July 622 (Julian) is 19 July 622 (proleptic Gregorian)
        assert_eq!(julian_calendar_to_jdn(622, 7, 16), HIJRI_EPOCH_JDN);
        assert_eq!(jdn(622, 7, 19), HIJRI_EPOCH_JDN);
        assert_eq!(days_since_hijri_epoch(HIJRI_EPOCH_JDN), 0);
    }

    #[test]
    fn test_proleptic_years_before_one() {
        // Year 0 is a leap year in the proleptic Gregorian calendar
        assert_eq!(jdn(0, 3, 1) - jdn(0, 2, 28), 2);
        assert_eq!(jdn(1, 1, 1) - jdn(0, 1, 1), 366);
        assert_eq!(jdn(-1, 1, 1) - jdn(-2, 1, 1), 365);
    }

    #[test]
    fn test_days_since_epoch_negative_before_epoch() {
        assert_eq!(days_since_hijri_epoch(jdn(622, 7, 18)), -1);
        assert!(days_since_hijri_epoch(jdn(1, 1, 1)) < 0);
    }

    #[test]
    fn test_agrees_with_chrono_day_count() {
        let mut date = NaiveDate::from_ymd_opt(-400, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2400, 12, 31).unwrap();
        while date <= end {
            let expected = i64::from(date.num_days_from_ce()) + JDN_OF_CE_DAY_ZERO;
            assert_eq!(to_julian_day(date.into()), expected, "mismatch on {date}");
            date = date + chrono::Days::new(97);
        }
    }

    #[test]
    fn test_from_julian_day_inverse() {
        for (y, m, d) in [(2000, 1, 1), (622, 7, 19), (1582, 10, 15), (-44, 3, 15)] {
            let date = GregorianDate::new(y, m, d).unwrap();
            assert_eq!(from_julian_day(to_julian_day(date)), Ok(date));
        }
    }

    #[test]
    fn test_from_julian_day_out_of_range() {
        assert_eq!(
            from_julian_day(i64::MAX / 2),
            Err(CalendarError::OutOfRange { jdn: i64::MAX / 2 })
        );
    }
}

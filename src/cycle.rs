//! Resolves a day count since the Hijri epoch into a Hijri date by walking
//! the fixed 30-year intercalation cycle.

use crate::HijriDate;
use crate::consts::{
    COMMON_YEAR_DAYS, DAYS_PER_CYCLE, DHU_AL_HIJJAH, DHU_AL_HIJJAH_DAYS_LEAP, LEAP_YEAR_DAYS,
    LEAP_YEARS_IN_CYCLE, MAX_MONTH, MIN_DAY, MONTH_LENGTHS, YEARS_PER_CYCLE,
};
use tracing::debug;

/// Whether a position within the cycle (1-30) is a leap year.
pub const fn is_leap_year_in_cycle(year_in_cycle: u32) -> bool {
    let mut i = 0;
    while i < LEAP_YEARS_IN_CYCLE.len() {
        if LEAP_YEARS_IN_CYCLE[i] == year_in_cycle {
            return true;
        }
        i += 1;
    }
    false
}

/// Position of a Hijri year (1-based) within its 30-year cycle, in 1..=30.
///
/// Year 0 does not exist; it is treated as year 1.
pub(crate) const fn year_in_cycle(year: u32) -> u32 {
    year.saturating_sub(1) % YEARS_PER_CYCLE + 1
}

/// Whether the Hijri year has 355 days. Callers validate `year` first.
pub(crate) const fn is_leap_year(year: u32) -> bool {
    is_leap_year_in_cycle(year_in_cycle(year))
}

/// Days in the year at the given position within the cycle.
pub const fn cycle_year_length(year_in_cycle: u32) -> u16 {
    if is_leap_year_in_cycle(year_in_cycle) {
        LEAP_YEAR_DAYS
    } else {
        COMMON_YEAR_DAYS
    }
}

/// Days in the Hijri year (354 or 355). Callers validate `year` first.
pub(crate) const fn year_length(year: u32) -> u16 {
    cycle_year_length(year_in_cycle(year))
}

/// The twelve month lengths for a common or leap year.
///
/// A fresh copy per call: the leap override never touches [`MONTH_LENGTHS`].
pub const fn month_lengths(leap: bool) -> [u8; 12] {
    let mut lengths = MONTH_LENGTHS;
    if leap {
        lengths[(DHU_AL_HIJJAH - 1) as usize] = DHU_AL_HIJJAH_DAYS_LEAP;
    }
    lengths
}

/// Walks the years of one cycle, returning `(year_in_cycle, day_of_year)`
/// with a zero-based day of year.
///
/// `remainder` is normally in `0..DAYS_PER_CYCLE`. A remainder that
/// consumes all 30 years is pinned to the last day of year 30 rather than
/// rolling into a 31st year.
pub(crate) fn locate_year_in_cycle(remainder: i64) -> (u32, i64) {
    let mut remaining = remainder;
    for year in 1..=YEARS_PER_CYCLE {
        let length = i64::from(cycle_year_length(year));
        if remaining < length {
            return (year, remaining);
        }
        remaining -= length;
    }

    let last = i64::from(cycle_year_length(YEARS_PER_CYCLE)) - 1;
    debug!(remainder, "cycle remainder spans all 30 years, clamping to year 30");
    (YEARS_PER_CYCLE, last)
}

/// Walks the months of a year, returning `(month, zero_based_day)`.
pub(crate) fn locate_month(day_of_year: i64, lengths: &[u8; 12]) -> (u8, i64) {
    let mut remaining = day_of_year;
    for (month, &length) in (1..=MAX_MONTH).zip(lengths) {
        let length = i64::from(length);
        if remaining < length {
            return (month, remaining);
        }
        remaining -= length;
    }

    debug!(day_of_year, "day of year past the last month, clamping");
    (MAX_MONTH, i64::from(lengths[usize::from(MAX_MONTH - 1)]) - 1)
}

/// Converts days since the Hijri epoch into a Hijri date.
///
/// Division and remainder are floored, so negative input lands in the
/// correct (pre-epoch) cycle before the final clamp pins the year to 1.
/// Callers reject pre-epoch input first; the clamp only keeps the
/// [`HijriDate`] invariants intact.
pub fn resolve(days: i64) -> HijriDate {
    let cycle = days.div_euclid(DAYS_PER_CYCLE);
    let remainder = days.rem_euclid(DAYS_PER_CYCLE);

    let (year_in_cycle, day_of_year) = locate_year_in_cycle(remainder);
    let raw_year = cycle * i64::from(YEARS_PER_CYCLE) + i64::from(year_in_cycle);

    let lengths = month_lengths(is_leap_year_in_cycle(year_in_cycle));
    let (month, day_in_month) = locate_month(day_of_year, &lengths);

    clamp_to_valid(raw_year, month, day_in_month + 1, &lengths)
}

/// Restores the `HijriDate` invariants on pathological input.
fn clamp_to_valid(raw_year: i64, month: u8, raw_day: i64, lengths: &[u8; 12]) -> HijriDate {
    let year = u32::try_from(raw_year.max(1)).unwrap_or(u32::MAX);
    let month = month.clamp(1, MAX_MONTH);
    let max_day = lengths[usize::from(month - 1)];
    let day = u8::try_from(raw_day.clamp(i64::from(MIN_DAY), i64::from(max_day)))
        .unwrap_or(max_day);

    if i64::from(year) != raw_year || i64::from(day) != raw_day {
        debug!(raw_year, month, raw_day, year, day, "clamped resolved Hijri date");
    }

    HijriDate::from_parts_unchecked(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_set_size_and_cycle_total() {
        let leap_years = (1..=YEARS_PER_CYCLE)
            .filter(|&y| is_leap_year_in_cycle(y))
            .count();
        assert_eq!(leap_years, 11);

        let total: i64 = (1..=YEARS_PER_CYCLE)
            .map(|y| i64::from(cycle_year_length(y)))
            .sum();
        assert_eq!(total, DAYS_PER_CYCLE);
    }

    #[test]
    fn test_every_cycle_has_eleven_leap_years() {
        for cycle in 0..100 {
            let first = cycle * YEARS_PER_CYCLE + 1;
            let days: u32 = (first..first + YEARS_PER_CYCLE)
                .map(|y| u32::from(year_length(y)))
                .sum();
            assert_eq!(i64::from(days), DAYS_PER_CYCLE, "cycle {cycle}");
        }
    }

    #[test]
    fn test_leap_set_exact() {
        let expected = [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29];
        for y in 1..=YEARS_PER_CYCLE {
            assert_eq!(is_leap_year_in_cycle(y), expected.contains(&y), "year {y}");
        }
        assert!(!is_leap_year_in_cycle(0));
        assert!(!is_leap_year_in_cycle(31));
    }

    #[test]
    fn test_year_in_cycle_wraps() {
        assert_eq!(year_in_cycle(1), 1);
        assert_eq!(year_in_cycle(30), 30);
        assert_eq!(year_in_cycle(31), 1);
        assert_eq!(year_in_cycle(1446), 6);
    }

    #[test]
    fn test_year_zero_does_not_wrap() {
        assert_eq!(year_in_cycle(0), 1);
        assert!(!is_leap_year(0));
        assert_eq!(year_length(0), COMMON_YEAR_DAYS);
    }

    #[test]
    fn test_month_lengths_override() {
        let common = month_lengths(false);
        let leap = month_lengths(true);
        assert_eq!(common[11], 29);
        assert_eq!(leap[11], 30);
        assert_eq!(common[..11], leap[..11]);
        assert_eq!(common.iter().map(|&d| u16::from(d)).sum::<u16>(), COMMON_YEAR_DAYS);
        assert_eq!(leap.iter().map(|&d| u16::from(d)).sum::<u16>(), LEAP_YEAR_DAYS);
        // The shared table is never mutated
        assert_eq!(MONTH_LENGTHS[11], 29);
    }

    #[test]
    fn test_locate_year_in_cycle_boundaries() {
        assert_eq!(locate_year_in_cycle(0), (1, 0));
        assert_eq!(locate_year_in_cycle(353), (1, 353));
        assert_eq!(locate_year_in_cycle(354), (2, 0));
        // Year 2 is a leap year
        assert_eq!(locate_year_in_cycle(354 + 354), (2, 354));
        assert_eq!(locate_year_in_cycle(354 + 355), (3, 0));
        assert_eq!(locate_year_in_cycle(DAYS_PER_CYCLE - 1), (30, 353));
    }

    #[test]
    fn test_locate_year_in_cycle_clamps_full_span() {
        // A remainder that consumes every year must not roll into year 31
        assert_eq!(locate_year_in_cycle(DAYS_PER_CYCLE), (30, 353));
        assert_eq!(locate_year_in_cycle(DAYS_PER_CYCLE + 500), (30, 353));
    }

    #[test]
    fn test_locate_month() {
        let lengths = month_lengths(false);
        assert_eq!(locate_month(0, &lengths), (1, 0));
        assert_eq!(locate_month(29, &lengths), (1, 29));
        assert_eq!(locate_month(30, &lengths), (2, 0));
        assert_eq!(locate_month(236, &lengths), (9, 0));
        assert_eq!(locate_month(353, &lengths), (12, 28));
        // Past the end of a common year
        assert_eq!(locate_month(354, &lengths), (12, 28));

        let leap = month_lengths(true);
        assert_eq!(locate_month(354, &leap), (12, 29));
    }

    #[test]
    fn test_resolve_epoch() {
        assert_eq!(resolve(0), HijriDate::from_parts_unchecked(1, 1, 1));
    }

    #[test]
    fn test_resolve_first_year_end() {
        // Year 1 is common: day 353 is 29 Dhu al-Hijjah 1
        assert_eq!(resolve(353), HijriDate::from_parts_unchecked(1, 12, 29));
        assert_eq!(resolve(354), HijriDate::from_parts_unchecked(2, 1, 1));
        // Year 2 is leap: it ends on 30 Dhu al-Hijjah
        assert_eq!(resolve(354 + 354), HijriDate::from_parts_unchecked(2, 12, 30));
        assert_eq!(resolve(354 + 355), HijriDate::from_parts_unchecked(3, 1, 1));
    }

    #[test]
    fn test_resolve_cycle_boundary() {
        assert_eq!(
            resolve(DAYS_PER_CYCLE - 1),
            HijriDate::from_parts_unchecked(30, 12, 29)
        );
        assert_eq!(resolve(DAYS_PER_CYCLE), HijriDate::from_parts_unchecked(31, 1, 1));
        assert_eq!(
            resolve(2 * DAYS_PER_CYCLE),
            HijriDate::from_parts_unchecked(61, 1, 1)
        );
    }

    #[test]
    fn test_resolve_known_dates() {
        // 2025-03-01 is 512296 days after the epoch
        assert_eq!(resolve(512_296), HijriDate::from_parts_unchecked(1446, 9, 1));
        // 2000-01-01
        assert_eq!(resolve(503_105), HijriDate::from_parts_unchecked(1420, 9, 24));
    }

    #[test]
    fn test_resolve_negative_is_clamped_not_wrapped() {
        // Floor semantics put day -1 at the end of cycle -1, i.e. year 0;
        // the clamp then pins the year to 1 while month/day stay in range.
        let date = resolve(-1);
        assert_eq!(date.year(), 1);
        assert_eq!(date.month(), 12);
        assert_eq!(date.day(), 29);

        let date = resolve(-10 * DAYS_PER_CYCLE - 17);
        assert_eq!(date.year(), 1);
        assert!((1..=12).contains(&date.month()));
    }
}

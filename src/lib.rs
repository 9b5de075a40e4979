//! # tabular_hijri
//!
//! Arithmetic conversion from the proleptic Gregorian calendar to the
//! tabular Islamic (Hijri) calendar.
//!
//! Dates pass through a Julian Day Number, then through the fixed 30-year
//! intercalation cycle in which years 2, 5, 7, 10, 13, 16, 18, 21, 24, 26
//! and 29 have 355 days and the rest 354. This is an approximation: it may
//! differ by a day from locally announced dates, which depend on sighting
//! the new moon.
//!
//! ```
//! use tabular_hijri::{GregorianDate, to_hijri, day_of_week, find_observance};
//!
//! let hijri = to_hijri(GregorianDate::new(2025, 3, 1).unwrap()).unwrap();
//! assert_eq!(hijri.to_string(), "1446-09-01");
//! assert_eq!(hijri.month_name(), "Ramadhan");
//! assert_eq!(day_of_week(1446, 9, 1).unwrap(), 6); // Saturday
//! assert!(find_observance(hijri.month(), hijri.day()).is_some());
//! ```
//!
//! Everything is a pure function over `const` tables; no state is shared
//! or mutated, so all of it is safe to call from any thread.

mod calendar;
mod config;
mod consts;
pub mod cycle;
pub mod epoch;
mod grid;
mod observance;
mod prelude;
mod services;
mod types;

pub use calendar::HijriCalendar;
pub use config::{CalendarConfig, ConfigError, WeekStart};
pub use consts::*;
pub use grid::{CalendarCell, MonthGrid};
pub use observance::{
    OBSERVANCES, Observance, ObservanceCategory, ObservanceDate, find_duplicate, find_observance,
    find_observance_in,
};
pub use services::{
    day_of_week, days_before_year, is_leap_year, month_length, to_gregorian, year_length,
};
pub use types::GregorianDate;

use crate::prelude::*;
use std::str::FromStr;
use tracing::{debug, trace};
use types::{parse_component, split_iso_date};

/// Error type for all fallible calendar operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The Gregorian month or day does not exist.
    #[error("invalid Gregorian date: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Hijri years start at 1.
    #[error("invalid Hijri year: {0} (must be at least 1)")]
    InvalidHijriYear(u32),

    #[error("invalid Hijri month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidHijriMonth(u8),

    /// The day exceeds the month's length in that year.
    #[error("invalid Hijri day {day} for {year}-{month:02} (max {max})")]
    InvalidHijriDay {
        year: u32,
        month: u8,
        day: u8,
        max: u8,
    },

    /// The Gregorian date precedes 1 Muharram 1 AH.
    #[error("{date} is before the Hijri epoch (1 Muharram 1 AH)")]
    DateBeforeEpoch { date: GregorianDate },

    /// The result cannot be represented as a Gregorian date.
    #[error("Julian day {jdn} is outside the supported Gregorian range")]
    OutOfRange { jdn: i64 },

    #[error("invalid date format: {0}")]
    InvalidFormat(String),

    #[error("empty date string")]
    EmptyInput,
}

/// A date in the tabular Hijri calendar.
///
/// Always valid: `year >= 1`, `month` in 1-12, and `day` within that
/// month's length for that year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct HijriDate {
    year: u32,
    month: u8,
    day: u8,
}

impl HijriDate {
    /// Creates a new Hijri date
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidHijriYear`, `InvalidHijriMonth` or
    /// `InvalidHijriDay` for out-of-range components, including
    /// 30 Dhu al-Hijjah in a common year.
    pub fn new(year: u32, month: u8, day: u8) -> Result<Self, CalendarError> {
        Self::validate_year_month(year, month)?;
        let max = services::days_in_month(year, month);
        if !(MIN_DAY..=max).contains(&day) {
            return Err(CalendarError::InvalidHijriDay {
                year,
                month,
                day,
                max,
            });
        }
        Ok(Self { year, month, day })
    }

    pub(crate) fn validate_year_month(year: u32, month: u8) -> Result<(), CalendarError> {
        if year == 0 {
            return Err(CalendarError::InvalidHijriYear(year));
        }
        if month == 0 || month > MAX_MONTH {
            return Err(CalendarError::InvalidHijriMonth(month));
        }
        Ok(())
    }

    /// For components the caller has already range-checked
    pub(crate) const fn from_parts_unchecked(year: u32, month: u8, day: u8) -> Self {
        debug_assert!(year != 0 && month != 0 && month <= MAX_MONTH && day != 0);
        Self { year, month, day }
    }

    /// Returns the year (1-based, AH)
    #[inline]
    pub const fn year(self) -> u32 {
        self.year
    }

    /// Returns the month (1-12)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day of the month (1-30)
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// English name of the month
    pub const fn month_name(self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Whether this date's year has 355 days
    pub const fn is_leap_year(self) -> bool {
        cycle::is_leap_year(self.year)
    }

    /// Days in this date's month
    pub const fn month_length(self) -> u8 {
        services::days_in_month(self.year, self.month)
    }

    /// Weekday index, 0 = Sunday
    pub fn weekday(self) -> u8 {
        services::weekday_of(self)
    }

    /// Observance on this month and day in the built-in table
    pub fn observance(self) -> Option<&'static Observance> {
        find_observance(self.month, self.day)
    }

    /// The equivalent proleptic Gregorian date
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` past chrono's representable range.
    pub fn to_gregorian(self) -> Result<GregorianDate, CalendarError> {
        services::to_gregorian(self)
    }

    /// The following day. Returns `None` only if the year would overflow.
    pub fn succ(self) -> Option<Self> {
        if self.day < self.month_length() {
            Some(Self::from_parts_unchecked(self.year, self.month, self.day + 1))
        } else if self.month < MAX_MONTH {
            Some(Self::from_parts_unchecked(self.year, self.month + 1, MIN_DAY))
        } else {
            self.year
                .checked_add(1)
                .map(|year| Self::from_parts_unchecked(year, MUHARRAM, MIN_DAY))
        }
    }

    /// The preceding day, or `None` on 1 Muharram 1 AH.
    pub fn pred(self) -> Option<Self> {
        if self.day > MIN_DAY {
            Some(Self::from_parts_unchecked(self.year, self.month, self.day - 1))
        } else if self.month > MUHARRAM {
            let month = self.month - 1;
            let day = services::days_in_month(self.year, month);
            Some(Self::from_parts_unchecked(self.year, month, day))
        } else if self.year > 1 {
            let year = self.year - 1;
            let day = services::days_in_month(year, DHU_AL_HIJJAH);
            Some(Self::from_parts_unchecked(year, DHU_AL_HIJJAH, day))
        } else {
            None
        }
    }
}

impl FromStr for HijriDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = split_iso_date(s)?;
        Self::new(
            parse_component(year)?,
            parse_component(month)?,
            parse_component(day)?,
        )
    }
}

impl TryFrom<(u32, u8, u8)> for HijriDate {
    type Error = CalendarError;

    fn try_from(value: (u32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl serde::Serialize for HijriDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for HijriDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Converts a Gregorian date to the tabular Hijri calendar.
///
/// # Errors
/// Returns `CalendarError::DateBeforeEpoch` for dates before
/// 1 Muharram 1 AH (19 July 622 Gregorian, 16 July 622 Julian).
pub fn to_hijri(date: GregorianDate) -> Result<HijriDate, CalendarError> {
    convert_jdn(epoch::to_julian_day(date), date)
}

/// Converts a Julian Day Number, reporting errors against `date`.
pub(crate) fn convert_jdn(jdn: i64, date: GregorianDate) -> Result<HijriDate, CalendarError> {
    let days = epoch::days_since_hijri_epoch(jdn);
    if days < 0 {
        debug!(%date, days, "rejecting date before the Hijri epoch");
        return Err(CalendarError::DateBeforeEpoch { date });
    }

    let hijri = cycle::resolve(days);
    trace!(%date, jdn, %hijri, "converted to Hijri");
    Ok(hijri)
}

/// Builds the six-week grid for a Gregorian month with the default
/// configuration and the built-in observance table.
///
/// # Errors
/// See [`HijriCalendar::month_grid`].
pub fn month_grid(
    year: i32,
    month: u32,
    today: Option<GregorianDate>,
) -> Result<MonthGrid<'static>, CalendarError> {
    HijriCalendar::default().month_grid(year, month, today)
}

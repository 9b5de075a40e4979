use crate::consts::DATE_SEPARATOR;
use crate::epoch;
use crate::prelude::*;
use crate::CalendarError;
use chrono::{Datelike, NaiveDate};
use std::str::FromStr;

/// A proleptic Gregorian calendar date, validated on construction.
///
/// Backed by [`NaiveDate`], so the representable years are chrono's
/// (roughly ±262 000). Gregorian weekdays come from chrono; the Hijri
/// side computes its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "_0.year()", "_0.month()", "_0.day()")]
pub struct GregorianDate(NaiveDate);

impl GregorianDate {
    /// Creates a new Gregorian date
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the month is not 1-12 or the
    /// day does not exist in that month (e.g. February 30th).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(CalendarError::InvalidDate { year, month, day })
    }

    /// Returns the year (may be zero or negative for proleptic dates)
    #[inline]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1-12)
    #[inline]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Returns the day of the month (1-31)
    #[inline]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Weekday index, 0 = Sunday
    #[allow(clippy::cast_possible_truncation)]
    pub fn weekday(self) -> u8 {
        self.0.weekday().num_days_from_sunday() as u8
    }

    /// Julian Day Number of this date
    pub fn julian_day(self) -> i64 {
        epoch::to_julian_day(self)
    }

    /// The following day, or `None` past chrono's last representable date
    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// The preceding day, or `None` before chrono's first representable date
    pub fn pred(self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }

    /// Returns the underlying chrono date
    #[inline]
    pub const fn naive(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for GregorianDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<GregorianDate> for NaiveDate {
    fn from(date: GregorianDate) -> Self {
        date.0
    }
}

impl FromStr for GregorianDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = split_iso_date(s)?;
        let year = year
            .parse::<i32>()
            .map_err(|_| CalendarError::InvalidFormat(year.to_owned()))?;
        let month = parse_component(month)?;
        let day = parse_component(day)?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// Helper functions

/// Splits `YYYY-MM-DD` into its three trimmed components.
///
/// A leading separator is the sign of a negative year and stays on the
/// year component, so `-044-03-15` splits as `("-044", "03", "15")`.
pub(crate) fn split_iso_date(s: &str) -> Result<(&str, &str, &str), CalendarError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(CalendarError::EmptyInput);
    }

    let sign_len = if trimmed.starts_with(DATE_SEPARATOR) {
        DATE_SEPARATOR.len_utf8()
    } else {
        0
    };
    let parts: Vec<&str> = trimmed[sign_len..].split(DATE_SEPARATOR).collect();
    match parts.as_slice() {
        [year, month, day] => Ok((
            trimmed[..sign_len + year.len()].trim(),
            month.trim(),
            day.trim(),
        )),
        _ => Err(CalendarError::InvalidFormat(format!(
            "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s) in {trimmed:?}",
            parts.len()
        ))),
    }
}

/// Parses a month or day component with a format error on garbage.
pub(crate) fn parse_component<T: FromStr>(s: &str) -> Result<T, CalendarError> {
    s.parse::<T>()
        .map_err(|_| CalendarError::InvalidFormat(s.to_owned()))
}

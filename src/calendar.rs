use crate::config::{CalendarConfig, ConfigError};
use crate::epoch::to_julian_day;
use crate::grid::{self, MonthGrid};
use crate::observance::{OBSERVANCES, Observance, find_observance_in};
use crate::{CalendarError, GregorianDate, HijriDate, convert_jdn};

/// A configured calendar: conversion settings plus the observance table to
/// annotate dates with.
///
/// Cheap to copy; holds no mutable state and may be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct HijriCalendar<'a> {
    config: CalendarConfig,
    observances: &'a [Observance],
}

impl Default for HijriCalendar<'static> {
    fn default() -> Self {
        Self {
            config: CalendarConfig::default(),
            observances: OBSERVANCES,
        }
    }
}

impl HijriCalendar<'static> {
    /// Creates a calendar using the built-in observance table.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidDayOffset` if the config's `day_offset`
    /// is out of range.
    pub fn new(config: CalendarConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            observances: OBSERVANCES,
        })
    }
}

impl<'a> HijriCalendar<'a> {
    /// Replaces the observance table
    pub const fn with_observances<'b>(self, observances: &'b [Observance]) -> HijriCalendar<'b> {
        HijriCalendar {
            config: self.config,
            observances,
        }
    }

    /// Returns the active configuration
    pub const fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Returns the observance table
    pub const fn observances(&self) -> &'a [Observance] {
        self.observances
    }

    /// Converts a Gregorian date, applying the configured `day_offset`.
    ///
    /// # Errors
    /// Returns `CalendarError::DateBeforeEpoch` if the shifted date falls
    /// before 1 Muharram 1 AH.
    pub fn to_hijri(&self, date: GregorianDate) -> Result<HijriDate, CalendarError> {
        convert_jdn(to_julian_day(date) + i64::from(self.config.day_offset), date)
    }

    /// Observance falling on `date`, if any
    pub fn observance(&self, date: HijriDate) -> Option<&'a Observance> {
        find_observance_in(self.observances, date.month(), date.day())
    }

    /// Builds the six-week grid for a Gregorian month.
    ///
    /// # Errors
    /// See [`grid::month_grid`].
    pub fn month_grid(
        &self,
        year: i32,
        month: u32,
        today: Option<GregorianDate>,
    ) -> Result<MonthGrid<'a>, CalendarError> {
        grid::month_grid(self, year, month, today)
    }
}

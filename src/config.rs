use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::MAX_DAY_OFFSET;

/// First column of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
    Saturday,
}

impl WeekStart {
    /// Weekday index of the first column, 0 = Sunday
    pub const fn index(self) -> u8 {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Saturday => 6,
        }
    }
}

/// Settings for a [`crate::HijriCalendar`], usually read from TOML.
///
/// ```toml
/// week_start = "monday"
/// day_offset = -1
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    /// First day of the week in month grids.
    #[serde(default)]
    pub week_start: WeekStart,

    /// Days added to the Gregorian date before conversion, for users whose
    /// local announcement runs ahead of or behind the tabular date.
    #[serde(default)]
    pub day_offset: i8,
}

/// Error type for loading a [`CalendarConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read calendar config: {0}")]
    Io(#[from] std::io::Error),

    /// The config text is not valid TOML or has unknown keys.
    #[error("failed to parse calendar config: {0}")]
    Parse(#[from] toml::de::Error),

    /// `day_offset` is outside the accepted range.
    #[error("invalid day offset: {0} (must be -{max}..={max})", max = MAX_DAY_OFFSET)]
    InvalidDayOffset(i8),
}

impl CalendarConfig {
    /// Parses and validates a config from TOML text.
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` on malformed TOML and
    /// `ConfigError::InvalidDayOffset` if the offset is out of range.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a config file.
    ///
    /// # Errors
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise as
    /// [`Self::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded calendar config");
        Self::from_toml_str(&text)
    }

    /// Checks the value ranges serde cannot express.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidDayOffset` if `|day_offset| > 2`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(-MAX_DAY_OFFSET..=MAX_DAY_OFFSET).contains(&self.day_offset) {
            return Err(ConfigError::InvalidDayOffset(self.day_offset));
        }
        Ok(())
    }
}

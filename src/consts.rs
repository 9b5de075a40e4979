/// Julian Day Number of 1 Muharram 1 AH (16 July 622, Julian reckoning)
pub const HIJRI_EPOCH_JDN: i64 = 1_948_440;

/// Weekday of the epoch day, 0 = Sunday. JDN 1948440 fell on a Friday.
pub const EPOCH_WEEKDAY: u8 = 5;

/// Years in one intercalation cycle
pub const YEARS_PER_CYCLE: u32 = 30;

/// Days in one 30-year cycle: 19 * 354 + 11 * 355
pub const DAYS_PER_CYCLE: i64 = 10_631;

/// Length of a common (non-leap) Hijri year
pub const COMMON_YEAR_DAYS: u16 = 354;
/// Length of a leap Hijri year
pub const LEAP_YEAR_DAYS: u16 = 355;

/// Positions within the 30-year cycle that are leap years.
/// Observance dates were authored against this exact set; do not swap it
/// for another tabular variant.
pub const LEAP_YEARS_IN_CYCLE: [u32; 11] = [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29];

/// Maximum valid month (Dhu al-Hijjah)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for Muharram
pub const MUHARRAM: u8 = 1;
/// Month number for Ramadhan
pub const RAMADHAN: u8 = 9;
/// Month number for Dhu al-Hijjah, the month that absorbs the leap day
pub const DHU_AL_HIJJAH: u8 = 12;

/// Days in Dhu al-Hijjah in a leap year
pub const DHU_AL_HIJJAH_DAYS_LEAP: u8 = 30;

/// Default month lengths (index 0 is Muharram), alternating 30/29.
/// Dhu al-Hijjah is overridden to 30 per lookup in leap years.
pub const MONTH_LENGTHS: [u8; 12] = [30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29];

/// English transliterations of the month names (index 0 is Muharram)
pub const MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi al-Awwal",
    "Rabi al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Shaban",
    "Ramadhan",
    "Shawwal",
    "Dhu al-Qadah",
    "Dhu al-Hijjah",
];

/// Days in a week
pub(crate) const DAYS_PER_WEEK: i64 = 7;

/// Cells in a month grid: six weeks of seven days
pub const GRID_CELLS: usize = 42;

/// Largest accepted `day_offset` magnitude in [`crate::CalendarConfig`]
pub const MAX_DAY_OFFSET: i8 = 2;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

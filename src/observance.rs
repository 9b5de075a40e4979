//! Static table of religious observances keyed by Hijri (month, day).

use crate::HijriDate;
use crate::consts::{DHU_AL_HIJJAH, MUHARRAM, RAMADHAN};
use crate::prelude::*;
use serde::Serialize;

/// How an observance is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum ObservanceCategory {
    #[display(fmt = "obligatory")]
    Obligatory,
    #[display(fmt = "recommended")]
    Recommended,
    #[display(fmt = "historical")]
    Historical,
    #[display(fmt = "commemorative")]
    Commemorative,
}

/// Month and day an observance falls on, every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[display(fmt = "{:02}-{:02}", month, day)]
pub struct ObservanceDate {
    pub month: u8,
    pub day: u8,
}

/// A named date of religious interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Observance {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub date: ObservanceDate,
    pub category: ObservanceCategory,
    /// Presentation hint, e.g. a palette key
    pub color_tag: &'static str,
    /// Presentation hint, e.g. an icon set key
    pub icon_tag: &'static str,
}

impl Observance {
    /// Whether this observance falls on the given (month, day)
    #[inline]
    pub const fn falls_on(&self, month: u8, day: u8) -> bool {
        self.date.month == month && self.date.day == day
    }

    /// Whether this observance falls on the given Hijri date, in any year
    pub fn matches(&self, date: HijriDate) -> bool {
        self.falls_on(date.month(), date.day())
    }
}

const fn on(month: u8, day: u8) -> ObservanceDate {
    ObservanceDate { month, day }
}

/// The built-in observance table.
///
/// Keys must be unique; a duplicate is rejected at compile time.
pub const OBSERVANCES: &[Observance] = &[
    Observance {
        id: "islamic-new-year",
        name: "Islamic New Year",
        description: "First day of Muharram, opening the Hijri year.",
        date: on(MUHARRAM, 1),
        category: ObservanceCategory::Commemorative,
        color_tag: "teal",
        icon_tag: "crescent",
    },
    Observance {
        id: "ashura",
        name: "Day of Ashura",
        description: "Tenth of Muharram; fasting on this day is recommended.",
        date: on(MUHARRAM, 10),
        category: ObservanceCategory::Recommended,
        color_tag: "indigo",
        icon_tag: "fast",
    },
    Observance {
        id: "mawlid",
        name: "Mawlid an-Nabi",
        description: "Commemoration of the birth of the Prophet.",
        date: on(3, 12),
        category: ObservanceCategory::Commemorative,
        color_tag: "green",
        icon_tag: "lantern",
    },
    Observance {
        id: "isra-miraj",
        name: "Isra and Miraj",
        description: "The Night Journey and Ascension.",
        date: on(7, 27),
        category: ObservanceCategory::Historical,
        color_tag: "purple",
        icon_tag: "star",
    },
    Observance {
        id: "nisf-shaban",
        name: "Nisf Shaban",
        description: "Middle of Shaban, a night of prayer and forgiveness.",
        date: on(8, 15),
        category: ObservanceCategory::Recommended,
        color_tag: "blue",
        icon_tag: "moon",
    },
    Observance {
        id: "ramadhan-start",
        name: "First of Ramadhan",
        description: "Beginning of the obligatory month-long fast.",
        date: on(RAMADHAN, 1),
        category: ObservanceCategory::Obligatory,
        color_tag: "gold",
        icon_tag: "crescent",
    },
    Observance {
        id: "nuzul-quran",
        name: "Nuzul al-Quran",
        description: "Revelation of the Quran; also the Battle of Badr.",
        date: on(RAMADHAN, 17),
        category: ObservanceCategory::Historical,
        color_tag: "amber",
        icon_tag: "book",
    },
    Observance {
        id: "laylat-al-qadr",
        name: "Laylat al-Qadr",
        description: "The Night of Decree, sought in the last ten nights.",
        date: on(RAMADHAN, 27),
        category: ObservanceCategory::Recommended,
        color_tag: "violet",
        icon_tag: "star",
    },
    Observance {
        id: "eid-al-fitr",
        name: "Eid al-Fitr",
        description: "Festival ending the fast of Ramadhan.",
        date: on(10, 1),
        category: ObservanceCategory::Obligatory,
        color_tag: "emerald",
        icon_tag: "mosque",
    },
    Observance {
        id: "day-of-tarwiyah",
        name: "Day of Tarwiyah",
        description: "Pilgrims set out for Mina.",
        date: on(DHU_AL_HIJJAH, 8),
        category: ObservanceCategory::Historical,
        color_tag: "sand",
        icon_tag: "tent",
    },
    Observance {
        id: "day-of-arafah",
        name: "Day of Arafah",
        description: "Standing at Arafah; fasting recommended for non-pilgrims.",
        date: on(DHU_AL_HIJJAH, 9),
        category: ObservanceCategory::Recommended,
        color_tag: "orange",
        icon_tag: "mountain",
    },
    Observance {
        id: "eid-al-adha",
        name: "Eid al-Adha",
        description: "Festival of the Sacrifice.",
        date: on(DHU_AL_HIJJAH, 10),
        category: ObservanceCategory::Obligatory,
        color_tag: "emerald",
        icon_tag: "mosque",
    },
];

const _: () = assert!(
    find_duplicate(OBSERVANCES).is_none(),
    "observance table has two entries on the same month and day"
);

/// First (month, day) that appears more than once in `table`, if any.
pub const fn find_duplicate(table: &[Observance]) -> Option<ObservanceDate> {
    let mut i = 0;
    while i < table.len() {
        let mut j = i + 1;
        while j < table.len() {
            if table[j].falls_on(table[i].date.month, table[i].date.day) {
                return Some(table[i].date);
            }
            j += 1;
        }
        i += 1;
    }
    None
}

/// Looks up the observance on a Hijri (month, day) in the built-in table.
///
/// ```
/// # use tabular_hijri::{find_observance, ObservanceCategory};
/// let first_of_ramadhan = find_observance(9, 1).unwrap();
/// assert_eq!(first_of_ramadhan.category, ObservanceCategory::Obligatory);
/// assert!(find_observance(6, 15).is_none());
/// ```
pub fn find_observance(month: u8, day: u8) -> Option<&'static Observance> {
    find_observance_in(OBSERVANCES, month, day)
}

/// Looks up the observance on a Hijri (month, day) in a caller-supplied table.
///
/// Uniqueness of keys is the table author's responsibility; with duplicates
/// the first match wins.
pub fn find_observance_in(table: &[Observance], month: u8, day: u8) -> Option<&Observance> {
    table.iter().find(|o| o.falls_on(month, day))
}

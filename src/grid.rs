//! Six-week month grid with Hijri annotations, the data behind a calendar view.

use serde::Serialize;
use tracing::debug;

use crate::calendar::HijriCalendar;
use crate::consts::{DAYS_PER_WEEK, GRID_CELLS};
use crate::epoch::from_julian_day;
use crate::observance::Observance;
use crate::{CalendarError, GregorianDate, HijriDate};

/// One day in a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarCell<'a> {
    pub gregorian: GregorianDate,
    pub hijri: HijriDate,
    pub observance: Option<&'a Observance>,
    pub is_today: bool,
    /// False for the leading and trailing days borrowed from adjacent months
    pub in_displayed_month: bool,
}

/// 42 cells covering a Gregorian month, starting on the configured week start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid<'a> {
    year: i32,
    month: u32,
    cells: Vec<CalendarCell<'a>>,
}

impl<'a> MonthGrid<'a> {
    /// Gregorian year of the displayed month
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gregorian month being displayed
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// All cells in display order
    pub fn cells(&self) -> &[CalendarCell<'a>] {
        &self.cells
    }

    /// Rows of seven cells
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell<'a>]> {
        self.cells.chunks(7)
    }

    /// Cells that belong to the displayed month
    pub fn days_in_month(&self) -> impl Iterator<Item = &CalendarCell<'a>> {
        self.cells.iter().filter(|c| c.in_displayed_month)
    }
}

/// Builds the grid for `year`-`month`.
///
/// The first cell is the last `week_start` day on or before the 1st.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` for a month outside 1-12 and
/// `CalendarError::DateBeforeEpoch` if any cell precedes the Hijri epoch.
#[tracing::instrument(skip(calendar, today))]
pub fn month_grid<'a>(
    calendar: &HijriCalendar<'a>,
    year: i32,
    month: u32,
    today: Option<GregorianDate>,
) -> Result<MonthGrid<'a>, CalendarError> {
    let first = GregorianDate::new(year, month, 1)?;
    let lead = (i64::from(first.weekday()) - i64::from(calendar.config().week_start.index()))
        .rem_euclid(DAYS_PER_WEEK);
    let start = first.julian_day() - lead;

    let cells = (start..)
        .take(GRID_CELLS)
        .map(|jdn| {
            let gregorian = from_julian_day(jdn)?;
            let hijri = calendar.to_hijri(gregorian)?;
            Ok(CalendarCell {
                gregorian,
                hijri,
                observance: calendar.observance(hijri),
                is_today: today == Some(gregorian),
                in_displayed_month: gregorian.year() == year && gregorian.month() == month,
            })
        })
        .collect::<Result<Vec<_>, CalendarError>>()?;

    debug!(
        first = %cells[0].gregorian,
        observances = cells.iter().filter(|c| c.observance.is_some()).count(),
        "built month grid"
    );

    Ok(MonthGrid { year, month, cells })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CalendarConfig, WeekStart};

    fn calendar(week_start: WeekStart) -> HijriCalendar<'static> {
        HijriCalendar::new(CalendarConfig {
            week_start,
            ..CalendarConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_grid_shape_sunday_start() {
        // March 2025 starts on a Saturday
        let grid = calendar(WeekStart::Sunday).month_grid(2025, 3, None).unwrap();
        assert_eq!(grid.cells().len(), GRID_CELLS);
        assert_eq!(grid.weeks().count(), 6);
        assert!(grid.weeks().all(|w| w.len() == 7));

        let first = grid.cells()[0];
        assert_eq!(first.gregorian, GregorianDate::new(2025, 2, 23).unwrap());
        assert!(!first.in_displayed_month);
        assert_eq!(grid.cells()[6].gregorian, GregorianDate::new(2025, 3, 1).unwrap());
        assert_eq!(grid.days_in_month().count(), 31);
    }

    #[test]
    fn test_grid_columns_follow_week_start() {
        for week_start in [WeekStart::Sunday, WeekStart::Monday, WeekStart::Saturday] {
            let grid = calendar(week_start).month_grid(2024, 2, None).unwrap();
            for week in grid.weeks() {
                assert_eq!(week[0].gregorian.weekday(), week_start.index());
            }
        }
    }

    #[test]
    fn test_grid_month_starting_on_week_start() {
        // June 2025 starts on a Sunday: no leading days
        let grid = calendar(WeekStart::Sunday).month_grid(2025, 6, None).unwrap();
        assert_eq!(grid.cells()[0].gregorian, GregorianDate::new(2025, 6, 1).unwrap());
        assert!(grid.cells()[0].in_displayed_month);
    }

    #[test]
    fn test_grid_annotations() {
        let today = GregorianDate::new(2025, 3, 10).unwrap();
        let grid = calendar(WeekStart::Sunday)
            .month_grid(2025, 3, Some(today))
            .unwrap();

        let ramadhan = grid
            .cells()
            .iter()
            .find(|c| c.gregorian == GregorianDate::new(2025, 3, 1).unwrap())
            .unwrap();
        assert_eq!(ramadhan.hijri, HijriDate::new(1446, 9, 1).unwrap());
        assert_eq!(ramadhan.observance.map(|o| o.id), Some("ramadhan-start"));

        let todays: Vec<_> = grid.cells().iter().filter(|c| c.is_today).collect();
        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].gregorian, today);
    }

    #[test]
    fn test_grid_hijri_dates_are_consecutive() {
        let grid = calendar(WeekStart::Monday).month_grid(2024, 7, None).unwrap();
        for pair in grid.cells().windows(2) {
            assert_eq!(pair[0].hijri.succ(), Some(pair[1].hijri));
        }
    }

    #[test]
    fn test_grid_invalid_month() {
        let result = calendar(WeekStart::Sunday).month_grid(2025, 13, None);
        assert!(matches!(result, Err(CalendarError::InvalidDate { month: 13, .. })));
    }

    #[test]
    fn test_grid_before_epoch() {
        // July 622 starts before 1 Muharram 1 AH (19 July, Gregorian)
        let result = calendar(WeekStart::Sunday).month_grid(622, 7, None);
        assert!(matches!(result, Err(CalendarError::DateBeforeEpoch { .. })));
        assert!(calendar(WeekStart::Sunday).month_grid(622, 8, None).is_ok());
    }

    #[test]
    fn test_grid_serializes() {
        let grid = calendar(WeekStart::Sunday).month_grid(2025, 3, None).unwrap();
        let json = serde_json::to_value(&grid).unwrap();
        assert_eq!(json["cells"].as_array().unwrap().len(), GRID_CELLS);
        assert_eq!(json["cells"][6]["hijri"], "1446-09-01");
        assert_eq!(json["cells"][6]["observance"]["category"], "obligatory");
    }
}

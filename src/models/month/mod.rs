// Month module
// Month metadata and the rendered grid of day cells.

use chrono::{Datelike, NaiveDate};

use crate::models::day::CalendarDay;
use crate::utils::date;

/// Shape of a single month: what the grid builder needs to lay out
/// cells without re-deriving calendar facts per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthInfo {
    pub year: i32,
    /// 1-based month number.
    pub month: u32,
    /// Weekday of day 1, 0 = Sunday.
    pub first_weekday: u32,
    pub day_count: u32,
    pub first_day: NaiveDate,
}

impl MonthInfo {
    /// Metadata for the month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        let first_day = date::month_start(date);
        Self {
            year: first_day.year(),
            month: first_day.month(),
            first_weekday: first_day.weekday().num_days_from_sunday(),
            day_count: date::days_in_month(first_day.year(), first_day.month()),
            first_day,
        }
    }
}

/// A laid-out month grid. `days` holds up to 42 slots (6 weeks of 7);
/// slots are `None` where adjacent-month display is disabled and the
/// position falls outside the month.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarMonth {
    pub info: MonthInfo,
    pub days: Vec<Option<CalendarDay>>,
}

impl CalendarMonth {
    /// Grid position of a date, if that date has a cell in this grid.
    pub fn position_of(&self, date: NaiveDate) -> Option<usize> {
        self.days
            .iter()
            .position(|cell| cell.as_ref().is_some_and(|day| day.date == date))
    }

    /// Number of week rows the grid occupies.
    pub fn week_count(&self) -> usize {
        self.days.len().div_ceil(7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_info_of_mid_month_date() {
        let info = MonthInfo::of(NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
        assert_eq!(info.year, 2024);
        assert_eq!(info.month, 12);
        assert_eq!(info.day_count, 31);
        // December 1st 2024 is a Sunday
        assert_eq!(info.first_weekday, 0);
        assert_eq!(info.first_day, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
    }

    #[test]
    fn test_month_info_leap_february() {
        let info = MonthInfo::of(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
        assert_eq!(info.day_count, 29);
    }
}

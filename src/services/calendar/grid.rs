// Calendar grid builder
// Lays a month out as week rows: leading gaps for the weekday of day
// 1, optional Monday-start rotation, and optional padding with the
// neighbouring months' days.

use chrono::{Duration, NaiveDate};

use super::CalendarService;
use crate::models::day::CalendarDay;
use crate::models::month::{CalendarMonth, MonthInfo};
use crate::utils::date;

impl CalendarService {
    /// Build the grid for the month containing `date`.
    ///
    /// Day cells land at grid index `weekday-of-day-1 + day-of-month - 1`;
    /// positions before the first day stay empty. A Monday week start
    /// rotates the grid left by one position. With adjacent-month
    /// display enabled, remaining gaps are filled with the neighbouring
    /// months' days and the final week is padded to a full row.
    pub fn create_month(&self, date: NaiveDate) -> CalendarMonth {
        let info = MonthInfo::of(date);

        let mut days: Vec<Option<CalendarDay>> = vec![None; info.first_weekday as usize];
        for day in 1..=info.day_count {
            if let Some(d) = NaiveDate::from_ymd_opt(info.year, info.month, day) {
                days.push(Some(self.create_day(d)));
            }
        }

        if self.opts.week_start == 1 {
            if days.first().is_some_and(|cell| cell.is_none()) {
                days.remove(0);
            } else {
                // day 1 is a Sunday; it belongs at the end of the first
                // Monday-started week
                for _ in 0..6 {
                    days.insert(0, None);
                }
            }
        }

        if self.opts.show_adjacent_month_day {
            self.fill_adjacent_days(&mut days, info.first_day);
        }

        CalendarMonth { info, days }
    }

    /// Build `count` consecutive month grids starting at the month
    /// containing `start`.
    pub fn months_by_period(&self, start: NaiveDate, count: u32) -> Vec<CalendarMonth> {
        let first = date::month_start(start);
        (0..count)
            .map(|i| self.create_month(date::add_months(first, i as i32)))
            .collect()
    }

    fn fill_adjacent_days(&self, days: &mut Vec<Option<CalendarDay>>, month_start: NaiveDate) {
        let Some(first_idx) = days.iter().position(Option::is_some) else {
            return;
        };
        let Some(last_idx) = days.iter().rposition(Option::is_some) else {
            return;
        };
        let Some(first_date) = days[first_idx].as_ref().map(|day| day.date) else {
            return;
        };
        let Some(last_date) = days[last_idx].as_ref().map(|day| day.date) else {
            return;
        };

        // leading gaps become the previous month's trailing days
        for i in (0..first_idx).rev() {
            let day = first_date - Duration::days((first_idx - i) as i64);
            days[i] = Some(self.create_day_in_month(day, month_start));
        }

        // a month ending exactly on a week boundary gets no tail
        if days.len() % 7 == 0 && last_idx == days.len() - 1 {
            return;
        }
        let mut day = last_date;
        while days.len() % 7 != 0 {
            day += Duration::days(1);
            days.push(Some(self.create_day_in_month(day, month_start)));
        }
    }
}

// Day eligibility evaluator
// Derives a single day cell: display title/subtitle, marked flag and
// disabled state from the per-day override, bounds, disabled weekdays
// and slot membership.

use chrono::{Datelike, NaiveDate};

use super::CalendarService;
use crate::models::day::CalendarDay;
use crate::models::options::PickMode;
use crate::utils::date;

/// Bounds check for a day. With both bounds the interval is closed,
/// unless backwards selection is allowed, which relaxes the check to
/// "before the upper bound" so a start later than a provisional end
/// can still be picked. With only a lower bound the day must fall
/// strictly after it (the bound itself is not selectable).
pub fn day_in_range(
    day: NaiveDate,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    backwards: bool,
) -> bool {
    match (from, to) {
        (Some(from), Some(to)) => {
            if backwards {
                day < to
            } else {
                date::is_within(day, from, to)
            }
        }
        (Some(from), None) => backwards || day > from,
        (None, Some(to)) => day < to,
        (None, None) => true,
    }
}

impl CalendarService {
    /// Build the cell for a date with no surrounding month context.
    pub fn create_day(&self, day: NaiveDate) -> CalendarDay {
        self.build_day(day, None)
    }

    /// Build the cell for a date inside a specific month grid; dates
    /// from outside that month get the adjacent-month flags.
    pub fn create_day_in_month(&self, day: NaiveDate, month_start: NaiveDate) -> CalendarDay {
        self.build_day(day, Some(month_start))
    }

    fn build_day(&self, day: NaiveDate, month_start: Option<NaiveDate>) -> CalendarDay {
        let opts = &self.opts;
        let config = self.find_day_config(day);

        let in_range = day_in_range(
            day,
            Some(opts.from),
            opts.to,
            opts.can_backwards_selected,
        );
        let weekday_disabled = opts
            .disable_weeks
            .contains(&day.weekday().num_days_from_sunday());

        // An explicit per-day flag overrides every other rule.
        let disabled = match config.and_then(|c| c.disabled) {
            Some(flag) => flag,
            None => {
                let mut disabled = weekday_disabled || !in_range;
                if opts.pick_mode == PickMode::Slots && !opts.slots.is_empty() {
                    disabled = disabled || !self.day_in_any_slot(day);
                }
                disabled
            }
        };

        let title = config
            .and_then(|c| c.title.clone())
            .filter(|t| !t.is_empty())
            .or_else(|| {
                (!opts.default_title.is_empty()).then(|| opts.default_title.clone())
            })
            .unwrap_or_else(|| day.day().to_string());
        let sub_title = config
            .and_then(|c| c.sub_title.clone())
            .filter(|s| !s.is_empty())
            .or_else(|| {
                (!opts.default_subtitle.is_empty()).then(|| opts.default_subtitle.clone())
            })
            .unwrap_or_default();

        let (is_prev_month, is_next_month) = match month_start {
            Some(start) => {
                let cell_month = date::month_start(day);
                (cell_month < start, cell_month > start)
            }
            None => (false, false),
        };

        CalendarDay {
            date: day,
            title,
            sub_title,
            css_class: config
                .and_then(|c| c.css_class.clone())
                .unwrap_or_default(),
            is_today: day == self.today,
            marked: config.map(|c| c.marked).unwrap_or(false),
            disabled,
            is_first: day.day() == 1,
            is_last: day.day() == date::days_in_month(day.year(), day.month()),
            is_prev_month,
            is_next_month,
        }
    }
}

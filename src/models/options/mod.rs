// Options module
// Host-supplied partial configuration and the fully-defaulted form the
// rest of the crate works from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::day::DayConfig;
use crate::models::slot::Slot;
use crate::utils::date;

/// Selection behaviour of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickMode {
    #[default]
    Single,
    Multi,
    Range,
    Slots,
}

/// A from/to pair of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }
}

/// Partial picker configuration. Every field is optional; the options
/// resolver fills the gaps with an optional injected default set and
/// hard defaults. Build with struct-update syntax:
///
/// ```
/// use range_calendar::models::options::{CalendarOptions, PickMode};
///
/// let options = CalendarOptions {
///     pick_mode: Some(PickMode::Range),
///     max_range: Some(5),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalendarOptions {
    /// Lower bound of selectable days.
    pub from: Option<NaiveDate>,
    /// Upper bound of selectable days.
    pub to: Option<NaiveDate>,
    pub pick_mode: Option<PickMode>,
    /// 0 starts weeks on Sunday, 1 on Monday.
    pub week_start: Option<u32>,
    /// Weekday numbers (0 = Sunday) that are never selectable.
    pub disable_weeks: Option<Vec<u32>>,
    pub days_config: Option<Vec<DayConfig>>,
    pub slots: Option<Vec<Slot>>,
    /// Longest selectable range in days; 0 is unbounded.
    pub max_range: Option<u32>,
    pub show_adjacent_month_day: Option<bool>,
    pub can_backwards_selected: Option<bool>,
    pub default_end_date_to_start_date: Option<bool>,
    pub clear_resets_to_default: Option<bool>,
    pub auto_done: Option<bool>,
    pub default_scroll_to: Option<NaiveDate>,
    pub initial_date: Option<NaiveDate>,
    pub initial_dates: Option<Vec<NaiveDate>>,
    pub initial_date_range: Option<DateRange>,
    pub initial_slot: Option<Slot>,
    pub default_date: Option<NaiveDate>,
    pub default_dates: Option<Vec<NaiveDate>>,
    pub default_date_range: Option<DateRange>,
    pub default_slot: Option<Slot>,
    /// chrono strftime pattern for formatted result dates.
    pub date_format: Option<String>,
    /// chrono strftime pattern for month titles.
    pub month_format: Option<String>,
    /// Months built per page when batching grids.
    pub step: Option<u32>,
    pub title: Option<String>,
    pub close_label: Option<String>,
    pub close_title: Option<String>,
    pub done_label: Option<String>,
    pub done_title: Option<String>,
    pub clear_label: Option<String>,
    pub clear_title: Option<String>,
    /// Weekday header labels, Sunday first; must be exactly 7 entries.
    pub weekdays: Option<Vec<String>>,
    pub default_title: Option<String>,
    pub default_subtitle: Option<String>,
    pub css_class: Option<String>,
    pub color: Option<String>,
}

/// Configuration with every option defaulted. Produced once per
/// configuration change by the options resolver and treated as
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub pick_mode: PickMode,
    pub week_start: u32,
    pub disable_weeks: Vec<u32>,
    pub days_config: Vec<DayConfig>,
    pub slots: Vec<Slot>,
    pub max_range: u32,
    pub show_adjacent_month_day: bool,
    pub can_backwards_selected: bool,
    pub default_end_date_to_start_date: bool,
    pub clear_resets_to_default: bool,
    pub auto_done: bool,
    pub default_scroll_to: NaiveDate,
    pub initial_date: Option<NaiveDate>,
    pub initial_dates: Option<Vec<NaiveDate>>,
    pub initial_date_range: Option<DateRange>,
    pub initial_slot: Option<Slot>,
    pub default_date: Option<NaiveDate>,
    pub default_dates: Option<Vec<NaiveDate>>,
    pub default_date_range: Option<DateRange>,
    pub default_slot: Option<Slot>,
    pub date_format: String,
    pub month_format: String,
    pub step: u32,
    pub title: String,
    pub close_label: String,
    pub close_title: String,
    pub done_label: String,
    pub done_title: String,
    pub clear_label: String,
    pub clear_title: String,
    pub weekdays: Vec<String>,
    pub default_title: String,
    pub default_subtitle: String,
    pub css_class: String,
    pub color: String,
}

impl ResolvedOptions {
    /// Weekday header labels rotated for the configured week start.
    pub fn display_weekdays(&self) -> Vec<String> {
        date::rotate_weekdays(&self.weekdays, self.week_start)
    }
}

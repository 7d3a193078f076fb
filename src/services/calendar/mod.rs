// Calendar service
// Owns the resolved options and the reference "today", and builds the
// month grids and day cells the host renders.

use chrono::{Local, NaiveDate};

use crate::models::day::DayConfig;
use crate::models::options::ResolvedOptions;
use crate::models::slot::Slot;

mod day;
mod grid;

pub struct CalendarService {
    opts: ResolvedOptions,
    today: NaiveDate,
}

impl CalendarService {
    pub fn new(opts: ResolvedOptions) -> Self {
        Self {
            opts,
            today: Local::now().date_naive(),
        }
    }

    /// Service with an explicit "today", so `is_today` flags and
    /// relative defaults are reproducible in tests.
    pub fn with_today(opts: ResolvedOptions, today: NaiveDate) -> Self {
        Self { opts, today }
    }

    pub fn options(&self) -> &ResolvedOptions {
        &self.opts
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Per-day override for a date, if one is configured.
    pub fn find_day_config(&self, date: NaiveDate) -> Option<&DayConfig> {
        self.opts.days_config.iter().find(|config| config.date == date)
    }

    /// First configured slot containing the date.
    pub fn find_slot(&self, date: NaiveDate) -> Option<&Slot> {
        self.opts.slots.iter().find(|slot| slot.contains(date))
    }

    pub fn day_in_any_slot(&self, date: NaiveDate) -> bool {
        self.find_slot(date).is_some()
    }

    /// Whether the date is the first day of the slot containing it.
    pub fn is_slot_start(&self, date: NaiveDate) -> bool {
        self.find_slot(date).is_some_and(|slot| slot.from == date)
    }

    /// Whether the date is the last day of the slot containing it.
    pub fn is_slot_end(&self, date: NaiveDate) -> bool {
        self.find_slot(date).is_some_and(|slot| slot.to == date)
    }

    /// Whether the date lies strictly inside its slot.
    pub fn is_slot_between(&self, date: NaiveDate) -> bool {
        self.find_slot(date)
            .is_some_and(|slot| slot.from < date && date < slot.to)
    }
}

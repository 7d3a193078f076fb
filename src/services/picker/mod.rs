// Picker controller
// The widget surface minus rendering: seeds the configured selection,
// steps the visible month inside the bounds, routes taps into the
// state machine, gates confirmation, and exposes a value accessor for
// host form binding.

use chrono::NaiveDate;

use crate::error::CalendarError;
use crate::models::day::CalendarDay;
use crate::models::month::CalendarMonth;
use crate::models::options::{CalendarOptions, PickMode, ResolvedOptions};
use crate::models::result::{CalendarResult, CalendarValue, DateRecord};
use crate::models::selection::{Selection, SelectionEvent};
use crate::services::calendar::CalendarService;
use crate::services::format;
use crate::services::options::OptionsResolver;
use crate::services::selection::SelectionState;
use crate::utils::date;

/// Month navigation notification carrying the months stepped between.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthChange {
    pub old_month: DateRecord,
    pub new_month: DateRecord,
}

/// Outcome of one day tap: the selection notifications produced, plus
/// the confirmed result when auto-done completed the selection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectOutcome {
    pub events: Vec<SelectionEvent>,
    pub confirmed: Option<CalendarResult>,
}

type ChangeCallback = Box<dyn FnMut(&CalendarResult)>;

pub struct RangeCalendar {
    service: CalendarService,
    state: SelectionState,
    view_month: CalendarMonth,
    on_change: Option<ChangeCallback>,
}

impl RangeCalendar {
    /// Resolve options against the current local date and start on the
    /// scroll target's month.
    pub fn new(options: CalendarOptions) -> Self {
        Self::from_service(CalendarService::new(
            OptionsResolver::new().resolve(&options),
        ))
    }

    /// Picker with an explicit "today", so relative defaults and the
    /// `is_today` flags are reproducible.
    pub fn with_today(options: CalendarOptions, today: NaiveDate) -> Self {
        Self::from_service(CalendarService::with_today(
            OptionsResolver::new().resolve_at(&options, today),
            today,
        ))
    }

    /// Picker over already-resolved options (e.g. from a resolver with
    /// injected defaults).
    pub fn from_service(service: CalendarService) -> Self {
        let view_month = service.create_month(service.options().default_scroll_to);
        let state = SelectionState::new(service.options().pick_mode);
        let mut picker = Self {
            service,
            state,
            view_month,
            on_change: None,
        };
        picker.seed_selection(true);
        picker
    }

    pub fn options(&self) -> &ResolvedOptions {
        self.service.options()
    }

    pub fn service(&self) -> &CalendarService {
        &self.service
    }

    pub fn selection(&self) -> &Selection {
        self.state.selection()
    }

    /// Grid of the currently visible month.
    pub fn view_month(&self) -> &CalendarMonth {
        &self.view_month
    }

    /// Title of the visible month, formatted with the configured month
    /// pattern.
    pub fn month_title(&self) -> String {
        self.view_month
            .info
            .first_day
            .format(&self.service.options().month_format)
            .to_string()
    }

    /// Weekday header labels in display order.
    pub fn weekday_labels(&self) -> Vec<String> {
        self.service.options().display_weekdays()
    }

    /// Register the host's change callback. Invoked with the wrapped
    /// result every time a transition leaves a reportable selection.
    pub fn on_change(&mut self, callback: impl FnMut(&CalendarResult) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// Route one day tap into the state machine.
    pub fn select_day(&mut self, day: &CalendarDay) -> SelectOutcome {
        if day.disabled {
            log::debug!("ignoring tap on disabled day {}", day.date);
            return SelectOutcome::default();
        }

        let events = self.state.select(day, &self.service);
        let mut confirmed = None;
        if !events.is_empty() {
            if let Some(result) = self.reportable_result() {
                if let Some(callback) = self.on_change.as_mut() {
                    callback(&result);
                }
            }
            let opts = self.service.options();
            if opts.auto_done && opts.pick_mode != PickMode::Multi && self.can_done() {
                confirmed = format::wrap_result(self.state.selection(), opts);
            }
        }
        SelectOutcome { events, confirmed }
    }

    /// Confirm the selection, returning the wrapped result.
    pub fn done(&self) -> Result<CalendarResult, CalendarError> {
        let mode = self.service.options().pick_mode;
        if !self.can_done() {
            return Err(CalendarError::IncompleteSelection { mode });
        }
        format::wrap_result(self.state.selection(), self.service.options())
            .ok_or(CalendarError::IncompleteSelection { mode })
    }

    pub fn can_done(&self) -> bool {
        format::is_complete(self.state.selection(), self.service.options())
    }

    /// Empty the selection, or re-seed the configured defaults when
    /// clear-resets-to-default is on.
    pub fn clear(&mut self) {
        if self.service.options().clear_resets_to_default {
            self.seed_selection(false);
        } else {
            self.state.clear(self.service.options().pick_mode);
        }
    }

    pub fn can_clear(&self) -> bool {
        !self.state.selection().is_empty()
    }

    /// Jump the visible month to the month containing `date`.
    pub fn set_view_date(&mut self, date: NaiveDate) {
        self.view_month = self.service.create_month(date);
    }

    /// Jump to a month (1-based) within the visible year.
    pub fn jump_to_month(&mut self, month: u32) -> Option<MonthChange> {
        let target = NaiveDate::from_ymd_opt(self.view_month.info.year, month, 1)?;
        Some(self.step_to(target))
    }

    pub fn next_month(&mut self) -> Option<MonthChange> {
        if !self.can_next() {
            log::debug!("next month blocked by the upper bound");
            return None;
        }
        let target = date::add_months(self.view_month.info.first_day, 1);
        Some(self.step_to(target))
    }

    pub fn back_month(&mut self) -> Option<MonthChange> {
        if !self.can_back() {
            log::debug!("previous month blocked by the lower bound");
            return None;
        }
        let target = date::add_months(self.view_month.info.first_day, -1);
        Some(self.step_to(target))
    }

    pub fn next_year(&mut self) {
        let target = date::add_months(self.view_month.info.first_day, 12);
        self.set_view_date(target);
    }

    pub fn prev_year(&mut self) {
        if self.view_month.info.year == 1970 {
            return;
        }
        let target = date::add_months(self.view_month.info.first_day, -12);
        self.set_view_date(target);
    }

    /// Whether stepping forward stays within the upper bound.
    pub fn can_next(&self) -> bool {
        match self.service.options().to {
            Some(to) => self.view_month.info.first_day < to,
            None => true,
        }
    }

    /// Whether stepping backward stays within the lower bound.
    /// Backwards selection lifts the restriction.
    pub fn can_back(&self) -> bool {
        if self.service.options().can_backwards_selected {
            return true;
        }
        self.view_month.info.first_day > self.service.options().from
    }

    /// Set the external value, rebuilding the visible month around it.
    pub fn set_value(&mut self, value: Option<&CalendarValue>) {
        let mode = self.service.options().pick_mode;
        let selection = match (mode, value) {
            (PickMode::Single, Some(CalendarValue::Date(d))) => {
                Selection::Single(Some(self.service.create_day(*d)))
            }
            (PickMode::Range | PickMode::Slots, Some(CalendarValue::Range(range))) => {
                Selection::Range {
                    start: Some(self.service.create_day(range.from)),
                    end: Some(self.service.create_day(range.to)),
                }
            }
            (PickMode::Multi, Some(CalendarValue::Dates(dates))) => Selection::Multi(
                dates.iter().map(|d| self.service.create_day(*d)).collect(),
            ),
            _ => Selection::for_mode(mode),
        };
        let anchor = selection
            .start()
            .map(|day| day.date)
            .unwrap_or_else(|| self.service.today());
        self.state.set_selection(selection);
        self.set_view_date(anchor);
    }

    /// Current external value, when the selection holds one.
    pub fn value(&self) -> Option<CalendarValue> {
        match self.state.selection() {
            Selection::Single(day) => day.as_ref().map(|d| CalendarValue::Date(d.date)),
            Selection::Range { start, end } => match (start, end) {
                (Some(s), Some(e)) => Some(CalendarValue::Range(
                    crate::models::options::DateRange::new(s.date, e.date),
                )),
                _ => None,
            },
            Selection::Multi(days) => {
                if days.is_empty() {
                    None
                } else {
                    Some(CalendarValue::Dates(days.iter().map(|d| d.date).collect()))
                }
            }
        }
    }

    /// Whole-month index of the scroll target counted from the lower
    /// bound's month; `None` when the target does not lie after it.
    pub fn scroll_target_index(&self) -> Option<u32> {
        let opts = self.service.options();
        if opts.default_scroll_to <= opts.from {
            return None;
        }
        Some(date::months_between(opts.default_scroll_to, opts.from).max(0) as u32)
    }

    fn step_to(&mut self, target: NaiveDate) -> MonthChange {
        let pattern = self.service.options().date_format.clone();
        let old = self.view_month.info.first_day;
        self.set_view_date(target);
        let change = MonthChange {
            old_month: format::format_date(old, &pattern),
            new_month: format::format_date(self.view_month.info.first_day, &pattern),
        };
        log::debug!(
            "view month {} -> {}",
            change.old_month.formatted,
            change.new_month.formatted
        );
        change
    }

    /// Seed the selection from the configured initial values at mount,
    /// or from the default values on a resetting clear. Modes without
    /// a matching configured value keep their current selection.
    fn seed_selection(&mut self, initial: bool) {
        let opts = self.service.options().clone();
        match opts.pick_mode {
            PickMode::Single => {
                let seed = if initial { opts.initial_date } else { opts.default_date };
                if let Some(d) = seed {
                    self.state
                        .set_selection(Selection::Single(Some(self.service.create_day(d))));
                }
            }
            PickMode::Range => {
                let seed = if initial {
                    opts.initial_date_range
                } else {
                    opts.default_date_range
                };
                if let Some(range) = seed {
                    self.state.set_selection(Selection::Range {
                        start: Some(self.service.create_day(range.from)),
                        end: Some(self.service.create_day(range.to)),
                    });
                }
            }
            PickMode::Multi => {
                let seed = if initial { opts.initial_dates } else { opts.default_dates };
                if let Some(dates) = seed.filter(|d| !d.is_empty()) {
                    self.state.set_selection(Selection::Multi(
                        dates.iter().map(|d| self.service.create_day(*d)).collect(),
                    ));
                }
            }
            PickMode::Slots => {
                self.state.clear(PickMode::Slots);
            }
        }
    }

    fn reportable_result(&self) -> Option<CalendarResult> {
        let opts = self.service.options();
        let ready = match (opts.pick_mode, self.state.selection()) {
            (PickMode::Single, Selection::Single(day)) => day.is_some(),
            (PickMode::Range | PickMode::Slots, Selection::Range { start, end }) => {
                start.is_some() && end.is_some()
            }
            (PickMode::Multi, Selection::Multi(_)) => true,
            _ => false,
        };
        if !ready {
            return None;
        }
        format::wrap_result(self.state.selection(), opts)
    }
}

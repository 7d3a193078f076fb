// Selection state machine
// Transition rules for day taps per pick mode. Transitions are
// synchronous and report the notifications they produced, in order.

use chrono::Duration;

use crate::models::day::CalendarDay;
use crate::models::options::PickMode;
use crate::models::selection::{Selection, SelectionEvent};
use crate::services::calendar::CalendarService;

/// Holds the current selection and applies tap transitions. Clamped or
/// derived endpoints are rebuilt through the day evaluator so their
/// display fields stay consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    selection: Selection,
}

impl SelectionState {
    pub fn new(mode: PickMode) -> Self {
        Self {
            selection: Selection::for_mode(mode),
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    pub fn clear(&mut self, mode: PickMode) {
        self.selection = Selection::for_mode(mode);
    }

    /// Apply one tap. Returns the notifications the transition
    /// produced; an empty list means the tap was a no-op (a slots-mode
    /// tap outside every slot).
    pub fn select(&mut self, day: &CalendarDay, service: &CalendarService) -> Vec<SelectionEvent> {
        let mode = service.options().pick_mode;
        if !self.selection.matches_mode(mode) {
            self.selection = Selection::for_mode(mode);
        }
        match mode {
            PickMode::Single => self.select_single(day),
            PickMode::Multi => self.select_multi(day),
            PickMode::Slots => self.select_slot(day, service),
            PickMode::Range => self.select_range(day, service),
        }
    }

    fn select_single(&mut self, day: &CalendarDay) -> Vec<SelectionEvent> {
        self.selection = Selection::Single(Some(day.clone()));
        vec![SelectionEvent::SelectionChanged(self.selection.clone())]
    }

    fn select_multi(&mut self, day: &CalendarDay) -> Vec<SelectionEvent> {
        if let Selection::Multi(days) = &mut self.selection {
            if let Some(pos) = days.iter().position(|d| d.date == day.date) {
                days.remove(pos);
            } else {
                days.push(day.clone());
            }
        }
        vec![SelectionEvent::SelectionChanged(self.selection.clone())]
    }

    /// A tap anywhere inside a slot selects the slot's whole interval.
    fn select_slot(&mut self, day: &CalendarDay, service: &CalendarService) -> Vec<SelectionEvent> {
        let Some(slot) = service.find_slot(day.date) else {
            return Vec::new();
        };
        let start = service.create_day(slot.from);
        let end = service.create_day(slot.to);
        self.selection = Selection::Range {
            start: Some(start.clone()),
            end: Some(end.clone()),
        };
        vec![
            SelectionEvent::StartChanged(start),
            SelectionEvent::EndChanged(end),
            SelectionEvent::SelectionChanged(self.selection.clone()),
        ]
    }

    fn select_range(&mut self, day: &CalendarDay, service: &CalendarService) -> Vec<SelectionEvent> {
        let max_range = service.options().max_range;
        let mut events = Vec::new();

        let (mut start, mut end) = match &self.selection {
            Selection::Range { start, end } => (start.clone(), end.clone()),
            _ => (None, None),
        };

        match (start.clone(), end.clone()) {
            (None, _) => {
                start = Some(day.clone());
                events.push(SelectionEvent::StartChanged(day.clone()));
            }
            (Some(s), None) => {
                if day.date > s.date {
                    end = Some(day.clone());
                    events.push(SelectionEvent::EndChanged(day.clone()));
                    clamp_start(&mut start, &end, max_range, service, &mut events);
                } else {
                    // the old start becomes the end, the tap the new start
                    end = Some(s.clone());
                    events.push(SelectionEvent::EndChanged(s));
                    start = Some(day.clone());
                    events.push(SelectionEvent::StartChanged(day.clone()));
                    clamp_end(&start, &mut end, max_range, service, &mut events);
                }
            }
            (Some(s), Some(e)) => {
                if day.date < s.date {
                    start = Some(day.clone());
                    events.push(SelectionEvent::StartChanged(day.clone()));
                    clamp_end(&start, &mut end, max_range, service, &mut events);
                } else if day.date > e.date {
                    end = Some(day.clone());
                    events.push(SelectionEvent::EndChanged(day.clone()));
                    clamp_start(&mut start, &end, max_range, service, &mut events);
                } else if day.date == s.date {
                    // collapse onto the start
                    end = Some(day.clone());
                    events.push(SelectionEvent::EndChanged(day.clone()));
                    clamp_end(&start, &mut end, max_range, service, &mut events);
                } else if day.date == e.date {
                    // collapse onto the end
                    start = Some(day.clone());
                    events.push(SelectionEvent::StartChanged(day.clone()));
                    clamp_start(&mut start, &end, max_range, service, &mut events);
                } else {
                    // strictly inside: restart at the tap, keeping the
                    // previous range's length
                    let span = (e.date - s.date).num_days();
                    start = Some(day.clone());
                    events.push(SelectionEvent::StartChanged(day.clone()));
                    let mut new_end = day.date + Duration::days(span);
                    if let Some(to) = service.options().to {
                        if new_end > to {
                            new_end = to;
                        }
                    }
                    let end_day = service.create_day(new_end);
                    events.push(SelectionEvent::EndChanged(end_day.clone()));
                    end = Some(end_day);
                }
            }
        }

        self.selection = Selection::Range { start, end };
        events.push(SelectionEvent::SelectionChanged(self.selection.clone()));
        events
    }
}

/// Pull the start forward when the span exceeds the maximum, keeping
/// the end anchored.
fn clamp_start(
    start: &mut Option<CalendarDay>,
    end: &Option<CalendarDay>,
    max_range: u32,
    service: &CalendarService,
    events: &mut Vec<SelectionEvent>,
) {
    let (Some(s), Some(e)) = (start.as_ref(), end.as_ref()) else {
        return;
    };
    let limit = i64::from(max_range) - 1;
    if max_range > 0 && (e.date - s.date).num_days() > limit {
        let pulled = service.create_day(e.date - Duration::days(limit));
        events.push(SelectionEvent::StartChanged(pulled.clone()));
        *start = Some(pulled);
    }
}

/// Pull the end backward when the span exceeds the maximum, keeping
/// the start anchored.
fn clamp_end(
    start: &Option<CalendarDay>,
    end: &mut Option<CalendarDay>,
    max_range: u32,
    service: &CalendarService,
    events: &mut Vec<SelectionEvent>,
) {
    let (Some(s), Some(e)) = (start.as_ref(), end.as_ref()) else {
        return;
    };
    let limit = i64::from(max_range) - 1;
    if max_range > 0 && (e.date - s.date).num_days() > limit {
        let pulled = service.create_day(s.date + Duration::days(limit));
        events.push(SelectionEvent::EndChanged(pulled.clone()));
        *end = Some(pulled);
    }
}

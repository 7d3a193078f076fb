// Selection module
// The in-progress selection per pick mode, the notifications a
// transition produces, and the queries rendering uses to paint
// selection state.

use chrono::NaiveDate;

use crate::models::day::CalendarDay;
use crate::models::options::PickMode;

/// Current selection. The shape is fixed by the pick mode: one
/// optional day, an optional start/end pair, or an ordered set.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Single(Option<CalendarDay>),
    /// Used by both range and slots modes.
    Range {
        start: Option<CalendarDay>,
        end: Option<CalendarDay>,
    },
    Multi(Vec<CalendarDay>),
}

impl Selection {
    /// Empty selection of the right shape for a pick mode.
    pub fn for_mode(mode: PickMode) -> Self {
        match mode {
            PickMode::Single => Selection::Single(None),
            PickMode::Range | PickMode::Slots => Selection::Range {
                start: None,
                end: None,
            },
            PickMode::Multi => Selection::Multi(Vec::new()),
        }
    }

    /// First selected day: the sole day, the range start, or the first
    /// of the set.
    pub fn start(&self) -> Option<&CalendarDay> {
        match self {
            Selection::Single(day) => day.as_ref(),
            Selection::Range { start, .. } => start.as_ref(),
            Selection::Multi(days) => days.first(),
        }
    }

    /// Range end, when the selection has one.
    pub fn end(&self) -> Option<&CalendarDay> {
        match self {
            Selection::Range { end, .. } => end.as_ref(),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start().is_none()
    }

    /// Whether the date is the selected day (single/multi), or the
    /// range's anchor day while one exists.
    pub fn is_selected(&self, date: NaiveDate) -> bool {
        match self {
            Selection::Single(day) => day.as_ref().is_some_and(|d| d.date == date),
            Selection::Range {
                start: Some(start), ..
            } => start.date == date,
            Selection::Range {
                start: None,
                end: Some(end),
            } => end.date == date,
            Selection::Range { .. } => false,
            Selection::Multi(days) => days.iter().any(|d| d.date == date),
        }
    }

    /// Whether the date is the start of a completed range.
    pub fn is_range_start(&self, date: NaiveDate) -> bool {
        match self {
            Selection::Range {
                start: Some(start),
                end: Some(_),
            } => start.date == date,
            _ => false,
        }
    }

    /// Whether the date is the end of a completed range.
    pub fn is_range_end(&self, date: NaiveDate) -> bool {
        match self {
            Selection::Range { end: Some(end), .. } => end.date == date,
            _ => false,
        }
    }

    /// Whether the date lies strictly inside a completed range.
    pub fn is_between(&self, date: NaiveDate) -> bool {
        match self {
            Selection::Range {
                start: Some(start),
                end: Some(end),
            } => start.date < date && date < end.date,
            _ => false,
        }
    }

    /// Whether this selection has the shape `mode` requires.
    pub fn matches_mode(&self, mode: PickMode) -> bool {
        matches!(
            (self, mode),
            (Selection::Single(_), PickMode::Single)
                | (Selection::Range { .. }, PickMode::Range)
                | (Selection::Range { .. }, PickMode::Slots)
                | (Selection::Multi(_), PickMode::Multi)
        )
    }
}

/// Notifications produced by a selection transition, in the order they
/// occurred. Start/end notifications fire for the endpoint assignments
/// (including max-range clamps); every transition that changes state
/// ends with one `SelectionChanged` carrying the full selection.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    StartChanged(CalendarDay),
    EndChanged(CalendarDay),
    SelectionChanged(Selection),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_mode_shapes() {
        assert!(matches!(
            Selection::for_mode(PickMode::Single),
            Selection::Single(None)
        ));
        assert!(matches!(
            Selection::for_mode(PickMode::Range),
            Selection::Range { start: None, end: None }
        ));
        assert!(matches!(
            Selection::for_mode(PickMode::Slots),
            Selection::Range { start: None, end: None }
        ));
        assert!(matches!(Selection::for_mode(PickMode::Multi), Selection::Multi(ref v) if v.is_empty()));
    }

    #[test]
    fn test_empty_selection_has_no_start() {
        for mode in [PickMode::Single, PickMode::Multi, PickMode::Range] {
            assert!(Selection::for_mode(mode).is_empty());
        }
    }

    #[test]
    fn test_range_paint_queries() {
        fn day(d: u32) -> CalendarDay {
            CalendarDay {
                date: NaiveDate::from_ymd_opt(2024, 12, d).unwrap(),
                title: d.to_string(),
                sub_title: String::new(),
                css_class: String::new(),
                is_today: false,
                marked: false,
                disabled: false,
                is_first: d == 1,
                is_last: d == 31,
                is_prev_month: false,
                is_next_month: false,
            }
        }
        let date = |d: u32| NaiveDate::from_ymd_opt(2024, 12, d).unwrap();

        let selection = Selection::Range {
            start: Some(day(10)),
            end: Some(day(14)),
        };
        assert!(selection.is_range_start(date(10)));
        assert!(selection.is_range_end(date(14)));
        assert!(selection.is_between(date(12)));
        assert!(!selection.is_between(date(10)));
        assert!(!selection.is_between(date(14)));
        assert!(selection.is_selected(date(10)));

        // an open range has no completed start yet
        let open = Selection::Range {
            start: Some(day(10)),
            end: None,
        };
        assert!(!open.is_range_start(date(10)));
        assert!(open.is_selected(date(10)));
        assert!(!open.is_between(date(12)));
    }

    #[test]
    fn test_slots_selection_matches_range_shape() {
        let selection = Selection::for_mode(PickMode::Slots);
        assert!(selection.matches_mode(PickMode::Slots));
        assert!(selection.matches_mode(PickMode::Range));
        assert!(!selection.matches_mode(PickMode::Multi));
    }
}

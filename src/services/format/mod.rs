// Result formatter
// Converts selected day cells into the external result shape per pick
// mode, and gates confirmation on per-mode completeness.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;
use crate::models::options::{PickMode, ResolvedOptions};
use crate::models::result::{CalendarResult, DateRecord};
use crate::models::selection::Selection;
use crate::utils::date;

/// Normalize one date: calendar date, local-midnight epoch millis and
/// seconds, the formatted string, and decomposed fields.
pub fn format_date(day: NaiveDate, pattern: &str) -> DateRecord {
    let millis = date::local_midnight_millis(day);
    DateRecord {
        date: day,
        time: millis,
        unix: millis.div_euclid(1000),
        formatted: day.format(pattern).to_string(),
        year: day.year(),
        month: day.month(),
        day: day.day(),
    }
}

/// Parse a formatted date string back into a calendar date.
pub fn parse_date(value: &str, pattern: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(value, pattern).map_err(|_| CalendarError::InvalidDate {
        value: value.to_string(),
        format: pattern.to_string(),
    })
}

/// Wrap the selection into the per-mode result shape. Returns `None`
/// while the selection has no usable content. A range missing its end
/// substitutes the start.
pub fn wrap_result(selection: &Selection, opts: &ResolvedOptions) -> Option<CalendarResult> {
    let pattern = opts.date_format.as_str();
    match selection {
        Selection::Single(day) => day
            .as_ref()
            .map(|d| CalendarResult::Single(format_date(d.date, pattern))),
        Selection::Range { start, end } => start.as_ref().map(|s| CalendarResult::Range {
            from: format_date(s.date, pattern),
            to: format_date(end.as_ref().unwrap_or(s).date, pattern),
        }),
        Selection::Multi(days) => Some(CalendarResult::Multi(
            days.iter().map(|d| format_date(d.date, pattern)).collect(),
        )),
    }
}

/// Mode-specific completeness check gating confirmation. Range (and
/// slots) accept a missing end when the options default the end to the
/// start.
pub fn is_complete(selection: &Selection, opts: &ResolvedOptions) -> bool {
    match (opts.pick_mode, selection) {
        (PickMode::Single, Selection::Single(day)) => day.is_some(),
        (PickMode::Range | PickMode::Slots, Selection::Range { start, end }) => {
            if opts.default_end_date_to_start_date {
                start.is_some()
            } else {
                start.is_some() && end.is_some()
            }
        }
        (PickMode::Multi, Selection::Multi(days)) => !days.is_empty(),
        _ => false,
    }
}

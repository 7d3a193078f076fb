// Date utility functions
// Thin wrappers over chrono used by the grid builder, the options
// resolver and the result formatter.

use chrono::{Datelike, Local, LocalResult, Months, NaiveDate, NaiveTime};

/// Number of days in the given month, with a defensive fallback for
/// out-of-range input.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 30;
    };
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next {
        Some(next) => (next - first).num_days() as u32,
        None => 30,
    }
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Weekday of the first day of the given month, 0 = Sunday.
pub fn first_weekday(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Shift a date by whole months, clamping the day-of-month when the
/// target month is shorter.
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months as u32))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

/// Whole months from `earlier` to `later`. Negative when `later` is
/// actually the earlier date.
pub fn months_between(later: NaiveDate, earlier: NaiveDate) -> i32 {
    let mut diff = (later.year() - earlier.year()) * 12 + later.month() as i32
        - earlier.month() as i32;
    if diff > 0 && later.day() < earlier.day() {
        diff -= 1;
    } else if diff < 0 && later.day() > earlier.day() {
        diff += 1;
    }
    diff
}

/// Inclusive interval containment.
pub fn is_within(date: NaiveDate, from: NaiveDate, to: NaiveDate) -> bool {
    from <= date && date <= to
}

/// Epoch milliseconds of local midnight on `date`. Falls back to UTC
/// midnight when local midnight does not exist (DST gap).
pub fn local_midnight_millis(date: NaiveDate) -> i64 {
    let midnight = date.and_time(NaiveTime::MIN);
    match midnight.and_local_timezone(Local) {
        LocalResult::Single(dt) => dt.timestamp_millis(),
        LocalResult::Ambiguous(earliest, _) => earliest.timestamp_millis(),
        LocalResult::None => midnight.and_utc().timestamp_millis(),
    }
}

/// Weekday header labels in display order. A Monday week start moves
/// the first label to the end; anything else leaves the order alone.
pub fn rotate_weekdays(labels: &[String], week_start: u32) -> Vec<String> {
    if week_start == 1 && labels.len() == 7 {
        let mut rotated = labels[1..].to_vec();
        rotated.push(labels[0].clone());
        rotated
    } else {
        labels.to_vec()
    }
}

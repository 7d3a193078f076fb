// Test fixtures - reusable builders shared by the integration and
// property suites

use chrono::NaiveDate;

use range_calendar::models::options::CalendarOptions;
use range_calendar::services::calendar::CalendarService;
use range_calendar::services::options::OptionsResolver;
use range_calendar::services::picker::RangeCalendar;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Reference "today" pinned so relative defaults stay stable.
pub fn today() -> NaiveDate {
    date(2024, 12, 5)
}

pub fn service(options: CalendarOptions) -> CalendarService {
    CalendarService::with_today(
        OptionsResolver::new().resolve_at(&options, today()),
        today(),
    )
}

pub fn picker(options: CalendarOptions) -> RangeCalendar {
    RangeCalendar::with_today(options, today())
}

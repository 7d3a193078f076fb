// Walkthrough of a range selection: build a picker, print the month
// grid, tap two days and confirm the result.

use anyhow::Result;
use chrono::NaiveDate;

use range_calendar::models::options::{CalendarOptions, PickMode};
use range_calendar::models::result::CalendarResult;
use range_calendar::services::picker::RangeCalendar;

fn main() -> Result<()> {
    env_logger::init();

    let options = CalendarOptions {
        from: NaiveDate::from_ymd_opt(2024, 12, 1),
        to: NaiveDate::from_ymd_opt(2024, 12, 31),
        pick_mode: Some(PickMode::Range),
        max_range: Some(5),
        ..Default::default()
    };
    let mut picker = RangeCalendar::new(options);

    println!("=== {} ===", picker.month_title());
    println!("{}", picker.weekday_labels().join("  "));
    print_grid(&picker);

    let first = picker.service().create_day(NaiveDate::from_ymd_opt(2024, 12, 10).unwrap());
    picker.select_day(&first);
    println!("\nTapped {}", first.date);

    let second = picker.service().create_day(NaiveDate::from_ymd_opt(2024, 12, 20).unwrap());
    picker.select_day(&second);
    println!("Tapped {} (max range pulls the start forward)", second.date);

    let result = picker.done()?;
    if let CalendarResult::Range { from, to } = &result {
        println!("\nSelected {} .. {}", from.formatted, to.formatted);
    }
    println!("\nHost payload:\n{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

fn print_grid(picker: &RangeCalendar) {
    for week in picker.view_month().days.chunks(7) {
        let row: Vec<String> = week
            .iter()
            .map(|cell| match cell {
                Some(day) if day.disabled => format!("({:>2})", day.title),
                Some(day) => format!(" {:>2} ", day.title),
                None => "  . ".to_string(),
            })
            .collect();
        println!("{}", row.join(""));
    }
}

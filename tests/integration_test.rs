// Integration tests driving the picker through the public surface:
// resolve options, build grids, tap days, confirm results.

#[allow(dead_code)]
mod fixtures;

use fixtures::{date, picker, service};
use range_calendar::error::CalendarError;
use range_calendar::models::options::{CalendarOptions, DateRange, PickMode};
use range_calendar::models::result::{CalendarResult, CalendarValue};
use range_calendar::models::slot::Slot;
use range_calendar::services::format;

fn december_range(max_range: u32) -> CalendarOptions {
    CalendarOptions {
        from: Some(date(2024, 12, 1)),
        to: Some(date(2024, 12, 31)),
        pick_mode: Some(PickMode::Range),
        max_range: Some(max_range),
        ..Default::default()
    }
}

#[test]
fn test_range_selection_with_max_range_clamp() {
    let mut p = picker(december_range(5));

    let first = p.service().create_day(date(2024, 12, 10));
    let outcome = p.select_day(&first);
    assert!(!outcome.events.is_empty());
    assert_eq!(p.value(), None); // start only, no range value yet

    // the second tap anchors the end and drags the start forward so the
    // span stays at five days
    let second = p.service().create_day(date(2024, 12, 20));
    p.select_day(&second);
    assert_eq!(
        p.value(),
        Some(CalendarValue::Range(DateRange::new(
            date(2024, 12, 16),
            date(2024, 12, 20)
        )))
    );

    let result = p.done().unwrap();
    match result {
        CalendarResult::Range { from, to } => {
            assert_eq!(from.formatted, "2024-12-16");
            assert_eq!(to.formatted, "2024-12-20");
            assert_eq!(to.date - from.date, chrono::Duration::days(4));
        }
        other => panic!("expected range result, got {other:?}"),
    }
}

#[test]
fn test_slot_selection_in_one_transition() {
    let mut p = picker(CalendarOptions {
        pick_mode: Some(PickMode::Slots),
        from: Some(date(2024, 12, 1)),
        to: Some(date(2024, 12, 31)),
        slots: Some(vec![
            Slot::new(date(2024, 12, 5), date(2024, 12, 8)),
            Slot::new(date(2024, 12, 15), date(2024, 12, 18)),
        ]),
        ..Default::default()
    });

    // a single tap inside the slot selects the slot's whole interval
    let inside = p.service().create_day(date(2024, 12, 16));
    let outcome = p.select_day(&inside);
    assert_eq!(outcome.events.len(), 3);

    match p.done().unwrap() {
        CalendarResult::Range { from, to } => {
            assert_eq!(from.date, date(2024, 12, 15));
            assert_eq!(to.date, date(2024, 12, 18));
        }
        other => panic!("expected range result, got {other:?}"),
    }

    // days outside every slot are unselectable in slots mode
    let gap_day = p.service().create_day(date(2024, 12, 11));
    assert!(gap_day.disabled);
}

#[test]
fn test_multi_selection_toggles_to_empty() {
    let mut p = picker(CalendarOptions {
        pick_mode: Some(PickMode::Multi),
        ..Default::default()
    });

    let day = p.service().create_day(date(2024, 12, 10));
    p.select_day(&day);
    assert!(p.can_done());

    p.select_day(&day);
    assert!(!p.can_done());
    assert_eq!(
        p.done(),
        Err(CalendarError::IncompleteSelection {
            mode: PickMode::Multi
        })
    );
}

#[test]
fn test_single_selection_formats_and_parses_back() {
    let mut p = picker(CalendarOptions {
        date_format: Some("%d/%m/%Y".to_string()),
        ..Default::default()
    });

    let day = p.service().create_day(date(2024, 12, 25));
    p.select_day(&day);

    match p.done().unwrap() {
        CalendarResult::Single(record) => {
            assert_eq!(record.formatted, "25/12/2024");
            let parsed = format::parse_date(&record.formatted, "%d/%m/%Y").unwrap();
            assert_eq!(parsed, record.date);
            assert_eq!((record.year, record.month, record.day), (2024, 12, 25));
        }
        other => panic!("expected single result, got {other:?}"),
    }
}

#[test]
fn test_grid_marks_overrides_and_disables_weekends() {
    use range_calendar::models::day::DayConfig;

    let svc = service(CalendarOptions {
        from: Some(date(2024, 12, 1)),
        to: Some(date(2024, 12, 31)),
        disable_weeks: Some(vec![0, 6]),
        days_config: Some(vec![DayConfig {
            marked: true,
            title: Some("Xmas".to_string()),
            ..DayConfig::new(date(2024, 12, 25))
        }]),
        ..Default::default()
    });

    let month = svc.create_month(date(2024, 12, 1));
    let christmas = month.days[month.position_of(date(2024, 12, 25)).unwrap()]
        .as_ref()
        .unwrap();
    assert!(christmas.marked);
    assert_eq!(christmas.title, "Xmas");

    // December 2024 has 9 weekend days in-month; adjacent January cells
    // falling on weekends count too
    let disabled_cells = month
        .days
        .iter()
        .flatten()
        .filter(|day| day.disabled)
        .count();
    assert!(disabled_cells >= 9);

    let sunday = month.days[month.position_of(date(2024, 12, 8)).unwrap()]
        .as_ref()
        .unwrap();
    assert!(sunday.disabled);
}

#[test]
fn test_full_modal_flow_with_auto_done_and_callback() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let emitted: Rc<RefCell<Vec<CalendarResult>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&emitted);

    let mut p = picker(CalendarOptions {
        auto_done: Some(true),
        default_end_date_to_start_date: Some(false),
        ..december_range(0)
    });
    p.on_change(move |result| sink.borrow_mut().push(result.clone()));

    let start = p.service().create_day(date(2024, 12, 10));
    assert!(p.select_day(&start).confirmed.is_none());

    let end = p.service().create_day(date(2024, 12, 14));
    let outcome = p.select_day(&end);
    let confirmed = outcome.confirmed.expect("auto-done should confirm");
    match confirmed {
        CalendarResult::Range { from, to } => {
            assert_eq!(from.date, date(2024, 12, 10));
            assert_eq!(to.date, date(2024, 12, 14));
        }
        other => panic!("expected range result, got {other:?}"),
    }
    assert_eq!(emitted.borrow().len(), 1);
}

#[test]
fn test_backwards_selection_keeps_earlier_days_selectable() {
    let p = picker(CalendarOptions {
        from: Some(date(2024, 12, 10)),
        to: Some(date(2024, 12, 31)),
        can_backwards_selected: Some(true),
        ..Default::default()
    });

    // days before the lower bound stay selectable while a provisional
    // end exists
    assert!(!p.service().create_day(date(2024, 12, 1)).disabled);
    // but nothing at or past the upper bound is
    assert!(p.service().create_day(date(2024, 12, 31)).disabled);
}

#[test]
fn test_month_stream_for_infinite_scroll() {
    let svc = service(CalendarOptions {
        from: Some(date(2024, 12, 1)),
        ..Default::default()
    });

    let months = svc.months_by_period(date(2024, 12, 15), 12);
    assert_eq!(months.len(), 12);
    assert_eq!(
        (months[0].info.year, months[0].info.month),
        (2024, 12)
    );
    assert_eq!(
        (months[11].info.year, months[11].info.month),
        (2025, 11)
    );
    for month in &months {
        assert_eq!(month.days.len() % 7, 0);
    }
}

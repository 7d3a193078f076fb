// Benchmark for month-grid construction
// Measures grid building with and without adjacent-month padding, and
// batched month streams.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use range_calendar::models::options::CalendarOptions;
use range_calendar::services::calendar::CalendarService;
use range_calendar::services::options::OptionsResolver;

fn service(adjacent: bool) -> CalendarService {
    let today = NaiveDate::from_ymd_opt(2024, 12, 5).unwrap();
    let options = CalendarOptions {
        from: Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
        to: Some(NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()),
        show_adjacent_month_day: Some(adjacent),
        ..Default::default()
    };
    CalendarService::with_today(OptionsResolver::new().resolve_at(&options, today), today)
}

fn bench_create_month(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_month");

    for (label, adjacent) in [("plain", false), ("adjacent_padding", true)] {
        let svc = service(adjacent);
        let month_start = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(label), &svc, |b, svc| {
            b.iter(|| svc.create_month(black_box(month_start)));
        });
    }

    group.finish();
}

fn bench_months_by_period(c: &mut Criterion) {
    let mut group = c.benchmark_group("months_by_period");

    for count in [3u32, 12, 24].iter() {
        let svc = service(true);
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            b.iter(|| svc.months_by_period(black_box(start), black_box(count)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_create_month, bench_months_by_period);
criterion_main!(benches);

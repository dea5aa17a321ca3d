use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use primbon_engine::{BirthProfile, CoupleProfile};
use primbon_zeri::{DEFAULT_TOP_N, rank_wedding_dates};

fn couple() -> CoupleProfile {
    let mut a = BirthProfile::new("Jane Doe", NaiveDate::from_ymd_opt(1990, 5, 14).unwrap());
    a.time_of_birth = Some("14:30".into());
    let mut b = BirthProfile::new("John Smith", NaiveDate::from_ymd_opt(1988, 3, 21).unwrap());
    b.time_of_birth = Some("08:00".into());
    CoupleProfile {
        partner_a: a,
        partner_b: b,
    }
}

fn zeri_bench(c: &mut Criterion) {
    let couple = couple();
    let month_start = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
    let month_end = NaiveDate::from_ymd_opt(2026, 6, 30).unwrap();
    let year_end = NaiveDate::from_ymd_opt(2027, 5, 31).unwrap();

    let mut group = c.benchmark_group("rank_wedding_dates");
    group.bench_function("one_month", |b| {
        b.iter(|| {
            rank_wedding_dates(
                black_box(&couple),
                black_box(month_start),
                black_box(month_end),
                DEFAULT_TOP_N,
            )
        })
    });
    group.bench_function("one_year", |b| {
        b.iter(|| {
            rank_wedding_dates(
                black_box(&couple),
                black_box(month_start),
                black_box(year_end),
                DEFAULT_TOP_N,
            )
        })
    });
    group.finish();
}

criterion_group!(benches, zeri_bench);
criterion_main!(benches);

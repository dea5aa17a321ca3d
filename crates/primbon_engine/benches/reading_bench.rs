use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use primbon_engine::{
    BirthProfile, Gender, calculate_bazi, calculate_numerology, calculate_weton,
    generate_reading_at,
};
use primbon_rand::SeededRandom;

fn profile() -> BirthProfile {
    let mut p = BirthProfile::new("Jane Doe", NaiveDate::from_ymd_opt(1990, 5, 14).unwrap());
    p.time_of_birth = Some("14:30".into());
    p.gender = Some(Gender::Female);
    p
}

fn calculators_bench(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(1990, 5, 14).unwrap();

    let mut group = c.benchmark_group("calculators");
    group.bench_function("bazi", |b| {
        b.iter(|| {
            let mut rng = SeededRandom::new(673_268_193);
            calculate_bazi(black_box(date), black_box(14), &mut rng)
        })
    });
    group.bench_function("weton", |b| b.iter(|| calculate_weton(black_box(date))));
    group.bench_function("numerology", |b| {
        b.iter(|| calculate_numerology(black_box("Jane Doe")))
    });
    group.finish();
}

fn reading_bench(c: &mut Criterion) {
    let p = profile();

    let mut group = c.benchmark_group("reading");
    group.bench_function("generate_reading_at", |b| {
        b.iter(|| generate_reading_at(black_box(&p), black_box(2026)))
    });
    group.finish();
}

criterion_group!(benches, calculators_bench, reading_bench);
criterion_main!(benches);

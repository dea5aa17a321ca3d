//! End-to-end tests over the four public entry points.

use chrono::NaiveDate;
use primbon_rs::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn jane() -> BirthProfile {
    let mut p = BirthProfile::new("Jane Doe", date(1990, 5, 14));
    p.time_of_birth = Some("14:30".into());
    p.gender = Some(Gender::Female);
    p
}

fn john() -> BirthProfile {
    let mut p = BirthProfile::new("John Smith", date(1988, 3, 21));
    p.time_of_birth = Some("08:00".into());
    p.gender = Some(Gender::Male);
    p
}

fn couple() -> CoupleProfile {
    CoupleProfile {
        partner_a: jane(),
        partner_b: john(),
    }
}

#[test]
fn hash_constants_pinned() {
    assert_eq!(hash_seed("jane doe-1990-5-14-12"), 673_268_191);
}

#[test]
fn golden_reading_jane_doe() {
    let r = generate_reading_at(&jane(), 2026);
    assert_eq!(r.western_zodiac.sign, ZodiacSign::Taurus);
    assert_eq!(r.bazi.day_master, FiveElement::Earth);
    assert_eq!(r.bazi.year_pillar.stem, HeavenlyStem::Geng);
    assert_eq!(r.bazi.year_pillar.branch, EarthlyBranch::Wu);
    assert_eq!(r.bazi.month_pillar.stem, HeavenlyStem::Xin);
    assert_eq!(r.bazi.day_pillar.stem, HeavenlyStem::Ji);
    assert_eq!(r.bazi.day_pillar.branch, EarthlyBranch::Mao);
    assert_eq!(r.bazi.hour_pillar.branch, EarthlyBranch::Wei);
    assert_eq!(r.weton.total_neptu, 13);
    assert_eq!(r.numerology.expression, 9);
}

#[test]
fn reading_determinism_modulo_timestamp() {
    let mut a = generate_reading_at(&jane(), 2026);
    let b = generate_reading_at(&jane(), 2026);
    a.generated_at = b.generated_at;
    assert_eq!(a, b);
}

#[test]
fn every_score_in_reading_is_in_range() {
    let r = generate_reading_at(&jane(), 2026);
    for d in &r.core_domains {
        assert!((1..=10).contains(&d.score));
    }
    for y in &r.yearly_predictions {
        assert!((1..=10).contains(&y.misfortune.score));
        for d in &y.domains {
            assert!((1..=10).contains(&d.score));
        }
    }
    for dp in &r.decade_predictions {
        assert!((1..=10).contains(&dp.mortality_theme.score));
    }
}

#[test]
fn compatibility_scores_clamped() {
    let r = generate_compatibility_reading(&couple());
    assert!((0..=100).contains(&r.combined_score));
    for s in &r.system_scores {
        assert!((0..=100).contains(&s.score), "{}: {}", s.label, s.score);
    }
    assert!(r.timeline.len() <= 6);
}

#[test]
fn primbon_class_examples_from_the_tables() {
    assert_eq!(PrimbonClass::from_combined_neptu(18), PrimbonClass::Pegat);
    assert_eq!(PrimbonClass::from_combined_neptu(18).score(), 25);
    assert_eq!(PrimbonClass::from_combined_neptu(20), PrimbonClass::Jodoh);
    assert_eq!(PrimbonClass::from_combined_neptu(20).score(), 95);
}

#[test]
fn date_ranking_partition_and_order() {
    let r = rank_wedding_dates(&couple(), date(2026, 9, 1), date(2026, 10, 31), DEFAULT_TOP_N);
    let total_days = 30 + 31;
    // Every day lands in exactly one of the two pools; the avoid list is a
    // truncated view of the rejected pool.
    assert!(r.all_dates.len() + r.avoid_dates.len() <= total_days);
    assert!(!r.all_dates.is_empty());
    for w in r.all_dates.windows(2) {
        assert!(w[0].score >= w[1].score);
    }
    for w in r.avoid_dates.windows(2) {
        assert!(w[0].score <= w[1].score);
    }
    for e in &r.avoid_dates {
        assert_eq!(e.score, 10);
        assert!(!r.all_dates.iter().any(|s| s.candidate.date == e.candidate.date));
    }
    assert!(r.best_dates.len() <= DEFAULT_TOP_N);
}

#[test]
fn recommendations_have_five_ranked_matches() {
    let reading = generate_reading_at(&jane(), 2026);
    let recs = generate_recommendations(&reading, MatchMode::Romance, None);
    assert_eq!(recs.zodiac_ranked.len(), 5);
    assert_eq!(recs.shio_ranked.len(), 5);
    assert!(recs.pair_comparison.is_none());
}

#[test]
fn recommendations_pair_comparison_is_deterministic() {
    let a = generate_reading_at(&jane(), 2026);
    let b = generate_reading_at(&john(), 2026);
    let x = generate_recommendations(&a, MatchMode::Colleague, Some(&b));
    let y = generate_recommendations(&a, MatchMode::Colleague, Some(&b));
    assert_eq!(x, y);
    assert!(x.pair_comparison.is_some());
}

#[test]
fn string_constructors_feed_the_engine() {
    let profile = profile_from_strings("Jane Doe", "1990-05-14", Some("14:30"), None).unwrap();
    let r = generate_reading_at(&profile, 2026);
    assert_eq!(r.weton.weton, "Senin Pahing");
}

#[test]
fn reading_serializes_to_json() {
    let r = generate_reading_at(&jane(), 2026);
    let json = serde_json::to_string(&r).unwrap();
    assert!(json.contains("\"day_master\":\"Earth\""));
    assert!(json.contains("Senin Pahing"));

    let c = generate_compatibility_reading(&couple());
    let json = serde_json::to_string(&c).unwrap();
    assert!(json.contains("\"combined_score\""));
}

#[test]
fn kua_remap_holds_through_the_entry_point() {
    for year in 1950..2050 {
        for gender in [Some(Gender::Male), Some(Gender::Female), Some(Gender::Other)] {
            let mut p = BirthProfile::new("Test Person", date(year, 6, 15));
            p.gender = gender;
            let r = generate_reading_at(&p, 2026);
            assert_ne!(r.feng_shui.kua_number, 5);
        }
    }
}

#[test]
fn weton_total_neptu_range_over_a_full_cycle() {
    let mut d = date(2026, 1, 1);
    for _ in 0..35 {
        let p = BirthProfile::new("Cycle Probe", d);
        let r = generate_reading_at(&p, 2026);
        assert!((7..=18).contains(&r.weton.total_neptu));
        d = d.succ_opt().unwrap();
    }
}

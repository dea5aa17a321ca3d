//! Decade predictions: nine calendar decades aligned to the birth decade.

use serde::Serialize;

use primbon_rand::{SeededRandom, hash_seed};

use crate::bazi::BaZiResult;
use crate::weton::WetonResult;
use crate::zodiac::WesternZodiac;

use super::advice::{DecadeStrategy, generate_decade_strategies};
use super::risk::{MortalityTheme, generate_mortality_theme};
use super::{ALL_CATEGORIES, DomainPrediction};

/// One decade's outlook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecadePrediction {
    pub start_year: i32,
    pub end_year: i32,
    pub start_age: i32,
    pub end_age: i32,
    pub life_phase: &'static str,
    pub overall_theme: &'static str,
    pub domains: Vec<DomainPrediction>,
    pub major_milestones: &'static [&'static str],
    pub key_advice: &'static str,
    pub mortality_theme: MortalityTheme,
    pub strategies: Vec<DecadeStrategy>,
}

const LIFE_PHASES: [&str; 9] = [
    "Awakening & Discovery",
    "Formation & Identity",
    "Exploration & Learning",
    "Building & Ambition",
    "Achievement & Influence",
    "Mastery & Legacy",
    "Wisdom & Reflection",
    "Transcendence & Peace",
    "Eternal Renewal",
];

const DECADE_THEMES: [&str; 9] = [
    "The seeds of your destiny are planted. Early experiences shape the foundation of your character and set the trajectory for decades to come.",
    "Identity crystallizes as you discover your unique gifts and passions. Key relationships and formative experiences forge the person you are becoming.",
    "The world expands before you. Education, travel, and new experiences broaden your perspective and build the skills that will define your career.",
    "Ambition takes center stage. Career milestones, romantic partnerships, and the pursuit of personal goals drive this dynamic and formative decade.",
    "The fruits of your earlier labors begin to ripen. Recognition, leadership, and significant achievements mark this powerful period of your life.",
    "Mastery and influence define this era. Your expertise is sought, your judgment is trusted, and your legacy begins to take shape.",
    "Deep wisdom and reflection characterize this enriching period. You harvest the insights of a life well-lived and share them generously.",
    "Inner peace and spiritual depth bring profound satisfaction. The boundaries between self and universe blur in the most beautiful way.",
    "A cycle of renewal and cosmic integration. Your spirit transcends ordinary concerns and touches the eternal.",
];

const MILESTONES: [&[&str]; 9] = [
    &["First conscious self-awareness", "Foundational family bonds", "Discovery of core temperament"],
    &["Academic breakthrough", "First deep friendship", "Emergence of core talents"],
    &["Educational milestone", "First significant relationship", "Discovery of life purpose"],
    &["Career establishment", "Deepening romantic partnership", "Financial foundation building"],
    &["Peak professional achievement", "Family expansion", "Community leadership"],
    &["Legacy project initiation", "Mentorship of next generation", "Wealth consolidation"],
    &["Spiritual deepening", "Knowledge synthesis", "Reconnection with core values"],
    &["Inner peace achievement", "Legacy completion", "Wisdom sharing"],
    &["Cosmic harmony", "Universal connection", "Transcendent fulfillment"],
];

const TITLES: [&str; 6] = [
    "Fortune & Luck",
    "Wealth & Finances",
    "Soulmate & Romance",
    "Social & Family",
    "Vitality & Milestones",
    "Core Growth",
];

const DECADE_PROGRESS: [&str; 5] = [
    "brings steady progress and quiet victories",
    "favors bold moves and transformative leaps",
    "rewards patience and strategic planning",
    "opens doors through unexpected connections",
    "deepens your understanding through meaningful challenges",
];

const DOMAIN_ADVICE: [&str; 4] = [
    "Embrace the rhythm of this decade and trust in your inner guidance.",
    "Focus on building rather than breaking. Construction yields greater returns than destruction.",
    "Relationships formed in this period carry lasting significance — choose connections wisely.",
    "Your unique combination of elements gives you an edge — use it with intention.",
];

const KEY_ADVICE: [&str; 4] = [
    "This decade's energy rewards those who balance ambition with inner peace.",
    "The cosmic currents of this period favor authentic expression over conformity.",
    "Growth comes not from what you acquire, but from what you become.",
    "Trust in the timing of your life. Every decade serves a sacred purpose in your journey.",
];

/// Generate up to nine decade predictions, starting at the decade of
/// birth and clipped to ages 0..=100.
pub fn generate_decade_predictions(
    rng: &mut SeededRandom,
    birth_year: i32,
    bazi: &BaZiResult,
    zodiac: &WesternZodiac,
    weton: &WetonResult,
) -> Vec<DecadePrediction> {
    let mut decades = Vec::with_capacity(9);
    let start_decade = birth_year.div_euclid(10) * 10;

    for i in 0..9 {
        let decade_start = start_decade + i * 10;
        let decade_end = decade_start + 9;
        let start_age = (decade_start - birth_year).max(0);
        let end_age = decade_end - birth_year;

        if end_age < 0 {
            continue;
        }
        if start_age > 100 {
            break;
        }

        let domains: Vec<DomainPrediction> = ALL_CATEGORIES
            .iter()
            .enumerate()
            .map(|(ci, &category)| {
                let seed = hash_seed(&format!(
                    "decade-{decade_start}-{}-{}",
                    category.key(),
                    bazi.day_master.name()
                ));
                let mut local = SeededRandom::new(seed);
                let title = TITLES[ci];
                let summary = format!(
                    "During ages {start_age}–{end_age}, your {} is shaped by the interplay of {} element energy and {}'s cosmic influence. This decade {}.",
                    title.to_lowercase(),
                    bazi.day_master.name(),
                    zodiac.sign.name(),
                    *local.pick(&DECADE_PROGRESS)
                );
                DomainPrediction {
                    category,
                    icon: category.icon(),
                    title,
                    summary,
                    details: format!(
                        "Your BaZi chart shows the {} Day Master interacting with the Luck Cycle pillar for this period. The Weton energy of {} (Neptu: {}) adds a layer of Javanese spiritual significance.",
                        bazi.day_master.name(),
                        weton.weton,
                        weton.total_neptu
                    ),
                    score: local.next_int(5, 10),
                    advice: *local.pick(&DOMAIN_ADVICE),
                }
            })
            .collect();

        let idx = (i as usize).min(LIFE_PHASES.len() - 1);
        decades.push(DecadePrediction {
            start_year: decade_start,
            end_year: decade_end,
            start_age,
            end_age,
            life_phase: LIFE_PHASES[idx],
            overall_theme: DECADE_THEMES[idx],
            domains,
            major_milestones: MILESTONES[idx],
            key_advice: *rng.pick(&KEY_ADVICE),
            mortality_theme: generate_mortality_theme(decade_start, bazi, weton),
            strategies: generate_decade_strategies(decade_start, bazi, zodiac, weton),
        });
    }

    decades
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::bazi::calculate_bazi;
    use crate::weton::calculate_weton;

    fn fixtures() -> (BaZiResult, WesternZodiac, WetonResult) {
        let date = NaiveDate::from_ymd_opt(1990, 5, 14).unwrap();
        let mut rng = SeededRandom::new(1);
        (
            calculate_bazi(date, 14, &mut rng),
            WesternZodiac::for_month_day(5, 14),
            calculate_weton(date),
        )
    }

    fn decades_for(birth_year: i32) -> Vec<DecadePrediction> {
        let (bazi, zodiac, weton) = fixtures();
        let mut rng = SeededRandom::new(99);
        generate_decade_predictions(&mut rng, birth_year, &bazi, &zodiac, &weton)
    }

    #[test]
    fn nine_decades_from_birth_decade() {
        let d = decades_for(1990);
        assert_eq!(d.len(), 9);
        assert_eq!(d[0].start_year, 1990);
        assert_eq!(d[8].start_year, 2070);
        assert_eq!(d[8].end_age, 89);
    }

    #[test]
    fn start_age_clips_at_zero() {
        // Born mid-decade: the first decade starts before birth.
        let d = decades_for(1995);
        assert_eq!(d[0].start_year, 1990);
        assert_eq!(d[0].start_age, 0);
        assert_eq!(d[0].end_age, 4);
    }

    #[test]
    fn life_phases_follow_decade_order() {
        let d = decades_for(1990);
        assert_eq!(d[0].life_phase, "Awakening & Discovery");
        assert_eq!(d[8].life_phase, "Eternal Renewal");
        assert_eq!(d[4].major_milestones.len(), 3);
    }

    #[test]
    fn domain_scores_in_five_to_ten() {
        for dp in decades_for(1990) {
            assert_eq!(dp.domains.len(), 6);
            for dom in &dp.domains {
                assert!((5..=10).contains(&dom.score));
            }
        }
    }

    #[test]
    fn summary_names_age_window() {
        let d = decades_for(1990);
        assert!(d[1].domains[0].summary.contains("ages 10–19"));
    }

    #[test]
    fn deterministic() {
        assert_eq!(decades_for(1990), decades_for(1990));
    }
}

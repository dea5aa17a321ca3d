//! Misfortune-index and mortality-theme rule pack.
//!
//! Both derive their own local stream from a composite seed, so a single
//! year's or decade's risk block is reproducible in isolation.

use serde::Serialize;

use primbon_rand::{SeededRandom, hash_seed};

use crate::bazi::BaZiResult;
use crate::weton::WetonResult;
use crate::zodiac::WesternZodiac;

use super::dedup_preserving;

/// Challenge outlook for one year: score, themes, and protective actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MisfortuneIndex {
    /// 1-10; higher is more challenging.
    pub score: i32,
    pub themes: Vec<&'static str>,
    pub triggers: Vec<&'static str>,
    pub protections: Vec<&'static str>,
    pub watch_indicators: Vec<&'static str>,
    /// Rule trace: which signals produced this block.
    pub explanation: String,
    pub signals_used: Vec<String>,
}

/// Transition/closure outlook for one decade, softly framed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MortalityTheme {
    /// 1-10; higher warrants more caution.
    pub score: i32,
    pub theme: &'static str,
    pub soft_label: &'static str,
    pub triggers: Vec<&'static str>,
    pub protections: Vec<&'static str>,
    pub explanation: String,
    pub signals_used: Vec<String>,
}

const MISFORTUNE_THEMES: [&str; 8] = [
    "Financial turbulence — unexpected expenses or investment losses",
    "Relationship friction — misunderstandings with close ones",
    "Career instability — shifting dynamics at work or business",
    "Health vulnerability — stress-related ailments or fatigue",
    "Legal or contractual complications",
    "Travel disruptions or relocation challenges",
    "Trust issues — deception from unexpected sources",
    "Emotional overwhelm — anxiety or decision fatigue",
];

const MISFORTUNE_TRIGGERS: [&str; 5] = [
    "Overcommitting without adequate reserves",
    "Ignoring early warning signs in health or finances",
    "Rushing major decisions under pressure",
    "Neglecting important relationships during busy periods",
    "Taking on excessive risk without proper due diligence",
];

const MISFORTUNE_PROTECTIONS: [&str; 7] = [
    "Maintain emergency savings covering 3–6 months",
    "Schedule regular health check-ups and wellness routines",
    "Seek counsel before signing contracts or making large purchases",
    "Practice daily mindfulness or meditation for emotional resilience",
    "Strengthen communication with partner and family members",
    "Diversify income sources to buffer financial shocks",
    "Avoid impulsive travel or relocation decisions this period",
];

const MISFORTUNE_WATCH: [&str; 5] = [
    "Sudden changes in workplace dynamics or team composition",
    "Recurring health symptoms that persist beyond 2 weeks",
    "Financial patterns that deviate significantly from expectations",
    "Relationships that feel increasingly draining or one-sided",
    "Unusual series of minor accidents or equipment failures",
];

/// Misfortune index for one year. The score starts from a seeded draw and
/// shifts by one for high (>14) or low (<9) neptu, clamped to 1..=10.
pub fn generate_misfortune_index(
    year: i32,
    bazi: &BaZiResult,
    weton: &WetonResult,
    zodiac: &WesternZodiac,
) -> MisfortuneIndex {
    let seed = hash_seed(&format!(
        "misfortune-{year}-{}-{}",
        bazi.day_master.name(),
        weton.total_neptu
    ));
    let mut rng = SeededRandom::new(seed);

    let clash_score = rng.next_int(1, 10);
    let neptu_modifier = if weton.total_neptu > 14 {
        -1
    } else if weton.total_neptu < 9 {
        1
    } else {
        0
    };
    let score = (clash_score + neptu_modifier).clamp(1, 10);

    let num_themes = if score > 7 {
        3
    } else if score > 4 {
        2
    } else {
        1
    };
    let themes: Vec<&str> = (0..num_themes).map(|_| *rng.pick(&MISFORTUNE_THEMES)).collect();
    let triggers: Vec<&str> = (0..2).map(|_| *rng.pick(&MISFORTUNE_TRIGGERS)).collect();
    let protections: Vec<&str> = (0..3).map(|_| *rng.pick(&MISFORTUNE_PROTECTIONS)).collect();
    let watch: Vec<&str> = (0..2).map(|_| *rng.pick(&MISFORTUNE_WATCH)).collect();

    MisfortuneIndex {
        score,
        themes: dedup_preserving(themes),
        triggers: dedup_preserving(triggers),
        protections: dedup_preserving(protections),
        watch_indicators: dedup_preserving(watch),
        explanation: format!(
            "Misfortune index derived from {} Day Master interaction with {year}'s annual energy, modulated by Neptu score ({}) and {} cosmic tension points.",
            bazi.day_master.name(),
            weton.total_neptu,
            zodiac.sign.name()
        ),
        signals_used: vec![
            "Saju/BaZi Pillar Clash".to_string(),
            "Weton Neptu Range".to_string(),
            format!("{} Annual Transit", zodiac.sign.name()),
        ],
    }
}

const MORTALITY_THEMES: [&str; 5] = [
    "A period of profound endings and new beginnings",
    "Transition phase — closing one chapter to open another",
    "Releasing old patterns to make space for renewal",
    "Deep transformation through surrender and acceptance",
    "A crossroads requiring clarity of purpose and courage",
];

const MORTALITY_SOFT_LABELS: [&str; 5] = [
    "Life Transitions & Renewal",
    "Endings That Create Beginnings",
    "Deep Cycle of Transformation",
    "Release & Regeneration Phase",
    "Crossroads of Purpose",
];

const MORTALITY_TRIGGERS: [&str; 5] = [
    "Accumulated stress from overwork without recovery",
    "Unresolved emotional patterns reaching critical mass",
    "Environmental or lifestyle factors requiring attention",
    "Neglecting preventive health measures over extended periods",
    "Major life transitions creating compound stress",
];

const MORTALITY_PROTECTIONS: [&str; 5] = [
    "Regular preventive health screenings and proactive wellness",
    "Building and maintaining a strong emotional support network",
    "Practicing acceptance and emotional processing techniques",
    "Estate and legacy planning for peace of mind",
    "Developing spiritual practices that provide grounding and meaning",
];

/// Mortality theme for one decade. The age modifier adds +2 past 60, +1
/// past 40, and -1 before that; the theme and its soft label share one
/// index.
pub fn generate_mortality_theme(
    decade_start: i32,
    bazi: &BaZiResult,
    weton: &WetonResult,
) -> MortalityTheme {
    let seed = hash_seed(&format!(
        "mortality-{decade_start}-{}-{}",
        bazi.day_master.name(),
        weton.total_neptu
    ));
    let mut rng = SeededRandom::new(seed);

    let base_score = rng.next_int(1, 10);
    let age_modifier = if decade_start > 60 {
        2
    } else if decade_start > 40 {
        1
    } else {
        -1
    };
    let score = (base_score + age_modifier).clamp(1, 10);

    let idx = rng.next_int(0, MORTALITY_THEMES.len() as i32 - 1) as usize;
    let triggers: Vec<&str> = (0..2).map(|_| *rng.pick(&MORTALITY_TRIGGERS)).collect();
    let protections: Vec<&str> = (0..3).map(|_| *rng.pick(&MORTALITY_PROTECTIONS)).collect();

    MortalityTheme {
        score,
        theme: MORTALITY_THEMES[idx],
        soft_label: MORTALITY_SOFT_LABELS[idx],
        triggers,
        protections,
        explanation: format!(
            "Mortality theme computed from {} Day Master life-cycle position, {} element vulnerability, and Weton Neptu gravitational pull ({}).",
            bazi.day_master.name(),
            bazi.weakest_element.name(),
            weton.total_neptu
        ),
        signals_used: vec![
            "BaZi Luck Cycle Phase".to_string(),
            format!("Weakest Element: {}", bazi.weakest_element.name()),
            "Weton Neptu Score".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::bazi::calculate_bazi;
    use crate::weton::calculate_weton;

    fn fixtures() -> (BaZiResult, WetonResult, WesternZodiac) {
        let date = NaiveDate::from_ymd_opt(1990, 5, 14).unwrap();
        let mut rng = SeededRandom::new(1);
        (
            calculate_bazi(date, 14, &mut rng),
            calculate_weton(date),
            WesternZodiac::for_month_day(5, 14),
        )
    }

    #[test]
    fn misfortune_score_in_range() {
        let (bazi, weton, zodiac) = fixtures();
        for year in 2020..2060 {
            let m = generate_misfortune_index(year, &bazi, &weton, &zodiac);
            assert!((1..=10).contains(&m.score), "year {year}: {}", m.score);
        }
    }

    #[test]
    fn misfortune_theme_count_follows_score() {
        let (bazi, weton, zodiac) = fixtures();
        for year in 2020..2060 {
            let m = generate_misfortune_index(year, &bazi, &weton, &zodiac);
            let max_themes = if m.score > 7 {
                3
            } else if m.score > 4 {
                2
            } else {
                1
            };
            // Dedup may shrink the list but never grow it.
            assert!(m.themes.len() <= max_themes && !m.themes.is_empty());
        }
    }

    #[test]
    fn misfortune_is_locally_reproducible() {
        let (bazi, weton, zodiac) = fixtures();
        let a = generate_misfortune_index(2027, &bazi, &weton, &zodiac);
        let b = generate_misfortune_index(2027, &bazi, &weton, &zodiac);
        assert_eq!(a, b);
    }

    #[test]
    fn misfortune_varies_by_year() {
        let (bazi, weton, zodiac) = fixtures();
        let years: Vec<MisfortuneIndex> = (2026..2036)
            .map(|y| generate_misfortune_index(y, &bazi, &weton, &zodiac))
            .collect();
        assert!(years.windows(2).any(|w| w[0].score != w[1].score || w[0].themes != w[1].themes));
    }

    #[test]
    fn misfortune_lists_are_deduplicated() {
        let (bazi, weton, zodiac) = fixtures();
        for year in 2020..2040 {
            let m = generate_misfortune_index(year, &bazi, &weton, &zodiac);
            let mut seen = m.protections.clone();
            seen.dedup();
            assert_eq!(seen.len(), m.protections.len());
        }
    }

    #[test]
    fn mortality_age_modifier_shifts_scores() {
        let (bazi, weton, _) = fixtures();
        for decade in [1990, 2030, 2050, 2070] {
            let m = generate_mortality_theme(decade, &bazi, &weton);
            assert!((1..=10).contains(&m.score));
        }
    }

    #[test]
    fn mortality_theme_and_label_share_index() {
        let (bazi, weton, _) = fixtures();
        let m = generate_mortality_theme(2040, &bazi, &weton);
        let theme_idx = MORTALITY_THEMES.iter().position(|t| *t == m.theme).unwrap();
        let label_idx = MORTALITY_SOFT_LABELS
            .iter()
            .position(|l| *l == m.soft_label)
            .unwrap();
        assert_eq!(theme_idx, label_idx);
    }

    #[test]
    fn mortality_explanation_names_weakest_element() {
        let (bazi, weton, _) = fixtures();
        let m = generate_mortality_theme(2040, &bazi, &weton);
        assert!(m.explanation.contains("Water"));
        assert!(m.signals_used.iter().any(|s| s.contains("Water")));
    }
}

//! Four-Pillars (BaZi) chart calculation.
//!
//! Pillar arithmetic is a fixed-epoch approximation: the year cycle is
//! anchored at 4 CE, the month pillar derives from the calendar month (not
//! true solar terms), and the day pillar counts whole days from the
//! 2000-01-07 Jia-Zi epoch. Intermediate indices stay signed; wrapping
//! happens once, inside [`Pillar::from_raw_indices`].

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use primbon_base::{ALL_ELEMENTS, FiveElement, Pillar};
use primbon_rand::SeededRandom;
use primbon_time::days_from_day_pillar_epoch;

use crate::shen_sha::{ChartIndices, ShenShaEntry, identify_shen_sha};
use crate::ten_gods::{TenGodRelation, calculate_ten_gods};
use crate::yong_shen::{YongShenResult, calculate_yong_shen};

/// Per-element counts over the four pillars (8 points total: each pillar
/// contributes its stem element and its branch element).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementBalance {
    counts: [u32; 5],
}

impl ElementBalance {
    /// Count stem and branch elements across the four pillars.
    pub fn tally(pillars: &[Pillar; 4]) -> Self {
        let mut counts = [0u32; 5];
        for p in pillars {
            counts[p.stem_element().index() as usize] += 1;
            counts[p.branch_element().index() as usize] += 1;
        }
        Self { counts }
    }

    /// Count for one element.
    pub fn count(&self, element: FiveElement) -> u32 {
        self.counts[element.index() as usize]
    }

    /// Total points (always 8 for a four-pillar chart).
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Element with the highest count; ties keep the earlier element in
    /// canonical order.
    pub fn dominant(&self) -> FiveElement {
        let mut best = ALL_ELEMENTS[0];
        for el in ALL_ELEMENTS {
            if self.count(el) > self.count(best) {
                best = el;
            }
        }
        best
    }

    /// Element with the lowest count; ties keep the earlier element.
    pub fn weakest(&self) -> FiveElement {
        let mut worst = ALL_ELEMENTS[0];
        for el in ALL_ELEMENTS {
            if self.count(el) < self.count(worst) {
                worst = el;
            }
        }
        worst
    }
}

/// One 10-year luck-cycle window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LuckCycle {
    pub start_age: u32,
    pub end_age: u32,
    pub pillar: Pillar,
    pub theme: &'static str,
    pub description: &'static str,
}

/// A complete Four-Pillars chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaZiResult {
    pub year_pillar: Pillar,
    pub month_pillar: Pillar,
    pub day_pillar: Pillar,
    pub hour_pillar: Pillar,
    /// Element of the Day pillar's stem; anchor of all relation scoring.
    pub day_master: FiveElement,
    pub element_balance: ElementBalance,
    pub dominant_element: FiveElement,
    pub weakest_element: FiveElement,
    pub personality: &'static str,
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub luck_cycles: Vec<LuckCycle>,
    pub ten_gods: Vec<TenGodRelation>,
    pub shen_sha: Vec<ShenShaEntry>,
    pub yong_shen: YongShenResult,
}

const CYCLE_THEMES: [&str; 8] = [
    "Foundation & Learning",
    "Growth & Discovery",
    "Ambition & Achievement",
    "Mastery & Influence",
    "Wisdom & Harvest",
    "Legacy & Reflection",
    "Renewal & Transformation",
    "Transcendence & Peace",
];

const CYCLE_DESCRIPTIONS: [&str; 8] = [
    "A period of building essential foundations. Focus on education, family bonds, and discovering your innate talents.",
    "Exploration and expansion mark this cycle. New opportunities emerge as your confidence grows and horizons broaden.",
    "Ambition reaches its peak. Career advancement and significant achievements define this transformative decade.",
    "You command respect and influence. Your expertise is recognized, and leadership roles come naturally.",
    "The fruits of your labor ripen. Financial stability and emotional fulfillment characterize this rewarding era.",
    "Deep wisdom guides your decisions. Reflection on your journey brings clarity and purposeful action.",
    "A powerful cycle of reinvention. Old patterns dissolve as new paths of meaning emerge.",
    "Inner peace and spiritual depth define this cycle. You find harmony between action and stillness.",
];

/// Personality reading for a Day Master element.
pub const fn personality_text(day_master: FiveElement) -> &'static str {
    match day_master {
        FiveElement::Wood => "You are growth-oriented, compassionate, and visionary. Like a tree reaching for sunlight, you seek expansion and nurture those around you. Your creative spirit and idealism drive you to make the world a better place.",
        FiveElement::Fire => "You radiate warmth, passion, and charisma. Your dynamic energy ignites inspiration in others. Impulsive yet generous, you live fully and love deeply, leaving a trail of light wherever you go.",
        FiveElement::Earth => "You embody stability, reliability, and nurturing wisdom. Grounded and practical, you are the foundation others build upon. Your patience and methodical approach lead to lasting achievements.",
        FiveElement::Metal => "You possess clarity, precision, and unwavering determination. Like refined steel, you are strong and decisive. Your sense of justice and discipline command respect and admiration.",
        FiveElement::Water => "You flow with adaptability, intuition, and deep intelligence. Like a river, you find your way around obstacles with grace. Your reflective nature conceals profound wisdom and emotional depth.",
    }
}

/// Strength keywords for a Day Master element.
pub const fn strengths_for(day_master: FiveElement) -> &'static [&'static str] {
    match day_master {
        FiveElement::Wood => &["Creative vision", "Empathy", "Growth mindset", "Leadership through inspiration"],
        FiveElement::Fire => &["Charismatic presence", "Passionate drive", "Quick decisiveness", "Infectious optimism"],
        FiveElement::Earth => &["Rock-solid reliability", "Strategic patience", "Nurturing support", "Practical wisdom"],
        FiveElement::Metal => &["Sharp intellect", "Moral integrity", "Organizational mastery", "Resilience under pressure"],
        FiveElement::Water => &["Fluid adaptability", "Deep intuition", "Diplomatic finesse", "Emotional intelligence"],
    }
}

/// Challenge keywords for a Day Master element.
pub const fn challenges_for(day_master: FiveElement) -> &'static [&'static str] {
    match day_master {
        FiveElement::Wood => &["Overextending yourself", "Idealism clashing with reality", "Difficulty saying no"],
        FiveElement::Fire => &["Burnout from excessive energy", "Impulsive decisions", "Needing constant stimulation"],
        FiveElement::Earth => &["Resistance to change", "Overthinking", "Taking on others' burdens"],
        FiveElement::Metal => &["Rigidity in thinking", "Difficulty expressing emotions", "Perfectionism"],
        FiveElement::Water => &["Indecisiveness", "Emotional overwhelm", "Fear of commitment"],
    }
}

/// Compute the Four-Pillars chart for a birth instant.
///
/// `hour` is the raw birth hour (wrapped modulo 24 by the double-hour
/// formula). The generator is threaded through for callers that chain
/// narrative generation off the same stream; the pillar math itself draws
/// nothing from it.
pub fn calculate_bazi(date: NaiveDate, hour: i64, _rng: &mut SeededRandom) -> BaZiResult {
    let year = i64::from(date.year());

    // Year pillar: 60-year cycle anchored so 4 CE = Jia-Zi.
    let year_stem_raw = (year - 4) % 10;
    let year_branch_raw = (year - 4) % 12;
    let year_pillar = Pillar::from_raw_indices(year_stem_raw, year_branch_raw);

    // Month pillar: calendar-month approximation.
    let month = i64::from(date.month());
    let month_branch_raw = (month + 1) % 12;
    let month_stem_raw = (year_stem_raw * 2 + month) % 10;
    let month_pillar = Pillar::from_raw_indices(month_stem_raw, month_branch_raw);

    // Day pillar: whole days from the Jia-Zi epoch.
    let offset = days_from_day_pillar_epoch(date);
    let day_stem_raw = offset % 10;
    let day_branch_raw = offset % 12;
    let day_pillar = Pillar::from_raw_indices(day_stem_raw, day_branch_raw);

    // Hour pillar: traditional double-hours offset by one hour.
    let hour_branch_raw = ((hour + 1) % 24).div_euclid(2);
    let hour_stem_raw = day_stem_raw * 2 + hour_branch_raw;
    let hour_pillar = Pillar::from_raw_indices(hour_stem_raw, hour_branch_raw);

    let pillars = [year_pillar, month_pillar, day_pillar, hour_pillar];
    let element_balance = ElementBalance::tally(&pillars);
    let day_master = day_pillar.stem_element();
    let dominant_element = element_balance.dominant();
    let weakest_element = element_balance.weakest();

    let luck_cycles = (0..8)
        .map(|i| LuckCycle {
            start_age: i * 10,
            end_age: (i + 1) * 10 - 1,
            pillar: Pillar::from_raw_indices(
                month_stem_raw + i64::from(i) + 1,
                month_branch_raw + i64::from(i) + 1,
            ),
            theme: CYCLE_THEMES[i as usize],
            description: CYCLE_DESCRIPTIONS[i as usize],
        })
        .collect();

    let ten_gods = calculate_ten_gods(
        day_pillar.stem,
        year_pillar,
        month_pillar,
        day_pillar,
        hour_pillar,
    );
    let shen_sha = identify_shen_sha(&ChartIndices {
        year_branch: year_pillar.branch.index(),
        month_branch: month_pillar.branch.index(),
        day_branch: day_pillar.branch.index(),
        hour_branch: hour_pillar.branch.index(),
        day_stem: day_pillar.stem.index(),
    });
    let yong_shen = calculate_yong_shen(&element_balance, day_master);

    BaZiResult {
        year_pillar,
        month_pillar,
        day_pillar,
        hour_pillar,
        day_master,
        element_balance,
        dominant_element,
        weakest_element,
        personality: personality_text(day_master),
        strengths: strengths_for(day_master),
        challenges: challenges_for(day_master),
        luck_cycles,
        ten_gods,
        shen_sha,
        yong_shen,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primbon_base::{EarthlyBranch, HeavenlyStem};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bazi(y: i32, m: u32, d: u32, hour: i64) -> BaZiResult {
        let mut rng = SeededRandom::new(1);
        calculate_bazi(date(y, m, d), hour, &mut rng)
    }

    #[test]
    fn jane_doe_pillars() {
        let b = bazi(1990, 5, 14, 14);
        assert_eq!(b.year_pillar.stem, HeavenlyStem::Geng);
        assert_eq!(b.year_pillar.branch, EarthlyBranch::Wu);
        assert_eq!(b.month_pillar.stem, HeavenlyStem::Xin);
        assert_eq!(b.month_pillar.branch, EarthlyBranch::Wu);
        assert_eq!(b.day_pillar.stem, HeavenlyStem::Ji);
        assert_eq!(b.day_pillar.branch, EarthlyBranch::Mao);
        assert_eq!(b.hour_pillar.stem, HeavenlyStem::Xin);
        assert_eq!(b.hour_pillar.branch, EarthlyBranch::Wei);
        assert_eq!(b.day_master, FiveElement::Earth);
    }

    #[test]
    fn jane_doe_balance() {
        let b = bazi(1990, 5, 14, 14);
        assert_eq!(b.element_balance.count(FiveElement::Wood), 1);
        assert_eq!(b.element_balance.count(FiveElement::Fire), 2);
        assert_eq!(b.element_balance.count(FiveElement::Earth), 2);
        assert_eq!(b.element_balance.count(FiveElement::Metal), 3);
        assert_eq!(b.element_balance.count(FiveElement::Water), 0);
        assert_eq!(b.dominant_element, FiveElement::Metal);
        assert_eq!(b.weakest_element, FiveElement::Water);
    }

    #[test]
    fn jane_doe_yong_shen() {
        let b = bazi(1990, 5, 14, 14);
        assert_eq!(b.yong_shen.useful_element, FiveElement::Metal);
        assert_eq!(b.yong_shen.avoid_element, FiveElement::Fire);
    }

    #[test]
    fn epoch_day_is_jia_zi() {
        let b = bazi(2000, 1, 7, 12);
        assert_eq!(b.day_pillar.stem, HeavenlyStem::Jia);
        assert_eq!(b.day_pillar.branch, EarthlyBranch::Zi);
    }

    #[test]
    fn balance_always_sums_to_eight() {
        for (y, m, d, h) in [
            (1990, 5, 14, 14),
            (2000, 1, 7, 0),
            (1961, 12, 31, 23),
            (2024, 2, 29, 6),
            (1875, 7, 1, 12),
        ] {
            let b = bazi(y, m, d, h);
            assert_eq!(b.element_balance.total(), 8, "{y}-{m}-{d}");
        }
    }

    #[test]
    fn dominant_ties_break_in_element_order() {
        // 2000-01-07 noon: check the tie-break is first-encountered.
        let b = bazi(2000, 1, 7, 12);
        let dom = b.dominant_element;
        for el in ALL_ELEMENTS {
            if b.element_balance.count(el) > b.element_balance.count(dom) {
                panic!("{el:?} beats reported dominant");
            }
            if b.element_balance.count(el) == b.element_balance.count(dom) {
                assert!(el.index() >= dom.index() || el == dom);
                break;
            }
        }
    }

    #[test]
    fn hour_branch_double_hours() {
        // 23:00 wraps into the Zi double-hour of the next cycle.
        let b = bazi(1990, 5, 14, 23);
        assert_eq!(b.hour_pillar.branch, EarthlyBranch::Zi);
        // 00:00 also lands in Zi.
        let b = bazi(1990, 5, 14, 0);
        assert_eq!(b.hour_pillar.branch, EarthlyBranch::Zi);
        // 12:00 is the Wu double-hour.
        let b = bazi(1990, 5, 14, 12);
        assert_eq!(b.hour_pillar.branch, EarthlyBranch::Wu);
    }

    #[test]
    fn luck_cycles_step_from_month_pillar() {
        let b = bazi(1990, 5, 14, 14);
        assert_eq!(b.luck_cycles.len(), 8);
        assert_eq!(b.luck_cycles[0].start_age, 0);
        assert_eq!(b.luck_cycles[7].end_age, 79);
        // Month pillar Xin(7)-Wu(6): first cycle is stem 8, branch 7.
        assert_eq!(b.luck_cycles[0].pillar.stem, HeavenlyStem::Ren);
        assert_eq!(b.luck_cycles[0].pillar.branch, EarthlyBranch::Wei);
    }

    #[test]
    fn pre_epoch_dates_wrap_cleanly() {
        let b = bazi(1961, 3, 5, 9);
        // Sanity: all indices land in range, balance still sums to 8.
        assert_eq!(b.element_balance.total(), 8);
        assert_eq!(b.luck_cycles.len(), 8);
    }

    #[test]
    fn deterministic_for_same_input() {
        let a = bazi(1988, 3, 21, 8);
        let b = bazi(1988, 3, 21, 8);
        assert_eq!(a, b);
    }

    #[test]
    fn ten_gods_has_three_entries() {
        let b = bazi(1990, 5, 14, 14);
        assert_eq!(b.ten_gods.len(), 3);
    }
}

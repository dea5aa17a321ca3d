//! The four per-system compatibility scorers.
//!
//! Each scorer starts from a baseline and applies fixed deltas per matched
//! rule, recording a human-readable detail line for every rule that fired.
//! Scores clamp to 0..=100; summary banding reads the raw accumulated
//! value before clamping.

use serde::Serialize;

use primbon_base::{
    ALL_ELEMENTS, PrimbonClass, branches_clash, branches_combine, element_affinity,
    elements_harmonize, elements_oppose,
};
use primbon_engine::{BaZiResult, ChineseZodiac, WesternZodiac, WetonResult};

/// Which divination system produced a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemKind {
    Bazi,
    Weton,
    Zodiac,
    Shio,
}

/// One system's contribution to the couple score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemScore {
    pub system: SystemKind,
    pub label: &'static str,
    /// Clamped to 0..=100.
    pub score: i32,
    pub summary: String,
    pub details: Vec<String>,
    pub signals_used: &'static [&'static str],
}

/// The couple's primbon marriage class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrimbonMatch {
    pub class: PrimbonClass,
    pub score: u32,
    pub interpretation: &'static str,
    pub advice: &'static str,
}

// ---------------------------------------------------------------------------
// 1. BaZi / Four Pillars
// ---------------------------------------------------------------------------

pub fn calculate_bazi_compatibility(a: &BaZiResult, b: &BaZiResult) -> SystemScore {
    let mut details = Vec::new();
    let mut score: i32 = 50;

    let pillars_a = [a.year_pillar, a.month_pillar, a.day_pillar, a.hour_pillar];
    let pillars_b = [b.year_pillar, b.month_pillar, b.day_pillar, b.hour_pillar];
    let pillar_names = ["Year", "Month", "Day", "Hour"];

    let mut combos = 0;
    let mut clashes = 0;
    for i in 0..4 {
        let bi_a = pillars_a[i].branch.index();
        let bi_b = pillars_b[i].branch.index();

        if branches_combine(bi_a, bi_b) {
            combos += 1;
            score += 8;
            details.push(format!(
                "{} Pillar: Branch Combination (六合) — {}+{} form a harmonious bond.",
                pillar_names[i],
                pillars_a[i].branch.chinese(),
                pillars_b[i].branch.chinese()
            ));
        }
        if branches_clash(bi_a, bi_b) {
            clashes += 1;
            score -= 10;
            details.push(format!(
                "{} Pillar: Branch Clash (六冲) — {} clashes with {}. Friction in this life area.",
                pillar_names[i],
                pillars_a[i].branch.chinese(),
                pillars_b[i].branch.chinese()
            ));
        }
    }

    // Day Master relation carries double weight.
    let dm_affinity = element_affinity(a.day_master, b.day_master);
    score += dm_affinity * 2;
    if dm_affinity > 0 {
        details.push(format!(
            "Day Masters: {} and {} are in productive harmony — a strong natural connection.",
            a.day_master.name(),
            b.day_master.name()
        ));
    } else if dm_affinity < 0 {
        details.push(format!(
            "Day Masters: {} and {} have a controlling relationship — requires mutual understanding.",
            a.day_master.name(),
            b.day_master.name()
        ));
    } else {
        details.push(format!(
            "Day Masters: {} and {} have a neutral relationship — steady and balanced.",
            a.day_master.name(),
            b.day_master.name()
        ));
    }

    // Spouse Palace: the Day branches.
    let spouse_a = a.day_pillar.branch.index();
    let spouse_b = b.day_pillar.branch.index();
    if branches_combine(spouse_a, spouse_b) {
        score += 12;
        details.push(
            "Spouse Palace: Day Branches form a Six Combination — an exceptionally strong marital bond."
                .to_string(),
        );
    } else if branches_clash(spouse_a, spouse_b) {
        score -= 8;
        details.push(
            "Spouse Palace: Day Branches clash — the marital palace carries tension. Extra care needed in daily interactions."
                .to_string(),
        );
    }

    // Element complementarity: one partner fills what the other lacks.
    let mut complementary = 0;
    for el in ALL_ELEMENTS {
        if a.element_balance.count(el) <= 1 && b.element_balance.count(el) >= 2 {
            complementary += 1;
        }
        if b.element_balance.count(el) <= 1 && a.element_balance.count(el) >= 2 {
            complementary += 1;
        }
    }
    if complementary >= 2 {
        score += 8;
        details.push(
            "Element Balance: Partners complement each other's elemental weaknesses — a naturally balancing union."
                .to_string(),
        );
    }

    if a.yong_shen.useful_element == b.day_master || b.yong_shen.useful_element == a.day_master {
        score += 10;
        details.push(
            "Yong Shen Alignment: One partner's Day Master IS the other's Useful God (用神) — a deeply beneficial resonance."
                .to_string(),
        );
    }

    let summary = if combos > clashes {
        "The Four Pillars reveal more harmony than friction — a naturally supportive connection."
    } else if clashes > combos {
        "There are notable clashes between your pillars. This doesn't doom the relationship but signals areas requiring conscious effort."
    } else {
        "A balanced mix of harmony and tension — a relationship with both comfort and growth."
    };

    SystemScore {
        system: SystemKind::Bazi,
        label: "BaZi / Four Pillars",
        score: score.clamp(0, 100),
        summary: summary.to_string(),
        details,
        signals_used: &[
            "Branch Combinations",
            "Branch Clashes",
            "Day Master Elements",
            "Spouse Palace",
            "Yong Shen",
        ],
    }
}

// ---------------------------------------------------------------------------
// 2. Weton / Primbon
// ---------------------------------------------------------------------------

/// The primbon class fully determines the weton system score; there is no
/// delta accumulation.
pub fn calculate_weton_compatibility(
    a: &WetonResult,
    b: &WetonResult,
) -> (SystemScore, PrimbonMatch) {
    let combined = a.total_neptu + b.total_neptu;
    let class = PrimbonClass::from_combined_neptu(combined);

    let details = vec![
        format!(
            "Partner A: {} ({} {}, Neptu {})",
            a.weton,
            a.hari.english(),
            a.pasaran.name(),
            a.total_neptu
        ),
        format!(
            "Partner B: {} ({} {}, Neptu {})",
            b.weton,
            b.hari.english(),
            b.pasaran.name(),
            b.total_neptu
        ),
        format!(
            "Combined Neptu: {combined} → mod 9 = {} → Class: {}",
            combined % 9,
            class.javanese()
        ),
        class.interpretation().to_string(),
    ];

    let first_sentence = class.interpretation().split('.').next().unwrap_or("");
    let score = SystemScore {
        system: SystemKind::Weton,
        label: "Weton / Primbon Jawa",
        score: class.score() as i32,
        summary: format!(
            "Your Weton pairing falls in the \"{}\" class — {first_sentence}.",
            class.javanese()
        ),
        details,
        signals_used: &[
            "Day Neptu",
            "Pasaran Neptu",
            "Combined Neptu",
            "Primbon Class Lookup",
        ],
    };
    let primbon = PrimbonMatch {
        class,
        score: class.score(),
        interpretation: class.interpretation(),
        advice: class.advice(),
    };
    (score, primbon)
}

// ---------------------------------------------------------------------------
// 3. Western zodiac synergy
// ---------------------------------------------------------------------------

pub fn calculate_zodiac_synergy(a: &WesternZodiac, b: &WesternZodiac) -> SystemScore {
    let mut details = Vec::new();
    let mut score: i32 = 50;

    if a.sign == b.sign {
        score += 15;
        details.push(format!(
            "Both {} — you deeply understand each other's motivations, but mirror each other's flaws too.",
            a.sign.name()
        ));
    }

    if a.element == b.element {
        score += 12;
        details.push(format!(
            "Same element ({}) — natural understanding and shared temperament.",
            a.element.name()
        ));
    } else if elements_harmonize(a.element, b.element) {
        score += 10;
        details.push(format!(
            "{} + {} — complementary elements that feed each other's energy.",
            a.element.name(),
            b.element.name()
        ));
    } else if elements_oppose(a.element, b.element) {
        score -= 8;
        details.push(format!(
            "{} + {} — opposing elements. Attraction exists but requires compromise.",
            a.element.name(),
            b.element.name()
        ));
    }

    if a.sign.harmonizes_with(b.sign) {
        score += 15;
        details.push(format!(
            "{} and {} are classically harmonious signs — strong astrological affinity.",
            a.sign.name(),
            b.sign.name()
        ));
    }

    if a.quality == b.quality {
        score -= 3;
        details.push(format!(
            "Both {} quality — shared drive style, but possible power struggles.",
            a.quality.name()
        ));
    } else {
        score += 5;
        details.push(format!(
            "{} + {} qualities — complementary approaches to life.",
            a.quality.name(),
            b.quality.name()
        ));
    }

    let band = if score >= 65 {
        "a harmonious astrological pairing"
    } else if score >= 45 {
        "a balanced pairing with growth potential"
    } else {
        "a challenging pairing that demands conscious effort"
    };

    SystemScore {
        system: SystemKind::Zodiac,
        label: "Western Zodiac",
        score: score.clamp(0, 100),
        summary: format!(
            "{} ({}) + {} ({}) — {band}.",
            a.sign.name(),
            a.element.name(),
            b.sign.name(),
            b.element.name()
        ),
        details,
        signals_used: &["Sun Sign", "Zodiac Element", "Quality", "Classical Harmony"],
    }
}

// ---------------------------------------------------------------------------
// 4. Chinese shio
// ---------------------------------------------------------------------------

pub fn calculate_shio_compatibility(a: &ChineseZodiac, b: &ChineseZodiac) -> SystemScore {
    let mut details = Vec::new();
    let mut score: i32 = 50;

    if a.animal == b.animal {
        score += 10;
        details.push(format!(
            "Both {} — you share the same instincts and life rhythm.",
            a.animal.name()
        ));
    }

    if a.animal.in_same_trine(b.animal) {
        score += 20;
        let trine = primbon_base::SAN_HE
            .iter()
            .find(|t| t.contains(&a.animal) && t.contains(&b.animal))
            .map(|t| {
                t.iter()
                    .map(|s| s.name())
                    .collect::<Vec<&str>>()
                    .join(", ")
            })
            .unwrap_or_default();
        details.push(format!(
            "{} and {} belong to the same Harmony Triangle ({trine}) — exceptional synergy.",
            a.animal.name(),
            b.animal.name()
        ));
    }

    if a.animal.is_six_harmony(b.animal) {
        score += 18;
        details.push(format!(
            "{} and {} form a Six Harmony Pair (六合) — deep, instinctive compatibility.",
            a.animal.name(),
            b.animal.name()
        ));
    }

    if a.animal.clashes_with(b.animal) {
        score -= 20;
        details.push(format!(
            "{} and {} form a Six Clash Pair (六冲) — fundamental tension in values and approach.",
            a.animal.name(),
            b.animal.name()
        ));
    }

    let affinity = element_affinity(a.element, b.element);
    score += affinity;
    if affinity > 0 {
        details.push(format!(
            "Shio elements {} + {} are in productive harmony.",
            a.element.name(),
            b.element.name()
        ));
    } else if affinity < 0 {
        details.push(format!(
            "Shio elements {} + {} have a destructive relationship.",
            a.element.name(),
            b.element.name()
        ));
    }

    let band = if score >= 65 {
        "an auspicious animal pairing"
    } else if score >= 40 {
        "a workable pairing with some tension"
    } else {
        "a challenging pairing requiring conscious adaptation"
    };

    SystemScore {
        system: SystemKind::Shio,
        label: "Chinese Shio / Zodiac",
        score: score.clamp(0, 100),
        summary: format!(
            "{} ({}) + {} ({}) — {band}.",
            a.animal.name(),
            a.element.name(),
            b.animal.name(),
            b.element.name()
        ),
        details,
        signals_used: &[
            "Animal Sign",
            "Harmony Triangle",
            "Six Harmony Pairs",
            "Six Clash Pairs",
            "Shio Element",
        ],
    }
}

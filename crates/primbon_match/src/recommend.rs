//! Ideal-match recommendations: rank counterpart signs and animals for a
//! profile, with mode-specific copy and an optional pair comparison.

use serde::{Deserialize, Serialize};

use primbon_base::{
    ALL_SHIO, ALL_SIGNS, Quality, Shio, ZodiacElement, ZodiacSign, elements_harmonize, work_role,
};
use primbon_engine::ReadingResult;

/// What kind of relationship the ranking targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    Romance,
    Friend,
    Colleague,
}

/// One ranked counterpart sign or animal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedMatch {
    pub sign: &'static str,
    pub symbol: &'static str,
    pub score: i32,
    pub why_summary: String,
    pub signals_used: Vec<&'static str>,
    /// Work-style role, colleague mode only.
    pub role: Option<&'static str>,
}

/// A collaboration risk with its mitigation (colleague mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CollaborationRisk {
    pub risk: &'static str,
    pub mitigation: &'static str,
}

/// Per-system breakdown of a pair comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SystemBreakdown {
    pub zodiac: i32,
    pub shio: i32,
    pub bazi: i32,
    pub weton: i32,
    pub feng_shui: i32,
}

/// Blended comparison of two complete readings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairComparison {
    pub pair_score: i32,
    pub system_breakdown: SystemBreakdown,
    pub strengths: Vec<&'static str>,
    pub challenges: Vec<&'static str>,
    pub signals: Vec<&'static str>,
}

/// The full recommendation output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationResult {
    pub mode: MatchMode,
    pub zodiac_ranked: Vec<RankedMatch>,
    pub shio_ranked: Vec<RankedMatch>,
    pub explanations: Vec<String>,
    /// Colleague mode only; empty otherwise.
    pub collaboration_risks: Vec<CollaborationRisk>,
    pub pair_comparison: Option<PairComparison>,
}

struct ModeContext {
    verb: &'static str,
    adj: &'static str,
    focus: &'static str,
}

const fn mode_context(mode: MatchMode) -> ModeContext {
    match mode {
        MatchMode::Romance => ModeContext {
            verb: "romantic chemistry",
            adj: "passionate",
            focus: "emotional bond and intimacy",
        },
        MatchMode::Colleague => ModeContext {
            verb: "professional synergy",
            adj: "productive",
            focus: "teamwork, trust, and execution",
        },
        MatchMode::Friend => ModeContext {
            verb: "friendship rapport",
            adj: "supportive",
            focus: "loyalty, fun, and mutual growth",
        },
    }
}

/// Element harmony for rankings: the classical feeding pairs plus any
/// same-element pairing.
fn rec_elements_harmonize(a: ZodiacElement, b: ZodiacElement) -> bool {
    a == b || elements_harmonize(a, b)
}

struct Scored {
    score: i32,
    signals: Vec<&'static str>,
    why: String,
}

fn zodiac_score(user: ZodiacSign, target: ZodiacSign) -> Scored {
    let mut signals = Vec::new();
    let mut score = 40;
    let user_el = user.element();
    let target_el = target.element();

    if user == target {
        score += 12;
        signals.push("Same sign affinity");
    }

    let trine = user.in_same_trine(target);
    if trine {
        score += 25;
        signals.push("Trine harmony");
    }

    let harmony = rec_elements_harmonize(user_el, target_el);
    if harmony && !trine {
        score += 15;
        signals.push("Element harmony");
    }

    let sextile = user.is_sextile(target);
    if sextile {
        score += 10;
        signals.push("Sextile support");
    }

    if user.quality() == target.quality() && user != target {
        score -= 3;
        signals.push("Same quality tension");
    }

    let why = if trine {
        format!(
            "{} shares your {} trine — a deeply harmonious connection built on shared values and natural understanding.",
            target.name(),
            user_el.name()
        )
    } else if sextile {
        format!(
            "{} ({}) supports your {} energy through a sextile aspect — easy communication and mutual growth.",
            target.name(),
            target_el.name(),
            user_el.name()
        )
    } else if harmony {
        format!(
            "{}'s {} element naturally complements your {} energy.",
            target.name(),
            target_el.name(),
            user_el.name()
        )
    } else {
        format!(
            "{} has a neutral to moderate connection — potential for growth through complementary differences.",
            target.name()
        )
    };

    Scored {
        score: score.clamp(15, 100),
        signals,
        why,
    }
}

fn shio_score(user: Shio, target: Shio) -> Scored {
    let mut signals = Vec::new();
    let mut score = 40;

    if user == target {
        score += 10;
        signals.push("Same animal kindred");
    }

    let san_he = user != target && user.in_same_trine(target);
    if san_he {
        score += 28;
        signals.push("三合 San He trine");
    }

    let liu_he = user.is_six_harmony(target);
    if liu_he {
        score += 22;
        signals.push("六合 Liu He pair");
    }

    let clash = user.clashes_with(target);
    if clash {
        score -= 25;
        signals.push("六冲 Liu Chong clash");
    }

    let why = if san_he {
        format!(
            "{} is in your Three Harmony (三合) group — one of the most auspicious pairings in Chinese astrology.",
            target.name()
        )
    } else if liu_he {
        format!(
            "{} forms a Six Harmony (六合) pair with {} — a deep, secret bond of mutual understanding.",
            target.name(),
            user.name()
        )
    } else if clash {
        format!(
            "{} sits opposite {} in the zodiac wheel (六冲 clash). Attraction exists but requires conscious effort.",
            target.name(),
            user.name()
        )
    } else {
        format!(
            "{} has a moderate connection with {} — a stable, workable pairing with room for growth.",
            target.name(),
            user.name()
        )
    };

    Scored {
        score: score.clamp(10, 100),
        signals,
        why,
    }
}

fn element_risk(element: ZodiacElement) -> CollaborationRisk {
    match element {
        ZodiacElement::Fire => CollaborationRisk {
            risk: "Impatience with slower methodical colleagues",
            mitigation: "Schedule regular check-ins to align on pace. Celebrate small wins together.",
        },
        ZodiacElement::Earth => CollaborationRisk {
            risk: "Resistance to rapid pivots and experimental ideas",
            mitigation: "Pre-frame changes with data and clear rationale. Give time to process.",
        },
        ZodiacElement::Air => CollaborationRisk {
            risk: "Over-abstracting when concrete action is needed",
            mitigation: "Use visual roadmaps and deadlines. Pair with an Earth-type executor.",
        },
        ZodiacElement::Water => CollaborationRisk {
            risk: "Emotional absorption of team stress",
            mitigation: "Establish clear emotional boundaries. Schedule decompression breaks.",
        },
    }
}

fn quality_risk(quality: Quality) -> CollaborationRisk {
    match quality {
        Quality::Cardinal => CollaborationRisk {
            risk: "Starting too many initiatives without finishing",
            mitigation: "Use a priority matrix. Assign a Fixed-type to own completion.",
        },
        Quality::Fixed => CollaborationRisk {
            risk: "Stubbornness when plans need to change",
            mitigation: "Build 'review gates' into project timelines for adaptive replanning.",
        },
        Quality::Mutable => CollaborationRisk {
            risk: "Difficulty committing to one direction",
            mitigation: "Set clear decision deadlines. Use a Cardinal-type to anchor direction.",
        },
    }
}

fn pair_comparison(a: &ReadingResult, b: &ReadingResult) -> PairComparison {
    let z = zodiac_score(a.western_zodiac.sign, b.western_zodiac.sign);
    let s = shio_score(a.chinese_zodiac.animal, b.chinese_zodiac.animal);

    // Simplified BaZi: Day Master relation plus Yong Shen alignment.
    let dm_a = a.bazi.day_master;
    let dm_b = b.bazi.day_master;
    let mut bazi = 50;
    if dm_a == dm_b {
        bazi += 10;
    }
    if dm_a.produces() == dm_b || dm_b.produces() == dm_a {
        bazi += 20;
    }
    if a.bazi.yong_shen.useful_element == dm_b {
        bazi += 15;
    }
    if b.bazi.yong_shen.useful_element == dm_a {
        bazi += 15;
    }
    let bazi = bazi.min(100);

    // Weton: favorable classes score high, the rest low.
    let combined_neptu = a.weton.total_neptu + b.weton.total_neptu;
    let weton_class = combined_neptu % 9;
    let weton = if [1, 2, 4, 5, 6, 7].contains(&weton_class) {
        75
    } else {
        35
    };

    // Feng Shui: same Kua group.
    let east = [1u32, 3, 4, 9];
    let same_group = east.contains(&a.feng_shui.kua_number) == east.contains(&b.feng_shui.kua_number);
    let feng_shui = if same_group { 80 } else { 50 };

    let pair_score = (f64::from(z.score) * 0.25
        + f64::from(s.score) * 0.25
        + f64::from(bazi) * 0.25
        + f64::from(weton) * 0.15
        + f64::from(feng_shui) * 0.10)
        .round() as i32;

    let mut strengths = Vec::new();
    let mut challenges = Vec::new();
    let mut signals = z.signals.clone();
    signals.extend(s.signals.iter().copied());

    if z.score >= 65 {
        strengths.push("Strong Western Zodiac harmony.");
    }
    if z.score < 40 {
        challenges.push("Western Zodiac elements may create friction.");
    }
    if s.score >= 65 {
        strengths.push("Auspicious Chinese Shio relationship.");
    }
    if s.score < 35 {
        challenges.push("Shio clash requires conscious adaptation.");
    }
    if bazi >= 70 {
        strengths.push("Day Master elements are complementary.");
    }
    if bazi < 45 {
        challenges.push("BaZi element balance shows potential tension.");
    }
    if weton >= 70 {
        strengths.push("Javanese Weton class favors this pairing.");
    }
    if weton < 40 {
        challenges.push("Weton Neptu combination signals caution.");
    }

    PairComparison {
        pair_score,
        system_breakdown: SystemBreakdown {
            zodiac: z.score,
            shio: s.score,
            bazi,
            weton,
            feng_shui,
        },
        strengths,
        challenges,
        signals,
    }
}

/// Rank the 11 counterpart signs and animals for a reading; keep the top
/// five of each. An optional second reading adds a pair comparison.
pub fn generate_recommendations(
    reading: &ReadingResult,
    mode: MatchMode,
    other: Option<&ReadingResult>,
) -> RecommendationResult {
    let user_sign = reading.western_zodiac.sign;
    let user_animal = reading.chinese_zodiac.animal;
    let ctx = mode_context(mode);

    let mut zodiac_ranked: Vec<RankedMatch> = ALL_SIGNS
        .iter()
        .filter(|&&s| s != user_sign)
        .map(|&sign| {
            let scored = zodiac_score(user_sign, sign);
            let role = work_role(sign.quality(), sign.element());
            let why_summary = match mode {
                MatchMode::Colleague => format!(
                    "{} In the workplace, {} excels as a {role}.",
                    scored.why,
                    sign.name()
                ),
                MatchMode::Friend => {
                    format!("{} A friendship built on {}.", scored.why, ctx.focus)
                }
                MatchMode::Romance => scored.why,
            };
            RankedMatch {
                sign: sign.name(),
                symbol: sign.symbol(),
                score: scored.score,
                why_summary,
                signals_used: scored.signals,
                role: matches!(mode, MatchMode::Colleague).then_some(role),
            }
        })
        .collect();
    zodiac_ranked.sort_by(|x, y| y.score.cmp(&x.score));
    zodiac_ranked.truncate(5);

    let mut shio_ranked: Vec<RankedMatch> = ALL_SHIO
        .iter()
        .filter(|&&a| a != user_animal)
        .map(|&animal| {
            let scored = shio_score(user_animal, animal);
            let why_summary = match mode {
                MatchMode::Colleague => format!(
                    "{} {} types bring {} energy to collaborative projects.",
                    scored.why,
                    animal.name(),
                    ctx.adj
                ),
                MatchMode::Friend => format!(
                    "{} {} friends provide {} companionship and {}.",
                    scored.why,
                    animal.name(),
                    ctx.adj,
                    ctx.focus
                ),
                MatchMode::Romance => scored.why,
            };
            RankedMatch {
                sign: animal.name(),
                symbol: animal.symbol(),
                score: scored.score,
                why_summary,
                signals_used: scored.signals,
                role: None,
            }
        })
        .collect();
    shio_ranked.sort_by(|x, y| y.score.cmp(&x.score));
    shio_ranked.truncate(5);

    let mut explanations = vec![
        format!(
            "Rankings are based on {} potential across Western astrology element groups and Chinese zodiac harmony structures.",
            ctx.verb
        ),
        "Zodiac analysis uses element harmony (Fire-Air, Earth-Water), trine groups, and sextile aspects.".to_string(),
        "Shio analysis uses Three Harmony (三合 San He) trines, Six Harmony (六合 Liu He) pairs, and clash (六冲) avoidance.".to_string(),
    ];
    explanations.push(format!(
        "Your BaZi Useful God (用神) is {}. Partners who embody this element are especially beneficial.",
        reading.bazi.yong_shen.useful_element.name()
    ));

    let collaboration_risks = if matches!(mode, MatchMode::Colleague) {
        vec![
            element_risk(user_sign.element()),
            quality_risk(user_sign.quality()),
        ]
    } else {
        Vec::new()
    };

    RecommendationResult {
        mode,
        zodiac_ranked,
        shio_ranked,
        explanations,
        collaboration_risks,
        pair_comparison: other.map(|o| pair_comparison(reading, o)),
    }
}

//! Shen Sha (symbolic stars): fixed predicate rules over the chart's
//! branch and stem indices.
//!
//! Each rule either stays silent or reports the location that triggered
//! it. Rules are pure functions of `(year, month, day, hour)` branch
//! indices plus the day stem index, all pre-normalized to cycle range.

use serde::Serialize;

/// Auspicious/inauspicious classification of a star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShenShaKind {
    Auspicious,
    Inauspicious,
    Neutral,
}

/// A triggered star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShenShaEntry {
    pub name: &'static str,
    pub chinese: &'static str,
    pub kind: ShenShaKind,
    pub meaning: &'static str,
    /// Which pillar (or pillar pair) triggered the star.
    pub trigger: &'static str,
}

/// Normalized chart indices fed to every rule.
#[derive(Debug, Clone, Copy)]
pub struct ChartIndices {
    pub year_branch: u8,
    pub month_branch: u8,
    pub day_branch: u8,
    pub hour_branch: u8,
    pub day_stem: u8,
}

struct ShenShaRule {
    name: &'static str,
    chinese: &'static str,
    kind: ShenShaKind,
    meaning: &'static str,
    check: fn(&ChartIndices) -> Option<&'static str>,
}

/// Nobleman branches per day stem.
const NOBLE_BRANCHES: [[u8; 2]; 10] = [
    [1, 7],
    [0, 6],
    [9, 5],
    [11, 5],
    [1, 7],
    [0, 8],
    [7, 1],
    [6, 10],
    [3, 9],
    [3, 9],
];

fn check_tian_yi(c: &ChartIndices) -> Option<&'static str> {
    let nobles = NOBLE_BRANCHES[c.day_stem as usize];
    if nobles.contains(&c.year_branch) {
        return Some("Year Branch");
    }
    if nobles.contains(&c.month_branch) {
        return Some("Month Branch");
    }
    if nobles.contains(&c.day_branch) {
        return Some("Day Branch");
    }
    if nobles.contains(&c.hour_branch) {
        return Some("Hour Branch");
    }
    None
}

/// Peach Blossom branch per year branch (repeating 9,6,3,0 pattern).
const PEACH_BRANCHES: [u8; 12] = [9, 6, 3, 0, 9, 6, 3, 0, 9, 6, 3, 0];

fn check_peach_blossom(c: &ChartIndices) -> Option<&'static str> {
    (PEACH_BRANCHES[c.year_branch as usize] == c.day_branch).then_some("Year→Day")
}

/// Academic branch per day stem.
const ACADEMIC_BRANCHES: [u8; 10] = [5, 6, 8, 9, 8, 9, 11, 0, 2, 3];

fn check_academic(c: &ChartIndices) -> Option<&'static str> {
    let target = ACADEMIC_BRANCHES[c.day_stem as usize];
    if target == c.day_branch {
        return Some("Day Branch");
    }
    if target == c.hour_branch {
        return Some("Hour Branch");
    }
    None
}

/// Travelling Horse branch per year branch.
const HORSE_BRANCHES: [u8; 12] = [2, 11, 8, 5, 2, 11, 8, 5, 2, 11, 8, 5];

fn check_travelling_horse(c: &ChartIndices) -> Option<&'static str> {
    (HORSE_BRANCHES[c.year_branch as usize] == c.day_branch).then_some("Year→Day")
}

/// Sky Virtue month table. No month index is its own fixed point, so this
/// star never fires; the rule is carried as defined.
const VIRTUE_MONTHS: [u8; 12] = [3, 8, 1, 6, 3, 8, 1, 6, 3, 8, 1, 6];

fn check_sky_virtue(c: &ChartIndices) -> Option<&'static str> {
    (VIRTUE_MONTHS[c.month_branch as usize] == c.month_branch).then_some("Month Branch")
}

fn check_funeral_gate(c: &ChartIndices) -> Option<&'static str> {
    ((c.year_branch + 2) % 12 == c.day_branch).then_some("Year→Day")
}

/// Robbery Sha branch per year branch.
const ROBBERY_BRANCHES: [u8; 12] = [5, 2, 11, 8, 5, 2, 11, 8, 5, 2, 11, 8];

fn check_robbery_sha(c: &ChartIndices) -> Option<&'static str> {
    (ROBBERY_BRANCHES[c.year_branch as usize] == c.day_branch).then_some("Year→Day")
}

/// Longevity branch per day stem.
const LONGEVITY_BRANCHES: [u8; 10] = [11, 6, 2, 9, 2, 9, 5, 0, 8, 3];

fn check_longevity(c: &ChartIndices) -> Option<&'static str> {
    (LONGEVITY_BRANCHES[c.day_stem as usize] == c.day_branch).then_some("Day Branch")
}

/// Heavenly Kitchen branch per day stem.
const KITCHEN_BRANCHES: [u8; 10] = [5, 6, 5, 6, 5, 6, 11, 0, 11, 0];

fn check_heavenly_kitchen(c: &ChartIndices) -> Option<&'static str> {
    (KITCHEN_BRANCHES[c.day_stem as usize] == c.day_branch).then_some("Day Branch")
}

/// Solitary branch per year branch (season groups).
const SOLITARY_BRANCHES: [u8; 12] = [2, 2, 5, 5, 5, 8, 8, 8, 11, 11, 11, 2];

fn check_solitary(c: &ChartIndices) -> Option<&'static str> {
    (SOLITARY_BRANCHES[c.year_branch as usize] == c.day_branch).then_some("Year→Day")
}

const RULES: [ShenShaRule; 10] = [
    ShenShaRule {
        name: "Tian Yi Noble",
        chinese: "天乙贵人",
        kind: ShenShaKind::Auspicious,
        meaning: "The Heavenly Noble Star brings helpful people, mentors, and timely assistance into your life. Obstacles resolve through unexpected aid.",
        check: check_tian_yi,
    },
    ShenShaRule {
        name: "Peach Blossom",
        chinese: "桃花",
        kind: ShenShaKind::Neutral,
        meaning: "The Peach Blossom Star enhances romantic attraction, charisma, and social charm. It can indicate popularity or romantic entanglements.",
        check: check_peach_blossom,
    },
    ShenShaRule {
        name: "Academic Star",
        chinese: "文昌",
        kind: ShenShaKind::Auspicious,
        meaning: "The Academic Star favours intellectual pursuits, examinations, writing, and scholarly achievement. Excellent for education and research.",
        check: check_academic,
    },
    ShenShaRule {
        name: "Travelling Horse",
        chinese: "驿马",
        kind: ShenShaKind::Neutral,
        meaning: "The Travelling Horse Star signals movement, change, travel, and career relocation. A dynamic energy that resists stagnation.",
        check: check_travelling_horse,
    },
    ShenShaRule {
        name: "Sky Virtue",
        chinese: "天德",
        kind: ShenShaKind::Auspicious,
        meaning: "The Sky Virtue Star brings moral fortitude, ancestral protection, and the ability to turn danger into opportunity.",
        check: check_sky_virtue,
    },
    ShenShaRule {
        name: "Funeral Gate",
        chinese: "丧门",
        kind: ShenShaKind::Inauspicious,
        meaning: "The Funeral Gate Star warns of potential grief, loss, or emotional upheaval. Extra care for health and relationships is advised.",
        check: check_funeral_gate,
    },
    ShenShaRule {
        name: "Robbery Sha",
        chinese: "劫煞",
        kind: ShenShaKind::Inauspicious,
        meaning: "The Robbery Sha warns of financial loss, theft, or betrayal. Caution with investments and trust during this influence.",
        check: check_robbery_sha,
    },
    ShenShaRule {
        name: "Longevity Star",
        chinese: "长生",
        kind: ShenShaKind::Auspicious,
        meaning: "The Longevity Star signals vitality, perseverance, and the potential for a long, healthy life. New beginnings are favoured.",
        check: check_longevity,
    },
    ShenShaRule {
        name: "Heavenly Kitchen",
        chinese: "天厨",
        kind: ShenShaKind::Auspicious,
        meaning: "The Heavenly Kitchen Star brings abundance in food, resources, and material comfort. Especially favourable for hospitality and culinary pursuits.",
        check: check_heavenly_kitchen,
    },
    ShenShaRule {
        name: "Solitary Star",
        chinese: "孤辰",
        kind: ShenShaKind::Inauspicious,
        meaning: "The Solitary Star indicates periods of loneliness, independence by necessity, or difficulty forming partnerships. Self-reliance becomes crucial.",
        check: check_solitary,
    },
];

/// Evaluate every rule against a chart; triggered stars in rule order.
pub fn identify_shen_sha(chart: &ChartIndices) -> Vec<ShenShaEntry> {
    RULES
        .iter()
        .filter_map(|rule| {
            (rule.check)(chart).map(|trigger| ShenShaEntry {
                name: rule.name,
                chinese: rule.chinese,
                kind: rule.kind,
                meaning: rule.meaning,
                trigger,
            })
        })
        .collect()
}

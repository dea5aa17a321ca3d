//! Feng Shui Kua number, personal directions, and element support.
//!
//! The Kua formula reduces the birth year's digit sum, then applies a
//! gender-specific step. The value 5 does not exist as a Kua number and is
//! remapped (male → 2, female → 8), so the direction table has exactly
//! eight entries.

use serde::Serialize;

use primbon_base::FiveElement;

use crate::profile::Gender;

/// The eight compass directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FengShuiDirection {
    North,
    South,
    East,
    West,
    Northeast,
    Northwest,
    Southeast,
    Southwest,
}

impl FengShuiDirection {
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
            Self::Northeast => "Northeast",
            Self::Northwest => "Northwest",
            Self::Southeast => "Southeast",
            Self::Southwest => "Southwest",
        }
    }
}

/// Whether a direction helps or harms the person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionCategory {
    Lucky,
    Unlucky,
}

/// One direction with its classical label and effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DirectionInfo {
    pub direction: FengShuiDirection,
    pub category: DirectionCategory,
    pub label: &'static str,
    pub description: &'static str,
}

/// East/West group membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KuaGroup {
    East,
    West,
}

/// Static explainer for the Flying Star system, which needs house data this
/// engine does not collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlyingStarExplainer {
    pub title: &'static str,
    pub overview: &'static str,
    pub limitations: &'static str,
    pub advice: &'static str,
}

/// A complete personal Feng Shui reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FengShuiResult {
    pub kua_number: u32,
    pub group: KuaGroup,
    pub lucky_directions: [DirectionInfo; 4],
    pub unlucky_directions: [DirectionInfo; 4],
    pub lucky_element: FiveElement,
    pub lucky_colors: &'static [&'static str],
    pub recommendations: Vec<String>,
    pub flying_star: FlyingStarExplainer,
}

/// Kua numbers belonging to the East group.
const EAST_GROUP: [u32; 4] = [1, 3, 4, 9];

fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Personal Kua number from birth year and gender. Never returns 5.
///
/// Missing gender and `Other` follow the male formula.
pub fn calculate_kua_number(year: i32, gender: Option<Gender>) -> u32 {
    let mut reduced = digit_sum(year.unsigned_abs());
    while reduced > 9 {
        reduced = digit_sum(reduced);
    }
    if matches!(gender, Some(Gender::Female)) {
        let mut kua = reduced + 4;
        if kua > 9 {
            kua -= 9;
        }
        if kua == 5 { 8 } else { kua }
    } else {
        let mut kua = 11 - reduced;
        if kua > 9 {
            kua -= 9;
        }
        if kua == 5 { 2 } else { kua }
    }
}

const fn dir(
    direction: FengShuiDirection,
    category: DirectionCategory,
    label: &'static str,
    description: &'static str,
) -> DirectionInfo {
    DirectionInfo {
        direction,
        category,
        label,
        description,
    }
}

/// Lucky and unlucky directions for a Kua number. Unknown numbers fall
/// back to the Kua 1 set.
fn direction_sets(kua: u32) -> ([DirectionInfo; 4], [DirectionInfo; 4]) {
    use DirectionCategory::{Lucky, Unlucky};
    use FengShuiDirection::*;
    match kua {
        2 => (
            [
                dir(Northeast, Lucky, "Sheng Qi (Prosperity)", "Best direction for wealth and success."),
                dir(West, Lucky, "Tian Yi (Health)", "Supports healing and wellness."),
                dir(Northwest, Lucky, "Yan Nian (Relationships)", "Strengthens bonds and partnerships."),
                dir(Southwest, Lucky, "Fu Wei (Stability)", "Grounds energy and supports focus."),
            ],
            [
                dir(East, Unlucky, "Huo Hai (Mishaps)", "Minor obstacles and delays."),
                dir(Southeast, Unlucky, "Wu Gui (Five Ghosts)", "Hidden adversaries or misunderstandings."),
                dir(South, Unlucky, "Liu Sha (Six Killings)", "Potential for conflicts and disruptions."),
                dir(North, Unlucky, "Jue Ming (Total Loss)", "Avoid for critical decisions."),
            ],
        ),
        3 => (
            [
                dir(South, Lucky, "Sheng Qi (Prosperity)", "Peak direction for career and financial growth."),
                dir(North, Lucky, "Tian Yi (Health)", "Optimal for recovery and vitality."),
                dir(Southeast, Lucky, "Yan Nian (Relationships)", "Positive for love and social harmony."),
                dir(East, Lucky, "Fu Wei (Stability)", "Personal development and clarity."),
            ],
            [
                dir(Southwest, Unlucky, "Huo Hai (Mishaps)", "Minor disruptions possible."),
                dir(Northwest, Unlucky, "Wu Gui (Five Ghosts)", "Watch for deception."),
                dir(Northeast, Unlucky, "Liu Sha (Six Killings)", "Relational friction likely."),
                dir(West, Unlucky, "Jue Ming (Total Loss)", "Most adverse — use caution."),
            ],
        ),
        4 => (
            [
                dir(North, Lucky, "Sheng Qi (Prosperity)", "Strongest wealth and opportunity direction."),
                dir(South, Lucky, "Tian Yi (Health)", "Best for health and healing."),
                dir(East, Lucky, "Yan Nian (Relationships)", "Enriches partnerships and connections."),
                dir(Southeast, Lucky, "Fu Wei (Stability)", "Supports steady personal growth."),
            ],
            [
                dir(Northwest, Unlucky, "Huo Hai (Mishaps)", "Small setbacks and annoyances."),
                dir(Southwest, Unlucky, "Wu Gui (Five Ghosts)", "Hidden challenges."),
                dir(West, Unlucky, "Liu Sha (Six Killings)", "Conflict potential."),
                dir(Northeast, Unlucky, "Jue Ming (Total Loss)", "Avoid for major choices."),
            ],
        ),
        6 => (
            [
                dir(West, Lucky, "Sheng Qi (Prosperity)", "Strongest direction for success and wealth."),
                dir(Northeast, Lucky, "Tian Yi (Health)", "Optimal for wellness."),
                dir(Southwest, Lucky, "Yan Nian (Relationships)", "Best for love and family bonds."),
                dir(Northwest, Lucky, "Fu Wei (Stability)", "Personal clarity and peace."),
            ],
            [
                dir(Southeast, Unlucky, "Huo Hai (Mishaps)", "Minor obstacles possible."),
                dir(East, Unlucky, "Wu Gui (Five Ghosts)", "Beware hidden adversaries."),
                dir(North, Unlucky, "Liu Sha (Six Killings)", "Potential relational conflicts."),
                dir(South, Unlucky, "Jue Ming (Total Loss)", "Most challenging — avoid."),
            ],
        ),
        7 => (
            [
                dir(Northwest, Lucky, "Sheng Qi (Prosperity)", "Best for wealth and advancement."),
                dir(Southwest, Lucky, "Tian Yi (Health)", "Peak direction for health."),
                dir(Northeast, Lucky, "Yan Nian (Relationships)", "Strengthens connections."),
                dir(West, Lucky, "Fu Wei (Stability)", "Supports grounding and focus."),
            ],
            [
                dir(North, Unlucky, "Huo Hai (Mishaps)", "Small setbacks likely."),
                dir(South, Unlucky, "Wu Gui (Five Ghosts)", "Hidden problems."),
                dir(Southeast, Unlucky, "Liu Sha (Six Killings)", "Conflict and disruption."),
                dir(East, Unlucky, "Jue Ming (Total Loss)", "Avoid for critical moves."),
            ],
        ),
        8 => (
            [
                dir(Southwest, Lucky, "Sheng Qi (Prosperity)", "Peak prosperity direction."),
                dir(Northwest, Lucky, "Tian Yi (Health)", "Best for healing energy."),
                dir(West, Lucky, "Yan Nian (Relationships)", "Enriches love and friendship."),
                dir(Northeast, Lucky, "Fu Wei (Stability)", "Personal growth and clarity."),
            ],
            [
                dir(South, Unlucky, "Huo Hai (Mishaps)", "Minor disruptions."),
                dir(North, Unlucky, "Wu Gui (Five Ghosts)", "Hidden challenges."),
                dir(East, Unlucky, "Liu Sha (Six Killings)", "Potential friction."),
                dir(Southeast, Unlucky, "Jue Ming (Total Loss)", "Most adverse direction."),
            ],
        ),
        9 => (
            [
                dir(East, Lucky, "Sheng Qi (Prosperity)", "Strongest wealth direction."),
                dir(Southeast, Lucky, "Tian Yi (Health)", "Best for vitality."),
                dir(North, Lucky, "Yan Nian (Relationships)", "Enhances bonds."),
                dir(South, Lucky, "Fu Wei (Stability)", "Supports inner clarity."),
            ],
            [
                dir(Northeast, Unlucky, "Huo Hai (Mishaps)", "Small obstacles."),
                dir(West, Unlucky, "Wu Gui (Five Ghosts)", "Watch for deception."),
                dir(Southwest, Unlucky, "Liu Sha (Six Killings)", "Conflict potential."),
                dir(Northwest, Unlucky, "Jue Ming (Total Loss)", "Avoid for key decisions."),
            ],
        ),
        _ => (
            [
                dir(Southeast, Lucky, "Sheng Qi (Prosperity)", "Best direction for wealth generation and career advancement."),
                dir(East, Lucky, "Tian Yi (Health)", "Optimal direction for physical well-being and recovery."),
                dir(South, Lucky, "Yan Nian (Relationships)", "Enhances romantic and social connections."),
                dir(North, Lucky, "Fu Wei (Stability)", "Supports personal growth and inner clarity."),
            ],
            [
                dir(West, Unlucky, "Huo Hai (Mishaps)", "Minor setbacks and frustrations may occur."),
                dir(Northeast, Unlucky, "Wu Gui (Five Ghosts)", "Risk of betrayal or hidden conflicts."),
                dir(Northwest, Unlucky, "Liu Sha (Six Killings)", "Legal or relational complications possible."),
                dir(Southwest, Unlucky, "Jue Ming (Total Loss)", "Most challenging direction — avoid for important activities."),
            ],
        ),
    }
}

/// Element supporting a Kua number.
const fn kua_element(kua: u32) -> FiveElement {
    match kua {
        1 => FiveElement::Water,
        3 | 4 => FiveElement::Wood,
        6 | 7 => FiveElement::Metal,
        9 => FiveElement::Fire,
        _ => FiveElement::Earth,
    }
}

/// Colors harmonizing with an element.
pub const fn element_colors(element: FiveElement) -> &'static [&'static str] {
    match element {
        FiveElement::Wood => &["Green", "Brown", "Teal"],
        FiveElement::Fire => &["Red", "Orange", "Purple"],
        FiveElement::Earth => &["Yellow", "Beige", "Terracotta"],
        FiveElement::Metal => &["White", "Gold", "Silver"],
        FiveElement::Water => &["Blue", "Black", "Navy"],
    }
}

const FLYING_STAR: FlyingStarExplainer = FlyingStarExplainer {
    title: "Flying Star Feng Shui (Xuan Kong)",
    overview: "Flying Star Feng Shui maps time-based energy patterns onto a Lo Shu grid using your home's facing direction and construction period. Nine 'stars' (numbered 1–9) rotate through sectors, each carrying distinct influences on wealth, relationships, and health. The chart changes every 20-year period and shifts annually.",
    limitations: "A full Flying Star chart requires your home's exact facing direction and the year/period of construction — data this reading cannot collect. Without these inputs, we can provide general awareness but not a personalized house chart.",
    advice: "For a complete Flying Star analysis, consult a qualified Feng Shui practitioner who can take compass readings of your home. In the meantime, focus on your personal Kua directions above, which require only your birth data.",
};

/// Compute the full Feng Shui reading for a birth year and gender.
pub fn calculate_feng_shui(year: i32, gender: Option<Gender>) -> FengShuiResult {
    let kua = calculate_kua_number(year, gender);
    let group = if EAST_GROUP.contains(&kua) {
        KuaGroup::East
    } else {
        KuaGroup::West
    };
    let (lucky, unlucky) = direction_sets(kua);
    let lucky_element = kua_element(kua);
    let colors = element_colors(lucky_element);

    let recommendations = vec![
        format!(
            "Position your desk or workspace facing your Sheng Qi direction ({}) for maximum career success.",
            lucky[0].direction.name()
        ),
        format!(
            "Sleep with your head pointing toward your Tian Yi direction ({}) for improved health and recovery.",
            lucky[1].direction.name()
        ),
        format!(
            "Enhance the {} sector of your home with {} element colors to attract love and harmony.",
            lucky[2].direction.name(),
            lucky_element.name()
        ),
        format!(
            "Avoid sitting with your back to your Jue Ming direction ({}) during important meetings.",
            unlucky[3].direction.name()
        ),
        format!(
            "Wear {} tones to harmonize with your personal element energy.",
            colors.join(" or ").to_lowercase()
        ),
    ];

    FengShuiResult {
        kua_number: kua,
        group,
        lucky_directions: lucky,
        unlucky_directions: unlucky,
        lucky_element,
        lucky_colors: colors,
        recommendations,
        flying_star: FLYING_STAR,
    }
}

//! The 12 zodiac animals (shio) and their harmony structures.
//!
//! Year cycles are anchored so that 4 CE = Rat with a Wood-element year;
//! `Shio::for_year` and friends wrap any CE year into the cycle. San He
//! trines and Liu He/Liu Chong pairs mirror the branch-index tables,
//! since animal i pairs with branch i.

use serde::{Deserialize, Serialize};

use crate::branch::{branches_clash, branches_combine};
use crate::element::{ALL_ELEMENTS, FiveElement};

/// The 12 animals in branch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shio {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

/// All 12 animals in branch order (index 0 = Rat).
pub const ALL_SHIO: [Shio; 12] = [
    Shio::Rat,
    Shio::Ox,
    Shio::Tiger,
    Shio::Rabbit,
    Shio::Dragon,
    Shio::Snake,
    Shio::Horse,
    Shio::Goat,
    Shio::Monkey,
    Shio::Rooster,
    Shio::Dog,
    Shio::Pig,
];

/// San He (Three Harmony) trines.
pub const SAN_HE: [[Shio; 3]; 4] = [
    [Shio::Rat, Shio::Dragon, Shio::Monkey],
    [Shio::Ox, Shio::Snake, Shio::Rooster],
    [Shio::Tiger, Shio::Horse, Shio::Dog],
    [Shio::Rabbit, Shio::Goat, Shio::Pig],
];

/// Yin/yang polarity of a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YinYang {
    Yang,
    Yin,
}

impl YinYang {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }
}

impl Shio {
    /// English animal name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }

    /// Display symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Rat => "🐀",
            Self::Ox => "🐂",
            Self::Tiger => "🐅",
            Self::Rabbit => "🐇",
            Self::Dragon => "🐉",
            Self::Snake => "🐍",
            Self::Horse => "🐎",
            Self::Goat => "🐐",
            Self::Monkey => "🐒",
            Self::Rooster => "🐓",
            Self::Dog => "🐕",
            Self::Pig => "🐖",
        }
    }

    /// 0-based index into [`ALL_SHIO`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Rat => 0,
            Self::Ox => 1,
            Self::Tiger => 2,
            Self::Rabbit => 3,
            Self::Dragon => 4,
            Self::Snake => 5,
            Self::Horse => 6,
            Self::Goat => 7,
            Self::Monkey => 8,
            Self::Rooster => 9,
            Self::Dog => 10,
            Self::Pig => 11,
        }
    }

    /// Character traits.
    pub const fn traits(self) -> &'static [&'static str] {
        match self {
            Self::Rat => &["Resourceful", "Quick-witted", "Versatile", "Charming"],
            Self::Ox => &["Diligent", "Dependable", "Determined", "Patient"],
            Self::Tiger => &["Brave", "Competitive", "Unpredictable", "Charismatic"],
            Self::Rabbit => &["Gentle", "Elegant", "Alert", "Compassionate"],
            Self::Dragon => &["Confident", "Ambitious", "Enthusiastic", "Intelligent"],
            Self::Snake => &["Enigmatic", "Wise", "Intuitive", "Graceful"],
            Self::Horse => &["Energetic", "Free-spirited", "Warm", "Independent"],
            Self::Goat => &["Calm", "Artistic", "Kind", "Gentle"],
            Self::Monkey => &["Sharp", "Curious", "Inventive", "Playful"],
            Self::Rooster => &["Observant", "Hardworking", "Courageous", "Confident"],
            Self::Dog => &["Loyal", "Honest", "Prudent", "Kind"],
            Self::Pig => &["Generous", "Compassionate", "Diligent", "Optimistic"],
        }
    }

    /// Traditionally compatible animals.
    pub const fn compatible(self) -> &'static [Shio] {
        match self {
            Self::Rat => &[Shio::Dragon, Shio::Monkey, Shio::Ox],
            Self::Ox => &[Shio::Rat, Shio::Snake, Shio::Rooster],
            Self::Tiger => &[Shio::Dragon, Shio::Horse, Shio::Pig],
            Self::Rabbit => &[Shio::Goat, Shio::Monkey, Shio::Dog, Shio::Pig],
            Self::Dragon => &[Shio::Rat, Shio::Tiger, Shio::Snake],
            Self::Snake => &[Shio::Dragon, Shio::Rooster, Shio::Ox],
            Self::Horse => &[Shio::Tiger, Shio::Goat, Shio::Rabbit],
            Self::Goat => &[Shio::Rabbit, Shio::Horse, Shio::Pig],
            Self::Monkey => &[Shio::Rat, Shio::Dragon, Shio::Snake],
            Self::Rooster => &[Shio::Ox, Shio::Snake, Shio::Dragon],
            Self::Dog => &[Shio::Rabbit, Shio::Tiger, Shio::Horse],
            Self::Pig => &[Shio::Tiger, Shio::Rabbit, Shio::Goat],
        }
    }

    /// Descriptive reading text.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Rat => "The Rat is clever and resourceful, able to adapt to any situation with sharp intellect and natural charm.",
            Self::Ox => "The Ox embodies strength through patience and hard work. Steadfast and reliable, you build enduring foundations.",
            Self::Tiger => "The Tiger is a born leader with magnetic charisma. Bold and fierce, you command respect wherever you go.",
            Self::Rabbit => "The Rabbit brings elegance and peace. With a gentle demeanor and keen intuition, you navigate life with grace.",
            Self::Dragon => "The Dragon is a symbol of power and good fortune. Your charisma and ambition make you destined for greatness.",
            Self::Snake => "The Snake is deeply intuitive and philosophical. Your wisdom and mystery make you a compelling presence.",
            Self::Horse => "The Horse is driven by freedom and vitality. Your enthusiastic spirit and warmth inspire everyone around you.",
            Self::Goat => "The Goat is a gentle soul with deep artistic sensibility. Your kindness and creativity enrich the world.",
            Self::Monkey => "The Monkey is endlessly inventive and entertaining. Your quick mind and playful nature solve problems with flair.",
            Self::Rooster => "The Rooster is bold and meticulous. With sharp observation and tireless work ethic, you achieve excellence.",
            Self::Dog => "The Dog is the most loyal companion. Your honesty and sense of justice make you a trusted friend and protector.",
            Self::Pig => "The Pig brings warmth and generosity. Your optimistic outlook and big heart make you beloved by all.",
        }
    }

    /// Animal for a CE year (4 CE = Rat; negative and pre-epoch years wrap).
    pub fn for_year(year: i32) -> Self {
        ALL_SHIO[(year - 4).rem_euclid(12) as usize]
    }

    /// Year element: each element rules two consecutive years of the
    /// 10-year stem cycle.
    pub fn element_for_year(year: i32) -> FiveElement {
        ALL_ELEMENTS[((year - 4).rem_euclid(10) / 2) as usize]
    }

    /// Yin/yang polarity of a year (even = Yang).
    pub fn yin_yang_for_year(year: i32) -> YinYang {
        if year.rem_euclid(2) == 0 {
            YinYang::Yang
        } else {
            YinYang::Yin
        }
    }

    /// True if both animals sit in the same San He trine (including the
    /// same-animal case).
    pub fn in_same_trine(self, other: Shio) -> bool {
        SAN_HE
            .iter()
            .any(|t| t.contains(&self) && t.contains(&other))
    }

    /// True if the pair is a Liu He (Six Harmony) bond.
    pub fn is_six_harmony(self, other: Shio) -> bool {
        branches_combine(self.index(), other.index())
    }

    /// True if the pair is a Liu Chong (Six Clash) opposition.
    pub fn clashes_with(self, other: Shio) -> bool {
        branches_clash(self.index(), other.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shio_indices_sequential() {
        for (i, s) in ALL_SHIO.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn year_4_ce_is_rat() {
        assert_eq!(Shio::for_year(4), Shio::Rat);
    }

    #[test]
    fn year_2024_is_dragon() {
        assert_eq!(Shio::for_year(2024), Shio::Dragon);
    }

    #[test]
    fn year_1990_is_horse() {
        assert_eq!(Shio::for_year(1990), Shio::Horse);
    }

    #[test]
    fn years_before_epoch_wrap() {
        assert_eq!(Shio::for_year(3), Shio::Pig);
        assert_eq!(Shio::for_year(0), Shio::Monkey);
    }

    #[test]
    fn element_for_year_pairs() {
        // 1984/1985 Wood, 1986/1987 Fire, ...
        assert_eq!(Shio::element_for_year(1984), FiveElement::Wood);
        assert_eq!(Shio::element_for_year(1985), FiveElement::Wood);
        assert_eq!(Shio::element_for_year(1986), FiveElement::Fire);
        assert_eq!(Shio::element_for_year(1990), FiveElement::Metal);
    }

    #[test]
    fn yin_yang_parity() {
        assert_eq!(Shio::yin_yang_for_year(1990), YinYang::Yang);
        assert_eq!(Shio::yin_yang_for_year(1991), YinYang::Yin);
    }

    #[test]
    fn trines_partition_the_wheel() {
        let mut seen = Vec::new();
        for t in &SAN_HE {
            for s in t {
                assert!(!seen.contains(s), "{s:?} appears twice");
                seen.push(*s);
            }
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn trine_members_are_four_apart() {
        for t in &SAN_HE {
            assert_eq!((t[0].index() + 4) % 12, t[1].index());
            assert_eq!((t[1].index() + 4) % 12, t[2].index());
        }
    }

    #[test]
    fn six_harmony_matches_branch_pairs() {
        assert!(Shio::Rat.is_six_harmony(Shio::Ox));
        assert!(Shio::Tiger.is_six_harmony(Shio::Pig));
        assert!(!Shio::Rat.is_six_harmony(Shio::Horse));
    }

    #[test]
    fn clash_is_opposite_animal() {
        for s in ALL_SHIO {
            let opposite = ALL_SHIO[((s.index() + 6) % 12) as usize];
            assert!(s.clashes_with(opposite));
        }
    }

    #[test]
    fn harmony_relations_symmetric() {
        for a in ALL_SHIO {
            for b in ALL_SHIO {
                assert_eq!(a.in_same_trine(b), b.in_same_trine(a));
                assert_eq!(a.is_six_harmony(b), b.is_six_harmony(a));
                assert_eq!(a.clashes_with(b), b.clashes_with(a));
            }
        }
    }
}

//! The nine Javanese primbon marriage classes, keyed by combined neptu
//! modulo 9.

use serde::{Deserialize, Serialize};

/// Marriage-compatibility class of a couple's combined neptu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimbonClass {
    Pegat,
    Ratu,
    Jodoh,
    Topo,
    Tinari,
    Lungguh,
    Gedhong,
    Sri,
    Lara,
}

/// All nine classes in residue order (index = combined neptu mod 9).
pub const ALL_CLASSES: [PrimbonClass; 9] = [
    PrimbonClass::Pegat,
    PrimbonClass::Ratu,
    PrimbonClass::Jodoh,
    PrimbonClass::Topo,
    PrimbonClass::Tinari,
    PrimbonClass::Lungguh,
    PrimbonClass::Gedhong,
    PrimbonClass::Sri,
    PrimbonClass::Lara,
];

impl PrimbonClass {
    /// Javanese class name.
    pub const fn javanese(self) -> &'static str {
        match self {
            Self::Pegat => "Pegat",
            Self::Ratu => "Ratu",
            Self::Jodoh => "Jodoh",
            Self::Topo => "Topo",
            Self::Tinari => "Tinari",
            Self::Lungguh => "Lungguh",
            Self::Gedhong => "Gedhong",
            Self::Sri => "Sri",
            Self::Lara => "Lara",
        }
    }

    /// Fixed compatibility score of the class (0–100).
    pub const fn score(self) -> u32 {
        match self {
            Self::Pegat => 25,
            Self::Ratu => 90,
            Self::Jodoh => 95,
            Self::Topo => 55,
            Self::Tinari => 75,
            Self::Lungguh => 80,
            Self::Gedhong => 85,
            Self::Sri => 88,
            Self::Lara => 35,
        }
    }

    /// Residue of the class (combined neptu mod 9).
    pub const fn residue(self) -> u32 {
        match self {
            Self::Pegat => 0,
            Self::Ratu => 1,
            Self::Jodoh => 2,
            Self::Topo => 3,
            Self::Tinari => 4,
            Self::Lungguh => 5,
            Self::Gedhong => 6,
            Self::Sri => 7,
            Self::Lara => 8,
        }
    }

    pub const fn interpretation(self) -> &'static str {
        match self {
            Self::Pegat => "Separation energy. This pairing tends toward disagreement and parting. Both partners must work very hard to maintain harmony.",
            Self::Ratu => "Royal match. This is one of the most auspicious pairings in Javanese tradition. The couple carries an energy of mutual respect and shared prosperity.",
            Self::Jodoh => "Destined soulmates. The cosmic alignment strongly favors this union. Deep spiritual and emotional resonance.",
            Self::Topo => "Ascetic pairing. The relationship can feel restrained or overly serious. Joy must be actively cultivated.",
            Self::Tinari => "Steadfast companionship. A reliable, enduring match based on loyalty and shared values.",
            Self::Lungguh => "Seated in comfort. This pairing suggests material abundance and domestic harmony when nurtured.",
            Self::Gedhong => "Palace of prosperity. An auspicious match for wealth, status, and social standing within the community.",
            Self::Sri => "Goddess of rice and prosperity. Abundance flows naturally to this couple, especially in sustenance and family.",
            Self::Lara => "Painful longing. There is deep attraction but also deep potential for heartache. Intense yet turbulent.",
        }
    }

    pub const fn advice(self) -> &'static str {
        match self {
            Self::Pegat => "Practice empathy daily. Establish clear communication rituals. Consider counseling for conflict resolution.",
            Self::Ratu => "Support each other's ambitions. This bond thrives on shared goals and mutual admiration.",
            Self::Jodoh => "Trust the bond. Focus on growth together rather than control. This is a rare gift.",
            Self::Topo => "Inject playfulness into daily life. Plan adventures together. Don't let routine dull the spark.",
            Self::Tinari => "Appreciate the stability this bond provides. Express gratitude often and avoid taking each other for granted.",
            Self::Lungguh => "Build your home life with intentionality. Financial planning together strengthens this bond.",
            Self::Gedhong => "Use your combined social influence for good. Generosity multiplies the blessings of this pairing.",
            Self::Sri => "Share your abundance with family and community. Fertility and growth are highlighted.",
            Self::Lara => "Set healthy boundaries. Channel the intensity into creative collaboration rather than emotional drama.",
        }
    }

    /// Class for a couple's combined neptu.
    pub fn from_combined_neptu(combined: u32) -> Self {
        ALL_CLASSES[(combined % 9) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residues_sequential() {
        for (i, c) in ALL_CLASSES.iter().enumerate() {
            assert_eq!(c.residue() as usize, i);
        }
    }

    #[test]
    fn combined_18_is_pegat() {
        let c = PrimbonClass::from_combined_neptu(18);
        assert_eq!(c, PrimbonClass::Pegat);
        assert_eq!(c.score(), 25);
    }

    #[test]
    fn combined_20_is_jodoh() {
        let c = PrimbonClass::from_combined_neptu(20);
        assert_eq!(c, PrimbonClass::Jodoh);
        assert_eq!(c.score(), 95);
    }

    #[test]
    fn all_reachable_sums_map() {
        // Combined neptu spans 14..=36; every residue class is reachable.
        for combined in 14..=36u32 {
            let c = PrimbonClass::from_combined_neptu(combined);
            assert_eq!(c.residue(), combined % 9);
        }
    }

    #[test]
    fn scores_in_range() {
        for c in ALL_CLASSES {
            assert!(c.score() <= 100);
        }
    }

    #[test]
    fn text_nonempty() {
        for c in ALL_CLASSES {
            assert!(!c.interpretation().is_empty());
            assert!(!c.advice().is_empty());
        }
    }
}

//! The 12 Earthly Branches (Di Zhi) with their combination and clash pairs.

use serde::{Deserialize, Serialize};

use crate::element::FiveElement;
use crate::shio::Shio;

/// The 12 Earthly Branches in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order (index 0 = Zi).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

/// Six Combination pairs (liu he) by branch index.
pub const SIX_COMBINATIONS: [(u8, u8); 6] = [(0, 1), (2, 11), (3, 10), (4, 9), (5, 8), (6, 7)];

/// Six Clash pairs (liu chong) by branch index: each branch against its
/// opposite on the wheel.
pub const SIX_CLASHES: [(u8, u8); 6] = [(0, 6), (1, 7), (2, 8), (3, 9), (4, 10), (5, 11)];

impl EarthlyBranch {
    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Display glyph.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Branch element.
    pub const fn element(self) -> FiveElement {
        match self {
            Self::Zi | Self::Hai => FiveElement::Water,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => FiveElement::Earth,
            Self::Yin | Self::Mao => FiveElement::Wood,
            Self::Si | Self::Wu => FiveElement::Fire,
            Self::Shen | Self::You => FiveElement::Metal,
        }
    }

    /// Zodiac animal paired with this branch.
    pub const fn animal(self) -> Shio {
        match self {
            Self::Zi => Shio::Rat,
            Self::Chou => Shio::Ox,
            Self::Yin => Shio::Tiger,
            Self::Mao => Shio::Rabbit,
            Self::Chen => Shio::Dragon,
            Self::Si => Shio::Snake,
            Self::Wu => Shio::Horse,
            Self::Wei => Shio::Goat,
            Self::Shen => Shio::Monkey,
            Self::You => Shio::Rooster,
            Self::Xu => Shio::Dog,
            Self::Hai => Shio::Pig,
        }
    }

    /// 0-based index into [`ALL_BRANCHES`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch for a raw cycle index; negative values wrap.
    pub fn from_raw_index(idx: i64) -> Self {
        ALL_BRANCHES[idx.rem_euclid(12) as usize]
    }
}

/// True if the two branch indices form a Six Combination pair (symmetric).
pub fn branches_combine(a: u8, b: u8) -> bool {
    SIX_COMBINATIONS
        .iter()
        .any(|&(x, y)| (a == x && b == y) || (a == y && b == x))
}

/// True if the two branch indices form a Six Clash pair (symmetric).
pub fn branches_clash(a: u8, b: u8) -> bool {
    SIX_CLASHES
        .iter()
        .any(|&(x, y)| (a == x && b == y) || (a == y && b == x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn from_raw_index_wraps() {
        assert_eq!(EarthlyBranch::from_raw_index(12), EarthlyBranch::Zi);
        assert_eq!(EarthlyBranch::from_raw_index(-9), EarthlyBranch::Mao);
    }

    #[test]
    fn clash_pairs_are_opposites() {
        for &(a, b) in &SIX_CLASHES {
            assert_eq!((a + 6) % 12, b);
        }
    }

    #[test]
    fn combine_symmetry_all_pairs() {
        for a in 0..12u8 {
            for b in 0..12u8 {
                assert_eq!(branches_combine(a, b), branches_combine(b, a));
                assert_eq!(branches_clash(a, b), branches_clash(b, a));
            }
        }
    }

    #[test]
    fn every_branch_has_one_combination_partner() {
        for a in 0..12u8 {
            let partners = (0..12u8).filter(|&b| branches_combine(a, b)).count();
            assert_eq!(partners, 1, "branch {a}");
        }
    }

    #[test]
    fn every_branch_has_one_clash_partner() {
        for a in 0..12u8 {
            let partners = (0..12u8).filter(|&b| branches_clash(a, b)).count();
            assert_eq!(partners, 1, "branch {a}");
        }
    }

    #[test]
    fn no_branch_combines_or_clashes_with_itself() {
        for a in 0..12u8 {
            assert!(!branches_combine(a, a));
            assert!(!branches_clash(a, a));
        }
    }

    #[test]
    fn zi_combines_chou_clashes_wu() {
        assert!(branches_combine(0, 1));
        assert!(branches_clash(0, 6));
        assert!(!branches_combine(0, 6));
    }

    #[test]
    fn animals_follow_branch_order() {
        assert_eq!(EarthlyBranch::Zi.animal(), Shio::Rat);
        assert_eq!(EarthlyBranch::Hai.animal(), Shio::Pig);
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.animal().index() as usize, i);
        }
    }

    #[test]
    fn branch_element_distribution() {
        // 4 Earth branches, 2 of each other element.
        let earth = ALL_BRANCHES
            .iter()
            .filter(|b| b.element() == FiveElement::Earth)
            .count();
        assert_eq!(earth, 4);
    }
}

//! The 10 Heavenly Stems (Tian Gan).

use serde::{Deserialize, Serialize};

use crate::element::FiveElement;

/// The 10 Heavenly Stems in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order (index 0 = Jia).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Jia,
    HeavenlyStem::Yi,
    HeavenlyStem::Bing,
    HeavenlyStem::Ding,
    HeavenlyStem::Wu,
    HeavenlyStem::Ji,
    HeavenlyStem::Geng,
    HeavenlyStem::Xin,
    HeavenlyStem::Ren,
    HeavenlyStem::Gui,
];

impl HeavenlyStem {
    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// Display glyph.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Stem element: pairs of stems share an element down the cycle.
    pub const fn element(self) -> FiveElement {
        match self {
            Self::Jia | Self::Yi => FiveElement::Wood,
            Self::Bing | Self::Ding => FiveElement::Fire,
            Self::Wu | Self::Ji => FiveElement::Earth,
            Self::Geng | Self::Xin => FiveElement::Metal,
            Self::Ren | Self::Gui => FiveElement::Water,
        }
    }

    /// 0-based index into [`ALL_STEMS`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Yang stems sit at even indices, yin at odd.
    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }

    /// Stem for a raw cycle index; negative values wrap.
    pub fn from_raw_index(idx: i64) -> Self {
        ALL_STEMS[idx.rem_euclid(10) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn stem_elements_pair_down_the_cycle() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.element().index() as usize, i / 2);
        }
    }

    #[test]
    fn yang_yin_alternate() {
        assert!(HeavenlyStem::Jia.is_yang());
        assert!(!HeavenlyStem::Yi.is_yang());
        assert!(HeavenlyStem::Geng.is_yang());
        assert!(!HeavenlyStem::Gui.is_yang());
    }

    #[test]
    fn from_raw_index_wraps() {
        assert_eq!(HeavenlyStem::from_raw_index(0), HeavenlyStem::Jia);
        assert_eq!(HeavenlyStem::from_raw_index(10), HeavenlyStem::Jia);
        assert_eq!(HeavenlyStem::from_raw_index(16), HeavenlyStem::Geng);
    }

    #[test]
    fn from_raw_index_negative_wraps() {
        // -5 ≡ 5 (mod 10)
        assert_eq!(HeavenlyStem::from_raw_index(-5), HeavenlyStem::Ji);
        assert_eq!(HeavenlyStem::from_raw_index(-10), HeavenlyStem::Jia);
    }

    #[test]
    fn glyphs_nonempty() {
        for s in ALL_STEMS {
            assert!(!s.chinese().is_empty());
            assert!(!s.name().is_empty());
        }
    }
}

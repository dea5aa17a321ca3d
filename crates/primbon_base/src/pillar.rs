//! A stem+branch pillar, the unit of the sexagenary cycle.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::element::FiveElement;
use crate::stem::HeavenlyStem;

/// One pillar of a chart: a Heavenly Stem over an Earthly Branch.
///
/// Two pillars are equal iff both cycle indices match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl Pillar {
    /// Build a pillar from raw 10-cycle and 12-cycle indices.
    ///
    /// Raw indices may be negative (dates before the epoch); they wrap here
    /// and nowhere earlier, so intermediate arithmetic stays signed.
    pub fn from_raw_indices(stem_idx: i64, branch_idx: i64) -> Self {
        Self {
            stem: HeavenlyStem::from_raw_index(stem_idx),
            branch: EarthlyBranch::from_raw_index(branch_idx),
        }
    }

    /// Element of the stem.
    pub const fn stem_element(self) -> FiveElement {
        self.stem.element()
    }

    /// Element of the branch.
    pub const fn branch_element(self) -> FiveElement {
        self.branch.element()
    }

    /// Combined display glyphs, e.g. `庚午`.
    pub fn chinese(self) -> String {
        format!("{}{}", self.stem.chinese(), self.branch.chinese())
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} ({})",
            self.stem.name(),
            self.branch.name(),
            self.chinese()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jia_zi_is_cycle_origin() {
        let p = Pillar::from_raw_indices(0, 0);
        assert_eq!(p.stem, HeavenlyStem::Jia);
        assert_eq!(p.branch, EarthlyBranch::Zi);
    }

    #[test]
    fn negative_indices_wrap() {
        // -5 ≡ 5 (mod 10), -9 ≡ 3 (mod 12): the Jane Doe day pillar.
        let p = Pillar::from_raw_indices(-5, -9);
        assert_eq!(p.stem, HeavenlyStem::Ji);
        assert_eq!(p.branch, EarthlyBranch::Mao);
        assert_eq!(p.stem_element(), FiveElement::Earth);
        assert_eq!(p.branch_element(), FiveElement::Wood);
    }

    #[test]
    fn equality_is_by_indices() {
        assert_eq!(
            Pillar::from_raw_indices(16, 18),
            Pillar::from_raw_indices(6, 6)
        );
        assert_ne!(
            Pillar::from_raw_indices(6, 6),
            Pillar::from_raw_indices(6, 7)
        );
    }

    #[test]
    fn chinese_glyph_pair() {
        let p = Pillar::from_raw_indices(6, 6);
        assert_eq!(p.chinese(), "庚午");
    }

    #[test]
    fn display_format() {
        let p = Pillar::from_raw_indices(0, 0);
        assert_eq!(p.to_string(), "Jia-Zi (甲子)");
    }
}

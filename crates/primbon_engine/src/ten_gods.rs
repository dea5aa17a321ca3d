//! Ten Gods (Shi Shen): the symbolic relation between each chart stem and
//! the Day Master.
//!
//! Classification runs on the five-element cycle distance between the Day
//! Master's element and the target stem's element, split by stem polarity.
//! The five distances 0..4 are exhaustive, so the trailing controlling
//! fallback cannot be reached for well-formed stems; it is kept because
//! the rule set is defined with it, and the exhaustiveness is pinned by a
//! 10x10 test below.

use serde::Serialize;

use primbon_base::{FiveElement, HeavenlyStem, Pillar};

/// The ten relation names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TenGodName {
    BiJian,
    JieCai,
    ShiShen,
    ShangGuan,
    PianCai,
    ZhengCai,
    QiSha,
    ZhengGuan,
    PianYin,
    ZhengYin,
}

impl TenGodName {
    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BiJian => "Bi Jian",
            Self::JieCai => "Jie Cai",
            Self::ShiShen => "Shi Shen",
            Self::ShangGuan => "Shang Guan",
            Self::PianCai => "Pian Cai",
            Self::ZhengCai => "Zheng Cai",
            Self::QiSha => "Qi Sha",
            Self::ZhengGuan => "Zheng Guan",
            Self::PianYin => "Pian Yin",
            Self::ZhengYin => "Zheng Yin",
        }
    }

    /// Display glyphs.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::BiJian => "比肩",
            Self::JieCai => "劫财",
            Self::ShiShen => "食神",
            Self::ShangGuan => "伤官",
            Self::PianCai => "偏财",
            Self::ZhengCai => "正财",
            Self::QiSha => "七杀",
            Self::ZhengGuan => "正官",
            Self::PianYin => "偏印",
            Self::ZhengYin => "正印",
        }
    }

    /// English gloss.
    pub const fn english(self) -> &'static str {
        match self {
            Self::BiJian => "Friend (Shoulder)",
            Self::JieCai => "Rob Wealth",
            Self::ShiShen => "Eating God",
            Self::ShangGuan => "Hurting Officer",
            Self::PianCai => "Indirect Wealth",
            Self::ZhengCai => "Direct Wealth",
            Self::QiSha => "Seven Killings",
            Self::ZhengGuan => "Direct Officer",
            Self::PianYin => "Indirect Seal",
            Self::ZhengYin => "Direct Seal",
        }
    }
}

/// A classified relation for one non-Day pillar stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TenGodRelation {
    pub stem: HeavenlyStem,
    pub element: FiveElement,
    pub relation: TenGodName,
    pub meaning: &'static str,
    pub pillar: PillarPosition,
}

/// Which pillar a relation was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// Classify the relation of `target` to the Day Master.
///
/// `dm_yang`/`target_yang` carry stem polarity; same polarity selects the
/// first relation of each pair.
pub fn classify_relation(
    dm_element: FiveElement,
    dm_yang: bool,
    target_element: FiveElement,
    target_yang: bool,
) -> (TenGodName, &'static str) {
    let dm = i32::from(dm_element.index());
    let t = i32::from(target_element.index());
    let same_polarity = dm_yang == target_yang;

    // Same element: peers.
    if dm == t {
        return if same_polarity {
            (
                TenGodName::BiJian,
                "Peer support, independence, self-reliance. You attract allies who mirror your energy.",
            )
        } else {
            (
                TenGodName::JieCai,
                "Competition, rivalry, unexpected expenses. Can indicate boldness and entrepreneurial drive.",
            )
        };
    }
    // Day Master produces target: output.
    if (dm + 1) % 5 == t {
        return if same_polarity {
            (
                TenGodName::ShiShen,
                "Creativity, enjoyment, talent expression. A gentle outpouring of your inner gifts.",
            )
        } else {
            (
                TenGodName::ShangGuan,
                "Rebellion, brilliance, unconventional thinking. Sharp intelligence that challenges authority.",
            )
        };
    }
    // Two steps down the productive cycle: wealth.
    if (dm + 2) % 5 == t {
        return if same_polarity {
            (
                TenGodName::PianCai,
                "Windfall income, social wealth, generosity. Money flows through connections and opportunity.",
            )
        } else {
            (
                TenGodName::ZhengCai,
                "Steady income, frugality, earned prosperity. Wealth built through diligence and responsibility.",
            )
        };
    }
    // Target controls the Day Master: authority.
    if ((t + 1) % 5 == (dm + 3) % 5 || (dm + 3) % 5 == t)
        && ((t + 2) % 5 == dm || (dm + 3) % 5 == t)
    {
        return if same_polarity {
            (
                TenGodName::QiSha,
                "Intense pressure, power, ambition. A fierce driving force that forges resilience and authority.",
            )
        } else {
            (
                TenGodName::ZhengGuan,
                "Discipline, status, career authority. Upright leadership and recognition from structure.",
            )
        };
    }
    // Target produces the Day Master: resource.
    if (t + 1) % 5 == dm {
        return if same_polarity {
            (
                TenGodName::PianYin,
                "Unconventional knowledge, spiritual insight, alternative learning. Wisdom from hidden sources.",
            )
        } else {
            (
                TenGodName::ZhengYin,
                "Education, nurturing, protection. Support from elders, mentors, and traditional knowledge.",
            )
        };
    }

    // Fallback: controlling relationship. Unreachable for the five-element
    // cycle; see the exhaustiveness test.
    if same_polarity {
        (
            TenGodName::QiSha,
            "Intense pressure and transformation. A catalyst for personal power and resilience.",
        )
    } else {
        (
            TenGodName::ZhengGuan,
            "Authority, structure, and disciplined advancement. Recognition through proper channels.",
        )
    }
}

/// Relations for the year, month, and hour stems. The Day stem is excluded
/// because it is the Day Master itself.
pub fn calculate_ten_gods(
    day_stem: HeavenlyStem,
    year: Pillar,
    month: Pillar,
    day: Pillar,
    hour: Pillar,
) -> Vec<TenGodRelation> {
    let dm_element = day_stem.element();
    let dm_yang = day_stem.is_yang();

    let entries = [
        (year, PillarPosition::Year),
        (month, PillarPosition::Month),
        (day, PillarPosition::Day),
        (hour, PillarPosition::Hour),
    ];

    let mut out = Vec::with_capacity(3);
    for (pillar, position) in entries {
        if matches!(position, PillarPosition::Day) {
            continue;
        }
        let target = pillar.stem;
        let (relation, meaning) =
            classify_relation(dm_element, dm_yang, target.element(), target.is_yang());
        out.push(TenGodRelation {
            stem: target,
            element: target.element(),
            relation,
            meaning,
            pillar: position,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use primbon_base::ALL_STEMS;

    fn relate(dm: HeavenlyStem, target: HeavenlyStem) -> TenGodName {
        classify_relation(dm.element(), dm.is_yang(), target.element(), target.is_yang()).0
    }

    #[test]
    fn same_element_same_polarity_is_friend() {
        // Jia (yang Wood) vs Jia
        assert_eq!(relate(HeavenlyStem::Jia, HeavenlyStem::Jia), TenGodName::BiJian);
    }

    #[test]
    fn same_element_mixed_polarity_is_rob_wealth() {
        assert_eq!(relate(HeavenlyStem::Jia, HeavenlyStem::Yi), TenGodName::JieCai);
    }

    #[test]
    fn output_relations() {
        // Wood produces Fire: Jia→Bing (both yang) = Eating God.
        assert_eq!(relate(HeavenlyStem::Jia, HeavenlyStem::Bing), TenGodName::ShiShen);
        assert_eq!(relate(HeavenlyStem::Jia, HeavenlyStem::Ding), TenGodName::ShangGuan);
    }

    #[test]
    fn wealth_relations() {
        // Wood controls Earth (two steps): Jia→Wu = Indirect Wealth.
        assert_eq!(relate(HeavenlyStem::Jia, HeavenlyStem::Wu), TenGodName::PianCai);
        assert_eq!(relate(HeavenlyStem::Jia, HeavenlyStem::Ji), TenGodName::ZhengCai);
    }

    #[test]
    fn authority_relations() {
        // Metal controls Wood: Jia vs Geng = Seven Killings.
        assert_eq!(relate(HeavenlyStem::Jia, HeavenlyStem::Geng), TenGodName::QiSha);
        assert_eq!(relate(HeavenlyStem::Jia, HeavenlyStem::Xin), TenGodName::ZhengGuan);
    }

    #[test]
    fn resource_relations() {
        // Water produces Wood: Jia vs Ren = Indirect Seal.
        assert_eq!(relate(HeavenlyStem::Jia, HeavenlyStem::Ren), TenGodName::PianYin);
        assert_eq!(relate(HeavenlyStem::Jia, HeavenlyStem::Gui), TenGodName::ZhengYin);
    }

    #[test]
    fn all_hundred_stem_pairs_classify_by_cycle_distance() {
        // Every (day master, target) pair must land in the family implied
        // by the element-cycle distance; the controlling fallback text is
        // never selected.
        for dm in ALL_STEMS {
            for target in ALL_STEMS {
                let rel = relate(dm, target);
                let dist = (5 + target.element().index() - dm.element().index()) % 5;
                let expected = match dist {
                    0 => [TenGodName::BiJian, TenGodName::JieCai],
                    1 => [TenGodName::ShiShen, TenGodName::ShangGuan],
                    2 => [TenGodName::PianCai, TenGodName::ZhengCai],
                    3 => [TenGodName::QiSha, TenGodName::ZhengGuan],
                    _ => [TenGodName::PianYin, TenGodName::ZhengYin],
                };
                assert!(
                    expected.contains(&rel),
                    "{:?} vs {:?}: got {rel:?}, distance {dist}",
                    dm,
                    target
                );
                // The fallback carries distinct meaning text; distance-3
                // pairs must use the primary authority meanings.
                if dist == 3 {
                    let (_, meaning) = classify_relation(
                        dm.element(),
                        dm.is_yang(),
                        target.element(),
                        target.is_yang(),
                    );
                    assert!(
                        meaning.starts_with("Intense pressure, power")
                            || meaning.starts_with("Discipline, status"),
                        "fallback meaning reached for {:?} vs {:?}",
                        dm,
                        target
                    );
                }
            }
        }
    }

    #[test]
    fn day_pillar_is_skipped() {
        let p = |s, b| Pillar::from_raw_indices(s, b);
        let rels = calculate_ten_gods(HeavenlyStem::Ji, p(6, 6), p(7, 6), p(5, 3), p(7, 7));
        assert_eq!(rels.len(), 3);
        assert_eq!(rels[0].pillar, PillarPosition::Year);
        assert_eq!(rels[1].pillar, PillarPosition::Month);
        assert_eq!(rels[2].pillar, PillarPosition::Hour);
    }

    #[test]
    fn jane_doe_relations() {
        // Day Master Ji (yin Earth); year Geng, month/hour Xin (Metal).
        let p = |s, b| Pillar::from_raw_indices(s, b);
        let rels = calculate_ten_gods(HeavenlyStem::Ji, p(6, 6), p(7, 6), p(5, 3), p(7, 7));
        assert_eq!(rels[0].relation, TenGodName::ShangGuan);
        assert_eq!(rels[1].relation, TenGodName::ShiShen);
        assert_eq!(rels[2].relation, TenGodName::ShiShen);
    }
}

//! Yong Shen (Useful God): the element prescribed to balance a chart.
//!
//! The Day Master is "strong" when its element count reaches 1.2x the
//! per-element average of the chart. A strong Day Master is drained by the
//! element it produces; a weak one is fed by the element that produces it.

use serde::Serialize;

use primbon_base::FiveElement;

use crate::bazi::ElementBalance;

/// The prescribed useful element, the element to avoid, and the rule trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YongShenResult {
    pub useful_element: FiveElement,
    pub avoid_element: FiveElement,
    pub rationale: String,
}

/// Strength threshold multiplier over the per-element average.
const STRONG_FACTOR: f64 = 1.2;

pub fn calculate_yong_shen(balance: &ElementBalance, day_master: FiveElement) -> YongShenResult {
    let total = balance.total();
    let dm_count = balance.count(day_master);
    let is_strong = f64::from(dm_count) >= f64::from(total) / 5.0 * STRONG_FACTOR;

    if is_strong {
        let useful = day_master.produces();
        let avoid = day_master.produced_by();
        YongShenResult {
            useful_element: useful,
            avoid_element: avoid,
            rationale: format!(
                "Your {} Day Master is strong ({dm_count}/{total} element points). The \"Useful God\" (用神) is {} — it exhausts excess {} energy through productive flow. Avoid {} which would further strengthen an already dominant Day Master.",
                day_master.name(),
                useful.name(),
                day_master.name(),
                avoid.name()
            ),
        }
    } else {
        let useful = day_master.produced_by();
        let avoid = day_master.controlled_by();
        YongShenResult {
            useful_element: useful,
            avoid_element: avoid,
            rationale: format!(
                "Your {} Day Master is relatively weak ({dm_count}/{total} element points). The \"Useful God\" (用神) is {} — it nurtures and strengthens your Day Master through the productive cycle. Avoid {} which further weakens your core element.",
                day_master.name(),
                useful.name(),
                avoid.name()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primbon_base::Pillar;

    fn balance_of(pillars: [(i64, i64); 4]) -> ElementBalance {
        let p: Vec<Pillar> = pillars
            .iter()
            .map(|&(s, b)| Pillar::from_raw_indices(s, b))
            .collect();
        ElementBalance::tally(&[p[0], p[1], p[2], p[3]])
    }

    #[test]
    fn strong_day_master_is_drained() {
        // Jane Doe: Earth count 2 of 8, threshold 1.92 → strong.
        let balance = balance_of([(6, 6), (7, 6), (5, 3), (7, 7)]);
        let ys = calculate_yong_shen(&balance, FiveElement::Earth);
        assert_eq!(ys.useful_element, FiveElement::Metal);
        assert_eq!(ys.avoid_element, FiveElement::Fire);
        assert!(ys.rationale.contains("is strong (2/8"));
    }

    #[test]
    fn weak_day_master_is_fed() {
        // Chart with a single Wood point: Jia-Zi day in a Metal/Water heavy
        // chart → weak Wood.
        let balance = balance_of([(6, 8), (7, 9), (0, 0), (8, 0)]);
        assert_eq!(balance.count(FiveElement::Wood), 1);
        let ys = calculate_yong_shen(&balance, FiveElement::Wood);
        assert_eq!(ys.useful_element, FiveElement::Water);
        assert_eq!(ys.avoid_element, FiveElement::Metal);
        assert!(ys.rationale.contains("relatively weak (1/8"));
    }

    #[test]
    fn threshold_is_inclusive() {
        // Exactly 2 points among 8 clears the 1.92 threshold.
        let balance = balance_of([(0, 2), (6, 8), (7, 9), (8, 11)]);
        assert_eq!(balance.count(FiveElement::Wood), 2);
        let ys = calculate_yong_shen(&balance, FiveElement::Wood);
        assert_eq!(ys.useful_element, FiveElement::Fire);
    }
}

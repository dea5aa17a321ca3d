//! Relationship timeline from the partners' aligned luck cycles.

use serde::Serialize;

use primbon_base::{branches_clash, branches_combine, element_affinity};
use primbon_engine::BaZiResult;

/// Whether a period runs easier or harder for the couple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelinePhase {
    Easier,
    Harder,
    Neutral,
}

/// One decade-aligned entry of the relationship timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub year_start: i32,
    pub year_end: i32,
    pub phase: TimelinePhase,
    pub description: String,
}

/// At most six entries, one per aligned luck-cycle pair, anchored on
/// partner A's birth year.
pub fn calculate_timeline(a: &BaZiResult, b: &BaZiResult, birth_year_a: i32) -> Vec<TimelineEntry> {
    let max_cycles = a.luck_cycles.len().min(b.luck_cycles.len()).min(6);
    let mut timeline = Vec::with_capacity(max_cycles);

    for i in 0..max_cycles {
        let cycle_a = &a.luck_cycles[i];
        let cycle_b = &b.luck_cycles[i];
        let year_start = birth_year_a + cycle_a.start_age as i32;
        let year_end = birth_year_a + cycle_a.end_age as i32;

        let bi_a = cycle_a.pillar.branch.index();
        let bi_b = cycle_b.pillar.branch.index();

        let (phase, description) = if branches_combine(bi_a, bi_b) {
            (
                TimelinePhase::Easier,
                format!(
                    "Both partners' luck cycles are in harmony ({}+{} combination). A period of natural flow and mutual support.",
                    cycle_a.pillar.branch.chinese(),
                    cycle_b.pillar.branch.chinese()
                ),
            )
        } else if branches_clash(bi_a, bi_b) {
            (
                TimelinePhase::Harder,
                format!(
                    "Luck cycles clash ({} vs {}). A period requiring extra patience, communication, and compromise.",
                    cycle_a.pillar.branch.chinese(),
                    cycle_b.pillar.branch.chinese()
                ),
            )
        } else {
            let affinity =
                element_affinity(cycle_a.pillar.stem_element(), cycle_b.pillar.stem_element());
            if affinity > 5 {
                (
                    TimelinePhase::Easier,
                    format!(
                        "Complementary cycle elements ({}+{}). A productive and mutually enriching period.",
                        cycle_a.pillar.stem_element().name(),
                        cycle_b.pillar.stem_element().name()
                    ),
                )
            } else if affinity < 0 {
                (
                    TimelinePhase::Harder,
                    format!(
                        "Conflicting cycle elements ({} vs {}). Navigate disagreements with extra care.",
                        cycle_a.pillar.stem_element().name(),
                        cycle_b.pillar.stem_element().name()
                    ),
                )
            } else {
                (
                    TimelinePhase::Neutral,
                    "A steady period for the relationship with balanced energies from both charts."
                        .to_string(),
                )
            }
        };

        timeline.push(TimelineEntry {
            year_start,
            year_end,
            phase,
            description,
        });
    }

    timeline
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use primbon_engine::calculate_bazi;
    use primbon_rand::SeededRandom;

    fn bazi_for(y: i32, m: u32, d: u32) -> BaZiResult {
        let mut rng = SeededRandom::new(1);
        calculate_bazi(NaiveDate::from_ymd_opt(y, m, d).unwrap(), 12, &mut rng)
    }

    #[test]
    fn timeline_has_at_most_six_entries() {
        let a = bazi_for(1990, 5, 14);
        let b = bazi_for(1988, 3, 21);
        let t = calculate_timeline(&a, &b, 1990);
        assert_eq!(t.len(), 6);
    }

    #[test]
    fn timeline_anchors_on_partner_a_birth_year() {
        let a = bazi_for(1990, 5, 14);
        let b = bazi_for(1988, 3, 21);
        let t = calculate_timeline(&a, &b, 1990);
        assert_eq!(t[0].year_start, 1990);
        assert_eq!(t[0].year_end, 1999);
        assert_eq!(t[5].year_start, 2040);
    }

    #[test]
    fn same_chart_cycles_never_clash() {
        let a = bazi_for(1990, 5, 14);
        let t = calculate_timeline(&a, &a, 1990);
        // Identical branches neither combine nor clash; identical stems
        // give affinity 5, which is not above the easier threshold.
        for entry in &t {
            assert_eq!(entry.phase, TimelinePhase::Neutral, "{:?}", entry);
        }
    }

    #[test]
    fn phases_cover_descriptions() {
        let a = bazi_for(1990, 5, 14);
        let b = bazi_for(1987, 11, 2);
        for entry in calculate_timeline(&a, &b, 1990) {
            assert!(!entry.description.is_empty());
        }
    }
}

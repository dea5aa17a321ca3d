//! The date-ranking pipeline: enumerate, clash-filter, score, rank.
//!
//! Strict order, no backtracking: every day in the range becomes a
//! candidate; days whose day branch clashes a partner's year or day
//! branch drop into the avoid list; survivors are scored by multi-signal
//! alignment and ranked.

use chrono::{NaiveDate, Utc};

use primbon_base::{Hari, Pasaran, Pillar, branches_clash};
use primbon_engine::{BaZiResult, BirthProfile, CoupleProfile, calculate_bazi};
use primbon_time::{
    days_from_day_pillar_epoch, days_from_pasaran_epoch, days_inclusive, weekday_index,
};

use crate::shen_sha::{DATE_SHEN_SHA, DateShaKind};
use crate::types::{
    DateCandidate, DateEvaluation, DateRanking, DateRating, DateSignal, SignalKind, SignalSystem,
};

/// Default length of the best/avoid lists.
pub const DEFAULT_TOP_N: usize = 10;

/// Weton strings traditionally favorable for marriage ceremonies.
const AUSPICIOUS_MARRIAGE_WETON: [&str; 8] = [
    "Senin Pon",
    "Kamis Legi",
    "Jumat Wage",
    "Sabtu Kliwon",
    "Rabu Pon",
    "Senin Kliwon",
    "Kamis Pon",
    "Jumat Legi",
];

fn candidate_for(date: NaiveDate) -> DateCandidate {
    let offset = days_from_day_pillar_epoch(date);
    let day_pillar = Pillar::from_raw_indices(offset % 10, offset % 12);
    let hari = Hari::from_weekday_index(weekday_index(date));
    let pasaran = Pasaran::from_day_offset(days_from_pasaran_epoch(date));
    DateCandidate {
        date,
        day_pillar,
        weton: format!("{} {}", hari.javanese(), pasaran.name()),
        pasaran,
        hari,
    }
}

struct ClashTargets {
    year_branch: u8,
    day_branch: u8,
}

fn clash_targets(bazi: &BaZiResult) -> ClashTargets {
    ClashTargets {
        year_branch: bazi.year_pillar.branch.index(),
        day_branch: bazi.day_pillar.branch.index(),
    }
}

fn clash_reasons(candidate: &DateCandidate, a: &ClashTargets, b: &ClashTargets) -> Vec<String> {
    let db = candidate.day_pillar.branch.index();
    let glyph = candidate.day_pillar.branch.chinese();
    let mut reasons = Vec::new();
    if branches_clash(db, a.year_branch) {
        reasons.push(format!(
            "Day Branch {glyph} clashes with Partner A's Year Branch"
        ));
    }
    if branches_clash(db, b.year_branch) {
        reasons.push(format!(
            "Day Branch {glyph} clashes with Partner B's Year Branch"
        ));
    }
    if branches_clash(db, a.day_branch) {
        reasons.push(format!(
            "Day Branch {glyph} clashes with Partner A's Day Branch (Spouse Palace)"
        ));
    }
    if branches_clash(db, b.day_branch) {
        reasons.push(format!(
            "Day Branch {glyph} clashes with Partner B's Day Branch (Spouse Palace)"
        ));
    }
    reasons
}

fn score_candidate(candidate: DateCandidate, a: &BaZiResult, b: &BaZiResult) -> DateEvaluation {
    let mut score: i32 = 50;
    let mut signals = Vec::new();
    let db = candidate.day_pillar.branch.index();
    let ds = candidate.day_pillar.stem.index();
    let stem_el = candidate.day_pillar.stem_element();

    // 1. Day stem feeds a Day Master.
    if stem_el.produces() == a.day_master || stem_el.produces() == b.day_master {
        score += 8;
        signals.push(DateSignal {
            system: SignalSystem::Bazi,
            kind: SignalKind::Positive,
            label: "Day Stem supports Day Master",
            description: format!(
                "{} ({}) productively supports at least one partner's Day Master.",
                candidate.day_pillar.stem.chinese(),
                stem_el.name()
            ),
        });
    }

    // 2. Yong Shen alignment and conflict.
    if stem_el == a.yong_shen.useful_element {
        score += 10;
        signals.push(DateSignal {
            system: SignalSystem::YongShen,
            kind: SignalKind::Positive,
            label: "Yong Shen alignment (A)",
            description: format!(
                "Date element {} is Partner A's Useful God — highly favorable.",
                stem_el.name()
            ),
        });
    }
    if stem_el == b.yong_shen.useful_element {
        score += 10;
        signals.push(DateSignal {
            system: SignalSystem::YongShen,
            kind: SignalKind::Positive,
            label: "Yong Shen alignment (B)",
            description: format!(
                "Date element {} is Partner B's Useful God — highly favorable.",
                stem_el.name()
            ),
        });
    }
    if stem_el == a.yong_shen.avoid_element || stem_el == b.yong_shen.avoid_element {
        score -= 8;
        signals.push(DateSignal {
            system: SignalSystem::YongShen,
            kind: SignalKind::Negative,
            label: "Yong Shen conflict",
            description: format!(
                "Date element {} is an \"Avoid Element\" for at least one partner.",
                stem_el.name()
            ),
        });
    }

    // 3. Date stars.
    for sha in &DATE_SHEN_SHA {
        if (sha.check)(db, ds) {
            match sha.kind {
                DateShaKind::Positive => {
                    score += 6;
                    signals.push(DateSignal {
                        system: SignalSystem::ShenSha,
                        kind: SignalKind::Positive,
                        label: sha.name,
                        description: format!("Auspicious star {} is active on this day.", sha.name),
                    });
                }
                DateShaKind::Negative => {
                    score -= 8;
                    signals.push(DateSignal {
                        system: SignalSystem::ShenSha,
                        kind: SignalKind::Negative,
                        label: sha.name,
                        description: format!(
                            "Inauspicious star {} is active on this day — caution advised.",
                            sha.name
                        ),
                    });
                }
            }
        }
    }

    // 4. Marriage weton.
    if AUSPICIOUS_MARRIAGE_WETON.contains(&candidate.weton.as_str()) {
        score += 12;
        signals.push(DateSignal {
            system: SignalSystem::Weton,
            kind: SignalKind::Positive,
            label: "Auspicious Weton",
            description: format!(
                "{} is traditionally considered an excellent day for marriage ceremonies.",
                candidate.weton
            ),
        });
    }

    // 5. Weekend practicality bonus.
    if matches!(candidate.hari, Hari::Sabtu | Hari::Minggu) {
        score += 3;
        signals.push(DateSignal {
            system: SignalSystem::Bazi,
            kind: SignalKind::Neutral,
            label: "Weekend",
            description: "Weekend date — more practical for guests and celebrations.".to_string(),
        });
    }

    let score = score.clamp(0, 100);
    let rating = if score >= 65 {
        DateRating::Auspicious
    } else if score >= 40 {
        DateRating::Neutral
    } else {
        DateRating::Inauspicious
    };

    let positives: Vec<&str> = signals
        .iter()
        .filter(|s| s.kind == SignalKind::Positive)
        .map(|s| s.label)
        .collect();
    let negatives: Vec<&str> = signals
        .iter()
        .filter(|s| s.kind == SignalKind::Negative)
        .map(|s| s.label)
        .collect();
    let mut reason_trace = String::new();
    if !positives.is_empty() {
        reason_trace.push_str(&format!("Favorable: {}. ", positives.join(", ")));
    }
    if !negatives.is_empty() {
        reason_trace.push_str(&format!("Caution: {}. ", negatives.join(", ")));
    }
    if positives.is_empty() && negatives.is_empty() {
        reason_trace = "A neutral day with no strong signals.".to_string();
    }

    DateEvaluation {
        candidate,
        score,
        rating,
        signals,
        reason_trace,
    }
}

fn avoid_evaluation(candidate: DateCandidate, reason: String) -> DateEvaluation {
    DateEvaluation {
        candidate,
        score: 10,
        rating: DateRating::Inauspicious,
        reason_trace: format!("Avoid: {reason}"),
        signals: vec![DateSignal {
            system: SignalSystem::Bazi,
            kind: SignalKind::Negative,
            label: "Branch Clash",
            description: reason,
        }],
    }
}

fn bazi_for(profile: &BirthProfile) -> BaZiResult {
    let mut rng = profile.rng();
    calculate_bazi(profile.date_of_birth, profile.birth_hour(), &mut rng)
}

/// Rank every day in `[start, end]` for a couple.
///
/// An empty or inverted range yields empty lists, not an error; callers
/// must handle empty `best_dates`.
pub fn rank_wedding_dates(
    couple: &CoupleProfile,
    start: NaiveDate,
    end: NaiveDate,
    top_n: usize,
) -> DateRanking {
    let bazi_a = bazi_for(&couple.partner_a);
    let bazi_b = bazi_for(&couple.partner_b);
    let targets_a = clash_targets(&bazi_a);
    let targets_b = clash_targets(&bazi_b);

    let mut scored = Vec::new();
    let mut avoided = Vec::new();
    for date in days_inclusive(start, end) {
        let candidate = candidate_for(date);
        let reasons = clash_reasons(&candidate, &targets_a, &targets_b);
        if reasons.is_empty() {
            scored.push(score_candidate(candidate, &bazi_a, &bazi_b));
        } else {
            avoided.push(avoid_evaluation(candidate, reasons.join("; ")));
        }
    }

    scored.sort_by(|x, y| y.score.cmp(&x.score));
    avoided.sort_by(|x, y| x.score.cmp(&y.score));

    let best_dates: Vec<DateEvaluation> = scored.iter().take(top_n).cloned().collect();
    avoided.truncate(top_n);

    DateRanking {
        best_dates,
        avoid_dates: avoided,
        all_dates: scored,
        couple_profile: couple.clone(),
        range_start: start,
        range_end: end,
        generated_at: Utc::now(),
    }
}

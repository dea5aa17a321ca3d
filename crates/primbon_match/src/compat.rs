//! Couple compatibility orchestrator (He Hun).

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use primbon_engine::{
    BaZiResult, BirthProfile, ChineseZodiac, CoupleProfile, WesternZodiac, WetonResult,
    calculate_bazi, calculate_weton,
};

use crate::scores::{
    PrimbonMatch, SystemScore, calculate_bazi_compatibility, calculate_shio_compatibility,
    calculate_weton_compatibility, calculate_zodiac_synergy,
};
use crate::timeline::{TimelineEntry, calculate_timeline};

/// System weights for the combined score.
const WEIGHT_BAZI: f64 = 0.35;
const WEIGHT_WETON: f64 = 0.30;
const WEIGHT_ZODIAC: f64 = 0.15;
const WEIGHT_SHIO: f64 = 0.20;

/// The full couple reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityResult {
    pub couple_profile: CoupleProfile,
    /// Weighted blend of the four system scores, rounded.
    pub combined_score: i32,
    pub system_scores: Vec<SystemScore>,
    pub primbon_match: PrimbonMatch,
    pub timeline: Vec<TimelineEntry>,
    pub overall_outlook: &'static str,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub advice: Vec<&'static str>,
    pub generated_at: DateTime<Utc>,
}

struct PartnerData {
    bazi: BaZiResult,
    zodiac: WesternZodiac,
    shio: ChineseZodiac,
    weton: WetonResult,
    birth_year: i32,
}

fn extract(profile: &BirthProfile) -> PartnerData {
    let dob = profile.date_of_birth;
    let mut rng = profile.rng();
    PartnerData {
        bazi: calculate_bazi(dob, profile.birth_hour(), &mut rng),
        zodiac: WesternZodiac::for_month_day(dob.month(), dob.day()),
        shio: ChineseZodiac::for_year(dob.year()),
        weton: calculate_weton(dob),
        birth_year: dob.year(),
    }
}

/// Score a couple across the four systems and assemble the reading.
/// Idempotent: the same two profiles always produce the same result
/// modulo `generated_at`.
pub fn generate_compatibility_reading(couple: &CoupleProfile) -> CompatibilityResult {
    let a = extract(&couple.partner_a);
    let b = extract(&couple.partner_b);

    let bazi_score = calculate_bazi_compatibility(&a.bazi, &b.bazi);
    let (weton_score, primbon_match) = calculate_weton_compatibility(&a.weton, &b.weton);
    let zodiac_score = calculate_zodiac_synergy(&a.zodiac, &b.zodiac);
    let shio_score = calculate_shio_compatibility(&a.shio, &b.shio);

    let combined_score = (f64::from(bazi_score.score) * WEIGHT_BAZI
        + f64::from(weton_score.score) * WEIGHT_WETON
        + f64::from(zodiac_score.score) * WEIGHT_ZODIAC
        + f64::from(shio_score.score) * WEIGHT_SHIO)
        .round() as i32;

    let timeline = calculate_timeline(&a.bazi, &b.bazi, a.birth_year);

    let mut strengths = Vec::new();
    let mut challenges = Vec::new();

    if bazi_score.score >= 65 {
        strengths.push("Strong Four Pillars harmony — a natural energetic connection.".to_string());
    }
    if bazi_score.score < 45 {
        challenges.push(
            "BaZi pillar clashes create friction that requires conscious navigation.".to_string(),
        );
    }
    if weton_score.score >= 70 {
        strengths.push(format!(
            "Auspicious Weton pairing (\"{}\") — Javanese tradition strongly favors this union.",
            primbon_match.class.javanese()
        ));
    }
    if weton_score.score < 40 {
        challenges.push(
            "Primbon Weton class suggests separation energy — build intentional rituals of connection."
                .to_string(),
        );
    }
    if zodiac_score.score >= 65 {
        strengths.push(
            "Western Zodiac signs are in harmonious alignment — ease in communication and lifestyle."
                .to_string(),
        );
    }
    if zodiac_score.score < 45 {
        challenges.push(
            "Zodiac elements are in tension — different emotional languages may cause misunderstanding."
                .to_string(),
        );
    }
    if shio_score.score >= 65 {
        strengths.push(
            "Chinese Shio animals form a harmonious group — shared values and life rhythm."
                .to_string(),
        );
    }
    if shio_score.score < 40 {
        challenges.push(
            "Shio animal clash — fundamentally different instincts require patience and understanding."
                .to_string(),
        );
    }

    let advice: Vec<&'static str> = if combined_score >= 75 {
        vec![
            "This pairing has strong cosmic alignment. Focus on growth, shared goals, and mutual respect to maximize this potential.",
            "Don't become complacent — even the best matches require intentional nurturing.",
        ]
    } else if combined_score >= 50 {
        vec![
            "A balanced pairing with both strengths and growth areas. Conscious communication is your greatest tool.",
            "Identify your complementary strengths and lean into them as a team.",
        ]
    } else {
        vec![
            "This pairing faces significant cosmic headwinds. Success is absolutely possible but demands exceptional commitment.",
            "Consider seeking guidance from a trusted counselor to navigate recurring friction points.",
        ]
    };

    let overall_outlook = if combined_score >= 80 {
        "An exceptionally harmonious union. The stars align strongly in your favor — nurture this rare gift."
    } else if combined_score >= 65 {
        "A naturally supportive connection with strong foundations. Minor tensions are easily overcome with mutual effort."
    } else if combined_score >= 50 {
        "A relationship of balance — neither effortless nor impossible. Your growth together depends on conscious choice."
    } else if combined_score >= 35 {
        "A challenging but transformative connection. The friction you experience can forge deep resilience if both partners commit."
    } else {
        "A deeply challenging pairing. Profound personal growth is possible, but both partners must be prepared for significant effort."
    };

    CompatibilityResult {
        couple_profile: couple.clone(),
        combined_score,
        system_scores: vec![bazi_score, weton_score, zodiac_score, shio_score],
        primbon_match,
        timeline,
        overall_outlook,
        strengths,
        challenges,
        advice,
        generated_at: Utc::now(),
    }
}

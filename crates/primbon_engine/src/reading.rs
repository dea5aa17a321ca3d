//! Top-level reading assembly.

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use crate::bazi::{BaZiResult, calculate_bazi};
use crate::fengshui::{FengShuiResult, calculate_feng_shui};
use crate::narrative::decade::{DecadePrediction, generate_decade_predictions};
use crate::narrative::domains::generate_core_domains;
use crate::narrative::yearly::{YearlyPrediction, generate_yearly_predictions};
use crate::narrative::DomainPrediction;
use crate::numerology::{NumerologyResult, calculate_numerology};
use crate::profile::BirthProfile;
use crate::weton::{WetonResult, calculate_weton};
use crate::zodiac::{ChineseZodiac, WesternZodiac};

/// A complete reading: every calculator's output for one profile.
///
/// Regenerating from the same profile (and current year) reproduces every
/// field except `generated_at`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingResult {
    pub profile: BirthProfile,
    pub western_zodiac: WesternZodiac,
    pub chinese_zodiac: ChineseZodiac,
    pub bazi: BaZiResult,
    pub weton: WetonResult,
    pub numerology: NumerologyResult,
    pub feng_shui: FengShuiResult,
    pub core_domains: Vec<DomainPrediction>,
    pub yearly_predictions: Vec<YearlyPrediction>,
    pub decade_predictions: Vec<DecadePrediction>,
    pub generated_at: DateTime<Utc>,
}

/// Generate a reading with the yearly window anchored at the current year.
pub fn generate_reading(profile: &BirthProfile) -> ReadingResult {
    generate_reading_at(profile, Utc::now().year())
}

/// Generate a reading with an explicit "current year" anchor for the
/// yearly window. Fully deterministic apart from the timestamp.
pub fn generate_reading_at(profile: &BirthProfile, current_year: i32) -> ReadingResult {
    let dob = profile.date_of_birth;
    let hour = profile.birth_hour();
    let mut rng = profile.rng();

    let western_zodiac = WesternZodiac::for_month_day(dob.month(), dob.day());
    let chinese_zodiac = ChineseZodiac::for_year(dob.year());
    let bazi = calculate_bazi(dob, hour, &mut rng);
    let weton = calculate_weton(dob);
    let numerology = calculate_numerology(&profile.full_name);
    let feng_shui = calculate_feng_shui(dob.year(), profile.gender);

    let core_domains = generate_core_domains(&mut rng, &bazi, &western_zodiac, &weton);
    let yearly_predictions = generate_yearly_predictions(
        &mut rng,
        dob.year(),
        &bazi,
        &western_zodiac,
        &weton,
        current_year,
    );
    let decade_predictions =
        generate_decade_predictions(&mut rng, dob.year(), &bazi, &western_zodiac, &weton);

    ReadingResult {
        profile: profile.clone(),
        western_zodiac,
        chinese_zodiac,
        bazi,
        weton,
        numerology,
        feng_shui,
        core_domains,
        yearly_predictions,
        decade_predictions,
        generated_at: Utc::now(),
    }
}

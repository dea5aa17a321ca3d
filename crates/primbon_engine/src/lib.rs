//! Per-person divination calculators and reading assembly.
//!
//! This crate turns a [`BirthProfile`] into a fully materialized
//! [`ReadingResult`]:
//! - Four-Pillars chart with Ten Gods, Shen Sha, and Yong Shen
//! - Javanese weton/neptu reading
//! - Western and Chinese zodiac records
//! - Pythagorean numerology
//! - Feng Shui Kua number and directions
//! - seeded narrative predictions (core domains, yearly, decade)
//!
//! Everything is a pure function of the profile plus lookup tables; all
//! narrative variation flows through one seeded stream per reading.

pub mod bazi;
pub mod fengshui;
pub mod narrative;
pub mod numerology;
pub mod profile;
pub mod reading;
pub mod shen_sha;
pub mod ten_gods;
pub mod weton;
pub mod yong_shen;
pub mod zodiac;

pub use bazi::{BaZiResult, ElementBalance, LuckCycle, calculate_bazi};
pub use fengshui::{
    DirectionCategory, DirectionInfo, FengShuiDirection, FengShuiResult, FlyingStarExplainer,
    KuaGroup, calculate_feng_shui, calculate_kua_number,
};
pub use narrative::{
    AdviceDomain, AdviceItem, DecadePrediction, DecadeStrategy, DomainPrediction, MisfortuneIndex,
    MortalityTheme, PredictionCategory, YearlyPrediction,
};
pub use numerology::{LetterValue, NumerologyResult, calculate_numerology, digital_root};
pub use profile::{BirthProfile, CoupleProfile, Gender};
pub use reading::{ReadingResult, generate_reading, generate_reading_at};
pub use shen_sha::{ChartIndices, ShenShaEntry, ShenShaKind, identify_shen_sha};
pub use ten_gods::{PillarPosition, TenGodName, TenGodRelation, calculate_ten_gods};
pub use weton::{FortuneAreas, WetonResult, calculate_weton, weton_label};
pub use yong_shen::{YongShenResult, calculate_yong_shen};
pub use zodiac::{ChineseZodiac, WesternZodiac};

//! Result records for the date-ranking pipeline.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use primbon_base::{Hari, Pasaran, Pillar};
use primbon_engine::CoupleProfile;

/// One enumerated calendar day with its symbolic coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateCandidate {
    pub date: NaiveDate,
    pub day_pillar: Pillar,
    /// Weton label, e.g. `"Kamis Legi"`.
    pub weton: String,
    pub pasaran: Pasaran,
    pub hari: Hari,
}

/// Which scoring system produced a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SignalSystem {
    Bazi,
    Weton,
    ShenSha,
    YongShen,
}

/// Direction of a signal's contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Positive,
    Negative,
    Neutral,
}

/// One triggered scoring signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateSignal {
    pub system: SignalSystem,
    pub kind: SignalKind,
    pub label: &'static str,
    pub description: String,
}

/// Three-way auspiciousness rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRating {
    Auspicious,
    Neutral,
    Inauspicious,
}

/// A scored candidate date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateEvaluation {
    pub candidate: DateCandidate,
    /// Clamped to 0..=100; rejected clash dates are fixed at 10.
    pub score: i32,
    pub rating: DateRating,
    pub signals: Vec<DateSignal>,
    pub reason_trace: String,
}

/// The ranked output for a couple and date range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateRanking {
    /// Top clash-free dates, descending by score, truncated to `top_n`.
    pub best_dates: Vec<DateEvaluation>,
    /// Clash dates, ascending by score, truncated to `top_n`.
    pub avoid_dates: Vec<DateEvaluation>,
    /// Every clash-free date, descending by score, unbounded.
    pub all_dates: Vec<DateEvaluation>,
    pub couple_profile: CoupleProfile,
    pub range_start: NaiveDate,
    pub range_end: NaiveDate,
    pub generated_at: DateTime<Utc>,
}

//! Convenience wrapper for the primbon divination engine.
//!
//! Re-exports the four public entry points and every result type, so
//! callers only need `use primbon_rs::*`:
//!
//! ```rust
//! use chrono::NaiveDate;
//! use primbon_rs::*;
//!
//! let mut profile = BirthProfile::new(
//!     "Jane Doe",
//!     NaiveDate::from_ymd_opt(1990, 5, 14).expect("valid date"),
//! );
//! profile.time_of_birth = Some("14:30".into());
//!
//! let reading = generate_reading(&profile);
//! assert_eq!(reading.weton.weton, "Senin Pahing");
//! ```
//!
//! All entry points are pure: no I/O, no shared state, safe to call from
//! any number of threads.

pub mod convenience;
pub mod error;

pub use convenience::{couple_from_strings, profile_from_strings};
pub use error::PrimbonError;

// The four engine entry points.
pub use primbon_engine::{generate_reading, generate_reading_at};
pub use primbon_match::{generate_compatibility_reading, generate_recommendations};
pub use primbon_zeri::{DEFAULT_TOP_N, rank_wedding_dates};

// Input types.
pub use primbon_engine::{BirthProfile, CoupleProfile, Gender};
pub use primbon_match::MatchMode;

// Result trees.
pub use primbon_engine::{
    AdviceDomain, AdviceItem, BaZiResult, ChineseZodiac, DecadePrediction, DecadeStrategy,
    DomainPrediction, ElementBalance, FengShuiResult, FortuneAreas, KuaGroup, LetterValue,
    LuckCycle, MisfortuneIndex, MortalityTheme, NumerologyResult, PillarPosition,
    PredictionCategory, ReadingResult, ShenShaEntry, ShenShaKind, TenGodName, TenGodRelation,
    WesternZodiac, WetonResult, YearlyPrediction, YongShenResult,
};
pub use primbon_match::{
    CollaborationRisk, CompatibilityResult, PairComparison, PrimbonMatch, RankedMatch,
    RecommendationResult, SystemBreakdown, SystemKind, SystemScore, TimelineEntry, TimelinePhase,
};
pub use primbon_zeri::{
    DateCandidate, DateEvaluation, DateRanking, DateRating, DateSignal, SignalKind, SignalSystem,
};

// Symbol tables, for callers that render or post-process readings.
pub use primbon_base::{
    EarthlyBranch, FiveElement, Hari, HeavenlyStem, Pasaran, Pillar, PrimbonClass, Quality, Shio,
    YinYang, ZodiacElement, ZodiacSign,
};

// Deterministic primitives, for callers extending the narrative layer.
pub use primbon_rand::{SeededRandom, hash_seed};

//! Couple compatibility and match recommendations.
//!
//! Builds on the per-person calculators in `primbon_engine`:
//! - [`generate_compatibility_reading`] scores a couple across BaZi,
//!   Weton/Primbon, western zodiac, and shio, blends the four into one
//!   weighted score, and derives a luck-cycle relationship timeline.
//! - [`generate_recommendations`] ranks counterpart signs and animals for
//!   one profile, with an optional pairwise comparison.

pub mod compat;
pub mod recommend;
pub mod scores;
pub mod timeline;

pub use compat::{CompatibilityResult, generate_compatibility_reading};
pub use recommend::{
    CollaborationRisk, MatchMode, PairComparison, RankedMatch, RecommendationResult,
    SystemBreakdown, generate_recommendations,
};
pub use scores::{
    PrimbonMatch, SystemKind, SystemScore, calculate_bazi_compatibility,
    calculate_shio_compatibility, calculate_weton_compatibility, calculate_zodiac_synergy,
};
pub use timeline::{TimelineEntry, TimelinePhase, calculate_timeline};

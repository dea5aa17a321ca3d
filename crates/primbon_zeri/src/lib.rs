//! Auspicious-date selection (Ze Ri).
//!
//! Enumerates every day of a range, rejects days whose branch clashes
//! either partner's chart, scores the survivors by multi-signal
//! alignment, and returns ranked best/avoid lists.

pub mod rank;
pub mod shen_sha;
pub mod types;

pub use rank::{DEFAULT_TOP_N, rank_wedding_dates};
pub use shen_sha::{DATE_SHEN_SHA, DateShaKind, DateShenSha};
pub use types::{
    DateCandidate, DateEvaluation, DateRanking, DateRating, DateSignal, SignalKind, SignalSystem,
};

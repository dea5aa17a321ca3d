//! Birth profiles and the deterministic per-reading seed.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use primbon_rand::{SeededRandom, hash_seed};
use primbon_time::parse_birth_hour;

/// Gender, used only by the Feng Shui Kua formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Immutable birth data, the sole input to every calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthProfile {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    /// `"HH:MM"`; the hour defaults to 12 when absent or unparseable.
    pub time_of_birth: Option<String>,
    pub gender: Option<Gender>,
}

impl BirthProfile {
    pub fn new(full_name: impl Into<String>, date_of_birth: NaiveDate) -> Self {
        Self {
            full_name: full_name.into(),
            date_of_birth,
            time_of_birth: None,
            gender: None,
        }
    }

    /// Birth hour as a raw integer; pillar arithmetic wraps it modulo 24.
    pub fn birth_hour(&self) -> i64 {
        parse_birth_hour(self.time_of_birth.as_deref())
    }

    /// The seed string `"{name}-{year}-{month}-{day}-{hour}"` with the name
    /// lowercased and trimmed. This exact shape is the determinism anchor:
    /// identical input always reproduces an identical reading.
    pub fn seed_string(&self) -> String {
        let name = self.full_name.to_lowercase();
        format!(
            "{}-{}-{}-{}-{}",
            name.trim(),
            self.date_of_birth.year(),
            self.date_of_birth.month(),
            self.date_of_birth.day(),
            self.birth_hour()
        )
    }

    /// Hash of [`seed_string`](Self::seed_string).
    pub fn seed(&self) -> u32 {
        hash_seed(&self.seed_string())
    }

    /// A generator positioned at the start of this profile's stream.
    pub fn rng(&self) -> SeededRandom {
        SeededRandom::new(self.seed())
    }
}

/// Two partners, the input to compatibility and date ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoupleProfile {
    pub partner_a: BirthProfile,
    pub partner_b: BirthProfile,
}

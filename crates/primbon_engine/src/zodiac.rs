//! Western and Chinese zodiac readings as fully materialized records.

use serde::Serialize;

use primbon_base::{FiveElement, Quality, Shio, YinYang, ZodiacElement, ZodiacSign};

/// A western sun-sign reading: the sign plus its static record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WesternZodiac {
    pub sign: ZodiacSign,
    pub symbol: &'static str,
    pub element: ZodiacElement,
    pub quality: Quality,
    pub ruling_planet: &'static str,
    pub date_range: &'static str,
    pub traits: &'static [&'static str],
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
    pub description: &'static str,
}

impl WesternZodiac {
    /// Reading for a birth month/day.
    pub fn for_month_day(month: u32, day: u32) -> Self {
        Self::of(ZodiacSign::for_month_day(month, day))
    }

    /// Record for a known sign.
    pub fn of(sign: ZodiacSign) -> Self {
        Self {
            sign,
            symbol: sign.symbol(),
            element: sign.element(),
            quality: sign.quality(),
            ruling_planet: sign.ruling_planet(),
            date_range: sign.date_range(),
            traits: sign.traits(),
            strengths: sign.strengths(),
            weaknesses: sign.weaknesses(),
            description: sign.description(),
        }
    }
}

/// A Chinese zodiac reading for a birth year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChineseZodiac {
    pub animal: Shio,
    pub element: FiveElement,
    pub yin_yang: YinYang,
    pub traits: &'static [&'static str],
    pub compatibility: &'static [Shio],
    pub description: &'static str,
}

impl ChineseZodiac {
    /// Reading for a birth year.
    pub fn for_year(year: i32) -> Self {
        let animal = Shio::for_year(year);
        Self {
            animal,
            element: Shio::element_for_year(year),
            yin_yang: Shio::yin_yang_for_year(year),
            traits: animal.traits(),
            compatibility: animal.compatible(),
            description: animal.description(),
        }
    }
}

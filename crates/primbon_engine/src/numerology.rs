//! Pythagorean name numerology.

use serde::Serialize;

use primbon_rand::hash_seed;

/// Value assigned to one letter of the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterValue {
    pub letter: char,
    pub value: u32,
}

/// Name-derived numbers and their reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumerologyResult {
    /// Flavor-layer number from `hash(name) mod 100`, reduced. Only loosely
    /// tied to the name's letters.
    pub life_path: u32,
    /// Expression number: the letter sum's digital root.
    pub expression: u32,
    pub letter_values: Vec<LetterValue>,
    pub interpretation: &'static str,
    pub traits: &'static [&'static str],
}

/// Pythagorean letter value: a/j/s = 1 through i/r = 9, z = 8.
const fn letter_value(idx: u32) -> u32 {
    idx % 9 + 1
}

/// Digital root preserving the master numbers 11, 22, and 33.
pub fn digital_root(mut n: u32) -> u32 {
    while n > 9 && n != 11 && n != 22 && n != 33 {
        let mut sum = 0;
        while n > 0 {
            sum += n % 10;
            n /= 10;
        }
        n = sum;
    }
    n
}

fn interpretation_for(number: u32) -> (&'static str, &'static [&'static str]) {
    let key = match number {
        1..=9 | 11 | 22 | 33 => number,
        0 => 9,
        other => {
            let r = other % 9;
            if r == 0 { 9 } else { r }
        }
    };
    match key {
        1 => (
            "The Leader — You carry the vibration of beginnings and independence. Your name resonates with pioneering energy, self-reliance, and creative force.",
            &["Independent", "Pioneer", "Innovative", "Self-reliant"],
        ),
        2 => (
            "The Diplomat — Your name vibrates with harmony and partnership. You are a natural mediator, sensitive to others' needs, and gifted in cooperation.",
            &["Diplomatic", "Sensitive", "Cooperative", "Peacemaker"],
        ),
        3 => (
            "The Communicator — Your name carries the energy of expression and joy. Creativity flows through you naturally, and your words have the power to inspire.",
            &["Expressive", "Creative", "Joyful", "Inspiring"],
        ),
        4 => (
            "The Builder — Your name resonates with structure and foundation. You bring order to chaos, and your methodical approach creates lasting value.",
            &["Organized", "Practical", "Dependable", "Hardworking"],
        ),
        5 => (
            "The Adventurer — Your name vibrates with freedom and change. You thrive on variety and are drawn to experiences that expand your understanding of life.",
            &["Adventurous", "Versatile", "Dynamic", "Freedom-loving"],
        ),
        6 => (
            "The Nurturer — Your name carries the energy of love and responsibility. You are drawn to caring for others and creating beauty and harmony.",
            &["Nurturing", "Responsible", "Loving", "Harmonious"],
        ),
        7 => (
            "The Seeker — Your name resonates with wisdom and spiritual depth. You are drawn to the mysteries of life and seek truth beyond the surface.",
            &["Analytical", "Spiritual", "Introspective", "Wise"],
        ),
        8 => (
            "The Powerhouse — Your name vibrates with authority and abundance. You possess natural executive ability and are destined for material achievement.",
            &["Authoritative", "Ambitious", "Strategic", "Successful"],
        ),
        11 => (
            "The Illuminator — A master number! Your name vibrates at a higher frequency, carrying the energy of spiritual insight and inspirational leadership.",
            &["Visionary", "Intuitive", "Inspiring", "Spiritually gifted"],
        ),
        22 => (
            "The Master Builder — A master number! Your name resonates with the power to turn dreams into reality on a grand scale. You are here to build something lasting.",
            &["Visionary builder", "Practical idealist", "Powerful manifestor", "Global impact"],
        ),
        33 => (
            "The Master Teacher — A master number! Your name carries the highest vibration of compassion and spiritual guidance. You uplift through love and wisdom.",
            &["Master healer", "Selfless", "Spiritually evolved", "Universal love"],
        ),
        _ => (
            "The Humanitarian — Your name carries the energy of compassion and universal love. You are here to serve a higher purpose and uplift humanity.",
            &["Compassionate", "Idealistic", "Generous", "Visionary"],
        ),
    }
}

/// Compute the numerology reading for a full name.
pub fn calculate_numerology(name: &str) -> NumerologyResult {
    let letter_values: Vec<LetterValue> = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .map(|c| LetterValue {
            letter: c,
            value: letter_value(c as u32 - 'a' as u32),
        })
        .collect();

    let total: u32 = letter_values.iter().map(|lv| lv.value).sum();
    let expression = digital_root(total);
    // Flavor layer: a hash of the raw (unnormalized) name.
    let life_path = digital_root(hash_seed(name) % 100);

    let (interpretation, traits) = interpretation_for(expression);

    NumerologyResult {
        life_path,
        expression,
        letter_values,
        interpretation,
        traits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digital_root_basics() {
        assert_eq!(digital_root(27), 9);
        assert_eq!(digital_root(38), 11);
        assert_eq!(digital_root(0), 0);
        assert_eq!(digital_root(9), 9);
        assert_eq!(digital_root(199), 1);
    }

    #[test]
    fn digital_root_preserves_master_numbers() {
        assert_eq!(digital_root(11), 11);
        assert_eq!(digital_root(22), 22);
        assert_eq!(digital_root(33), 33);
        // 29 → 11 stops at the master number.
        assert_eq!(digital_root(29), 11);
    }

    #[test]
    fn letter_values_wrap_at_nine() {
        // a=1, i=9, j=1, r=9, s=1, z=8
        assert_eq!(letter_value(0), 1);
        assert_eq!(letter_value(8), 9);
        assert_eq!(letter_value(9), 1);
        assert_eq!(letter_value(17), 9);
        assert_eq!(letter_value(18), 1);
        assert_eq!(letter_value(25), 8);
    }

    #[test]
    fn jane_doe_expression() {
        // j1 a1 n5 e5 d4 o6 e5 = 27 → 9
        let n = calculate_numerology("Jane Doe");
        assert_eq!(n.expression, 9);
        assert_eq!(n.letter_values.len(), 7);
    }

    #[test]
    fn jane_doe_life_path() {
        // hash("Jane Doe") mod 100 = 37 → 10 → 1
        let n = calculate_numerology("Jane Doe");
        assert_eq!(n.life_path, 1);
    }

    #[test]
    fn non_letters_are_skipped() {
        let n = calculate_numerology("J.a-n e!");
        let letters: String = n.letter_values.iter().map(|lv| lv.letter).collect();
        assert_eq!(letters, "jane");
    }

    #[test]
    fn empty_name_falls_back_to_nine_reading() {
        let n = calculate_numerology("");
        assert_eq!(n.expression, 0);
        assert!(n.interpretation.starts_with("The Humanitarian"));
    }

    #[test]
    fn deterministic() {
        assert_eq!(calculate_numerology("Budi"), calculate_numerology("Budi"));
    }
}

//! Javanese calendar units: the 7-day week (hari) and the 5-day market
//! week (pasaran), with their neptu values.

use serde::{Deserialize, Serialize};

/// Day of the seven-day week, Sunday-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hari {
    Minggu,
    Senin,
    Selasa,
    Rabu,
    Kamis,
    Jumat,
    Sabtu,
}

/// All seven days, Sunday-first (index 0 = Minggu).
pub const ALL_HARI: [Hari; 7] = [
    Hari::Minggu,
    Hari::Senin,
    Hari::Selasa,
    Hari::Rabu,
    Hari::Kamis,
    Hari::Jumat,
    Hari::Sabtu,
];

impl Hari {
    /// English day name.
    pub const fn english(self) -> &'static str {
        match self {
            Self::Minggu => "Sunday",
            Self::Senin => "Monday",
            Self::Selasa => "Tuesday",
            Self::Rabu => "Wednesday",
            Self::Kamis => "Thursday",
            Self::Jumat => "Friday",
            Self::Sabtu => "Saturday",
        }
    }

    /// Javanese/Indonesian day name.
    pub const fn javanese(self) -> &'static str {
        match self {
            Self::Minggu => "Minggu",
            Self::Senin => "Senin",
            Self::Selasa => "Selasa",
            Self::Rabu => "Rabu",
            Self::Kamis => "Kamis",
            Self::Jumat => "Jumat",
            Self::Sabtu => "Sabtu",
        }
    }

    /// Neptu value of the day.
    pub const fn neptu(self) -> u32 {
        match self {
            Self::Minggu => 5,
            Self::Senin => 4,
            Self::Selasa => 3,
            Self::Rabu => 7,
            Self::Kamis => 8,
            Self::Jumat => 6,
            Self::Sabtu => 9,
        }
    }

    /// 0-based index, Sunday = 0.
    pub const fn index(self) -> u8 {
        match self {
            Self::Minggu => 0,
            Self::Senin => 1,
            Self::Selasa => 2,
            Self::Rabu => 3,
            Self::Kamis => 4,
            Self::Jumat => 5,
            Self::Sabtu => 6,
        }
    }

    /// Day for a Sunday-based weekday index; wraps modulo 7.
    pub fn from_weekday_index(idx: u8) -> Self {
        ALL_HARI[(idx % 7) as usize]
    }
}

/// Day of the five-day Javanese market week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pasaran {
    Legi,
    Pahing,
    Pon,
    Wage,
    Kliwon,
}

/// The pasaran cycle (index 0 = Legi, the epoch anchor).
pub const ALL_PASARAN: [Pasaran; 5] = [
    Pasaran::Legi,
    Pasaran::Pahing,
    Pasaran::Pon,
    Pasaran::Wage,
    Pasaran::Kliwon,
];

impl Pasaran {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Legi => "Legi",
            Self::Pahing => "Pahing",
            Self::Pon => "Pon",
            Self::Wage => "Wage",
            Self::Kliwon => "Kliwon",
        }
    }

    /// Neptu value of the market day.
    pub const fn neptu(self) -> u32 {
        match self {
            Self::Legi => 5,
            Self::Pahing => 9,
            Self::Pon => 7,
            Self::Wage => 4,
            Self::Kliwon => 8,
        }
    }

    /// 0-based index into [`ALL_PASARAN`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Legi => 0,
            Self::Pahing => 1,
            Self::Pon => 2,
            Self::Wage => 3,
            Self::Kliwon => 4,
        }
    }

    /// Pasaran for a signed whole-day offset from the pasaran epoch
    /// (offset 0 = Legi); negative offsets wrap.
    pub fn from_day_offset(offset: i64) -> Self {
        ALL_PASARAN[offset.rem_euclid(5) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hari_indices_sequential() {
        for (i, h) in ALL_HARI.iter().enumerate() {
            assert_eq!(h.index() as usize, i);
        }
    }

    #[test]
    fn day_neptu_table() {
        let neptu: Vec<u32> = ALL_HARI.iter().map(|h| h.neptu()).collect();
        assert_eq!(neptu, vec![5, 4, 3, 7, 8, 6, 9]);
    }

    #[test]
    fn pasaran_neptu_table() {
        let neptu: Vec<u32> = ALL_PASARAN.iter().map(|p| p.neptu()).collect();
        assert_eq!(neptu, vec![5, 9, 7, 4, 8]);
    }

    #[test]
    fn neptu_extremes() {
        // Day neptu spans 3..=9, pasaran 4..=9, so totals span 7..=18.
        let day_min = ALL_HARI.iter().map(|h| h.neptu()).min().unwrap();
        let day_max = ALL_HARI.iter().map(|h| h.neptu()).max().unwrap();
        let pas_min = ALL_PASARAN.iter().map(|p| p.neptu()).min().unwrap();
        let pas_max = ALL_PASARAN.iter().map(|p| p.neptu()).max().unwrap();
        assert_eq!(day_min + pas_min, 7);
        assert_eq!(day_max + pas_max, 18);
    }

    #[test]
    fn pasaran_offset_zero_is_legi() {
        assert_eq!(Pasaran::from_day_offset(0), Pasaran::Legi);
    }

    #[test]
    fn pasaran_offset_wraps_forward() {
        assert_eq!(Pasaran::from_day_offset(5), Pasaran::Legi);
        assert_eq!(Pasaran::from_day_offset(7), Pasaran::Pon);
    }

    #[test]
    fn pasaran_offset_wraps_backward() {
        // -3519 ≡ 1 (mod 5): the Jane Doe pasaran (Pahing).
        assert_eq!(Pasaran::from_day_offset(-3519), Pasaran::Pahing);
        assert_eq!(Pasaran::from_day_offset(-1), Pasaran::Kliwon);
    }

    #[test]
    fn hari_from_weekday_index() {
        assert_eq!(Hari::from_weekday_index(0), Hari::Minggu);
        assert_eq!(Hari::from_weekday_index(6), Hari::Sabtu);
    }
}

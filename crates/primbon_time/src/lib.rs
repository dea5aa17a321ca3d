//! Civil-calendar helpers and the fixed epochs of the engine.
//!
//! All cycle arithmetic downstream runs on whole-day offsets between
//! local-midnight calendar dates, anchored at two independent epochs:
//!
//! - Day-pillar epoch: **2000-01-07**, a known Jia-Zi day (stem 0, branch 0).
//! - Pasaran epoch: **2000-01-01**, anchored to Legi (index 0).
//!
//! Both are hard-coded anchors; any drift silently changes every
//! downstream pillar and weton value.

use chrono::{Datelike, NaiveDate};

/// Days-from-CE ordinal of 2000-01-07 (day-pillar epoch, a Jia-Zi day).
pub const DAY_PILLAR_EPOCH_DAYS: i64 = 730_126;

/// Days-from-CE ordinal of 2000-01-01 (pasaran epoch, Legi).
pub const PASARAN_EPOCH_DAYS: i64 = 730_120;

/// Default birth hour when the time of birth is unknown or unparseable.
pub const DEFAULT_BIRTH_HOUR: i64 = 12;

/// Signed whole days from the day-pillar epoch to `date`.
///
/// Negative before 2000-01-07; callers normalize with `rem_euclid` at
/// table lookup.
pub fn days_from_day_pillar_epoch(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - DAY_PILLAR_EPOCH_DAYS
}

/// Signed whole days from the pasaran epoch to `date`.
pub fn days_from_pasaran_epoch(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - PASARAN_EPOCH_DAYS
}

/// Day-of-week index with Sunday = 0 .. Saturday = 6.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Every date in `[start, end]` inclusive. An inverted range is empty.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// Parse the hour from an `"HH:MM"` time-of-birth string.
///
/// Takes the leading integer of the segment before `:`; absent or
/// unparseable input yields [`DEFAULT_BIRTH_HOUR`]. A parsed `0` is a
/// valid midnight hour. Out-of-range values are returned raw; pillar
/// arithmetic wraps hours modulo 24.
pub fn parse_birth_hour(time_of_birth: Option<&str>) -> i64 {
    let Some(raw) = time_of_birth else {
        return DEFAULT_BIRTH_HOUR;
    };
    let head = raw.split(':').next().unwrap_or("").trim();
    let digits: String = head
        .chars()
        .enumerate()
        .take_while(|(i, c)| c.is_ascii_digit() || (*i == 0 && *c == '-'))
        .map(|(_, c)| c)
        .collect();
    digits.parse::<i64>().unwrap_or(DEFAULT_BIRTH_HOUR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // --- Epoch anchors ---

    #[test]
    fn day_pillar_epoch_ordinal_matches() {
        assert_eq!(
            i64::from(date(2000, 1, 7).num_days_from_ce()),
            DAY_PILLAR_EPOCH_DAYS
        );
    }

    #[test]
    fn pasaran_epoch_ordinal_matches() {
        assert_eq!(
            i64::from(date(2000, 1, 1).num_days_from_ce()),
            PASARAN_EPOCH_DAYS
        );
    }

    #[test]
    fn epoch_offset_zero_at_epoch() {
        assert_eq!(days_from_day_pillar_epoch(date(2000, 1, 7)), 0);
        assert_eq!(days_from_pasaran_epoch(date(2000, 1, 1)), 0);
    }

    #[test]
    fn offset_negative_before_epoch() {
        assert_eq!(days_from_day_pillar_epoch(date(1990, 5, 14)), -3525);
        assert_eq!(days_from_pasaran_epoch(date(1990, 5, 14)), -3519);
    }

    #[test]
    fn offset_positive_after_epoch() {
        assert_eq!(days_from_day_pillar_epoch(date(2000, 1, 17)), 10);
    }

    // --- Weekday ---

    #[test]
    fn weekday_sunday_is_zero() {
        // 2000-01-02 was a Sunday.
        assert_eq!(weekday_index(date(2000, 1, 2)), 0);
    }

    #[test]
    fn weekday_saturday_is_six() {
        // 2000-01-01 was a Saturday.
        assert_eq!(weekday_index(date(2000, 1, 1)), 6);
    }

    #[test]
    fn weekday_jane_doe_birthday_is_monday() {
        assert_eq!(weekday_index(date(1990, 5, 14)), 1);
    }

    // --- Date ranges ---

    #[test]
    fn days_inclusive_counts_both_endpoints() {
        let days = days_inclusive(date(2026, 3, 1), date(2026, 3, 10));
        assert_eq!(days.len(), 10);
        assert_eq!(days[0], date(2026, 3, 1));
        assert_eq!(days[9], date(2026, 3, 10));
    }

    #[test]
    fn days_inclusive_single_day() {
        let days = days_inclusive(date(2026, 3, 1), date(2026, 3, 1));
        assert_eq!(days, vec![date(2026, 3, 1)]);
    }

    #[test]
    fn days_inclusive_inverted_is_empty() {
        assert!(days_inclusive(date(2026, 3, 10), date(2026, 3, 1)).is_empty());
    }

    #[test]
    fn days_inclusive_crosses_leap_day() {
        let days = days_inclusive(date(2024, 2, 28), date(2024, 3, 1));
        assert_eq!(days.len(), 3);
        assert_eq!(days[1], date(2024, 2, 29));
    }

    // --- Hour parsing ---

    #[test]
    fn parse_hour_standard() {
        assert_eq!(parse_birth_hour(Some("14:30")), 14);
    }

    #[test]
    fn parse_hour_leading_zero() {
        assert_eq!(parse_birth_hour(Some("07:15")), 7);
    }

    #[test]
    fn parse_hour_midnight_is_zero() {
        assert_eq!(parse_birth_hour(Some("00:30")), 0);
    }

    #[test]
    fn parse_hour_missing_defaults() {
        assert_eq!(parse_birth_hour(None), DEFAULT_BIRTH_HOUR);
    }

    #[test]
    fn parse_hour_garbage_defaults() {
        assert_eq!(parse_birth_hour(Some("noon")), DEFAULT_BIRTH_HOUR);
        assert_eq!(parse_birth_hour(Some("")), DEFAULT_BIRTH_HOUR);
        assert_eq!(parse_birth_hour(Some(":30")), DEFAULT_BIRTH_HOUR);
    }

    #[test]
    fn parse_hour_trailing_text_keeps_prefix() {
        assert_eq!(parse_birth_hour(Some("9am:00")), 9);
    }

    #[test]
    fn parse_hour_out_of_range_passes_through() {
        assert_eq!(parse_birth_hour(Some("25:00")), 25);
    }
}

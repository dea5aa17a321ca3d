//! String-facing constructors for callers that hold unparsed input.

use chrono::NaiveDate;

use primbon_engine::{BirthProfile, CoupleProfile, Gender};

use crate::error::PrimbonError;

/// Build a validated profile from string inputs.
///
/// `date_of_birth` is `YYYY-MM-DD`. The name must be non-empty after
/// trimming; time-of-birth stays raw (the engine parses the hour with its
/// own noon fallback).
pub fn profile_from_strings(
    full_name: &str,
    date_of_birth: &str,
    time_of_birth: Option<&str>,
    gender: Option<Gender>,
) -> Result<BirthProfile, PrimbonError> {
    if full_name.trim().is_empty() {
        return Err(PrimbonError::InvalidProfile("name must not be empty"));
    }
    let date = date_of_birth.parse::<NaiveDate>()?;
    Ok(BirthProfile {
        full_name: full_name.to_string(),
        date_of_birth: date,
        time_of_birth: time_of_birth.map(str::to_string),
        gender,
    })
}

/// Build a couple from two string-profile tuples.
pub fn couple_from_strings(
    partner_a: (&str, &str, Option<&str>, Option<Gender>),
    partner_b: (&str, &str, Option<&str>, Option<Gender>),
) -> Result<CoupleProfile, PrimbonError> {
    Ok(CoupleProfile {
        partner_a: profile_from_strings(partner_a.0, partner_a.1, partner_a.2, partner_a.3)?,
        partner_b: profile_from_strings(partner_b.0, partner_b.1, partner_b.2, partner_b.3)?,
    })
}

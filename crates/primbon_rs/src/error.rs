//! Boundary errors for the facade helpers.
//!
//! The engine itself never fails on in-memory inputs; errors only arise
//! when parsing caller-supplied strings into profiles and dates.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from profile and date parsing.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PrimbonError {
    /// A date string did not parse as `YYYY-MM-DD`.
    InvalidDate(chrono::ParseError),
    /// A profile field failed validation.
    InvalidProfile(&'static str),
}

impl Display for PrimbonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(e) => write!(f, "invalid date: {e}"),
            Self::InvalidProfile(msg) => write!(f, "invalid profile: {msg}"),
        }
    }
}

impl Error for PrimbonError {}

impl From<chrono::ParseError> for PrimbonError {
    fn from(e: chrono::ParseError) -> Self {
        Self::InvalidDate(e)
    }
}

//! Symbolic lookup tables for the divination engine.
//!
//! This crate holds the static content every calculator indexes into:
//! - the 10 Heavenly Stems and 12 Earthly Branches with their elements
//! - the five-element production/control cycles
//! - western zodiac records and harmony structures
//! - the 12 shio animals with San He / Liu He / Liu Chong tables
//! - Javanese hari/pasaran neptu tables and the nine primbon classes
//!
//! Everything is immutable static data plus pure classification functions;
//! there is no I/O and no state.

pub mod branch;
pub mod element;
pub mod pillar;
pub mod primbon_class;
pub mod shio;
pub mod stem;
pub mod weton;
pub mod zodiac;

pub use branch::{
    ALL_BRANCHES, EarthlyBranch, SIX_CLASHES, SIX_COMBINATIONS, branches_clash, branches_combine,
};
pub use element::{ALL_ELEMENTS, FiveElement, element_affinity};
pub use pillar::Pillar;
pub use primbon_class::{ALL_CLASSES, PrimbonClass};
pub use shio::{ALL_SHIO, SAN_HE, Shio, YinYang};
pub use stem::{ALL_STEMS, HeavenlyStem};
pub use weton::{ALL_HARI, ALL_PASARAN, Hari, Pasaran};
pub use zodiac::{
    ALL_SIGNS, Quality, ZODIAC_SEXTILES, ZODIAC_TRINES, ZodiacElement, ZodiacSign,
    elements_harmonize, elements_oppose, work_role,
};

//! The five elements (Wu Xing) and their production/control cycles.
//!
//! Element order is load-bearing: dominant/weakest tie-breaks and the
//! Ten-Gods cycle distance both iterate `[Wood, Fire, Earth, Metal,
//! Water]` in this fixed order.

use serde::{Deserialize, Serialize};

/// The five elements, in canonical cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FiveElement {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in canonical order (index 0 = Wood).
pub const ALL_ELEMENTS: [FiveElement; 5] = [
    FiveElement::Wood,
    FiveElement::Fire,
    FiveElement::Earth,
    FiveElement::Metal,
    FiveElement::Water,
];

impl FiveElement {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// 0-based index into [`ALL_ELEMENTS`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Element this one produces (sheng cycle, +1).
    pub const fn produces(self) -> Self {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// Element that produces this one (the "mother" element).
    pub const fn produced_by(self) -> Self {
        match self {
            Self::Wood => Self::Water,
            Self::Fire => Self::Wood,
            Self::Earth => Self::Fire,
            Self::Metal => Self::Earth,
            Self::Water => Self::Metal,
        }
    }

    /// Element this one controls (ke cycle, +2).
    pub const fn controls(self) -> Self {
        match self {
            Self::Wood => Self::Earth,
            Self::Fire => Self::Metal,
            Self::Earth => Self::Water,
            Self::Metal => Self::Wood,
            Self::Water => Self::Fire,
        }
    }

    /// Element that controls this one.
    pub const fn controlled_by(self) -> Self {
        match self {
            Self::Wood => Self::Metal,
            Self::Fire => Self::Water,
            Self::Earth => Self::Wood,
            Self::Metal => Self::Fire,
            Self::Water => Self::Earth,
        }
    }
}

/// Five-tier affinity between two elements: same = 5, productive in either
/// direction = 10, destructive in either direction = -5, else 0.
pub const fn element_affinity(a: FiveElement, b: FiveElement) -> i32 {
    if a.index() == b.index() {
        return 5;
    }
    if a.produces().index() == b.index() || b.produces().index() == a.index() {
        return 10;
    }
    if a.controls().index() == b.index() || b.controls().index() == a.index() {
        return -5;
    }
    0
}

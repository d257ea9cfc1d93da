//! # Support Conditions
//!
//! A beam is held by one support at each end. Each end is one of four
//! conditions; the pair of them fully describes the boundary conditions.
//!
//! Cantilevers are not a fifth support kind. Whether a beam is a cantilever is
//! read off the pair with [`SupportPair::classify`] every time it is needed.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::supports::{SupportClass, SupportEnd, SupportPair};
//!
//! let pair = SupportPair::new(SupportEnd::Fixed, SupportEnd::Free);
//! assert!(pair.is_cantilever());
//! assert_eq!(pair.classify(), SupportClass::CantileverFixedLeft);
//! ```

use serde::{Deserialize, Serialize};

/// Boundary condition at one end of the beam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportEnd {
    /// Resists vertical force, horizontal force and moment
    Fixed,
    /// Resists vertical and horizontal force
    Pinned,
    /// Resists vertical force only
    Roller,
    /// Resists nothing
    Free,
}

impl SupportEnd {
    /// All support conditions in display order
    pub const ALL: [SupportEnd; 4] = [
        SupportEnd::Fixed,
        SupportEnd::Pinned,
        SupportEnd::Roller,
        SupportEnd::Free,
    ];

    /// Lowercase name as used in project files
    pub fn code(&self) -> &'static str {
        match self {
            SupportEnd::Fixed => "fixed",
            SupportEnd::Pinned => "pinned",
            SupportEnd::Roller => "roller",
            SupportEnd::Free => "free",
        }
    }

    /// Pinned or roller: carries vertical force but no moment
    pub fn is_hinged(&self) -> bool {
        matches!(self, SupportEnd::Pinned | SupportEnd::Roller)
    }

    /// Whether this end can take horizontal load
    pub fn resists_horizontal(&self) -> bool {
        matches!(self, SupportEnd::Fixed | SupportEnd::Pinned)
    }
}

impl std::fmt::Display for SupportEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for SupportEnd {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(SupportEnd::Fixed),
            "pinned" | "pin" => Ok(SupportEnd::Pinned),
            "roller" => Ok(SupportEnd::Roller),
            "free" | "none" => Ok(SupportEnd::Free),
            other => Err(format!("unknown support '{}'", other)),
        }
    }
}

/// Support arrangement derived from a [`SupportPair`].
///
/// Variants are listed in the order the reaction solver tests them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportClass {
    /// Fixed at left, free at right
    CantileverFixedLeft,
    /// Free at left, fixed at right
    CantileverFixedRight,
    /// Fixed at both ends (solved with an equal-split approximation)
    FixedFixed,
    /// Fixed at left, pinned or roller at right
    FixedHinged,
    /// Pinned or roller at left, fixed at right
    HingedFixed,
    /// Pinned or roller at both ends
    SimplySupported,
    /// Any arrangement with a free end that is not a cantilever
    Unsupported,
}

impl SupportClass {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportClass::CantileverFixedLeft => "Cantilever (fixed left)",
            SupportClass::CantileverFixedRight => "Cantilever (fixed right)",
            SupportClass::FixedFixed => "Fixed-Fixed",
            SupportClass::FixedHinged => "Propped cantilever (fixed left)",
            SupportClass::HingedFixed => "Propped cantilever (fixed right)",
            SupportClass::SimplySupported => "Simply supported",
            SupportClass::Unsupported => "Unsupported",
        }
    }

    pub fn is_cantilever(&self) -> bool {
        matches!(
            self,
            SupportClass::CantileverFixedLeft | SupportClass::CantileverFixedRight
        )
    }
}

/// Support conditions at the left and right ends of the beam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupportPair {
    pub left: SupportEnd,
    pub right: SupportEnd,
}

impl SupportPair {
    pub fn new(left: SupportEnd, right: SupportEnd) -> Self {
        SupportPair { left, right }
    }

    /// Pinned at left, roller at right
    pub fn simply_supported() -> Self {
        SupportPair::new(SupportEnd::Pinned, SupportEnd::Roller)
    }

    /// Fixed at left, free at right
    pub fn cantilever() -> Self {
        SupportPair::new(SupportEnd::Fixed, SupportEnd::Free)
    }

    /// Classify the arrangement. First match wins.
    pub fn classify(&self) -> SupportClass {
        use SupportEnd::*;
        match (self.left, self.right) {
            (Fixed, Free) => SupportClass::CantileverFixedLeft,
            (Free, Fixed) => SupportClass::CantileverFixedRight,
            (Fixed, Fixed) => SupportClass::FixedFixed,
            (Fixed, r) if r.is_hinged() => SupportClass::FixedHinged,
            (l, Fixed) if l.is_hinged() => SupportClass::HingedFixed,
            (l, r) if l.is_hinged() && r.is_hinged() => SupportClass::SimplySupported,
            _ => SupportClass::Unsupported,
        }
    }

    pub fn is_cantilever(&self) -> bool {
        self.classify().is_cantilever()
    }

    /// True when the left end is the unrestrained end of a cantilever
    pub fn left_is_free_end(&self) -> bool {
        self.classify() == SupportClass::CantileverFixedRight
    }
}

impl Default for SupportPair {
    fn default() -> Self {
        SupportPair::new(SupportEnd::Fixed, SupportEnd::Roller)
    }
}

impl std::fmt::Display for SupportPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.left, self.right)
    }
}

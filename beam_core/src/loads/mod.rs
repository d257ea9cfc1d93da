//! Beam loads
//!
//! This module defines the loads that can be applied to a beam and the
//! entries a project keeps for them.
//!
//! # Overview
//!
//! - [`Load`] - Point, distributed or moment load (one variant per kind, each
//!   with only the fields that kind needs)
//! - [`LoadEntry`] - A load as held in a project: identity, visibility, note
//! - [`decompose`] - Splits angled point loads into vertical and horizontal parts
//!
//! # Sign Convention
//!
//! - Point and distributed magnitudes: positive acts downward
//! - Horizontal components (after decomposition): positive acts to the right
//! - Angles: degrees, 0 = straight down, positive rotates toward the horizontal
//!
//! # Example
//!
//! ```
//! use beam_core::loads::{Load, LoadEntry};
//!
//! let entries = vec![
//!     LoadEntry::new(Load::point(50.0, 4.0)),
//!     LoadEntry::new(Load::distributed(2.0, 6.0, 3.0)).hidden(),
//! ];
//!
//! let active: Vec<&Load> = beam_core::loads::visible_loads(&entries).collect();
//! assert_eq!(active.len(), 1);
//! ```

pub mod decompose;

pub use decompose::{decompose, DecomposedLoad};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of load, without its data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadKind {
    Point,
    Distributed,
    Moment,
}

impl LoadKind {
    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadKind::Point => "Point",
            LoadKind::Distributed => "Distributed",
            LoadKind::Moment => "Moment",
        }
    }

    /// Unit label for the magnitude of this kind of load
    pub fn magnitude_units(&self) -> &'static str {
        match self {
            LoadKind::Point => "kN",
            LoadKind::Distributed => "kN/m",
            LoadKind::Moment => "kNm",
        }
    }
}

impl std::fmt::Display for LoadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A single load applied to the beam
///
/// # JSON Format
/// ```json
/// { "type": "point", "position": 4.0, "magnitude": 50.0, "angle_deg": 30.0 }
/// { "type": "distributed", "position": 2.0, "length": 3.0, "magnitude": 5.0 }
/// { "type": "moment", "position": 6.0, "magnitude": 12.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Load {
    /// Concentrated force, optionally inclined from the vertical
    Point {
        /// Distance from left end (m)
        position: f64,
        /// Force (kN), positive downward
        magnitude: f64,
        /// Inclination from vertical (degrees), 0 = straight down
        #[serde(default)]
        angle_deg: f64,
    },

    /// Uniform line load over part of the beam
    Distributed {
        /// Start of the loaded span from left end (m)
        position: f64,
        /// Length of the loaded span (m)
        length: f64,
        /// Intensity (kN/m), positive downward
        magnitude: f64,
    },

    /// Concentrated couple
    Moment {
        /// Distance from left end (m)
        position: f64,
        /// Moment (kNm)
        magnitude: f64,
    },
}

impl Load {
    /// Create a vertical point load
    pub fn point(magnitude: f64, position: f64) -> Self {
        Load::Point {
            position,
            magnitude,
            angle_deg: 0.0,
        }
    }

    /// Create an inclined point load
    pub fn angled_point(magnitude: f64, position: f64, angle_deg: f64) -> Self {
        Load::Point {
            position,
            magnitude,
            angle_deg,
        }
    }

    /// Create a uniform load of `magnitude` starting at `position` and spanning `length`
    pub fn distributed(magnitude: f64, position: f64, length: f64) -> Self {
        Load::Distributed {
            position,
            length,
            magnitude,
        }
    }

    /// Create an applied moment
    pub fn moment(magnitude: f64, position: f64) -> Self {
        Load::Moment { position, magnitude }
    }

    pub fn kind(&self) -> LoadKind {
        match self {
            Load::Point { .. } => LoadKind::Point,
            Load::Distributed { .. } => LoadKind::Distributed,
            Load::Moment { .. } => LoadKind::Moment,
        }
    }

    pub fn position(&self) -> f64 {
        match self {
            Load::Point { position, .. }
            | Load::Distributed { position, .. }
            | Load::Moment { position, .. } => *position,
        }
    }

    pub fn magnitude(&self) -> f64 {
        match self {
            Load::Point { magnitude, .. }
            | Load::Distributed { magnitude, .. }
            | Load::Moment { magnitude, .. } => *magnitude,
        }
    }

    /// Position of the far end of the load (equals `position` for concentrated loads)
    pub fn end_position(&self) -> f64 {
        match self {
            Load::Distributed { position, length, .. } => position + length,
            _ => self.position(),
        }
    }

    /// Same load with its magnitude multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        let mut load = *self;
        match &mut load {
            Load::Point { magnitude, .. }
            | Load::Distributed { magnitude, .. }
            | Load::Moment { magnitude, .. } => *magnitude *= factor,
        }
        load
    }

    /// Whether this load has a horizontal component once decomposed
    pub fn is_inclined(&self) -> bool {
        matches!(self, Load::Point { angle_deg, .. } if *angle_deg != 0.0)
    }

    /// Short description for load tables, e.g. "2m to 5m"
    pub fn location_label(&self) -> String {
        match self {
            Load::Distributed { position, length, .. } => {
                format!("{}m to {}m", position, position + length)
            }
            _ => format!("{}m", self.position()),
        }
    }
}

/// A load as held in a project
///
/// Loads are never edited in place. Hiding an entry keeps it in the project
/// but removes it from the calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadEntry {
    /// Unique identifier for this load (for row management)
    pub id: Uuid,

    pub load: Load,

    /// Only visible loads take part in the analysis
    #[serde(default = "default_visible")]
    pub visible: bool,

    /// User note/description for this load
    #[serde(default)]
    pub note: String,
}

fn default_visible() -> bool {
    true
}

impl LoadEntry {
    pub fn new(load: Load) -> Self {
        LoadEntry {
            id: Uuid::new_v4(),
            load,
            visible: true,
            note: String::new(),
        }
    }

    /// Mark the entry hidden and return self (builder pattern)
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// Loads of the visible entries, in entry order
pub fn visible_loads(entries: &[LoadEntry]) -> impl Iterator<Item = &Load> {
    entries.iter().filter(|e| e.visible).map(|e| &e.load)
}

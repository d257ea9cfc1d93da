//! # Results Summary
//!
//! Condenses a [`BeamResult`] into the figures shown next to the diagrams:
//! the peak of each force array (by absolute value, reported with its sign)
//! and the raw support reactions.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::{analyze_loads, AnalysisSettings};
//! use beam_core::loads::Load;
//! use beam_core::summary::ResultSummary;
//! use beam_core::supports::SupportPair;
//!
//! let analysis = analyze_loads(
//!     10.0,
//!     SupportPair::simply_supported(),
//!     &[Load::point(50.0, 4.0)],
//!     &AnalysisSettings::default(),
//! ).unwrap();
//!
//! let summary = ResultSummary::from_result(&analysis.result);
//! println!("Max moment {:.2} kNm at {:.2} m", summary.max_moment.value, summary.max_moment.position);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{BeamResult, Reactions};

/// Peak of a sampled array
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extremum {
    /// Signed value at the peak
    pub value: f64,
    /// Station where the peak occurs (m)
    pub position: f64,
}

/// First station of maximum absolute value; ties keep the earliest station.
///
/// Returns the default (0 at 0) for empty input.
pub fn find_extremum(values: &[f64], positions: &[f64]) -> Extremum {
    let mut best: Option<(usize, f64)> = None;
    for (i, v) in values.iter().enumerate() {
        let magnitude = v.abs();
        match best {
            Some((_, m)) if magnitude <= m => {}
            _ => best = Some((i, magnitude)),
        }
    }

    match best {
        Some((i, _)) => Extremum {
            value: values[i],
            position: positions.get(i).copied().unwrap_or_default(),
        },
        None => Extremum::default(),
    }
}

/// Summary of one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub max_shear: Extremum,
    pub max_moment: Extremum,
    pub max_axial: Extremum,
    pub reactions: Reactions,
}

impl ResultSummary {
    pub fn from_result(result: &BeamResult) -> Self {
        ResultSummary {
            max_shear: find_extremum(&result.shear_force, &result.positions),
            max_moment: find_extremum(&result.bending_moment, &result.positions),
            max_axial: find_extremum(&result.axial_force, &result.positions),
            reactions: result.reactions,
        }
    }
}

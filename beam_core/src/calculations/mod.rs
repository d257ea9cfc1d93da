//! # Beam Statics Pipeline
//!
//! Turns a beam length, a support pair and a list of loads into support
//! reactions and sampled internal-force diagrams. Data flows one way:
//!
//! ```text
//! loads ──► decompose ──► solve_reactions ──► profile ──► BeamResult
//! ```
//!
//! Every stage is a pure function of its inputs. A [`BeamResult`] is a
//! snapshot for one input and is recomputed wholesale when anything changes.
//!
//! ## Modules
//!
//! - [`reactions`] - End reactions from global equilibrium
//! - [`profile`] - Shear, moment and axial force sampling
//! - [`cache`] - Last-result memoisation keyed by input fingerprint
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::{analyze_loads, AnalysisSettings};
//! use beam_core::loads::Load;
//! use beam_core::supports::SupportPair;
//!
//! let analysis = analyze_loads(
//!     10.0,
//!     SupportPair::simply_supported(),
//!     &[Load::point(50.0, 4.0)],
//!     &AnalysisSettings::default(),
//! ).unwrap();
//!
//! assert_eq!(analysis.result.positions.len(), 101);
//! assert!(analysis.is_conclusive());
//! ```

pub mod cache;
pub mod profile;
pub mod reactions;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::loads::{decompose, visible_loads, Load, LoadEntry};
use crate::supports::{SupportClass, SupportPair};

pub use cache::AnalysisCache;
pub use reactions::{LoadTotals, Reactions, SupportReaction};

/// Default number of diagram intervals (101 samples)
pub const DEFAULT_STATIONS: usize = 100;

/// Tunable analysis parameters.
///
/// None of these change the physics; they control sampling density and how
/// advisory conditions are surfaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Number of intervals along the beam; results carry `stations + 1` samples
    pub stations: usize,

    /// Treat advisory conditions (unsupported supports, unresolved horizontal
    /// load) as errors instead of attaching them to the result
    pub strict: bool,

    /// Horizontal load totals at or below this magnitude count as zero
    pub equilibrium_tolerance: f64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            stations: DEFAULT_STATIONS,
            strict: false,
            equilibrium_tolerance: 1e-9,
        }
    }
}

impl AnalysisSettings {
    pub fn validate(&self) -> CalcResult<()> {
        if self.stations == 0 {
            return Err(CalcError::invalid_configuration(
                "stations",
                "0",
                "At least one interval is required",
            ));
        }
        if self.equilibrium_tolerance.is_nan() || self.equilibrium_tolerance < 0.0 {
            return Err(CalcError::invalid_configuration(
                "equilibrium_tolerance",
                self.equilibrium_tolerance.to_string(),
                "Tolerance must be zero or positive",
            ));
        }
        Ok(())
    }
}

/// Input parameters for a beam.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "length": 10.0,
///   "supports": { "left": "pinned", "right": "roller" },
///   "loads": [
///     { "id": "6f1c...", "load": { "type": "point", "position": 4.0, "magnitude": 50.0 } }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamInput {
    /// User label for this beam (e.g., "B-1")
    pub label: String,

    /// Beam length (m)
    pub length: f64,

    pub supports: SupportPair,

    /// All load entries, hidden ones included
    #[serde(default)]
    pub loads: Vec<LoadEntry>,
}

impl BeamInput {
    pub fn new(label: impl Into<String>, length: f64, supports: SupportPair) -> Self {
        BeamInput {
            label: label.into(),
            length,
            supports,
            loads: Vec::new(),
        }
    }

    /// Add a load entry and return self (builder pattern)
    pub fn with_load(mut self, load: Load) -> Self {
        self.loads.push(LoadEntry::new(load));
        self
    }

    /// Loads that take part in the analysis
    pub fn active_loads(&self) -> Vec<Load> {
        visible_loads(&self.loads).copied().collect()
    }
}

/// Sampled internal forces and support reactions for one beam input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamResult {
    /// Station positions from 0 to length inclusive, uniformly spaced
    pub positions: Vec<f64>,
    pub shear_force: Vec<f64>,
    /// Trapezoidal integral of `shear_force`
    pub bending_moment: Vec<f64>,
    pub axial_force: Vec<f64>,
    pub reactions: Reactions,
}

impl BeamResult {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Multiply every force entry and reaction by `factor`, keeping positions
    pub fn scaled(&self, factor: f64) -> BeamResult {
        let scale = |v: &Vec<f64>| v.iter().map(|x| x * factor).collect::<Vec<_>>();
        let scale_reaction = |r: SupportReaction| SupportReaction {
            vertical: r.vertical * factor,
            horizontal: r.horizontal * factor,
            moment: r.moment * factor,
        };
        BeamResult {
            positions: self.positions.clone(),
            shear_force: scale(&self.shear_force),
            bending_moment: scale(&self.bending_moment),
            axial_force: scale(&self.axial_force),
            reactions: Reactions {
                left: scale_reaction(self.reactions.left),
                right: scale_reaction(self.reactions.right),
            },
        }
    }
}

/// A complete result plus the conditions found while producing it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamAnalysis {
    pub result: BeamResult,
    pub support_class: SupportClass,
    pub totals: LoadTotals,
    /// Advisory conditions; empty when the result can be trusted as-is
    pub diagnostics: Vec<CalcError>,
}

impl BeamAnalysis {
    /// True when no advisory condition was raised
    pub fn is_conclusive(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Run the pipeline for a beam input, using only its visible loads.
pub fn analyze(input: &BeamInput, settings: &AnalysisSettings) -> CalcResult<BeamAnalysis> {
    analyze_loads(input.length, input.supports, &input.active_loads(), settings)
}

/// Run the pipeline for an explicit load list (already filtered to visible loads).
///
/// # Errors
/// - `InvalidConfiguration` for a non-positive length or bad settings
/// - In strict mode, the first advisory condition
pub fn analyze_loads(
    length: f64,
    supports: SupportPair,
    loads: &[Load],
    settings: &AnalysisSettings,
) -> CalcResult<BeamAnalysis> {
    settings.validate()?;

    let decomposed = decompose(loads);
    let solution = reactions::solve_reactions(length, &decomposed, supports, settings)?;

    if settings.strict {
        if let Some(first) = solution.diagnostics.first() {
            return Err(first.clone());
        }
    }

    let result = profile::profile(
        length,
        &decomposed,
        supports,
        solution.reactions,
        settings.stations,
    )?;

    log::debug!(
        "analyzed {} loads on {} beam, {} samples",
        loads.len(),
        supports,
        result.len()
    );

    Ok(BeamAnalysis {
        result,
        support_class: solution.support_class,
        totals: solution.totals,
        diagnostics: solution.diagnostics,
    })
}

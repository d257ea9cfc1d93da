//! Result memoisation
//!
//! Front ends recompute on every edit. [`AnalysisCache`] keeps the last
//! analysis together with a fingerprint of the input that produced it, so an
//! unchanged input returns the stored result and any change recomputes
//! everything.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use super::{analyze, AnalysisSettings, BeamAnalysis, BeamInput};
use crate::errors::{CalcError, CalcResult};
use crate::loads::{visible_loads, Load};

/// Hash of everything the pipeline reads: length, supports, visible loads, settings.
///
/// Floats are hashed by bit pattern, so `0.0` and `-0.0` are distinct inputs.
pub fn fingerprint(input: &BeamInput, settings: &AnalysisSettings) -> u64 {
    let mut hasher = DefaultHasher::new();
    input.length.to_bits().hash(&mut hasher);
    input.supports.hash(&mut hasher);
    for load in visible_loads(&input.loads) {
        hash_load(load, &mut hasher);
    }
    settings.stations.hash(&mut hasher);
    settings.strict.hash(&mut hasher);
    settings.equilibrium_tolerance.to_bits().hash(&mut hasher);
    hasher.finish()
}

fn hash_load(load: &Load, hasher: &mut DefaultHasher) {
    load.kind().hash(hasher);
    match *load {
        Load::Point {
            position,
            magnitude,
            angle_deg,
        } => {
            position.to_bits().hash(hasher);
            magnitude.to_bits().hash(hasher);
            angle_deg.to_bits().hash(hasher);
        }
        Load::Distributed {
            position,
            length,
            magnitude,
        } => {
            position.to_bits().hash(hasher);
            length.to_bits().hash(hasher);
            magnitude.to_bits().hash(hasher);
        }
        Load::Moment { position, magnitude } => {
            position.to_bits().hash(hasher);
            magnitude.to_bits().hash(hasher);
        }
    }
}

/// Holds the most recent successful analysis
#[derive(Debug, Clone, Default)]
pub struct AnalysisCache {
    last: Option<(u64, BeamAnalysis)>,
    hits: u64,
    misses: u64,
}

impl AnalysisCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached analysis when the input is unchanged, otherwise recompute.
    ///
    /// Failed analyses are not cached and clear the stored result.
    pub fn get_or_analyze(
        &mut self,
        input: &BeamInput,
        settings: &AnalysisSettings,
    ) -> CalcResult<&BeamAnalysis> {
        let key = fingerprint(input, settings);
        let fresh = !matches!(&self.last, Some((k, _)) if *k == key);

        if fresh {
            self.misses += 1;
            self.last = None;
            let analysis = analyze(input, settings)?;
            return Ok(&self.last.insert((key, analysis)).1);
        }

        self.hits += 1;
        self.last
            .as_ref()
            .map(|(_, analysis)| analysis)
            .ok_or_else(|| CalcError::Internal {
                message: "analysis cache hit without a stored result".to_string(),
            })
    }

    /// (hits, misses) since creation
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

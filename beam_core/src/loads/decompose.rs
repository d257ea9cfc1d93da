//! Load decomposition
//!
//! Resolves inclined point loads into a vertical and a horizontal component
//! before any statics is done. Downstream code only ever sees
//! [`DecomposedLoad`], where the direction of every force is explicit.

use serde::{Deserialize, Serialize};

use super::Load;

/// A load with its direction resolved
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DecomposedLoad {
    /// Transverse point force, positive downward. Drives shear and moment.
    Vertical { position: f64, magnitude: f64 },
    /// Longitudinal point force, positive rightward. Drives axial force only.
    Horizontal { position: f64, magnitude: f64 },
    /// Uniform line load, positive downward
    Distributed {
        position: f64,
        length: f64,
        magnitude: f64,
    },
    /// Concentrated couple
    Moment { position: f64, magnitude: f64 },
}

impl DecomposedLoad {
    pub fn position(&self) -> f64 {
        match self {
            DecomposedLoad::Vertical { position, .. }
            | DecomposedLoad::Horizontal { position, .. }
            | DecomposedLoad::Distributed { position, .. }
            | DecomposedLoad::Moment { position, .. } => *position,
        }
    }
}

/// Resolve a list of loads into direction-tagged components.
///
/// A point load of magnitude `M` at angle `θ` (degrees, 0 = straight down)
/// becomes a vertical load `M·cos θ` and a horizontal load `M·sin θ` at the
/// same position. Point loads with zero angle and all other loads pass
/// through unchanged. Any finite angle is accepted.
///
/// # Example
/// ```
/// use beam_core::loads::{decompose, DecomposedLoad, Load};
///
/// let parts = decompose([Load::angled_point(100.0, 2.0, 30.0)].iter());
/// assert_eq!(parts.len(), 2);
/// if let DecomposedLoad::Horizontal { magnitude, .. } = parts[1] {
///     assert!((magnitude - 50.0).abs() < 1e-9);
/// }
/// ```
pub fn decompose<'a>(loads: impl IntoIterator<Item = &'a Load>) -> Vec<DecomposedLoad> {
    let mut out = Vec::new();
    for load in loads {
        match *load {
            Load::Point {
                position,
                magnitude,
                angle_deg,
            } => {
                if angle_deg == 0.0 {
                    out.push(DecomposedLoad::Vertical { position, magnitude });
                } else {
                    let (sin, cos) = angle_deg.to_radians().sin_cos();
                    out.push(DecomposedLoad::Vertical {
                        position,
                        magnitude: magnitude * cos,
                    });
                    out.push(DecomposedLoad::Horizontal {
                        position,
                        magnitude: magnitude * sin,
                    });
                }
            }
            Load::Distributed {
                position,
                length,
                magnitude,
            } => out.push(DecomposedLoad::Distributed {
                position,
                length,
                magnitude,
            }),
            Load::Moment { position, magnitude } => {
                out.push(DecomposedLoad::Moment { position, magnitude })
            }
        }
    }
    out
}

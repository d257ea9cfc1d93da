//! Internal force profiles
//!
//! Samples shear, bending moment and axial force at evenly spaced stations by
//! superposing step contributions of the reactions and of each load, then
//! rebuilds the bending moment as the trapezoidal integral of shear.
//!
//! ## Sign Convention
//! - Shear: the upward left reaction adds, downward loads subtract
//! - Axial: left horizontal reaction and rightward loads add
//! - Every contribution applies strictly to the right of where it acts

use super::reactions::{validate_length, Reactions};
use super::BeamResult;
use crate::errors::{CalcError, CalcResult};
use crate::loads::DecomposedLoad;
use crate::supports::SupportPair;

/// `count + 1` evenly spaced positions from 0 to `length` inclusive.
///
/// The last station is exactly `length`. `count` must be at least 1.
fn stations(length: f64, count: usize) -> Vec<f64> {
    (0..=count)
        .map(|i| i as f64 / count as f64 * length)
        .collect()
}

/// Build the sampled force arrays for a solved beam.
///
/// Loads are evaluated as given; positions outside the beam are not checked.
///
/// # Errors
/// `InvalidConfiguration` for a zero `station_count` or a length that is not
/// positive and finite.
pub fn profile(
    length: f64,
    loads: &[DecomposedLoad],
    supports: SupportPair,
    reactions: Reactions,
    station_count: usize,
) -> CalcResult<BeamResult> {
    validate_length(length)?;
    if station_count == 0 {
        return Err(CalcError::invalid_configuration(
            "stations",
            "0",
            "At least one interval is required",
        ));
    }

    let positions = stations(length, station_count);
    let n = positions.len();

    let mut shear_force = vec![0.0; n];
    let mut bending_moment = vec![0.0; n];
    let mut axial_force = vec![0.0; n];

    let left_contributes = !supports.left_is_free_end();

    for (i, &x) in positions.iter().enumerate() {
        if left_contributes && x > 0.0 {
            shear_force[i] += reactions.left.vertical;
            axial_force[i] += reactions.left.horizontal;
            bending_moment[i] += reactions.left.moment;
        }

        // Right end acts beyond the last station, so this never fires for sampled positions
        if x > length {
            shear_force[i] -= reactions.right.vertical;
            axial_force[i] -= reactions.right.horizontal;
            bending_moment[i] -= reactions.right.moment;
        }

        for load in loads {
            apply_load(load, x, &mut shear_force[i], &mut bending_moment[i], &mut axial_force[i]);
        }
    }

    integrate_moment(&positions, &shear_force, &mut bending_moment);

    Ok(BeamResult {
        positions,
        shear_force,
        bending_moment,
        axial_force,
        reactions,
    })
}

/// Effect of one load at station `x`
fn apply_load(load: &DecomposedLoad, x: f64, shear: &mut f64, moment: &mut f64, axial: &mut f64) {
    match *load {
        DecomposedLoad::Vertical { position, magnitude } => {
            if x > position {
                *shear -= magnitude;
                *moment -= magnitude * (x - position);
            }
        }
        DecomposedLoad::Horizontal { position, magnitude } => {
            if x > position {
                *axial += magnitude;
            }
        }
        DecomposedLoad::Distributed {
            position,
            length,
            magnitude,
        } => {
            if x > position {
                let end = position + length;
                if x <= end {
                    let covered = x - position;
                    *shear -= magnitude * covered;
                    *moment -= magnitude * covered * covered / 2.0;
                } else {
                    let resultant = magnitude * length;
                    let centroid = position + length / 2.0;
                    *shear -= resultant;
                    *moment -= resultant * (x - centroid);
                }
            }
        }
        DecomposedLoad::Moment { position, magnitude } => {
            if x > position {
                *moment -= magnitude;
            }
        }
    }
}

/// Replace `moment[1..]` by the running trapezoidal integral of `shear`,
/// keeping `moment[0]` as the seed.
pub fn integrate_moment(positions: &[f64], shear: &[f64], moment: &mut [f64]) {
    for i in 1..positions.len() {
        let dx = positions[i] - positions[i - 1];
        moment[i] = moment[i - 1] + (shear[i] + shear[i - 1]) * dx / 2.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::reactions::SupportReaction;
    use crate::supports::SupportEnd;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_stations() {
        let xs = stations(7.3, 100);
        assert_eq!(xs.len(), 101);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[100], 7.3);
        assert!(xs.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_zero_stations_rejected() {
        let err = profile(5.0, &[], SupportPair::cantilever(), Reactions::default(), 0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIGURATION");

        let err = profile(0.0, &[], SupportPair::cantilever(), Reactions::default(), 10).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIGURATION");
    }

    #[test]
    fn test_single_interval() {
        let result = profile(5.0, &[], SupportPair::cantilever(), Reactions::default(), 1).unwrap();
        assert_eq!(result.positions, vec![0.0, 5.0]);
    }

    #[test]
    fn test_left_reaction_steps_in_after_origin() {
        let reactions = Reactions {
            left: SupportReaction {
                vertical: 5.0,
                horizontal: 2.0,
                moment: 0.0,
            },
            right: SupportReaction::default(),
        };
        let result = profile(4.0, &[], SupportPair::simply_supported(), reactions, 4).unwrap();
        assert_eq!(result.shear_force, vec![0.0, 5.0, 5.0, 5.0, 5.0]);
        assert_eq!(result.axial_force, vec![0.0, 2.0, 2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_free_left_end_ignores_left_reaction() {
        let reactions = Reactions {
            left: SupportReaction {
                vertical: 99.0,
                horizontal: 99.0,
                moment: 99.0,
            },
            right: SupportReaction::default(),
        };
        let supports = SupportPair::new(SupportEnd::Free, SupportEnd::Fixed);
        let result = profile(2.0, &[], supports, reactions, 2).unwrap();
        assert!(result.shear_force.iter().all(|&v| v == 0.0));
        assert!(result.axial_force.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_right_reaction_never_sampled() {
        let reactions = Reactions {
            left: SupportReaction::default(),
            right: SupportReaction {
                vertical: 10.0,
                horizontal: 10.0,
                moment: 10.0,
            },
        };
        let result = profile(3.0, &[], SupportPair::simply_supported(), reactions, 3).unwrap();
        assert!(result.shear_force.iter().all(|&v| v == 0.0));
        assert!(result.axial_force.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_horizontal_load_only_touches_axial() {
        let loads = [DecomposedLoad::Horizontal {
            position: 1.0,
            magnitude: 3.0,
        }];
        let result = profile(2.0, &loads, SupportPair::simply_supported(), Reactions::default(), 4).unwrap();
        assert_eq!(result.axial_force, vec![0.0, 0.0, 0.0, 3.0, 3.0]);
        assert!(result.shear_force.iter().all(|&v| v == 0.0));
        assert!(result.bending_moment.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_distributed_shear_ramp() {
        // w = 2 over [1, 3] on a 4 m beam, stations every 0.5 m
        let loads = [DecomposedLoad::Distributed {
            position: 1.0,
            length: 2.0,
            magnitude: 2.0,
        }];
        let result = profile(4.0, &loads, SupportPair::simply_supported(), Reactions::default(), 8).unwrap();
        let expected = [0.0, 0.0, 0.0, -1.0, -2.0, -3.0, -4.0, -4.0, -4.0];
        for (v, e) in result.shear_force.iter().zip(expected) {
            assert_abs_diff_eq!(*v, e, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_moment_load_discarded_by_integration() {
        // A couple only changes the superposed moment, which integration overwrites
        let loads = [DecomposedLoad::Moment {
            position: 1.0,
            magnitude: 8.0,
        }];
        let result = profile(2.0, &loads, SupportPair::simply_supported(), Reactions::default(), 4).unwrap();
        assert!(result.bending_moment.iter().all(|&m| m == 0.0));
    }

    #[test]
    fn test_integration_is_trapezoidal() {
        let positions = vec![0.0, 1.0, 3.0];
        let shear = vec![2.0, 4.0, -2.0];
        let mut moment = vec![1.0, 100.0, 100.0];
        integrate_moment(&positions, &shear, &mut moment);
        assert_eq!(moment, vec![1.0, 4.0, 6.0]);
    }
}

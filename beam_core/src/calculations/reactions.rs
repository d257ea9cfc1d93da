//! # Support Reactions
//!
//! Solves the two end reactions of a single-span beam from global
//! equilibrium, using one rule per support arrangement.
//!
//! ## Sign Convention
//! - Vertical reactions: positive upward (opposing positive, downward loads)
//! - Horizontal reactions: reported with the same sign as the horizontal load
//!   total they balance
//! - Moments: taken about the left end
//!
//! ## Limitations
//! Fixed-fixed beams are statically indeterminate. They are solved with an
//! equal split of the vertical load between the ends, not an elastic solution.
//!
//! ## Example
//! ```rust
//! use beam_core::calculations::reactions::solve_reactions;
//! use beam_core::calculations::AnalysisSettings;
//! use beam_core::loads::{decompose, Load};
//! use beam_core::supports::SupportPair;
//!
//! let loads = decompose([Load::point(50.0, 4.0)].iter());
//! let solution = solve_reactions(10.0, &loads, SupportPair::simply_supported(), &AnalysisSettings::default()).unwrap();
//! assert!((solution.reactions.left.vertical - 30.0).abs() < 1e-9);
//! assert!((solution.reactions.right.vertical - 20.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use super::AnalysisSettings;
use crate::errors::{CalcError, CalcResult};
use crate::loads::DecomposedLoad;
use crate::supports::{SupportClass, SupportEnd, SupportPair};

/// Force and moment exerted by one support
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SupportReaction {
    pub vertical: f64,
    pub horizontal: f64,
    pub moment: f64,
}

impl SupportReaction {
    pub fn is_zero(&self) -> bool {
        self.vertical == 0.0 && self.horizontal == 0.0 && self.moment == 0.0
    }
}

/// Reactions at both ends of the beam
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Reactions {
    pub left: SupportReaction,
    pub right: SupportReaction,
}

/// Load resultants used by every reaction rule
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadTotals {
    /// Vertical point loads plus distributed resultants
    pub vertical: f64,
    /// Horizontal point loads
    pub horizontal: f64,
    /// Moment of all loads about the left end, applied couples included as-is
    pub moment_about_left: f64,
}

impl LoadTotals {
    pub fn from_loads(loads: &[DecomposedLoad]) -> Self {
        let mut totals = LoadTotals::default();
        for load in loads {
            match *load {
                DecomposedLoad::Vertical { position, magnitude } => {
                    totals.vertical += magnitude;
                    totals.moment_about_left += magnitude * position;
                }
                DecomposedLoad::Horizontal { magnitude, .. } => {
                    totals.horizontal += magnitude;
                }
                DecomposedLoad::Distributed {
                    position,
                    length,
                    magnitude,
                } => {
                    // Resultant at the centroid of the loaded span
                    let resultant = magnitude * length;
                    totals.vertical += resultant;
                    totals.moment_about_left += resultant * (position + length / 2.0);
                }
                DecomposedLoad::Moment { magnitude, .. } => {
                    totals.moment_about_left += magnitude;
                }
            }
        }
        totals
    }
}

/// Solved reactions plus any advisory conditions found while solving
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionSolution {
    pub reactions: Reactions,
    pub support_class: SupportClass,
    pub totals: LoadTotals,
    /// `UnsupportedConfiguration` / `UnsatisfiedEquilibrium` entries
    pub diagnostics: Vec<CalcError>,
}

/// Reject lengths the reaction rules would divide by.
pub fn validate_length(length: f64) -> CalcResult<()> {
    if !length.is_finite() || length <= 0.0 {
        return Err(CalcError::invalid_configuration(
            "length",
            length.to_string(),
            "Beam length must be a positive, finite number",
        ));
    }
    Ok(())
}

/// Compute the end reactions for decomposed loads on a beam of `length`.
///
/// # Errors
/// `InvalidConfiguration` when `length` is not positive and finite. Support
/// pairs the rules do not cover are not an error here: the reactions stay at
/// zero and an `UnsupportedConfiguration` diagnostic is attached.
pub fn solve_reactions(
    length: f64,
    loads: &[DecomposedLoad],
    supports: SupportPair,
    settings: &AnalysisSettings,
) -> CalcResult<ReactionSolution> {
    validate_length(length)?;

    let totals = LoadTotals::from_loads(loads);
    let class = supports.classify();
    let mut left = SupportReaction::default();
    let mut right = SupportReaction::default();
    let mut diagnostics = Vec::new();

    log::debug!(
        "solving {} ({}) L={} V={} H={} M={}",
        supports,
        class.display_name(),
        length,
        totals.vertical,
        totals.horizontal,
        totals.moment_about_left
    );

    match class {
        SupportClass::CantileverFixedLeft => {
            left = SupportReaction {
                vertical: totals.vertical,
                horizontal: totals.horizontal,
                moment: totals.moment_about_left,
            };
        }
        SupportClass::CantileverFixedRight => {
            right = SupportReaction {
                vertical: totals.vertical,
                horizontal: totals.horizontal,
                moment: totals.moment_about_left - totals.vertical * length,
            };
        }
        SupportClass::FixedFixed => {
            right.vertical = totals.vertical / 2.0;
            left.vertical = totals.vertical - right.vertical;
            left.moment = (totals.moment_about_left - right.vertical * length) / 2.0;
            right.moment = totals.moment_about_left - left.moment - left.vertical * length;
            left.horizontal = totals.horizontal / 2.0;
            right.horizontal = totals.horizontal / 2.0;
        }
        SupportClass::FixedHinged => {
            right.vertical = totals.moment_about_left / length;
            left.vertical = totals.vertical - right.vertical;
            left.moment = totals.moment_about_left - right.vertical * length;
            left.horizontal = totals.horizontal;
        }
        SupportClass::HingedFixed => {
            left.vertical = (totals.moment_about_left - totals.vertical * length) / -length;
            right.vertical = totals.vertical - left.vertical;
            right.moment = left.vertical * length - totals.moment_about_left;
            right.horizontal = totals.horizontal;
        }
        SupportClass::SimplySupported => {
            right.vertical = totals.moment_about_left / length;
            left.vertical = totals.vertical - right.vertical;

            if supports.left == SupportEnd::Pinned {
                left.horizontal = totals.horizontal;
            } else if supports.right == SupportEnd::Pinned {
                right.horizontal = totals.horizontal;
            } else if totals.horizontal.abs() > settings.equilibrium_tolerance {
                log::warn!(
                    "roller/roller beam cannot resist horizontal load {}",
                    totals.horizontal
                );
                diagnostics.push(CalcError::UnsatisfiedEquilibrium {
                    unresolved: totals.horizontal,
                });
            }
        }
        SupportClass::Unsupported => {
            log::warn!("no reaction rule for supports {}", supports);
            diagnostics.push(CalcError::UnsupportedConfiguration {
                left: supports.left,
                right: supports.right,
            });
        }
    }

    Ok(ReactionSolution {
        reactions: Reactions { left, right },
        support_class: class,
        totals,
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::{decompose, Load};
    use approx::assert_relative_eq;

    fn solve(length: f64, loads: &[Load], left: SupportEnd, right: SupportEnd) -> ReactionSolution {
        let decomposed = decompose(loads.iter());
        solve_reactions(
            length,
            &decomposed,
            SupportPair::new(left, right),
            &AnalysisSettings::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_totals() {
        let loads = decompose(
            [
                Load::point(10.0, 2.0),
                Load::distributed(4.0, 1.0, 3.0),
                Load::moment(7.0, 9.0),
                Load::angled_point(20.0, 5.0, 90.0),
            ]
            .iter(),
        );
        let totals = LoadTotals::from_loads(&loads);

        // 10 + 4*3 + 20*cos(90) ~ 22
        assert_relative_eq!(totals.vertical, 22.0, epsilon = 1e-9);
        assert_relative_eq!(totals.horizontal, 20.0, epsilon = 1e-9);
        // 10*2 + 12*2.5 + 7 + ~0
        assert_relative_eq!(totals.moment_about_left, 57.0, epsilon = 1e-9);
    }

    #[test]
    fn test_simple_beam_point_load() {
        let s = solve(10.0, &[Load::point(50.0, 4.0)], SupportEnd::Pinned, SupportEnd::Roller);
        assert_eq!(s.support_class, SupportClass::SimplySupported);
        assert_relative_eq!(s.reactions.left.vertical, 30.0, epsilon = 1e-9);
        assert_relative_eq!(s.reactions.right.vertical, 20.0, epsilon = 1e-9);
        assert_eq!(s.reactions.left.moment, 0.0);
        assert!(s.diagnostics.is_empty());
    }

    #[test]
    fn test_cantilever_fixed_left() {
        let s = solve(5.0, &[Load::point(10.0, 5.0)], SupportEnd::Fixed, SupportEnd::Free);
        assert_relative_eq!(s.reactions.left.vertical, 10.0);
        assert_relative_eq!(s.reactions.left.moment, 50.0);
        assert!(s.reactions.right.is_zero());
    }

    #[test]
    fn test_cantilever_fixed_right() {
        // Load at the free (left) tip
        let s = solve(5.0, &[Load::point(10.0, 0.0)], SupportEnd::Free, SupportEnd::Fixed);
        assert!(s.reactions.left.is_zero());
        assert_relative_eq!(s.reactions.right.vertical, 10.0);
        assert_relative_eq!(s.reactions.right.moment, -50.0);
    }

    #[test]
    fn test_fixed_fixed_equal_split() {
        let s = solve(
            8.0,
            &[Load::distributed(2.0, 0.0, 8.0), Load::angled_point(10.0, 4.0, 90.0)],
            SupportEnd::Fixed,
            SupportEnd::Fixed,
        );
        let r = s.reactions;
        assert_relative_eq!(r.left.vertical, 8.0, epsilon = 1e-9);
        assert_relative_eq!(r.right.vertical, 8.0, epsilon = 1e-9);
        // M = 16*4 = 64, left.m = (64 - 8*8)/2 = 0
        assert_relative_eq!(r.left.moment, 0.0, epsilon = 1e-9);
        assert_relative_eq!(r.right.moment, 0.0, epsilon = 1e-9);
        assert_relative_eq!(r.left.horizontal, 5.0, epsilon = 1e-9);
        assert_relative_eq!(r.right.horizontal, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_propped_cantilevers() {
        let loads = [Load::point(12.0, 3.0), Load::angled_point(10.0, 6.0, 90.0)];

        let s = solve(6.0, &loads, SupportEnd::Fixed, SupportEnd::Roller);
        assert_eq!(s.support_class, SupportClass::FixedHinged);
        // M = 12*3 + ~0*6 = 36 -> right = 6, left = 6, left.m = 0
        assert_relative_eq!(s.reactions.right.vertical, 6.0, epsilon = 1e-9);
        assert_relative_eq!(s.reactions.left.vertical, 6.0, epsilon = 1e-9);
        assert_relative_eq!(s.reactions.left.horizontal, 10.0, epsilon = 1e-9);
        assert_eq!(s.reactions.right.horizontal, 0.0);

        let s = solve(6.0, &loads, SupportEnd::Pinned, SupportEnd::Fixed);
        assert_eq!(s.support_class, SupportClass::HingedFixed);
        // left = (36 - 12*6)/-6 = 6
        assert_relative_eq!(s.reactions.left.vertical, 6.0, epsilon = 1e-9);
        assert_relative_eq!(s.reactions.right.vertical, 6.0, epsilon = 1e-9);
        assert_relative_eq!(s.reactions.right.moment, 0.0, epsilon = 1e-9);
        assert_relative_eq!(s.reactions.right.horizontal, 10.0, epsilon = 1e-9);
        assert_eq!(s.reactions.left.horizontal, 0.0);
    }

    #[test]
    fn test_horizontal_goes_to_pinned_end() {
        let loads = [Load::angled_point(10.0, 5.0, 30.0)];

        let s = solve(10.0, &loads, SupportEnd::Roller, SupportEnd::Pinned);
        assert_eq!(s.reactions.left.horizontal, 0.0);
        assert_relative_eq!(s.reactions.right.horizontal, 5.0, epsilon = 1e-9);

        let s = solve(10.0, &loads, SupportEnd::Pinned, SupportEnd::Pinned);
        assert_relative_eq!(s.reactions.left.horizontal, 5.0, epsilon = 1e-9);
        assert_eq!(s.reactions.right.horizontal, 0.0);
    }

    #[test]
    fn test_roller_roller_reports_unsatisfied_equilibrium() {
        let s = solve(
            10.0,
            &[Load::angled_point(10.0, 5.0, 30.0)],
            SupportEnd::Roller,
            SupportEnd::Roller,
        );
        assert_eq!(s.reactions.left.horizontal, 0.0);
        assert_eq!(s.reactions.right.horizontal, 0.0);
        assert_eq!(s.diagnostics.len(), 1);
        match &s.diagnostics[0] {
            CalcError::UnsatisfiedEquilibrium { unresolved } => {
                assert_relative_eq!(*unresolved, 5.0, epsilon = 1e-9)
            }
            other => panic!("unexpected diagnostic {:?}", other),
        }
    }

    #[test]
    fn test_roller_roller_without_horizontal_is_clean() {
        let s = solve(10.0, &[Load::point(10.0, 5.0)], SupportEnd::Roller, SupportEnd::Roller);
        assert!(s.diagnostics.is_empty());
    }

    #[test]
    fn test_unsupported_pair_defaults_to_zero() {
        let s = solve(10.0, &[Load::point(10.0, 5.0)], SupportEnd::Pinned, SupportEnd::Free);
        assert_eq!(s.reactions, Reactions::default());
        assert_eq!(s.diagnostics[0].error_code(), "UNSUPPORTED_CONFIGURATION");
    }

    #[test]
    fn test_invalid_length() {
        let settings = AnalysisSettings::default();
        for length in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let err = solve_reactions(length, &[], SupportPair::default(), &settings).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_CONFIGURATION");
        }
    }
}

//! End-to-end checks of the analysis pipeline through the public API.

use approx::{assert_abs_diff_eq, assert_relative_eq};

use beam_core::loads::{decompose, DecomposedLoad};
use beam_core::{
    analyze, analyze_loads, AnalysisCache, AnalysisSettings, BeamInput, BeamProject, CalcError,
    Load, SupportEnd, SupportPair,
};

fn run(length: f64, supports: SupportPair, loads: &[Load]) -> beam_core::BeamAnalysis {
    analyze_loads(length, supports, loads, &AnalysisSettings::default()).unwrap()
}

fn mixed_loads() -> Vec<Load> {
    vec![
        Load::point(12.0, 1.5),
        Load::angled_point(20.0, 3.0, 40.0),
        Load::distributed(4.0, 2.0, 3.5),
        Load::moment(8.0, 6.0),
    ]
}

#[test]
fn stations_span_the_beam_for_every_support_pair() {
    for left in SupportEnd::ALL {
        for right in SupportEnd::ALL {
            let analysis = run(7.3, SupportPair::new(left, right), &mixed_loads());
            let positions = &analysis.result.positions;

            assert_eq!(positions.len(), 101);
            assert_eq!(positions[0], 0.0);
            assert_relative_eq!(positions[100], 7.3);
            assert!(positions.windows(2).all(|w| w[1] > w[0]));

            let result = &analysis.result;
            assert_eq!(result.shear_force.len(), 101);
            assert_eq!(result.bending_moment.len(), 101);
            assert_eq!(result.axial_force.len(), 101);
        }
    }
}

#[test]
fn cantilever_reaction_balances_all_loads() {
    let loads = vec![
        Load::point(12.0, 1.5),
        Load::angled_point(20.0, 3.0, 40.0),
        Load::distributed(4.0, 2.0, 3.5),
    ];
    let analysis = run(8.0, SupportPair::cantilever(), &loads);
    let left = analysis.result.reactions.left;

    let vertical_20 = 20.0 * 40f64.to_radians().cos();
    let expected_vertical = 12.0 + vertical_20 + 4.0 * 3.5;
    let expected_moment = 12.0 * 1.5 + vertical_20 * 3.0 + 4.0 * 3.5 * (2.0 + 1.75);

    assert_relative_eq!(left.vertical, expected_vertical, epsilon = 1e-9);
    assert_relative_eq!(left.moment, expected_moment, epsilon = 1e-9);
    assert!(analysis.result.reactions.right.is_zero());
}

#[test]
fn results_scale_linearly_with_load_magnitude() {
    let k = 2.5;
    let loads = mixed_loads();
    let scaled_loads: Vec<Load> = loads.iter().map(|l| l.scaled(k)).collect();

    for supports in [
        SupportPair::simply_supported(),
        SupportPair::cantilever(),
        SupportPair::new(SupportEnd::Fixed, SupportEnd::Fixed),
        SupportPair::new(SupportEnd::Roller, SupportEnd::Fixed),
    ] {
        let base = run(9.0, supports, &loads).result.scaled(k);
        let scaled = run(9.0, supports, &scaled_loads).result;

        for (a, b) in [
            (&base.shear_force, &scaled.shear_force),
            (&base.bending_moment, &scaled.bending_moment),
            (&base.axial_force, &scaled.axial_force),
        ] {
            for (x, y) in a.iter().zip(b.iter()) {
                assert_abs_diff_eq!(x, y, epsilon = 1e-8);
            }
        }

        for (x, y) in [
            (base.reactions.left, scaled.reactions.left),
            (base.reactions.right, scaled.reactions.right),
        ] {
            assert_abs_diff_eq!(x.vertical, y.vertical, epsilon = 1e-8);
            assert_abs_diff_eq!(x.horizontal, y.horizontal, epsilon = 1e-8);
            assert_abs_diff_eq!(x.moment, y.moment, epsilon = 1e-8);
        }
    }
}

#[test]
fn bending_moment_is_trapezoidal_integral_of_shear() {
    let analysis = run(10.0, SupportPair::default(), &mixed_loads());
    let r = &analysis.result;

    for i in 1..r.len() {
        let dx = r.positions[i] - r.positions[i - 1];
        let expected = r.bending_moment[i - 1] + (r.shear_force[i] + r.shear_force[i - 1]) * dx / 2.0;
        assert_eq!(r.bending_moment[i], expected);
    }
}

#[test]
fn angled_point_load_splits_into_components() {
    let parts = decompose(&[Load::angled_point(100.0, 2.0, 30.0)]);
    assert_eq!(parts.len(), 2);

    match (parts[0], parts[1]) {
        (
            DecomposedLoad::Vertical { position: pv, magnitude: v },
            DecomposedLoad::Horizontal { position: ph, magnitude: h },
        ) => {
            assert_abs_diff_eq!(v, 86.60, epsilon = 0.005);
            assert_abs_diff_eq!(h, 50.00, epsilon = 1e-9);
            assert_eq!(pv, 2.0);
            assert_eq!(ph, 2.0);
        }
        other => panic!("unexpected decomposition: {:?}", other),
    }
}

#[test]
fn simple_beam_point_load() {
    let analysis = run(
        10.0,
        SupportPair::new(SupportEnd::Pinned, SupportEnd::Roller),
        &[Load::point(50.0, 4.0)],
    );
    let reactions = analysis.result.reactions;

    assert_relative_eq!(reactions.left.vertical, 30.0, epsilon = 1e-9);
    assert_relative_eq!(reactions.right.vertical, 20.0, epsilon = 1e-9);
    assert!(analysis.is_conclusive());
}

#[test]
fn cantilever_tip_load() {
    let analysis = run(5.0, SupportPair::cantilever(), &[Load::point(10.0, 5.0)]);
    let reactions = analysis.result.reactions;

    assert_relative_eq!(reactions.left.vertical, 10.0, epsilon = 1e-9);
    assert_relative_eq!(reactions.left.moment, 50.0, epsilon = 1e-9);
    assert_eq!(reactions.right.vertical, 0.0);
    assert_eq!(reactions.right.horizontal, 0.0);
    assert_eq!(reactions.right.moment, 0.0);
}

#[test]
fn roller_roller_cannot_resist_horizontal_load() {
    let supports = SupportPair::new(SupportEnd::Roller, SupportEnd::Roller);
    let loads = [Load::angled_point(100.0, 5.0, 30.0)];
    let analysis = run(10.0, supports, &loads);
    let reactions = analysis.result.reactions;

    assert_eq!(reactions.left.horizontal, 0.0);
    assert_eq!(reactions.right.horizontal, 0.0);
    assert_eq!(analysis.diagnostics.len(), 1);
    match &analysis.diagnostics[0] {
        CalcError::UnsatisfiedEquilibrium { unresolved } => {
            assert_abs_diff_eq!(*unresolved, 50.0, epsilon = 1e-9);
        }
        other => panic!("unexpected diagnostic: {:?}", other),
    }

    let strict = AnalysisSettings {
        strict: true,
        ..Default::default()
    };
    let err = analyze_loads(10.0, supports, &loads, &strict).unwrap_err();
    assert_eq!(err.error_code(), "UNSATISFIED_EQUILIBRIUM");
}

#[test]
fn unsupported_pair_is_flagged() {
    let supports = SupportPair::new(SupportEnd::Pinned, SupportEnd::Free);
    let analysis = run(6.0, supports, &[Load::point(10.0, 3.0)]);

    assert!(analysis.result.reactions.left.is_zero());
    assert!(analysis.result.reactions.right.is_zero());
    assert!(!analysis.is_conclusive());
    assert!(analysis.diagnostics[0].is_advisory());
}

#[test]
fn non_positive_length_is_rejected() {
    for length in [0.0, -3.0, f64::NAN] {
        let err = analyze_loads(length, SupportPair::default(), &[], &AnalysisSettings::default())
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIGURATION");
    }
}

#[test]
fn project_edits_flow_through_cache() {
    let mut project = BeamProject::new("Test");
    project.set_supports(SupportPair::simply_supported());
    let id = project.add_load(Load::point(50.0, 4.0)).unwrap();

    let mut cache = AnalysisCache::new();
    let first = cache
        .get_or_analyze(&project.beam, &project.settings)
        .unwrap()
        .clone();
    assert_eq!(first, analyze(&project.beam, &project.settings).unwrap());

    project.toggle_visibility(&id);
    let unloaded = cache
        .get_or_analyze(&project.beam, &project.settings)
        .unwrap();
    assert_eq!(unloaded.result.reactions.left.vertical, 0.0);
    assert_eq!(cache.stats(), (0, 2));
}

#[test]
fn analysis_serializes_to_json() {
    let input = BeamInput::new("B-1", 10.0, SupportPair::simply_supported())
        .with_load(Load::distributed(5.0, 0.0, 10.0));
    let analysis = analyze(&input, &AnalysisSettings::default()).unwrap();

    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["result"]["positions"].as_array().map(|a| a.len()), Some(101));
    assert_eq!(json["support_class"], "SimplySupported");
}

#[test]
fn engine_evaluates_loads_off_the_beam_as_given() {
    let loads = [
        Load::point(50.0, 12.0),
        Load::point(5.0, -2.0),
        Load::distributed(3.0, 4.0, -2.0),
        Load::moment(7.0, 15.0),
    ];

    for supports in [SupportPair::simply_supported(), SupportPair::cantilever()] {
        let analysis = run(10.0, supports, &loads);
        let r = &analysis.result;

        assert_eq!(r.len(), 101);
        for values in [&r.shear_force, &r.bending_moment, &r.axial_force] {
            assert!(values.iter().all(|v| v.is_finite()));
        }
        for reaction in [r.reactions.left, r.reactions.right] {
            assert!(reaction.vertical.is_finite());
            assert!(reaction.moment.is_finite());
        }
    }

    // 50 kN beyond the right support lifts the left end
    let simple = run(10.0, SupportPair::simply_supported(), &[Load::point(50.0, 12.0)]);
    assert_relative_eq!(simple.result.reactions.right.vertical, 60.0, epsilon = 1e-9);
    assert_relative_eq!(simple.result.reactions.left.vertical, -10.0, epsilon = 1e-9);
}

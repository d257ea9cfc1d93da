//! # Formula Reference Table
//!
//! Descriptive formulas shown next to results so the user can see which
//! textbook relations apply to the current beam. Selection depends only on
//! the support arrangement and on which kinds of load are present; it never
//! looks at computed values.
//!
//! ## Usage
//!
//! ```rust
//! use beam_core::formulas::{relevant_formulas, Formula};
//! use beam_core::loads::Load;
//! use beam_core::supports::SupportPair;
//!
//! let formulas = relevant_formulas(SupportPair::simply_supported(), &[Load::point(10.0, 2.0)]);
//! assert!(formulas.contains(&Formula::SimpleBeam));
//! assert!(formulas.contains(&Formula::PointLoad));
//!
//! println!("{}", Formula::SimpleBeam.metadata().formula);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::loads::{Load, LoadKind};
use crate::supports::{SupportClass, SupportPair};

/// Definition of a symbol used in a formula.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variable {
    pub symbol: &'static str,
    pub meaning: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, meaning: &'static str) -> Self {
        Self { symbol, meaning }
    }
}

/// Display data for one formula
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormulaMetadata {
    pub name: &'static str,
    /// Plain-text formula
    pub formula: &'static str,
    pub description: &'static str,
    pub variables: Vec<Variable>,
}

/// Every formula in the reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formula {
    /// ΣF_y = 0, ΣF_x = 0, ΣM = 0
    Equilibrium,
    /// V(x) = ∫w(x)dx
    ShearForce,
    /// M(x) = ∫V(x)dx
    BendingMoment,
    /// Shear jump under a concentrated load
    PointLoad,
    /// Gradual shear change under a line load
    DistributedLoad,
    /// Moment jump under a concentrated couple
    MomentLoad,
    /// R_A = P, M_A = P·L
    Cantilever,
    /// R_A = P(L-a)/L, R_B = Pa/L
    SimpleBeam,
    /// M_A = Pab²/L², M_B = Pa²b/L²
    FixedBeam,
    /// N(x) = ∫q_x(x)dx
    AxialForce,
}

/// All formulas in display order
pub const ALL_FORMULAS: [Formula; 10] = [
    Formula::Equilibrium,
    Formula::ShearForce,
    Formula::BendingMoment,
    Formula::PointLoad,
    Formula::DistributedLoad,
    Formula::MomentLoad,
    Formula::Cantilever,
    Formula::SimpleBeam,
    Formula::FixedBeam,
    Formula::AxialForce,
];

// Indexed by discriminant; ALL_FORMULAS follows declaration order
static CATALOG: Lazy<Vec<FormulaMetadata>> =
    Lazy::new(|| ALL_FORMULAS.iter().map(|f| build_metadata(*f)).collect());

impl Formula {
    /// Metadata for this formula, built once per process
    pub fn metadata(&self) -> &'static FormulaMetadata {
        &CATALOG[*self as usize]
    }
}

fn build_metadata(formula: Formula) -> FormulaMetadata {
    match formula {
        Formula::Equilibrium => FormulaMetadata {
            name: "Equilibrium Equations",
            formula: "ΣF_y = 0, ΣF_x = 0, ΣM = 0",
            description: "Static equilibrium requires that the sum of forces and moments equal zero",
            variables: vec![
                Variable::new("ΣF_y", "Sum of vertical forces"),
                Variable::new("ΣF_x", "Sum of horizontal forces"),
                Variable::new("ΣM", "Sum of moments about a point"),
            ],
        },
        Formula::ShearForce => FormulaMetadata {
            name: "Shear Force",
            formula: "V(x) = ∫w(x)dx",
            description: "Shear force is the integral of the distributed load function",
            variables: vec![
                Variable::new("V(x)", "Shear force at position x"),
                Variable::new("w(x)", "Distributed load function"),
            ],
        },
        Formula::BendingMoment => FormulaMetadata {
            name: "Bending Moment",
            formula: "M(x) = ∫V(x)dx",
            description: "Bending moment is the integral of the shear force function",
            variables: vec![
                Variable::new("M(x)", "Bending moment at position x"),
                Variable::new("V(x)", "Shear force at position x"),
            ],
        },
        Formula::PointLoad => FormulaMetadata {
            name: "Point Load Effect",
            formula: "V(x) = P · H(x - a)",
            description: "A point load P at position a causes a jump in the shear force diagram",
            variables: vec![
                Variable::new("P", "Magnitude of point load"),
                Variable::new("a", "Position of point load"),
                Variable::new("H(x - a)", "Heaviside step function (0 if x < a, 1 if x ≥ a)"),
            ],
        },
        Formula::DistributedLoad => FormulaMetadata {
            name: "Distributed Load Effect",
            formula: "V(x) = ∫_a^b w(x) dx",
            description: "A distributed load w(x) from position a to b affects the shear force gradually",
            variables: vec![
                Variable::new("w(x)", "Distributed load function"),
                Variable::new("a", "Start position of distributed load"),
                Variable::new("b", "End position of distributed load"),
            ],
        },
        Formula::MomentLoad => FormulaMetadata {
            name: "Moment Load Effect",
            formula: "M(x) = M₀ · H(x - a)",
            description: "A concentrated moment M₀ at position a causes a jump in the moment diagram",
            variables: vec![
                Variable::new("M₀", "Magnitude of applied moment"),
                Variable::new("a", "Position of applied moment"),
                Variable::new("H(x - a)", "Heaviside step function (0 if x < a, 1 if x ≥ a)"),
            ],
        },
        Formula::Cantilever => FormulaMetadata {
            name: "Cantilever Beam",
            formula: "R_A = P, M_A = P·L",
            description: "For a cantilever with fixed support at A and a point load P at the end",
            variables: vec![
                Variable::new("R_A", "Reaction force at support A"),
                Variable::new("M_A", "Moment reaction at support A"),
                Variable::new("P", "Applied load"),
                Variable::new("L", "Distance from support to load"),
            ],
        },
        Formula::SimpleBeam => FormulaMetadata {
            name: "Simple Beam (Pinned-Roller)",
            formula: "R_A = P·(L-a)/L, R_B = P·a/L",
            description: "For a simple beam with supports at A and B, and a point load P at distance a from A",
            variables: vec![
                Variable::new("R_A", "Reaction at support A"),
                Variable::new("R_B", "Reaction at support B"),
                Variable::new("P", "Applied load"),
                Variable::new("a", "Distance from A to load P"),
                Variable::new("L", "Total beam length"),
            ],
        },
        Formula::FixedBeam => FormulaMetadata {
            name: "Fixed-Fixed Beam",
            formula: "M_A = P·a·b²/L², M_B = P·a²·b/L²",
            description: "For a fixed-fixed beam with a point load P at distance a from the left end",
            variables: vec![
                Variable::new("M_A", "Moment at left support"),
                Variable::new("M_B", "Moment at right support"),
                Variable::new("P", "Applied load"),
                Variable::new("a", "Distance from left support to load"),
                Variable::new("b", "Distance from load to right support (L-a)"),
                Variable::new("L", "Total beam length"),
            ],
        },
        Formula::AxialForce => FormulaMetadata {
            name: "Axial Force",
            formula: "N(x) = ∫q_x(x)dx",
            description: "Axial force is the integral of the horizontal distributed load function",
            variables: vec![
                Variable::new("N(x)", "Axial force at position x"),
                Variable::new("q_x(x)", "Horizontal distributed load function"),
            ],
        },
    }
}

/// Formulas that apply to a beam with these supports and loads.
///
/// Always starts with equilibrium, shear and bending moment, then adds one
/// support formula (cantilever, simple beam or fixed beam), one per load kind
/// present, and the axial formula when a point load leans to the right.
pub fn relevant_formulas(supports: SupportPair, loads: &[Load]) -> Vec<Formula> {
    let mut formulas = vec![Formula::Equilibrium, Formula::ShearForce, Formula::BendingMoment];

    match supports.classify() {
        SupportClass::CantileverFixedLeft | SupportClass::CantileverFixedRight => {
            formulas.push(Formula::Cantilever)
        }
        SupportClass::SimplySupported => formulas.push(Formula::SimpleBeam),
        SupportClass::FixedFixed => formulas.push(Formula::FixedBeam),
        _ => {}
    }

    let has = |kind: LoadKind| loads.iter().any(|l| l.kind() == kind);
    if has(LoadKind::Point) {
        formulas.push(Formula::PointLoad);
    }
    if has(LoadKind::Distributed) {
        formulas.push(Formula::DistributedLoad);
    }
    if has(LoadKind::Moment) {
        formulas.push(Formula::MomentLoad);
    }

    let has_horizontal = loads
        .iter()
        .any(|l| matches!(l, Load::Point { angle_deg, .. } if *angle_deg > 0.0));
    if has_horizontal {
        formulas.push(Formula::AxialForce);
    }

    formulas
}

/// Render the whole table as Markdown.
pub fn generate_formulas_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str(
        r#"# Beam Formula Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-formulas`

## Sign Conventions

| Quantity | Positive Direction |
|----------|-------------------|
| Point / distributed loads | Downward |
| Horizontal load components | Rightward |
| Vertical reactions | Upward |

---

"#,
    );

    for formula in ALL_FORMULAS {
        let meta = formula.metadata();
        output.push_str(&format!("## {}\n\n", meta.name));
        output.push_str(&format!("{}\n\n", meta.description));
        output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula));

        if !meta.variables.is_empty() {
            output.push_str("| Symbol | Meaning |\n");
            output.push_str("|--------|---------|\n");
            for var in &meta.variables {
                output.push_str(&format!("| {} | {} |\n", var.symbol, var.meaning));
            }
            output.push('\n');
        }
    }

    output
}

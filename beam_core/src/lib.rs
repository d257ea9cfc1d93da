//! # beam_core - Beam Statics Engine
//!
//! `beam_core` analyzes a single straight beam under static loads. Given a
//! length, a pair of end supports and a list of loads, it resolves the support
//! reactions from global equilibrium and samples shear force, bending moment
//! and axial force at evenly spaced stations along the beam. All inputs and
//! outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: The analysis is a pure function of its input
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{analyze_loads, AnalysisSettings, Load, SupportPair};
//!
//! let analysis = analyze_loads(
//!     6.0,
//!     SupportPair::cantilever(),
//!     &[Load::distributed(5.0, 0.0, 6.0)],
//!     &AnalysisSettings::default(),
//! ).unwrap();
//!
//! // Fixed end carries the whole 30 kN
//! assert!((analysis.result.reactions.left.vertical - 30.0).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`supports`] - End conditions and support-class recognition
//! - [`loads`] - Load definitions, load entries and decomposition
//! - [`calculations`] - Reaction solver and internal force profiler
//! - [`summary`] - Peak values for display
//! - [`formulas`] - Reference formulas relevant to a configuration
//! - [`project`] - Editable project container
//! - [`errors`] - Structured error types
//! - [`file_io`] - Atomic project saves

pub mod calculations;
pub mod errors;
pub mod file_io;
pub mod formulas;
pub mod loads;
pub mod project;
pub mod summary;
pub mod supports;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    analyze, analyze_loads, AnalysisCache, AnalysisSettings, BeamAnalysis, BeamInput, BeamResult,
    Reactions, SupportReaction,
};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_project, save_project};
pub use loads::{Load, LoadEntry, LoadKind};
pub use project::{BeamProject, ProjectMetadata};
pub use summary::ResultSummary;
pub use supports::{SupportClass, SupportEnd, SupportPair};

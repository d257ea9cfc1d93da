//! # Project Data Structures
//!
//! The `BeamProject` struct is the root container for one beam: its geometry,
//! supports, load list and analysis settings. Projects serialize to `.beam`
//! files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! BeamProject
//! ├── meta: ProjectMetadata (version, author, timestamps)
//! ├── settings: AnalysisSettings (stations, strict mode)
//! └── beam: BeamInput (length, supports, load entries)
//! ```
//!
//! Edits go through methods that validate the change and bump the modified
//! timestamp. Results are never stored: [`BeamProject::analyze`] recomputes
//! from the current state.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::loads::Load;
//! use beam_core::project::BeamProject;
//! use beam_core::supports::{SupportEnd, SupportPair};
//!
//! let mut project = BeamProject::new("Jane Engineer");
//! project.set_supports(SupportPair::new(SupportEnd::Pinned, SupportEnd::Roller));
//! let id = project.add_load(Load::point(50.0, 4.0)).unwrap();
//!
//! let analysis = project.analyze().unwrap();
//! assert!((analysis.result.reactions.right.vertical - 20.0).abs() < 1e-9);
//!
//! project.remove_load(&id);
//! assert!(project.beam.loads.is_empty());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::reactions::validate_length;
use crate::calculations::{analyze, AnalysisSettings, BeamAnalysis, BeamInput};
use crate::errors::{CalcError, CalcResult};
use crate::loads::{Load, LoadEntry};
use crate::supports::SupportPair;

/// Current schema version for .beam files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Beam length for a new project (m)
pub const DEFAULT_LENGTH: f64 = 10.0;

/// Root project container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamProject {
    pub meta: ProjectMetadata,

    #[serde(default)]
    pub settings: AnalysisSettings,

    pub beam: BeamInput,
}

/// Project metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version the project was created with
    pub version: String,

    /// Project identifier
    pub id: Uuid,

    /// Name of the person who created the project
    pub author: String,

    pub created: DateTime<Utc>,

    pub modified: DateTime<Utc>,
}

impl BeamProject {
    /// Create a project with a 10 m fixed/roller beam and no loads.
    pub fn new(author: impl Into<String>) -> Self {
        let now = Utc::now();
        BeamProject {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                id: Uuid::new_v4(),
                author: author.into(),
                created: now,
                modified: now,
            },
            settings: AnalysisSettings::default(),
            beam: BeamInput::new("Beam", DEFAULT_LENGTH, SupportPair::default()),
        }
    }

    /// Add a load, returning the id of its entry.
    ///
    /// # Errors
    /// `InvalidConfiguration` when the load does not lie on the beam or a
    /// distributed load has a non-positive length.
    pub fn add_load(&mut self, load: Load) -> CalcResult<Uuid> {
        self.check_load(&load)?;
        let entry = LoadEntry::new(load);
        let id = entry.id;
        self.beam.loads.push(entry);
        self.touch();
        Ok(id)
    }

    /// Remove a load by id. Returns the removed entry if it existed.
    pub fn remove_load(&mut self, id: &Uuid) -> Option<LoadEntry> {
        let index = self.beam.loads.iter().position(|e| e.id == *id)?;
        self.remove_load_at(index)
    }

    /// Remove a load by its position in the list.
    pub fn remove_load_at(&mut self, index: usize) -> Option<LoadEntry> {
        if index >= self.beam.loads.len() {
            return None;
        }
        let entry = self.beam.loads.remove(index);
        self.touch();
        Some(entry)
    }

    /// Flip whether a load takes part in the analysis.
    ///
    /// Returns the new visibility, or `None` if no entry has this id.
    pub fn toggle_visibility(&mut self, id: &Uuid) -> Option<bool> {
        let entry = self.beam.loads.iter_mut().find(|e| e.id == *id)?;
        entry.visible = !entry.visible;
        let visible = entry.visible;
        self.touch();
        Some(visible)
    }

    pub fn set_supports(&mut self, supports: SupportPair) {
        self.beam.supports = supports;
        self.touch();
    }

    /// Change the beam length. Existing loads are kept as they are.
    pub fn set_length(&mut self, length: f64) -> CalcResult<()> {
        validate_length(length)?;
        self.beam.length = length;
        self.touch();
        Ok(())
    }

    /// Run the analysis on the current state.
    pub fn analyze(&self) -> CalcResult<BeamAnalysis> {
        analyze(&self.beam, &self.settings)
    }

    /// Check the whole project with the same rules the editing methods apply
    /// to each change: positive length, valid settings, every load on the beam.
    ///
    /// Hidden loads are checked too.
    pub fn validate(&self) -> CalcResult<()> {
        validate_length(self.beam.length)?;
        self.settings.validate()?;
        for entry in &self.beam.loads {
            self.check_load(&entry.load)?;
        }
        Ok(())
    }

    /// Update the modified timestamp
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    fn check_load(&self, load: &Load) -> CalcResult<()> {
        let length = self.beam.length;
        let position = load.position();

        if !position.is_finite() || position < 0.0 || position > length {
            return Err(CalcError::invalid_configuration(
                "position",
                position.to_string(),
                format!("Position must lie on the beam (0 to {}m)", length),
            ));
        }
        if !load.magnitude().is_finite() {
            return Err(CalcError::invalid_configuration(
                "magnitude",
                load.magnitude().to_string(),
                "Magnitude must be a finite number",
            ));
        }
        if let Load::Distributed { length: span, .. } = *load {
            if span.is_nan() || span <= 0.0 {
                return Err(CalcError::invalid_configuration(
                    "length",
                    span.to_string(),
                    "Distributed load length must be positive",
                ));
            }
            if load.end_position() > length {
                return Err(CalcError::invalid_configuration(
                    "length",
                    span.to_string(),
                    format!("Distributed load runs past the beam end ({}m)", length),
                ));
            }
        }
        if let Load::Point { angle_deg, .. } = *load {
            if !angle_deg.is_finite() {
                return Err(CalcError::invalid_configuration(
                    "angle_deg",
                    angle_deg.to_string(),
                    "Angle must be a finite number",
                ));
            }
        }
        Ok(())
    }
}

impl Default for BeamProject {
    fn default() -> Self {
        BeamProject::new("Unknown")
    }
}

//! # Project Files
//!
//! A `.beam` file is a JSON document wrapping a [`BeamProject`] with a format
//! tag and the schema version of the writer:
//!
//! ```json
//! { "format": "beam-statics", "schema": "0.1.0", "project": { "meta": ..., "beam": ... } }
//! ```
//!
//! The header is read before the project body, so a file from an incompatible
//! schema is reported as a version mismatch rather than a parse failure.
//! Both directions run [`BeamProject::validate`]: a beam with a non-positive
//! length, a load off the beam or unusable analysis settings is neither
//! written nor accepted.
//!
//! Saves go to a hidden sibling file that is synced and then renamed over the
//! target, so an interrupted save leaves the previous file intact.
//!
//! ## Example
//!
//! ```rust,no_run
//! use beam_core::file_io::{load_project, save_project};
//! use beam_core::loads::Load;
//! use beam_core::project::BeamProject;
//! use std::path::Path;
//!
//! let mut project = BeamProject::new("Engineer");
//! project.add_load(Load::point(50.0, 4.0)).unwrap();
//!
//! let path = Path::new("girder.beam");
//! save_project(&project, path).unwrap();
//! assert_eq!(load_project(path).unwrap(), project);
//! ```

use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use semver::{Version, VersionReq};
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::project::{BeamProject, SCHEMA_VERSION};

/// File extension for project files
pub const PROJECT_EXTENSION: &str = "beam";

/// Value of the `format` tag in every project file
pub const FILE_FORMAT: &str = "beam-statics";

#[derive(Serialize)]
struct BeamFileOut<'a> {
    format: &'a str,
    schema: &'a str,
    project: &'a BeamProject,
}

#[derive(Deserialize)]
struct BeamFileIn {
    format: String,
    schema: String,
    project: serde_json::Value,
}

/// Write a project to `path`, replacing any existing file.
///
/// # Errors
/// - `InvalidConfiguration` if the project fails validation (nothing is written)
/// - `FileError` if the file cannot be written
pub fn save_project(project: &BeamProject, path: &Path) -> CalcResult<()> {
    project.validate()?;

    let document = BeamFileOut {
        format: FILE_FORMAT,
        schema: SCHEMA_VERSION,
        project,
    };
    let bytes = serde_json::to_vec_pretty(&document)?;
    replace_file(path, &bytes)?;

    log::info!(
        "saved '{}' ({} loads, {} m) to {}",
        project.beam.label,
        project.beam.loads.len(),
        project.beam.length,
        path.display()
    );
    Ok(())
}

/// Read and validate a project from `path`.
///
/// # Errors
/// - `FileError` if the file cannot be opened
/// - `SerializationError` for malformed JSON or a file that is not a beam project
/// - `VersionMismatch` if the file was written by an incompatible schema
/// - `InvalidConfiguration` if the beam it describes fails validation
pub fn load_project(path: &Path) -> CalcResult<BeamProject> {
    let file = File::open(path)
        .map_err(|e| CalcError::file_error("open", path.display().to_string(), e.to_string()))?;

    let parse_error = |e: serde_json::Error| CalcError::SerializationError {
        reason: format!("{}: {}", path.display(), e),
    };

    let document: BeamFileIn =
        serde_json::from_reader(BufReader::new(file)).map_err(parse_error)?;

    if document.format != FILE_FORMAT {
        return Err(CalcError::SerializationError {
            reason: format!(
                "{}: format '{}' is not a beam project",
                path.display(),
                document.format
            ),
        });
    }
    check_schema(&document.schema)?;

    let project: BeamProject = serde_json::from_value(document.project).map_err(parse_error)?;
    if let Err(e) = project.validate() {
        log::warn!("rejected {}: {}", path.display(), e);
        return Err(e);
    }

    log::info!(
        "loaded '{}' ({} loads, {} m) from {}",
        project.beam.label,
        project.beam.loads.len(),
        project.beam.length,
        path.display()
    );
    Ok(project)
}

/// Accept any schema that is semver-compatible with the one this build writes.
fn check_schema(found: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: found.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let supported =
        VersionReq::parse(&format!("^{}", SCHEMA_VERSION)).map_err(|e| CalcError::Internal {
            message: format!("bad schema version constant: {}", e),
        })?;
    let version = Version::parse(found).map_err(|_| mismatch())?;

    if supported.matches(&version) {
        Ok(())
    } else {
        Err(mismatch())
    }
}

/// Hidden sibling of `path` used while a save is in progress
fn staging_path(path: &Path) -> CalcResult<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        CalcError::file_error("save", path.display().to_string(), "path has no file name")
    })?;
    Ok(path.with_file_name(format!(".{}.saving", name.to_string_lossy())))
}

fn replace_file(path: &Path, bytes: &[u8]) -> CalcResult<()> {
    let staging = staging_path(path)?;

    let write = || -> io::Result<()> {
        let mut file = File::create(&staging)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        fs::rename(&staging, path)
    };

    write().map_err(|e| {
        let _ = fs::remove_file(&staging);
        CalcError::file_error("save", path.display().to_string(), e.to_string())
    })
}

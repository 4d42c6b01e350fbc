// ABOUTME: Loads extra exercise definitions from YAML or JSON and merges them into a catalog
// ABOUTME: Definitions are validated like built-ins; rejected ones are reported and never offered
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use std::path::Path;

use formcoach_core::models::ExerciseConfig;
use formcoach_core::ConfigError;
use formcoach_intelligence::ExerciseCatalog;
use serde::Deserialize;
use tracing::info;

use super::document::read_document;
use crate::errors::AppResult;

/// Either a bare list of definitions or `{ exercises: [...] }`
#[derive(Deserialize)]
#[serde(untagged)]
enum DefinitionFile {
    List(Vec<ExerciseConfig>),
    Wrapped { exercises: Vec<ExerciseConfig> },
}

/// Read exercise definitions without validating them
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn load_exercise_definitions(path: &Path) -> AppResult<Vec<ExerciseConfig>> {
    let configs = match read_document(path)? {
        DefinitionFile::List(configs) | DefinitionFile::Wrapped { exercises: configs } => configs,
    };
    Ok(configs)
}

/// Merge the definitions in `path` into `catalog`.
///
/// A definition whose name is already present replaces it. Definitions that
/// fail validation are returned and left out; a broken override keeps the
/// existing entry.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed. Validation
/// failures are not errors here; they come back in the returned list.
pub fn extend_catalog(catalog: &mut ExerciseCatalog, path: &Path) -> AppResult<Vec<ConfigError>> {
    let configs = load_exercise_definitions(path)?;
    let offered = configs.len();
    let rejected = catalog.extend(configs);
    info!(
        path = %path.display(),
        offered,
        accepted = offered - rejected.len(),
        "Loaded exercise definitions"
    );
    Ok(rejected)
}

// ABOUTME: Builds the catalog the CLI works with from the built-ins and an optional definitions file
// ABOUTME: Rejected definitions are reported but do not stop the command
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use std::path::Path;

use formcoach::config::extend_catalog;
use formcoach::errors::AppResult;
use formcoach_intelligence::ExerciseCatalog;

/// Built-in catalog, extended from `extra` when given
pub fn load_catalog(extra: Option<&Path>) -> AppResult<ExerciseCatalog> {
    let mut catalog = ExerciseCatalog::builtin()?;
    if let Some(path) = extra {
        for error in extend_catalog(&mut catalog, path)? {
            eprintln!("Skipping definition: {error}");
        }
    }
    Ok(catalog)
}

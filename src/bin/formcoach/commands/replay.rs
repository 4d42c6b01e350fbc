// ABOUTME: Frame replay command for the formcoach CLI
// ABOUTME: Counts reps in each recorded file in parallel and prints one line per file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use std::path::PathBuf;

use formcoach::errors::{AppError, AppResult};
use formcoach::replay::replay_files;
use formcoach_intelligence::ExerciseCatalog;
use tracing::error;

/// Replay `files` as independent attempts at `exercise`
pub fn run(catalog: &ExerciseCatalog, exercise: &str, files: &[PathBuf]) -> AppResult<()> {
    let entry = catalog.get(exercise)?;
    let mut failures = 0_usize;

    for (path, result) in replay_files(&entry, files) {
        match result {
            Ok(summary) => println!(
                "{}: {} reps, stage {}, \"{}\" ({} of {} frames skipped)",
                path.display(),
                summary.reps,
                summary.final_stage,
                summary.final_feedback,
                summary.skipped,
                summary.frames
            ),
            Err(e) => {
                error!(path = %path.display(), error = %e, "Replay failed");
                println!("{}: failed: {e}", path.display());
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(AppError::invalid_input(format!(
            "{failures} of {} files could not be replayed",
            files.len()
        )));
    }
    Ok(())
}

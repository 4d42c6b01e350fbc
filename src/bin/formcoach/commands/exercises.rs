// ABOUTME: Catalog inspection commands for the formcoach CLI
// ABOUTME: Lists exercise names with their families and prints single definitions as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use formcoach::errors::AppResult;
use formcoach_intelligence::ExerciseCatalog;

/// Print every exercise with its recognition family
pub fn list(catalog: &ExerciseCatalog) {
    println!("{:<28} FAMILY", "EXERCISE");
    println!("{}", "=".repeat(48));
    for entry in catalog.iter() {
        println!("{:<28} {}", entry.name(), entry.exercise_type());
    }
    println!("\n{} exercises", catalog.len());
}

/// Print one definition as pretty JSON
pub fn show(catalog: &ExerciseCatalog, name: &str) -> AppResult<()> {
    let entry = catalog.get(name)?;
    println!("{}", serde_json::to_string_pretty(entry.config())?);
    Ok(())
}

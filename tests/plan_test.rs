// ABOUTME: Integration tests for workout plans loaded from YAML and JSON files
// ABOUTME: Day ordering, display titles, per-day lookup, and validation against the catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::write_file;
use formcoach::errors::ErrorCode;
use formcoach::plan::{display_title, WorkoutPlan};
use formcoach_intelligence::ExerciseCatalog;
use tempfile::TempDir;

const PLAN_YAML: &str = "
days:
  Day_10: [PLANK]
  Day_2: [LUNGE, WALL SIT]
  Day_1: [SQUAT, PUSH-UP, BURPEES]
";

#[test]
fn test_days_sort_numerically() {
    let dir = TempDir::new().unwrap();
    let plan = WorkoutPlan::load(&write_file(dir.path(), "plan.yaml", PLAN_YAML)).unwrap();

    assert_eq!(plan.ordered_days(), vec!["Day_1", "Day_2", "Day_10"]);
    let titles: Vec<String> = plan.ordered_days().into_iter().map(display_title).collect();
    assert_eq!(titles, vec!["Day 01", "Day 02", "Day 10"]);
}

#[test]
fn test_exercises_keep_plan_order() {
    let dir = TempDir::new().unwrap();
    let plan = WorkoutPlan::load(&write_file(dir.path(), "plan.yml", PLAN_YAML)).unwrap();
    assert_eq!(
        plan.exercises_for("Day_1").unwrap(),
        ["SQUAT", "PUSH-UP", "BURPEES"]
    );

    let error = plan.exercises_for("Day_3").unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_json_plan_matches_yaml_plan() {
    let dir = TempDir::new().unwrap();
    let yaml = WorkoutPlan::load(&write_file(dir.path(), "plan.yaml", PLAN_YAML)).unwrap();
    let json = WorkoutPlan::load(&write_file(
        dir.path(),
        "plan.json",
        r#"{"days": {"Day_1": ["SQUAT", "PUSH-UP", "BURPEES"],
                     "Day_2": ["LUNGE", "WALL SIT"],
                     "Day_10": ["PLANK"]}}"#,
    ))
    .unwrap();
    assert_eq!(yaml, json);
}

#[test]
fn test_validate_against_catalog() {
    let catalog = ExerciseCatalog::builtin().unwrap();
    let dir = TempDir::new().unwrap();
    let plan = WorkoutPlan::load(&write_file(dir.path(), "plan.yaml", PLAN_YAML)).unwrap();
    plan.validate(&catalog).unwrap();

    let typo = WorkoutPlan::load(&write_file(
        dir.path(),
        "typo.yaml",
        "days:\n  Day_1: [SQUAT]\n  Day_2: [LUNGES]\n",
    ))
    .unwrap();
    let error = typo.validate(&catalog).unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert!(error.message.contains("LUNGES"));
    assert!(error.message.contains("Day_2"));
}

#[test]
fn test_plan_without_days_is_rejected() {
    let dir = TempDir::new().unwrap();
    let error =
        WorkoutPlan::load(&write_file(dir.path(), "plan.json", r#"{"weeks": {}}"#)).unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[test]
fn test_entries_follow_program_order() {
    let dir = TempDir::new().unwrap();
    let plan = WorkoutPlan::load(&write_file(dir.path(), "plan.yaml", PLAN_YAML)).unwrap();

    let entries = plan.ordered_entries();
    let days: Vec<&str> = entries.iter().map(|(day, _)| *day).collect();
    assert_eq!(days, vec!["Day_1", "Day_2", "Day_10"]);
    assert_eq!(entries[1].1, ["LUNGE", "WALL SIT"]);
    assert_eq!(entries[2].1, ["PLANK"]);
}

#[test]
fn test_validate_reports_earliest_program_day() {
    let catalog = ExerciseCatalog::builtin().unwrap();
    let dir = TempDir::new().unwrap();
    let plan = WorkoutPlan::load(&write_file(
        dir.path(),
        "plan.yaml",
        "days:\n  Day_10: [JOG]\n  Day_2: [SPRINT]\n",
    ))
    .unwrap();

    let error = plan.validate(&catalog).unwrap_err();
    assert!(error.message.contains("SPRINT"));
    assert!(error.message.contains("Day_2"));
}

#[test]
fn test_missing_plan_file_is_missing_config() {
    let dir = TempDir::new().unwrap();
    let error = WorkoutPlan::load(&dir.path().join("week.yaml")).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigMissing);
    assert!(error.message.ends_with("week.yaml does not exist"));
}

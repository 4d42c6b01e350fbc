// ABOUTME: Integration tests for the exercise catalog: built-in contents, validation, and extension
// ABOUTME: Checks that invalid definitions are never offered and overrides replace by name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::HashSet;

use common::legs;
use formcoach_core::models::{ExerciseConfig, ExerciseType, JointId, RecognitionRule};
use formcoach_core::ConfigError;
use formcoach_intelligence::{Classifier, ExerciseCatalog, SessionState};

#[test]
fn test_builtin_covers_every_family() {
    let catalog = ExerciseCatalog::builtin().unwrap();
    let families: HashSet<_> = catalog.iter().map(|entry| entry.exercise_type()).collect();
    for family in ExerciseType::ALL {
        assert!(families.contains(&family), "no built-in {family} exercise");
    }
}

#[test]
fn test_builtin_names_are_unique_and_ordered() {
    let catalog = ExerciseCatalog::builtin().unwrap();
    let names: Vec<_> = catalog.names().collect();
    assert_eq!(names.first(), Some(&"SQUAT"));
    assert_eq!(names.last(), Some(&"T-POSE HOLD"));
    let unique: HashSet<_> = names.iter().collect();
    assert_eq!(unique.len(), names.len());
}

#[test]
fn test_squat_definition() {
    let catalog = ExerciseCatalog::builtin().unwrap();
    let squat = catalog.get("SQUAT").unwrap();
    let RecognitionRule::RepBased(rule) = squat.rule() else {
        panic!("SQUAT should be rep-based");
    };
    assert!((rule.up_threshold - 165.0).abs() < f64::EPSILON);
    assert!((rule.down_threshold - 90.0).abs() < f64::EPSILON);
    assert!(!rule.inverted);
    assert_eq!(rule.feedback.down, "Good Squat!");
    assert!(squat.gate().is_none());
}

#[test]
fn test_row_requires_gate_joints() {
    let catalog = ExerciseCatalog::builtin().unwrap();
    let row = catalog.get("BENT OVER ROW").unwrap();
    let gate = row.gate().unwrap();
    assert!((gate.max_angle - 110.0).abs() < f64::EPSILON);
    assert!(row.required_joints().contains(&JointId::LeftHip));
    assert!(row.required_joints().contains(&JointId::LeftKnee));
}

#[test]
fn test_from_configs_rejects_incomplete_definition() {
    let broken = ExerciseConfig::new("HOLD", ExerciseType::Timed)
        .landmarks(&[JointId::LeftShoulder, JointId::LeftHip, JointId::LeftAnkle])
        .feedback(&[("correct", "Good"), ("incorrect", "Bad")]);
    let error = ExerciseCatalog::from_configs([broken]).unwrap_err();
    assert_eq!(
        error,
        ConfigError::MissingFormAngle {
            exercise: "HOLD".to_owned()
        }
    );
    assert_eq!(error.exercise(), "HOLD");
}

#[test]
fn test_extend_overrides_by_name() {
    let mut catalog = ExerciseCatalog::builtin().unwrap();
    let deeper = catalog.get("SQUAT").unwrap().config().clone();
    let deeper = ExerciseConfig {
        down_threshold: Some(70.0),
        ..deeper
    };

    let rejected = catalog.extend([deeper]);
    assert!(rejected.is_empty());
    assert_eq!(catalog.len(), 50);

    let mut state = SessionState::new(catalog.get("SQUAT").unwrap());
    Classifier::process(&mut state, &legs(170.0));
    assert_eq!(Classifier::process(&mut state, &legs(80.0)).rep_count, 0);
    assert_eq!(Classifier::process(&mut state, &legs(65.0)).rep_count, 1);
}

#[test]
fn test_extend_never_offers_invalid_definition() {
    let mut catalog = ExerciseCatalog::builtin().unwrap();
    let custom = ExerciseConfig::new("SIDE SHUFFLE", ExerciseType::PlankJacks)
        .thresholds(&[("out", 0.5)])
        .feedback(&[("out", "Out"), ("in", "In")]);
    let valid = ExerciseConfig::new("WIDE JACKS", ExerciseType::PlankJacks)
        .thresholds(&[("out", 0.5), ("in", 0.25)])
        .feedback(&[("out", "Out"), ("in", "In")]);

    let rejected = catalog.extend([custom, valid]);
    assert_eq!(rejected.len(), 1);
    assert!(matches!(
        &rejected[0],
        ConfigError::MissingThresholdKey { key: "in", .. }
    ));
    assert!(!catalog.contains("SIDE SHUFFLE"));
    assert!(catalog.contains("WIDE JACKS"));
    assert_eq!(catalog.len(), 51);
}

#[test]
fn test_invalid_override_keeps_original() {
    let mut catalog = ExerciseCatalog::builtin().unwrap();
    let broken = ExerciseConfig::rep_based(
        "SQUAT",
        &[JointId::LeftHip, JointId::LeftKnee, JointId::LeftAnkle],
        90.0,
        165.0,
    );
    let rejected = catalog.extend([broken]);
    assert_eq!(rejected.len(), 1);
    let squat = catalog.get("SQUAT").unwrap();
    assert_eq!(squat.required_joints().len(), 6);
}

#[test]
fn test_definitions_load_from_json() {
    let json = r#"[
        {
            "name": "KNEE DRIVE",
            "exercise_type": "knee_height",
            "feedback": {"up": "Drive!", "down": "Lower"}
        },
        {
            "name": "HALF SQUAT",
            "landmarks": ["left_hip", "left_knee", "left_ankle"],
            "up_threshold": 160.0,
            "down_threshold": 120.0,
            "feedback": {
                "up": "Ready",
                "down": "Good",
                "transition_up": "Stand",
                "transition_down": "Lower"
            }
        }
    ]"#;
    let configs: Vec<ExerciseConfig> = serde_json::from_str(json).unwrap();
    let catalog = ExerciseCatalog::from_configs(configs).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog.get("HALF SQUAT").unwrap().exercise_type(),
        ExerciseType::RepBased
    );
    assert_eq!(
        catalog.get("KNEE DRIVE").unwrap().required_joints().len(),
        4
    );
}

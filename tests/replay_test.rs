// ABOUTME: Integration tests for JSON Lines frame replay
// ABOUTME: Parsing rules, no-pose lines, timestamp ordering, and parallel independent replays
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::io::Cursor;

use common::{init_test_logging, squat_stream, to_jsonl, write_file};
use formcoach::errors::ErrorCode;
use formcoach::replay::{parse_frames, read_frames, replay_files, replay_frames};
use formcoach_core::models::JointId;
use formcoach_intelligence::ExerciseCatalog;
use tempfile::TempDir;

#[test]
fn test_parse_skips_blank_lines_and_reads_empty_pose() {
    let text = "\n{\"t_ms\": 0, \"joints\": {}}\n\n{\"t_ms\": 33, \"joints\": \
                {\"left_hip\": {\"x\": 0.41, \"y\": 0.55}}}\n";
    let frames = parse_frames(Cursor::new(text), "inline").unwrap();

    assert_eq!(frames.len(), 2);
    assert!(frames[0].joints.is_empty());
    let hip = frames[1].joints.get(JointId::LeftHip).unwrap();
    assert!((hip.x - 0.41).abs() < f64::EPSILON);
}

#[test]
fn test_parse_rejects_time_going_backwards() {
    let text = "{\"t_ms\": 100, \"joints\": {}}\n{\"t_ms\": 99, \"joints\": {}}\n";
    let error = parse_frames(Cursor::new(text), "take.jsonl").unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(error.message.starts_with("take.jsonl:2:"));
}

#[test]
fn test_parse_reports_malformed_line() {
    let text = "{\"t_ms\": 0, \"joints\": {}}\n{\"t_ms\": 1, \"joints\": {\"elbow\": {}}}\n";
    let error = parse_frames(Cursor::new(text), "take.jsonl").unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(error.message.starts_with("take.jsonl:2:"));
}

#[test]
fn test_replay_counts_and_reports_skips() {
    let catalog = ExerciseCatalog::builtin().unwrap();
    let mut frames = squat_stream(3, 0, 100);
    frames[0].joints.remove(JointId::RightKnee);

    let summary = replay_frames(catalog.get("SQUAT").unwrap(), &frames);
    assert_eq!(summary.frames, 6);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.reps, 3);
    assert_eq!(summary.final_stage, "down");
    assert_eq!(summary.final_feedback, "Good Squat!");
}

#[test]
fn test_files_replay_independently_in_order() {
    init_test_logging();
    let catalog = ExerciseCatalog::builtin().unwrap();
    let dir = TempDir::new().unwrap();
    let paths = vec![
        write_file(dir.path(), "a.jsonl", &to_jsonl(&squat_stream(2, 0, 100))),
        dir.path().join("missing.jsonl"),
        write_file(dir.path(), "c.jsonl", &to_jsonl(&squat_stream(5, 0, 100))),
    ];

    let results = replay_files(&catalog.get("SQUAT").unwrap(), &paths);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].0, paths[0]);
    assert_eq!(results[0].1.as_ref().unwrap().reps, 2);
    assert_eq!(
        results[1].1.as_ref().unwrap_err().code,
        ErrorCode::ResourceNotFound
    );
    assert_eq!(results[2].1.as_ref().unwrap().reps, 5);
}

#[test]
fn test_written_stream_reads_back() {
    let dir = TempDir::new().unwrap();
    let frames = squat_stream(1, 500, 40);
    let path = write_file(dir.path(), "take.jsonl", &to_jsonl(&frames));
    assert_eq!(read_frames(&path).unwrap(), frames);
}

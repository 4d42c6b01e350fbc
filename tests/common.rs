// ABOUTME: Shared test utilities for FormCoach integration tests
// ABOUTME: Quiet logging setup, squat frame builders, and temp-file writers for replays and plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `formcoach`

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

use formcoach::replay::ReplayFrame;
use formcoach_core::models::{Frame, JointId, Point2D};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default keeps test output quiet
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

const SEGMENT: f64 = 0.2;

fn leg(frame: Frame, [hip, knee, ankle]: [JointId; 3], x: f64, degrees: f64) -> Frame {
    let knee_at = Point2D::new(x, 0.6);
    let (sin, cos) = degrees.to_radians().sin_cos();
    // hip straight above the knee; ankle rotated `degrees` from that ray
    frame
        .with_joint(hip, Point2D::new(x, 0.6 - SEGMENT))
        .with_joint(knee, knee_at)
        .with_joint(
            ankle,
            Point2D::new(SEGMENT.mul_add(sin, x), SEGMENT.mul_add(-cos, 0.6)),
        )
}

/// Both legs at the same hip-knee-ankle angle
pub fn legs(degrees: f64) -> Frame {
    let frame = leg(
        Frame::new(),
        [JointId::LeftHip, JointId::LeftKnee, JointId::LeftAnkle],
        0.4,
        degrees,
    );
    leg(
        frame,
        [JointId::RightHip, JointId::RightKnee, JointId::RightAnkle],
        0.6,
        degrees,
    )
}

/// `reps` full squats, two frames each, `step_ms` apart from `start_ms`
pub fn squat_stream(reps: usize, start_ms: u64, step_ms: u64) -> Vec<ReplayFrame> {
    [170.0, 85.0]
        .iter()
        .cycle()
        .take(reps * 2)
        .zip(0_u64..)
        .map(|(degrees, i)| ReplayFrame {
            t_ms: start_ms + i * step_ms,
            joints: legs(*degrees),
        })
        .collect()
}

/// JSON Lines text for `frames`
pub fn to_jsonl(frames: &[ReplayFrame]) -> String {
    frames
        .iter()
        .map(|frame| serde_json::to_string(frame).unwrap() + "\n")
        .collect()
}

/// Write `contents` to `dir/name`
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

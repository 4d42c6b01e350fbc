// ABOUTME: Benchmark fixtures generating full-body landmark frames that move through reps
// ABOUTME: Deterministic so runs are comparable; every joint the catalog reads is present
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

//! Synthetic pose streams.
//!
//! Each frame bends every limb to the same angle, sweeping between 60 and
//! 180 degrees over `FRAMES_PER_REP` frames, while the shoulder line rocks
//! and the hands and feet spread and close. That is enough for every
//! recognition family to see rep-like motion.

use std::f64::consts::TAU;

use formcoach_core::models::{Frame, JointId, Point2D};

/// Frames in one simulated rep
pub const FRAMES_PER_REP: usize = 30;

const SEGMENT: f64 = 0.15;

/// Predefined stream lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum FrameBatchSize {
    /// One second at 30 fps
    Second,
    /// One 30-second attempt at 30 fps
    Attempt,
}

impl FrameBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Second => 30,
            Self::Attempt => 900,
        }
    }
}

fn rotate(vertex: Point2D, from: Point2D, degrees: f64) -> Point2D {
    let (dx, dy) = (from.x - vertex.x, from.y - vertex.y);
    let length = dx.hypot(dy);
    let (sin, cos) = degrees.to_radians().sin_cos();
    Point2D::new(
        SEGMENT.mul_add((dx * cos - dy * sin) / length, vertex.x),
        SEGMENT.mul_add((dx * sin + dy * cos) / length, vertex.y),
    )
}

#[allow(clippy::cast_precision_loss)]
fn pose(index: usize) -> Frame {
    let phase = (index % FRAMES_PER_REP) as f64 / FRAMES_PER_REP as f64;
    let wave = (phase * TAU).cos();
    let bend = 60.0_f64.mul_add(wave, 120.0);
    let spread = 0.1_f64.mul_add(wave, 0.2);
    let tilt = 15.0 * (phase * TAU).sin();

    let left_shoulder = Point2D::new(0.4, 0.3);
    let right_shoulder = rotate(left_shoulder, Point2D::new(1.0, 0.3), tilt);
    let left_hip = Point2D::new(0.42, 0.55);
    let right_hip = Point2D::new(0.58, 0.55);
    let left_knee = Point2D::new(0.5 - spread / 2.0, 0.7);
    let right_knee = Point2D::new(0.5 + spread / 2.0, 0.7);
    let left_elbow = Point2D::new(0.35, 0.42);
    let right_elbow = Point2D::new(0.65, 0.42);
    let left_ankle = rotate(left_knee, left_hip, bend);
    let right_ankle = rotate(right_knee, right_hip, -bend);

    Frame::new()
        .with_joint(JointId::Nose, Point2D::new(0.5, 0.2))
        .with_joint(JointId::LeftShoulder, left_shoulder)
        .with_joint(JointId::RightShoulder, right_shoulder)
        .with_joint(JointId::LeftElbow, left_elbow)
        .with_joint(JointId::RightElbow, right_elbow)
        .with_joint(JointId::LeftWrist, rotate(left_elbow, left_shoulder, bend))
        .with_joint(
            JointId::RightWrist,
            rotate(right_elbow, right_shoulder, -bend),
        )
        .with_joint(JointId::LeftHip, left_hip)
        .with_joint(JointId::RightHip, right_hip)
        .with_joint(JointId::LeftKnee, left_knee)
        .with_joint(JointId::RightKnee, right_knee)
        .with_joint(JointId::LeftAnkle, left_ankle)
        .with_joint(JointId::RightAnkle, right_ankle)
        .with_joint(JointId::LeftHeel, rotate(left_ankle, left_knee, 100.0))
        .with_joint(JointId::RightHeel, rotate(right_ankle, right_knee, -100.0))
}

/// `count` consecutive frames of the synthetic workout
#[must_use]
pub fn generate_frames(count: usize) -> Vec<Frame> {
    (0..count).map(pose).collect()
}

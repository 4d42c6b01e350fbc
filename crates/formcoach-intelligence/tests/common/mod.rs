// ABOUTME: Shared frame-building helpers for classifier and catalog integration tests
// ABOUTME: Places joints so that chosen interior angles and distances come out exactly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]

use std::sync::Arc;

use formcoach_core::models::{Frame, JointId, Point2D};
use formcoach_intelligence::{CatalogEntry, ExerciseCatalog, SessionState};

/// Segment length used when placing joints
pub const SEGMENT: f64 = 0.2;

/// Point at `SEGMENT` from `vertex`, rotated `degrees` away from the ray `vertex -> from`
pub fn endpoint(vertex: Point2D, from: Point2D, degrees: f64) -> Point2D {
    let (dx, dy) = (from.x - vertex.x, from.y - vertex.y);
    let length = dx.hypot(dy);
    let (ux, uy) = (dx / length, dy / length);
    let (sin, cos) = degrees.to_radians().sin_cos();
    Point2D::new(
        SEGMENT.mul_add(ux * cos - uy * sin, vertex.x),
        SEGMENT.mul_add(ux * sin + uy * cos, vertex.y),
    )
}

/// Set a triplet so its interior angle at the middle joint is `degrees`.
///
/// The first joint sits straight above the vertex.
pub fn with_angle(frame: Frame, [a, vertex, c]: [JointId; 3], at: Point2D, degrees: f64) -> Frame {
    let top = Point2D::new(at.x, at.y - SEGMENT);
    frame
        .with_joint(a, top)
        .with_joint(vertex, at)
        .with_joint(c, endpoint(at, top, degrees))
}

/// Both legs bent to the same hip-knee-ankle angle
pub fn legs(degrees: f64) -> Frame {
    let frame = with_angle(
        Frame::new(),
        [JointId::LeftHip, JointId::LeftKnee, JointId::LeftAnkle],
        Point2D::new(0.4, 0.6),
        degrees,
    );
    with_angle(
        frame,
        [JointId::RightHip, JointId::RightKnee, JointId::RightAnkle],
        Point2D::new(0.6, 0.6),
        degrees,
    )
}

/// Both arms bent to the same shoulder-elbow-wrist angle
pub fn arms(degrees: f64) -> Frame {
    arms_on(Frame::new(), degrees)
}

pub fn arms_on(frame: Frame, degrees: f64) -> Frame {
    let frame = with_angle(
        frame,
        [
            JointId::LeftShoulder,
            JointId::LeftElbow,
            JointId::LeftWrist,
        ],
        Point2D::new(0.4, 0.5),
        degrees,
    );
    with_angle(
        frame,
        [
            JointId::RightShoulder,
            JointId::RightElbow,
            JointId::RightWrist,
        ],
        Point2D::new(0.6, 0.5),
        degrees,
    )
}

/// Burpee pose with the given squat, plank, and push-up angles
pub fn burpee(squat: f64, plank: f64, pushup: f64) -> Frame {
    let hip = Point2D::new(0.5, 0.4);
    let knee = Point2D::new(0.5, 0.4 + SEGMENT);
    let ankle = endpoint(knee, hip, squat);
    let shoulder = endpoint(hip, ankle, plank);
    let elbow = Point2D::new(shoulder.x, shoulder.y + SEGMENT);
    let wrist = endpoint(elbow, shoulder, pushup);
    Frame::new()
        .with_joint(JointId::LeftHip, hip)
        .with_joint(JointId::LeftKnee, knee)
        .with_joint(JointId::LeftAnkle, ankle)
        .with_joint(JointId::LeftShoulder, shoulder)
        .with_joint(JointId::LeftElbow, elbow)
        .with_joint(JointId::LeftWrist, wrist)
}

/// Two joints `distance` apart horizontally
pub fn pair(a: JointId, b: JointId, distance: f64) -> Frame {
    Frame::new()
        .with_joint(a, Point2D::new(0.3, 0.5))
        .with_joint(b, Point2D::new(0.3 + distance, 0.5))
}

/// Shoulders tilted by `degrees` (positive lowers the right shoulder)
pub fn shoulders(degrees: f64) -> Frame {
    let left = Point2D::new(0.4, 0.4);
    let (sin, cos) = degrees.to_radians().sin_cos();
    Frame::new()
        .with_joint(JointId::LeftShoulder, left)
        .with_joint(
            JointId::RightShoulder,
            Point2D::new(SEGMENT.mul_add(cos, left.x), SEGMENT.mul_add(sin, left.y)),
        )
}

pub fn entry(name: &str) -> Arc<CatalogEntry> {
    ExerciseCatalog::builtin().unwrap().get(name).unwrap()
}

pub fn fresh_state(name: &str) -> SessionState {
    SessionState::new(entry(name))
}

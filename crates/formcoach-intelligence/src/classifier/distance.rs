// ABOUTME: Distance-band families: bird-dog, mountain climber, plank jacks, and shoulder taps
// ABOUTME: One hysteresis step shared by all four, each with its own limb distance metric
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use formcoach_core::geometry::distance;
use formcoach_core::models::{DistanceBand, FeedbackColor, Frame, JointId, Stage};
use formcoach_core::FrameError;

use super::finite;
use crate::session_state::SessionState;

/// Advance a two-stage band: count on the trigger crossing, re-arm on release
pub(super) fn step(
    state: &mut SessionState,
    band: &DistanceBand,
    value: f64,
    (counted, reset): (Stage, Stage),
) {
    if band.triggered(value) && state.stage == reset {
        state.stage = counted;
        state.count_rep();
        state.say(&band.feedback.counted, FeedbackColor::Correct);
    } else if band.released(value) {
        state.stage = reset;
        state.say(&band.feedback.reset, FeedbackColor::Neutral);
    }
}

pub(super) fn wrist_to_opposite_knee(frame: &Frame) -> Result<f64, FrameError> {
    joint_distance(
        frame,
        JointId::LeftWrist,
        JointId::RightKnee,
        "wrist to knee distance",
    )
}

pub(super) fn knee_to_elbow(frame: &Frame) -> Result<f64, FrameError> {
    joint_distance(
        frame,
        JointId::LeftKnee,
        JointId::LeftElbow,
        "knee to elbow distance",
    )
}

pub(super) fn wrist_to_opposite_shoulder(frame: &Frame) -> Result<f64, FrameError> {
    joint_distance(
        frame,
        JointId::LeftWrist,
        JointId::RightShoulder,
        "wrist to shoulder distance",
    )
}

/// Horizontal gap between the ankles
pub(super) fn ankle_spread(frame: &Frame) -> Result<f64, FrameError> {
    let left = frame.require(JointId::LeftAnkle)?;
    let right = frame.require(JointId::RightAnkle)?;
    finite((left.x - right.x).abs(), "ankle spread")
}

fn joint_distance(
    frame: &Frame,
    a: JointId,
    b: JointId,
    metric: &'static str,
) -> Result<f64, FrameError> {
    finite(distance(frame.require(a)?, frame.require(b)?), metric)
}

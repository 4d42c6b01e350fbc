// ABOUTME: Height-comparison families: high knees and pull-ups
// ABOUTME: Compares vertical image coordinates where a smaller y is higher up
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use formcoach_core::models::{FeedbackColor, Frame, JointId, PairFeedback, Stage};
use formcoach_core::FrameError;

use super::finite;
use crate::session_state::SessionState;

fn height(frame: &Frame, joint: JointId, metric: &'static str) -> Result<f64, FrameError> {
    finite(frame.require(joint)?.y, metric)
}

/// Either knee above its hip counts; both knees below both hips re-arms
pub(super) fn knee_height(
    state: &mut SessionState,
    texts: &PairFeedback,
    frame: &Frame,
) -> Result<(), FrameError> {
    let left_hip = height(frame, JointId::LeftHip, "hip height")?;
    let right_hip = height(frame, JointId::RightHip, "hip height")?;
    let left_knee = height(frame, JointId::LeftKnee, "knee height")?;
    let right_knee = height(frame, JointId::RightKnee, "knee height")?;

    let knee_raised = left_knee < left_hip || right_knee < right_hip;
    let knees_lowered = left_knee > left_hip && right_knee > right_hip;

    if knee_raised && state.stage == Stage::Down {
        state.stage = Stage::Up;
        state.count_rep();
        state.say(&texts.counted, FeedbackColor::Correct);
    } else if knees_lowered {
        state.stage = Stage::Down;
        state.say(&texts.reset, FeedbackColor::Neutral);
    }
    Ok(())
}

/// The higher wrist stands in for the bar
pub(super) fn pull_up(
    state: &mut SessionState,
    texts: &PairFeedback,
    frame: &Frame,
) -> Result<(), FrameError> {
    let nose = height(frame, JointId::Nose, "nose height")?;
    let bar = height(frame, JointId::LeftWrist, "bar height")?.min(height(
        frame,
        JointId::RightWrist,
        "bar height",
    )?);

    if nose < bar && state.stage == Stage::Down {
        state.stage = Stage::Up;
        state.count_rep();
        state.say(&texts.counted, FeedbackColor::Correct);
    } else if nose > bar {
        state.stage = Stage::Down;
        state.say(&texts.reset, FeedbackColor::Neutral);
    }
    Ok(())
}

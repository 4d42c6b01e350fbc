// ABOUTME: Burpee family: five-phase squat, plank, push-up, return, and stand cycle
// ABOUTME: Fixed angle constants; at most one phase advances per frame
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use formcoach_core::constants::{burpee, feedback};
use formcoach_core::models::{BurpeePhase, FeedbackColor, Frame, JointId};
use formcoach_core::FrameError;
use tracing::debug;

use super::angle::triplet_angle;
use super::finite;
use crate::session_state::SessionState;

pub(super) fn step(state: &mut SessionState, frame: &Frame) -> Result<(), FrameError> {
    let squat = finite(
        triplet_angle(
            frame,
            [JointId::LeftHip, JointId::LeftKnee, JointId::LeftAnkle],
        )?,
        "squat angle",
    )?;
    let plank = finite(
        triplet_angle(
            frame,
            [JointId::LeftShoulder, JointId::LeftHip, JointId::LeftAnkle],
        )?,
        "plank angle",
    )?;
    let pushup = finite(
        triplet_angle(
            frame,
            [
                JointId::LeftShoulder,
                JointId::LeftElbow,
                JointId::LeftWrist,
            ],
        )?,
        "push-up angle",
    )?;

    let next = match state.burpee_phase {
        BurpeePhase::Start if squat < burpee::SQUAT_MAX_DEGREES => {
            Some((BurpeePhase::Squat, feedback::BURPEE_TO_PLANK))
        }
        BurpeePhase::Squat if plank > burpee::PLANK_MIN_DEGREES => {
            Some((BurpeePhase::Plank, feedback::BURPEE_PUSHUP))
        }
        BurpeePhase::Plank if pushup < burpee::PUSHUP_MAX_DEGREES => {
            Some((BurpeePhase::Pushup, feedback::BURPEE_BACK_TO_SQUAT))
        }
        BurpeePhase::Pushup
            if squat < burpee::SQUAT_MAX_DEGREES
                && plank < burpee::RETURN_SQUAT_PLANK_MAX_DEGREES =>
        {
            Some((BurpeePhase::ReturnSquat, feedback::BURPEE_JUMP))
        }
        BurpeePhase::ReturnSquat if squat > burpee::STAND_MIN_DEGREES => {
            Some((BurpeePhase::Start, feedback::GOOD_REP))
        }
        _ => None,
    };

    let Some((phase, text)) = next else {
        return Ok(());
    };
    debug!(from = %state.burpee_phase, to = %phase, "Burpee phase advanced");
    state.burpee_phase = phase;
    if phase == BurpeePhase::Start {
        state.count_rep();
        state.say(text, FeedbackColor::Correct);
    } else {
        state.say(text, FeedbackColor::Transition);
    }
    Ok(())
}

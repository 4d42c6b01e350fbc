// ABOUTME: Russian twist family counting one rep per left and right excursion pair
// ABOUTME: Shoulder-line tilt with a centre dead band that must be revisited between sides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use formcoach_core::constants::feedback;
use formcoach_core::geometry::shoulder_tilt_degrees;
use formcoach_core::models::{FeedbackColor, Frame, JointId, TwistRule, TwistStage};
use formcoach_core::FrameError;

use super::finite;
use crate::session_state::SessionState;

pub(super) fn step(
    state: &mut SessionState,
    rule: &TwistRule,
    frame: &Frame,
) -> Result<(), FrameError> {
    let tilt = finite(
        shoulder_tilt_degrees(
            frame.require(JointId::LeftShoulder)?,
            frame.require(JointId::RightShoulder)?,
        ),
        "shoulder tilt",
    )?;
    let centered = state.twist_stage == TwistStage::Center;

    if tilt < rule.left_threshold && centered {
        state.twist_stage = TwistStage::Left;
        state.say(&rule.left_prompt, FeedbackColor::Transition);
    } else if tilt > rule.right_threshold && centered {
        state.twist_stage = TwistStage::Right;
        state.say(&rule.right_prompt, FeedbackColor::Transition);
    } else if rule.is_centered(tilt) {
        // A side only counts once the torso has come back through centre
        match state.twist_stage {
            TwistStage::Left => state.has_twisted_left = true,
            TwistStage::Right => state.has_twisted_right = true,
            TwistStage::Center => {}
        }
        state.twist_stage = TwistStage::Center;
        state.say(feedback::CENTER, FeedbackColor::Neutral);
    }

    if state.has_twisted_left && state.has_twisted_right {
        state.count_rep();
        state.say(feedback::GOOD_REP, FeedbackColor::Correct);
        state.has_twisted_left = false;
        state.has_twisted_right = false;
    }
    Ok(())
}

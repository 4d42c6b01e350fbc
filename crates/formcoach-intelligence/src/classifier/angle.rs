// ABOUTME: Angle-driven families: threshold reps, timed holds, and the posture gate pre-check
// ABOUTME: Combines symmetric limb angles and applies up/down hysteresis with optional inversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use formcoach_core::geometry::angle_between;
use formcoach_core::models::{
    AngleRepRule, FeedbackColor, Frame, GateRule, HoldRule, Stage, Triplet,
};
use formcoach_core::FrameError;

use super::finite;
use crate::session_state::SessionState;

/// Interior angle over a joint triplet, vertex in the middle
pub(super) fn triplet_angle(frame: &Frame, [a, vertex, c]: Triplet) -> Result<f64, FrameError> {
    Ok(angle_between(
        frame.require(a)?,
        frame.require(vertex)?,
        frame.require(c)?,
    ))
}

pub(super) fn gate_violated(gate: &GateRule, frame: &Frame) -> Result<bool, FrameError> {
    let angle = finite(triplet_angle(frame, gate.joints)?, "posture gate angle")?;
    Ok(angle > gate.max_angle)
}

pub(super) fn rep_based(
    state: &mut SessionState,
    rule: &AngleRepRule,
    frame: &Frame,
) -> Result<(), FrameError> {
    let primary = triplet_angle(frame, rule.primary)?;
    let combined = match rule.secondary {
        Some(secondary) => rule
            .combination
            .combine(primary, triplet_angle(frame, secondary)?),
        None => primary,
    };
    let angle = finite(combined, "joint angle")?;
    let texts = &rule.feedback;

    // Counted extreme is only reachable from the resting one
    let (rest, rest_text, counted, counted_text) = if rule.inverted {
        (Stage::Down, &texts.down, Stage::Up, &texts.up)
    } else {
        (Stage::Up, &texts.up, Stage::Down, &texts.down)
    };
    let at_rest = if rule.inverted {
        angle < rule.down_threshold
    } else {
        angle > rule.up_threshold
    };
    let at_counted = if rule.inverted {
        angle > rule.up_threshold
    } else {
        angle < rule.down_threshold
    };

    if at_rest {
        state.stage = rest;
        state.say(rest_text, FeedbackColor::Neutral);
    } else if at_counted && state.stage == rest {
        state.stage = counted;
        state.count_rep();
        state.say(counted_text, FeedbackColor::Correct);
    } else {
        let text = if state.stage == Stage::Up {
            &texts.transition_down
        } else {
            &texts.transition_up
        };
        state.say(text, FeedbackColor::Incorrect);
    }
    Ok(())
}

pub(super) fn timed(
    state: &mut SessionState,
    rule: &HoldRule,
    frame: &Frame,
) -> Result<(), FrameError> {
    let angle = finite(triplet_angle(frame, rule.joints)?, "hold angle")?;
    let in_form = if rule.inverted {
        angle < rule.form_angle
    } else {
        angle > rule.form_angle
    };

    if in_form {
        state.say(&rule.correct, FeedbackColor::Correct);
    } else {
        state.say(&rule.incorrect, FeedbackColor::Incorrect);
    }
    Ok(())
}

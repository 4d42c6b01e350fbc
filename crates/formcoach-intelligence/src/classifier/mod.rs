// ABOUTME: Per-frame classifier dispatching each frame to its exercise family's transition function
// ABOUTME: Applies the no-pose, missing-landmark, and posture-gate checks before any state change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

//! # Classifier
//!
//! `Classifier::process` is the engine's only entry point. Each call either:
//!
//! 1. skips the frame (no pose, a required joint missing, or a metric that
//!    cannot be computed) and leaves the `SessionState` exactly as it was,
//! 2. reports a posture-gate violation, changing only the feedback, or
//! 3. runs the family's transition function.
//!
//! Family functions compute every metric they need before touching the
//! state, so an indeterminate metric can never leave a half-applied update.

mod angle;
mod burpee;
mod distance;
mod positional;
mod twist;

use formcoach_core::constants::feedback;
use formcoach_core::models::{FeedbackColor, Frame, RecognitionRule, Stage};
use formcoach_core::FrameError;
use tracing::trace;

use crate::catalog::CatalogEntry;
use crate::session_state::SessionState;

/// How a frame was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// The family's transition function ran
    Classified,
    /// The posture gate fired; only feedback changed
    PostureViolation,
    /// The frame was unusable; state is unchanged
    Skipped(FrameError),
}

/// Result of processing one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutcome {
    /// Reps counted so far in this attempt
    pub rep_count: u32,
    /// Stage the active family is in
    pub stage: &'static str,
    /// Text to show the athlete
    pub feedback: String,
    /// Color category for the overlay
    pub color: FeedbackColor,
    /// How the frame was handled
    pub status: FrameStatus,
}

impl FrameOutcome {
    fn from_state(state: &SessionState, status: FrameStatus) -> Self {
        Self {
            rep_count: state.rep_count(),
            stage: state.stage_label(),
            feedback: state.feedback().to_owned(),
            color: state.color(),
            status,
        }
    }

    fn skipped(state: &SessionState, error: FrameError) -> Self {
        let mut outcome = Self::from_state(state, FrameStatus::Skipped(error));
        match error {
            FrameError::NoPose => feedback::NO_POSE.clone_into(&mut outcome.feedback),
            FrameError::MissingLandmark { .. } => {
                feedback::POSE_NOT_VISIBLE.clone_into(&mut outcome.feedback);
            }
            FrameError::IndeterminateGeometry { .. } => {}
        }
        outcome
    }

    /// Whether the frame was dropped without touching the state
    #[must_use]
    pub const fn was_skipped(&self) -> bool {
        matches!(self.status, FrameStatus::Skipped(_))
    }
}

/// Stateless frame classifier; all mutable state lives in `SessionState`
pub struct Classifier;

impl Classifier {
    /// Classify one frame for the attempt described by `state`.
    ///
    /// Never fails: unusable frames come back as `FrameStatus::Skipped` with
    /// the state untouched.
    pub fn process(state: &mut SessionState, frame: &Frame) -> FrameOutcome {
        let entry = state.shared_entry();
        match Self::step(state, &entry, frame) {
            Ok(status) => FrameOutcome::from_state(state, status),
            Err(error) => {
                trace!(exercise = %entry.name(), %error, "Frame skipped");
                FrameOutcome::skipped(state, error)
            }
        }
    }

    fn step(
        state: &mut SessionState,
        entry: &CatalogEntry,
        frame: &Frame,
    ) -> Result<FrameStatus, FrameError> {
        if frame.is_empty() {
            return Err(FrameError::NoPose);
        }
        if let Some(joint) = frame.first_missing(entry.required_joints()) {
            return Err(FrameError::MissingLandmark { joint });
        }

        if let Some(gate) = entry.gate() {
            if angle::gate_violated(gate, frame)? {
                state.say(&gate.message, FeedbackColor::Incorrect);
                return Ok(FrameStatus::PostureViolation);
            }
        }

        match entry.rule() {
            RecognitionRule::RepBased(rule) => angle::rep_based(state, rule, frame)?,
            RecognitionRule::Timed(rule) => angle::timed(state, rule, frame)?,
            RecognitionRule::KneeHeight(texts) => positional::knee_height(state, texts, frame)?,
            RecognitionRule::PullUp(texts) => positional::pull_up(state, texts, frame)?,
            RecognitionRule::BirdDog(band) => {
                let reach = distance::wrist_to_opposite_knee(frame)?;
                distance::step(state, band, reach, (Stage::Out, Stage::In));
            }
            RecognitionRule::MountainClimber(band) => {
                let gap = distance::knee_to_elbow(frame)?;
                distance::step(state, band, gap, (Stage::Forward, Stage::Back));
            }
            RecognitionRule::PlankJacks(band) => {
                let spread = distance::ankle_spread(frame)?;
                distance::step(state, band, spread, (Stage::Out, Stage::In));
            }
            RecognitionRule::ShoulderTaps(band) => {
                let gap = distance::wrist_to_opposite_shoulder(frame)?;
                distance::step(state, band, gap, (Stage::Up, Stage::Down));
            }
            RecognitionRule::RussianTwist(rule) => twist::step(state, rule, frame)?,
            RecognitionRule::Burpee => burpee::step(state, frame)?,
        }
        Ok(FrameStatus::Classified)
    }
}

/// Reject NaN and infinite metrics
fn finite(value: f64, metric: &'static str) -> Result<f64, FrameError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FrameError::IndeterminateGeometry { metric })
    }
}

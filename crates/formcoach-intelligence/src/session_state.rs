// ABOUTME: Mutable state of one exercise attempt, threaded through the classifier frame by frame
// ABOUTME: Rep counter, primary stage, burpee phase, twist flags, and the last emitted feedback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use std::sync::Arc;

use formcoach_core::constants::feedback;
use formcoach_core::models::{BurpeePhase, ExerciseType, FeedbackColor, Stage, TwistStage};
use serde::Serialize;
use tracing::debug;

use crate::catalog::CatalogEntry;

/// State of a single exercise attempt.
///
/// Created when the attempt starts and dropped when it ends; never shared
/// between attempts. Only [`crate::Classifier`] mutates it, once per frame.
#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    #[serde(skip)]
    entry: Arc<CatalogEntry>,
    pub(crate) rep_count: u32,
    pub(crate) stage: Stage,
    pub(crate) burpee_phase: BurpeePhase,
    pub(crate) twist_stage: TwistStage,
    pub(crate) has_twisted_left: bool,
    pub(crate) has_twisted_right: bool,
    pub(crate) feedback: String,
    pub(crate) color: FeedbackColor,
}

impl SessionState {
    /// Fresh attempt: zero reps, resting stage, "Ready" feedback
    #[must_use]
    pub fn new(entry: Arc<CatalogEntry>) -> Self {
        let stage = Stage::initial(entry.config().invert_stages);
        Self {
            entry,
            rep_count: 0,
            stage,
            burpee_phase: BurpeePhase::default(),
            twist_stage: TwistStage::default(),
            has_twisted_left: false,
            has_twisted_right: false,
            feedback: feedback::READY.to_owned(),
            color: FeedbackColor::Neutral,
        }
    }

    /// Return to the state of a fresh attempt at the same exercise
    pub fn reset(&mut self) {
        *self = Self::new(Arc::clone(&self.entry));
    }

    /// Exercise this attempt is for
    #[must_use]
    pub fn entry(&self) -> &CatalogEntry {
        &self.entry
    }

    pub(crate) fn shared_entry(&self) -> Arc<CatalogEntry> {
        Arc::clone(&self.entry)
    }

    /// Reps counted so far
    #[must_use]
    pub const fn rep_count(&self) -> u32 {
        self.rep_count
    }

    /// Primary two-extreme stage
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Burpee phase (always `Start` for other families)
    #[must_use]
    pub const fn burpee_phase(&self) -> BurpeePhase {
        self.burpee_phase
    }

    /// Twist side (always `Center` for other families)
    #[must_use]
    pub const fn twist_stage(&self) -> TwistStage {
        self.twist_stage
    }

    /// Left and right excursions seen since the last counted twist
    #[must_use]
    pub const fn twist_flags(&self) -> (bool, bool) {
        (self.has_twisted_left, self.has_twisted_right)
    }

    /// Name of the stage the active family is tracking
    #[must_use]
    pub fn stage_label(&self) -> &'static str {
        match self.entry.exercise_type() {
            ExerciseType::Burpee => self.burpee_phase.as_str(),
            ExerciseType::RussianTwist => self.twist_stage.as_str(),
            _ => self.stage.as_str(),
        }
    }

    /// Last feedback text shown
    #[must_use]
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    /// Last feedback color shown
    #[must_use]
    pub const fn color(&self) -> FeedbackColor {
        self.color
    }

    pub(crate) fn count_rep(&mut self) {
        self.rep_count = self.rep_count.saturating_add(1);
        debug!(
            exercise = %self.entry.name(),
            reps = self.rep_count,
            "Rep counted"
        );
    }

    pub(crate) fn say(&mut self, text: &str, color: FeedbackColor) {
        text.clone_into(&mut self.feedback);
        self.color = color;
    }
}

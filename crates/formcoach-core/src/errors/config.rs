// ABOUTME: Configuration error types for exercise definition validation
// ABOUTME: Defines variants for missing thresholds, feedback keys, and malformed landmark lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use thiserror::Error;

/// An exercise definition that cannot be recognized as written.
///
/// Every variant names the offending exercise so a catalog with fifty entries
/// still points straight at the typo.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Rep-based exercise without one of its angle thresholds
    #[error("exercise '{exercise}' is missing required {field}")]
    MissingThreshold {
        /// Exercise name
        exercise: String,
        /// `up_threshold` or `down_threshold`
        field: &'static str,
    },

    /// Timed exercise without a correct-form angle
    #[error("exercise '{exercise}' is missing required correct_form_angle")]
    MissingFormAngle {
        /// Exercise name
        exercise: String,
    },

    /// Named threshold the exercise family reads is absent
    #[error("exercise '{exercise}' is missing threshold '{key}'")]
    MissingThresholdKey {
        /// Exercise name
        exercise: String,
        /// Threshold map key
        key: &'static str,
    },

    /// Feedback text the exercise family emits is absent
    #[error("exercise '{exercise}' is missing feedback text for '{key}'")]
    MissingFeedbackKey {
        /// Exercise name
        exercise: String,
        /// Feedback map key
        key: &'static str,
    },

    /// Landmark list has the wrong shape for the exercise family
    #[error("exercise '{exercise}' tracks {actual} landmarks, expected {expected}")]
    InvalidLandmarkCount {
        /// Exercise name
        exercise: String,
        /// Human-readable accepted counts
        expected: &'static str,
        /// Number of landmarks supplied
        actual: usize,
    },

    /// Thresholds that would make the hysteresis band empty or inverted
    #[error("exercise '{exercise}' has inconsistent thresholds: {detail}")]
    InvalidThresholdOrder {
        /// Exercise name
        exercise: String,
        /// Which relation is violated
        detail: String,
    },

    /// Threshold or angle value that is NaN or infinite
    #[error("exercise '{exercise}' has a non-finite value for {field}")]
    NonFiniteThreshold {
        /// Exercise name
        exercise: String,
        /// Field or threshold key
        field: String,
    },

    /// Posture gate that cannot be evaluated
    #[error("exercise '{exercise}' has an invalid posture gate: {reason}")]
    InvalidPostureGate {
        /// Exercise name
        exercise: String,
        /// What is wrong with it
        reason: &'static str,
    },

    /// Two catalog entries share a name
    #[error("exercise '{exercise}' is defined more than once")]
    DuplicateExercise {
        /// Exercise name
        exercise: String,
    },

    /// Lookup by a name the catalog does not contain
    #[error("exercise '{exercise}' is not in the catalog")]
    UnknownExercise {
        /// Requested name
        exercise: String,
    },
}

impl ConfigError {
    /// Name of the exercise the error refers to
    #[must_use]
    pub fn exercise(&self) -> &str {
        match self {
            Self::MissingThreshold { exercise, .. }
            | Self::MissingFormAngle { exercise }
            | Self::MissingThresholdKey { exercise, .. }
            | Self::MissingFeedbackKey { exercise, .. }
            | Self::InvalidLandmarkCount { exercise, .. }
            | Self::InvalidThresholdOrder { exercise, .. }
            | Self::NonFiniteThreshold { exercise, .. }
            | Self::InvalidPostureGate { exercise, .. }
            | Self::DuplicateExercise { exercise }
            | Self::UnknownExercise { exercise } => exercise,
        }
    }

    /// Create an "unknown exercise" error
    #[must_use]
    pub fn unknown_exercise(exercise: impl Into<String>) -> Self {
        Self::UnknownExercise {
            exercise: exercise.into(),
        }
    }
}

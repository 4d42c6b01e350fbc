// ABOUTME: Declarative exercise configuration types consumed by the classification engine
// ABOUTME: ExerciseType families, angle combination policy, posture gates, and feedback colors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::joint::JointId;
use crate::constants::{feedback_keys, threshold_keys};

/// Recognition strategy family.
///
/// Each variant has its own transition function in the classifier; the set
/// is closed so every family is handled exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    /// Joint angle oscillating between an up and a down threshold
    #[default]
    RepBased,
    /// Static hold judged against a single form angle
    Timed,
    /// Knees driven above the hips
    KneeHeight,
    /// Nose rising above the wrists
    PullUp,
    /// Wrist extended away from the opposite knee
    BirdDog,
    /// Shoulder line twisted left then right
    RussianTwist,
    /// Knee drawn to the same-side elbow
    MountainClimber,
    /// Five-phase squat/plank/push-up/jump cycle
    Burpee,
    /// Ankles jumped apart in plank
    PlankJacks,
    /// Wrist brought to the opposite shoulder
    ShoulderTaps,
}

impl ExerciseType {
    /// Every family
    pub const ALL: [Self; 10] = [
        Self::RepBased,
        Self::Timed,
        Self::KneeHeight,
        Self::PullUp,
        Self::BirdDog,
        Self::RussianTwist,
        Self::MountainClimber,
        Self::Burpee,
        Self::PlankJacks,
        Self::ShoulderTaps,
    ];

    /// `snake_case` name, identical to the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RepBased => "rep_based",
            Self::Timed => "timed",
            Self::KneeHeight => "knee_height",
            Self::PullUp => "pull_up",
            Self::BirdDog => "bird_dog",
            Self::RussianTwist => "russian_twist",
            Self::MountainClimber => "mountain_climber",
            Self::Burpee => "burpee",
            Self::PlankJacks => "plank_jacks",
            Self::ShoulderTaps => "shoulder_taps",
        }
    }

    /// Feedback map keys this family emits
    #[must_use]
    pub const fn required_feedback_keys(self) -> &'static [&'static str] {
        match self {
            Self::RepBased => &[
                feedback_keys::UP,
                feedback_keys::DOWN,
                feedback_keys::TRANSITION_UP,
                feedback_keys::TRANSITION_DOWN,
            ],
            Self::Timed => &[feedback_keys::CORRECT, feedback_keys::INCORRECT],
            Self::KneeHeight | Self::PullUp => &[feedback_keys::UP, feedback_keys::DOWN],
            Self::BirdDog | Self::PlankJacks => &[feedback_keys::OUT, feedback_keys::IN],
            Self::RussianTwist => &[feedback_keys::LEFT, feedback_keys::RIGHT],
            Self::MountainClimber => &[feedback_keys::FORWARD, feedback_keys::BACK],
            Self::ShoulderTaps => &[feedback_keys::TAP, feedback_keys::RELEASE],
            Self::Burpee => &[],
        }
    }

    /// Named thresholds this family reads
    #[must_use]
    pub const fn required_threshold_keys(self) -> &'static [&'static str] {
        match self {
            Self::BirdDog => &[threshold_keys::EXTENDED, threshold_keys::CONTRACTED],
            Self::RussianTwist => &[threshold_keys::LEFT, threshold_keys::RIGHT],
            Self::MountainClimber => &[threshold_keys::CLOSE, threshold_keys::FAR],
            Self::PlankJacks => &[threshold_keys::OUT, threshold_keys::IN],
            Self::ShoulderTaps => &[threshold_keys::TAP, threshold_keys::RELEASE],
            Self::RepBased | Self::Timed | Self::KneeHeight | Self::PullUp | Self::Burpee => &[],
        }
    }

    /// Joints read by families that ignore the configured landmark list
    #[must_use]
    pub const fn fixed_joints(self) -> &'static [JointId] {
        match self {
            Self::KneeHeight => &[
                JointId::LeftHip,
                JointId::LeftKnee,
                JointId::RightHip,
                JointId::RightKnee,
            ],
            Self::PullUp => &[JointId::Nose, JointId::LeftWrist, JointId::RightWrist],
            Self::BirdDog => &[JointId::LeftWrist, JointId::RightKnee],
            Self::RussianTwist => &[JointId::LeftShoulder, JointId::RightShoulder],
            Self::MountainClimber => &[JointId::LeftKnee, JointId::LeftElbow],
            Self::Burpee => &[
                JointId::LeftShoulder,
                JointId::LeftElbow,
                JointId::LeftWrist,
                JointId::LeftHip,
                JointId::LeftKnee,
                JointId::LeftAnkle,
            ],
            Self::PlankJacks => &[JointId::LeftAnkle, JointId::RightAnkle],
            Self::ShoulderTaps => &[JointId::LeftWrist, JointId::RightShoulder],
            Self::RepBased | Self::Timed => &[],
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Policy for folding left and right limb angles into one value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleCombination {
    /// Smaller of the two angles (deepest limb)
    Min,
    /// Larger of the two angles (highest limb)
    Max,
    /// Arithmetic mean
    #[default]
    Average,
}

impl AngleCombination {
    /// Combine the two measurements. NaN in either side yields NaN.
    #[must_use]
    pub fn combine(self, primary: f64, secondary: f64) -> f64 {
        if primary.is_nan() || secondary.is_nan() {
            return f64::NAN;
        }
        match self {
            Self::Min => primary.min(secondary),
            Self::Max => primary.max(secondary),
            Self::Average => (primary + secondary) / 2.0,
        }
    }
}

/// Feedback color category; the renderer owns the concrete palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackColor {
    /// Resting or ready
    #[default]
    Neutral,
    /// Rep just counted, or form correct
    Correct,
    /// Mid-movement
    Transition,
    /// Posture violation or wrong form
    Incorrect,
}

/// Form check evaluated before the main classifier on every frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostureGate {
    /// Angle triplet, vertex in the middle
    pub joints: [JointId; 3],
    /// Angles above this are a violation (degrees)
    pub angle_threshold: f64,
    /// Feedback shown while violated
    pub feedback_incorrect: String,
}

/// Declarative description of one supported exercise.
///
/// `landmarks` is positional: the first three joints form the primary angle
/// triplet, the next three (when present) the symmetric secondary triplet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseConfig {
    /// Catalog key, matched exactly
    pub name: String,
    /// Recognition family
    #[serde(default)]
    pub exercise_type: ExerciseType,
    /// Angle joints for `RepBased` and `Timed`
    #[serde(default)]
    pub landmarks: Vec<JointId>,
    /// Upper angle threshold for `RepBased` (degrees)
    #[serde(default)]
    pub up_threshold: Option<f64>,
    /// Lower angle threshold for `RepBased` (degrees)
    #[serde(default)]
    pub down_threshold: Option<f64>,
    /// Form angle for `Timed` (degrees)
    #[serde(default)]
    pub correct_form_angle: Option<f64>,
    /// How left and right angles are combined
    #[serde(default)]
    pub angle_combination: AngleCombination,
    /// Swap which extreme is the counted rep and which is the resting pose
    #[serde(default)]
    pub invert_stages: bool,
    /// Feedback text by stage key
    #[serde(default)]
    pub feedback: BTreeMap<String, String>,
    /// Named distance and angle cutoffs
    #[serde(default)]
    pub thresholds: BTreeMap<String, f64>,
    /// Optional form gate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posture_gate: Option<PostureGate>,
}

impl ExerciseConfig {
    /// Start a configuration of the given family with no thresholds or feedback
    #[must_use]
    pub fn new(name: impl Into<String>, exercise_type: ExerciseType) -> Self {
        Self {
            name: name.into(),
            exercise_type,
            landmarks: Vec::new(),
            up_threshold: None,
            down_threshold: None,
            correct_form_angle: None,
            angle_combination: AngleCombination::default(),
            invert_stages: false,
            feedback: BTreeMap::new(),
            thresholds: BTreeMap::new(),
            posture_gate: None,
        }
    }

    /// Angle-threshold rep exercise
    #[must_use]
    pub fn rep_based(
        name: impl Into<String>,
        landmarks: &[JointId],
        up_threshold: f64,
        down_threshold: f64,
    ) -> Self {
        let mut config = Self::new(name, ExerciseType::RepBased).landmarks(landmarks);
        config.up_threshold = Some(up_threshold);
        config.down_threshold = Some(down_threshold);
        config
    }

    /// Static hold judged against a form angle
    #[must_use]
    pub fn timed(name: impl Into<String>, landmarks: &[JointId], correct_form_angle: f64) -> Self {
        let mut config = Self::new(name, ExerciseType::Timed).landmarks(landmarks);
        config.correct_form_angle = Some(correct_form_angle);
        config
    }

    /// Replace the tracked landmarks
    #[must_use]
    pub fn landmarks(mut self, landmarks: &[JointId]) -> Self {
        self.landmarks = landmarks.to_vec();
        self
    }

    /// Add feedback text entries
    #[must_use]
    pub fn feedback(mut self, entries: &[(&str, &str)]) -> Self {
        self.feedback.extend(
            entries
                .iter()
                .map(|(key, text)| ((*key).to_owned(), (*text).to_owned())),
        );
        self
    }

    /// Add named thresholds
    #[must_use]
    pub fn thresholds(mut self, entries: &[(&str, f64)]) -> Self {
        self.thresholds.extend(
            entries
                .iter()
                .map(|(key, value)| ((*key).to_owned(), *value)),
        );
        self
    }

    /// Set the angle combination policy
    #[must_use]
    pub fn combine(mut self, policy: AngleCombination) -> Self {
        self.angle_combination = policy;
        self
    }

    /// Count the downThreshold to upThreshold transition instead
    #[must_use]
    pub fn inverted(mut self) -> Self {
        self.invert_stages = true;
        self
    }

    /// Attach a posture gate
    #[must_use]
    pub fn posture_gate(
        mut self,
        joints: [JointId; 3],
        angle_threshold: f64,
        feedback_incorrect: impl Into<String>,
    ) -> Self {
        self.posture_gate = Some(PostureGate {
            joints,
            angle_threshold,
            feedback_incorrect: feedback_incorrect.into(),
        });
        self
    }

    /// Feedback text for a key, if configured
    #[must_use]
    pub fn feedback_text(&self, key: &str) -> Option<&str> {
        self.feedback.get(key).map(String::as_str)
    }

    /// Named threshold, if configured
    #[must_use]
    pub fn threshold(&self, key: &str) -> Option<f64> {
        self.thresholds.get(key).copied()
    }
}

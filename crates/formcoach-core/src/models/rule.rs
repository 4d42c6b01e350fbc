// ABOUTME: Validated recognition rules compiled from declarative exercise configurations
// ABOUTME: Each family's thresholds and feedback resolved once so classification cannot fail on config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

//! # Recognition Rules
//!
//! An `ExerciseConfig` is loosely typed: optional thresholds, string-keyed
//! feedback and threshold maps. `ExerciseConfig::compile` checks everything
//! the config's family reads and produces a `RecognitionRule` holding plain
//! values. The classifier only ever sees rules, so a typo in a catalog entry
//! surfaces at load time instead of as a silently defaulted string mid-set.

use serde::Serialize;

use super::exercise::{AngleCombination, ExerciseConfig, ExerciseType, PostureGate};
use super::joint::JointId;
use crate::constants::{feedback_keys, threshold_keys, twist};
use crate::errors::ConfigError;

/// Three joints forming an angle, vertex in the middle
pub type Triplet = [JointId; 3];

/// Feedback texts of the angle-threshold family
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepFeedback {
    /// Upper extreme
    pub up: String,
    /// Lower extreme
    pub down: String,
    /// Dead zone, heading up
    pub transition_up: String,
    /// Dead zone, heading down
    pub transition_down: String,
}

/// Angle oscillating between two thresholds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AngleRepRule {
    /// Primary angle joints
    pub primary: Triplet,
    /// Symmetric-limb angle joints, when tracked
    pub secondary: Option<Triplet>,
    /// Upper threshold (degrees)
    pub up_threshold: f64,
    /// Lower threshold (degrees)
    pub down_threshold: f64,
    /// Left/right combination policy
    pub combination: AngleCombination,
    /// Count the down-to-up transition instead of up-to-down
    pub inverted: bool,
    /// Texts per stage
    pub feedback: RepFeedback,
}

/// Static hold judged against one angle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldRule {
    /// Angle joints
    pub joints: Triplet,
    /// Form angle (degrees)
    pub form_angle: f64,
    /// Correct form is below the angle instead of above
    pub inverted: bool,
    /// Text while in form
    pub correct: String,
    /// Text while out of form
    pub incorrect: String,
}

/// Feedback of a two-stage family: the counted stage and the reset stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairFeedback {
    /// Shown when a rep is counted
    pub counted: String,
    /// Shown when the movement resets
    pub reset: String,
}

/// Which way a distance must move to count a rep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BandDirection {
    /// Counted when the distance grows past the trigger
    Expanding,
    /// Counted when the distance shrinks below the trigger
    Closing,
}

/// Distance hysteresis band between a trigger and a release cutoff
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceBand {
    /// Cutoff that counts a rep
    pub trigger: f64,
    /// Cutoff that re-arms the next rep
    pub release: f64,
    /// Direction of the counted crossing
    pub direction: BandDirection,
    /// Texts for the two stages
    pub feedback: PairFeedback,
}

impl DistanceBand {
    /// Whether the distance has crossed the trigger
    #[must_use]
    pub fn triggered(&self, distance: f64) -> bool {
        match self.direction {
            BandDirection::Expanding => distance > self.trigger,
            BandDirection::Closing => distance < self.trigger,
        }
    }

    /// Whether the distance has crossed back past the release
    #[must_use]
    pub fn released(&self, distance: f64) -> bool {
        match self.direction {
            BandDirection::Expanding => distance < self.release,
            BandDirection::Closing => distance > self.release,
        }
    }
}

/// Shoulder-line twist thresholds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwistRule {
    /// Tilt below this is twisted left (degrees, negative)
    pub left_threshold: f64,
    /// Tilt above this is twisted right (degrees, positive)
    pub right_threshold: f64,
    /// Text when twisted left
    pub left_prompt: String,
    /// Text when twisted right
    pub right_prompt: String,
}

impl TwistRule {
    /// Whether the tilt is back inside the centre dead band (inclusive)
    #[must_use]
    pub fn is_centered(&self, tilt: f64) -> bool {
        let low = self.left_threshold + twist::DEAD_BAND_MARGIN_DEGREES;
        let high = self.right_threshold - twist::DEAD_BAND_MARGIN_DEGREES;
        (low..=high).contains(&tilt)
    }
}

/// Posture gate with its threshold checked
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateRule {
    /// Angle joints
    pub joints: Triplet,
    /// Angles above this short-circuit the frame (degrees)
    pub max_angle: f64,
    /// Text shown while violated
    pub message: String,
}

/// A fully validated recognition strategy
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum RecognitionRule {
    /// Angle-threshold reps
    RepBased(AngleRepRule),
    /// Timed hold
    Timed(HoldRule),
    /// Knees above hips
    KneeHeight(PairFeedback),
    /// Nose above the wrist bar
    PullUp(PairFeedback),
    /// Wrist to opposite knee, counted when extending
    BirdDog(DistanceBand),
    /// Left and right twist excursions
    RussianTwist(TwistRule),
    /// Knee to same-side elbow, counted when closing
    MountainClimber(DistanceBand),
    /// Five-phase cycle with fixed angles
    Burpee,
    /// Ankle spread, counted when expanding
    PlankJacks(DistanceBand),
    /// Wrist to opposite shoulder, counted when closing
    ShoulderTaps(DistanceBand),
}

impl RecognitionRule {
    /// Family this rule implements
    #[must_use]
    pub const fn exercise_type(&self) -> ExerciseType {
        match self {
            Self::RepBased(_) => ExerciseType::RepBased,
            Self::Timed(_) => ExerciseType::Timed,
            Self::KneeHeight(_) => ExerciseType::KneeHeight,
            Self::PullUp(_) => ExerciseType::PullUp,
            Self::BirdDog(_) => ExerciseType::BirdDog,
            Self::RussianTwist(_) => ExerciseType::RussianTwist,
            Self::MountainClimber(_) => ExerciseType::MountainClimber,
            Self::Burpee => ExerciseType::Burpee,
            Self::PlankJacks(_) => ExerciseType::PlankJacks,
            Self::ShoulderTaps(_) => ExerciseType::ShoulderTaps,
        }
    }

    /// Joints a frame must contain for this rule to classify it
    #[must_use]
    pub fn required_joints(&self) -> Vec<JointId> {
        match self {
            Self::RepBased(rule) => rule
                .primary
                .iter()
                .chain(rule.secondary.iter().flatten())
                .copied()
                .collect(),
            Self::Timed(rule) => rule.joints.to_vec(),
            other => other.exercise_type().fixed_joints().to_vec(),
        }
    }
}

/// A compiled exercise: the rule plus its optional posture gate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledExercise {
    /// Main recognition rule
    pub rule: RecognitionRule,
    /// Pre-check evaluated first on every frame
    pub gate: Option<GateRule>,
    /// Union of the rule's and the gate's joints, deduplicated
    pub required_joints: Vec<JointId>,
}

impl ExerciseConfig {
    /// Validate this configuration and resolve it into a rule.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first field the family needs that
    /// is missing, malformed, or inconsistent
    pub fn compile(&self) -> Result<CompiledExercise, ConfigError> {
        let rule = match self.exercise_type {
            ExerciseType::RepBased => RecognitionRule::RepBased(self.compile_rep_based()?),
            ExerciseType::Timed => RecognitionRule::Timed(self.compile_timed()?),
            ExerciseType::KneeHeight => RecognitionRule::KneeHeight(
                self.pair_feedback(feedback_keys::UP, feedback_keys::DOWN)?,
            ),
            ExerciseType::PullUp => {
                RecognitionRule::PullUp(self.pair_feedback(feedback_keys::UP, feedback_keys::DOWN)?)
            }
            ExerciseType::BirdDog => RecognitionRule::BirdDog(self.band(
                (threshold_keys::EXTENDED, threshold_keys::CONTRACTED),
                BandDirection::Expanding,
                (feedback_keys::OUT, feedback_keys::IN),
            )?),
            ExerciseType::RussianTwist => RecognitionRule::RussianTwist(self.compile_twist()?),
            ExerciseType::MountainClimber => RecognitionRule::MountainClimber(self.band(
                (threshold_keys::CLOSE, threshold_keys::FAR),
                BandDirection::Closing,
                (feedback_keys::FORWARD, feedback_keys::BACK),
            )?),
            ExerciseType::Burpee => RecognitionRule::Burpee,
            ExerciseType::PlankJacks => RecognitionRule::PlankJacks(self.band(
                (threshold_keys::OUT, threshold_keys::IN),
                BandDirection::Expanding,
                (feedback_keys::OUT, feedback_keys::IN),
            )?),
            ExerciseType::ShoulderTaps => RecognitionRule::ShoulderTaps(self.band(
                (threshold_keys::TAP, threshold_keys::RELEASE),
                BandDirection::Closing,
                (feedback_keys::TAP, feedback_keys::RELEASE),
            )?),
        };

        let gate = self
            .posture_gate
            .as_ref()
            .map(|gate| self.compile_gate(gate))
            .transpose()?;

        let mut required_joints = rule.required_joints();
        if let Some(gate) = &gate {
            required_joints.extend_from_slice(&gate.joints);
        }
        let mut seen = Vec::with_capacity(required_joints.len());
        required_joints.retain(|joint| {
            if seen.contains(joint) {
                false
            } else {
                seen.push(*joint);
                true
            }
        });

        Ok(CompiledExercise {
            rule,
            gate,
            required_joints,
        })
    }

    fn compile_rep_based(&self) -> Result<AngleRepRule, ConfigError> {
        let up_threshold = self.finite_field(self.up_threshold, "up_threshold")?;
        let down_threshold = self.finite_field(self.down_threshold, "down_threshold")?;
        if up_threshold <= down_threshold {
            return Err(ConfigError::InvalidThresholdOrder {
                exercise: self.name.clone(),
                detail: format!(
                    "up_threshold {up_threshold} must exceed down_threshold {down_threshold}"
                ),
            });
        }

        let (primary, secondary) = match self.landmarks.as_slice() {
            [a, b, c] => ([*a, *b, *c], None),
            [a, b, c, d, e, f] => ([*a, *b, *c], Some([*d, *e, *f])),
            other => {
                return Err(ConfigError::InvalidLandmarkCount {
                    exercise: self.name.clone(),
                    expected: "3 or 6",
                    actual: other.len(),
                })
            }
        };

        Ok(AngleRepRule {
            primary,
            secondary,
            up_threshold,
            down_threshold,
            combination: self.angle_combination,
            inverted: self.invert_stages,
            feedback: RepFeedback {
                up: self.require_feedback(feedback_keys::UP)?,
                down: self.require_feedback(feedback_keys::DOWN)?,
                transition_up: self.require_feedback(feedback_keys::TRANSITION_UP)?,
                transition_down: self.require_feedback(feedback_keys::TRANSITION_DOWN)?,
            },
        })
    }

    fn compile_timed(&self) -> Result<HoldRule, ConfigError> {
        let form_angle = match self.correct_form_angle {
            None => {
                return Err(ConfigError::MissingFormAngle {
                    exercise: self.name.clone(),
                })
            }
            Some(angle) if !angle.is_finite() => {
                return Err(ConfigError::NonFiniteThreshold {
                    exercise: self.name.clone(),
                    field: "correct_form_angle".to_owned(),
                })
            }
            Some(angle) => angle,
        };

        let joints = match self.landmarks.as_slice() {
            [a, b, c, ..] => [*a, *b, *c],
            other => {
                return Err(ConfigError::InvalidLandmarkCount {
                    exercise: self.name.clone(),
                    expected: "at least 3",
                    actual: other.len(),
                })
            }
        };

        Ok(HoldRule {
            joints,
            form_angle,
            inverted: self.invert_stages,
            correct: self.require_feedback(feedback_keys::CORRECT)?,
            incorrect: self.require_feedback(feedback_keys::INCORRECT)?,
        })
    }

    fn compile_twist(&self) -> Result<TwistRule, ConfigError> {
        let left_threshold = self.require_threshold(threshold_keys::LEFT)?;
        let right_threshold = self.require_threshold(threshold_keys::RIGHT)?;
        let margin = twist::DEAD_BAND_MARGIN_DEGREES;
        if left_threshold + margin > right_threshold - margin {
            return Err(ConfigError::InvalidThresholdOrder {
                exercise: self.name.clone(),
                detail: format!(
                    "left {left_threshold} and right {right_threshold} leave no centre band"
                ),
            });
        }

        Ok(TwistRule {
            left_threshold,
            right_threshold,
            left_prompt: self.require_feedback(feedback_keys::LEFT)?,
            right_prompt: self.require_feedback(feedback_keys::RIGHT)?,
        })
    }

    fn band(
        &self,
        (trigger_key, release_key): (&'static str, &'static str),
        direction: BandDirection,
        (counted_key, reset_key): (&'static str, &'static str),
    ) -> Result<DistanceBand, ConfigError> {
        let trigger = self.require_threshold(trigger_key)?;
        let release = self.require_threshold(release_key)?;
        let ordered = match direction {
            BandDirection::Expanding => trigger > release,
            BandDirection::Closing => trigger < release,
        };
        if !ordered {
            return Err(ConfigError::InvalidThresholdOrder {
                exercise: self.name.clone(),
                detail: format!(
                    "'{trigger_key}' {trigger} and '{release_key}' {release} leave no hysteresis band"
                ),
            });
        }

        Ok(DistanceBand {
            trigger,
            release,
            direction,
            feedback: self.pair_feedback(counted_key, reset_key)?,
        })
    }

    fn compile_gate(&self, gate: &PostureGate) -> Result<GateRule, ConfigError> {
        if !gate.angle_threshold.is_finite() {
            return Err(ConfigError::InvalidPostureGate {
                exercise: self.name.clone(),
                reason: "angle threshold is not finite",
            });
        }
        if gate.feedback_incorrect.trim().is_empty() {
            return Err(ConfigError::InvalidPostureGate {
                exercise: self.name.clone(),
                reason: "violation message is empty",
            });
        }
        Ok(GateRule {
            joints: gate.joints,
            max_angle: gate.angle_threshold,
            message: gate.feedback_incorrect.clone(),
        })
    }

    fn pair_feedback(
        &self,
        counted_key: &'static str,
        reset_key: &'static str,
    ) -> Result<PairFeedback, ConfigError> {
        Ok(PairFeedback {
            counted: self.require_feedback(counted_key)?,
            reset: self.require_feedback(reset_key)?,
        })
    }

    fn require_feedback(&self, key: &'static str) -> Result<String, ConfigError> {
        self.feedback_text(key)
            .map(str::to_owned)
            .ok_or_else(|| ConfigError::MissingFeedbackKey {
                exercise: self.name.clone(),
                key,
            })
    }

    fn require_threshold(&self, key: &'static str) -> Result<f64, ConfigError> {
        let value = self
            .threshold(key)
            .ok_or_else(|| ConfigError::MissingThresholdKey {
                exercise: self.name.clone(),
                key,
            })?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ConfigError::NonFiniteThreshold {
                exercise: self.name.clone(),
                field: key.to_owned(),
            })
        }
    }

    fn finite_field(&self, value: Option<f64>, field: &'static str) -> Result<f64, ConfigError> {
        match value {
            None => Err(ConfigError::MissingThreshold {
                exercise: self.name.clone(),
                field,
            }),
            Some(v) if !v.is_finite() => Err(ConfigError::NonFiniteThreshold {
                exercise: self.name.clone(),
                field: field.to_owned(),
            }),
            Some(v) => Ok(v),
        }
    }
}

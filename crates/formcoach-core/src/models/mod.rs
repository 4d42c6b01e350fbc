// ABOUTME: Domain models for landmark frames, exercise definitions, and recognition rules
// ABOUTME: Re-exports joint, frame, stage, exercise configuration, and compiled rule types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

//! # Models
//!
//! - `joint` / `frame`: what the pose source hands us each frame
//! - `exercise`: the declarative, serializable exercise definition
//! - `rule`: the validated form of an exercise definition
//! - `stage`: per-family movement stages

mod exercise;
mod frame;
mod joint;
mod rule;
mod stage;

pub use exercise::{AngleCombination, ExerciseConfig, ExerciseType, FeedbackColor, PostureGate};
pub use frame::Frame;
pub use joint::{JointId, Point2D};
pub use rule::{
    AngleRepRule, BandDirection, CompiledExercise, DistanceBand, GateRule, HoldRule, PairFeedback,
    RecognitionRule, RepFeedback, Triplet, TwistRule,
};
pub use stage::{BurpeePhase, Stage, TwistStage};

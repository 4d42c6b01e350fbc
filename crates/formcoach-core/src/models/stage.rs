// ABOUTME: Movement stage enumerations tracked across frames by the classifier
// ABOUTME: Primary two-extreme stage, burpee phase cycle, and twist side stage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which extreme of a movement the athlete was last seen at.
///
/// Each family uses one pair: angle and height families use `Up`/`Down`,
/// bird-dog and plank jacks `Out`/`In`, mountain climbers `Forward`/`Back`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Upper extreme (or shoulder-tap contact)
    Up,
    /// Lower extreme (or hand released)
    Down,
    /// Limbs extended away from the body
    Out,
    /// Limbs drawn back to the body
    In,
    /// Knee driven to the elbow
    Forward,
    /// Leg returned behind
    Back,
}

impl Stage {
    /// Stage every attempt starts in: `Down` when stages are inverted, else `Up`
    #[must_use]
    pub const fn initial(invert_stages: bool) -> Self {
        if invert_stages {
            Self::Down
        } else {
            Self::Up
        }
    }

    /// Lowercase name used in feedback tuples
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Out => "out",
            Self::In => "in",
            Self::Forward => "forward",
            Self::Back => "back",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five-phase burpee cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BurpeePhase {
    /// Standing, waiting for the squat
    #[default]
    Start,
    /// Dropped into the squat
    Squat,
    /// Legs kicked back into plank
    Plank,
    /// Bottom of the push-up
    Pushup,
    /// Legs jumped back under the hips
    ReturnSquat,
}

impl BurpeePhase {
    /// Lowercase name used in feedback tuples
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Squat => "squat",
            Self::Plank => "plank",
            Self::Pushup => "pushup",
            Self::ReturnSquat => "return_squat",
        }
    }
}

impl fmt::Display for BurpeePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side the torso is currently twisted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwistStage {
    /// Shoulders square
    #[default]
    Center,
    /// Twisted past the left threshold
    Left,
    /// Twisted past the right threshold
    Right,
}

impl TwistStage {
    /// Lowercase name used in feedback tuples
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for TwistStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

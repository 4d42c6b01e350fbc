// ABOUTME: Skeletal joint identifiers and normalized 2D landmark points
// ABOUTME: Maps the tracked joints onto the 33-landmark pose-model index space
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A landmark position in normalized image space.
///
/// Both coordinates are nominally in `[0, 1]`, origin top-left, `y` growing
/// downward. Values are not clamped: pose models report slightly
/// out-of-frame joints with coordinates outside that range.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    /// Horizontal position, 0 = left edge
    pub x: f64,
    /// Vertical position, 0 = top edge
    pub y: f64,
}

impl Point2D {
    /// Create a point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite numbers
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// The skeletal landmarks the engine reads.
///
/// Discriminants are positions in [`JointId::ALL`] and are never renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointId {
    /// Nose tip
    Nose = 0,
    /// Left shoulder
    LeftShoulder = 1,
    /// Right shoulder
    RightShoulder = 2,
    /// Left elbow
    LeftElbow = 3,
    /// Right elbow
    RightElbow = 4,
    /// Left wrist
    LeftWrist = 5,
    /// Right wrist
    RightWrist = 6,
    /// Left hip
    LeftHip = 7,
    /// Right hip
    RightHip = 8,
    /// Left knee
    LeftKnee = 9,
    /// Right knee
    RightKnee = 10,
    /// Left ankle
    LeftAnkle = 11,
    /// Right ankle
    RightAnkle = 12,
    /// Left heel
    LeftHeel = 13,
    /// Right heel
    RightHeel = 14,
}

impl JointId {
    /// Number of tracked joints
    pub const COUNT: usize = 15;

    /// Every joint, in discriminant order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Nose,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
        Self::LeftHeel,
        Self::RightHeel,
    ];

    /// Dense index of this joint, `0..COUNT`
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Index of this joint in the pose model's 33-landmark output
    #[must_use]
    pub const fn landmark_index(self) -> usize {
        match self {
            Self::Nose => 0,
            Self::LeftShoulder => 11,
            Self::RightShoulder => 12,
            Self::LeftElbow => 13,
            Self::RightElbow => 14,
            Self::LeftWrist => 15,
            Self::RightWrist => 16,
            Self::LeftHip => 23,
            Self::RightHip => 24,
            Self::LeftKnee => 25,
            Self::RightKnee => 26,
            Self::LeftAnkle => 27,
            Self::RightAnkle => 28,
            Self::LeftHeel => 29,
            Self::RightHeel => 30,
        }
    }

    /// `snake_case` name, identical to the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
            Self::LeftHeel => "left_heel",
            Self::RightHeel => "right_heel",
        }
    }
}

impl fmt::Display for JointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JointId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|joint| joint.as_str() == s)
            .ok_or_else(|| format!("unknown joint '{s}'"))
    }
}

// ABOUTME: Landmark frame holding one instant of joint positions from the pose source
// ABOUTME: Fixed-size per-joint storage with explicit absence and a name-keyed serde form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::joint::{JointId, Point2D};
use crate::errors::FrameError;

/// Joint positions for a single detection result.
///
/// Any joint may be absent. Serializes as a map from joint name to point,
/// omitting absent joints, so `{}` is a frame in which no pose was found.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<JointId, Point2D>",
    into = "BTreeMap<JointId, Point2D>"
)]
pub struct Frame {
    joints: [Option<Point2D>; JointId::COUNT],
}

impl Frame {
    /// Create an empty frame
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frame from the pose model's dense landmark array.
    ///
    /// Landmarks are looked up by [`JointId::landmark_index`]; a slice too
    /// short to contain a joint leaves that joint absent.
    #[must_use]
    pub fn from_landmark_slice(landmarks: &[Point2D]) -> Self {
        let mut frame = Self::new();
        for joint in JointId::ALL {
            if let Some(point) = landmarks.get(joint.landmark_index()) {
                frame.set(joint, *point);
            }
        }
        frame
    }

    /// Builder-style setter
    #[must_use]
    pub fn with_joint(mut self, joint: JointId, point: Point2D) -> Self {
        self.set(joint, point);
        self
    }

    /// Set a joint position
    pub fn set(&mut self, joint: JointId, point: Point2D) {
        self.joints[joint.index()] = Some(point);
    }

    /// Mark a joint as absent
    pub fn remove(&mut self, joint: JointId) -> Option<Point2D> {
        self.joints[joint.index()].take()
    }

    /// Position of a joint, if present
    #[must_use]
    pub fn get(&self, joint: JointId) -> Option<Point2D> {
        self.joints[joint.index()]
    }

    /// Position of a joint the caller cannot proceed without
    ///
    /// # Errors
    ///
    /// Returns `FrameError::MissingLandmark` if the joint is absent
    pub fn require(&self, joint: JointId) -> Result<Point2D, FrameError> {
        self.get(joint).ok_or(FrameError::MissingLandmark { joint })
    }

    /// First joint of `required` that is absent, if any
    #[must_use]
    pub fn first_missing(&self, required: &[JointId]) -> Option<JointId> {
        required
            .iter()
            .copied()
            .find(|joint| self.get(*joint).is_none())
    }

    /// Whether no joint is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.joints.iter().all(Option::is_none)
    }

    /// Number of joints present
    #[must_use]
    pub fn len(&self) -> usize {
        self.joints.iter().filter(|joint| joint.is_some()).count()
    }

    /// Present joints in discriminant order
    pub fn iter(&self) -> impl Iterator<Item = (JointId, Point2D)> + '_ {
        JointId::ALL
            .iter()
            .filter_map(|joint| self.get(*joint).map(|point| (*joint, point)))
    }
}

impl From<BTreeMap<JointId, Point2D>> for Frame {
    fn from(map: BTreeMap<JointId, Point2D>) -> Self {
        let mut frame = Self::new();
        for (joint, point) in map {
            frame.set(joint, point);
        }
        frame
    }
}

impl From<Frame> for BTreeMap<JointId, Point2D> {
    fn from(frame: Frame) -> Self {
        frame.iter().collect()
    }
}

impl FromIterator<(JointId, Point2D)> for Frame {
    fn from_iter<I: IntoIterator<Item = (JointId, Point2D)>>(iter: I) -> Self {
        let mut frame = Self::new();
        for (joint, point) in iter {
            frame.set(joint, point);
        }
        frame
    }
}

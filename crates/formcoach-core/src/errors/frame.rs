// ABOUTME: Per-frame error types for landmark frames that cannot be classified
// ABOUTME: Covers empty frames, missing required joints, and degenerate geometry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use thiserror::Error;

use crate::models::JointId;

/// Why a single frame was skipped.
///
/// None of these are fatal: the frame is dropped, session state stays as it
/// was, and classification resumes on the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrameError {
    /// The pose source found no person in the image
    #[error("no pose detected")]
    NoPose,

    /// A joint the active exercise needs is absent from the frame
    #[error("required landmark '{joint}' is missing")]
    MissingLandmark {
        /// The first missing joint
        joint: JointId,
    },

    /// A metric came out NaN or infinite (coincident or non-finite points)
    #[error("{metric} is indeterminate for this frame")]
    IndeterminateGeometry {
        /// Which metric could not be computed
        metric: &'static str,
    },
}

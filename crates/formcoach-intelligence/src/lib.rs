// ABOUTME: Exercise recognition engine turning landmark frames into reps, stages, and feedback
// ABOUTME: Provides the validated exercise catalog, per-attempt session state, and the classifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

#![deny(unsafe_code)]

//! # FormCoach Intelligence
//!
//! The engine is three pieces:
//!
//! - [`ExerciseCatalog`]: every exercise definition, validated and compiled
//!   once when the catalog is built
//! - [`SessionState`]: the mutable state of one exercise attempt, owned by
//!   the caller
//! - [`Classifier`]: a stateless per-frame transition function over a
//!   `SessionState`
//!
//! The classifier performs no I/O, holds no global state, and never fails:
//! frames it cannot use are reported as skipped and leave the state as it was.
//!
//! ```
//! use formcoach_core::models::{Frame, JointId, Point2D};
//! use formcoach_intelligence::{Classifier, ExerciseCatalog, SessionState};
//!
//! # fn main() -> Result<(), formcoach_core::ConfigError> {
//! let catalog = ExerciseCatalog::builtin()?;
//! let mut state = SessionState::new(catalog.get("PLANK")?);
//! let frame = Frame::new()
//!     .with_joint(JointId::LeftShoulder, Point2D::new(0.2, 0.5))
//!     .with_joint(JointId::LeftHip, Point2D::new(0.5, 0.5))
//!     .with_joint(JointId::LeftAnkle, Point2D::new(0.8, 0.5));
//! let outcome = Classifier::process(&mut state, &frame);
//! assert_eq!(outcome.feedback, "Hold Position");
//! # Ok(())
//! # }
//! ```

/// Validated exercise definitions and lookup by name
pub mod catalog;

/// Per-frame transition functions, one per exercise family
pub mod classifier;

/// Mutable per-attempt state
pub mod session_state;

pub use catalog::{CatalogEntry, ExerciseCatalog};
pub use classifier::{Classifier, FrameOutcome, FrameStatus};
pub use session_state::SessionState;

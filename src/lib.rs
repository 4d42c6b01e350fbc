// ABOUTME: Main library entry point for FormCoach workout sessions on top of the recognition engine
// ABOUTME: Session controller, workout plans, runtime configuration, frame replay, and app errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

#![deny(unsafe_code)]

//! # FormCoach
//!
//! Exercise recognition and rep counting from 2D pose landmarks.
//!
//! The recognition engine lives in two workspace crates:
//!
//! - `formcoach-core`: landmark frames, geometry, exercise definitions, and
//!   their error types
//! - `formcoach-intelligence`: the validated exercise catalog, per-attempt
//!   `SessionState`, and the per-frame `Classifier`
//!
//! This crate puts a timed workout around the engine:
//!
//! - **Session**: [`session::WorkoutSession`] sequences attempts and rests on a
//!   caller-driven clock
//! - **Plan**: [`plan::WorkoutPlan`] maps program days to exercise lists
//! - **Config**: session timing from the environment, extra exercise
//!   definitions from YAML or JSON
//! - **Replay**: recorded frame streams in JSON Lines form
//!
//! ## Example Usage
//!
//! ```rust
//! use formcoach::config::SessionTiming;
//! use formcoach::errors::AppResult;
//! use formcoach::session::WorkoutSession;
//! use formcoach_intelligence::ExerciseCatalog;
//!
//! fn main() -> AppResult<()> {
//!     let catalog = ExerciseCatalog::builtin()?;
//!     let mut session =
//!         WorkoutSession::new(&catalog, &["SQUAT", "PLANK"], SessionTiming::default(), 0)?;
//!
//!     assert_eq!(session.current_exercise(), Some("SQUAT"));
//!     session.skip();
//!     assert_eq!(session.summaries().len(), 1);
//!     Ok(())
//! }
//! ```

/// Runtime configuration: timing and definition files
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Multi-day workout plans
pub mod plan;

/// Recorded frame streams
pub mod replay;

/// Timed workout session controller
pub mod session;

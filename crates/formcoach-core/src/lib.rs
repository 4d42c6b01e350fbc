// ABOUTME: Core types and constants for the FormCoach exercise recognition workspace
// ABOUTME: Foundation crate with landmark frames, geometry, exercise configs, and error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

#![deny(unsafe_code)]

//! # FormCoach Core
//!
//! Foundation crate providing the shared vocabulary of the FormCoach workspace.
//! Everything in here is pure data or pure arithmetic: no I/O, no clocks, no
//! global state.
//!
//! ## Modules
//!
//! - **models**: joints, landmark frames, exercise configurations, stages, and
//!   the compiled recognition rules the classifier executes
//! - **geometry**: interior angles, distances, and shoulder-line tilt
//! - **errors**: `ConfigError` for catalog validation and `FrameError` for
//!   per-frame anomalies
//! - **constants**: fixed protocol constants and feedback strings

/// Configuration and per-frame error types
pub mod errors;

/// Fixed protocol constants, feedback strings, and configuration keys
pub mod constants;

/// Pure 2D geometry over normalized landmark coordinates
pub mod geometry;

/// Joints, frames, exercise configurations, and recognition rules
pub mod models;

pub use errors::{ConfigError, FrameError};

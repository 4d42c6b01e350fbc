// ABOUTME: Error types for exercise configuration validation and per-frame anomalies
// ABOUTME: Re-exports ConfigError (fatal at catalog load) and FrameError (recovered per frame)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

//! # Error Types
//!
//! Two deliberately separate taxonomies:
//! - `ConfigError` - an exercise definition is unusable. Raised while building
//!   the catalog, never while classifying frames.
//! - `FrameError` - a single frame could not be classified. The caller keeps
//!   its session state unchanged and carries on with the next frame.

mod config;
mod frame;

pub use config::ConfigError;
pub use frame::FrameError;

// ABOUTME: Recorded frame streams in JSON Lines form and helpers to replay them through the engine
// ABOUTME: Replays files in parallel, one independent SessionState each, or drives a workout session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

//! # Frame Replay
//!
//! A replay file holds one JSON object per line:
//!
//! ```text
//! {"t_ms": 1200, "joints": {"left_hip": {"x": 0.41, "y": 0.55}}}
//! ```
//!
//! An empty `joints` object is a frame in which no pose was detected.
//! Timestamps are milliseconds and must never decrease.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use formcoach_core::models::Frame;
use formcoach_intelligence::{CatalogEntry, Classifier, SessionState};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::{AppError, AppResult};
use crate::session::{SessionEvent, WorkoutSession};

/// One timestamped detection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayFrame {
    /// Capture time in milliseconds
    pub t_ms: u64,
    /// Joints detected at that time
    pub joints: Frame,
}

/// Final state after replaying one stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    /// Exercise the stream was classified as
    pub exercise: String,
    /// Frames read
    pub frames: usize,
    /// Frames the classifier could not use
    pub skipped: usize,
    /// Reps counted
    pub reps: u32,
    /// Stage after the last frame
    pub final_stage: &'static str,
    /// Feedback after the last frame
    pub final_feedback: String,
}

/// Parse a JSON Lines frame stream; blank lines are ignored
///
/// # Errors
///
/// Returns `InvalidInput` naming the line for a malformed record or a
/// timestamp earlier than the one before it, and `StorageError` if reading fails
pub fn parse_frames<R: BufRead>(reader: R, origin: &str) -> AppResult<Vec<ReplayFrame>> {
    let mut frames: Vec<ReplayFrame> = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let frame: ReplayFrame = serde_json::from_str(&line).map_err(|error| {
            AppError::invalid_input(format!("{origin}:{line_number}: {error}")).with_source(error)
        })?;

        if let Some(previous) = frames.last() {
            if frame.t_ms < previous.t_ms {
                return Err(AppError::invalid_input(format!(
                    "{origin}:{line_number}: timestamp {} is earlier than {}",
                    frame.t_ms, previous.t_ms
                )));
            }
        }
        frames.push(frame);
    }

    Ok(frames)
}

/// Read a frame stream from disk
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed
pub fn read_frames(path: &Path) -> AppResult<Vec<ReplayFrame>> {
    let file = File::open(path)?;
    let frames = parse_frames(BufReader::new(file), &path.display().to_string())?;
    debug!(path = %path.display(), frames = frames.len(), "Frame stream read");
    Ok(frames)
}

/// Classify a stream with a fresh attempt at `entry`
#[must_use]
pub fn replay_frames(entry: Arc<CatalogEntry>, frames: &[ReplayFrame]) -> ReplaySummary {
    let mut state = SessionState::new(entry);
    let skipped = frames
        .iter()
        .filter(|frame| Classifier::process(&mut state, &frame.joints).was_skipped())
        .count();

    ReplaySummary {
        exercise: state.entry().name().to_owned(),
        frames: frames.len(),
        skipped,
        reps: state.rep_count(),
        final_stage: state.stage_label(),
        final_feedback: state.feedback().to_owned(),
    }
}

/// Replay every file in parallel, each through its own `SessionState`.
///
/// Results come back in the order of `paths`; one unreadable file does not
/// stop the others.
#[must_use]
pub fn replay_files(
    entry: &Arc<CatalogEntry>,
    paths: &[PathBuf],
) -> Vec<(PathBuf, AppResult<ReplaySummary>)> {
    info!(exercise = %entry.name(), files = paths.len(), "Replaying frame files");
    paths
        .par_iter()
        .map(|path| {
            let summary = read_frames(path).map(|frames| replay_frames(Arc::clone(entry), &frames));
            (path.clone(), summary)
        })
        .collect()
}

/// Drive `session` from a timestamped stream.
///
/// The session clock starts at the first frame; each later frame first
/// advances the clock by the gap since the previous one, then is submitted.
pub fn run_workout(session: &mut WorkoutSession, frames: &[ReplayFrame]) -> Vec<SessionEvent> {
    let mut events = Vec::new();
    let Some(first) = frames.first() else {
        return events;
    };

    let mut previous_ms = first.t_ms;
    for frame in frames {
        events.extend(session.advance(frame.t_ms.saturating_sub(previous_ms)));
        previous_ms = frame.t_ms;
        session.submit_frame(&frame.joints);
        if session.is_complete() {
            break;
        }
    }
    events
}

// ABOUTME: Workout session controller sequencing exercise attempts and rests on a caller-driven clock
// ABOUTME: Owns one SessionState per attempt, forwards frames, and records per-attempt summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

//! # Workout Session
//!
//! A [`WorkoutSession`] walks an ordered list of exercises, alternating an
//! exercise phase and a rest phase. It reads no clock: the caller reports
//! elapsed time through [`WorkoutSession::advance`], and time left over when
//! a phase ends is carried into the next one, so a single large step can
//! cross several boundaries.
//!
//! Each attempt gets a fresh [`SessionState`]; nothing carries over between
//! attempts except the summaries.

use std::mem;
use std::sync::Arc;

use formcoach_core::models::Frame;
use formcoach_intelligence::{
    CatalogEntry, Classifier, ExerciseCatalog, FrameOutcome, SessionState,
};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::SessionTiming;
use crate::constants::timing::MS_PER_SECOND;
use crate::errors::AppResult;

/// Where the session is in its schedule
#[derive(Debug, Clone)]
pub enum SessionPhase {
    /// An attempt is running and accepts frames
    Exercising {
        /// Position in the exercise list
        index: usize,
        /// State of the running attempt
        state: SessionState,
        /// Time left in this attempt
        remaining_ms: u64,
    },
    /// Resting before the exercise at `next_index`
    Resting {
        /// Exercise that starts when the rest ends
        next_index: usize,
        /// Time left in this rest
        remaining_ms: u64,
    },
    /// Every exercise has been attempted
    Complete,
}

/// Why an attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletedBy {
    /// The attempt's time ran out
    Timer,
    /// The caller ended it early
    Skipped,
}

/// Result of one finished attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttemptSummary {
    /// Exercise name
    pub exercise: String,
    /// Reps counted during the attempt
    pub reps: u32,
    /// How the attempt ended
    pub completed_by: CompletedBy,
}

/// Phase change reported by `advance` and `skip`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A new attempt began
    ExerciseStarted {
        /// Position in the exercise list
        index: usize,
        /// Exercise name
        exercise: String,
    },
    /// A rest began
    RestStarted {
        /// Exercise that follows the rest
        next_exercise: String,
    },
    /// An attempt ended
    AttemptFinished(AttemptSummary),
    /// No exercises remain
    WorkoutComplete,
}

/// Timed sequence of exercise attempts
#[derive(Debug, Clone)]
pub struct WorkoutSession {
    id: Uuid,
    exercises: Vec<Arc<CatalogEntry>>,
    timing: SessionTiming,
    phase: SessionPhase,
    summaries: Vec<AttemptSummary>,
}

impl WorkoutSession {
    /// Start a session at `start_index` of `names`.
    ///
    /// Every name is looked up before anything starts. A `start_index` past
    /// the end gives a session that is already complete.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for the first name the catalog does not have
    pub fn new<S: AsRef<str>>(
        catalog: &ExerciseCatalog,
        names: &[S],
        timing: SessionTiming,
        start_index: usize,
    ) -> AppResult<Self> {
        let exercises = names
            .iter()
            .map(|name| catalog.get(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let id = Uuid::new_v4();
        let phase = exercises
            .get(start_index)
            .map_or(SessionPhase::Complete, |entry| SessionPhase::Exercising {
                index: start_index,
                state: SessionState::new(Arc::clone(entry)),
                remaining_ms: timing.exercise_duration_ms,
            });

        info!(
            session_id = %id,
            exercises = exercises.len(),
            start_index,
            exercise_ms = timing.exercise_duration_ms,
            rest_ms = timing.rest_duration_ms,
            "Workout session created"
        );

        Ok(Self {
            id,
            exercises,
            timing,
            phase,
            summaries: Vec::new(),
        })
    }

    /// Unique id of this session, used in logs
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    /// Timing this session was built with
    #[must_use]
    pub const fn timing(&self) -> SessionTiming {
        self.timing
    }

    /// Whether every exercise has been attempted
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.phase, SessionPhase::Complete)
    }

    /// Name of the exercise being attempted, if any
    #[must_use]
    pub fn current_exercise(&self) -> Option<&str> {
        match &self.phase {
            SessionPhase::Exercising { state, .. } => Some(state.entry().name()),
            SessionPhase::Resting { .. } | SessionPhase::Complete => None,
        }
    }

    /// State of the running attempt, if any
    #[must_use]
    pub const fn current_state(&self) -> Option<&SessionState> {
        match &self.phase {
            SessionPhase::Exercising { state, .. } => Some(state),
            SessionPhase::Resting { .. } | SessionPhase::Complete => None,
        }
    }

    /// Whole seconds to show on the countdown (`remaining / 1000 + 1`);
    /// `None` once complete
    #[must_use]
    pub const fn remaining_display_secs(&self) -> Option<u64> {
        match self.phase {
            SessionPhase::Exercising { remaining_ms, .. }
            | SessionPhase::Resting { remaining_ms, .. } => Some(remaining_ms / MS_PER_SECOND + 1),
            SessionPhase::Complete => None,
        }
    }

    /// Finished attempts, oldest first
    #[must_use]
    pub fn summaries(&self) -> &[AttemptSummary] {
        &self.summaries
    }

    /// Reps over all finished attempts
    #[must_use]
    pub fn total_reps(&self) -> u32 {
        self.summaries
            .iter()
            .fold(0_u32, |total, summary| total.saturating_add(summary.reps))
    }

    /// Classify a frame for the running attempt.
    ///
    /// Frames that arrive while resting or after completion are ignored.
    pub fn submit_frame(&mut self, frame: &Frame) -> Option<FrameOutcome> {
        match &mut self.phase {
            SessionPhase::Exercising { state, .. } => Some(Classifier::process(state, frame)),
            SessionPhase::Resting { .. } | SessionPhase::Complete => None,
        }
    }

    /// Move the clock forward by `elapsed_ms`, crossing as many phase
    /// boundaries as that time covers
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        let mut elapsed_ms = elapsed_ms;

        loop {
            let remaining_ms = match &mut self.phase {
                SessionPhase::Exercising { remaining_ms, .. }
                | SessionPhase::Resting { remaining_ms, .. } => remaining_ms,
                SessionPhase::Complete => break,
            };
            if elapsed_ms < *remaining_ms {
                *remaining_ms -= elapsed_ms;
                break;
            }
            elapsed_ms -= *remaining_ms;
            self.end_phase(CompletedBy::Timer, &mut events);
        }

        events
    }

    /// End the current attempt or rest now
    pub fn skip(&mut self) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        self.end_phase(CompletedBy::Skipped, &mut events);
        events
    }

    fn end_phase(&mut self, reason: CompletedBy, events: &mut Vec<SessionEvent>) {
        match mem::replace(&mut self.phase, SessionPhase::Complete) {
            SessionPhase::Exercising { index, state, .. } => {
                self.finish_attempt(index, &state, reason, events);
            }
            SessionPhase::Resting { next_index, .. } => self.start_attempt(next_index, events),
            SessionPhase::Complete => {}
        }
    }

    fn finish_attempt(
        &mut self,
        index: usize,
        state: &SessionState,
        completed_by: CompletedBy,
        events: &mut Vec<SessionEvent>,
    ) {
        let summary = AttemptSummary {
            exercise: state.entry().name().to_owned(),
            reps: state.rep_count(),
            completed_by,
        };
        info!(
            session_id = %self.id,
            exercise = %summary.exercise,
            reps = summary.reps,
            completed_by = ?completed_by,
            "Attempt finished"
        );
        self.summaries.push(summary.clone());
        events.push(SessionEvent::AttemptFinished(summary));

        let next_index = index + 1;
        if let Some(next) = self.exercises.get(next_index) {
            debug!(session_id = %self.id, next_exercise = %next.name(), "Rest started");
            events.push(SessionEvent::RestStarted {
                next_exercise: next.name().to_owned(),
            });
            self.phase = SessionPhase::Resting {
                next_index,
                remaining_ms: self.timing.rest_duration_ms,
            };
        } else {
            info!(
                session_id = %self.id,
                total_reps = self.total_reps(),
                "Workout complete"
            );
            events.push(SessionEvent::WorkoutComplete);
        }
    }

    fn start_attempt(&mut self, index: usize, events: &mut Vec<SessionEvent>) {
        let Some(entry) = self.exercises.get(index) else {
            events.push(SessionEvent::WorkoutComplete);
            return;
        };
        debug!(session_id = %self.id, exercise = %entry.name(), index, "Exercise started");
        events.push(SessionEvent::ExerciseStarted {
            index,
            exercise: entry.name().to_owned(),
        });
        self.phase = SessionPhase::Exercising {
            index,
            state: SessionState::new(Arc::clone(entry)),
            remaining_ms: self.timing.exercise_duration_ms,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(names: &[&str], start_index: usize) -> WorkoutSession {
        let catalog = ExerciseCatalog::builtin().unwrap();
        let timing = SessionTiming {
            exercise_duration_ms: 3_000,
            rest_duration_ms: 1_000,
        };
        WorkoutSession::new(&catalog, names, timing, start_index).unwrap()
    }

    #[test]
    fn test_starts_exercising_at_start_index() {
        let session = session(&["SQUAT", "PLANK"], 1);
        assert_eq!(session.current_exercise(), Some("PLANK"));
        assert_eq!(session.remaining_display_secs(), Some(4));
    }

    #[test]
    fn test_start_index_past_end_is_complete() {
        let session = session(&["SQUAT"], 5);
        assert!(session.is_complete());
        assert_eq!(session.remaining_display_secs(), None);
    }

    #[test]
    fn test_countdown_display_rounds_up() {
        let mut session = session(&["SQUAT"], 0);
        session.advance(2_001);
        assert_eq!(session.remaining_display_secs(), Some(1));
        session.advance(998);
        assert_eq!(session.remaining_display_secs(), Some(1));
    }

    #[test]
    fn test_zero_durations_collapse_to_complete() {
        let catalog = ExerciseCatalog::builtin().unwrap();
        let timing = SessionTiming {
            exercise_duration_ms: 0,
            rest_duration_ms: 0,
        };
        let mut session = WorkoutSession::new(&catalog, &["SQUAT", "PLANK"], timing, 0).unwrap();
        let events = session.advance(0);
        assert!(session.is_complete());
        assert_eq!(session.summaries().len(), 2);
        assert_eq!(events.last(), Some(&SessionEvent::WorkoutComplete));
    }
}

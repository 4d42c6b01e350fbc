// ABOUTME: Workout command for the formcoach CLI
// ABOUTME: Runs one plan day as a timed session driven by a recorded frame file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use std::path::Path;

use formcoach::config::SessionTiming;
use formcoach::errors::AppResult;
use formcoach::plan::{display_title, WorkoutPlan};
use formcoach::replay::{read_frames, run_workout};
use formcoach::session::WorkoutSession;
use formcoach_intelligence::ExerciseCatalog;
use tracing::info;

use crate::helpers::display::{display_event, display_summaries, paint};

/// Run `day` of the plan at `plan_path` against the frames in `frames_path`
pub fn run(
    catalog: &ExerciseCatalog,
    timing: SessionTiming,
    plan_path: &Path,
    day: &str,
    frames_path: &Path,
    start: usize,
) -> AppResult<()> {
    let plan = WorkoutPlan::load(plan_path)?;
    let exercises = plan.exercises_for(day)?;
    let frames = read_frames(frames_path)?;

    let mut session = WorkoutSession::new(catalog, exercises, timing, start)?;
    info!(session_id = %session.id(), day, frames = frames.len(), "Starting workout");

    println!("{}: {} exercises", display_title(day), exercises.len());
    if let Some(exercise) = session.current_exercise() {
        println!("> {:02} {exercise}", start + 1);
    }

    for event in run_workout(&mut session, &frames) {
        display_event(&event);
    }

    if let Some(state) = session.current_state() {
        println!(
            "Recording ended during {}: {} reps so far, {}",
            state.entry().name(),
            state.rep_count(),
            paint(state.feedback(), state.color())
        );
    }

    display_summaries(session.summaries());
    Ok(())
}

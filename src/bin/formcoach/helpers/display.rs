// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors
// ABOUTME: Output formatting helpers for the formcoach CLI
// ABOUTME: Maps feedback colors to RGB and prints events and attempt summaries

use std::io::{self, IsTerminal};

use formcoach::constants::palette;
use formcoach::session::{AttemptSummary, CompletedBy, SessionEvent};
use formcoach_core::models::FeedbackColor;

/// RGB triple for a feedback color
pub const fn color_rgb(color: FeedbackColor) -> (u8, u8, u8) {
    match color {
        FeedbackColor::Neutral => palette::NEUTRAL,
        FeedbackColor::Correct => palette::CORRECT,
        FeedbackColor::Transition => palette::TRANSITION,
        FeedbackColor::Incorrect => palette::INCORRECT,
    }
}

/// `text` in the feedback color when stdout is a terminal, plain otherwise
pub fn paint(text: &str, color: FeedbackColor) -> String {
    if !io::stdout().is_terminal() {
        return text.to_owned();
    }
    let (r, g, b) = color_rgb(color);
    format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[0m")
}

/// One line per session event
pub fn display_event(event: &SessionEvent) {
    match event {
        SessionEvent::ExerciseStarted { index, exercise } => {
            println!("> {:02} {exercise}", index + 1);
        }
        SessionEvent::RestStarted { next_exercise } => {
            println!("  rest, next up: {next_exercise}");
        }
        SessionEvent::AttemptFinished(summary) => {
            println!(
                "  {} reps ({})",
                summary.reps,
                completed_label(summary.completed_by)
            );
        }
        SessionEvent::WorkoutComplete => println!("Workout complete"),
    }
}

/// Table of finished attempts with a total
pub fn display_summaries(summaries: &[AttemptSummary]) {
    println!("\n{:<28} {:>5}  {}", "EXERCISE", "REPS", "ENDED BY");
    println!("{}", "=".repeat(48));
    for summary in summaries {
        println!(
            "{:<28} {:>5}  {}",
            summary.exercise,
            summary.reps,
            completed_label(summary.completed_by)
        );
    }
    let total: u32 = summaries.iter().map(|summary| summary.reps).sum();
    println!("{}", "=".repeat(48));
    println!("{:<28} {total:>5}", "TOTAL");
}

const fn completed_label(completed_by: CompletedBy) -> &'static str {
    match completed_by {
        CompletedBy::Timer => "timer",
        CompletedBy::Skipped => "skipped",
    }
}

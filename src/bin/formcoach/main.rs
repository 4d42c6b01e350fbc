// ABOUTME: FormCoach CLI - inspect the exercise catalog, replay recorded frames, and run workouts
// ABOUTME: Parses flags, sets up logging and configuration, then dispatches to a command module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors
//!
//! Usage:
//! ```bash
//! # List every exercise the catalog offers
//! formcoach exercises list
//!
//! # Show one exercise definition as JSON
//! formcoach exercises show SQUAT
//!
//! # Count squats in recorded frame streams, one attempt per file
//! formcoach replay --exercise SQUAT take1.jsonl take2.jsonl
//!
//! # Run day 1 of a plan against a recording
//! formcoach workout --plan plan.yaml --day Day_1 --frames session.jsonl
//!
//! # Add or override exercise definitions
//! formcoach --catalog extra.yaml exercises list
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use formcoach::config::SessionTiming;
use formcoach::logging::LoggingConfig;
use tracing::info;

use helpers::catalog::load_catalog;

#[derive(Parser)]
#[command(
    name = "formcoach",
    version,
    about = "FormCoach exercise recognition CLI",
    long_about = "Recognize exercises and count reps from recorded 2D pose landmark streams."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Extra exercise definitions (YAML or JSON) merged into the built-in catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Exercise attempt length override in milliseconds
    #[arg(long, global = true)]
    exercise_duration_ms: Option<u64>,

    /// Rest length override in milliseconds
    #[arg(long, global = true)]
    rest_duration_ms: Option<u64>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Exercise catalog commands
    Exercises {
        #[command(subcommand)]
        action: ExercisesCommand,
    },

    /// Count reps in recorded frame files, each as its own attempt
    Replay {
        /// Exercise name as listed by `exercises list`
        #[arg(long)]
        exercise: String,

        /// JSON Lines frame files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Run one day of a workout plan against a recorded frame file
    Workout {
        /// Plan file (YAML or JSON)
        #[arg(long)]
        plan: PathBuf,

        /// Day key, e.g. `Day_1`
        #[arg(long)]
        day: String,

        /// JSON Lines frame file supplying both frames and elapsed time
        #[arg(long)]
        frames: PathBuf,

        /// Position in the day's list to start from
        #[arg(long, default_value = "0")]
        start: usize,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ExercisesCommand {
    /// List exercise names and families
    List,

    /// Print one exercise definition as JSON
    Show {
        /// Exercise name
        name: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env().verbose(cli.verbose).init()?;
    info!("FormCoach CLI");

    let timing =
        SessionTiming::from_env()?.with_overrides(cli.exercise_duration_ms, cli.rest_duration_ms);
    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Command::Exercises { action } => match action {
            ExercisesCommand::List => commands::exercises::list(&catalog),
            ExercisesCommand::Show { name } => commands::exercises::show(&catalog, &name)?,
        },
        Command::Replay { exercise, files } => {
            commands::replay::run(&catalog, &exercise, &files)?;
        }
        Command::Workout {
            plan,
            day,
            frames,
            start,
        } => {
            commands::workout::run(&catalog, timing, &plan, &day, &frames, start)?;
        }
    }

    Ok(())
}

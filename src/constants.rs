// ABOUTME: Application constants for the session controller, configuration, and CLI
// ABOUTME: Environment variable names, timing defaults, and the display palette
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

/// Service name used in structured logs
pub const SERVICE_NAME: &str = "formcoach";

/// Session timing defaults and their environment overrides
pub mod timing {
    /// Length of one exercise attempt
    pub const DEFAULT_EXERCISE_DURATION_MS: u64 = 30_000;

    /// Rest between attempts
    pub const DEFAULT_REST_DURATION_MS: u64 = 15_000;

    /// Overrides `DEFAULT_EXERCISE_DURATION_MS`
    pub const EXERCISE_DURATION_ENV: &str = "FORMCOACH_EXERCISE_DURATION_MS";

    /// Overrides `DEFAULT_REST_DURATION_MS`
    pub const REST_DURATION_ENV: &str = "FORMCOACH_REST_DURATION_MS";

    /// Milliseconds per displayed countdown second
    pub const MS_PER_SECOND: u64 = 1_000;
}

/// Workout plan day naming
pub mod plan {
    /// Separator between the day prefix and its number in plan keys (`Day_1`)
    pub const DAY_SEPARATOR: char = '_';

    /// Day number used when a key has no parsable suffix
    pub const FALLBACK_DAY_NUMBER: u32 = 1;
}

/// RGB triples the CLI uses for feedback colors
pub mod palette {
    /// Resting or ready
    pub const NEUTRAL: (u8, u8, u8) = (245, 117, 66);
    /// Rep counted or form correct
    pub const CORRECT: (u8, u8, u8) = (0, 255, 0);
    /// Mid-movement
    pub const TRANSITION: (u8, u8, u8) = (255, 255, 0);
    /// Posture violation or wrong form
    pub const INCORRECT: (u8, u8, u8) = (255, 0, 0);
}

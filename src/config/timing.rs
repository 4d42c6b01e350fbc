// ABOUTME: Exercise and rest durations for timed workout sessions
// ABOUTME: Defaults overridable from the environment; unparsable values are rejected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use std::env;

use serde::{Deserialize, Serialize};

use crate::constants::timing::{
    DEFAULT_EXERCISE_DURATION_MS, DEFAULT_REST_DURATION_MS, EXERCISE_DURATION_ENV,
    REST_DURATION_ENV,
};
use crate::errors::{AppError, AppResult};

/// How long each attempt and each rest lasts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTiming {
    /// Length of one exercise attempt in milliseconds
    pub exercise_duration_ms: u64,
    /// Rest between attempts in milliseconds
    pub rest_duration_ms: u64,
}

impl Default for SessionTiming {
    fn default() -> Self {
        Self {
            exercise_duration_ms: DEFAULT_EXERCISE_DURATION_MS,
            rest_duration_ms: DEFAULT_REST_DURATION_MS,
        }
    }
}

impl SessionTiming {
    /// Load timing from `FORMCOACH_EXERCISE_DURATION_MS` and
    /// `FORMCOACH_REST_DURATION_MS`, falling back to the defaults when unset
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a variable is set but is not a whole number
    /// of milliseconds
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();
        Ok(Self {
            exercise_duration_ms: duration_from_env(
                EXERCISE_DURATION_ENV,
                defaults.exercise_duration_ms,
            )?,
            rest_duration_ms: duration_from_env(REST_DURATION_ENV, defaults.rest_duration_ms)?,
        })
    }

    /// Apply explicit overrides, e.g. from command-line flags
    #[must_use]
    pub fn with_overrides(self, exercise_ms: Option<u64>, rest_ms: Option<u64>) -> Self {
        Self {
            exercise_duration_ms: exercise_ms.unwrap_or(self.exercise_duration_ms),
            rest_duration_ms: rest_ms.unwrap_or(self.rest_duration_ms),
        }
    }
}

fn duration_from_env(key: &str, default: u64) -> AppResult<u64> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|error| {
            AppError::config(format!("{key}='{raw}' is not a duration in milliseconds"))
                .with_source(error)
        }),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(error) => {
            Err(AppError::config(format!("{key} is not valid unicode")).with_source(error))
        }
    }
}

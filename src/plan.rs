// ABOUTME: Multi-day workout plans mapping day keys like "Day_1" to ordered exercise names
// ABOUTME: Numeric day ordering, display titles, and loading from YAML or JSON files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use std::collections::BTreeMap;
use std::path::Path;

use formcoach_intelligence::ExerciseCatalog;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::read_document;
use crate::constants::plan::{DAY_SEPARATOR, FALLBACK_DAY_NUMBER};
use crate::errors::{AppError, AppResult};

/// Exercises to perform on each day of a program
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Day key (`Day_1`) to exercise names in performance order
    pub days: BTreeMap<String, Vec<String>>,
}

/// Number after the first `_` in a day key, or 1 when there is none
#[must_use]
pub fn day_number(day: &str) -> u32 {
    day.split_once(DAY_SEPARATOR)
        .and_then(|(_, suffix)| suffix.trim().parse().ok())
        .unwrap_or(FALLBACK_DAY_NUMBER)
}

/// `"Day_1"` becomes `"Day 01"`
#[must_use]
pub fn display_title(day: &str) -> String {
    format!("Day {:02}", day_number(day))
}

impl WorkoutPlan {
    /// Load a plan from a `.json`, `.yaml`, or `.yml` file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not have the
    /// `{ days: { Day_1: [...] } }` shape
    pub fn load(path: &Path) -> AppResult<Self> {
        let plan: Self = read_document(path)?;
        info!(path = %path.display(), days = plan.days.len(), "Workout plan loaded");
        Ok(plan)
    }

    /// Day keys in program order: "Day_2" before "Day_10"
    #[must_use]
    pub fn ordered_days(&self) -> Vec<&str> {
        self.ordered_entries()
            .into_iter()
            .map(|(day, _)| day)
            .collect()
    }

    /// Days with their exercises, in program order
    #[must_use]
    pub fn ordered_entries(&self) -> Vec<(&str, &[String])> {
        let mut entries: Vec<(&str, &[String])> = self
            .days
            .iter()
            .map(|(day, names)| (day.as_str(), names.as_slice()))
            .collect();
        entries.sort_by(|(a, _), (b, _)| day_number(a).cmp(&day_number(b)).then_with(|| a.cmp(b)));
        entries
    }

    /// Exercise names for `day`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the plan has no such day
    pub fn exercises_for(&self, day: &str) -> AppResult<&[String]> {
        self.days
            .get(day)
            .map(Vec::as_slice)
            .ok_or_else(|| AppError::not_found(format!("Day '{day}'")))
    }

    /// Check every exercise name against `catalog`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` naming the first day and exercise the
    /// catalog cannot offer
    pub fn validate(&self, catalog: &ExerciseCatalog) -> AppResult<()> {
        for (day, names) in self.ordered_entries() {
            let missing = names.iter().find(|name| !catalog.contains(name));
            if let Some(name) = missing {
                return Err(AppError::not_found(format!(
                    "Exercise '{name}' planned for {day}"
                )));
            }
        }
        Ok(())
    }
}

// ABOUTME: Exercise catalog holding validated, compiled exercise definitions keyed by name
// ABOUTME: Eager validation at build time, override-by-name extension, and exact-name lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

mod builtin;

use std::collections::HashMap;
use std::sync::Arc;

use formcoach_core::models::{
    CompiledExercise, ExerciseConfig, ExerciseType, GateRule, JointId, RecognitionRule,
};
use formcoach_core::ConfigError;
use serde::Serialize;
use tracing::{info, warn};

pub use builtin::builtin_configs;

/// One catalog exercise: the definition as written plus its compiled rule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    config: ExerciseConfig,
    compiled: CompiledExercise,
}

impl CatalogEntry {
    /// Validate and compile a definition
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found in the definition
    pub fn new(config: ExerciseConfig) -> Result<Self, ConfigError> {
        let compiled = config.compile()?;
        Ok(Self { config, compiled })
    }

    /// Exercise name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Recognition family
    #[must_use]
    pub const fn exercise_type(&self) -> ExerciseType {
        self.config.exercise_type
    }

    /// Definition as written
    #[must_use]
    pub const fn config(&self) -> &ExerciseConfig {
        &self.config
    }

    /// Compiled recognition rule
    #[must_use]
    pub const fn rule(&self) -> &RecognitionRule {
        &self.compiled.rule
    }

    /// Compiled posture gate, if any
    #[must_use]
    pub const fn gate(&self) -> Option<&GateRule> {
        self.compiled.gate.as_ref()
    }

    /// Every joint a frame needs for this exercise, gate included
    #[must_use]
    pub fn required_joints(&self) -> &[JointId] {
        &self.compiled.required_joints
    }
}

/// The set of exercises that can be offered to a user.
///
/// Every entry has passed validation, so nothing looked up from a catalog can
/// fail for configuration reasons later on.
#[derive(Debug, Clone, Default)]
pub struct ExerciseCatalog {
    entries: Vec<Arc<CatalogEntry>>,
    by_name: HashMap<String, usize>,
}

impl ExerciseCatalog {
    /// The built-in catalog of 50 exercises
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a built-in definition fails validation
    pub fn builtin() -> Result<Self, ConfigError> {
        let catalog = Self::from_configs(builtin_configs())?;
        info!(
            exercises = catalog.len(),
            "Loaded built-in exercise catalog"
        );
        Ok(catalog)
    }

    /// Build a catalog, rejecting it entirely if any definition is invalid
    ///
    /// # Errors
    ///
    /// Returns the first invalid definition's `ConfigError`, or
    /// `DuplicateExercise` if two definitions share a name
    pub fn from_configs<I>(configs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = ExerciseConfig>,
    {
        let mut catalog = Self::default();
        for config in configs {
            if catalog.by_name.contains_key(&config.name) {
                return Err(ConfigError::DuplicateExercise {
                    exercise: config.name,
                });
            }
            catalog.insert(CatalogEntry::new(config)?);
        }
        Ok(catalog)
    }

    /// Add or replace definitions, keeping only the ones that validate.
    ///
    /// A definition whose name already exists replaces the existing entry.
    /// Invalid definitions are left out of the catalog and returned, so an
    /// exercise with a broken definition is never offered.
    pub fn extend<I>(&mut self, configs: I) -> Vec<ConfigError>
    where
        I: IntoIterator<Item = ExerciseConfig>,
    {
        let mut rejected = Vec::new();
        for config in configs {
            match CatalogEntry::new(config) {
                Ok(entry) => self.insert(entry),
                Err(error) => {
                    warn!(exercise = %error.exercise(), %error, "Rejected exercise definition");
                    rejected.push(error);
                }
            }
        }
        rejected
    }

    fn insert(&mut self, entry: CatalogEntry) {
        let entry = Arc::new(entry);
        if let Some(&position) = self.by_name.get(entry.name()) {
            self.entries[position] = entry;
        } else {
            self.by_name
                .insert(entry.name().to_owned(), self.entries.len());
            self.entries.push(entry);
        }
    }

    /// Look an exercise up by exact name
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownExercise` if no entry has that name
    pub fn get(&self, name: &str) -> Result<Arc<CatalogEntry>, ConfigError> {
        self.by_name
            .get(name)
            .map(|&position| Arc::clone(&self.entries[position]))
            .ok_or_else(|| ConfigError::unknown_exercise(name))
    }

    /// Whether an exercise with this exact name exists
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Exercise names in catalog order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.name())
    }

    /// Entries in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CatalogEntry>> + '_ {
        self.entries.iter()
    }

    /// Number of exercises
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no exercises
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_validates() {
        let catalog = ExerciseCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 50);
        assert!(catalog.contains("SQUAT"));
        assert!(catalog.contains("T-POSE HOLD"));
    }

    #[test]
    fn test_lookup_is_exact() {
        let catalog = ExerciseCatalog::builtin().unwrap();
        assert!(catalog.get("squat").is_err());
        assert_eq!(
            catalog.get("SQUATS").unwrap_err(),
            ConfigError::unknown_exercise("SQUATS")
        );
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let mut configs = builtin_configs();
        configs.push(configs[0].clone());
        assert!(matches!(
            ExerciseCatalog::from_configs(configs),
            Err(ConfigError::DuplicateExercise { .. })
        ));
    }
}

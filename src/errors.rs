// ABOUTME: Application-level error type shared by the session controller, loaders, and CLI
// ABOUTME: Wraps engine configuration errors and I/O or parse failures behind stable error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

//! # Unified Error Handling
//!
//! The engine crates have their own narrow error enums (`ConfigError`,
//! `FrameError`). Everything above the engine (plan and catalog files,
//! frame replay, environment configuration) reports an [`AppError`] carrying
//! an [`ErrorCode`] so callers can branch on the category without matching
//! message text.

use std::error::Error as StdError;
use std::path::Path;
use std::{fmt, io};

use formcoach_core::ConfigError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Caller-supplied value is unusable
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,

    // Resource Management (4000-4999)
    /// Named exercise, day, or file does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Configuration (6000-6999)
    /// Required configuration is absent
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing = 6001,
    /// Configuration is present but malformed
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Reading or writing a file failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// JSON or YAML could not be parsed or produced
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Malformed configuration value
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Configuration file the caller asked for does not exist
    #[must_use]
    pub fn config_missing(path: &Path) -> Self {
        Self::new(
            ErrorCode::ConfigMissing,
            format!("{} does not exist", path.display()),
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = if matches!(error, ConfigError::UnknownExercise { .. }) {
            ErrorCode::ResourceNotFound
        } else {
            ErrorCode::ConfigInvalid
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(
            ErrorCode::SerializationError,
            format!("JSON error: {error}"),
        )
        .with_source(error)
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::new(
            ErrorCode::SerializationError,
            format!("YAML error: {error}"),
        )
        .with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        let code = if error.kind() == io::ErrorKind::NotFound {
            ErrorCode::ResourceNotFound
        } else {
            ErrorCode::StorageError
        };
        Self::new(code, format!("I/O error: {error}")).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_description() {
        let error = AppError::not_found("Exercise 'PLONK'");
        assert_eq!(
            error.to_string(),
            "The requested resource was not found: Exercise 'PLONK' not found"
        );
    }

    #[test]
    fn test_unknown_exercise_maps_to_not_found() {
        let error = AppError::from(ConfigError::unknown_exercise("PLONK"));
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert!(error.source.is_some());
    }

    #[test]
    fn test_invalid_definition_maps_to_config_invalid() {
        let error = AppError::from(ConfigError::MissingFormAngle {
            exercise: "HOLD".to_owned(),
        });
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
    }

    #[test]
    fn test_missing_file_maps_to_not_found() {
        let error = AppError::from(io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        let error = AppError::from(io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(error.code, ErrorCode::StorageError);
    }

    #[test]
    fn test_error_code_serializes_screaming() {
        let json = serde_json::to_string(&ErrorCode::ConfigInvalid).unwrap();
        assert_eq!(json, "\"CONFIG_INVALID\"");
    }

    #[test]
    fn test_config_missing_names_path() {
        let error = AppError::config_missing(Path::new("plans/week.yaml"));
        assert_eq!(error.code, ErrorCode::ConfigMissing);
        assert_eq!(error.message, "plans/week.yaml does not exist");
    }
}

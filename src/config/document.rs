// ABOUTME: Reads YAML or JSON documents from disk, choosing the parser by file extension
// ABOUTME: Shared by exercise definition files and workout plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use std::ffi::OsStr;
use std::path::Path;
use std::{fs, io};

use serde::de::DeserializeOwned;

use crate::errors::{AppError, AppResult};

/// Serialization format of a configuration document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.json`
    Json,
    /// `.yaml` or `.yml`
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from a file extension (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the extension is missing or unsupported
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let extension = path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(AppError::invalid_input(format!(
                "{} is not a .json, .yaml, or .yml file",
                path.display()
            ))),
        }
    }

    /// Parse `text` in this format
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` when the text does not match `T`
    pub fn parse<T: DeserializeOwned>(self, text: &str) -> AppResult<T> {
        match self {
            Self::Json => Ok(serde_json::from_str(text)?),
            Self::Yaml => Ok(serde_yaml::from_str(text)?),
        }
    }
}

/// Read and parse a YAML or JSON file
///
/// # Errors
///
/// Returns `ConfigMissing` if the file does not exist, `InvalidInput` if the
/// extension is unsupported, and `SerializationError` if its contents do not
/// deserialize into `T`
pub fn read_document<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let format = DocumentFormat::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|error| {
        if error.kind() == io::ErrorKind::NotFound {
            AppError::config_missing(path).with_source(error)
        } else {
            AppError::from(error)
        }
    })?;
    format.parse(&text)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("plan.JSON")).unwrap(),
            DocumentFormat::Json
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("plan.yml")).unwrap(),
            DocumentFormat::Yaml
        );
        let error = DocumentFormat::from_path(Path::new("plan.toml")).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert!(DocumentFormat::from_path(Path::new("plan")).is_err());
    }

    #[test]
    fn test_yaml_and_json_parse_alike() {
        let from_json: BTreeMap<String, u32> =
            DocumentFormat::Json.parse(r#"{"a": 1, "b": 2}"#).unwrap();
        let from_yaml: BTreeMap<String, u32> = DocumentFormat::Yaml.parse("a: 1\nb: 2\n").unwrap();
        assert_eq!(from_json, from_yaml);
    }

    #[test]
    fn test_parse_error_is_serialization_error() {
        let error = DocumentFormat::Json
            .parse::<BTreeMap<String, u32>>("{not json")
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::SerializationError);
    }
}

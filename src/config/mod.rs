// ABOUTME: Runtime configuration for the session controller and the CLI
// ABOUTME: Session timing from the environment and exercise definition or plan files on disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

//! Configuration module
//!
//! - **Timing**: exercise and rest durations, environment overridable
//! - **Documents**: YAML or JSON files chosen by extension
//! - **Catalog files**: extra exercise definitions merged into the built-in catalog

/// Exercise definition files merged into the catalog
pub mod catalog_file;
/// Format detection and parsing for YAML and JSON documents
pub mod document;
/// Exercise and rest durations
pub mod timing;

pub use catalog_file::{extend_catalog, load_exercise_definitions};
pub use document::{read_document, DocumentFormat};
pub use timing::SessionTiming;

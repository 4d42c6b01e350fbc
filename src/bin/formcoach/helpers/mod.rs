// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors
// ABOUTME: Re-exports helper modules for the formcoach CLI
// ABOUTME: Provides catalog loading and display formatting utilities

pub mod catalog;
pub mod display;

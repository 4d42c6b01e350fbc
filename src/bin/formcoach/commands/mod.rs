// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors
// ABOUTME: Re-exports command modules for the formcoach CLI
// ABOUTME: Provides catalog inspection, frame replay, and workout commands

pub mod exercises;
pub mod replay;
pub mod workout;

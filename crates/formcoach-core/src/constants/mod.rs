// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Protocol thresholds, feedback strings, and configuration keys for exercise recognition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

//! Constants module
//!
//! Constants are grouped by the concern that reads them rather than kept in a
//! single flat list.

/// Burpee phase-machine angles. Fixed for every burpee, never configurable.
pub mod burpee {
    /// Hip-knee-ankle angle below which the athlete is in a squat (degrees)
    pub const SQUAT_MAX_DEGREES: f64 = 100.0;
    /// Shoulder-hip-ankle angle above which the body is a straight plank (degrees)
    pub const PLANK_MIN_DEGREES: f64 = 160.0;
    /// Shoulder-elbow-wrist angle below which the push-up is deep enough (degrees)
    pub const PUSHUP_MAX_DEGREES: f64 = 90.0;
    /// Shoulder-hip-ankle angle below which the hips have folded back in (degrees)
    pub const RETURN_SQUAT_PLANK_MAX_DEGREES: f64 = 150.0;
    /// Hip-knee-ankle angle above which the athlete is standing again (degrees)
    pub const STAND_MIN_DEGREES: f64 = 165.0;
}

/// Russian twist dead band
pub mod twist {
    /// Margin inside each side threshold that the shoulder line must reach
    /// before the twist counts as back at centre (degrees)
    pub const DEAD_BAND_MARGIN_DEGREES: f64 = 1.0;
}

/// Geometry tolerances
pub mod geometry {
    /// Rays shorter than this are treated as coincident points
    pub const DEGENERATE_RAY_LENGTH: f64 = 1e-9;
}

/// Feedback strings emitted by the engine itself rather than read from a config
pub mod feedback {
    /// Initial feedback of every attempt
    pub const READY: &str = "Ready";
    /// Frame carried no landmarks at all
    pub const NO_POSE: &str = "No pose detected";
    /// Frame lacked a joint the active exercise needs
    pub const POSE_NOT_VISIBLE: &str = "Pose not fully visible";
    /// Twist returned to centre
    pub const CENTER: &str = "Center";
    /// Composite movement completed
    pub const GOOD_REP: &str = "Good Rep!";
    /// Burpee: squatted, now kick back
    pub const BURPEE_TO_PLANK: &str = "Down to Plank";
    /// Burpee: in plank, now push-up
    pub const BURPEE_PUSHUP: &str = "Push-up";
    /// Burpee: push-up done, now return to squat
    pub const BURPEE_BACK_TO_SQUAT: &str = "Back to Squat";
    /// Burpee: back in squat, now jump
    pub const BURPEE_JUMP: &str = "Jump Up!";
}

/// Keys of the per-exercise feedback map
pub mod feedback_keys {
    /// Upper extreme reached
    pub const UP: &str = "up";
    /// Lower extreme reached
    pub const DOWN: &str = "down";
    /// Dead zone heading towards the upper extreme
    pub const TRANSITION_UP: &str = "transition_up";
    /// Dead zone heading towards the lower extreme
    pub const TRANSITION_DOWN: &str = "transition_down";
    /// Hold is in correct form
    pub const CORRECT: &str = "correct";
    /// Hold is out of form
    pub const INCORRECT: &str = "incorrect";
    /// Limb extended away from the body
    pub const OUT: &str = "out";
    /// Limb returned to the body
    pub const IN: &str = "in";
    /// Torso twisted left
    pub const LEFT: &str = "left";
    /// Torso twisted right
    pub const RIGHT: &str = "right";
    /// Knee driven forward
    pub const FORWARD: &str = "forward";
    /// Leg returned back
    pub const BACK: &str = "back";
    /// Hand touched the opposite shoulder
    pub const TAP: &str = "tap";
    /// Hand released from the shoulder
    pub const RELEASE: &str = "release";
}

/// Keys of the per-exercise named-threshold map
pub mod threshold_keys {
    /// Bird-dog: wrist-to-knee distance counted as extended
    pub const EXTENDED: &str = "extended";
    /// Bird-dog: wrist-to-knee distance counted as contracted
    pub const CONTRACTED: &str = "contracted";
    /// Twist: shoulder-line angle counted as twisted left
    pub const LEFT: &str = "left";
    /// Twist: shoulder-line angle counted as twisted right
    pub const RIGHT: &str = "right";
    /// Mountain climber: knee-to-elbow distance counted as close
    pub const CLOSE: &str = "close";
    /// Mountain climber: knee-to-elbow distance counted as far
    pub const FAR: &str = "far";
    /// Plank jacks: ankle spread counted as out
    pub const OUT: &str = "out";
    /// Plank jacks: ankle spread counted as in
    pub const IN: &str = "in";
    /// Shoulder taps: wrist-to-shoulder distance counted as a tap
    pub const TAP: &str = "tap";
    /// Shoulder taps: wrist-to-shoulder distance counted as released
    pub const RELEASE: &str = "release";
}

// ABOUTME: Built-in exercise definitions shipped with the engine
// ABOUTME: Fifty exercises across all recognition families with thresholds and feedback text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use formcoach_core::models::JointId::{
    LeftAnkle, LeftElbow, LeftHeel, LeftHip, LeftKnee, LeftShoulder, LeftWrist, RightAnkle,
    RightElbow, RightHeel, RightHip, RightKnee, RightShoulder, RightWrist,
};
use formcoach_core::models::{AngleCombination, ExerciseConfig, ExerciseType, JointId};

/// Hip-knee-ankle, both legs
const LEGS: [JointId; 6] = [
    LeftHip, LeftKnee, LeftAnkle, RightHip, RightKnee, RightAnkle,
];

/// Shoulder-elbow-wrist, both arms
const ARMS: [JointId; 6] = [
    LeftShoulder,
    LeftElbow,
    LeftWrist,
    RightShoulder,
    RightElbow,
    RightWrist,
];

/// Shoulder-hip-knee, both sides
const HINGE: [JointId; 6] = [
    LeftShoulder,
    LeftHip,
    LeftKnee,
    RightShoulder,
    RightHip,
    RightKnee,
];

const LEFT_LEG: [JointId; 3] = [LeftHip, LeftKnee, LeftAnkle];
const LEFT_ARM: [JointId; 3] = [LeftShoulder, LeftElbow, LeftWrist];
const LEFT_HINGE: [JointId; 3] = [LeftShoulder, LeftHip, LeftKnee];
const LEFT_BODY_LINE: [JointId; 3] = [LeftShoulder, LeftHip, LeftAnkle];

/// Rep feedback in `up`, `down`, `transition_up`, `transition_down` order
fn reps(
    name: &str,
    landmarks: &[JointId],
    (up, down): (f64, f64),
    [fb_up, fb_down, fb_transition_up, fb_transition_down]: [&str; 4],
) -> ExerciseConfig {
    ExerciseConfig::rep_based(name, landmarks, up, down).feedback(&[
        ("up", fb_up),
        ("down", fb_down),
        ("transition_up", fb_transition_up),
        ("transition_down", fb_transition_down),
    ])
}

fn hold(
    name: &str,
    landmarks: &[JointId],
    form_angle: f64,
    correct: &str,
    incorrect: &str,
) -> ExerciseConfig {
    ExerciseConfig::timed(name, landmarks, form_angle)
        .feedback(&[("correct", correct), ("incorrect", incorrect)])
}

fn band(
    name: &str,
    exercise_type: ExerciseType,
    thresholds: [(&str, f64); 2],
    feedback: [(&str, &str); 2],
) -> ExerciseConfig {
    ExerciseConfig::new(name, exercise_type)
        .thresholds(&thresholds)
        .feedback(&feedback)
}

/// Definitions of every built-in exercise, in presentation order
#[must_use]
pub fn builtin_configs() -> Vec<ExerciseConfig> {
    use AngleCombination::{Max, Min};

    vec![
        reps(
            "SQUAT",
            &LEGS,
            (165.0, 90.0),
            ["Ready", "Good Squat!", "Push Up", "Go Deeper"],
        )
        .combine(Min),
        reps(
            "BICEP CURL",
            &ARMS,
            (160.0, 40.0),
            ["Ready", "Good Rep", "Lower Slowly", "Curl Up"],
        )
        .combine(Min),
        reps(
            "PUSH-UP",
            &ARMS,
            (160.0, 90.0),
            ["Good Rep", "Ready", "Push Up", "Go Lower"],
        )
        .inverted()
        .combine(Min),
        reps(
            "LUNGE",
            &LEGS,
            (160.0, 100.0),
            ["Ready", "Good Rep", "Push Back Up", "Step Forward"],
        )
        .combine(Min),
        hold(
            "PLANK",
            &LEFT_BODY_LINE,
            160.0,
            "Hold Position",
            "Straighten Back",
        ),
        reps(
            "OVERHEAD PRESS",
            &ARMS,
            (160.0, 90.0),
            ["Good Rep", "Ready", "Press Up", "Lower Slowly"],
        )
        .inverted()
        .combine(Min),
        reps(
            "JUMPING JACKS",
            &[
                LeftHip,
                LeftShoulder,
                LeftWrist,
                RightHip,
                RightShoulder,
                RightWrist,
            ],
            (130.0, 50.0),
            ["Good Rep", "Ready", "Arms Down", "Arms Up!"],
        )
        .combine(Min),
        reps(
            "GLUTE BRIDGE",
            &HINGE,
            (160.0, 120.0),
            ["Good Squeeze", "Ready", "Lift Hips", "Lower Slowly"],
        )
        .inverted()
        .combine(Min),
        reps(
            "BENT OVER ROW",
            &ARMS,
            (160.0, 90.0),
            ["Ready", "Good Squeeze", "Lower Slowly", "Pull!"],
        )
        .posture_gate(LEFT_HINGE, 110.0, "Bend Over More")
        .combine(Min),
        reps(
            "TRICEP DIPS",
            &ARMS,
            (160.0, 90.0),
            ["Good Press", "Ready", "Push Up", "Go Lower"],
        )
        .inverted()
        .combine(Min),
        reps(
            "CALF RAISES",
            &[
                LeftKnee, LeftAnkle, LeftHeel, RightKnee, RightAnkle, RightHeel,
            ],
            (170.0, 150.0),
            ["Good Squeeze", "Ready", "Lift Heels", "Lower Slowly"],
        )
        .inverted()
        .combine(Min),
        hold("WALL SIT", &LEFT_LEG, 120.0, "Hold Tight!", "Get Lower!").inverted(),
        reps(
            "DEADLIFT",
            &HINGE,
            (170.0, 90.0),
            ["Good Rep!", "Ready", "Extend Hips", "Hinge at Hips"],
        )
        .inverted()
        .combine(Min),
        ExerciseConfig::new("HIGH KNEES", ExerciseType::KneeHeight)
            .feedback(&[("up", "Good!"), ("down", "Drive Knee Up!")]),
        ExerciseConfig::new("PULL-UPS", ExerciseType::PullUp)
            .feedback(&[("up", "Good Rep!"), ("down", "Pull Up!")]),
        band(
            "BIRD-DOG",
            ExerciseType::BirdDog,
            [("extended", 0.6), ("contracted", 0.2)],
            [("out", "Extend!"), ("in", "Return")],
        ),
        band(
            "RUSSIAN TWIST",
            ExerciseType::RussianTwist,
            [("left", -10.0), ("right", 10.0)],
            [("left", "Twist Left"), ("right", "Twist Right")],
        ),
        reps(
            "CRUNCHES",
            &LEFT_HINGE,
            (160.0, 130.0),
            ["Ready", "Good Crunch", "Lower Down", "Crunch Up"],
        ),
        reps(
            "LEG RAISES",
            &LEFT_BODY_LINE,
            (150.0, 90.0),
            ["Ready", "Good Rep", "Lower Slowly", "Raise Legs"],
        ),
        band(
            "MOUNTAIN CLIMBER",
            ExerciseType::MountainClimber,
            [("close", 0.2), ("far", 0.4)],
            [("forward", "Knee to Elbow!"), ("back", "Switch")],
        ),
        reps(
            "SIDE LUNGES",
            &LEFT_LEG,
            (160.0, 110.0),
            ["Ready", "Good Lunge", "Push Back", "Lunge Out"],
        ),
        reps(
            "SUPERMAN",
            &[LeftAnkle, LeftHip, LeftShoulder],
            (170.0, 150.0),
            ["Ready", "Lift!", "Lower Slowly", "Lift!"],
        ),
        ExerciseConfig::new("BURPEES", ExerciseType::Burpee),
        hold(
            "SIDE PLANK",
            &[LeftAnkle, LeftHip, LeftShoulder],
            150.0,
            "Hold Straight!",
            "Lift Hips!",
        ),
        reps(
            "LATERAL RAISES",
            &[
                LeftHip,
                LeftShoulder,
                LeftElbow,
                RightHip,
                RightShoulder,
                RightElbow,
            ],
            (90.0, 20.0),
            ["Ready", "Good Rep", "Lower Slowly", "Raise Arms"],
        )
        .combine(Max),
        reps(
            "SUMO SQUAT",
            &LEGS,
            (165.0, 80.0),
            ["Ready", "Good Squat!", "Push Up", "Go Deeper"],
        )
        .combine(Min),
        reps(
            "PIKE PUSH-UP",
            &LEFT_ARM,
            (160.0, 100.0),
            ["Good Rep", "Ready", "Press Up", "Lower Head"],
        )
        .inverted(),
        reps(
            "REVERSE CRUNCHES",
            &LEFT_HINGE,
            (120.0, 80.0),
            ["Ready", "Good Rep", "Lower Legs", "Knees to Chest"],
        ),
        band(
            "PLANK JACKS",
            ExerciseType::PlankJacks,
            [("out", 0.4), ("in", 0.2)],
            [("out", "Legs Out!"), ("in", "Legs In!")],
        ),
        reps(
            "GOOD MORNINGS",
            &LEFT_HINGE,
            (170.0, 100.0),
            ["Ready", "Good Hinge", "Squeeze Glutes", "Hinge Forward"],
        ),
        reps(
            "DONKEY KICKS",
            &LEFT_BODY_LINE,
            (120.0, 90.0),
            ["Good Kick!", "Ready", "Kick Up", "Return"],
        )
        .inverted(),
        reps(
            "FIRE HYDRANTS",
            &[LeftHip, LeftKnee, RightKnee],
            (100.0, 90.0),
            ["Good Lift!", "Ready", "Lift Knee", "Return"],
        )
        .inverted(),
        band(
            "SHOULDER TAPS",
            ExerciseType::ShoulderTaps,
            [("tap", 0.1), ("release", 0.2)],
            [("tap", "Tap!"), ("release", "Return Hand")],
        ),
        reps(
            "WALL PUSH-UPS",
            &LEFT_ARM,
            (160.0, 90.0),
            ["Good Press", "Ready", "Push Away", "Lean In"],
        )
        .inverted(),
        hold(
            "ARM CIRCLES",
            &[LeftElbow, LeftShoulder, LeftHip],
            30.0,
            "Keep Circling",
            "Raise Arms",
        ),
        band(
            "TORSO TWISTS",
            ExerciseType::RussianTwist,
            [("left", -5.0), ("right", 5.0)],
            [("left", "Twist Left"), ("right", "Twist Right")],
        ),
        reps(
            "REVERSE LUNGES",
            &LEFT_LEG,
            (160.0, 100.0),
            ["Ready", "Good Lunge", "Return", "Step Back"],
        ),
        hold(
            "FORWARD FOLD",
            &LEFT_HINGE,
            160.0,
            "Hold Stretch",
            "Straighten Back",
        ),
        reps(
            "CAT-COW STRETCH",
            &LEFT_HINGE,
            (100.0, 80.0),
            ["Cow Pose", "Cat Pose", "Arch Back", "Round Spine"],
        )
        .inverted(),
        hold(
            "CHILD'S POSE",
            &LEFT_HINGE,
            80.0,
            "Hold and Breathe",
            "Sit Back on Heels",
        )
        .inverted(),
        hold(
            "COBRA POSE",
            &[LeftHip, LeftShoulder, LeftElbow],
            150.0,
            "Hold Pose",
            "Lift Chest",
        ),
        hold(
            "DOWNWARD DOG",
            &[LeftAnkle, LeftHip, LeftWrist],
            150.0,
            "Hold the V-Shape",
            "Push Hips Up",
        ),
        reps(
            "DIAMOND PUSH-UP",
            &LEFT_ARM,
            (160.0, 90.0),
            ["Good Rep", "Ready", "Push Up", "Go Lower"],
        )
        .inverted(),
        hold(
            "FLUTTER KICKS",
            &LEFT_LEG,
            160.0,
            "Keep Kicking",
            "Keep Legs Straight",
        ),
        hold(
            "SCISSOR KICKS",
            &LEFT_LEG,
            160.0,
            "Keep Crossing",
            "Keep Legs Straight",
        ),
        reps(
            "INCHWORM",
            &LEFT_BODY_LINE,
            (160.0, 90.0),
            [
                "Walk Feet In",
                "Walk Hands Out",
                "Walk Feet In",
                "Walk Hands Out",
            ],
        )
        .inverted(),
        reps(
            "HIGH PLANK TO LOW PLANK",
            &LEFT_ARM,
            (160.0, 90.0),
            ["High Plank", "Low Plank", "Up to Hands", "Down to Elbows"],
        )
        .inverted(),
        hold(
            "BOXER SHUFFLE",
            &[LeftKnee, LeftHip, LeftShoulder],
            150.0,
            "Keep Shuffling",
            "Stay on Toes",
        ),
        reps(
            "SIDE BEND",
            &LEFT_HINGE,
            (170.0, 155.0),
            ["Ready", "Good Bend", "Return to Center", "Bend Sideways"],
        ),
        hold(
            "T-POSE HOLD",
            &[LeftHip, LeftShoulder, LeftWrist],
            160.0,
            "Hold Strong!",
            "Straighten Arms",
        ),
    ]
}

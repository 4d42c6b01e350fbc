// ABOUTME: Planar geometry over normalized landmark coordinates
// ABOUTME: Interior joint angles, Euclidean distances, and shoulder-line tilt in degrees
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use crate::constants::geometry::DEGENERATE_RAY_LENGTH;
use crate::models::Point2D;

/// Interior angle at `vertex` between the rays to `a` and `c`, in degrees.
///
/// The result is folded into `[0, 180]` and is symmetric in `a` and `c`.
/// Returns NaN when either ray is degenerate (its endpoint coincides with the
/// vertex) or any coordinate is non-finite; callers must treat that as
/// indeterminate rather than as a real angle.
#[must_use]
pub fn angle_between(a: Point2D, vertex: Point2D, c: Point2D) -> f64 {
    let (ax, ay) = (a.x - vertex.x, a.y - vertex.y);
    let (cx, cy) = (c.x - vertex.x, c.y - vertex.y);

    if !(ax.hypot(ay) >= DEGENERATE_RAY_LENGTH && cx.hypot(cy) >= DEGENERATE_RAY_LENGTH) {
        return f64::NAN;
    }

    let mut degrees = (cy.atan2(cx) - ay.atan2(ax)).to_degrees().abs();
    if degrees > 180.0 {
        degrees = 360.0 - degrees;
    }
    degrees
}

/// Euclidean distance between two points
#[must_use]
pub fn distance(a: Point2D, b: Point2D) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Angle of the line from the left to the right shoulder, in degrees.
///
/// Zero when the shoulders are level; sign follows image coordinates (y grows
/// downward), so a positive tilt means the right shoulder sits lower.
#[must_use]
pub fn shoulder_tilt_degrees(left: Point2D, right: Point2D) -> f64 {
    (right.y - left.y).atan2(right.x - left.x).to_degrees()
}

//! Angle math shared by every dial.
//!
//! All angles are in degrees, measured clockwise on screen with 0° pointing
//! straight up. Pointer mapping, range sweeps and label placement all go
//! through this module; nothing else converts between points and angles.

use crate::geometry::Point;

pub const FULL_TURN: f64 = 360.0;
pub const HALF_TURN: f64 = 180.0;

/// Clockwise angle of `point` around `center`, in `[0, 360)`.
pub fn pointer_angle_clockwise(center: Point, point: Point) -> f64 {
    let (dx, dy) = (point.x - center.x, point.y - center.y);
    // screen y grows downward, so "up" is -dy
    normalize_degrees(dx.atan2(-dy).to_degrees())
}

/// Inverse of [`pointer_angle_clockwise`]: the point `radius` away from
/// `center` at `degrees`.
pub fn point_on_circle(center: Point, radius: f64, degrees: f64) -> Point {
    let radians = degrees.to_radians();
    Point::new(
        center.x + radius * radians.sin(),
        center.y - radius * radians.cos(),
    )
}

pub fn normalize_degrees(degrees: f64) -> f64 {
    let d = degrees.rem_euclid(FULL_TURN);
    // rem_euclid rounds tiny negative inputs up to a full turn
    if d >= FULL_TURN { 0.0 } else { d }
}

/// Shortest distance between two angles, in `[0, 180]`.
pub fn angular_distance(a: f64, b: f64) -> f64 {
    signed_delta(b, a).abs()
}

/// Shortest signed rotation taking `from` onto `to`, in `[-180, 180)`.
/// Positive is clockwise.
pub fn signed_delta(from: f64, to: f64) -> f64 {
    normalize_degrees(to - from + HALF_TURN) - HALF_TURN
}

/// Whether `angle` lies on the clockwise arc from `arc_start` spanning
/// `arc_sweep` degrees, endpoints included. A sweep of a full turn or more
/// contains every angle.
pub fn is_within_arc(angle: f64, arc_start: f64, arc_sweep: f64) -> bool {
    arc_sweep >= FULL_TURN || normalize_degrees(angle - arc_start) <= arc_sweep
}

use crate::angle::{normalize_degrees, signed_delta};

/// Per-gesture drag state, captured on pointer-down and dropped on release.
///
/// Rotation is always derived from the change in pointer angle since the
/// anchor, so the rotor never jumps to wherever the pointer landed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer angle at pointer-down.
    pub anchor_screen_angle: f64,
    /// Rotor rotation at pointer-down.
    pub base_value_angle: f64,
}

impl DragSession {
    pub fn new(anchor_screen_angle: f64, base_value_angle: f64) -> Self {
        Self {
            anchor_screen_angle,
            base_value_angle,
        }
    }

    /// Rotor rotation for the current pointer angle, in `[0, 360)`.
    pub fn rotation_at(&self, pointer_angle: f64) -> f64 {
        normalize_degrees(self.base_value_angle + (pointer_angle - self.anchor_screen_angle))
    }

    /// Same rotation as [`rotation_at`](Self::rotation_at) modulo a full
    /// turn, but kept within half a turn of the base so a base outside
    /// `[0, 360)` (e.g. the top of a full-circle sweep) survives a
    /// zero-length drag.
    pub fn unwrapped_rotation_at(&self, pointer_angle: f64) -> f64 {
        self.base_value_angle + signed_delta(self.anchor_screen_angle, pointer_angle)
    }
}

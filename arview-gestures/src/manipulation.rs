//! Rotation, pinch-zoom and pan math
//!
//! All per-frame deltas are normalised to a 50 Hz reference frame rate, so a
//! given finger speed produces the same motion regardless of frame rate.

use arview_core::{max_component, min_component, CameraAxes, Touch, Vector2f, Vector3f};

/// Frame rate the speed settings are tuned for
pub const REFERENCE_FRAME_RATE: f32 = 50.0;

/// Pitch turns at half the yaw rate
pub const PITCH_RATE: f32 = 0.5;

/// Yaw and pitch in degrees produced by a one-finger drag
///
/// Yaw is about world up and negated so dragging right turns the front of the
/// object to the right; pitch is about world right.
pub fn drag_rotation(delta: Vector2f, rotation_speed: f32, delta_time: f32) -> (f32, f32) {
    let frame = delta_time * REFERENCE_FRAME_RATE;
    let yaw = -delta.x * rotation_speed * frame;
    let pitch = delta.y * rotation_speed * PITCH_RATE * frame;
    (yaw, pitch)
}

/// Change in finger separation between the previous and current frame
pub fn pinch_distance_delta(first: &Touch, second: &Touch) -> f32 {
    let previous = (first.previous_position() - second.previous_position()).norm();
    let current = (first.position - second.position).norm();
    current - previous
}

/// Relative scale change for a pinch
pub fn pinch_scale_factor(first: &Touch, second: &Touch, zoom_speed: f32, delta_time: f32) -> f32 {
    pinch_distance_delta(first, second) * zoom_speed * delta_time * REFERENCE_FRAME_RATE
}

/// Which limit, if any, was applied by [`apply_scale_factor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleClamp {
    Within,
    ClampedToMax,
    ClampedToMin,
}

/// Scale `current` by `1 + factor`, keeping proportions inside the limits
///
/// If the largest axis would exceed `max_scale` the whole vector is shrunk so
/// that axis lands on `max_scale`; otherwise, if the smallest axis would drop
/// below `min_scale`, it is grown so that axis lands on `min_scale`. Only one
/// of the two corrections is applied per call.
pub fn apply_scale_factor(current: Vector3f, factor: f32, min_scale: f32, max_scale: f32) -> (Vector3f, ScaleClamp) {
    let scaled = current * (1.0 + factor);
    let largest = max_component(&scaled);
    let smallest = min_component(&scaled);

    if smallest >= min_scale && largest <= max_scale {
        (scaled, ScaleClamp::Within)
    } else if largest > max_scale {
        (scaled * (max_scale / largest), ScaleClamp::ClampedToMax)
    } else if smallest > 0.0 {
        (scaled * (min_scale / smallest), ScaleClamp::ClampedToMin)
    } else {
        // A collapsed or inverted scale cannot be rescaled proportionally
        (Vector3f::repeat(min_scale), ScaleClamp::ClampedToMin)
    }
}

/// Movement of the midpoint between two touches since the previous frame
pub fn midpoint_delta(first: &Touch, second: &Touch) -> Vector2f {
    let current = (first.position + second.position) / 2.0;
    let previous = (first.previous_position() + second.previous_position()) / 2.0;
    current - previous
}

/// World-space pan offset for a screen-space midpoint delta
///
/// With a camera the delta follows the camera's right/up axes; without one
/// it maps onto the world X/Z ground plane.
pub fn pan_offset(delta: Vector2f, move_speed: f32, delta_time: f32, camera: Option<&dyn CameraAxes>) -> Vector3f {
    let frame = move_speed * delta_time * REFERENCE_FRAME_RATE;
    match camera {
        Some(camera) => (camera.right() * delta.x + camera.up() * delta.y) * frame,
        None => Vector3f::new(delta.x, 0.0, delta.y) * frame,
    }
}

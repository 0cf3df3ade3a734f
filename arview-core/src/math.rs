//! Vector and rotation aliases used throughout arview

use nalgebra::{Point3, UnitQuaternion, Vector2, Vector3};

/// A screen-space position or delta in pixels
pub type Vector2f = Vector2<f32>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A unit quaternion rotation
pub type Rotation3f = UnitQuaternion<f32>;

/// World up axis (+Y)
pub fn world_up() -> Vector3f {
    Vector3f::y()
}

/// World right axis (+X)
pub fn world_right() -> Vector3f {
    Vector3f::x()
}

/// Largest of the three components
pub fn max_component(v: &Vector3f) -> f32 {
    v.x.max(v.y).max(v.z)
}

/// Smallest of the three components
pub fn min_component(v: &Vector3f) -> f32 {
    v.x.min(v.y).min(v.z)
}

/// Rotation of `degrees` about `axis`. A zero axis yields the identity.
pub fn axis_angle_degrees(axis: &Vector3f, degrees: f32) -> Rotation3f {
    match nalgebra::Unit::try_new(*axis, f32::EPSILON) {
        Some(unit) => Rotation3f::from_axis_angle(&unit, degrees.to_radians()),
        None => Rotation3f::identity(),
    }
}

//! Transform node and reset snapshots

use crate::math::{axis_angle_degrees, Point3f, Rotation3f, Vector3f};
use crate::traits::TransformHost;
use nalgebra::Isometry3;
use serde::{Deserialize, Serialize};

/// Local position, rotation and scale captured for reset
///
/// Restoring a snapshot writes these exact values back, so a reset is
/// bit-for-bit independent of whatever happened in between.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformSnapshot {
    pub position: Vector3f,
    pub rotation: Rotation3f,
    pub scale: Vector3f,
}

impl Default for TransformSnapshot {
    fn default() -> Self {
        Self {
            position: Vector3f::zeros(),
            rotation: Rotation3f::identity(),
            scale: Vector3f::repeat(1.0),
        }
    }
}

/// A scene node with a local TRS and a rigid parent frame
///
/// The parent frame only carries translation and rotation; the node's own
/// scale never leaks into world positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vector3f,
    pub rotation: Rotation3f,
    pub scale: Vector3f,
    pub parent: Isometry3<f32>,
}

impl Transform {
    /// Create an identity transform at the world origin
    pub fn identity() -> Self {
        Self {
            position: Vector3f::zeros(),
            rotation: Rotation3f::identity(),
            scale: Vector3f::repeat(1.0),
            parent: Isometry3::identity(),
        }
    }

    /// Create a root transform from position, rotation and scale
    pub fn from_parts(position: Vector3f, rotation: Rotation3f, scale: Vector3f) -> Self {
        Self {
            position,
            rotation,
            scale,
            parent: Isometry3::identity(),
        }
    }

    /// Attach this node under a parent frame, keeping local values
    pub fn with_parent(mut self, parent: Isometry3<f32>) -> Self {
        self.parent = parent;
        self
    }

    /// Create a uniformly scaled root transform at `position`
    pub fn uniform(position: Vector3f, scale: f32) -> Self {
        Self::from_parts(position, Rotation3f::identity(), Vector3f::repeat(scale))
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<TransformSnapshot> for Transform {
    fn from(snapshot: TransformSnapshot) -> Self {
        Self::from_parts(snapshot.position, snapshot.rotation, snapshot.scale)
    }
}

impl TransformHost for Transform {
    fn local_position(&self) -> Vector3f {
        self.position
    }

    fn set_local_position(&mut self, position: Vector3f) {
        self.position = position;
    }

    fn local_rotation(&self) -> Rotation3f {
        self.rotation
    }

    fn set_local_rotation(&mut self, rotation: Rotation3f) {
        self.rotation = rotation;
    }

    fn local_scale(&self) -> Vector3f {
        self.scale
    }

    fn set_local_scale(&mut self, scale: Vector3f) {
        self.scale = scale;
    }

    fn world_position(&self) -> Vector3f {
        self.parent.transform_point(&Point3f::from(self.position)).coords
    }

    fn set_world_position(&mut self, position: Vector3f) {
        self.position = self
            .parent
            .inverse_transform_point(&Point3f::from(position))
            .coords;
    }

    fn rotate_world(&mut self, axis: &Vector3f, degrees: f32) {
        // world = P * L, so rotating in world space gives L' = P^-1 * R * P * L
        let world_delta = axis_angle_degrees(axis, degrees);
        let parent = self.parent.rotation;
        self.rotation = parent.inverse() * world_delta * parent * self.rotation;
    }
}

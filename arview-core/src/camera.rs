//! Viewing camera used to project screen-space pans into the world

use crate::math::{Point3f, Vector3f};
use crate::traits::CameraAxes;
use serde::{Deserialize, Serialize};

/// A look-at camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Point3f,
    pub target: Point3f,
    pub up: Vector3f,
}

impl Camera {
    /// Create a new camera
    pub fn new(position: Point3f, target: Point3f, up: Vector3f) -> Self {
        Self { position, target, up }
    }

    /// Unit view direction. Falls back to -Z when position and target coincide.
    pub fn forward(&self) -> Vector3f {
        (self.target - self.position)
            .try_normalize(f32::EPSILON)
            .unwrap_or_else(|| -Vector3f::z())
    }
}

impl CameraAxes for Camera {
    fn right(&self) -> Vector3f {
        self.forward()
            .cross(&self.up)
            .try_normalize(f32::EPSILON)
            .unwrap_or_else(Vector3f::x)
    }

    fn up(&self) -> Vector3f {
        self.right()
            .cross(&self.forward())
            .try_normalize(f32::EPSILON)
            .unwrap_or_else(Vector3f::y)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(
            Point3f::new(0.0, 0.0, 5.0),
            Point3f::origin(),
            Vector3f::new(0.0, 1.0, 0.0),
        )
    }
}

//! Host traits the controllers drive
//!
//! The controllers never own scene objects, audio sources or cameras. They
//! refer to them through opaque handles and talk to whoever does own them
//! through these traits.

use crate::math::{Rotation3f, Vector3f};
use crate::transform::TransformSnapshot;
use serde::{Deserialize, Serialize};

/// Opaque handle to a displayable scene object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub u32);

/// Opaque handle to an audio clip/source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClipId(pub u32);

/// Shows and hides scene objects
pub trait VisibilityHost {
    fn set_visible(&mut self, object: ObjectId, visible: bool);
}

/// Plays and stops audio clips
pub trait AudioHost {
    fn play(&mut self, clip: ClipId);
    fn stop(&mut self, clip: ClipId);
    fn is_playing(&self, clip: ClipId) -> bool;
}

/// Read/write access to an object's transform
pub trait TransformHost {
    fn local_position(&self) -> Vector3f;
    fn set_local_position(&mut self, position: Vector3f);
    fn local_rotation(&self) -> Rotation3f;
    fn set_local_rotation(&mut self, rotation: Rotation3f);
    fn local_scale(&self) -> Vector3f;
    fn set_local_scale(&mut self, scale: Vector3f);
    fn world_position(&self) -> Vector3f;
    fn set_world_position(&mut self, position: Vector3f);

    /// Rotate by `degrees` about a world-space axis
    fn rotate_world(&mut self, axis: &Vector3f, degrees: f32);

    /// Move by a world-space offset
    fn translate_world(&mut self, offset: &Vector3f) {
        let position = self.world_position();
        self.set_world_position(position + offset);
    }

    /// Capture the local position, rotation and scale
    fn snapshot(&self) -> TransformSnapshot {
        TransformSnapshot {
            position: self.local_position(),
            rotation: self.local_rotation(),
            scale: self.local_scale(),
        }
    }

    /// Write a snapshot back verbatim
    fn restore(&mut self, snapshot: &TransformSnapshot) {
        self.set_local_position(snapshot.position);
        self.set_local_rotation(snapshot.rotation);
        self.set_local_scale(snapshot.scale);
    }
}

/// World-space basis of the viewing camera, used to project screen pans
pub trait CameraAxes {
    fn right(&self) -> Vector3f;
    fn up(&self) -> Vector3f;
}

/// Frame timing source
pub trait Clock {
    /// Seconds since the session started
    fn now(&self) -> f64;

    /// Seconds elapsed during the current frame
    fn delta_time(&self) -> f32;
}

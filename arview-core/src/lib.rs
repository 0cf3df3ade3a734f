//! Core data structures and traits for arview
//!
//! This crate provides the shared vocabulary of the arview controllers:
//! transforms and reset snapshots, the per-frame touch model, host traits for
//! visibility/audio/camera/clock, and the single-slot deferred task used for
//! model transitions.

pub mod math;
pub mod transform;
pub mod input;
pub mod traits;
pub mod camera;
pub mod clock;
pub mod scene;
pub mod scheduler;
pub mod error;

pub use math::*;
pub use transform::*;
pub use input::*;
pub use traits::*;
pub use camera::*;
pub use clock::*;
pub use scene::*;
pub use scheduler::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Isometry3, Point3, UnitQuaternion, Vector2, Vector3};

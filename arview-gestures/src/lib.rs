//! # arview gestures
//!
//! Maps per-frame touch samples onto an object's transform:
//! - one finger drag rotates (yaw and half-rate pitch)
//! - two finger pinch zooms uniformly within scale limits
//! - two finger drag pans along the camera plane
//! - double tap restores the initial transform
//! - press and hold previews an alternate model until release

pub mod config;
pub mod manipulation;
pub mod controller;

pub use config::*;
pub use manipulation::*;
pub use controller::*;

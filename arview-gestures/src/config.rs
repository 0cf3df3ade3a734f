//! Gesture tuning and feature toggles

use arview_core::{ensure_non_negative, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for [`InteractiveObjectController`](crate::InteractiveObjectController)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Degrees of rotation per pixel of drag (at the reference frame rate)
    pub rotation_speed: f32,
    /// Relative scale change per pixel of pinch
    pub zoom_speed: f32,
    /// World units of pan per pixel of two-finger drag
    pub move_speed: f32,

    pub enable_rotation: bool,
    pub enable_zoom: bool,
    pub enable_pan: bool,
    pub enable_double_tap_reset: bool,
    pub enable_model_swapping: bool,

    /// Smallest allowed scale on any axis
    pub min_scale: f32,
    /// Largest allowed scale on any axis
    pub max_scale: f32,

    /// Seconds a stationary touch must be held to show the alternate model
    pub hold_threshold: f32,
    /// Two taps closer than this many seconds reset the object
    pub double_tap_threshold: f32,
    /// Drag distance in pixels per frame above which a hold is cancelled
    pub drag_jitter_threshold: f32,
    /// Seconds between hiding one model and revealing the other
    pub transition_delay: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            rotation_speed: 0.3,
            zoom_speed: 0.02,
            move_speed: 0.02,
            enable_rotation: true,
            enable_zoom: true,
            enable_pan: true,
            enable_double_tap_reset: true,
            enable_model_swapping: true,
            min_scale: 0.1,
            max_scale: 3.0,
            hold_threshold: 0.8,
            double_tap_threshold: 0.3,
            drag_jitter_threshold: 5.0,
            transition_delay: 0.1,
        }
    }
}

impl GestureConfig {
    /// Parse and validate a JSON document; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check speeds, thresholds and scale limits
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("rotation_speed", self.rotation_speed)?;
        ensure_non_negative("zoom_speed", self.zoom_speed)?;
        ensure_non_negative("move_speed", self.move_speed)?;
        ensure_non_negative("hold_threshold", self.hold_threshold)?;
        ensure_non_negative("double_tap_threshold", self.double_tap_threshold)?;
        ensure_non_negative("drag_jitter_threshold", self.drag_jitter_threshold)?;
        ensure_non_negative("transition_delay", self.transition_delay)?;
        ensure_non_negative("max_scale", self.max_scale)?;

        if !(self.min_scale.is_finite() && self.min_scale > 0.0) {
            return Err(Error::invalid_config(format!(
                "min_scale must be positive, got {}",
                self.min_scale
            )));
        }
        if self.min_scale > self.max_scale {
            return Err(Error::invalid_config(format!(
                "min_scale ({}) exceeds max_scale ({})",
                self.min_scale, self.max_scale
            )));
        }
        Ok(())
    }
}

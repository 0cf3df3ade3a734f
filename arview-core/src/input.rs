//! Per-frame touch input model

use crate::math::Vector2f;
use serde::{Deserialize, Serialize};

/// Lifecycle phase of a touch as reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TouchPhase {
    /// Finger touched the screen this frame
    Began,
    /// Finger moved this frame
    Moved,
    /// Finger is down but did not move
    Stationary,
    /// Finger was lifted
    Ended,
    /// The platform cancelled tracking
    Canceled,
}

/// A single touch sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Touch {
    pub id: u64,
    /// Screen position in pixels
    pub position: Vector2f,
    /// Movement since the previous frame in pixels
    pub delta: Vector2f,
    pub phase: TouchPhase,
}

impl Touch {
    pub fn new(id: u64, position: Vector2f, delta: Vector2f, phase: TouchPhase) -> Self {
        Self { id, position, delta, phase }
    }

    /// A touch that did not move this frame
    pub fn at(id: u64, position: Vector2f, phase: TouchPhase) -> Self {
        Self::new(id, position, Vector2f::zeros(), phase)
    }

    /// Screen position during the previous frame
    pub fn previous_position(&self) -> Vector2f {
        self.position - self.delta
    }
}

/// All active touches for one frame, in platform order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSample {
    pub touches: Vec<Touch>,
}

impl InputSample {
    /// A frame with no touches
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn single(touch: Touch) -> Self {
        Self { touches: vec![touch] }
    }

    pub fn pair(first: Touch, second: Touch) -> Self {
        Self { touches: vec![first, second] }
    }
}

impl From<Vec<Touch>> for InputSample {
    fn from(touches: Vec<Touch>) -> Self {
        Self { touches }
    }
}

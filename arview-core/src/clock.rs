//! Manually advanced frame clock

use crate::traits::Clock;

/// A clock driven by explicit frame steps
///
/// Hosts call [`FrameClock::advance`] once per rendered frame; tests use it
/// to replay exact timings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    now: f64,
    delta_time: f32,
}

impl FrameClock {
    /// A clock at t = 0 with no elapsed frame time
    pub fn new() -> Self {
        Self {
            now: 0.0,
            delta_time: 0.0,
        }
    }

    /// A clock positioned at `now` with the given frame duration
    pub fn at(now: f64, delta_time: f32) -> Self {
        Self { now, delta_time }
    }

    /// Step one frame of `delta_time` seconds
    pub fn advance(&mut self, delta_time: f32) {
        self.delta_time = delta_time.max(0.0);
        self.now += f64::from(self.delta_time);
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FrameClock {
    fn now(&self) -> f64 {
        self.now
    }

    fn delta_time(&self) -> f32 {
        self.delta_time
    }
}

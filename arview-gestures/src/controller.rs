//! Touch gesture state machine for a single interactive object
//!
//! The host calls [`InteractiveObjectController::tick`] once per frame with
//! that frame's touches. Everything happens synchronously inside `tick`
//! except the model transition, which is a deferred reveal owned by a
//! single-slot scheduler: starting a new swap supersedes a pending one.

use crate::config::GestureConfig;
use crate::manipulation::{
    apply_scale_factor, drag_rotation, midpoint_delta, pan_offset, pinch_scale_factor, ScaleClamp,
};
use arview_core::{
    world_right, world_up, CameraAxes, Clock, InputSample, ObjectId, Result, Touch, TouchPhase,
    TransformHost, TransformSnapshot, TransitionScheduler, Vector3f, VisibilityHost,
};
use log::{debug, trace};

/// Gesture state machine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No touch, or a touch that can no longer become a hold
    #[default]
    Idle,
    /// One finger down and still a hold candidate
    TouchHolding,
    /// One finger rotating the object
    Dragging,
    /// Two fingers zooming and panning
    TwoFingerGesture,
}

/// Which of the two models is meant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelSlot {
    Primary,
    Alternate,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// The transform was restored to the snapshot
    Reset,
    /// A swap began; the outgoing model is already hidden
    SwapStarted { to: ModelSlot, superseded: bool },
    /// A pending swap finished and the incoming model is visible
    TransitionCommitted { to: ModelSlot },
    Rotated { yaw: f32, pitch: f32 },
    Zoomed { scale: Vector3f, clamp: ScaleClamp },
    Panned { offset: Vector3f },
}

/// Timing and swap bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    pub phase: GesturePhase,
    pub press_start_time: f64,
    /// Unset until the first tap, and cleared after a double tap
    pub last_tap_time: Option<f64>,
    pub showing_alternate: bool,
}

/// Drives one object's transform and model swap from touch input
#[derive(Debug, Clone)]
pub struct InteractiveObjectController<T: TransformHost> {
    target: T,
    primary: ObjectId,
    alternate: Option<ObjectId>,
    config: GestureConfig,
    snapshot: TransformSnapshot,
    state: GestureState,
    transitions: TransitionScheduler<ModelSlot>,
}

impl<T: TransformHost> InteractiveObjectController<T> {
    /// Create a controller for `target`, whose scene object is `object`
    ///
    /// `object` doubles as the primary model until
    /// [`with_models`](Self::with_models) says otherwise. The reset snapshot
    /// is taken from `target` as it is now.
    pub fn new(object: ObjectId, target: T, config: GestureConfig) -> Result<Self> {
        config.validate()?;
        let snapshot = target.snapshot();
        Ok(Self {
            target,
            primary: object,
            alternate: None,
            config,
            snapshot,
            state: GestureState::default(),
            transitions: TransitionScheduler::new(),
        })
    }

    /// Set the primary model and the alternate shown while holding
    pub fn with_models(mut self, primary: ObjectId, alternate: Option<ObjectId>) -> Self {
        self.primary = primary;
        self.alternate = alternate;
        self
    }

    /// Show the primary model, hide the alternate and capture the reset snapshot
    pub fn initialize<V: VisibilityHost>(&mut self, scene: &mut V) {
        scene.set_visible(self.primary, true);
        if let Some(alternate) = self.alternate {
            scene.set_visible(alternate, false);
        }
        self.state = GestureState::default();
        self.transitions.cancel();
        self.update_snapshot();
    }

    /// Re-capture the snapshot that `reset` restores
    pub fn update_snapshot(&mut self) {
        self.snapshot = self.target.snapshot();
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn snapshot(&self) -> &TransformSnapshot {
        &self.snapshot
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn phase(&self) -> GesturePhase {
        self.state.phase
    }

    pub fn is_showing_alternate(&self) -> bool {
        self.state.showing_alternate
    }

    pub fn has_pending_transition(&self) -> bool {
        self.transitions.is_pending()
    }

    /// Process one frame of input
    pub fn tick<V: VisibilityHost>(
        &mut self,
        input: &InputSample,
        clock: &impl Clock,
        camera: Option<&dyn CameraAxes>,
        scene: &mut V,
    ) -> Vec<GestureEvent> {
        let now = clock.now();
        let delta_time = clock.delta_time();
        let mut events = Vec::new();

        self.commit_due_transition(now, scene, &mut events);

        match input.touches.as_slice() {
            [] => self.on_no_touch(now, scene, &mut events),
            [touch] => self.on_single_touch(touch, now, delta_time, scene, &mut events),
            [first, second] => self.on_two_touches(first, second, delta_time, camera, &mut events),
            touches => trace!("ignoring frame with {} touches", touches.len()),
        }

        events
    }

    /// Restore the snapshot and switch back to the primary model
    pub fn reset<V: VisibilityHost>(&mut self, clock: &impl Clock, scene: &mut V) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        self.reset_at(clock.now(), scene, &mut events);
        events
    }

    fn reset_at<V: VisibilityHost>(&mut self, now: f64, scene: &mut V, events: &mut Vec<GestureEvent>) {
        self.target.restore(&self.snapshot);
        events.push(GestureEvent::Reset);
        debug!("object reset to initial state");

        if self.state.showing_alternate {
            self.swap_to(ModelSlot::Primary, now, scene, events);
        }
    }

    fn on_no_touch<V: VisibilityHost>(&mut self, now: f64, scene: &mut V, events: &mut Vec<GestureEvent>) {
        if self.state.phase == GesturePhase::TouchHolding {
            self.release_hold(now, scene, events);
        }
        self.state.phase = GesturePhase::Idle;
    }

    fn on_single_touch<V: VisibilityHost>(
        &mut self,
        touch: &Touch,
        now: f64,
        delta_time: f32,
        scene: &mut V,
        events: &mut Vec<GestureEvent>,
    ) {
        match touch.phase {
            TouchPhase::Began => {
                self.state.press_start_time = now;

                let double_tap = self.config.enable_double_tap_reset
                    && self
                        .state
                        .last_tap_time
                        .map_or(false, |last| now - last < f64::from(self.config.double_tap_threshold));
                if double_tap {
                    // Clearing the tap time keeps a third tap from pairing again
                    self.state.last_tap_time = None;
                    self.state.phase = GesturePhase::Idle;
                    self.reset_at(now, scene, events);
                    return;
                }

                self.state.last_tap_time = Some(now);
                self.state.phase = GesturePhase::TouchHolding;
            }
            TouchPhase::Stationary => {
                let held_for = now - self.state.press_start_time;
                if self.config.enable_model_swapping
                    && self.state.phase == GesturePhase::TouchHolding
                    && !self.state.showing_alternate
                    && held_for >= f64::from(self.config.hold_threshold)
                {
                    debug!("hold of {:.2}s, showing alternate model", held_for);
                    self.swap_to(ModelSlot::Alternate, now, scene, events);
                }
            }
            TouchPhase::Moved => {
                let jitter = touch.delta.norm() <= self.config.drag_jitter_threshold;
                if !(jitter && self.state.phase == GesturePhase::TouchHolding) {
                    self.state.phase = GesturePhase::Dragging;
                }

                if self.config.enable_rotation {
                    let (yaw, pitch) = drag_rotation(touch.delta, self.config.rotation_speed, delta_time);
                    self.target.rotate_world(&world_up(), yaw);
                    self.target.rotate_world(&world_right(), pitch);
                    trace!("rotated yaw {:.3} pitch {:.3}", yaw, pitch);
                    events.push(GestureEvent::Rotated { yaw, pitch });
                }
            }
            TouchPhase::Ended | TouchPhase::Canceled => {
                self.state.phase = GesturePhase::Idle;
                self.release_hold(now, scene, events);
            }
        }
    }

    fn on_two_touches(
        &mut self,
        first: &Touch,
        second: &Touch,
        delta_time: f32,
        camera: Option<&dyn CameraAxes>,
        events: &mut Vec<GestureEvent>,
    ) {
        // A second finger always cancels a pending hold
        self.state.phase = GesturePhase::TwoFingerGesture;

        if self.config.enable_zoom {
            let factor = pinch_scale_factor(first, second, self.config.zoom_speed, delta_time);
            let (scale, clamp) = apply_scale_factor(
                self.target.local_scale(),
                factor,
                self.config.min_scale,
                self.config.max_scale,
            );
            self.target.set_local_scale(scale);
            trace!("zoom factor {:.4} -> scale {:?} ({:?})", factor, scale, clamp);
            events.push(GestureEvent::Zoomed { scale, clamp });
        }

        let moved = first.phase == TouchPhase::Moved || second.phase == TouchPhase::Moved;
        if self.config.enable_pan && moved {
            let delta = midpoint_delta(first, second);
            let offset = pan_offset(delta, self.config.move_speed, delta_time, camera);
            self.target.translate_world(&offset);
            trace!("panned by {:?}", offset);
            events.push(GestureEvent::Panned { offset });
        }
    }

    fn release_hold<V: VisibilityHost>(&mut self, now: f64, scene: &mut V, events: &mut Vec<GestureEvent>) {
        if self.state.showing_alternate && self.config.enable_model_swapping {
            self.swap_to(ModelSlot::Primary, now, scene, events);
        }
    }

    /// Hide the outgoing model now and schedule the reveal of `to`
    fn swap_to<V: VisibilityHost>(&mut self, to: ModelSlot, now: f64, scene: &mut V, events: &mut Vec<GestureEvent>) {
        let alternate = match self.alternate {
            Some(alternate) => alternate,
            None => {
                debug!("no alternate model, swap ignored");
                return;
            }
        };

        let outgoing = match to {
            ModelSlot::Primary => alternate,
            ModelSlot::Alternate => self.primary,
        };

        let (handle, superseded) =
            self.transitions
                .schedule(now, f64::from(self.config.transition_delay), to);
        scene.set_visible(outgoing, false);
        self.state.showing_alternate = to == ModelSlot::Alternate;

        debug!("swap to {:?} started (task {})", to, handle.id());
        events.push(GestureEvent::SwapStarted {
            to,
            superseded: superseded.is_some(),
        });
    }

    fn commit_due_transition<V: VisibilityHost>(&mut self, now: f64, scene: &mut V, events: &mut Vec<GestureEvent>) {
        let task = match self.transitions.poll(now) {
            Some(task) => task,
            None => return,
        };
        let alternate = match self.alternate {
            Some(alternate) => alternate,
            None => return,
        };

        let show_primary = task.payload == ModelSlot::Primary;
        scene.set_visible(self.primary, show_primary);
        scene.set_visible(alternate, !show_primary);

        debug!("swap to {:?} committed", task.payload);
        events.push(GestureEvent::TransitionCommitted { to: task.payload });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use arview_core::{FrameClock, InMemoryScene, Transform, Vector2f};

    const OBJECT: ObjectId = ObjectId(1);
    const ALTERNATE: ObjectId = ObjectId(2);

    fn make_controller() -> (InteractiveObjectController<Transform>, InMemoryScene) {
        let mut scene = InMemoryScene::new();
        let mut controller = InteractiveObjectController::new(OBJECT, Transform::identity(), GestureConfig::default())
            .unwrap()
            .with_models(OBJECT, Some(ALTERNATE));
        controller.initialize(&mut scene);
        (controller, scene)
    }

    fn touch(phase: TouchPhase) -> InputSample {
        InputSample::single(Touch::at(0, Vector2f::new(200.0, 300.0), phase))
    }

    fn drag(dx: f32, dy: f32) -> InputSample {
        InputSample::single(Touch::new(
            0,
            Vector2f::new(200.0, 300.0),
            Vector2f::new(dx, dy),
            TouchPhase::Moved,
        ))
    }

    #[test]
    fn test_initialize_hides_alternate() {
        let (controller, scene) = make_controller();
        assert!(!scene.is_visible(ALTERNATE));
        assert!(scene.is_visible(OBJECT));
        assert_eq!(controller.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_initialize_after_swap_restores_primary() {
        let (mut controller, mut scene) = make_controller();
        let mut clock = FrameClock::new();
        clock.advance(0.1);
        controller.tick(&touch(TouchPhase::Began), &clock, None, &mut scene);
        for _ in 0..12 {
            clock.advance(0.1);
            controller.tick(&touch(TouchPhase::Stationary), &clock, None, &mut scene);
        }
        assert!(controller.is_showing_alternate());
        assert!(!scene.is_visible(OBJECT));

        controller.initialize(&mut scene);
        assert!(!controller.is_showing_alternate());
        assert!(!controller.has_pending_transition());
        assert!(scene.is_visible(OBJECT));
        assert!(!scene.is_visible(ALTERNATE));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = GestureConfig {
            min_scale: 2.0,
            max_scale: 1.0,
            ..GestureConfig::default()
        };
        assert!(InteractiveObjectController::new(OBJECT, Transform::identity(), config).is_err());
    }

    #[test]
    fn test_began_enters_hold() {
        let (mut controller, mut scene) = make_controller();
        let mut clock = FrameClock::new();
        clock.advance(0.02);

        controller.tick(&touch(TouchPhase::Began), &clock, None, &mut scene);
        assert_eq!(controller.phase(), GesturePhase::TouchHolding);
        assert_eq!(controller.state().last_tap_time, Some(clock.now()));
    }

    #[test]
    fn test_small_move_keeps_hold() {
        let (mut controller, mut scene) = make_controller();
        let mut clock = FrameClock::new();
        clock.advance(0.02);
        controller.tick(&touch(TouchPhase::Began), &clock, None, &mut scene);

        clock.advance(0.02);
        controller.tick(&drag(2.0, 1.0), &clock, None, &mut scene);
        assert_eq!(controller.phase(), GesturePhase::TouchHolding);

        clock.advance(0.02);
        controller.tick(&drag(12.0, 0.0), &clock, None, &mut scene);
        assert_eq!(controller.phase(), GesturePhase::Dragging);
    }

    #[test]
    fn test_drag_rotates_about_world_axes() {
        let (mut controller, mut scene) = make_controller();
        let mut clock = FrameClock::new();
        clock.advance(0.02);
        controller.tick(&touch(TouchPhase::Began), &clock, None, &mut scene);

        clock.advance(0.02);
        let events = controller.tick(&drag(30.0, 0.0), &clock, None, &mut scene);
        assert_eq!(events.len(), 1);

        // -30 * 0.3 degrees of yaw
        let expected = arview_core::axis_angle_degrees(&Vector3f::y(), -9.0);
        assert_relative_eq!(controller.target().rotation, expected, epsilon = 1e-5);
    }

    #[test]
    fn test_rotation_disabled() {
        let config = GestureConfig {
            enable_rotation: false,
            ..GestureConfig::default()
        };
        let mut scene = InMemoryScene::new();
        let mut controller = InteractiveObjectController::new(OBJECT, Transform::identity(), config).unwrap();
        controller.initialize(&mut scene);

        let mut clock = FrameClock::new();
        clock.advance(0.02);
        let events = controller.tick(&drag(30.0, 30.0), &clock, None, &mut scene);
        assert!(events.is_empty());
        assert_eq!(controller.target().rotation, Transform::identity().rotation);
    }

    #[test]
    fn test_swap_ignored_without_alternate() {
        let mut scene = InMemoryScene::new();
        let mut controller =
            InteractiveObjectController::new(OBJECT, Transform::identity(), GestureConfig::default()).unwrap();
        controller.initialize(&mut scene);
        assert!(scene.is_visible(OBJECT));
        scene.clear_history();

        let mut clock = FrameClock::new();
        clock.advance(0.1);
        controller.tick(&touch(TouchPhase::Began), &clock, None, &mut scene);
        for _ in 0..12 {
            clock.advance(0.1);
            let events = controller.tick(&touch(TouchPhase::Stationary), &clock, None, &mut scene);
            assert!(events.is_empty());
        }
        assert!(!controller.is_showing_alternate());
        assert!(scene.history().is_empty());
    }

    #[test]
    fn test_more_than_two_touches_is_ignored() {
        let (mut controller, mut scene) = make_controller();
        let mut clock = FrameClock::new();
        clock.advance(0.02);

        let touches: Vec<Touch> = (0..3)
            .map(|i| Touch::new(i, Vector2f::new(i as f32 * 50.0, 0.0), Vector2f::new(5.0, 5.0), TouchPhase::Moved))
            .collect();
        let events = controller.tick(&InputSample::from(touches), &clock, None, &mut scene);
        assert!(events.is_empty());
        assert_eq!(controller.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_second_finger_cancels_hold() {
        let (mut controller, mut scene) = make_controller();
        let mut clock = FrameClock::new();
        clock.advance(0.1);
        controller.tick(&touch(TouchPhase::Began), &clock, None, &mut scene);

        clock.advance(0.1);
        let pair = InputSample::pair(
            Touch::at(0, Vector2f::new(100.0, 100.0), TouchPhase::Stationary),
            Touch::at(1, Vector2f::new(200.0, 100.0), TouchPhase::Began),
        );
        controller.tick(&pair, &clock, None, &mut scene);
        assert_eq!(controller.phase(), GesturePhase::TwoFingerGesture);

        // Back to one stationary finger well past the threshold: no swap
        for _ in 0..10 {
            clock.advance(0.1);
            controller.tick(&touch(TouchPhase::Stationary), &clock, None, &mut scene);
        }
        assert!(!controller.is_showing_alternate());
    }
}

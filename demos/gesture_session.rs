//! Gesture Session Example
//!
//! Replays a scripted touch session against a headless scene and prints what
//! the interactive object controller did with it:
//! - one finger drag to rotate
//! - pinch to zoom past the scale limit
//! - two finger pan
//! - press and hold to preview the alternate model
//! - double tap to reset
//!
//! Run with `RUST_LOG=debug` to see the controller's own log output.

use anyhow::Result;
use arview_core::{
    Camera, CameraAxes, FrameClock, InMemoryScene, InputSample, ObjectId, Touch, TouchPhase, Transform,
    TransformHost, Vector2f,
};
use arview_gestures::{GestureConfig, GestureEvent, InteractiveObjectController};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Replay a scripted touch session")]
struct Args {
    /// JSON gesture config; defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulated frame rate
    #[arg(long, default_value_t = 60.0)]
    fps: f32,

    /// Pan along world X/Z instead of the camera plane
    #[arg(long)]
    no_camera: bool,
}

const PRIMARY: ObjectId = ObjectId(1);
const ALTERNATE: ObjectId = ObjectId(2);

struct Replay {
    controller: InteractiveObjectController<Transform>,
    scene: InMemoryScene,
    clock: FrameClock,
    camera: Option<Camera>,
    frame_time: f32,
}

impl Replay {
    fn frame(&mut self, input: InputSample) -> Vec<GestureEvent> {
        self.clock.advance(self.frame_time);
        let camera = self.camera.as_ref().map(|c| c as &dyn CameraAxes);
        self.controller.tick(&input, &self.clock, camera, &mut self.scene)
    }

    fn frames(&mut self, count: usize, input: impl Fn(usize) -> InputSample) -> Vec<GestureEvent> {
        (0..count).flat_map(|i| self.frame(input(i))).collect()
    }

    fn report(&self, label: &str, events: &[GestureEvent]) {
        let target = self.controller.target();
        println!("\n{}", label);
        println!("  events:   {}", events.len());
        for event in events.iter().filter(|e| !matches!(e, GestureEvent::Rotated { .. })) {
            println!("    {:?}", event);
        }
        println!("  position: {:?}", target.world_position());
        println!("  scale:    {:?}", target.local_scale());
        println!("  phase:    {:?}", self.controller.phase());
        println!(
            "  visible:  primary={} alternate={}",
            self.scene.is_visible(PRIMARY),
            self.scene.is_visible(ALTERNATE)
        );
    }
}

fn one(phase: TouchPhase, delta: Vector2f) -> InputSample {
    InputSample::single(Touch::new(0, Vector2f::new(540.0, 960.0), delta, phase))
}

fn two(spread: f32, shift: Vector2f) -> InputSample {
    let half = Vector2f::new(spread / 2.0, 0.0);
    InputSample::pair(
        Touch::new(0, Vector2f::new(400.0, 960.0), shift - half, TouchPhase::Moved),
        Touch::new(1, Vector2f::new(680.0, 960.0), shift + half, TouchPhase::Moved),
    )
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GestureConfig::from_json_file(path)?,
        None => GestureConfig::default(),
    };

    println!("arview Gesture Session");
    println!("======================");
    println!("hold threshold {:.2}s, scale limits [{}, {}]", config.hold_threshold, config.min_scale, config.max_scale);

    let mut scene = InMemoryScene::new();
    let mut controller = InteractiveObjectController::new(PRIMARY, Transform::identity(), config)?
        .with_models(PRIMARY, Some(ALTERNATE));
    controller.initialize(&mut scene);

    let mut replay = Replay {
        controller,
        scene,
        clock: FrameClock::new(),
        camera: if args.no_camera { None } else { Some(Camera::default()) },
        frame_time: 1.0 / args.fps.max(1.0),
    };

    let zero = Vector2f::zeros();

    let mut events = replay.frames(1, |_| one(TouchPhase::Began, zero));
    events.extend(replay.frames(30, |_| one(TouchPhase::Moved, Vector2f::new(8.0, 3.0))));
    events.extend(replay.frames(1, |_| one(TouchPhase::Ended, zero)));
    replay.report("Drag to rotate", &events);

    let events = replay.frames(20, |_| two(12.0, zero));
    replay.report("Pinch to zoom", &events);

    let events = replay.frames(20, |_| two(0.0, Vector2f::new(6.0, -4.0)));
    replay.report("Two finger pan", &events);

    let hold_frames = (replay.controller.config().hold_threshold / replay.frame_time).ceil() as usize + 10;
    let mut events = replay.frames(1, |_| InputSample::empty());
    events.extend(replay.frames(1, |_| one(TouchPhase::Began, zero)));
    events.extend(replay.frames(hold_frames, |_| one(TouchPhase::Stationary, zero)));
    replay.report("Press and hold", &events);

    let mut events = replay.frames(1, |_| one(TouchPhase::Ended, zero));
    events.extend(replay.frames(10, |_| InputSample::empty()));
    replay.report("Release", &events);

    let taps = replay.frames(4, |i| {
        let phase = if i % 2 == 0 { TouchPhase::Began } else { TouchPhase::Ended };
        one(phase, zero)
    });
    replay.report("Double tap", &taps);

    println!("\nSession completed successfully!");
    Ok(())
}

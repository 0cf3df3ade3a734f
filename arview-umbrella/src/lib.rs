//! # arview
//!
//! Touch-driven controllers for model viewers in AR and 3D scenes.
//!
//! This is the umbrella crate that provides convenient access to all arview
//! functionality. You can use this crate to get everything in one place, or use
//! individual crates for more granular control over dependencies.
//!
//! ## Features
//!
//! - **Core**: Transforms, touch input, host traits, deferred transitions
//! - **Gallery**: Cycle through display models with per-model audio
//! - **Gestures**: Rotate, pinch-zoom, pan, double-tap reset and hold-to-swap
//!
//! ## Quick Start
//!
//! ```rust
//! use arview::prelude::*;
//!
//! let mut scene = InMemoryScene::new();
//! let mut clock = FrameClock::new();
//!
//! let mut controller = InteractiveObjectController::new(
//!     ObjectId(1),
//!     Transform::identity(),
//!     GestureConfig::default(),
//! )
//! .unwrap();
//! controller.initialize(&mut scene);
//!
//! // One finger dragging to the right
//! clock.advance(0.02);
//! let drag = InputSample::single(Touch::new(
//!     0,
//!     Vector2f::new(200.0, 300.0),
//!     Vector2f::new(12.0, 0.0),
//!     TouchPhase::Moved,
//! ));
//! let events = controller.tick(&drag, &clock, None, &mut scene);
//! assert_eq!(events.len(), 1);
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables gallery and gestures
//! - `gallery`: Model gallery controller
//! - `gestures`: Interactive object controller
//! - `all`: Enables all features

// Re-export core functionality
pub use arview_core::*;

// Re-export sub-crates
#[cfg(feature = "gallery")]
pub use arview_gallery as gallery;

#[cfg(feature = "gestures")]
pub use arview_gestures as gestures;

/// Convenient imports for common use cases
pub mod prelude {
    pub use arview_core::*;

    #[cfg(feature = "gallery")]
    pub use arview_gallery::*;

    #[cfg(feature = "gestures")]
    pub use arview_gestures::*;
}

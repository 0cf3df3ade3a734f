//! # arview gallery
//!
//! A controller that cycles through a list of display models, toggles an
//! info panel, and plays at most one model audio clip at a time.

pub mod gallery;

pub use gallery::*;

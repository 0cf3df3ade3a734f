//! In-memory scene host
//!
//! Tracks visibility and audio playback for hosts that have no engine behind
//! them (headless replays, tests). Every visibility write is also appended to
//! a log so callers can count how often an object was toggled.

use crate::traits::{AudioHost, ClipId, ObjectId, VisibilityHost};
use log::trace;
use std::collections::{HashMap, HashSet};

/// One recorded `set_visible` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityChange {
    pub object: ObjectId,
    pub visible: bool,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryScene {
    visible: HashMap<ObjectId, bool>,
    playing: HashSet<ClipId>,
    history: Vec<VisibilityChange>,
    play_count: HashMap<ClipId, usize>,
}

impl InMemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current visibility; objects never touched count as visible
    pub fn is_visible(&self, object: ObjectId) -> bool {
        self.visible.get(&object).copied().unwrap_or(true)
    }

    /// Objects currently visible among `objects`
    pub fn visible_among(&self, objects: &[ObjectId]) -> Vec<ObjectId> {
        objects
            .iter()
            .copied()
            .filter(|o| self.is_visible(*o))
            .collect()
    }

    /// Clips currently playing
    pub fn playing_clips(&self) -> Vec<ClipId> {
        let mut clips: Vec<_> = self.playing.iter().copied().collect();
        clips.sort();
        clips
    }

    /// Number of `play` calls received for `clip`
    pub fn play_count(&self, clip: ClipId) -> usize {
        self.play_count.get(&clip).copied().unwrap_or(0)
    }

    pub fn history(&self) -> &[VisibilityChange] {
        &self.history
    }

    /// Number of times `object` was set to `visible`
    pub fn count_changes(&self, object: ObjectId, visible: bool) -> usize {
        self.history
            .iter()
            .filter(|c| c.object == object && c.visible == visible)
            .count()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl VisibilityHost for InMemoryScene {
    fn set_visible(&mut self, object: ObjectId, visible: bool) {
        trace!("object {} visible = {}", object.0, visible);
        self.visible.insert(object, visible);
        self.history.push(VisibilityChange { object, visible });
    }
}

impl AudioHost for InMemoryScene {
    fn play(&mut self, clip: ClipId) {
        trace!("clip {} play", clip.0);
        self.playing.insert(clip);
        *self.play_count.entry(clip).or_insert(0) += 1;
    }

    fn stop(&mut self, clip: ClipId) {
        trace!("clip {} stop", clip.0);
        self.playing.remove(&clip);
    }

    fn is_playing(&self, clip: ClipId) -> bool {
        self.playing.contains(&clip)
    }
}

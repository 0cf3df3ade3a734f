//! Model gallery controller
//!
//! Exactly one model of the list is visible at a time. Navigation wraps in
//! both directions, and the controller remembers the one clip it started so
//! it can stop it when the panel closes or the model changes.

use arview_core::{AudioHost, ClipId, ObjectId, VisibilityHost};
use log::debug;

/// Anything that can show objects and play clips
pub trait GalleryHost: VisibilityHost + AudioHost {}

impl<T: VisibilityHost + AudioHost> GalleryHost for T {}

/// A model in the gallery and its optional narration clip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayItem {
    pub model: ObjectId,
    pub audio: Option<ClipId>,
}

impl DisplayItem {
    pub fn new(model: ObjectId) -> Self {
        Self { model, audio: None }
    }

    pub fn with_audio(model: ObjectId, audio: ClipId) -> Self {
        Self {
            model,
            audio: Some(audio),
        }
    }
}

/// Navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    pub fn offset(&self) -> isize {
        match self {
            Direction::Next => 1,
            Direction::Previous => -1,
        }
    }
}

/// Outcome of [`ModelGalleryController::toggle_audio_for_current`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioToggle {
    Started(ClipId),
    Stopped(ClipId),
}

/// Mutable gallery state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GalleryState {
    /// Always `< items.len()` when the list is non-empty
    pub visible_index: usize,
    pub info_panel_open: bool,
    /// The clip this controller last started, if any
    pub active_audio: Option<ClipId>,
}

#[derive(Debug, Clone)]
pub struct ModelGalleryController {
    items: Vec<DisplayItem>,
    info_panel: Option<ObjectId>,
    state: GalleryState,
}

impl ModelGalleryController {
    /// Create a controller over `items` with an optional info panel object
    pub fn new(items: Vec<DisplayItem>, info_panel: Option<ObjectId>) -> Self {
        Self {
            items,
            info_panel,
            state: GalleryState::default(),
        }
    }

    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn visible_index(&self) -> usize {
        self.state.visible_index
    }

    pub fn is_info_panel_open(&self) -> bool {
        self.state.info_panel_open
    }

    pub fn active_audio(&self) -> Option<ClipId> {
        self.state.active_audio
    }

    /// The currently visible item, `None` for an empty gallery
    pub fn current(&self) -> Option<&DisplayItem> {
        self.items.get(self.state.visible_index)
    }

    /// Hide everything, then show the first item
    pub fn initialize<H: GalleryHost>(&mut self, host: &mut H) {
        if let Some(panel) = self.info_panel {
            host.set_visible(panel, false);
        }
        self.state.info_panel_open = false;

        for item in &self.items {
            host.set_visible(item.model, false);
        }

        self.state.visible_index = 0;
        self.state.active_audio = None;

        if let Some(first) = self.items.first() {
            host.set_visible(first.model, true);
        }
        debug!("gallery initialized with {} models", self.items.len());
    }

    /// Open or close the info panel; closing it silences the active clip
    pub fn toggle_info_panel<H: GalleryHost>(&mut self, host: &mut H) -> bool {
        self.state.info_panel_open = !self.state.info_panel_open;
        if let Some(panel) = self.info_panel {
            host.set_visible(panel, self.state.info_panel_open);
        }

        if !self.state.info_panel_open {
            self.stop_active_audio(host);
        }
        debug!("info panel open = {}", self.state.info_panel_open);
        self.state.info_panel_open
    }

    /// Show the neighbouring model, wrapping at both ends
    ///
    /// Returns the new visible index, or `None` for an empty gallery.
    pub fn advance<H: GalleryHost>(&mut self, host: &mut H, direction: Direction) -> Option<usize> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }

        let current = self.state.visible_index;
        host.set_visible(self.items[current].model, false);

        let next = (current as isize + direction.offset()).rem_euclid(len as isize) as usize;
        self.state.visible_index = next;
        host.set_visible(self.items[next].model, true);

        self.stop_active_audio(host);
        debug!("gallery switched from model {} to {}", current, next);
        Some(next)
    }

    /// Right button
    pub fn next<H: GalleryHost>(&mut self, host: &mut H) -> Option<usize> {
        self.advance(host, Direction::Next)
    }

    /// Left button
    pub fn previous<H: GalleryHost>(&mut self, host: &mut H) -> Option<usize> {
        self.advance(host, Direction::Previous)
    }

    /// Play or stop the current model's clip
    ///
    /// Starting a clip stops any other clip this controller started, so at
    /// most one is ever playing. Items without audio are a no-op.
    pub fn toggle_audio_for_current<H: GalleryHost>(&mut self, host: &mut H) -> Option<AudioToggle> {
        let clip = match self.current().and_then(|item| item.audio) {
            Some(clip) => clip,
            None => {
                debug!("current model has no audio");
                return None;
            }
        };

        if host.is_playing(clip) {
            host.stop(clip);
            if self.state.active_audio == Some(clip) {
                self.state.active_audio = None;
            }
            debug!("stopped clip {}", clip.0);
            return Some(AudioToggle::Stopped(clip));
        }

        if self.state.active_audio != Some(clip) {
            self.stop_active_audio(host);
        }
        host.play(clip);
        self.state.active_audio = Some(clip);
        debug!("playing clip {}", clip.0);
        Some(AudioToggle::Started(clip))
    }

    fn stop_active_audio<H: GalleryHost>(&mut self, host: &mut H) {
        if let Some(active) = self.state.active_audio.take() {
            if host.is_playing(active) {
                host.stop(active);
                debug!("stopped clip {}", active.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arview_core::InMemoryScene;

    fn make_items(count: u32) -> Vec<DisplayItem> {
        (0..count)
            .map(|i| DisplayItem::with_audio(ObjectId(i), ClipId(100 + i)))
            .collect()
    }

    fn make_gallery(count: u32) -> (ModelGalleryController, InMemoryScene) {
        let mut scene = InMemoryScene::new();
        let mut gallery = ModelGalleryController::new(make_items(count), Some(ObjectId(999)));
        gallery.initialize(&mut scene);
        (gallery, scene)
    }

    fn visible_models(gallery: &ModelGalleryController, scene: &InMemoryScene) -> Vec<ObjectId> {
        let models: Vec<_> = gallery.items().iter().map(|i| i.model).collect();
        scene.visible_among(&models)
    }

    #[test]
    fn test_initialize_shows_only_first() {
        let (gallery, scene) = make_gallery(3);
        assert_eq!(gallery.visible_index(), 0);
        assert_eq!(visible_models(&gallery, &scene), vec![ObjectId(0)]);
        assert!(!scene.is_visible(ObjectId(999)));
        assert!(!gallery.is_info_panel_open());
    }

    #[test]
    fn test_advance_wraps_both_ways() {
        let (mut gallery, mut scene) = make_gallery(3);

        assert_eq!(gallery.previous(&mut scene), Some(2));
        assert_eq!(visible_models(&gallery, &scene), vec![ObjectId(2)]);

        assert_eq!(gallery.next(&mut scene), Some(0));
        assert_eq!(gallery.next(&mut scene), Some(1));
        assert_eq!(visible_models(&gallery, &scene), vec![ObjectId(1)]);
    }

    #[test]
    fn test_single_item_advance_stays_visible() {
        let (mut gallery, mut scene) = make_gallery(1);
        assert_eq!(gallery.next(&mut scene), Some(0));
        assert!(scene.is_visible(ObjectId(0)));
    }

    #[test]
    fn test_empty_gallery_is_noop() {
        let mut scene = InMemoryScene::new();
        let mut gallery = ModelGalleryController::new(Vec::new(), None);
        gallery.initialize(&mut scene);

        assert!(scene.history().is_empty());
        assert_eq!(gallery.next(&mut scene), None);
        assert_eq!(gallery.previous(&mut scene), None);
        assert_eq!(gallery.toggle_audio_for_current(&mut scene), None);
        assert!(scene.history().is_empty());
    }

    #[test]
    fn test_toggle_audio() {
        let (mut gallery, mut scene) = make_gallery(2);

        assert_eq!(
            gallery.toggle_audio_for_current(&mut scene),
            Some(AudioToggle::Started(ClipId(100)))
        );
        assert!(scene.is_playing(ClipId(100)));
        assert_eq!(gallery.active_audio(), Some(ClipId(100)));

        assert_eq!(
            gallery.toggle_audio_for_current(&mut scene),
            Some(AudioToggle::Stopped(ClipId(100)))
        );
        assert!(!scene.is_playing(ClipId(100)));
        assert_eq!(gallery.active_audio(), None);
    }

    #[test]
    fn test_item_without_audio_is_noop() {
        let mut scene = InMemoryScene::new();
        let mut gallery = ModelGalleryController::new(vec![DisplayItem::new(ObjectId(0))], None);
        gallery.initialize(&mut scene);

        assert_eq!(gallery.toggle_audio_for_current(&mut scene), None);
        assert!(scene.playing_clips().is_empty());
    }

    #[test]
    fn test_advance_stops_previous_audio() {
        let (mut gallery, mut scene) = make_gallery(3);
        gallery.toggle_audio_for_current(&mut scene);
        gallery.next(&mut scene);

        assert!(scene.playing_clips().is_empty());
        assert_eq!(gallery.active_audio(), None);

        gallery.toggle_audio_for_current(&mut scene);
        assert_eq!(scene.playing_clips(), vec![ClipId(101)]);
    }

    #[test]
    fn test_advance_always_silences_previous_clip() {
        let (mut gallery, mut scene) = make_gallery(2);

        gallery.toggle_audio_for_current(&mut scene);
        assert_eq!(scene.playing_clips(), vec![ClipId(100)]);

        gallery.next(&mut scene);
        assert!(scene.playing_clips().is_empty());

        gallery.toggle_audio_for_current(&mut scene);
        assert_eq!(scene.playing_clips(), vec![ClipId(101)]);
        assert_eq!(gallery.active_audio(), Some(ClipId(101)));
    }

    #[test]
    fn test_initialize_closes_visible_panel() {
        let mut scene = InMemoryScene::new();
        scene.set_visible(ObjectId(999), true);

        let mut gallery = ModelGalleryController::new(make_items(2), Some(ObjectId(999)));
        gallery.initialize(&mut scene);
        assert!(!scene.is_visible(ObjectId(999)));
        assert!(!gallery.is_info_panel_open());

        // First press opens a panel that really was shut
        assert!(gallery.toggle_info_panel(&mut scene));
        assert!(scene.is_visible(ObjectId(999)));
    }

    #[test]
    fn test_reinitialize_closes_open_panel() {
        let (mut gallery, mut scene) = make_gallery(2);
        gallery.toggle_info_panel(&mut scene);
        gallery.next(&mut scene);

        gallery.initialize(&mut scene);
        assert!(!gallery.is_info_panel_open());
        assert!(!scene.is_visible(ObjectId(999)));
        assert_eq!(visible_models(&gallery, &scene), vec![ObjectId(0)]);
    }

    #[test]
    fn test_closing_info_panel_stops_audio() {
        let (mut gallery, mut scene) = make_gallery(2);

        assert!(gallery.toggle_info_panel(&mut scene));
        assert!(scene.is_visible(ObjectId(999)));

        gallery.toggle_audio_for_current(&mut scene);
        assert!(scene.is_playing(ClipId(100)));

        assert!(!gallery.toggle_info_panel(&mut scene));
        assert!(!scene.is_visible(ObjectId(999)));
        assert!(!scene.is_playing(ClipId(100)));
    }

    #[test]
    fn test_opening_info_panel_keeps_audio() {
        let (mut gallery, mut scene) = make_gallery(2);
        gallery.toggle_audio_for_current(&mut scene);
        gallery.toggle_info_panel(&mut scene);
        assert!(scene.is_playing(ClipId(100)));
    }
}

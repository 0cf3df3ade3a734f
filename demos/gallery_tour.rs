//! Gallery Tour Example
//!
//! Walks a model gallery forwards and backwards, pressing the speaker and
//! info buttons along the way, and prints which model and clip are live.

use anyhow::Result;
use arview_core::{ClipId, InMemoryScene, ObjectId};
use arview_gallery::{DisplayItem, ModelGalleryController};
use clap::Parser;
use log::info;

#[derive(Parser, Debug)]
#[command(about = "Step through a model gallery")]
struct Args {
    /// Number of models in the gallery
    #[arg(long, default_value_t = 4)]
    models: u32,
}

const INFO_PANEL: ObjectId = ObjectId(0);

fn describe(gallery: &ModelGalleryController, scene: &InMemoryScene, action: &str) {
    let playing: Vec<u32> = scene.playing_clips().iter().map(|c| c.0).collect();
    println!(
        "{:<14} model {:>2}  panel {:<5}  playing {:?}",
        action,
        gallery.visible_index(),
        if gallery.is_info_panel_open() { "open" } else { "shut" },
        playing
    );
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Every other model carries a narration clip
    let items = (1..=args.models)
        .map(|i| {
            if i % 2 == 1 {
                DisplayItem::with_audio(ObjectId(i), ClipId(i))
            } else {
                DisplayItem::new(ObjectId(i))
            }
        })
        .collect();

    let mut scene = InMemoryScene::new();
    let mut gallery = ModelGalleryController::new(items, Some(INFO_PANEL));
    gallery.initialize(&mut scene);
    info!("gallery ready with {} models", args.models);

    println!("arview Gallery Tour");
    println!("===================");
    describe(&gallery, &scene, "start");

    gallery.toggle_info_panel(&mut scene);
    describe(&gallery, &scene, "info");

    gallery.toggle_audio_for_current(&mut scene);
    describe(&gallery, &scene, "speaker");

    for _ in 0..args.models {
        gallery.next(&mut scene);
        gallery.toggle_audio_for_current(&mut scene);
        describe(&gallery, &scene, "next+speaker");
    }

    gallery.previous(&mut scene);
    describe(&gallery, &scene, "previous");

    gallery.toggle_audio_for_current(&mut scene);
    describe(&gallery, &scene, "speaker");

    gallery.toggle_info_panel(&mut scene);
    describe(&gallery, &scene, "info");

    println!("\nTour completed successfully!");
    Ok(())
}

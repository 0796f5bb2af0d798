//! Shared in-memory fixtures for the integration tests.

use std::sync::{Mutex, MutexGuard};

use atlasplay_rs::prelude::*;

// Tests that compare the live image-handle count must not interleave with
// other atlas-loading tests in this binary.
static HANDLE_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests that observe `ImageHandle::live_count`.
pub fn handle_lock() -> MutexGuard<'static, ()> {
	HANDLE_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Encodes a blank RGBA PNG of the given size.
pub fn png_bytes(w: u32, h: u32) -> Vec<u8> {
	let image = image::DynamicImage::ImageRgba8(image::RgbaImage::new(w, h));
	let mut buffer = std::io::Cursor::new(Vec::new());
	image.write_to(&mut buffer, image::ImageFormat::Png).expect("png encode");
	buffer.into_inner()
}

/// Builds a manifest with the given frame objects.
pub fn manifest(sheet_w: u32, sheet_h: u32, frames: &[String]) -> String {
	format!(
		r#"{{
			"textures": [{{
				"image": "sheet.png",
				"format": "RGBA8888",
				"size": {{"w": {sheet_w}, "h": {sheet_h}}},
				"scale": 1,
				"frames": [{}]
			}}]
		}}"#,
		frames.join(",")
	)
}

/// One untrimmed frame occupying a 16x16 cell at the given position.
pub fn plain_frame(name: &str, x: u32, y: u32) -> String {
	format!(
		r#"{{
			"filename": "{name}",
			"rotated": false,
			"trimmed": false,
			"sourceSize": {{"w": 16, "h": 16}},
			"frame": {{"x": {x}, "y": {y}, "w": 16, "h": 16}}
		}}"#
	)
}

/// A trimmed frame: 64x64 logical sprite, surviving pixels in a 16x16 box.
pub fn trimmed_frame(name: &str, x: u32, y: u32, trim_x: u32, trim_y: u32) -> String {
	format!(
		r#"{{
			"filename": "{name}",
			"rotated": false,
			"trimmed": true,
			"sourceSize": {{"w": 64, "h": 64}},
			"spriteSourceSize": {{"x": {trim_x}, "y": {trim_y}, "w": 16, "h": 16}},
			"frame": {{"x": {x}, "y": {y}, "w": 16, "h": 16}}
		}}"#
	)
}

/// Loads a 5-frame walk-cycle atlas with shuffled manifest order, so the
/// sorted sequence is `walk_1 .. walk_10`.
pub fn walk_atlas() -> Atlas {
	let frames = [
		plain_frame("walk_10.png", 0, 0),
		plain_frame("walk_2.png", 16, 0),
		plain_frame("walk_1.png", 32, 0),
		plain_frame("walk_04.png", 48, 0),
		plain_frame("walk_3.png", 0, 16),
	];
	let json = manifest(64, 32, &frames);
	Atlas::load(json.as_bytes(), &png_bytes(64, 32)).expect("walk atlas loads")
}

/// Builds a controller over `atlas`'s sequence plus the probing scheduler.
pub fn player_for(atlas: &Atlas) -> (PlayerController, ManualScheduler) {
	let scheduler = ManualScheduler::new();
	let sequence = atlas.sequence().clone();
	let mut player = PlayerController::new(
		Box::new(scheduler.clone()),
		Box::new(move |index| sequence.get(index).cloned()),
	);
	player.initialize(atlas.frame_count());
	(player, scheduler)
}

//! End-to-end load pipeline checks.

use atlasplay_rs::prelude::*;

use crate::fixture;

#[test_log::test]
fn load_produces_naturally_sorted_sequence() {
	let _guard = fixture::handle_lock();
	let atlas = fixture::walk_atlas();
	let names: Vec<_> = atlas.sequence().iter().map(|f| f.filename.as_str()).collect();
	assert_eq!(
		names,
		vec!["walk_1.png", "walk_2.png", "walk_3.png", "walk_04.png", "walk_10.png"]
	);
	assert_eq!(atlas.frame_count(), 5);
	assert!(atlas.warnings().is_empty());
}

#[test]
fn frame_lookup_follows_sequence_order() {
	let _guard = fixture::handle_lock();
	let atlas = fixture::walk_atlas();
	assert_eq!(atlas.frame(0).map(|f| f.filename.as_str()), Some("walk_1.png"));
	assert_eq!(atlas.frame(4).map(|f| f.filename.as_str()), Some("walk_10.png"));
	assert!(atlas.frame(5).is_none());
}

#[test]
fn out_of_bounds_frame_is_fatal_and_named() {
	let _guard = fixture::handle_lock();
	// 48 + 16 exceeds the 32-pixel-wide decoded image.
	let frames = [
		fixture::plain_frame("ok.png", 0, 0),
		fixture::plain_frame("broken.png", 48, 0),
	];
	let json = fixture::manifest(32, 32, &frames);
	let err = Atlas::load(json.as_bytes(), &fixture::png_bytes(32, 32)).unwrap_err();
	match err {
		AtlasError::FrameBounds {
			index,
			ref filename,
			..
		} => {
			assert_eq!(index, 1);
			assert_eq!(filename, "broken.png");
		}
		ref other => panic!("unexpected error: {other:?}"),
	}
	let message = err.to_string();
	assert!(message.contains("broken.png"));
	assert!(message.contains("frame 1"));
}

#[test_log::test]
fn declared_size_mismatch_warns_but_loads() {
	let _guard = fixture::handle_lock();
	let frames = [fixture::plain_frame("a.png", 0, 0)];
	// Manifest claims 128x128, actual bitmap is 64x64.
	let json = fixture::manifest(128, 128, &frames);
	let atlas = Atlas::load(json.as_bytes(), &fixture::png_bytes(64, 64)).expect("lenient load");
	assert!(matches!(atlas.warnings(), [LoadWarning::SheetSizeMismatch { .. }]));
}

#[test]
fn rejected_loads_leak_no_image_handles() {
	let _guard = fixture::handle_lock();
	let before = ImageHandle::live_count();

	let attempts: Vec<(Vec<u8>, Vec<u8>)> = vec![
		// Malformed JSON.
		(b"[oops".to_vec(), fixture::png_bytes(8, 8)),
		// Structurally invalid manifest.
		(br#"{"textures": []}"#.to_vec(), fixture::png_bytes(8, 8)),
		// Undecodable image.
		(
			fixture::manifest(8, 8, &[fixture::plain_frame("a.png", 0, 0)]).into_bytes(),
			b"not an image".to_vec(),
		),
		// Bounds violation after a successful decode.
		(
			fixture::manifest(8, 8, &[fixture::plain_frame("a.png", 0, 0)]).into_bytes(),
			fixture::png_bytes(4, 4),
		),
	];
	for (manifest_bytes, image_bytes) in attempts {
		assert!(Atlas::load(&manifest_bytes, &image_bytes).is_err());
		assert_eq!(ImageHandle::live_count(), before);
	}
}

#[test]
fn dropping_the_atlas_releases_the_handle() {
	let _guard = fixture::handle_lock();
	let before = ImageHandle::live_count();
	let atlas = fixture::walk_atlas();
	assert_eq!(ImageHandle::live_count(), before + 1);
	drop(atlas);
	assert_eq!(ImageHandle::live_count(), before);
}

//! Stage adapter driven through the notification channel.

use std::cell::RefCell;
use std::rc::Rc;

use atlasplay_rs::prelude::*;

use crate::fixture;

#[test]
fn small_frames_render_at_native_scale_in_the_center() {
	let _guard = fixture::handle_lock();
	let atlas = fixture::walk_atlas();
	let mut stage = Stage::new(Viewport::default());
	stage.fit(atlas.sequence());

	// 16x16 sources fit the 760x560 available area without downscaling.
	assert_eq!(stage.scale_factor(), 1.0);
	let placement = stage.place(atlas.frame(0).expect("frame 0"));
	assert_eq!(placement.position, Point::new(400.0, 300.0));
}

#[test]
fn trimmed_frames_are_recentered_through_the_event_channel() {
	let _guard = fixture::handle_lock();
	// Two frames of a 64x64 logical sprite; the surviving 16x16 pixels sit
	// at different corners of the logical box.
	let frames = [
		fixture::trimmed_frame("t_1.png", 0, 0, 0, 0),
		fixture::trimmed_frame("t_2.png", 16, 0, 48, 48),
	];
	let json = fixture::manifest(64, 16, &frames);
	let atlas = Atlas::load(json.as_bytes(), &fixture::png_bytes(64, 16)).expect("trim atlas");

	let mut stage = Stage::new(Viewport::default());
	stage.fit(atlas.sequence());
	let (mut player, _scheduler) = fixture::player_for(&atlas);

	let placements: Rc<RefCell<Vec<FramePlacement>>> = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&placements);
	player.subscribe(move |event| {
		if let Some(placement) = stage.apply(event) {
			sink.borrow_mut().push(placement);
		}
	});

	player.set_frame(0);
	player.set_frame(1);

	let placements = placements.borrow();
	assert_eq!(placements.len(), 2);
	// Trim box center (8, 8) vs logical center (32, 32): offset (-24, -24).
	assert_eq!(placements[0].position, Point::new(376.0, 276.0));
	// Trim box center (56, 56): offset (+24, +24).
	assert_eq!(placements[1].position, Point::new(424.0, 324.0));
}

#[test]
fn oversized_sources_share_one_downscale_factor() {
	let _guard = fixture::handle_lock();
	// One giant source dictates the scale for everything.
	let frames = [
		format!(
			r#"{{
				"filename": "big.png",
				"sourceSize": {{"w": 1520, "h": 560}},
				"frame": {{"x": 0, "y": 0, "w": 16, "h": 16}}
			}}"#
		),
		fixture::plain_frame("small.png", 16, 0),
	];
	let json = fixture::manifest(32, 16, &frames);
	let atlas = Atlas::load(json.as_bytes(), &fixture::png_bytes(32, 16)).expect("atlas");

	let mut stage = Stage::new(Viewport::default());
	stage.fit(atlas.sequence());
	assert!((stage.scale_factor() - 0.5).abs() < 1e-6);

	// The shared factor applies to the small frame too.
	let placement = stage.place(atlas.frame(1).expect("small frame"));
	assert_eq!(placement.scale, stage.scale_factor());
}
